// src/chart/mod.rs
//
// Each builder returns a Plotly figure: `{"data": [...traces], "layout": {...}}`.
// The page hands the JSON straight to `Plotly.newPlot`.

pub mod bar;
pub mod boxplot;
pub mod facet;
pub mod scatter;
pub mod table;

use serde::Serialize;
use serde_json::{json, Value};

use crate::ingest::Sex;

pub use bar::agreement_bar;
pub use boxplot::{sex_box, BoxField};
pub use facet::prestige_facets;
pub use scatter::prestige_scatter;
pub use table::summary_table;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self { data, layout }
    }
}

/// Default categorical colors, assigned in `Sex` order.
pub fn sex_color(sex: Sex) -> &'static str {
    match sex {
        Sex::Female => "#636efa",
        Sex::Male => "#EF553B",
    }
}

/// `{"title": {"text": ...}}` for an axis.
pub fn axis_title(text: &str) -> Value {
    json!({ "title": { "text": text } })
}
