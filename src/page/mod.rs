// src/page/mod.rs

pub mod html;
pub mod narrative;

use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

use crate::chart::{self, BoxField, Figure};
use crate::Report;

pub use html::render_html;

pub const PAGE_TITLE: &str = "GSS Survey Analysis";
pub const STYLESHEET: &str = "https://codepen.io/chriddyp/pen/bWLwgP.css";

/// One node of the page tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading { level: u8, text: String },
    Markdown { source: String },
    Graph { id: String, figure: Figure },
    Div {
        style: BTreeMap<String, String>,
        children: Vec<Component>,
    },
}

impl Component {
    pub fn heading(level: u8, text: &str) -> Self {
        Component::Heading {
            level,
            text: text.to_string(),
        }
    }

    pub fn graph(id: &str, figure: Figure) -> Self {
        Component::Graph {
            id: id.to_string(),
            figure,
        }
    }

    /// Half-width column floated to `side`.
    pub fn half_column(side: &str, children: Vec<Component>) -> Self {
        let style = [("width", "48%"), ("float", side)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Component::Div { style, children }
    }
}

/// The full dashboard description, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub stylesheets: Vec<String>,
    pub children: Vec<Component>,
}

impl Page {
    /// Every graph on the page, depth first.
    pub fn graphs(&self) -> Vec<(&str, &Figure)> {
        fn walk<'a>(nodes: &'a [Component], out: &mut Vec<(&'a str, &'a Figure)>) {
            for node in nodes {
                match node {
                    Component::Graph { id, figure } => out.push((id.as_str(), figure)),
                    Component::Div { children, .. } => walk(children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.children, &mut out);
        out
    }
}

/// Lay out the report: headings interleaved with one chart each.
/// Pure function of `report`; calling it twice gives equal pages.
pub fn assemble(report: &Report) -> Page {
    let rows = report.survey.rows();
    let facets = report
        .binning
        .as_ref()
        .map(chart::prestige_facets)
        .unwrap_or_else(|| Figure::new(Vec::new(), json!({})));

    let children = vec![
        Component::heading(1, PAGE_TITLE),
        Component::Markdown {
            source: narrative::NARRATIVE.to_string(),
        },
        Component::heading(2, "Breakdown By Gender"),
        Component::graph("gender-table", chart::summary_table(&report.means)),
        Component::heading(2, "Male Breadwinner Question"),
        Component::graph("breadwinner-bar", chart::agreement_bar(&report.counts)),
        Component::heading(2, "Job Prestige vs Income"),
        Component::graph(
            "prestige-scatter",
            chart::prestige_scatter(rows, &report.trends),
        ),
        Component::half_column(
            "left",
            vec![
                Component::heading(3, "Income by Gender"),
                Component::graph("income-box", chart::sex_box(rows, BoxField::Income)),
            ],
        ),
        Component::half_column(
            "right",
            vec![
                Component::heading(3, "Job Prestige by Gender"),
                Component::graph("prestige-box", chart::sex_box(rows, BoxField::JobPrestige)),
            ],
        ),
        Component::heading(2, "Job Prestige Level by Gender"),
        Component::graph("prestige-facets", facets),
    ];

    Page {
        title: PAGE_TITLE.to_string(),
        stylesheets: vec![STYLESHEET.to_string()],
        children,
    }
}
