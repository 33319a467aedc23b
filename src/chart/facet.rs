use serde_json::{json, Map, Value};

use super::Figure;
use crate::aggregate::{Binning, PrestigeLevel};
use crate::ingest::Sex;

/// Facets per row of the grid.
pub const FACET_COLUMNS: usize = 2;
const COLUMN_GAP: f64 = 0.03;
const ROW_GAP: f64 = 0.07;

fn facet_color(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "blue",
        Sex::Female => "red",
    }
}

/// Plotly names the first axis `xaxis` and the rest `xaxis2`, `xaxis3`, ...
fn axis_key(axis: char, n: usize) -> String {
    if n == 1 {
        format!("{}axis", axis)
    } else {
        format!("{}axis{}", axis, n)
    }
}

fn axis_ref(axis: char, n: usize) -> String {
    if n == 1 {
        axis.to_string()
    } else {
        format!("{}{}", axis, n)
    }
}

/// Income box plots by sex, one facet per prestige band, wrapped two wide.
pub fn prestige_facets(binning: &Binning) -> Figure {
    let levels: Vec<PrestigeLevel> = PrestigeLevel::LEVELS
        .into_iter()
        .filter(|&l| binning.rows_in(l).next().is_some())
        .collect();
    let rows_in_grid = levels.len().div_ceil(FACET_COLUMNS).max(1);
    let height = (1.0 - ROW_GAP * (rows_in_grid - 1) as f64) / rows_in_grid as f64;
    let width = (1.0 - COLUMN_GAP * (FACET_COLUMNS - 1) as f64) / FACET_COLUMNS as f64;

    let mut data = Vec::new();
    let mut layout = Map::new();
    let mut annotations = Vec::new();
    let mut legend_shown = [false; 2];

    for (i, level) in levels.iter().enumerate() {
        let n = i + 1;
        let (row, col) = (i / FACET_COLUMNS, i % FACET_COLUMNS);
        let x0 = col as f64 * (width + COLUMN_GAP);
        let y1 = 1.0 - row as f64 * (height + ROW_GAP);
        let x_domain = [x0, x0 + width];
        let y_domain = [y1 - height, y1];

        let mut xaxis = json!({ "domain": x_domain, "anchor": axis_ref('y', n), "showticklabels": false });
        let mut yaxis = json!({ "domain": y_domain, "anchor": axis_ref('x', n) });
        if n > 1 {
            xaxis["matches"] = json!("x");
            yaxis["matches"] = json!("y");
        }
        if col == 0 {
            yaxis["title"] = json!({ "text": "income" });
        }
        layout.insert(axis_key('x', n), xaxis);
        layout.insert(axis_key('y', n), yaxis);

        annotations.push(json!({
            "text": level.as_str(),
            "x": x0 + width / 2.0,
            "y": y1,
            "xref": "paper",
            "yref": "paper",
            "xanchor": "center",
            "yanchor": "bottom",
            "showarrow": false,
        }));

        for (slot, sex) in [Sex::Male, Sex::Female].into_iter().enumerate() {
            let incomes: Vec<f64> = binning
                .rows_in(*level)
                .filter(|r| r.sex == sex)
                .map(|r| r.income)
                .collect();
            if incomes.is_empty() {
                continue;
            }
            data.push(json!({
                "type": "box",
                "name": sex.as_str(),
                "legendgroup": sex.as_str(),
                "showlegend": !legend_shown[slot],
                "y": incomes,
                "marker": { "color": facet_color(sex) },
                "xaxis": axis_ref('x', n),
                "yaxis": axis_ref('y', n),
                "hovertemplate": format!("sex={}<br>jp_cat={}<br>income=%{{y}}<extra></extra>", sex, level),
            }));
            legend_shown[slot] = true;
        }
    }

    layout.insert("annotations".into(), Value::Array(annotations));
    layout.insert("boxmode".into(), json!("group"));
    layout.insert("legend".into(), json!({ "title": { "text": "sex" } }));
    layout.insert("height".into(), json!(300 * rows_in_grid));

    Figure::new(data, Value::Object(layout))
}
