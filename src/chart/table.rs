use serde_json::json;

use super::Figure;
use crate::aggregate::GroupMeans;

pub const TABLE_HEADER: [&str; 5] = [
    "Gender",
    "Income",
    "Job Prestige",
    "Socioeconomic Index",
    "Education",
];

/// Summary table of the per-sex means.
pub fn summary_table(means: &[GroupMeans]) -> Figure {
    let columns = json!([
        means.iter().map(|m| m.sex.as_str()).collect::<Vec<_>>(),
        means.iter().map(|m| m.income).collect::<Vec<_>>(),
        means.iter().map(|m| m.job_prestige).collect::<Vec<_>>(),
        means.iter().map(|m| m.socioeconomic_index).collect::<Vec<_>>(),
        means.iter().map(|m| m.education).collect::<Vec<_>>(),
    ]);

    let trace = json!({
        "type": "table",
        "header": {
            "values": TABLE_HEADER,
            "fill": { "color": "#00083e" },
            "font": { "color": "white" },
            "align": "left",
        },
        "cells": {
            "values": columns,
            "fill": { "color": ["#f5f5f5", "white"] },
            "align": "left",
        },
    });

    Figure::new(vec![trace], json!({ "margin": { "t": 10, "b": 10 }, "height": 160 }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Sex;

    #[test]
    fn one_column_per_header() {
        let means = vec![
            GroupMeans {
                sex: Sex::Female,
                income: Some(20.0),
                job_prestige: Some(40.5),
                socioeconomic_index: None,
                education: Some(14.0),
            },
            GroupMeans {
                sex: Sex::Male,
                income: Some(30.25),
                job_prestige: Some(45.0),
                socioeconomic_index: Some(50.0),
                education: Some(13.0),
            },
        ];
        let fig = summary_table(&means);
        let cells = &fig.data[0]["cells"]["values"];

        assert_eq!(fig.data[0]["header"]["values"].as_array().unwrap().len(), 5);
        assert_eq!(cells[0], json!(["female", "male"]));
        assert_eq!(cells[1], json!([20.0, 30.25]));
        assert_eq!(cells[3], json!([null, 50.0]));
    }
}
