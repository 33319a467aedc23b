use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::{axis_title, sex_color, Figure};
use crate::ingest::{Respondent, Sex};

/// Numeric fields that get a by-sex box plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxField {
    Income,
    JobPrestige,
}

impl BoxField {
    fn value(&self, r: &Respondent) -> Option<f64> {
        match self {
            BoxField::Income => r.income,
            BoxField::JobPrestige => r.job_prestige,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoxField::Income => "Income",
            BoxField::JobPrestige => "Job Prestige Ranking",
        }
    }
}

/// Distribution of one field split by sex, legend hidden.
pub fn sex_box(rows: &[Respondent], field: BoxField) -> Figure {
    let mut by_sex: BTreeMap<Sex, Vec<f64>> = BTreeMap::new();
    for r in rows {
        if let (Some(sex), Some(v)) = (r.sex, field.value(r)) {
            by_sex.entry(sex).or_default().push(v);
        }
    }

    let data: Vec<Value> = by_sex
        .into_iter()
        .map(|(sex, values)| {
            json!({
                "type": "box",
                "name": sex.as_str(),
                "y": values,
                "marker": { "color": sex_color(sex) },
                "hovertemplate": format!("sex={}<br>{}=%{{y}}<extra></extra>", sex, field.label()),
            })
        })
        .collect();

    Figure::new(
        data,
        json!({
            "showlegend": false,
            "boxmode": "group",
            "yaxis": axis_title(field.label()),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_missing_values() {
        let rows = vec![
            Respondent { sex: Some(Sex::Male), income: Some(5.0), ..Default::default() },
            Respondent { sex: Some(Sex::Male), income: None, ..Default::default() },
            Respondent { sex: None, income: Some(9.0), ..Default::default() },
            Respondent { sex: Some(Sex::Female), job_prestige: Some(40.0), ..Default::default() },
        ];
        let fig = sex_box(&rows, BoxField::Income);
        assert_eq!(fig.data.len(), 1);
        assert_eq!(fig.data[0]["y"], json!([5.0]));
        assert_eq!(fig.layout["showlegend"], false);

        let fig = sex_box(&rows, BoxField::JobPrestige);
        assert_eq!(fig.data[0]["name"], "female");
        assert_eq!(fig.layout["yaxis"]["title"]["text"], "Job Prestige Ranking");
    }
}
