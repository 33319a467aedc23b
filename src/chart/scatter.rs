use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::{axis_title, sex_color, Figure};
use crate::aggregate::TrendLine;
use crate::ingest::{Respondent, Sex};

/// Job prestige against income, one marker series per sex with its OLS line.
pub fn prestige_scatter(rows: &[Respondent], trends: &BTreeMap<Sex, TrendLine>) -> Figure {
    let mut by_sex: BTreeMap<Sex, Vec<&Respondent>> = BTreeMap::new();
    for r in rows {
        if let (Some(sex), Some(_), Some(_)) = (r.sex, r.job_prestige, r.income) {
            by_sex.entry(sex).or_default().push(r);
        }
    }

    let mut data: Vec<Value> = Vec::new();
    for (sex, members) in &by_sex {
        let x: Vec<Option<f64>> = members.iter().map(|r| r.job_prestige).collect();
        let y: Vec<Option<f64>> = members.iter().map(|r| r.income).collect();
        let extra: Vec<[Option<f64>; 2]> = members
            .iter()
            .map(|r| [r.education, r.socioeconomic_index])
            .collect();
        data.push(json!({
            "type": "scatter",
            "mode": "markers",
            "name": sex.as_str(),
            "legendgroup": sex.as_str(),
            "x": x,
            "y": y,
            "customdata": extra,
            "marker": { "color": sex_color(*sex) },
            "hovertemplate": format!(
                "sex={}<br>Job Prestige Rating=%{{x}}<br>Income Level=%{{y}}\
                 <br>education=%{{customdata[0]}}<br>socioeconomic_index=%{{customdata[1]}}<extra></extra>",
                sex
            ),
        }));

        if let Some(line) = trends.get(sex) {
            data.push(trend_trace(*sex, line));
        }
    }

    Figure::new(
        data,
        json!({
            "height": 600,
            "width": 600,
            "xaxis": axis_title("Job Prestige Rating"),
            "yaxis": axis_title("Income Level"),
            "legend": { "title": { "text": "sex" } },
        }),
    )
}

fn trend_trace(sex: Sex, line: &TrendLine) -> Value {
    json!({
        "type": "scatter",
        "mode": "lines",
        "name": format!("{} OLS", sex),
        "legendgroup": sex.as_str(),
        "showlegend": false,
        "x": [line.x_min, line.x_max],
        "y": [line.predict(line.x_min), line.predict(line.x_max)],
        "line": { "color": sex_color(sex) },
        "hovertemplate": format!(
            "<b>OLS trendline</b><br>income = {:.4} * job_prestige + {:.4}<extra></extra>",
            line.slope, line.intercept
        ),
    })
}
