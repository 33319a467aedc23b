use serde_json::{json, Value};
use std::collections::BTreeSet;

use super::{axis_title, sex_color, Figure};
use crate::aggregate::GroupCount;
use crate::ingest::Agreement;

/// Grouped bars of breadwinner answers, one series per sex.
pub fn agreement_bar(counts: &[GroupCount]) -> Figure {
    let sexes: BTreeSet<_> = counts.iter().map(|c| c.sex).collect();

    let data: Vec<Value> = sexes
        .into_iter()
        .map(|sex| {
            let mut series: Vec<&GroupCount> = counts.iter().filter(|c| c.sex == sex).collect();
            series.sort_by_key(|c| c.male_breadwinner);
            let x: Vec<&str> = series.iter().map(|c| c.male_breadwinner.as_str()).collect();
            let y: Vec<usize> = series.iter().map(|c| c.count).collect();
            json!({
                "type": "bar",
                "name": sex.as_str(),
                "x": x,
                "y": y,
                "text": y,
                "textposition": "auto",
                "marker": { "color": sex_color(sex) },
                "hovertemplate": format!(
                    "sex={}<br>Level of Agreement=%{{x}}<br>Number of Responses=%{{y}}<extra></extra>",
                    sex
                ),
            })
        })
        .collect();

    let categories: Vec<&str> = Agreement::LEVELS.iter().map(Agreement::as_str).collect();
    let mut xaxis = axis_title("Level of Agreement");
    xaxis["categoryorder"] = json!("array");
    xaxis["categoryarray"] = json!(categories);

    Figure::new(
        data,
        json!({
            "barmode": "group",
            "xaxis": xaxis,
            "yaxis": axis_title("Number of Responses"),
            "legend": { "title": { "text": "sex" } },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Sex;

    #[test]
    fn bars_follow_level_order() {
        let counts = vec![
            GroupCount { male_breadwinner: Agreement::Agree, sex: Sex::Male, count: 4 },
            GroupCount { male_breadwinner: Agreement::StronglyDisagree, sex: Sex::Male, count: 1 },
            GroupCount { male_breadwinner: Agreement::StronglyDisagree, sex: Sex::Female, count: 2 },
            GroupCount { male_breadwinner: Agreement::Agree, sex: Sex::Female, count: 0 },
        ];
        let fig = agreement_bar(&counts);

        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[0]["name"], "female");
        assert_eq!(fig.data[1]["x"], json!(["strongly disagree", "agree"]));
        assert_eq!(fig.data[1]["y"], json!([1, 4]));
        assert_eq!(fig.data[1]["text"], json!([1, 4]));
        assert_eq!(fig.layout["barmode"], "group");
        assert_eq!(
            fig.layout["xaxis"]["categoryarray"],
            json!(["strongly disagree", "disagree", "agree", "strongly agree"])
        );
    }
}
