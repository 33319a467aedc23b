use serde::Serialize;
use std::collections::BTreeMap;

use super::{mean, round_to};
use crate::ingest::{Respondent, Sex};

/// Per-sex averages shown in the summary table, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeans {
    pub sex: Sex,
    pub income: Option<f64>,
    pub job_prestige: Option<f64>,
    pub socioeconomic_index: Option<f64>,
    pub education: Option<f64>,
}

/// One row per sex present in `rows`, ordered female then male.
/// Rows without a sex are ignored; absent field values are skipped per field.
pub fn group_means(rows: &[Respondent]) -> Vec<GroupMeans> {
    let mut groups: BTreeMap<Sex, Vec<&Respondent>> = BTreeMap::new();
    for row in rows {
        if let Some(sex) = row.sex {
            groups.entry(sex).or_default().push(row);
        }
    }

    groups
        .into_iter()
        .map(|(sex, members)| {
            let avg = |field: fn(&Respondent) -> Option<f64>| {
                mean(members.iter().map(|r| field(r))).map(|m| round_to(m, 2))
            };
            GroupMeans {
                sex,
                income: avg(|r| r.income),
                job_prestige: avg(|r| r.job_prestige),
                socioeconomic_index: avg(|r| r.socioeconomic_index),
                education: avg(|r| r.education),
            }
        })
        .collect()
}
