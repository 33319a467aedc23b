use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::ingest::{Agreement, Respondent, Sex};

/// Number of respondents giving `level` to the breadwinner question, per sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub male_breadwinner: Agreement,
    pub sex: Sex,
    pub count: usize,
}

/// Count rows by (agreement level, sex).
///
/// Every declared level is emitted for each sex present in `rows`, so an
/// unused level shows up as a zero bar instead of disappearing. Ordered by
/// level, then sex.
pub fn group_counts(rows: &[Respondent]) -> Vec<GroupCount> {
    let mut counts: BTreeMap<(Agreement, Sex), usize> = BTreeMap::new();
    let mut sexes = BTreeSet::new();
    for row in rows {
        let Some(sex) = row.sex else { continue };
        sexes.insert(sex);
        if let Some(level) = row.male_breadwinner {
            *counts.entry((level, sex)).or_default() += 1;
        }
    }

    Agreement::LEVELS
        .iter()
        .flat_map(|&level| sexes.iter().map(move |&sex| (level, sex)))
        .map(|(level, sex)| GroupCount {
            male_breadwinner: level,
            sex,
            count: counts.get(&(level, sex)).copied().unwrap_or(0),
        })
        .collect()
}
