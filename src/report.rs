// src/report.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::collections::BTreeMap;
use tracing::info;

use crate::aggregate::{
    bin_job_prestige, fit_trend, group_counts, group_means, Binning, GroupCount, GroupMeans,
    TrendLine,
};
use crate::fetch::{self, Source};
use crate::ingest::{self, MissingValues, Sex, Survey};

/// The cleaned survey plus every view the dashboard draws.
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub survey: Survey,
    pub means: Vec<GroupMeans>,
    pub counts: Vec<GroupCount>,
    pub binning: Option<Binning>,
    /// Income on job prestige, per sex.
    pub trends: BTreeMap<Sex, TrendLine>,
}

impl Report {
    pub fn build(survey: Survey) -> Self {
        let rows = survey.rows();
        let means = group_means(rows);
        let counts = group_counts(rows);
        let binning = bin_job_prestige(rows);

        let mut points: BTreeMap<Sex, Vec<(f64, f64)>> = BTreeMap::new();
        for r in rows {
            if let (Some(sex), Some(x), Some(y)) = (r.sex, r.job_prestige, r.income) {
                points.entry(sex).or_default().push((x, y));
            }
        }
        let trends = points
            .into_iter()
            .filter_map(|(sex, pts)| fit_trend(&pts).map(|line| (sex, line)))
            .collect();

        info!(
            groups = means.len(),
            count_cells = counts.len(),
            binned = binning.as_ref().map_or(0, |b| b.rows.len()),
            "aggregated survey"
        );

        Self {
            survey,
            means,
            counts,
            binning,
            trends,
        }
    }

    /// Fetch, decode, clean and aggregate. Any failure here is fatal.
    pub async fn load(client: &Client, source: &str) -> Result<Self> {
        let source = Source::parse(source)?;
        let bytes = fetch::fetch_source(client, &source)
            .await
            .with_context(|| format!("fetching survey from {:?}", source))?;
        let text = ingest::decode_cp1252(&bytes);
        let survey = ingest::parse_survey(&text, &MissingValues::default())
            .context("cleaning survey")?;
        Ok(Self::build(survey))
    }
}
