use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::ingest::{Respondent, Sex};

/// Six equal-width job prestige bands, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PrestigeLevel {
    #[serde(rename = "very low")]
    VeryLow,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "somewhat low")]
    SomewhatLow,
    #[serde(rename = "somewhat high")]
    SomewhatHigh,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl PrestigeLevel {
    pub const LEVELS: [PrestigeLevel; 6] = [
        PrestigeLevel::VeryLow,
        PrestigeLevel::Low,
        PrestigeLevel::SomewhatLow,
        PrestigeLevel::SomewhatHigh,
        PrestigeLevel::High,
        PrestigeLevel::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrestigeLevel::VeryLow => "very low",
            PrestigeLevel::Low => "low",
            PrestigeLevel::SomewhatLow => "somewhat low",
            PrestigeLevel::SomewhatHigh => "somewhat high",
            PrestigeLevel::High => "high",
            PrestigeLevel::VeryHigh => "very high",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PrestigeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A respondent with income, sex and a prestige band all known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinnedRow {
    pub income: f64,
    pub sex: Sex,
    pub job_prestige: f64,
    pub level: PrestigeLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binning {
    /// `edges[i]..=edges[i + 1]` bounds level `i`, open on the left.
    pub edges: [f64; 7],
    pub rows: Vec<BinnedRow>,
}

impl Binning {
    /// `(lo, hi]` for `level`.
    pub fn range(&self, level: PrestigeLevel) -> (f64, f64) {
        let i = level.index();
        (self.edges[i], self.edges[i + 1])
    }

    pub fn rows_in(&self, level: PrestigeLevel) -> impl Iterator<Item = &BinnedRow> {
        self.rows.iter().filter(move |r| r.level == level)
    }
}

/// Edges of six equal-width bins spanning `[min, max]`.
///
/// The lowest edge sits 0.1% of the range below `min` so that `min` itself
/// lands in the first right-closed interval. A zero-width range is widened by
/// 0.1% on both sides first.
pub fn equal_width_edges(min: f64, max: f64) -> [f64; 7] {
    let (lo, hi, nudge) = if min == max {
        let pad = if min != 0.0 { 0.001 * min.abs() } else { 0.001 };
        (min - pad, max + pad, 0.0)
    } else {
        (min, max, (max - min) * 0.001)
    };

    let step = (hi - lo) / 6.0;
    let mut edges = [0.0; 7];
    for (i, edge) in edges.iter_mut().enumerate() {
        *edge = lo + step * i as f64;
    }
    edges[6] = hi;
    edges[0] -= nudge;
    edges
}

/// Band for `x`, or `None` outside `(edges[0], edges[6]]`.
pub fn classify(edges: &[f64; 7], x: f64) -> Option<PrestigeLevel> {
    if !(x > edges[0] && x <= edges[6]) {
        return None;
    }
    (0..6)
        .find(|&i| x <= edges[i + 1])
        .map(|i| PrestigeLevel::LEVELS[i])
}

/// Bin `job_prestige` over its observed range and keep the rows where income,
/// sex and a band are all present. `None` when no row has a prestige score.
pub fn bin_job_prestige(rows: &[Respondent]) -> Option<Binning> {
    let (min, max) = rows
        .iter()
        .filter_map(|r| r.job_prestige)
        .fold(None, |acc: Option<(f64, f64)>, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })?;

    let edges = equal_width_edges(min, max);
    let binned: Vec<BinnedRow> = rows
        .iter()
        .filter_map(|r| {
            let job_prestige = r.job_prestige?;
            Some(BinnedRow {
                income: r.income?,
                sex: r.sex?,
                job_prestige,
                level: classify(&edges, job_prestige)?,
            })
        })
        .collect();

    debug!(min, max, kept = binned.len(), dropped = rows.len() - binned.len(), "binned job prestige");
    Some(Binning { edges, rows: binned })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(job_prestige: Option<f64>, income: Option<f64>, sex: Option<Sex>) -> Respondent {
        Respondent {
            job_prestige,
            income,
            sex,
            ..Default::default()
        }
    }

    #[test]
    fn edges_follow_observed_range() {
        let edges = equal_width_edges(20.0, 80.0);
        assert!((edges[0] - 19.94).abs() < 1e-9);
        assert_eq!(&edges[1..], &[30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
    }

    #[test]
    fn intervals_are_right_closed() {
        let edges = equal_width_edges(20.0, 80.0);
        assert_eq!(classify(&edges, 20.0), Some(PrestigeLevel::VeryLow));
        assert_eq!(classify(&edges, 30.0), Some(PrestigeLevel::VeryLow));
        assert_eq!(classify(&edges, 30.5), Some(PrestigeLevel::Low));
        assert_eq!(classify(&edges, 80.0), Some(PrestigeLevel::VeryHigh));
        assert_eq!(classify(&edges, 80.5), None);
        assert_eq!(classify(&edges, 19.0), None);
    }

    #[test]
    fn constant_range_gets_widened() {
        let edges = equal_width_edges(50.0, 50.0);
        assert!((edges[0] - 49.95).abs() < 1e-9);
        assert!((edges[6] - 50.05).abs() < 1e-9);
        assert!(classify(&edges, 50.0).is_some());
        assert_eq!(classify(&edges, 50.04), Some(PrestigeLevel::VeryHigh));
    }

    #[test]
    fn drops_rows_without_a_band() {
        let rows = vec![
            row(Some(20.0), Some(100.0), Some(Sex::Male)),
            row(None, Some(200.0), Some(Sex::Female)),
            row(Some(80.0), None, Some(Sex::Female)),
            row(Some(50.0), Some(300.0), Some(Sex::Female)),
        ];
        let binning = bin_job_prestige(&rows).unwrap();

        // 80.0 still counts toward the range even though its row is dropped
        assert_eq!(binning.edges[6], 80.0);
        assert_eq!(binning.rows.len(), 2);
        for r in &binning.rows {
            let (lo, hi) = binning.range(r.level);
            assert!(r.job_prestige > lo && r.job_prestige <= hi);
        }
        assert_eq!(binning.rows_in(PrestigeLevel::SomewhatLow).count(), 1);
    }

    #[test]
    fn no_scores_means_no_binning() {
        assert!(bin_job_prestige(&[row(None, Some(1.0), Some(Sex::Male))]).is_none());
    }
}
