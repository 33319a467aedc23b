// src/aggregate/mod.rs

pub mod binning;
pub mod counts;
pub mod means;
pub mod trend;

pub use binning::{bin_job_prestige, BinnedRow, Binning, PrestigeLevel};
pub use counts::{group_counts, GroupCount};
pub use means::{group_means, GroupMeans};
pub use trend::{fit_trend, TrendLine};

/// Round to `places` decimals, exact ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

/// Arithmetic mean of the present values, `None` when there are none.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, n) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
