pub mod aggregate;
pub mod chart;
pub mod config;
pub mod fetch;
pub mod ingest;
pub mod page;
pub mod report;
pub mod serve;

pub use report::Report;
