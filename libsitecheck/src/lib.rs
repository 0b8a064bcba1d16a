mod classify;
mod http;
mod normalize;
mod prober;
mod report;
pub mod signatures;
mod types;

pub use classify::{classify, Classification};
pub use normalize::{load_domains, normalize_domain, LoadError};
pub use prober::{variant_urls, Prober};
pub use report::{write_csv, write_csv_file, ReportError, CSV_HEADERS};
pub use signatures::{body_matches, BOATSGROUP_SIGNATURES};
pub use types::{
    ProbeConfig, ProbeResult, StatusLabel, ALL_ATTEMPTS_FAILED, DEFAULT_USER_AGENT, STATUS_NA,
};

use futures::StreamExt;

pub async fn check(domain: &str) -> ProbeResult {
    Prober::new().probe_one(domain).await
}

pub async fn check_many<I>(domains: I) -> Vec<ProbeResult>
where
    I: IntoIterator<Item = String> + 'static,
{
    Prober::new().probe_stream(domains).collect().await
}
