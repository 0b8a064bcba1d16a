use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Sentinel written to `tried_url` when no URL variant produced a response.
pub const ALL_ATTEMPTS_FAILED: &str = "all attempts failed";

/// Sentinel written to the CSV `status_code` column when no response was obtained.
pub const STATUS_NA: &str = "N/A";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (BoatsCheckerBot/1.0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLabel {
    #[serde(rename = "alive-boatsgroup")]
    AliveBoatsgroup,
    #[serde(rename = "alive-not-boatsgroup")]
    AliveNotBoatsgroup,
    #[serde(rename = "dead")]
    Dead,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::AliveBoatsgroup => "alive-boatsgroup",
            StatusLabel::AliveNotBoatsgroup => "alive-not-boatsgroup",
            StatusLabel::Dead => "dead",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the final report, produced once per input domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Normalized input domain (lowercase, no scheme, no trailing slash).
    pub domain: String,
    /// The URL variant that produced the response, or `"all attempts failed"`.
    pub tried_url: String,
    /// URL after following redirects, empty if no variant responded.
    pub final_url: String,
    /// HTTP status of the chosen response, `None` if no variant responded.
    pub status_code: Option<u16>,
    pub alive: bool,
    pub powered_by_boatsgroup: bool,
    pub status_label: StatusLabel,
    /// Last transport error seen across failed attempts, empty when alive.
    pub error: String,
}

impl ProbeResult {
    /// Row for a domain where every URL variant failed at the transport level.
    pub fn dead(domain: &str, error: String) -> Self {
        Self {
            domain: domain.to_string(),
            tried_url: ALL_ATTEMPTS_FAILED.to_string(),
            final_url: String::new(),
            status_code: None,
            alive: false,
            powered_by_boatsgroup: false,
            status_label: StatusLabel::Dead,
            error,
        }
    }

    /// Textual form of the status code as written to the CSV.
    pub fn status_code_text(&self) -> String {
        match self.status_code {
            Some(code) => code.to_string(),
            None => STATUS_NA.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Extra signature substrings merged into the built-in list.
    pub extra_signatures: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            extra_signatures: Vec::new(),
        }
    }
}
