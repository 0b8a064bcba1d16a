use crate::{
    classify::classify,
    http::create_http_client,
    types::{ProbeConfig, ProbeResult},
};
use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;
use tracing::{debug, warn};

/// The four candidate URLs for a normalized domain, in probe order.
pub fn variant_urls(domain: &str) -> [String; 4] {
    [
        format!("https://{domain}"),
        format!("https://www.{domain}"),
        format!("http://{domain}"),
        format!("http://www.{domain}"),
    ]
}

#[derive(Clone)]
pub struct Prober {
    client: Client,
    config: ProbeConfig,
}

impl Prober {
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    pub fn with_config(config: ProbeConfig) -> Self {
        let client = create_http_client(&config);
        Self { client, config }
    }

    /// Probes one domain: GETs each URL variant in order and takes the first
    /// attempt that completes without a transport error as the result,
    /// whatever its status code. Failed attempts keep only the most recent
    /// error message.
    pub async fn probe_one(&self, domain: &str) -> ProbeResult {
        let mut last_error: Option<String> = None;

        for url in variant_urls(domain) {
            debug!(%url, "probing variant");
            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    debug!(%url, error = %e, "variant failed");
                    last_error = Some(e.to_string());
                    continue;
                }
            };

            let status_code = response.status().as_u16();
            let final_url = response.url().to_string();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    // Body read failures are transport failures too.
                    debug!(%url, error = %e, "body read failed");
                    last_error = Some(e.to_string());
                    continue;
                }
            };

            let classification =
                classify(Some(status_code), Some(&body), &self.config.extra_signatures);

            return ProbeResult {
                domain: domain.to_string(),
                tried_url: url,
                final_url,
                status_code: Some(status_code),
                alive: classification.alive,
                powered_by_boatsgroup: classification.powered_by_boatsgroup,
                status_label: classification.label,
                error: if classification.alive {
                    String::new()
                } else {
                    last_error.unwrap_or_default()
                },
            };
        }

        warn!(domain, "all URL variants failed");
        ProbeResult::dead(
            domain,
            last_error.unwrap_or_else(|| "No valid response".to_string()),
        )
    }

    /// Strictly sequential stream of results: each domain's full variant
    /// sequence finishes before the next domain starts.
    pub fn probe_stream<I>(&self, domains: I) -> impl Stream<Item = ProbeResult> + '_
    where
        I: IntoIterator<Item = String> + 'static,
    {
        let domains: Vec<String> = domains.into_iter().collect();

        stream::iter(domains).then(move |domain| async move { self.probe_one(&domain).await })
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}
