use crate::types::ProbeConfig;
use reqwest::redirect::Policy;
use reqwest::Client;

pub fn create_http_client(config: &ProbeConfig) -> Client {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(10))
        .use_rustls_tls()
        .build()
        .expect("Failed to create HTTP client")
}
