use libsitecheck::{ProbeConfig, Prober, StatusLabel, ALL_ATTEMPTS_FAILED};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_prober() -> Prober {
    Prober::with_config(ProbeConfig {
        timeout: Duration::from_secs(5),
        ..ProbeConfig::default()
    })
}

/// Mock server serving `body` with `status` at `/`. The returned domain is
/// `127.0.0.1:<port>`, so the prober's two https variants and the
/// `www.`-prefixed http variant all fail before `http://127.0.0.1:<port>`
/// reaches the mock.
async fn mock_site(status: u16, body: &str) -> (MockServer, String) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let domain = server.address().to_string();
    (server, domain)
}

#[tokio::test]
async fn signature_body_is_alive_boatsgroup() {
    let (_server, domain) = mock_site(
        200,
        "<html><footer>Site Powered By BOATS GROUP</footer></html>",
    )
    .await;

    let result = test_prober().probe_one(&domain).await;

    assert!(result.alive);
    assert!(result.powered_by_boatsgroup);
    assert_eq!(result.status_label, StatusLabel::AliveBoatsgroup);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.tried_url, format!("http://{domain}"));
    assert_eq!(result.error, "");
}

#[tokio::test]
async fn plain_body_is_alive_not_boatsgroup() {
    let (_server, domain) = mock_site(200, "<html><body>Just a marina</body></html>").await;

    let result = test_prober().probe_one(&domain).await;

    assert!(result.alive);
    assert!(!result.powered_by_boatsgroup);
    assert_eq!(result.status_label, StatusLabel::AliveNotBoatsgroup);
}

#[tokio::test]
async fn server_error_is_dead_with_status_recorded() {
    let (_server, domain) = mock_site(500, "powered by boats group").await;

    let result = test_prober().probe_one(&domain).await;

    assert!(!result.alive);
    assert!(!result.powered_by_boatsgroup);
    assert_eq!(result.status_label, StatusLabel::Dead);
    assert_eq!(result.status_code, Some(500));
    assert_eq!(result.tried_url, format!("http://{domain}"));
}

#[tokio::test]
async fn redirects_are_followed_into_final_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/landing"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/landing"))
        .respond_with(ResponseTemplate::new(200).set_body_string("app.boatwizard.com"))
        .mount(&server)
        .await;

    let domain = server.address().to_string();
    let result = test_prober().probe_one(&domain).await;

    assert!(result.alive);
    assert!(result.powered_by_boatsgroup);
    assert_eq!(result.tried_url, format!("http://{domain}"));
    assert_eq!(result.final_url, format!("http://{domain}/landing"));
}

#[tokio::test]
async fn unreachable_domain_is_dead_with_sentinels() {
    // Nothing listens here; every variant fails at the transport level.
    let result = test_prober().probe_one("127.0.0.1:9").await;

    assert!(!result.alive);
    assert_eq!(result.status_code, None);
    assert_eq!(result.status_label, StatusLabel::Dead);
    assert_eq!(result.tried_url, ALL_ATTEMPTS_FAILED);
    assert_eq!(result.final_url, "");
    assert!(!result.error.is_empty());
}
