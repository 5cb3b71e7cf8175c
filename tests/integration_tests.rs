//! Integration tests for the CAP London Church website server.
//!
//! These tests boot the real router on an ephemeral port and drive it over
//! HTTP with redirects disabled, so the locale redirect behavior is observed
//! exactly as a browser would see it.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use cap_london_church::config::Config;
use cap_london_church::contact::{ContactSink, ContactSubject, ContactSubmission};
use cap_london_church::i18n::{BundleCache, LocaleRegistry};
use cap_london_church::server::{router, AppState};

// ==================== Test Helpers ====================

/// Sink that records submissions instead of logging them.
#[derive(Debug, Default)]
struct RecordingSink {
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl RecordingSink {
    fn recorded(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().expect("sink lock").clone()
    }
}

impl ContactSink for RecordingSink {
    fn deliver(&self, submission: &ContactSubmission) {
        self.submissions
            .lock()
            .expect("sink lock")
            .push(submission.clone());
    }
}

fn messages_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("messages")
}

/// Boot the site on an ephemeral port; returns its base URL and the sink.
async fn spawn_site() -> (String, Arc<RecordingSink>) {
    let config = Config {
        port: 0,
        messages_dir: messages_dir(),
    };

    let (bundles, report) =
        BundleCache::load(&config.messages_dir, LocaleRegistry::get()).expect("bundles load");
    assert!(report.fell_back.is_empty(), "shipped bundles must all load");

    let sink = Arc::new(RecordingSink::default());
    let state = AppState {
        config: Arc::new(config),
        bundles: Arc::new(bundles),
        contact_sink: sink.clone(),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve");
    });

    (format!("http://{addr}"), sink)
}

/// HTTP client that does not follow redirects.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("location is ascii")
}

// ==================== Locale Redirect Tests ====================

#[tokio::test]
async fn test_root_redirects_to_default_locale() {
    let (base, _sink) = spawn_site().await;

    let response = client().get(&base).send().await.expect("request");

    assert_eq!(response.status().as_u16(), 307);
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn test_unprefixed_page_redirects_to_default_locale() {
    let (base, _sink) = spawn_site().await;

    let response = client()
        .get(format!("{base}/about"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 307);
    assert_eq!(location(&response), "/en/about");
}

#[tokio::test]
async fn test_unsupported_locale_prefix_is_kept_in_redirect() {
    let (base, _sink) = spawn_site().await;

    let response = client()
        .get(format!("{base}/fr/anything"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 307);
    assert_eq!(location(&response), "/en/fr/anything");
}

#[tokio::test]
async fn test_redirect_preserves_query_string() {
    let (base, _sink) = spawn_site().await;

    let response = client()
        .get(format!("{base}/events?category=youth"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 307);
    assert_eq!(location(&response), "/en/events?category=youth");
}

#[tokio::test]
async fn test_locale_prefixed_paths_are_not_redirected() {
    let (base, _sink) = spawn_site().await;

    for path in ["/en", "/pt", "/en/about", "/pt/contact"] {
        let response = client()
            .get(format!("{base}{path}"))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 200, "GET {path}");
    }
}

// ==================== Page Rendering Tests ====================

#[tokio::test]
async fn test_english_home_page() {
    let (base, _sink) = spawn_site().await;

    let response = client().get(format!("{base}/en")).send().await.expect("request");
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains("Welcome to CAP London Church"));
}

#[tokio::test]
async fn test_portuguese_about_page() {
    let (base, _sink) = spawn_site().await;

    let response = client()
        .get(format!("{base}/pt/about"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="pt">"#));
    assert!(body.contains("Sobre Nós"));
    assert!(body.contains("A Nossa Missão"));
}

#[tokio::test]
async fn test_language_switcher_targets_same_page() {
    let (base, _sink) = spawn_site().await;

    let body = client()
        .get(format!("{base}/pt/events"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(body.contains(r#"href="/en/events" hreflang="en""#));
}

#[tokio::test]
async fn test_events_category_filter() {
    let (base, _sink) = spawn_site().await;

    let body = client()
        .get(format!("{base}/en/events?category=worship"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Revival Night"));
    assert!(!body.contains("Community Outreach Day"));
}

#[tokio::test]
async fn test_events_unknown_category_shows_everything() {
    let (base, _sink) = spawn_site().await;

    let body = client()
        .get(format!("{base}/en/events?category=nonsense"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Youth Encounter"));
    assert!(body.contains("Community Outreach Day"));
}

#[tokio::test]
async fn test_unknown_page_under_valid_locale_is_404() {
    let (base, _sink) = spawn_site().await;

    let response = client()
        .get(format!("{base}/en/nonexistent"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_health_endpoint_bypasses_locale_routing() {
    let (base, _sink) = spawn_site().await;

    let response = client()
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.expect("body"), "OK");
}

// ==================== Contact Form Tests ====================

#[tokio::test]
async fn test_contact_form_submission_reaches_sink() {
    let (base, sink) = spawn_site().await;

    let response = client()
        .post(format!("{base}/en/contact"))
        .form(&[
            ("name", "Maria Silva"),
            ("email", "maria@example.com"),
            ("phone", "+44 20 1234 5678"),
            ("subject", "prayer"),
            ("message", "Please pray for my family."),
            ("prayerRequest", "true"),
        ])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Thank you for your message"));

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].name, "Maria Silva");
    assert_eq!(recorded[0].subject, ContactSubject::Prayer);
    assert!(recorded[0].prayer_request);
}

#[tokio::test]
async fn test_contact_form_missing_fields_is_rejected() {
    let (base, sink) = spawn_site().await;

    let response = client()
        .post(format!("{base}/en/contact"))
        .form(&[("name", "Maria Silva"), ("subject", "general")])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 422);
    let body = response.text().await.expect("body");
    assert!(body.contains("Please complete the required fields"));
    assert!(body.contains("<li>Email Address</li>"));
    assert!(body.contains("<li>Message</li>"));

    assert!(sink.recorded().is_empty());
}

#[tokio::test]
async fn test_contact_form_localized_response() {
    let (base, sink) = spawn_site().await;

    let response = client()
        .post(format!("{base}/pt/contact"))
        .form(&[
            ("name", "João Pereira"),
            ("email", "joao@example.com"),
            ("subject", "general"),
            ("message", "Olá!"),
        ])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Obrigado pela sua mensagem"));

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].phone, None);
    assert!(!recorded[0].prayer_request);
}

#[tokio::test]
async fn test_contact_page_renders_form() {
    let (base, _sink) = spawn_site().await;

    let body = client()
        .get(format!("{base}/en/contact"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(body.contains(r#"action="/en/contact""#));
    assert!(body.contains(r#"name="prayerRequest""#));
    assert!(body.contains(r#"<option value="volunteer">"#));
}
