use std::time::Duration;

use portfolio_engine::{
    ContactPayload, ContactSender, ContactSettings, FailureKind, ReqwestContactSender,
};
use pretty_assertions::assert_eq;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Let's build something".to_string(),
        honeypot: String::new(),
    }
}

fn sender_for(server: &MockServer) -> ReqwestContactSender {
    let endpoint = Url::parse(&format!("{}/contact", server.uri())).unwrap();
    ReqwestContactSender::new(ContactSettings::new(endpoint))
}

#[tokio::test]
async fn posts_json_payload_and_accepts_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Let's build something",
            "honeypot": "",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    sender_for(&server).submit(&payload()).await.expect("delivered");
}

#[tokio::test]
async fn non_json_success_body_is_still_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert_eq!(sender_for(&server).submit(&payload()).await, Ok(()));
}

#[tokio::test]
async fn server_detail_becomes_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "rate limited"})),
        )
        .mount(&server)
        .await;

    let err = sender_for(&server).submit(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "rate limited");
}

#[tokio::test]
async fn missing_detail_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let err = sender_for(&server).submit(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.message, "Request failed (404)");
}

#[tokio::test]
async fn oversized_error_body_is_not_parsed() {
    let server = MockServer::start().await;
    let detail = "x".repeat(200);
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({"detail": detail})))
        .mount(&server)
        .await;

    let endpoint = Url::parse(&format!("{}/contact", server.uri())).unwrap();
    let settings = ContactSettings {
        max_error_body_bytes: 64,
        ..ContactSettings::new(endpoint)
    };
    let err = ReqwestContactSender::new(settings)
        .submit(&payload())
        .await
        .unwrap_err();
    assert_eq!(err.message, "Request failed (400)");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let endpoint = Url::parse(&format!("{}/contact", server.uri())).unwrap();
    let settings = ContactSettings {
        request_timeout: Duration::from_millis(50),
        ..ContactSettings::new(endpoint)
    };
    let err = ReqwestContactSender::new(settings)
        .submit(&payload())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.message, "Request failed (timeout)");
}

#[tokio::test]
async fn invalid_payload_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let bad = ContactPayload {
        email: "nobody".to_string(),
        ..payload()
    };
    let err = sender_for(&server).submit(&bad).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPayload);
    assert_eq!(err.message, "invalid email");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    let endpoint = Url::parse("http://127.0.0.1:9/contact").unwrap();
    let settings = ContactSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
        ..ContactSettings::new(endpoint)
    };
    let err = ReqwestContactSender::new(settings)
        .submit(&payload())
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
    assert!(err.message.starts_with("Request failed ("));
}
