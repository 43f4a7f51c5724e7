use std::sync::{mpsc, Arc};
use std::time::Duration;

use portfolio_engine::{
    ChannelEventSink, ContactError, ContactPayload, ContactSender, ContactSettings, EngineEvent,
    EngineHandle, FailureKind,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Compilers".to_string(),
        message: "Got a minute?".to_string(),
        honeypot: String::new(),
    }
}

/// Never finishes, so only cancellation can complete the submission.
struct StalledSender;

#[async_trait::async_trait]
impl ContactSender for StalledSender {
    async fn submit(&self, _payload: &ContactPayload) -> Result<(), ContactError> {
        std::future::pending().await
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_each_submission_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let endpoint = Url::parse(&format!("{}/contact", server.uri())).unwrap();
    let engine = EngineHandle::new(
        ContactSettings::new(endpoint),
        Arc::new(ChannelEventSink::new(tx)),
    );
    engine.submit(4, payload());

    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("completion event");
    assert_eq!(
        event,
        EngineEvent::ContactCompleted {
            submission: 4,
            result: Ok(()),
        }
    );
}

#[test]
fn shutdown_cancels_in_flight_submissions() {
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::with_sender(
        Arc::new(StalledSender),
        Arc::new(ChannelEventSink::new(tx)),
    );
    engine.submit(1, payload());
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    engine.shutdown();
    let event = rx.recv_timeout(Duration::from_secs(5)).expect("cancel event");
    match event {
        EngineEvent::ContactCompleted { submission, result } => {
            assert_eq!(submission, 1);
            assert_eq!(result.unwrap_err().kind, FailureKind::Cancelled);
        }
    }

    assert!(engine.is_shut_down());
    engine.submit(2, payload());
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}
