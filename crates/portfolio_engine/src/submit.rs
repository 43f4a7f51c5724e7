use std::time::Duration;

use futures_util::StreamExt;
use page_logging::{page_info, page_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{ContactError, ContactPayload, ErrorBody, FailureKind};

#[derive(Debug, Clone)]
pub struct ContactSettings {
    /// Full URL of the contact endpoint, e.g. `http://127.0.0.1:8000/contact`.
    pub endpoint: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Error bodies above this size are not inspected for a `detail` message.
    pub max_error_body_bytes: u64,
}

impl ContactSettings {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_error_body_bytes: 64 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait ContactSender: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestContactSender {
    settings: ContactSettings,
}

impl ReqwestContactSender {
    pub fn new(settings: ContactSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ContactError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| {
                page_warn!("could not build http client: {}", err);
                ContactError::generic(FailureKind::Network)
            })
    }

    /// Reads a bounded error body and extracts its `detail`, if any.
    async fn error_detail(&self, response: reqwest::Response) -> Option<String> {
        let limit = self.settings.max_error_body_bytes;
        if response.content_length().is_some_and(|len| len > limit) {
            return None;
        }
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.ok()?;
            if body.len() as u64 + chunk.len() as u64 > limit {
                return None;
            }
            body.extend_from_slice(&chunk);
        }
        ErrorBody::parse(&body)
    }
}

#[async_trait::async_trait]
impl ContactSender for ReqwestContactSender {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        payload
            .validate()
            .map_err(|reason| ContactError::new(FailureKind::InvalidPayload, reason))?;
        let body = serde_json::to_vec(payload)
            .map_err(|err| ContactError::new(FailureKind::InvalidPayload, err.to_string()))?;
        let client = self.build_client()?;

        page_info!(
            "POST {} body_len={} spam={}",
            self.settings.endpoint,
            body.len(),
            payload.is_spam()
        );
        let response = client
            .post(self.settings.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let code = status.as_u16();
        let error = match self.error_detail(response).await {
            Some(detail) => ContactError::new(FailureKind::HttpStatus(code), detail),
            None => ContactError::generic(FailureKind::HttpStatus(code)),
        };
        page_warn!("contact submission rejected: {}", error);
        Err(error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ContactError {
    page_warn!("contact submission failed: {}", err);
    if err.is_timeout() {
        return ContactError::generic(FailureKind::Timeout);
    }
    ContactError::generic(FailureKind::Network)
}
