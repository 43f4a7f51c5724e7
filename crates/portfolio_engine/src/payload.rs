use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 150;
pub const MAX_MESSAGE_LEN: usize = 4000;

/// JSON body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub honeypot: String,
}

impl ContactPayload {
    /// A filled honeypot marks a bot; the backend accepts it without mailing.
    pub fn is_spam(&self) -> bool {
        !self.honeypot.trim().is_empty()
    }

    /// Applies the backend's checks and returns its message for the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.is_spam() {
            return Ok(());
        }
        for (key, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Missing or empty field: {key}"));
            }
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err("name too long".to_string());
        }
        if self.subject.chars().count() > MAX_SUBJECT_LEN {
            return Err("subject too long".to_string());
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err("message too long".to_string());
        }
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err("invalid email".to_string());
        }
        Ok(())
    }
}

/// Error body of a failed submission. Only a non-empty string `detail` is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn parse(bytes: &[u8]) -> Option<String> {
        let body: ErrorBody = serde_json::from_slice(bytes).ok()?;
        body.detail.filter(|detail| !detail.trim().is_empty())
    }
}
