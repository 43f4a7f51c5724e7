pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
    /// Hidden spam trap; humans leave it empty.
    Honeypot,
}

impl ContactField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            "honeypot" => Some(ContactField::Honeypot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactFields {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
            ContactField::Honeypot => &mut self.honeypot,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed {
        message: String,
    },
}

/// Contact form fields plus the submit button state.
///
/// Only one submission is in flight at a time: the button is disabled from
/// `submit` until the transient Sent/Failed state reverts to Idle. Results
/// and reverts for any other submission id are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: ContactStatus,
    last_submission: SubmissionId,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Moves Idle to Sending and hands out the id and a copy of the fields.
    pub fn begin_submit(&mut self) -> Option<(SubmissionId, ContactFields)> {
        if self.status != ContactStatus::Idle {
            return None;
        }
        self.last_submission += 1;
        self.status = ContactStatus::Sending;
        Some((self.last_submission, self.fields.clone()))
    }

    pub fn succeed(&mut self, submission: SubmissionId) -> bool {
        if !self.is_in_flight(submission) {
            return false;
        }
        self.status = ContactStatus::Sent;
        true
    }

    pub fn fail(&mut self, submission: SubmissionId, message: impl Into<String>) -> bool {
        if !self.is_in_flight(submission) {
            return false;
        }
        self.status = ContactStatus::Failed {
            message: message.into(),
        };
        true
    }

    /// Returns to Idle after a transient state. A sent form is cleared.
    pub fn revert(&mut self, submission: SubmissionId) -> bool {
        if submission != self.last_submission {
            return false;
        }
        match self.status {
            ContactStatus::Sent => {
                self.fields = ContactFields::default();
            }
            ContactStatus::Failed { .. } => {}
            ContactStatus::Idle | ContactStatus::Sending => return false,
        }
        self.status = ContactStatus::Idle;
        true
    }

    fn is_in_flight(&self, submission: SubmissionId) -> bool {
        self.status == ContactStatus::Sending && submission == self.last_submission
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn submit_enabled(&self) -> bool {
        self.status == ContactStatus::Idle
    }
}
