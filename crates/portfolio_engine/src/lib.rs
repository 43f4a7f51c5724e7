//! Portfolio engine: contact submission and preference file IO.
mod engine;
mod payload;
mod persist;
mod submit;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use payload::{ContactPayload, ErrorBody, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_SUBJECT_LEN};
pub use persist::{read_if_exists, write_atomically, PersistError};
pub use submit::{ContactSender, ContactSettings, ReqwestContactSender};
pub use types::{ContactError, EngineEvent, FailureKind, SubmissionId};
