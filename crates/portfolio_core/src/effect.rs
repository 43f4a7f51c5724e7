use std::time::Duration;

use crate::{ContactFields, ElementId, Msg, SubmissionId, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST the contact form. Completion comes back as `ContactSucceeded`/`ContactFailed`.
    SubmitContact {
        submission: SubmissionId,
        fields: ContactFields,
    },
    /// Store the theme flag.
    PersistTheme(Theme),
    /// Deliver `msg` back to the page after `after`.
    ScheduleMsg { after: Duration, msg: Msg },
    /// Deliver `CounterFrame` for `element` on the next animation frame.
    RequestFrame { element: ElementId },
    /// Page is gone; the platform should stop its workers.
    Shutdown,
}

impl Effect {
    /// Timing effects are consumed by the dispatcher and never reach the platform.
    pub fn is_scheduling(&self) -> bool {
        matches!(self, Effect::ScheduleMsg { .. } | Effect::RequestFrame { .. })
    }
}
