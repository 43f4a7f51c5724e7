use crate::{ContactField, ElementId, ElementKind, ProjectId, SubmissionId, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page finished loading with the persisted theme and the current year.
    PageLoaded { theme: Theme, year: i32 },
    /// Dashboard clock period elapsed; `time` is already formatted.
    ClockTick { time: String },
    /// Live log period elapsed.
    LogFeedTick,
    /// Start watching an element for its first appearance.
    WatchElement {
        element: ElementId,
        kind: ElementKind,
    },
    /// Viewport intersection ratio of an element changed.
    ElementVisibility { element: ElementId, ratio: f64 },
    /// Animation frame for a running counter.
    CounterFrame { element: ElementId },
    /// Delayed width change of a skill bar.
    SkillBarGrow { element: ElementId },
    /// User clicked the theme toggle.
    ThemeToggled,
    /// User clicked a project's details button.
    ProjectOpened { project: ProjectId },
    /// User clicked the modal close button.
    ModalCloseClicked,
    /// User clicked outside the modal content.
    ModalBackdropClicked,
    /// User edited a contact form field.
    ContactFieldEdited { field: ContactField, value: String },
    /// User clicked Send.
    ContactSubmitted,
    /// Engine delivered a submission.
    ContactSucceeded { submission: SubmissionId },
    /// Engine failed a submission; `message` is shown to the user.
    ContactFailed {
        submission: SubmissionId,
        message: String,
    },
    /// Transient Sent/Failed state expired.
    ContactRevert { submission: SubmissionId },
    /// Page is unloading: stop timers and detach triggers.
    Teardown,
}
