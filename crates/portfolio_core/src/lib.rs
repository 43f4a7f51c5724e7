//! Portfolio core: pure page state machine, timers and view-model helpers.
mod config;
mod contact;
mod counter;
mod dispatch;
mod effect;
mod elements;
mod log_feed;
mod msg;
mod projects;
mod scheduler;
mod state;
mod theme;
mod trigger;
mod update;
mod view_model;

pub use config::{PageConfig, DEFAULT_API_BASE};
pub use contact::{ContactField, ContactFields, ContactForm, ContactStatus, SubmissionId};
pub use counter::{CounterStep, ProgressiveCounter};
pub use dispatch::{ClockSource, Dispatcher};
pub use effect::Effect;
pub use elements::{ElementId, ElementKind, WatchTable};
pub use log_feed::{default_catalog, LogEntry, RotatingLogFeed, Severity};
pub use msg::Msg;
pub use projects::{find_project, metric_label, projects, Project, ProjectId};
pub use scheduler::{Scheduler, Wakeup};
pub use state::AppState;
pub use theme::Theme;
pub use trigger::{TriggerState, VisibilityTrigger};
pub use update::update;
pub use view_model::{
    AppViewModel, ContactView, CounterView, LogLineView, MetricView, ProjectModalView,
    SkillBarView,
};
