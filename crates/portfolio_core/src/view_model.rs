use crate::{ContactFields, ContactStatus, ElementId, ProjectId, Severity, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLineView {
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterView {
    pub element: ElementId,
    pub value: u64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBarView {
    pub element: ElementId,
    pub width_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModalView {
    pub project: ProjectId,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub metrics: Vec<MetricView>,
    pub github: String,
    pub demo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactView {
    pub fields: ContactFields,
    pub status: ContactStatus,
    pub submit_enabled: bool,
}

/// Everything the presentation layer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub theme: Theme,
    /// `HH:MM:SS UTC`, once the first clock tick arrived.
    pub clock: Option<String>,
    pub footer_year: Option<i32>,
    /// Live log lines, newest last.
    pub log_lines: Vec<LogLineView>,
    pub counters: Vec<CounterView>,
    pub skill_bars: Vec<SkillBarView>,
    pub revealed: Vec<ElementId>,
    pub modal: Option<ProjectModalView>,
    pub scroll_locked: bool,
    pub contact: ContactView,
    pub dirty: bool,
}
