use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub text: String,
}

impl LogEntry {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }
}

const DASHBOARD_MESSAGES: [(Severity, &str); 10] = [
    (Severity::Success, "[INFO] ML model deployed to production"),
    (Severity::Info, "[INFO] Neural network training completed"),
    (Severity::Success, "[INFO] AI inference endpoint healthy"),
    (Severity::Info, "[INFO] Model accuracy: 94.2%"),
    (Severity::Success, "[INFO] AutoML pipeline executed"),
    (Severity::Info, "[INFO] Feature store updated"),
    (Severity::Success, "[INFO] A/B test model deployed"),
    (Severity::Info, "[INFO] GPU cluster auto-scaled"),
    (Severity::Success, "[INFO] Data drift detection active"),
    (Severity::Info, "[INFO] MLOps pipeline optimized"),
];

/// The canned messages of the live dashboard, in display order.
pub fn default_catalog() -> Vec<LogEntry> {
    DASHBOARD_MESSAGES
        .iter()
        .map(|(severity, text)| LogEntry::new(*severity, *text))
        .collect()
}

/// Fixed-capacity display of canned log lines, fed from a circular catalog.
///
/// Each [`tick`](Self::tick) shows the entry under the cursor and moves the
/// cursor on. Once more than `capacity` entries are shown the oldest one is
/// dropped, so the display is always the newest `capacity` entries, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatingLogFeed {
    catalog: Vec<LogEntry>,
    cursor: usize,
    capacity: usize,
    displayed: VecDeque<LogEntry>,
}

impl RotatingLogFeed {
    /// Returns `None` for an empty catalog. A zero capacity is raised to one.
    pub fn new(catalog: Vec<LogEntry>, capacity: usize) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }
        Some(Self::from_parts(catalog, capacity))
    }

    pub fn with_default_catalog(capacity: usize) -> Self {
        Self::from_parts(default_catalog(), capacity)
    }

    fn from_parts(catalog: Vec<LogEntry>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            catalog,
            cursor: 0,
            capacity,
            displayed: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Shows the next catalog entry and returns it.
    pub fn tick(&mut self) -> &LogEntry {
        let shown = self.cursor;
        self.displayed.push_back(self.catalog[shown].clone());
        if self.displayed.len() > self.capacity {
            self.displayed.pop_front();
        }
        self.cursor = (shown + 1) % self.catalog.len();
        &self.catalog[shown]
    }

    /// Entries currently on screen, oldest first.
    pub fn displayed(&self) -> impl ExactSizeIterator<Item = &LogEntry> {
        self.displayed.iter()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn catalog(&self) -> &[LogEntry] {
        &self.catalog
    }
}
