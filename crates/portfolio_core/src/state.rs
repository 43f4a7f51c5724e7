use std::collections::{BTreeMap, BTreeSet};

use page_logging::page_debug;

use crate::view_model::{
    AppViewModel, ContactView, CounterView, LogLineView, MetricView, ProjectModalView,
    SkillBarView,
};
use crate::{
    find_project, metric_label, ContactForm, CounterStep, ElementId, ElementKind, PageConfig,
    ProgressiveCounter, ProjectId, RotatingLogFeed, Theme, WatchTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SkillBar {
    target_pct: u8,
    width_pct: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    config: PageConfig,
    theme: Theme,
    clock: Option<String>,
    footer_year: Option<i32>,
    log_feed: RotatingLogFeed,
    watches: WatchTable,
    counters: BTreeMap<ElementId, ProgressiveCounter>,
    skill_bars: BTreeMap<ElementId, SkillBar>,
    revealed: BTreeSet<ElementId>,
    modal: Option<ProjectId>,
    contact: ContactForm,
    torn_down: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl AppState {
    pub fn new(config: PageConfig) -> Self {
        let log_feed = RotatingLogFeed::with_default_catalog(config.log_capacity);
        Self::with_log_feed(config, log_feed)
    }

    pub fn with_log_feed(config: PageConfig, log_feed: RotatingLogFeed) -> Self {
        Self {
            config,
            theme: Theme::default(),
            clock: None,
            footer_year: None,
            log_feed,
            watches: WatchTable::new(),
            counters: BTreeMap::new(),
            skill_bars: BTreeMap::new(),
            revealed: BTreeSet::new(),
            modal: None,
            contact: ContactForm::new(),
            torn_down: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            theme: self.theme,
            clock: self.clock.clone(),
            footer_year: self.footer_year,
            log_lines: self
                .log_feed
                .displayed()
                .map(|entry| LogLineView {
                    severity: entry.severity,
                    text: entry.text.clone(),
                })
                .collect(),
            counters: self
                .counters
                .iter()
                .map(|(element, counter)| CounterView {
                    element: *element,
                    value: counter.displayed(),
                    finished: counter.is_finished(),
                })
                .collect(),
            skill_bars: self
                .skill_bars
                .iter()
                .map(|(element, bar)| SkillBarView {
                    element: *element,
                    width_pct: bar.width_pct,
                })
                .collect(),
            revealed: self.revealed.iter().copied().collect(),
            modal: self.modal.and_then(modal_view),
            scroll_locked: self.modal.is_some(),
            contact: ContactView {
                fields: self.contact.fields().clone(),
                status: self.contact.status().clone(),
                submit_enabled: self.contact.submit_enabled(),
            },
            dirty: self.dirty,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn log_feed(&self) -> &RotatingLogFeed {
        &self.log_feed
    }

    pub fn counter(&self, element: ElementId) -> Option<&ProgressiveCounter> {
        self.counters.get(&element)
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn armed_triggers(&self) -> usize {
        self.watches.armed_count()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub(crate) fn load(&mut self, theme: Theme, year: i32) {
        self.theme = theme;
        self.footer_year = Some(year);
        self.mark_dirty();
    }

    pub(crate) fn set_clock(&mut self, time: String) {
        if self.clock.as_deref() != Some(time.as_str()) {
            self.clock = Some(time);
            self.mark_dirty();
        }
    }

    pub(crate) fn tick_log_feed(&mut self) {
        let entry = self.log_feed.tick();
        page_debug!("live log: {}", entry.text);
        self.mark_dirty();
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        self.theme
    }

    /// Arms a trigger for `element` with the threshold its kind calls for.
    pub(crate) fn watch(&mut self, element: ElementId, kind: ElementKind) -> bool {
        let threshold = match kind {
            ElementKind::Reveal => self.config.reveal_threshold,
            ElementKind::SkillBar { .. } | ElementKind::Counter { .. } => {
                self.config.counter_threshold
            }
        };
        if self.is_registered(element) || !self.watches.watch(element, kind, threshold) {
            return false;
        }
        match kind {
            ElementKind::Reveal => {}
            ElementKind::SkillBar { width_pct } => {
                self.skill_bars.insert(
                    element,
                    SkillBar {
                        target_pct: width_pct.min(100),
                        width_pct: 0,
                    },
                );
            }
            ElementKind::Counter { target } => {
                self.counters.insert(
                    element,
                    ProgressiveCounter::new(target, self.config.counter_steps),
                );
            }
        }
        self.mark_dirty();
        true
    }

    fn is_registered(&self, element: ElementId) -> bool {
        self.watches.is_watched(element)
            || self.counters.contains_key(&element)
            || self.skill_bars.contains_key(&element)
            || self.revealed.contains(&element)
    }

    pub(crate) fn observe(&mut self, element: ElementId, ratio: f64) -> Option<ElementKind> {
        let kind = self.watches.observe(element, ratio)?;
        page_debug!("element {:?} became visible ({:?})", element, kind);
        Some(kind)
    }

    pub(crate) fn reveal(&mut self, element: ElementId) {
        if self.revealed.insert(element) {
            self.mark_dirty();
        }
    }

    pub(crate) fn start_counter(&mut self, element: ElementId) -> Option<CounterStep> {
        let step = self.counters.get_mut(&element)?.start()?;
        self.mark_dirty();
        Some(step)
    }

    pub(crate) fn counter_frame(&mut self, element: ElementId) -> Option<CounterStep> {
        let step = self.counters.get_mut(&element)?.frame()?;
        self.mark_dirty();
        Some(step)
    }

    pub(crate) fn grow_skill_bar(&mut self, element: ElementId) {
        if let Some(bar) = self.skill_bars.get_mut(&element) {
            if bar.width_pct != bar.target_pct {
                bar.width_pct = bar.target_pct;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn open_modal(&mut self, project: ProjectId) -> bool {
        if find_project(project).is_none() {
            return false;
        }
        self.modal = Some(project);
        self.mark_dirty();
        true
    }

    pub(crate) fn close_modal(&mut self) -> bool {
        if self.modal.take().is_none() {
            return false;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn tear_down(&mut self) -> usize {
        self.torn_down = true;
        self.mark_dirty();
        self.watches.detach_all()
    }
}

fn modal_view(id: ProjectId) -> Option<ProjectModalView> {
    let project = find_project(id)?;
    Some(ProjectModalView {
        project: id,
        title: project.title.to_string(),
        description: project.description.to_string(),
        features: project.features.iter().map(|f| f.to_string()).collect(),
        technologies: project.technologies.iter().map(|t| t.to_string()).collect(),
        metrics: project
            .metrics
            .iter()
            .map(|(key, value)| MetricView {
                value: value.to_string(),
                label: metric_label(key),
            })
            .collect(),
        github: project.github.to_string(),
        demo: project.demo.to_string(),
    })
}
