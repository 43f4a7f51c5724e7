use std::collections::BTreeMap;

use crate::trigger::VisibilityTrigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

/// What happens when a watched element first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Fade the element in.
    Reveal,
    /// Grow a skill bar to `width_pct` percent.
    SkillBar { width_pct: u8 },
    /// Count a statistic up to `target`.
    Counter { target: u64 },
}

#[derive(Debug, Clone, PartialEq)]
struct Watched {
    kind: ElementKind,
    trigger: VisibilityTrigger,
}

/// Armed visibility triggers, keyed by element.
///
/// A trigger is removed as soon as it fires, so an element that was already
/// handled is indistinguishable from one that was never watched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchTable {
    watched: BTreeMap<ElementId, Watched>,
}

impl WatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a trigger for `element`. Returns `false` if it is already watched.
    pub fn watch(&mut self, element: ElementId, kind: ElementKind, threshold: f64) -> bool {
        if self.watched.contains_key(&element) {
            return false;
        }
        self.watched.insert(
            element,
            Watched {
                kind,
                trigger: VisibilityTrigger::armed(threshold),
            },
        );
        true
    }

    /// Feeds a visibility ratio and returns the element kind if its trigger fired.
    pub fn observe(&mut self, element: ElementId, ratio: f64) -> Option<ElementKind> {
        let watched = self.watched.get_mut(&element)?;
        if !watched.trigger.observe(ratio) {
            return None;
        }
        self.watched.remove(&element).map(|watched| watched.kind)
    }

    /// Drops every armed trigger and returns how many there were.
    pub fn detach_all(&mut self) -> usize {
        let count = self.watched.len();
        self.watched.clear();
        count
    }

    pub fn is_watched(&self, element: ElementId) -> bool {
        self.watched.contains_key(&element)
    }

    pub fn armed_count(&self) -> usize {
        self.watched.len()
    }
}
