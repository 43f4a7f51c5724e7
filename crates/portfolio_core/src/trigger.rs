#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Unarmed,
    Armed,
    Fired,
}

/// One-shot visibility gate: `Unarmed -> Armed -> Fired`, never back.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: TriggerState,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: TriggerState::Unarmed,
        }
    }

    pub fn armed(threshold: f64) -> Self {
        let mut trigger = Self::new(threshold);
        trigger.arm();
        trigger
    }

    /// Only an unarmed trigger can be armed; a fired one stays fired.
    pub fn arm(&mut self) {
        if self.state == TriggerState::Unarmed {
            self.state = TriggerState::Armed;
        }
    }

    /// Feeds one intersection ratio. Returns `true` exactly once, on the first
    /// ratio that is non-zero and reaches the threshold while armed.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state != TriggerState::Armed {
            return false;
        }
        if ratio > 0.0 && ratio >= self.threshold {
            self.state = TriggerState::Fired;
            return true;
        }
        false
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
