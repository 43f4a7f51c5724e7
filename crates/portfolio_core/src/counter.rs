/// Value reported by a counter for one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStep {
    /// Intermediate value; another frame is needed.
    Continue(u64),
    /// Final value, always exactly the target.
    Done(u64),
}

impl CounterStep {
    pub fn value(self) -> u64 {
        match self {
            CounterStep::Continue(value) | CounterStep::Done(value) => value,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, CounterStep::Done(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished,
}

/// Counts a display from zero up to `target` in `steps` equal increments.
///
/// `start` performs the first step immediately; every further step happens on
/// an animation [`frame`](Self::frame). A counter runs once: after the first
/// `start` later calls are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressiveCounter {
    target: u64,
    current: f64,
    increment: f64,
    shown: u64,
    frames: u32,
    phase: Phase,
}

impl ProgressiveCounter {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / f64::from(steps.max(1)),
            shown: 0,
            frames: 0,
            phase: Phase::Idle,
        }
    }

    /// Returns `None` if the counter has already been started.
    pub fn start(&mut self) -> Option<CounterStep> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Running;
        Some(self.step())
    }

    /// Returns `None` unless the counter is running.
    pub fn frame(&mut self) -> Option<CounterStep> {
        if self.phase != Phase::Running {
            return None;
        }
        self.frames += 1;
        Some(self.step())
    }

    fn step(&mut self) -> CounterStep {
        let target = self.target as f64;
        if self.current < target {
            self.current = (self.current + self.increment).min(target);
        }
        if self.current >= target {
            self.phase = Phase::Finished;
            self.shown = self.target;
            CounterStep::Done(self.target)
        } else {
            // current < target, so the ceiling never overshoots.
            self.shown = self.current.ceil() as u64;
            CounterStep::Continue(self.shown)
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value currently on screen.
    pub fn displayed(&self) -> u64 {
        self.shown
    }

    /// Animation frames consumed so far (the initial step is not a frame).
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
