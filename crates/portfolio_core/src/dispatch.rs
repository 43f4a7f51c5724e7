use std::sync::Arc;
use std::time::Duration;

use page_logging::{page_trace, set_page_time_ms};

use crate::update::apply;
use crate::{AppState, AppViewModel, Effect, Msg, PageConfig, Scheduler, Wakeup};

/// Produces the dashboard clock text (`HH:MM:SS UTC`).
pub type ClockSource = Arc<dyn Fn() -> String + Send + Sync>;

/// The page's single dispatch loop.
///
/// Owns the state and the timer queue. Every message runs to completion
/// through [`update`](fn@crate::update), applied in place. Timing effects are
/// absorbed into the scheduler and only the effects that need the outside
/// world (HTTP, persistence, shutdown) are returned to the caller.
pub struct Dispatcher {
    state: AppState,
    scheduler: Scheduler,
    clock: ClockSource,
}

impl Dispatcher {
    pub fn new(config: PageConfig, clock: ClockSource) -> Self {
        Self::with_state(AppState::new(config), clock)
    }

    /// Starts the clock and log-feed intervals and shows the clock right away.
    pub fn with_state(state: AppState, clock: ClockSource) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.every(state.config().clock_period, Wakeup::Clock);
        scheduler.every(state.config().log_period, Wakeup::LogFeed);
        let mut dispatcher = Self {
            state,
            scheduler,
            clock,
        };
        dispatcher.wake(Wakeup::Clock);
        dispatcher
    }

    /// Applies one message and returns the effects for the platform.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let effects = apply(&mut self.state, msg);
        self.route(effects)
    }

    /// Fires every timer due up to `now`, including ones scheduled along the way.
    ///
    /// Virtual time is replayed exactly: if the host stalls past several
    /// periods, every missed clock and log tick fires here, in due order.
    pub fn advance_to(&mut self, now: Duration) -> Vec<Effect> {
        let mut external = Vec::new();
        while let Some(wakeup) = self.scheduler.pop_due(now) {
            set_page_time_ms(millis(self.scheduler.now()));
            external.extend(self.wake(wakeup));
        }
        self.scheduler.advance_clock(now);
        set_page_time_ms(millis(self.scheduler.now()));
        external
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<Effect> {
        let target = self.scheduler.now() + delta;
        self.advance_to(target)
    }

    /// Stops all timers and detaches any still-armed triggers.
    pub fn teardown(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::Teardown)
    }

    fn wake(&mut self, wakeup: Wakeup) -> Vec<Effect> {
        let msg = match wakeup {
            Wakeup::Clock => Msg::ClockTick {
                time: (self.clock)(),
            },
            Wakeup::LogFeed => Msg::LogFeedTick,
            Wakeup::Deliver(msg) => msg,
        };
        page_trace!("wake: {:?}", msg);
        self.dispatch(msg)
    }

    fn route(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut external = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::ScheduleMsg { after, msg } => {
                    self.scheduler.after(after, Wakeup::Deliver(msg));
                }
                Effect::RequestFrame { element } => {
                    self.scheduler.after(
                        self.state.config().frame_interval,
                        Wakeup::Deliver(Msg::CounterFrame { element }),
                    );
                }
                Effect::Shutdown => {
                    let cancelled = self.scheduler.cancel_all();
                    page_trace!("cancelled {} pending timer(s)", cancelled);
                    external.push(Effect::Shutdown);
                }
                other => external.push(other),
            }
        }
        external
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Returns a fresh view model if anything changed since the last call.
    pub fn take_render(&mut self) -> Option<AppViewModel> {
        let view = self.state.view();
        if self.state.consume_dirty() {
            Some(view)
        } else {
            None
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
