use page_logging::{page_debug, page_info};

use crate::{AppState, CounterStep, Effect, ElementId, ElementKind, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = apply(&mut state, msg);
    (state, effects)
}

/// Applies `msg` in place. A torn-down page ignores everything.
pub(crate) fn apply(state: &mut AppState, msg: Msg) -> Vec<Effect> {
    if state.is_torn_down() {
        return Vec::new();
    }

    match msg {
        Msg::PageLoaded { theme, year } => {
            state.load(theme, year);
            Vec::new()
        }
        Msg::ClockTick { time } => {
            state.set_clock(time);
            Vec::new()
        }
        Msg::LogFeedTick => {
            state.tick_log_feed();
            Vec::new()
        }
        Msg::WatchElement { element, kind } => {
            if !state.watch(element, kind) {
                page_debug!("element {:?} already registered", element);
            }
            Vec::new()
        }
        Msg::ElementVisibility { element, ratio } => match state.observe(element, ratio) {
            Some(kind) => on_first_visible(state, element, kind),
            None => Vec::new(),
        },
        Msg::CounterFrame { element } => match state.counter_frame(element) {
            Some(step) => frame_request(element, step),
            None => Vec::new(),
        },
        Msg::SkillBarGrow { element } => {
            state.grow_skill_bar(element);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.toggle_theme();
            vec![Effect::PersistTheme(theme)]
        }
        Msg::ProjectOpened { project } => {
            if !state.open_modal(project) {
                page_debug!("no project with id {:?}", project);
            }
            Vec::new()
        }
        Msg::ModalCloseClicked | Msg::ModalBackdropClicked => {
            state.close_modal();
            Vec::new()
        }
        Msg::ContactFieldEdited { field, value } => {
            state.contact_mut().edit(field, value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ContactSubmitted => match state.contact_mut().begin_submit() {
            Some((submission, fields)) => {
                state.mark_dirty();
                vec![Effect::SubmitContact { submission, fields }]
            }
            None => Vec::new(),
        },
        Msg::ContactSucceeded { submission } => {
            if state.contact_mut().succeed(submission) {
                state.mark_dirty();
                vec![Effect::ScheduleMsg {
                    after: state.config().sent_revert_delay,
                    msg: Msg::ContactRevert { submission },
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ContactFailed {
            submission,
            message,
        } => {
            if state.contact_mut().fail(submission, message) {
                state.mark_dirty();
                vec![Effect::ScheduleMsg {
                    after: state.config().failed_revert_delay,
                    msg: Msg::ContactRevert { submission },
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ContactRevert { submission } => {
            if state.contact_mut().revert(submission) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Teardown => {
            let detached = state.tear_down();
            page_info!("page torn down, {} armed trigger(s) detached", detached);
            vec![Effect::Shutdown]
        }
    }
}

fn on_first_visible(state: &mut AppState, element: ElementId, kind: ElementKind) -> Vec<Effect> {
    match kind {
        ElementKind::Reveal => {
            state.reveal(element);
            Vec::new()
        }
        ElementKind::SkillBar { .. } => vec![Effect::ScheduleMsg {
            after: state.config().skill_bar_delay,
            msg: Msg::SkillBarGrow { element },
        }],
        ElementKind::Counter { .. } => match state.start_counter(element) {
            Some(step) => frame_request(element, step),
            None => Vec::new(),
        },
    }
}

fn frame_request(element: ElementId, step: CounterStep) -> Vec<Effect> {
    match step {
        CounterStep::Continue(_) => vec![Effect::RequestFrame { element }],
        CounterStep::Done(_) => Vec::new(),
    }
}
