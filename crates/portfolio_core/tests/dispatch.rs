use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use portfolio_core::{
    AppState, ClockSource, Dispatcher, Effect, ElementId, ElementKind, LogEntry, Msg, PageConfig,
    RotatingLogFeed, Theme,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn counting_clock() -> (ClockSource, Arc<AtomicU32>) {
    let calls = Arc::new(AtomicU32::new(0));
    let seen = calls.clone();
    let clock: ClockSource = Arc::new(move || {
        let n = seen.fetch_add(1, Ordering::SeqCst);
        format!("00:00:{n:02} UTC")
    });
    (clock, calls)
}

fn dispatcher() -> Dispatcher {
    let (clock, _) = counting_clock();
    Dispatcher::new(PageConfig::default(), clock)
}

#[test]
fn clock_shows_immediately_and_every_second() {
    init_logging();
    let (clock, calls) = counting_clock();
    let mut page = Dispatcher::new(PageConfig::default(), clock);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(page.state().view().clock.as_deref(), Some("00:00:00 UTC"));

    let effects = page.advance_to(Duration::from_millis(3500));
    assert!(effects.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(page.state().view().clock.as_deref(), Some("00:00:03 UTC"));
}

#[test]
fn log_feed_ticks_every_three_seconds() {
    init_logging();
    let mut page = dispatcher();
    page.advance_to(Duration::from_millis(2999));
    assert!(page.state().view().log_lines.is_empty());

    page.advance_to(Duration::from_secs(3));
    assert_eq!(page.state().view().log_lines.len(), 1);

    page.advance_to(Duration::from_secs(15));
    let lines = page.state().view().log_lines;
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].text, "[INFO] AutoML pipeline executed");
    assert_eq!(page.state().log_feed().cursor(), 5);
}

#[test]
fn custom_catalog_rotates_through_the_dispatcher() {
    init_logging();
    let feed = RotatingLogFeed::new(
        vec![
            LogEntry::info("A"),
            LogEntry::success("B"),
            LogEntry::info("C"),
        ],
        3,
    )
    .expect("non-empty catalog");
    let (clock, _) = counting_clock();
    let mut page = Dispatcher::with_state(
        AppState::with_log_feed(PageConfig::default(), feed),
        clock,
    );

    page.advance_to(Duration::from_secs(15));
    let shown: Vec<String> = page
        .state()
        .view()
        .log_lines
        .into_iter()
        .map(|line| line.text)
        .collect();
    assert_eq!(shown, vec!["B", "C", "A"]);
    assert_eq!(page.state().log_feed().cursor(), 2);
    assert_eq!(page.state().log_feed().catalog().len(), 3);
}

#[test]
fn counter_runs_to_target_on_animation_frames() {
    init_logging();
    let mut page = dispatcher();
    let stat = ElementId(7);
    page.dispatch(Msg::WatchElement {
        element: stat,
        kind: ElementKind::Counter { target: 250 },
    });
    page.dispatch(Msg::ElementVisibility {
        element: stat,
        ratio: 0.4,
    });
    assert!(!page.state().counter(stat).unwrap().is_started());

    page.dispatch(Msg::ElementVisibility {
        element: stat,
        ratio: 0.6,
    });
    assert_eq!(page.state().counter(stat).unwrap().displayed(), 3);

    // 100 frames at 16ms fit well inside two seconds.
    page.advance_by(Duration::from_secs(2));
    let counter = page.state().counter(stat).unwrap();
    assert!(counter.is_finished());
    assert_eq!(counter.displayed(), 250);

    let frames = counter.frames();
    page.dispatch(Msg::ElementVisibility {
        element: stat,
        ratio: 1.0,
    });
    page.advance_by(Duration::from_secs(1));
    assert_eq!(page.state().counter(stat).unwrap().frames(), frames);
}

#[test]
fn skill_bar_grows_after_delay() {
    init_logging();
    let mut page = dispatcher();
    let bar = ElementId(3);
    page.dispatch(Msg::WatchElement {
        element: bar,
        kind: ElementKind::SkillBar { width_pct: 85 },
    });
    page.dispatch(Msg::ElementVisibility {
        element: bar,
        ratio: 0.5,
    });
    assert_eq!(page.state().view().skill_bars[0].width_pct, 0);

    page.advance_by(Duration::from_millis(199));
    assert_eq!(page.state().view().skill_bars[0].width_pct, 0);

    page.advance_by(Duration::from_millis(1));
    assert_eq!(page.state().view().skill_bars[0].width_pct, 85);
}

#[test]
fn reveal_uses_the_lower_threshold() {
    init_logging();
    let mut page = dispatcher();
    let card = ElementId(11);
    page.dispatch(Msg::WatchElement {
        element: card,
        kind: ElementKind::Reveal,
    });
    page.dispatch(Msg::ElementVisibility {
        element: card,
        ratio: 0.1,
    });
    assert_eq!(page.state().view().revealed, vec![card]);
    assert_eq!(page.state().armed_triggers(), 0);
}

#[test]
fn theme_toggle_is_persisted() {
    init_logging();
    let mut page = dispatcher();
    page.dispatch(Msg::PageLoaded {
        theme: Theme::Dark,
        year: 2026,
    });
    let effects = page.dispatch(Msg::ThemeToggled);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Light)]);
    assert_eq!(page.state().view().footer_year, Some(2026));
}

#[test]
fn teardown_stops_timers_and_detaches_triggers() {
    init_logging();
    let mut page = dispatcher();
    page.dispatch(Msg::WatchElement {
        element: ElementId(1),
        kind: ElementKind::Reveal,
    });
    page.dispatch(Msg::WatchElement {
        element: ElementId(2),
        kind: ElementKind::Counter { target: 10 },
    });
    assert_eq!(page.pending_timers(), 2);

    let effects = page.teardown();
    assert_eq!(effects, vec![Effect::Shutdown]);
    assert_eq!(page.pending_timers(), 0);
    assert_eq!(page.next_deadline(), None);
    assert_eq!(page.state().armed_triggers(), 0);

    let before = page.state().view();
    assert!(page.advance_by(Duration::from_secs(30)).is_empty());
    page.dispatch(Msg::ElementVisibility {
        element: ElementId(2),
        ratio: 1.0,
    });
    page.dispatch(Msg::ThemeToggled);
    assert_eq!(page.state().view(), before);
}

#[test]
fn take_render_reports_each_change_once() {
    init_logging();
    let mut page = dispatcher();
    assert!(page.take_render().is_some());
    assert!(page.take_render().is_none());

    page.dispatch(Msg::ThemeToggled);
    let view = page.take_render().expect("theme change renders");
    assert_eq!(view.theme, Theme::Dark);
    assert!(page.take_render().is_none());
}
