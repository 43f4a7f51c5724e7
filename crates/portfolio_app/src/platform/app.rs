use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{Datelike, Utc};
use page_logging::{page_debug, page_info, page_warn};
use portfolio_core::{AppViewModel, ClockSource, Dispatcher, Msg};

use super::effects::{EffectRunner, Flow};
use super::layout::{self, PageElement, PAGE_HEIGHT, VIEWPORT_HEIGHT};
use super::logging;
use super::settings::Settings;
use super::terminal::commands::{self, Command, HELP};
use super::terminal::render;
use super::viewport::Viewport;

/// Longest sleep between loop turns when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Everything that can wake the main loop.
pub enum AppInput {
    Command(Command),
    Page(Msg),
    StdinClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    logging::initialize(settings.log_destination, settings.log_level);
    page_info!("starting portfolio page, api base {}", settings.page.api_base);

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let effects = EffectRunner::new(&settings.page, settings.prefs_path.clone(), input_tx.clone());

    let clock: ClockSource = Arc::new(|| Utc::now().format("%H:%M:%S UTC").to_string());
    let mut page = Dispatcher::new(settings.page.clone(), clock);
    let elements = layout::page_elements();
    let mut viewport = Viewport::new(VIEWPORT_HEIGHT, PAGE_HEIGHT);

    let theme = super::persistence::load_theme(&settings.prefs_path);
    effects.run(page.dispatch(Msg::PageLoaded {
        theme,
        year: Utc::now().year(),
    }));
    for element in &elements {
        page.dispatch(Msg::WatchElement {
            element: element.id,
            kind: element.kind,
        });
    }
    report_visibility(&mut page, &viewport, &elements);

    spawn_stdin_reader(input_tx);
    println!("{HELP}");

    let started = Instant::now();
    let mut stdin_open = true;
    loop {
        let mut flow = Flow::Continue;
        match input_rx.recv_timeout(wait_time(&page, started)) {
            Ok(AppInput::Command(Command::Quit)) => {
                flow = effects.run(page.teardown());
            }
            Ok(AppInput::Command(Command::Help)) => println!("{HELP}"),
            Ok(AppInput::Command(command)) => {
                if let Some(msg) = apply_command(command, &mut viewport) {
                    flow = effects.run(page.dispatch(msg));
                }
                report_visibility(&mut page, &viewport, &elements);
            }
            Ok(AppInput::Page(msg)) => {
                flow = effects.run(page.dispatch(msg));
            }
            Ok(AppInput::StdinClosed) => {
                stdin_open = false;
                if settings.run_for.is_none() {
                    flow = effects.run(page.teardown());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                page_warn!("input channel closed");
                flow = effects.run(page.teardown());
            }
        }

        if flow == Flow::Continue {
            flow = effects.run(page.advance_to(started.elapsed()));
        }
        if flow == Flow::Continue {
            if let Some(limit) = settings.run_for {
                if started.elapsed() >= limit {
                    page_info!("run limit of {:?} reached", limit);
                    flow = effects.run(page.teardown());
                }
            }
        }

        if let Some(view) = page.take_render() {
            draw(&view, &elements);
        }
        if flow == Flow::Stop {
            break;
        }
    }

    page_info!(
        "page closed after {:?} (stdin open: {})",
        started.elapsed(),
        stdin_open
    );
    Ok(())
}

fn wait_time(page: &Dispatcher, started: Instant) -> Duration {
    match page.next_deadline() {
        Some(deadline) => deadline.saturating_sub(started.elapsed()).min(IDLE_WAIT),
        None => IDLE_WAIT,
    }
}

/// Maps a command to a page message. Scrolling only moves the viewport.
fn apply_command(command: Command, viewport: &mut Viewport) -> Option<Msg> {
    match command {
        Command::ToggleTheme => Some(Msg::ThemeToggled),
        Command::OpenProject(project) => Some(Msg::ProjectOpened { project }),
        Command::CloseModal => Some(Msg::ModalCloseClicked),
        Command::ClickBackdrop => Some(Msg::ModalBackdropClicked),
        Command::ScrollBy(delta) => {
            viewport.scroll_by(delta);
            None
        }
        Command::ScrollTo(top) => {
            viewport.scroll_to(top);
            None
        }
        Command::Edit(field, value) => Some(Msg::ContactFieldEdited { field, value }),
        Command::Submit => Some(Msg::ContactSubmitted),
        Command::Help | Command::Quit => None,
    }
}

fn report_visibility(page: &mut Dispatcher, viewport: &Viewport, elements: &[PageElement]) {
    page_debug!("viewport at {:.0}px", viewport.top());
    for element in elements {
        let ratio = viewport.intersection_ratio(element);
        if ratio > 0.0 {
            page.dispatch(Msg::ElementVisibility {
                element: element.id,
                ratio,
            });
        }
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match commands::parse(&line) {
                Ok(Some(command)) => {
                    if tx.send(AppInput::Command(command)).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        let _ = tx.send(AppInput::StdinClosed);
    });
}

fn draw(view: &AppViewModel, elements: &[PageElement]) {
    let mut out = io::stdout().lock();
    for line in render::render(view, elements) {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out);
    let _ = out.flush();
}
