use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use page_logging::{page_info, page_warn};
use portfolio_core::{ContactFields, Effect, Msg, PageConfig};
use portfolio_engine::{ContactPayload, ContactSettings, EngineEvent, EngineHandle, EventSink};

use super::app::AppInput;
use super::persistence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Carries out the effects that leave the page: HTTP, preferences, shutdown.
pub struct EffectRunner {
    engine: EngineHandle,
    prefs_path: PathBuf,
}

impl EffectRunner {
    pub fn new(config: &PageConfig, prefs_path: PathBuf, input_tx: mpsc::Sender<AppInput>) -> Self {
        let settings = ContactSettings::new(config.contact_endpoint());
        page_info!("contact endpoint {}", settings.endpoint);
        let engine = EngineHandle::new(settings, Arc::new(PageSink { tx: input_tx }));
        Self { engine, prefs_path }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Flow {
        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::SubmitContact { submission, fields } => {
                    page_info!("SubmitContact submission={}", submission);
                    self.engine.submit(submission, to_payload(fields));
                }
                Effect::PersistTheme(theme) => {
                    persistence::save_theme(&self.prefs_path, theme);
                }
                Effect::Shutdown => {
                    self.engine.shutdown();
                    flow = Flow::Stop;
                }
                Effect::ScheduleMsg { .. } | Effect::RequestFrame { .. } => {
                    page_warn!("timing effect escaped the dispatcher: {:?}", effect);
                }
            }
        }
        flow
    }
}

/// Feeds engine completions back into the page as messages.
struct PageSink {
    tx: mpsc::Sender<AppInput>,
}

impl EventSink for PageSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::ContactCompleted { submission, result } => match result {
                Ok(()) => Msg::ContactSucceeded { submission },
                Err(err) => {
                    page_warn!("Submission {} failed: {}", submission, err);
                    Msg::ContactFailed {
                        submission,
                        message: err.message,
                    }
                }
            },
        };
        let _ = self.tx.send(AppInput::Page(msg));
    }
}

fn to_payload(fields: ContactFields) -> ContactPayload {
    ContactPayload {
        name: fields.name,
        email: fields.email,
        subject: fields.subject,
        message: fields.message,
        honeypot: fields.honeypot,
    }
}
