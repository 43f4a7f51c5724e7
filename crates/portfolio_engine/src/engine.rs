use std::sync::{mpsc, Arc};
use std::thread;

use page_logging::{page_error, page_info};
use tokio_util::sync::CancellationToken;

use crate::submit::{ContactSender, ContactSettings, ReqwestContactSender};
use crate::{ContactError, ContactPayload, EngineEvent, FailureKind, SubmissionId};

/// Receiver of engine events. Called from the engine's worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Submit {
        submission: SubmissionId,
        payload: ContactPayload,
    },
}

/// Runs submissions on a background tokio runtime.
///
/// While the handle is alive every submission produces exactly one
/// `ContactCompleted` event, including ones cut short by
/// [`shutdown`](Self::shutdown).
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: ContactSettings, sink: Arc<dyn EventSink>) -> Self {
        Self::with_sender(Arc::new(ReqwestContactSender::new(settings)), sink)
    }

    pub fn with_sender(sender: Arc<dyn ContactSender>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    page_error!("engine runtime unavailable: {}", err);
                    fail_all(cmd_rx, sink.as_ref());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let sender = sender.clone();
                let sink = sink.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(sender.as_ref(), command, sink.as_ref(), &cancel).await;
                });
            }
            page_info!("engine command channel closed");
        });

        Self { cmd_tx, cancel }
    }

    pub fn submit(&self, submission: SubmissionId, payload: ContactPayload) {
        if self.cancel.is_cancelled() {
            return;
        }
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission,
            payload,
        });
    }

    /// Cancels in-flight submissions. Later submissions are dropped.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

async fn handle_command(
    sender: &dyn ContactSender,
    command: EngineCommand,
    sink: &dyn EventSink,
    cancel: &CancellationToken,
) {
    match command {
        EngineCommand::Submit {
            submission,
            payload,
        } => {
            let result = cancel
                .run_until_cancelled(sender.submit(&payload))
                .await
                .unwrap_or_else(|| Err(ContactError::generic(FailureKind::Cancelled)));
            sink.emit(EngineEvent::ContactCompleted { submission, result });
        }
    }
}

fn fail_all(cmd_rx: mpsc::Receiver<EngineCommand>, sink: &dyn EventSink) {
    while let Ok(EngineCommand::Submit { submission, .. }) = cmd_rx.recv() {
        sink.emit(EngineEvent::ContactCompleted {
            submission,
            result: Err(ContactError::generic(FailureKind::Network)),
        });
    }
}
