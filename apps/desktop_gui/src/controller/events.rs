//! UI events drained from the court order form and the store each frame.

use mhr_client_core::{CourtOrderEvent, StoreChange};
use tokio::sync::broadcast::{error::TryRecvError, Receiver};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    CourtOrder(CourtOrderEvent),
    StoreChanged(StoreChange),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    DeclaredValue,
    EventQueue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Drains everything currently queued on `rx`, mapping each item into a [`UiEvent`].
pub fn drain_into<T: Clone>(
    rx: &mut Receiver<T>,
    map: impl Fn(T) -> UiEvent,
    out: &mut Vec<UiEvent>,
) {
    loop {
        match rx.try_recv() {
            Ok(item) => out.push(map(item)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(skipped)) => {
                out.push(UiEvent::Error(UiError::new(
                    UiErrorContext::EventQueue,
                    format!("UI fell behind; {skipped} updates were skipped"),
                )));
            }
        }
    }
}
