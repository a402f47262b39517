//! Input-side entry point: turns task events into requests on the shared
//! state.

use core::future::Future;

use embassy_futures::select::{select, Either};

use crate::error::{Error, Result};
use crate::page::{CursorDirection, MenuState};
use crate::ui::TaskEvent;

/// Dispatches task events for one page.
#[derive(Clone, Copy)]
pub struct TaskHandler<'a> {
    state: &'a MenuState,
}

impl<'a> TaskHandler<'a> {
    pub fn new(state: &'a MenuState) -> Self {
        Self { state }
    }

    /// Handle one event.
    ///
    /// Scroll and resume return `None` immediately. `EnterSelect` waits for
    /// the selection transition to finish and returns the label that was
    /// hovered. A request dropped at the acceptance boundary also returns
    /// `None`; the caller gets no other feedback.
    pub async fn handle(&self, event: TaskEvent) -> Option<&'static str> {
        match event {
            TaskEvent::MoveCursorUp => {
                self.state.request_scroll(CursorDirection::Up);
                None
            }
            TaskEvent::MoveCursorDown => {
                self.state.request_scroll(CursorDirection::Down);
                None
            }
            TaskEvent::EnterSelect => {
                let index = self.state.request_select().await?;
                self.state.label(index)
            }
            TaskEvent::Resume => None,
        }
    }

    /// Handle an event by gesture name; unknown names are a no-op.
    pub async fn handle_task(&self, name: &str) -> Option<&'static str> {
        match TaskEvent::from_name(name) {
            Some(event) => self.handle(event).await,
            None => {
                trace!("Menu: ignoring unknown task {}", name);
                None
            }
        }
    }

    /// Like [`handle`](Self::handle), but gives up once `cancel` resolves.
    ///
    /// Bounds the wait on a render loop that has stopped. An accepted
    /// selection stays triggered after a cancel; its result is discarded.
    pub async fn handle_until<C>(&self, event: TaskEvent, cancel: C) -> Result<Option<&'static str>>
    where
        C: Future,
    {
        match select(self.handle(event), cancel).await {
            Either::First(label) => Ok(label),
            Either::Second(_) => {
                warn!("Menu: gave up waiting for {:?}", event);
                Err(Error::Timeout)
            }
        }
    }
}
