//! Cross-context state of one menu page.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use heapless::Vec;

use crate::cell::SharedCell;
use crate::config::MAX_OPTIONS;
use crate::error::{Error, Result};
use crate::page::{CursorDirection, MenuItem, SelectTransitionStage};

/// Shared cells plus the immutable option list.
///
/// Lives as long as the page: the input side borrows it through a
/// [`TaskHandler`](crate::page::TaskHandler), the render side through a
/// [`RenderLoop`](crate::page::RenderLoop). On target it normally sits in
/// a `StaticCell`.
///
/// Requests are accepted from a single input context. A request made
/// while another is pending is dropped, never queued.
pub struct MenuState {
    items: Vec<MenuItem, MAX_OPTIONS>,
    cursor_direction: SharedCell<CursorDirection>,
    select_triggered: SharedCell<bool>,
    select_transition_state: SharedCell<SelectTransitionStage>,
    display_completed: SharedCell<bool>,
    /// Carries the hovered index from the render loop to the waiting
    /// selector once the transition has ended.
    pub(super) completion: Signal<CriticalSectionRawMutex, usize>,
}

impl MenuState {
    pub fn new(items: &[MenuItem]) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyMenu);
        }
        let items = Vec::from_slice(items).map_err(|_| Error::BufferOverflow)?;

        Ok(Self {
            items,
            cursor_direction: SharedCell::new(CursorDirection::None),
            select_triggered: SharedCell::new(false),
            select_transition_state: SharedCell::new(SelectTransitionStage::None),
            display_completed: SharedCell::new(false),
            completion: Signal::new(),
        })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.items.get(index).map(|item| item.label)
    }

    /// A scroll has been requested but not applied yet.
    ///
    /// An undecodable cell also counts as pending, so no new request is
    /// layered on top of a broken hand-shake.
    pub fn scroll_pending(&self) -> bool {
        !matches!(self.cursor_direction.read(), Ok(CursorDirection::None))
    }

    /// A selection has been accepted (it stays so for the page's lifetime).
    pub fn select_pending(&self) -> bool {
        !matches!(self.select_triggered.read(), Ok(false))
    }

    pub fn transition_stage(&self) -> Result<SelectTransitionStage> {
        self.select_transition_state.read()
    }

    pub fn display_completed(&self) -> bool {
        matches!(self.display_completed.read(), Ok(true))
    }

    /// Ask the render loop to move the cursor.
    ///
    /// Returns whether the request was accepted. It is dropped while
    /// another scroll or any selection is pending.
    pub fn request_scroll(&self, direction: CursorDirection) -> bool {
        if direction == CursorDirection::None {
            return false;
        }
        if self.select_pending() {
            trace!("Menu: scroll {:?} dropped, selection pending", direction);
            return false;
        }
        let accepted = self
            .cursor_direction
            .replace_if(CursorDirection::None, direction);
        if accepted {
            debug!("Menu: scroll {:?} requested", direction);
        } else {
            trace!("Menu: scroll {:?} dropped, scroll pending", direction);
        }
        accepted
    }

    /// Trigger the selection transition and wait until it has ended.
    ///
    /// Resolves to the hovered index once the render loop has applied
    /// `EndDisplay`, or to `None` straight away if the request was dropped.
    pub async fn request_select(&self) -> Option<usize> {
        if !self.try_begin_select() {
            return None;
        }
        Some(self.completion.wait().await)
    }

    /// Acceptance half of [`request_select`](Self::request_select).
    pub(crate) fn try_begin_select(&self) -> bool {
        if self.scroll_pending() {
            trace!("Menu: select dropped, scroll pending");
            return false;
        }
        let accepted = self.select_triggered.replace_if(false, true);
        if accepted {
            info!("Menu: select requested");
        } else {
            trace!("Menu: select dropped, already triggered");
        }
        accepted
    }

    // Render side

    pub(crate) fn cursor_direction(&self) -> Result<CursorDirection> {
        self.cursor_direction.read()
    }

    /// Hand the cursor back to the input side.
    pub(crate) fn clear_cursor_direction(&self) {
        self.cursor_direction.write(CursorDirection::None);
    }

    pub(crate) fn select_triggered(&self) -> Result<bool> {
        self.select_triggered.read()
    }

    pub(crate) fn set_transition_stage(&self, stage: SelectTransitionStage) {
        self.select_transition_state.write(stage);
    }

    /// Publish completion. Only the first call has any effect.
    pub(crate) fn complete(&self, hovered_id: usize) -> bool {
        let first = self.display_completed.replace_if(false, true);
        if first {
            self.completion.signal(hovered_id);
        }
        first
    }

    #[cfg(test)]
    pub(crate) fn corrupt_cursor_direction(&self, raw: u8) {
        self.cursor_direction.write_raw(raw);
    }
}
