//! The menu page: shared state, render loop and task handler.
//!
//! ```text
//!  input context                 MenuState                 render context
//!  ─────────────                 ─────────                 ──────────────
//!  TaskHandler ──request_scroll──▶ cursor_direction ◀──poll / reset── RenderLoop
//!              ──request_select──▶ select_triggered ◀──poll──────────
//!                                  transition stage ◀──advance───────
//!              ◀──await──────────  completion       ◀──signal once───
//! ```
//!
//! The cells are the only thing both sides touch. Option boxes and the
//! hovered index belong to the render loop alone.

mod handler;
mod render;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use handler::TaskHandler;
pub use render::{RenderLoop, TickOutcome, TickSource};
pub use state::MenuState;

use crate::cell::CellValue;
use crate::ui::option_box::Icon;

/// One menu option as supplied by the caller.
#[derive(Clone, Debug)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: Icon,
}

impl MenuItem {
    pub const fn new(label: &'static str, icon: Icon) -> Self {
        Self { label, icon }
    }
}

/// A scroll request that the render loop has not applied yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorDirection {
    #[default]
    None,
    Up,
    Down,
}

impl CellValue for CursorDirection {
    fn into_raw(self) -> u8 {
        match self {
            CursorDirection::None => 0,
            CursorDirection::Up => 1,
            CursorDirection::Down => 2,
        }
    }

    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(CursorDirection::None),
            1 => Some(CursorDirection::Up),
            2 => Some(CursorDirection::Down),
            _ => None,
        }
    }
}

/// Stages of the selection-confirmation animation, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectTransitionStage {
    #[default]
    None,
    /// Every option except the hovered one disappears.
    RemoveOthers,
    /// The hovered option swaps foreground and background.
    ReverseSelectedColor,
    /// The hovered option loses its border and the page takes its colour.
    ColorBackground,
    /// Terminal: the render loop stops after this tick.
    EndDisplay,
}

impl SelectTransitionStage {
    /// The stage after this one, or `None` once the transition has ended.
    pub fn next(self) -> Option<Self> {
        match self {
            SelectTransitionStage::None => Some(SelectTransitionStage::RemoveOthers),
            SelectTransitionStage::RemoveOthers => Some(SelectTransitionStage::ReverseSelectedColor),
            SelectTransitionStage::ReverseSelectedColor => {
                Some(SelectTransitionStage::ColorBackground)
            }
            SelectTransitionStage::ColorBackground => Some(SelectTransitionStage::EndDisplay),
            SelectTransitionStage::EndDisplay => None,
        }
    }
}

impl CellValue for SelectTransitionStage {
    fn into_raw(self) -> u8 {
        self as u8
    }

    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(SelectTransitionStage::None),
            1 => Some(SelectTransitionStage::RemoveOthers),
            2 => Some(SelectTransitionStage::ReverseSelectedColor),
            3 => Some(SelectTransitionStage::ColorBackground),
            4 => Some(SelectTransitionStage::EndDisplay),
            _ => None,
        }
    }
}
