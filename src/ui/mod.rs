//! User interface pieces of the menu page - option boxes, ring arithmetic
//! and the drawing surface.
//!
//! ## Inputs
//!
//! Whatever decodes physical input (GPIO buttons, a rotary encoder, a
//! touch gesture recogniser) hands the page abstract [`TaskEvent`]s. The
//! three-button layout used on most boards maps through [`ButtonEvent`].

pub mod display;
pub mod input_logic;
pub mod option_box;

/// Abstract tasks the page understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskEvent {
    /// Move the cursor up the ring (hover the next option).
    MoveCursorUp,
    /// Move the cursor down the ring (hover the previous option).
    MoveCursorDown,
    /// Confirm the hovered option.
    EnterSelect,
    /// Returning to this page; nothing to do.
    Resume,
}

impl TaskEvent {
    /// Parse the gesture names emitted by the input decoder.
    ///
    /// Unknown names yield `None`; callers treat that as a no-op so new
    /// gestures can be added upstream without breaking this page.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MOVE_CURSOR_RIGHT_UP" | "MOVE_CURSOR_UP" => Some(TaskEvent::MoveCursorUp),
            "MOVE_CURSOR_LEFT_DOWN" | "MOVE_CURSOR_DOWN" => Some(TaskEvent::MoveCursorDown),
            "ENTER_SELECT" => Some(TaskEvent::EnterSelect),
            "OUT_RESUME" | "RESUME" => Some(TaskEvent::Resume),
            _ => None,
        }
    }
}

/// Physical button events (after debouncing).
///
///   - UP/DOWN: move through the ring
///   - SELECT: confirm the hovered option
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
}

impl From<ButtonEvent> for TaskEvent {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::Up => TaskEvent::MoveCursorUp,
            ButtonEvent::Down => TaskEvent::MoveCursorDown,
            ButtonEvent::Select => TaskEvent::EnterSelect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_names_parse() {
        assert_eq!(
            TaskEvent::from_name("MOVE_CURSOR_RIGHT_UP"),
            Some(TaskEvent::MoveCursorUp)
        );
        assert_eq!(
            TaskEvent::from_name("MOVE_CURSOR_LEFT_DOWN"),
            Some(TaskEvent::MoveCursorDown)
        );
        assert_eq!(
            TaskEvent::from_name("ENTER_SELECT"),
            Some(TaskEvent::EnterSelect)
        );
        assert_eq!(TaskEvent::from_name("OUT_RESUME"), Some(TaskEvent::Resume));
    }

    #[test]
    fn unknown_gesture_is_none() {
        assert_eq!(TaskEvent::from_name("DOUBLE_TAP"), None);
        assert_eq!(TaskEvent::from_name(""), None);
        assert_eq!(TaskEvent::from_name("enter_select"), None);
    }

    #[test]
    fn buttons_map_to_tasks() {
        assert_eq!(TaskEvent::from(ButtonEvent::Up), TaskEvent::MoveCursorUp);
        assert_eq!(
            TaskEvent::from(ButtonEvent::Down),
            TaskEvent::MoveCursorDown
        );
        assert_eq!(
            TaskEvent::from(ButtonEvent::Select),
            TaskEvent::EnterSelect
        );
    }
}
