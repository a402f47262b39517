//! Single-page icon menu for small embedded displays.
//!
//! Two execution contexts share one [`page::MenuState`]:
//!
//! - the **input context** runs [`page::TaskHandler`], turning task events
//!   into writes on the state's shared cells, and
//! - the **render context** runs [`page::RenderLoop`], which polls those
//!   cells every tick, scrolls / hovers / animates the option boxes and
//!   redraws the frame.
//!
//! A selection walks a four-stage transition (one stage per tick) and only
//! then hands the chosen label back to the input side.
//!
//! Everything here is `no_std` and runs on the host for testing:
//! `cargo test`. The fixed-period Embassy render task lives behind the
//! `embedded` feature.

#![cfg_attr(not(test), no_std)]

// Must stay first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod cell;
pub mod config;
pub mod error;
pub mod page;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod ticker;

pub use cell::SharedCell;
pub use config::{PageConfig, Theme};
pub use error::{Error, Result};
pub use page::{
    CursorDirection, MenuItem, MenuState, RenderLoop, SelectTransitionStage, TaskHandler,
    TickOutcome, TickSource,
};
pub use ui::{ButtonEvent, TaskEvent};
