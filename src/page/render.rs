//! The render loop: polls the shared cells once per tick, applies scroll
//! and selection effects to the option boxes, and redraws the frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::config::{PageConfig, Theme, MAX_OPTIONS};
use crate::error::{Error, Result};
use crate::page::{CursorDirection, MenuState, SelectTransitionStage};
use crate::ui::display::Surface;
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::option_box::OptionEntry;

/// Result of a single render tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    Running,
    /// `EndDisplay` has been applied; the loop is over.
    Finished,
}

/// Paces the render loop. On target this is an Embassy `Ticker`.
#[allow(async_fn_in_trait)]
pub trait TickSource {
    async fn next_tick(&mut self);
}

/// Render-context half of a menu page.
///
/// Owns the option boxes, the hovered index and the page background;
/// nothing else may change them.
pub struct RenderLoop<'a> {
    state: &'a MenuState,
    entries: Vec<OptionEntry, MAX_OPTIONS>,
    hovered_id: usize,
    slot_height: i32,
    content_height: i32,
    theme: Theme,
    background: Rgb565,
    finished: bool,
}

impl<'a> RenderLoop<'a> {
    /// Lay the options out on a ring sized for `screen`.
    ///
    /// The middle option (`len / 2`) starts hovered and vertically
    /// centred; scrolling keeps whichever option is hovered in that spot.
    ///
    /// Fails with [`Error::InvalidConfig`] if `cfg` does not validate.
    pub fn new(state: &'a MenuState, screen: Size, cfg: &PageConfig) -> Result<Self> {
        cfg.validate()?;
        let items = state.items();
        let count = items.len();
        let hovered_id = count / 2;
        let slot_height = cfg.slot_height() as i32;

        let x = (screen.width / 2) as i32 - (cfg.box_width / 2) as i32;
        let origin_y = (screen.height / 2) as i32 - ((2 * hovered_id as i32 + 1) * slot_height) / 2
            + cfg.y_margin as i32;

        let mut entries = Vec::new();
        for (slot, item) in items.iter().enumerate() {
            let ring_y = slot as i32 * slot_height;
            entries
                .push(OptionEntry::new(
                    item.label,
                    item.icon.clone(),
                    x,
                    ring_y,
                    origin_y,
                    cfg,
                ))
                .map_err(|_| Error::BufferOverflow)?;
        }
        entries[hovered_id].hover();

        Ok(Self {
            state,
            entries,
            hovered_id,
            slot_height,
            content_height: slot_height * count as i32,
            theme: cfg.theme,
            background: cfg.theme.background,
            finished: false,
        })
    }

    pub fn hovered_id(&self) -> usize {
        self.hovered_id
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one tick: apply at most one pending change, then redraw.
    ///
    /// After the `EndDisplay` tick the page is completed and every further
    /// call is a no-op returning [`TickOutcome::Finished`].
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<TickOutcome> {
        if self.finished {
            return Ok(TickOutcome::Finished);
        }

        let outcome = self.update()?;
        self.draw(surface)?;

        if outcome == TickOutcome::Finished {
            self.finished = true;
            if self.state.complete(self.hovered_id) {
                info!("Menu: selection of option {} complete", self.hovered_id);
            }
        }
        Ok(outcome)
    }

    /// Tick until the selection transition has ended.
    ///
    /// Stops early on a fatal error (broken hand-shake or surface
    /// failure); the page then never completes.
    pub async fn run<S, T>(&mut self, surface: &mut S, ticks: &mut T) -> Result<()>
    where
        S: Surface,
        T: TickSource,
    {
        loop {
            match self.tick(surface) {
                Ok(TickOutcome::Finished) => return Ok(()),
                Ok(TickOutcome::Running) => {}
                Err(e) => {
                    error!("Menu: render loop stopped: {:?}", e);
                    return Err(e);
                }
            }
            ticks.next_tick().await;
        }
    }

    fn update(&mut self) -> Result<TickOutcome> {
        match self.state.cursor_direction()? {
            CursorDirection::Up => self.scroll(-1),
            CursorDirection::Down => self.scroll(1),
            CursorDirection::None => {
                if self.state.select_triggered()? {
                    return self.advance_transition();
                }
            }
        }
        Ok(TickOutcome::Running)
    }

    /// Shift the whole ring one slot. `direction` is -1 for up, 1 for down.
    fn scroll(&mut self, direction: i32) {
        let delta = direction * self.slot_height;
        for entry in self.entries.iter_mut() {
            entry.scroll(delta, self.content_height);
        }

        let count = self.entries.len();
        self.hovered_id = if direction < 0 {
            select_next(self.hovered_id, count)
        } else {
            select_prev(self.hovered_id, count)
        };
        self.entries[self.hovered_id].hover();

        debug!("Menu: hovered option {}", self.hovered_id);
        self.state.clear_cursor_direction();
    }

    fn advance_transition(&mut self) -> Result<TickOutcome> {
        let current = self.state.transition_stage()?;
        let Some(stage) = current.next() else {
            return Ok(TickOutcome::Finished);
        };

        let hovered = self.hovered_id;
        match stage {
            SelectTransitionStage::None => {}
            SelectTransitionStage::RemoveOthers => {
                for (id, entry) in self.entries.iter_mut().enumerate() {
                    if id != hovered {
                        entry.hide();
                    }
                }
            }
            SelectTransitionStage::ReverseSelectedColor => {
                self.entries[hovered].reverse_color();
            }
            SelectTransitionStage::ColorBackground => {
                self.entries[hovered].hide_border();
                self.background = self.theme.hovered;
            }
            SelectTransitionStage::EndDisplay => {}
        }

        self.state.set_transition_stage(stage);
        debug!("Menu: transition {:?} -> {:?}", current, stage);

        Ok(if stage == SelectTransitionStage::EndDisplay {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        })
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<()> {
        surface.clear(self.background).map_err(|_| Error::Display)?;
        for entry in self.entries.iter().filter(|e| e.is_visible()) {
            entry.draw(surface).map_err(|_| Error::Display)?;
        }
        surface.present().map_err(|_| Error::Display)
    }
}
