//! Embassy glue: fixed-period render task and time-bounded selection.
//!
//! Needs an Embassy time driver in the final binary (e.g. the RTC driver
//! from `embassy-nrf`).

use embassy_time::{Duration, Ticker, Timer};

use crate::config::PageConfig;
use crate::error::Result;
use crate::page::{RenderLoop, TaskHandler, TickSource};
use crate::ui::display::Surface;
use crate::ui::TaskEvent;

impl TickSource for Ticker {
    async fn next_tick(&mut self) {
        self.next().await;
    }
}

/// Drive `render` every `cfg.tick_ms` until the selection transition ends.
///
/// Returns the surface so the next page can take it over.
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn menu_render(render: RenderLoop<'static>, panel: Panel) {
///     let _ = menu_page::ticker::render_task(render, panel, &PageConfig::default()).await;
/// }
/// ```
pub async fn render_task<S: Surface>(
    mut render: RenderLoop<'_>,
    mut surface: S,
    cfg: &PageConfig,
) -> Result<S> {
    let mut ticker = Ticker::every(Duration::from_millis(cfg.tick_ms));
    info!("Menu: render task started, {} ms tick", cfg.tick_ms);
    render.run(&mut surface, &mut ticker).await?;
    Ok(surface)
}

impl TaskHandler<'_> {
    /// [`handle`](TaskHandler::handle) with a deadline.
    pub async fn handle_with_timeout(
        &self,
        event: TaskEvent,
        timeout: Duration,
    ) -> Result<Option<&'static str>> {
        self.handle_until(event, Timer::after(timeout)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::page::testing::{items, FrameBuffer, SCREEN};
    use crate::page::MenuState;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_time::Instant;

    #[test]
    fn ticker_paces_ticks() {
        let started = Instant::now();
        let mut ticker = Ticker::every(Duration::from_millis(5));
        block_on(async {
            for _ in 0..3 {
                ticker.next_tick().await;
            }
        });
        assert!(started.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn render_task_hands_back_surface_after_end_display() {
        let cfg = PageConfig::default();
        let state = MenuState::new(&items()).unwrap();
        let handler = TaskHandler::new(&state);
        let render = RenderLoop::new(&state, SCREEN, &cfg).unwrap();

        let started = Instant::now();
        let (label, surface) = block_on(join(
            handler.handle(TaskEvent::EnterSelect),
            render_task(render, FrameBuffer::new(SCREEN), &cfg),
        ));
        let fb = surface.unwrap();

        assert_eq!(label, Some("Timer"));
        assert_eq!(fb.frames, 4);
        assert!(state.display_completed());
        // One tick period between each of the four stage frames.
        assert!(started.elapsed() >= Duration::from_millis(3 * cfg.tick_ms));
    }

    #[test]
    fn select_times_out_without_render_task() {
        let state = MenuState::new(&items()).unwrap();
        let handler = TaskHandler::new(&state);

        let result = block_on(handler.handle_with_timeout(
            TaskEvent::EnterSelect,
            Duration::from_millis(20),
        ));

        assert_eq!(result, Err(Error::Timeout));
        assert!(state.select_pending());
        assert!(!state.display_completed());
    }
}
