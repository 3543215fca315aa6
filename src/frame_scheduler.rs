//! Render loop pacing
//!
//! One scheduler drives the matrix for the lifetime of the process. Every tick
//! snapshots the shared state, computes a frame for the active mode and hands
//! it to the renderer. The next deadline follows the cadence of the mode that
//! was active for the tick.

use embassy_time::{Duration, Instant, Timer};

use crate::animation::{AnimationEngine, AnimationPhase};
use crate::log::log_warn;
use crate::renderer::Renderer;
use crate::state::{DisplayMode, SharedDisplay};
use crate::{RandomSource, StripDriver};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Mode the frame was computed for.
    pub mode: DisplayMode,
    /// Whether the frame reached the strip.
    pub rendered: bool,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Periodic driver of the animation engine and renderer.
///
/// # Usage
///
/// ```ignore
/// static DISPLAY: SharedDisplay = SharedDisplay::new(&MatrixConfig::DEFAULT);
/// static HARDWARE: StaticCell<HardwareLock<Strip>> = StaticCell::new();
///
/// let hardware = HARDWARE.init(HardwareLock::new(strip));
/// let mut scheduler = FrameScheduler::new(&DISPLAY, Renderer::new(hardware), trng);
/// scheduler.run().await;
/// ```
pub struct FrameScheduler<'a, D: StripDriver, R: RandomSource> {
    display: &'a SharedDisplay,
    engine: AnimationEngine<R>,
    renderer: Renderer<'a, D>,
    next_frame: Instant,
}

impl<'a, D: StripDriver, R: RandomSource> FrameScheduler<'a, D, R> {
    pub fn new(display: &'a SharedDisplay, renderer: Renderer<'a, D>, rng: R) -> Self {
        Self {
            display,
            engine: AnimationEngine::new(rng),
            renderer,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Render faults are logged and reported through `rendered`; they never
    /// stop the loop. The caller is responsible for waiting until
    /// `next_deadline` before calling `tick` again.
    pub async fn tick(&mut self, now: Instant) -> FrameResult {
        let snapshot = self.display.snapshot();
        let mode = snapshot.state.mode;
        let cadence = mode.cadence();

        // If we've fallen too far behind, reset to now instead of bursting
        let max_drift = Duration::from_millis(cadence.as_millis() * 2);
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self.engine.next_frame(&snapshot);
        let rendered = match self.renderer.render(&frame, snapshot.state.brightness).await {
            Ok(()) => true,
            Err(err) => {
                log_warn!("[FrameScheduler.tick] {} frame not rendered: {}", mode.as_str(), err);
                false
            }
        };

        self.next_frame += cadence;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            mode,
            rendered,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Run the render loop forever
    pub async fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now()).await;
            Timer::at(result.next_deadline).await;
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.engine.phase()
    }
}
