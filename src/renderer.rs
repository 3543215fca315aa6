use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, with_timeout};

use crate::StripDriver;
use crate::color::{WireColor, hardware_channel_order, scale_color};
use crate::config::{DEFAULT_REFRESH_TIMEOUT, PIXEL_COUNT};
use crate::error::Error;
use crate::frame_buffer::Frame;
use crate::log::log_warn;
use crate::state::{DisplayMode, SharedDisplay};

/// Exclusive access to the single physical transaction path
pub type HardwareLock<D> = Mutex<CriticalSectionRawMutex, D>;

/// Frame after brightness scaling and channel reordering
pub type WireFrame = [WireColor; PIXEL_COUNT];

/// Scale a frame and reorder it for the wire
///
/// Pure, runs without any lock held.
pub fn prepare(frame: &Frame, brightness: u8) -> WireFrame {
    let mut wire = [(0, 0, 0); PIXEL_COUNT];
    if brightness == 0 {
        return wire;
    }
    for (out, pixel) in wire.iter_mut().zip(frame) {
        *out = hardware_channel_order(scale_color(*pixel, brightness));
    }
    wire
}

/// Pushes frames to the strip
///
/// Several renderers may share one [`HardwareLock`]; the scheduler owns one and
/// the request layer may hold another for forced redraws.
pub struct Renderer<'a, D: StripDriver> {
    hardware: &'a HardwareLock<D>,
    refresh_timeout: Duration,
}

impl<'a, D: StripDriver> Renderer<'a, D> {
    pub const fn new(hardware: &'a HardwareLock<D>) -> Self {
        Self::with_refresh_timeout(hardware, DEFAULT_REFRESH_TIMEOUT)
    }

    pub const fn with_refresh_timeout(hardware: &'a HardwareLock<D>, refresh_timeout: Duration) -> Self {
        Self {
            hardware,
            refresh_timeout,
        }
    }

    /// Scale, submit and latch one frame
    ///
    /// Waits at most `refresh_timeout` for the hardware. On timeout the frame
    /// is dropped, not queued. Per-pixel submission errors are logged and the
    /// remaining pixels and the refresh still go out.
    pub async fn render(&self, frame: &Frame, brightness: u8) -> Result<(), Error> {
        let wire = prepare(frame, brightness);

        let Ok(mut driver) = with_timeout(self.refresh_timeout, self.hardware.lock()).await else {
            log_warn!("[Renderer.render] hardware busy, dropping frame");
            return Err(Error::HardwareRefreshTimeout);
        };

        for (index, &(c1, c2, c3)) in wire.iter().enumerate() {
            if let Err(err) = driver.set_pixel(index, c1, c2, c3) {
                log_warn!("[Renderer.render] set_pixel {} failed: {:?}", index, err);
            }
        }

        driver.refresh().map_err(|err| {
            log_warn!("[Renderer.render] refresh failed: {:?}", err);
            Error::RefreshFailed
        })
    }

    /// Push the frame buffer right away
    ///
    /// Only meaningful in static mode; animated modes repaint on their own
    /// cadence, so this returns without touching the hardware.
    pub async fn redraw(&self, display: &SharedDisplay) -> Result<(), Error> {
        let snapshot = display.snapshot();
        if snapshot.state.mode != DisplayMode::Static {
            return Ok(());
        }
        self.render(&snapshot.pixels, snapshot.state.brightness).await
    }
}
