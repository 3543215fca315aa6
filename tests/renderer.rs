mod common;

mod tests {
    use embassy_futures::block_on;
    use embassy_time::Duration;
    use matrix_composer::renderer::prepare;
    use matrix_composer::{
        DisplayMode, Error, HardwareLock, MatrixConfig, Renderer, Rgb, SharedDisplay,
    };

    use crate::common::RecordingStrip;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[test]
    fn test_prepare_scales_then_reorders() {
        let mut frame = [RED; 64];
        frame[1] = Rgb::new(255, 128, 0);

        let wire = prepare(&frame, 128);
        assert_eq!(wire[0], (0, 128, 0));
        assert_eq!(wire[1], (64, 128, 0));

        assert!(prepare(&frame, 0).iter().all(|pixel| *pixel == (0, 0, 0)));
        assert_eq!(prepare(&frame, 255)[0], (0, 255, 0));
    }

    #[test]
    fn test_render_pushes_full_frame_and_refreshes_once() {
        let hardware = HardwareLock::new(RecordingStrip::new());
        let renderer = Renderer::new(&hardware);

        let result = block_on(renderer.render(&[RED; 64], 255));
        assert_eq!(result, Ok(()));

        let strip = hardware.try_lock().unwrap();
        assert_eq!(strip.submitted, 64);
        assert_eq!(strip.frames.len(), 1);
        assert!(strip.frames[0].iter().all(|pixel| *pixel == (0, 255, 0)));
    }

    #[test]
    fn test_render_drops_frame_when_hardware_busy() {
        let hardware = HardwareLock::new(RecordingStrip::new());
        let renderer = Renderer::with_refresh_timeout(&hardware, Duration::from_millis(10));

        block_on(async {
            let guard = hardware.lock().await;
            let result = renderer.render(&[RED; 64], 255).await;
            assert_eq!(result, Err(Error::HardwareRefreshTimeout));
            drop(guard);
        });

        let strip = hardware.try_lock().unwrap();
        assert_eq!(strip.submitted, 0);
        assert!(strip.frames.is_empty());
    }

    #[test]
    fn test_pixel_errors_do_not_abort_frame() {
        let mut strip = RecordingStrip::new();
        strip.failing_pixel = Some(5);
        let hardware = HardwareLock::new(strip);
        let renderer = Renderer::new(&hardware);

        assert_eq!(block_on(renderer.render(&[RED; 64], 255)), Ok(()));

        let strip = hardware.try_lock().unwrap();
        assert_eq!(strip.submitted, 63);
        assert_eq!(strip.frames.len(), 1);
        assert_eq!(strip.frames[0][5], (0, 0, 0));
        assert_eq!(strip.frames[0][6], (0, 255, 0));
    }

    #[test]
    fn test_refresh_error_is_reported() {
        let mut strip = RecordingStrip::new();
        strip.fail_refresh = true;
        let hardware = HardwareLock::new(strip);
        let renderer = Renderer::new(&hardware);

        assert_eq!(
            block_on(renderer.render(&[RED; 64], 255)),
            Err(Error::RefreshFailed)
        );
        assert_eq!(hardware.try_lock().unwrap().submitted, 64);
    }

    #[test]
    fn test_redraw_only_in_static_mode() {
        let display = SharedDisplay::new(&MatrixConfig::DEFAULT);
        display.set_brightness(255);
        display.set_pixel(0, 3, RED).unwrap();
        let hardware = HardwareLock::new(RecordingStrip::new());
        let renderer = Renderer::new(&hardware);

        assert_eq!(block_on(renderer.redraw(&display)), Ok(()));
        assert_eq!(hardware.try_lock().unwrap().frames.len(), 1);
        assert_eq!(hardware.try_lock().unwrap().frames[0][3], (0, 255, 0));

        display.set_mode(DisplayMode::Rainbow);
        assert_eq!(block_on(renderer.redraw(&display)), Ok(()));
        assert_eq!(hardware.try_lock().unwrap().frames.len(), 1);
    }
}
