mod tests {
    use matrix_composer::Error;
    use matrix_composer::color::{
        Rgb, blend, hardware_channel_order, hsv_to_rgb, scale, scale_color, try_rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_secondaries_and_boundaries() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_hsv_desaturated() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 1.0), Rgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(200.0, 1.0, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(255, 255), 255);
        assert_eq!(scale(128, 128), 64);
        assert_eq!(scale(255, 128), 128);
        assert_eq!(scale(200, 12), 9);
        for brightness in 0..=255 {
            assert_eq!(scale(0, brightness), 0);
            assert_eq!(scale(brightness, 0), 0);
            assert_eq!(scale(brightness, 255), brightness);
        }
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(
            scale_color(Rgb::new(255, 128, 0), 128),
            Rgb::new(128, 64, 0)
        );
    }

    #[test]
    fn test_blend() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(blend(RED, BLUE, 0.5), Rgb::new(127, 0, 127));
        assert_eq!(blend(RED, BLUE, 1.0 / 7.0), Rgb::new(218, 0, 36));
    }

    #[test]
    fn test_hardware_channel_order() {
        assert_eq!(hardware_channel_order(Rgb::new(1, 2, 3)), (2, 1, 3));
        assert_eq!(hardware_channel_order(RED), (0, 255, 0));
    }

    #[test]
    fn test_try_rgb() {
        assert_eq!(try_rgb(10, 20, 30), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(try_rgb(0, 255, 0), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(try_rgb(256, 0, 0), Err(Error::InvalidChannelValue(256)));
        assert_eq!(try_rgb(0, -1, 0), Err(Error::InvalidChannelValue(-1)));
    }
}
