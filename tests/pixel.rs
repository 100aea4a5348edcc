mod tests {
    use myrtio_twinkle::{BrightnessRange, Excursion, Pixel, PixelState};

    const RANGE: BrightnessRange = BrightnessRange::new(20, 180);

    #[test]
    fn test_resting_pixel_is_forced_to_floor() {
        let mut pixel = Pixel::new(50);
        pixel.update(RANGE);
        assert_eq!(pixel.state(), PixelState::Resting);
        assert_eq!(pixel.current(), 20);
    }

    #[test]
    fn test_ignite_only_from_rest() {
        let mut pixel = Pixel::new(20);
        assert!(pixel.ignite(Excursion::new(100, 3)));
        assert_eq!(pixel.state(), PixelState::Brightening(Excursion::new(100, 3)));
        assert!(!pixel.ignite(Excursion::new(50, 1)));
        assert_eq!(pixel.state(), PixelState::Brightening(Excursion::new(100, 3)));
    }

    #[test]
    fn test_zero_step_is_raised_to_one() {
        assert_eq!(Excursion::new(100, 0).step(), 1);

        let mut pixel = Pixel::new(20);
        pixel.ignite(Excursion::new(22, 0));
        assert_eq!(pixel.state(), PixelState::Brightening(Excursion::new(22, 1)));
        pixel.update(RANGE);
        assert_eq!(pixel.current(), 21);
        pixel.update(RANGE);
        assert_eq!(pixel.current(), 22);
        assert!(matches!(pixel.state(), PixelState::Peaked(_)));
    }

    #[test]
    fn test_full_twinkle_cycle() {
        let mut pixel = Pixel::new(20);
        pixel.ignite(Excursion::new(30, 4));

        // 20 -> 24 -> 28 -> 30
        let mut seen = [0u8; 3];
        for value in &mut seen {
            pixel.update(RANGE);
            *value = pixel.current();
        }
        assert_eq!(seen, [24, 28, 30]);
        assert_eq!(pixel.state(), PixelState::Peaked(Excursion::new(30, 4)));

        // Holds until triggered
        pixel.update(RANGE);
        assert_eq!(pixel.current(), 30);

        let mut rng = NoRandom;
        assert!(pixel.trigger(RANGE, &mut rng));
        assert_eq!(pixel.state(), PixelState::Dimming(Excursion::new(30, 4)));

        // 30 -> 26 -> 22 -> 20
        for expected in [26, 22] {
            pixel.update(RANGE);
            assert_eq!(pixel.current(), expected);
            assert!(matches!(pixel.state(), PixelState::Dimming(_)));
        }
        pixel.update(RANGE);
        assert_eq!(pixel.current(), 20);
        assert_eq!(pixel.state(), PixelState::Resting);
    }

    #[test]
    fn test_trigger_ignored_while_moving() {
        let mut rng = NoRandom;
        let mut pixel = Pixel::new(20);
        pixel.ignite(Excursion::new(100, 2));
        pixel.update(RANGE);
        assert!(!pixel.trigger(RANGE, &mut rng));
        assert!(matches!(pixel.state(), PixelState::Brightening(_)));
    }

    #[test]
    fn test_lowered_ceiling_clamps_target_and_current() {
        let mut pixel = Pixel::new(20);
        pixel.ignite(Excursion::new(150, 5));
        for _ in 0..30 {
            pixel.update(RANGE);
        }
        assert_eq!(pixel.state(), PixelState::Peaked(Excursion::new(150, 5)));
        assert_eq!(pixel.current(), 150);

        pixel.update(BrightnessRange::new(20, 90));
        assert_eq!(pixel.current(), 90);
        assert_eq!(pixel.state(), PixelState::Peaked(Excursion::new(90, 5)));
    }

    #[test]
    fn test_lowered_ceiling_while_brightening_peaks_immediately() {
        let mut pixel = Pixel::new(20);
        pixel.ignite(Excursion::new(150, 5));
        for _ in 0..10 {
            pixel.update(RANGE);
        }
        assert_eq!(pixel.current(), 70);

        pixel.update(BrightnessRange::new(20, 40));
        assert_eq!(pixel.current(), 40);
        assert_eq!(pixel.state(), PixelState::Peaked(Excursion::new(40, 5)));
    }

    #[test]
    fn test_floor_above_ceiling_does_not_panic() {
        let range = BrightnessRange::new(200, 100);
        assert_eq!(range.floor(), 200);
        assert_eq!(range.ceiling(), 200);

        let mut pixel = Pixel::new(20);
        pixel.ignite(Excursion::new(150, 5));
        pixel.update(range);
        assert_eq!(pixel.current(), 200);
        pixel.update(range);
        assert_eq!(pixel.current(), 200);
        assert_eq!(pixel.state(), PixelState::Peaked(Excursion::new(150, 5)));
    }

    #[test]
    fn test_saturating_step_near_max() {
        let range = BrightnessRange::new(240, 255);
        let mut pixel = Pixel::new(240);
        pixel.ignite(Excursion::new(255, 5));
        for _ in 0..4 {
            pixel.update(range);
        }
        assert_eq!(pixel.current(), 255);
        assert!(matches!(pixel.state(), PixelState::Peaked(_)));
    }

    #[test]
    fn test_peak_bounds() {
        assert_eq!(BrightnessRange::new(20, 180).peak_bounds(), (36, 180));
        // Narrow ranges clamp the minimum excursion to the ceiling
        assert_eq!(BrightnessRange::new(100, 110).peak_bounds(), (110, 110));
        assert_eq!(BrightnessRange::new(250, 255).peak_bounds(), (255, 255));
        assert_eq!(BrightnessRange::new(200, 10).peak_bounds(), (200, 200));
    }

    #[test]
    fn test_range_clamp() {
        assert_eq!(RANGE.clamp(0), 20);
        assert_eq!(RANGE.clamp(100), 100);
        assert_eq!(RANGE.clamp(255), 180);
    }

    /// Generator for transitions that never draw
    struct NoRandom;

    impl rand::RngCore for NoRandom {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }
}
