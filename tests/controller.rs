mod tests {
    use std::collections::VecDeque;

    use myrtio_twinkle::intake::USAGE_HINT;
    use myrtio_twinkle::{
        Command, Instant, Key, KeySource, OutputDriver, Parameter, Rgb, TextBuffer,
        TextDisplay, TwinkleConfig, TwinkleController, TwinkleParams,
    };
    use rand::{SeedableRng, rngs::SmallRng};

    const N: usize = 12;

    #[derive(Default)]
    struct CountingDriver {
        frames: usize,
        last_len: usize,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last_len = colors.len();
        }
    }

    #[derive(Default)]
    struct QueuedKeys {
        keys: VecDeque<Key>,
    }

    impl QueuedKeys {
        fn press(&mut self, script: &str) {
            self.keys
                .extend(script.chars().map(|c| Key::from_char(c).expect("valid key")));
        }
    }

    impl KeySource for QueuedKeys {
        fn poll(&mut self) -> Option<Key> {
            self.keys.pop_front()
        }
    }

    type Controller = TwinkleController<CountingDriver, SmallRng, QueuedKeys, TextBuffer, N>;

    fn controller() -> Controller {
        let mut display = TextBuffer::new();
        display.write_str("boot");
        TwinkleController::new(
            CountingDriver::default(),
            SmallRng::seed_from_u64(21),
            QueuedKeys::default(),
            display,
            &TwinkleConfig::default(),
        )
    }

    #[test]
    fn test_setup_clears_display() {
        let controller = controller();
        assert_eq!(controller.display(), &TextBuffer::new());
        assert_eq!(controller.params(), &TwinkleParams::default());
        assert_eq!(controller.scheduler().output().frames, 0);
    }

    #[test]
    fn test_step_without_input_renders_frame() {
        let mut controller = controller();
        for t in 0..5 {
            controller.step(|| Instant::from_millis(t * 33));
        }
        assert_eq!(controller.scheduler().output().frames, 5);
        assert_eq!(controller.scheduler().output().last_len, N);
    }

    #[test]
    fn test_step_applies_setter_before_frame() {
        let mut controller = controller();
        controller.keys_mut().press("C60#");

        let mut clock_reads = 0;
        controller.step(|| {
            clock_reads += 1;
            Instant::from_millis(0)
        });

        assert_eq!(clock_reads, 1);
        assert_eq!(controller.params().floor, 60);
        assert_eq!(controller.scheduler().output().frames, 1);
        for color in controller.scheduler().engine().frame() {
            assert!(color.val >= 60);
        }
        assert_eq!(controller.display(), &TextBuffer::new());
    }

    #[test]
    fn test_poll_input_reports_commands() {
        let mut controller = controller();
        assert_eq!(controller.poll_input(), None);

        controller.keys_mut().press("B128#");
        assert_eq!(
            controller.poll_input(),
            Some(Command::Set(Parameter::Saturation, 128))
        );
        assert_eq!(controller.params().saturation, 128);

        controller.keys_mut().press("7");
        assert_eq!(controller.poll_input(), Some(Command::Usage));
        assert_eq!(controller.display().row(0).trim_end(), USAGE_HINT);
    }

    #[test]
    fn test_inverted_range_from_keypad() {
        let mut controller = controller();
        controller.keys_mut().press("C200#D100#");
        controller.poll_input();
        controller.poll_input();
        assert_eq!(controller.params().floor, 200);
        assert_eq!(controller.params().ceiling, 100);

        for t in 0..10 {
            controller.render(Instant::from_millis(t * 33));
            for color in controller.scheduler().engine().frame() {
                assert_eq!(color.val, 200);
            }
        }
    }
}
