mod tests {
    use embassy_time::Duration;
    use tictac_face::Curve;
    use tictac_face::math::{ANIMATION_NORMALIZED_MAX, progress16, scale_progress};

    const CURVES: [Curve; 4] = [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut];

    #[test]
    fn test_progress16() {
        assert_eq!(
            progress16(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress16(Duration::from_millis(50), Duration::from_millis(100)),
            32767
        );
        assert_eq!(
            progress16(Duration::from_millis(100), Duration::from_millis(100)),
            ANIMATION_NORMALIZED_MAX
        );
        assert_eq!(
            progress16(Duration::from_millis(250), Duration::from_millis(100)),
            ANIMATION_NORMALIZED_MAX
        );
    }

    #[test]
    fn test_progress16_zero_duration_is_complete() {
        assert_eq!(
            progress16(Duration::from_millis(0), Duration::from_millis(0)),
            ANIMATION_NORMALIZED_MAX
        );
    }

    #[test]
    fn test_scale_progress() {
        assert_eq!(scale_progress(0, 60), 0);
        assert_eq!(scale_progress(32767, 60), 29);
        assert_eq!(scale_progress(ANIMATION_NORMALIZED_MAX, 60), 60);
        assert_eq!(scale_progress(ANIMATION_NORMALIZED_MAX, 0), 0);
    }

    #[test]
    fn test_curves_keep_endpoints() {
        for curve in CURVES {
            assert_eq!(curve.apply(0), 0, "{curve:?}");
            assert_eq!(
                curve.apply(ANIMATION_NORMALIZED_MAX),
                ANIMATION_NORMALIZED_MAX,
                "{curve:?}"
            );
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for curve in CURVES {
            let mut previous = 0;
            for progress in (0..=ANIMATION_NORMALIZED_MAX).step_by(97) {
                let eased = curve.apply(progress);
                assert!(eased >= previous, "{curve:?} at {progress}");
                previous = eased;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric_around_half() {
        let max = ANIMATION_NORMALIZED_MAX;
        let quarter = Curve::EaseInOut.apply(max / 4);
        let three_quarters = Curve::EaseInOut.apply(max - max / 4);
        assert!(quarter < max / 4);
        assert!(three_quarters > max - max / 4);
        let sum = i32::from(quarter) + i32::from(three_quarters);
        assert!((sum - i32::from(max)).abs() <= 2);
    }
}
