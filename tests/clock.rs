mod tests {
    use tictac_face::clock::hours_to_minutes;
    use tictac_face::{ClockState, Time, WallTime};

    fn tick(hour: u8, minute: u8) -> Time {
        let mut clock = ClockState::new();
        clock.tick(WallTime::new(hour, minute, 0));
        clock.last()
    }

    #[test]
    fn test_afternoon_hours_fold_onto_dial() {
        assert_eq!(tick(13, 5), Time::new(1, 5));
        assert_eq!(tick(23, 59), Time::new(11, 59));
    }

    #[test]
    fn test_midnight_and_noon_are_kept() {
        assert_eq!(tick(0, 0), Time::new(0, 0));
        assert_eq!(tick(12, 30), Time::new(12, 30));
    }

    #[test]
    fn test_morning_hours_unchanged() {
        for hour in 0..=12 {
            assert_eq!(tick(hour, 7).hours, hour);
        }
    }

    #[test]
    fn test_display_time_uses_last_time_when_idle() {
        let mut clock = ClockState::new();
        clock.tick(WallTime::new(9, 45, 12));
        assert!(!clock.is_animating());
        assert_eq!(clock.display_time(), Time::new(9, 45));
    }

    #[test]
    fn test_hours_to_minutes() {
        for hours in 0..=12u8 {
            assert_eq!(hours_to_minutes(hours), hours * 5);
        }
    }

    #[test]
    fn test_same_minute() {
        let a = WallTime::new(10, 15, 0);
        assert!(a.same_minute(WallTime::new(10, 15, 59)));
        assert!(!a.same_minute(WallTime::new(10, 16, 0)));
        assert!(!a.same_minute(WallTime::new(22, 15, 0)));
    }
}
