mod tests {
    use tictac_face::geometry::{center_of, hour_angle, minute_angle, polar_point};
    use tictac_face::{Point, Rectangle, Size, Time};

    const CENTER: Point = Point::new(72, 84);

    #[test]
    fn test_minute_angle_is_six_degrees_per_minute() {
        for minutes in 0..60u8 {
            assert_eq!(minute_angle(minutes), f32::from(minutes) * 6.0);
        }
    }

    #[test]
    fn test_static_hour_angle() {
        for hours in 0..12u8 {
            for minutes in 0..60u8 {
                assert_eq!(
                    hour_angle(Time::new(hours, minutes), false),
                    f32::from(hours) * 30.0 + f32::from(minutes) * 0.5
                );
            }
        }
    }

    #[test]
    fn test_animated_hour_angle_matches_static_on_sixty_scale() {
        for hours in 0..12u8 {
            for minutes in [0u8, 15, 40, 59] {
                assert_eq!(
                    hour_angle(Time::new(hours * 5, minutes), true),
                    hour_angle(Time::new(hours, minutes), false)
                );
            }
        }
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        assert_eq!(polar_point(CENTER, 0.0, 54), Point::new(72, 30));
        assert_eq!(polar_point(CENTER, 90.0, 54), Point::new(126, 84));
        assert_eq!(polar_point(CENTER, 180.0, 54), Point::new(72, 138));
        assert_eq!(polar_point(CENTER, 270.0, 54), Point::new(18, 84));
    }

    #[test]
    fn test_polar_point_rounds_to_nearest() {
        // sin(30°) * 52 is 26 exactly, cos(30°) * 52 is about 45.03
        assert_eq!(polar_point(CENTER, 30.0, 52), Point::new(98, 39));
    }

    #[test]
    fn test_polar_point_zero_length() {
        assert_eq!(polar_point(CENTER, 123.0, 0), CENTER);
    }

    #[test]
    fn test_center_of() {
        let bounds = Rectangle::new(Point::new(0, 0), Size::new(144, 168));
        assert_eq!(center_of(&bounds), CENTER);

        let offset = Rectangle::new(Point::new(10, 20), Size::new(181, 181));
        assert_eq!(center_of(&offset), Point::new(100, 110));
    }
}
