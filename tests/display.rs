mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use tictac_face::{Canvas, DisplayCanvas, Point, Rectangle, Rgb, Size};

    fn canvas() -> DisplayCanvas<MockDisplay<Rgb888>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        DisplayCanvas::new(display)
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = canvas();
        canvas.fill_rect(
            Rectangle::new(Point::new(0, 0), Size::new(4, 4)),
            Rgb::new(255, 0, 0),
        );
        assert_eq!(canvas.display().get_pixel(Point::new(3, 3)), Some(Rgb888::RED));
        assert_eq!(canvas.display().get_pixel(Point::new(4, 4)), None);
    }

    #[test]
    fn test_line_and_circles() {
        let mut canvas = canvas();
        canvas.draw_line(Point::new(10, 10), Point::new(20, 10), 1, Rgb::new(0, 0, 255));
        canvas.fill_circle(Point::new(30, 30), 3, Rgb::new(0, 0, 0));
        canvas.draw_circle(Point::new(30, 30), 3, Rgb::new(255, 255, 255));

        let display = canvas.into_inner();
        assert_eq!(display.get_pixel(Point::new(15, 10)), Some(Rgb888::BLUE));
        assert_eq!(display.get_pixel(Point::new(30, 30)), Some(Rgb888::BLACK));
        let outline = (26..=34)
            .flat_map(|x| (26..=34).map(move |y| Point::new(x, y)))
            .filter(|&point| display.get_pixel(point) == Some(Rgb888::WHITE))
            .count();
        assert!(outline > 0);
    }
}
