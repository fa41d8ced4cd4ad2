//! Desktop preview app for the tictac watchface
//!
//! Renders the face in a window and plays the role of the companion app:
//! configuration changes go through the same inbox the watch uses.

use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self, Color32, Pos2, Stroke};
use tictac_face::render::render_face;
use tictac_face::{
    AppMessage, Canvas, ConfigMessage, FaceConfig, Instant, MemoryStorage, MessageChannel,
    MessageSender, Point, Rectangle, Rgb, Size, WallTime, Watchface, color::rgb_to_u32,
};

/// Inbox channel size
const INBOX_SIZE: usize = 8;

/// Display size of the simulated watch, in watch pixels
const SCREEN_WIDTH: u32 = 144;
const SCREEN_HEIGHT: u32 = 168;

/// Static inbox for communication between UI and watchface
static INBOX: MessageChannel<INBOX_SIZE> = MessageChannel::<INBOX_SIZE>::new();

type Face = Watchface<'static, MemoryStorage<8>, INBOX_SIZE>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("TicTac Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "tictac-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Paints watch pixels onto an egui painter
struct PainterCanvas<'p> {
    painter: &'p egui::Painter,
    origin: Pos2,
    scale: f32,
}

impl PainterCanvas<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn pos(&self, point: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x as f32 * self.scale,
            self.origin.y + point.y as f32 * self.scale,
        )
    }

    #[allow(clippy::cast_precision_loss)]
    fn len(&self, value: u32) -> f32 {
        value as f32 * self.scale
    }
}

fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

impl Canvas for PainterCanvas<'_> {
    fn fill_rect(&mut self, rect: Rectangle, color: Rgb) {
        let min = self.pos(rect.top_left);
        let size = egui::vec2(self.len(rect.size.width), self.len(rect.size.height));
        self.painter.rect_filled(
            egui::Rect::from_min_size(min, size),
            egui::CornerRadius::ZERO,
            color32(color),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.painter
            .circle_filled(self.pos(center), self.len(radius), color32(color));
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.painter.circle_stroke(
            self.pos(center),
            self.len(radius),
            Stroke::new(self.scale, color32(color)),
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb) {
        let stroke = Stroke::new(self.len(width), color32(color));
        let (from, to) = (self.pos(from), self.pos(to));
        self.painter.line_segment([from, to], stroke);
        // round caps
        self.painter
            .circle_filled(to, stroke.width / 2.0, stroke.color);
        self.painter
            .circle_filled(from, stroke.width / 2.0, stroke.color);
    }
}

struct PreviewApp {
    /// The running watchface, `None` only while restarting
    watchface: Option<Face>,
    /// Sender playing the companion app
    inbox: MessageSender<'static, INBOX_SIZE>,
    /// Simulated milliseconds since the app started
    t_ms: u64,
    /// Real-time reference for delta time
    last_frame: StdInstant,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Unix seconds when the app started
    base_secs: u64,
    /// Hours added to UTC
    utc_offset: i32,
    /// Watch pixel size on screen
    scale: f32,
    /// Hour hand color (RGB)
    color: [u8; 3],
    /// Custom color toggle
    enabled: bool,
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Wall-clock time of `secs` shifted by `utc_offset` hours
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wall_time(secs: u64, utc_offset: i32) -> WallTime {
    let secs_of_day = (secs % 86_400) as i64 + i64::from(utc_offset) * 3600;
    let secs_of_day = secs_of_day.rem_euclid(86_400);
    WallTime::new(
        (secs_of_day / 3600) as u8,
        (secs_of_day / 60 % 60) as u8,
        (secs_of_day % 60) as u8,
    )
}

impl PreviewApp {
    fn new() -> Self {
        let base_secs = unix_secs();
        let utc_offset = 0;
        let wall = wall_time(base_secs, utc_offset);
        let watchface = Self::start(MemoryStorage::new(), wall, Instant::from_millis(0));
        let background = watchface.state().background;
        let hand = tictac_face::color::rgb_from_u32(background.color);

        Self {
            watchface: Some(watchface),
            inbox: INBOX.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            base_secs,
            utc_offset,
            scale: 3.0,
            color: [hand.r, hand.g, hand.b],
            enabled: background.enabled,
        }
    }

    fn start(storage: MemoryStorage<8>, wall: WallTime, now: Instant) -> Face {
        let mut face = Watchface::new(
            INBOX.receiver(),
            storage,
            &FaceConfig::default(),
            wall,
            now,
        );
        face.load_window(Rectangle::new(
            Point::new(0, 0),
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ));
        face
    }

    /// Simulated monotonic time
    fn now(&self) -> Instant {
        Instant::from_millis(self.t_ms)
    }

    /// Simulated wall-clock time
    fn wall(&self) -> WallTime {
        wall_time(self.base_secs + self.t_ms / 1000, self.utc_offset)
    }

    /// Advance simulated time by the real frame delta times `time_scale`
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        let delta_ms_f64 = if delta_ms_f64.is_finite() {
            #[allow(clippy::cast_precision_loss)]
            delta_ms_f64.clamp(0.0, u64::MAX as f64)
        } else {
            0.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = delta_ms_f64 as u64;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }

    /// Tear the watchface down and start it again with the same storage
    fn restart(&mut self) {
        let now = self.now();
        let wall = self.wall();
        if let Some(mut face) = self.watchface.take() {
            face.unload_window();
            self.watchface = Some(Self::start(face.into_storage(), wall, now));
        }
    }

    /// Send the configuration like the companion app does
    fn send_config(&self) {
        let [r, g, b] = self.color;
        #[allow(clippy::cast_possible_wrap)]
        let color = rgb_to_u32(Rgb { r, g, b }) as i32;
        let message = AppMessage::Received(ConfigMessage::new(color, self.enabled));
        let _ = self.inbox.try_send(message);
    }

    /// Send a message carrying the color only
    fn send_partial_config(&self) {
        let [r, g, b] = self.color;
        #[allow(clippy::cast_possible_wrap)]
        let color = rgb_to_u32(Rgb { r, g, b }) as i32;
        let message = AppMessage::Received(ConfigMessage {
            background_color: Some(color),
            background_on: None,
        });
        let _ = self.inbox.try_send(message);
    }

    /// Advance the watchface to the current time
    fn update_face(&mut self) {
        let now = self.now();
        let wall = self.wall();
        let Some(face) = self.watchface.as_mut() else {
            return;
        };
        if !wall.same_minute(face.wall_time()) {
            face.tick(wall);
        }
        face.process(now);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.update_face();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟲ Restart").clicked() {
                    self.restart();
                }

                ui.add_space(8.0);

                ui.label("UTC offset:");
                let old_offset = self.utc_offset;
                ui.add(egui::Slider::new(&mut self.utc_offset, -12..=14));
                if self.utc_offset != old_offset {
                    let wall = self.wall();
                    if let Some(face) = self.watchface.as_mut() {
                        face.tick(wall);
                    }
                }

                ui.add_space(8.0);

                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.scale, 1.0..=4.0));

                ui.add_space(8.0);

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=600.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Hour hand:");
                ui.color_edit_button_srgb(&mut self.color);
                ui.checkbox(&mut self.enabled, "Enable custom hours color");
                if ui.button("Send").clicked() {
                    self.send_config();
                }
                if ui.button("Send color only").clicked() {
                    self.send_partial_config();
                }
            });

            ui.add_space(8.0);

            let Some(face) = self.watchface.as_ref() else {
                return;
            };
            let Some(window) = face.window() else {
                return;
            };

            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(
                SCREEN_WIDTH as f32 * self.scale,
                SCREEN_HEIGHT as f32 * self.scale,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let mut canvas = PainterCanvas {
                painter: &painter,
                origin: response.rect.min,
                scale: self.scale,
            };
            render_face(
                &mut canvas,
                window.canvas.bounds(),
                window.center(),
                face.state(),
                face.config(),
            );

            ui.add_space(8.0);

            let state = face.state();
            let time = state.clock.last();
            let wall = self.wall();
            ui.label(format!(
                "Wall: {:02}:{:02}:{:02}  Time: {:02}:{:02}  radius: {}  animating: {}",
                wall.hour,
                wall.minute,
                wall.second,
                time.hours,
                time.minutes,
                state.radius(),
                state.clock.is_animating()
            ));
            ui.label(format!(
                "Stored color: #{:06X}  enabled: {}",
                state.background.color, state.background.enabled
            ));
        });
    }
}
