//! Desktop preview app for spoke-light-composer animations
//!
//! Draws the wheel as concentric rings of LED squares in a window and
//! drives the scheduler at 60 Hz. Arrow keys and mouse buttons step
//! through the catalog just like buttons on the real controller would.

use std::f32::consts::TAU;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use spoke_light_composer::{
    ControlChannel, ControlEvent, ControlSender, Duration, RING_COUNT,
    SPOKE_COUNT, Scheduler, display_wired,
};

/// Window width in pixels
const WIDTH: f32 = 720.0;

/// Window height in pixels
const HEIGHT: f32 = 480.0;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 10.0;

/// Radial distance between rings
const RING_SPACING: f32 = 20.0;

/// Radius of the wheel rim outline
const RIM_RADIUS: f32 = 160.0;

/// Control channel size
const CONTROL_CHANNEL_SIZE: usize = 8;

/// Static control channel between the UI and the scheduler
static CONTROL_CHANNEL: ControlChannel<CONTROL_CHANNEL_SIZE> =
    ControlChannel::<CONTROL_CHANNEL_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WIDTH, HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "spoke-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The scheduler driving the animation catalog
    scheduler: Scheduler<'static, CONTROL_CHANNEL_SIZE>,
    /// Sender for navigation events
    events: ControlSender<'static, CONTROL_CHANNEL_SIZE>,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
}

impl PreviewApp {
    fn new() -> Self {
        let mut scheduler = Scheduler::new(CONTROL_CHANNEL.receiver());
        scheduler.settle();

        Self {
            scheduler,
            events: CONTROL_CHANNEL.sender(),
            last_frame: StdInstant::now(),
        }
    }

    /// Translate keyboard and mouse input into control events
    fn handle_input(&self, ctx: &egui::Context) {
        ctx.input(|input| {
            if input.key_pressed(egui::Key::ArrowRight)
                || input.pointer.button_pressed(egui::PointerButton::Primary)
            {
                let _ = self.events.try_send(ControlEvent::Next);
            }
            if input.key_pressed(egui::Key::ArrowLeft)
                || input.pointer.button_pressed(egui::PointerButton::Secondary)
            {
                let _ = self.events.try_send(ControlEvent::Previous);
            }
            if input.viewport().close_requested() {
                let _ = self.events.try_send(ControlEvent::Quit);
            }
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        #[allow(clippy::cast_possible_truncation)]
        let elapsed = Duration::from_millis(delta.as_millis() as u64);
        let outcome = self.scheduler.tick(elapsed);
        if outcome.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if let Some(name) = outcome.rendered {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(name.to_owned()));
        }

        let frame = *self.scheduler.frame();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let painter = ui.painter();
                let center = ui.max_rect().center();

                painter.circle_stroke(
                    center,
                    RIM_RADIUS,
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                );

                #[allow(clippy::cast_precision_loss)]
                let multiplier = TAU / SPOKE_COUNT as f32;
                for (ring, row) in frame.iter().enumerate().take(RING_COUNT) {
                    for (spoke, pixel) in row.iter().enumerate().take(SPOKE_COUNT)
                    {
                        if !display_wired(ring, spoke) {
                            continue;
                        }
                        #[allow(clippy::cast_precision_loss)]
                        let angle = spoke as f32 * multiplier;
                        #[allow(clippy::cast_precision_loss)]
                        let distance = RING_SPACING * (ring as f32 + 3.0);
                        // Spoke 0 points up; screen y grows downward
                        let pos = egui::pos2(
                            center.x + distance * angle.sin(),
                            center.y - distance * angle.cos(),
                        );

                        let rect = egui::Rect::from_min_size(
                            pos,
                            egui::vec2(LED_SIZE, LED_SIZE),
                        );
                        let color =
                            egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 2.0, color);
                    }
                }
            });

        // 60 FPS
        ctx.request_repaint_after(std::time::Duration::from_millis(1000 / 60));
    }
}
