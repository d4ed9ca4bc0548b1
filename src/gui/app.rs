//! Main GUI application - the per-frame step/draw driver.

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Vec2};

use crate::config::Config;
use crate::render::{self, Renderer};
use crate::simulation::Simulation;
use crate::viewport::Viewport;

/// Main application state
pub struct LangtonApp {
    /// The automaton: grid, ants, speed, step counter
    sim: Simulation,
    /// Screen/grid transform for the canvas
    viewport: Viewport,
    /// Draw-command generator
    renderer: Renderer,
    /// Whether the per-frame step/draw loop is active
    running: bool,
    /// Canvas size from the last frame, for the add-ant spawn point
    canvas_size: (f64, f64),
}

impl LangtonApp {
    /// Create a new application with the given configuration.
    ///
    /// The initial ant spawns on the first frame, once the canvas size is
    /// known, at the cell under the canvas center.
    pub fn new(config: Config) -> Self {
        let viewport = Viewport::new(config.viewport.clone());
        Self {
            sim: Simulation::new(config),
            viewport,
            renderer: Renderer::new(),
            running: false,
            canvas_size: (0.0, 0.0),
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Stop the loop and restore the startup state: empty grid, default
    /// viewport, speed 1, one fresh ant at the canvas center.
    fn reset(&mut self) {
        self.running = false;
        self.viewport.reset();
        let (w, h) = self.canvas_size;
        let (x, y) = self.viewport.center_cell(w, h);
        self.sim.reset(x, y);
    }

    fn add_ant_at_center(&mut self) {
        let (w, h) = self.canvas_size;
        let (x, y) = self.viewport.center_cell(w, h);
        self.sim.add_ant(x, y);
    }

    /// Canvas: paint the frame's rects and route pointer input.
    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click_and_drag());
        let canvas = response.rect;
        self.canvas_size = (canvas.width() as f64, canvas.height() as f64);

        // First frame: spawn the initial ant now that the center is known.
        if self.sim.ant_count() == 0 {
            self.add_ant_at_center();
        }

        // Drag to pan, cumulative delta since the last event.
        if response.dragged() {
            let delta = response.drag_delta();
            self.viewport.pan(delta.x as f64, delta.y as f64);
        }

        // Wheel to zoom at the pointer.
        if response.hovered() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                if let Some(pos) = response.hover_pos() {
                    let factor = if scroll > 0.0 { 1.1 } else { 0.9 };
                    let local = pos - canvas.min;
                    self.viewport
                        .zoom_at(local.x as f64, local.y as f64, factor);
                }
            }
        }

        // Clear, then paint the culled rects. Rect coordinates are
        // canvas-local; the painter wants absolute screen positions.
        painter.rect_filled(canvas, 0.0, to_color32(render::BACKGROUND));

        let rects = self
            .renderer
            .draw(&self.sim.grid, self.sim.ants(), &self.viewport, self.canvas_size);
        for r in rects {
            let min = Pos2::new(canvas.min.x + r.x as f32, canvas.min.y + r.y as f32);
            painter.rect_filled(
                Rect::from_min_size(min, Vec2::splat(r.size as f32)),
                0.0,
                to_color32(r.color),
            );
        }

        // Right-click context menu with the speed controls.
        response.context_menu(|ui| self.show_speed_menu(ui));
    }

    /// Speed label, slider, and preset buttons.
    fn show_speed_menu(&mut self, ui: &mut egui::Ui) {
        let cfg = self.sim.config.simulation.clone();

        ui.label(format!("Speed: {:.1}x", self.sim.speed()));

        let mut speed = self.sim.speed();
        let slider = egui::Slider::new(&mut speed, cfg.min_speed..=cfg.max_speed)
            .step_by(cfg.speed_step)
            .show_value(false);
        if ui.add(slider).changed() {
            self.sim.set_speed(speed);
        }

        ui.horizontal(|ui| {
            for preset in [0.5, 1.0, 2.0, 5.0] {
                if ui.button(format!("{}x", preset)).clicked() {
                    self.sim.set_speed(preset);
                    ui.close_menu();
                }
            }
        });
    }
}

impl eframe::App for LangtonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One simulation frame per UI frame while running.
        if self.running {
            self.sim.step();
            ctx.request_repaint();
        }

        // Top panel with controls
        egui::TopBottomPanel::top("control_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let toggle = if self.running { "Stop" } else { "Start" };
                if ui.button(toggle).clicked() {
                    self.running = !self.running;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();

                if ui.button("Add Ant").clicked() {
                    self.add_ant_at_center();
                }
                if ui.button("Remove Ant").clicked() {
                    self.sim.remove_ant();
                }
            });
        });

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Steps: {}", self.sim.steps));
                ui.separator();
                ui.label(format!("Ants: {}", self.sim.ant_count()));
                ui.separator();
                ui.label(format!("Speed: {:.1}x", self.sim.speed()));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Zoom: {:.1}x", self.viewport.zoom()));
                });
            });
        });

        // Central canvas
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.show_canvas(ui);
            });
    }
}

fn to_color32((r, g, b): render::Color) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Run the GUI application
pub fn run_gui(config: Config) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Langton's Ant"),
        ..Default::default()
    };

    eframe::run_native(
        "Langton's Ant",
        native_options,
        Box::new(|_cc| Box::new(LangtonApp::new(config))),
    )
}
