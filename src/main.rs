//! QuadPipe Sketchpad.
//!
//! Interaktives Zeichenbrett für quadratische Bézier-Pipes: ein Klick auf
//! leere Fläche erstellt eine Kurve, Anker-Drags formen sie in Echtzeit um.

use eframe::egui;
use quad_pipe_sketchpad::ui::{cursor_icon, paint_scene, render_status_bar, InputState};
use quad_pipe_sketchpad::{AppController, AppIntent, AppState, SketchOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "QuadPipe Sketchpad v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("QuadPipe Sketchpad"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "QuadPipe Sketchpad",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    input: InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = sketch_options;

        Self {
            state,
            controller: AppController::new(),
            input: InputState::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.push(AppIntent::SurfaceResized {
                    size: [rect.width(), rect.height()],
                });

                self.input
                    .collect_canvas_events(rect, &response, &self.state, &mut events);

                let scene = self.controller.build_render_scene(&self.state);
                paint_scene(ui.painter(), rect.min, &scene);
                ctx.set_cursor_icon(cursor_icon(scene.cursor));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        if self.state.view.take_repaint_request() || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
