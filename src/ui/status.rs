//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.sketch.is_empty() {
                ui.label("Klick auf leere Fläche erstellt eine Pipe");
            } else {
                ui.label(format!("Pipes: {}", state.pipe_count()));
            }

            ui.separator();

            ui.label(format!(
                "Fläche: {:.0} × {:.0}",
                state.view.surface_size[0], state.view.surface_size[1]
            ));

            if let Some(pipe) = state.interaction.region_pipe {
                ui.separator();
                ui.label(format!("Pipe {} unter dem Zeiger", pipe.0));
            }
        });
    });
}
