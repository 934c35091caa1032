//! Baut die Render-Szene aus dem AppState.

use super::AppState;
use crate::core::geometry::sample_polyline;
use crate::core::Anchor;
use crate::shared::{AnchorVisual, PipeVisual, RenderScene};

/// Stellt die read-only Frame-Daten für den Painter zusammen.
pub fn build(state: &AppState) -> RenderScene {
    let pipes = state
        .sketch
        .iter()
        .map(|(id, pipe)| {
            let polyline = sample_polyline(
                pipe.start(),
                pipe.control(),
                pipe.end(),
                state.options.curve_samples,
            );

            let anchors = Anchor::ALL.map(|anchor| AnchorVisual {
                anchor,
                position: pipe.anchor_position(anchor),
                emphasis: state.interaction.emphasis(id, anchor, &state.options),
            });

            // Formel-Trace nur für Pipes unter aktiver Interaktion
            let annotation = (state.options.show_formulas && state.interaction.pipe_active(id))
                .then(|| {
                    let eval = pipe.evaluator(format!("pipe-{}", id.0));
                    [eval.x().formula(None), eval.y().formula(None)]
                });

            PipeVisual {
                id,
                polyline,
                envelope: pipe.envelope(),
                anchors,
                annotation,
            }
        })
        .collect();

    RenderScene {
        pipes,
        cursor: state.interaction.cursor(),
        surface_size: state.view.surface_size,
        options: state.options.clone(),
    }
}
