//! Die Sketch-Sammlung: geordnete, append-only Liste aller Pipes plus Hit-Test.

use super::geometry::{distance_to_polyline, sample_polyline};
use super::pipe::{Anchor, QuadraticPipe};
use glam::Vec2;

/// Abtastrate für den Kurvenkörper-Hit-Test.
const HIT_TEST_SAMPLES: usize = 32;

/// Stabile ID einer Pipe (Einfüge-Index; Pipes werden nie gelöscht).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipeId(pub usize);

/// Sammlung aller Pipes einer Session.
#[derive(Debug, Default)]
pub struct Sketch {
    pipes: Vec<QuadraticPipe>,
}

impl Sketch {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self { pipes: Vec::new() }
    }

    /// Hängt eine Pipe an und gibt ihre ID zurück.
    pub fn add_pipe(&mut self, pipe: QuadraticPipe) -> PipeId {
        self.pipes.push(pipe);
        PipeId(self.pipes.len() - 1)
    }

    /// Pipe per ID.
    pub fn pipe(&self, id: PipeId) -> Option<&QuadraticPipe> {
        self.pipes.get(id.0)
    }

    /// Mutable Pipe per ID.
    pub fn pipe_mut(&mut self, id: PipeId) -> Option<&mut QuadraticPipe> {
        self.pipes.get_mut(id.0)
    }

    /// Anzahl der Pipes.
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// `true` wenn noch keine Pipe existiert.
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Iteriert in Erstellungs-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (PipeId, &QuadraticPipe)> {
        self.pipes
            .iter()
            .enumerate()
            .map(|(idx, pipe)| (PipeId(idx), pipe))
    }

    /// Findet den Anker unter `pos` (zuletzt erstellte Pipe gewinnt).
    pub fn anchor_at(&self, pos: Vec2, anchor_radius: f32) -> Option<(PipeId, Anchor)> {
        for (idx, pipe) in self.pipes.iter().enumerate().rev() {
            for anchor in Anchor::ALL {
                if pipe.anchor_position(anchor).distance(pos) <= anchor_radius {
                    return Some((PipeId(idx), anchor));
                }
            }
        }
        None
    }

    /// Findet die oberste Pipe, deren Form unter `pos` liegt.
    ///
    /// Form = Anker-Scheiben plus Kurvenkörper. Die Hülle zählt bewusst
    /// nicht als Form; sie rahmt nur.
    pub fn pipe_at(&self, pos: Vec2, anchor_radius: f32, stroke_half_width: f32) -> Option<PipeId> {
        for (idx, pipe) in self.pipes.iter().enumerate().rev() {
            let anchor_hit = Anchor::ALL
                .iter()
                .any(|&a| pipe.anchor_position(a).distance(pos) <= anchor_radius);
            if anchor_hit {
                return Some(PipeId(idx));
            }

            let polyline =
                sample_polyline(pipe.start(), pipe.control(), pipe.end(), HIT_TEST_SAMPLES);
            if distance_to_polyline(pos, &polyline) <= stroke_half_width {
                return Some(PipeId(idx));
            }
        }
        None
    }

    /// Findet die oberste Pipe, deren Hülle `pos` umschließt (Move-Cursor-Region).
    pub fn envelope_at(&self, pos: Vec2) -> Option<PipeId> {
        self.pipes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, pipe)| pipe.envelope().contains(pos))
            .map(|(idx, _)| PipeId(idx))
    }
}
