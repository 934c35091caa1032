//! Reine Geometrie-Funktionen für quadratische Bézier-Kurven.
//!
//! Layer-neutral: wird von `core`, `app` und `ui` importiert ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2 (skalar, eine Achse)
pub fn quadratic_blend(p0: f32, p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Tastet die Kurve als Polylinie mit `samples` Segmenten ab (inklusive Endpunkt).
pub fn sample_polyline(p0: Vec2, p1: Vec2, p2: Vec2, samples: usize) -> Vec<Vec2> {
    let samples = samples.max(1);
    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        points.push(quadratic_bezier(p0, p1, p2, t));
    }
    points
}

/// Kürzeste Distanz von `pos` zu einer Polylinie.
pub fn distance_to_polyline(pos: Vec2, polyline: &[Vec2]) -> f32 {
    match polyline {
        [] => f32::INFINITY,
        [single] => pos.distance(*single),
        _ => polyline
            .windows(2)
            .map(|w| distance_to_segment(pos, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Kürzeste Distanz von `pos` zum Segment a→b.
fn distance_to_segment(pos: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return pos.distance(a);
    }
    let t = ((pos - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    pos.distance(a + ab * t)
}
