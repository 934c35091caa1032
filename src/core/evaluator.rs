//! Parametrische Auswertung einzelner Kurven-Achsen inklusive Formel-Trace.
//!
//! Eine 2D-Pipe ist die Komposition zweier unabhängiger 1D-Evaluatoren
//! (eine je Achse) unter gemeinsamem Namen. Der Formel-Trace dient der
//! On-Canvas-Annotation; er hat keinerlei Einfluss auf die Geometrie.

use super::geometry::quadratic_blend;
use glam::Vec2;

/// Evaluator für eine Achse einer quadratischen Bézier-Kurve.
///
/// Gespeicherte Koeffizienten werden nie gerundet; die Rundung auf zwei
/// Nachkommastellen passiert ausschließlich bei der Formatierung.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisEvaluator {
    axis: String,
    p0: f32,
    p1: f32,
    p2: f32,
}

impl AxisEvaluator {
    /// Erstellt einen Evaluator für eine Achse (`axis` z.B. "x" oder "y").
    pub fn new(axis: impl Into<String>, p0: f32, p1: f32, p2: f32) -> Self {
        Self {
            axis: axis.into(),
            p0,
            p1,
            p2,
        }
    }

    /// Achsen-Label für die Anzeige.
    pub fn axis(&self) -> &str {
        &self.axis
    }

    /// B(t) = p0·(1-t)² + p1·2(1-t)t + p2·t²
    ///
    /// Für beliebige reelle `t` definiert; nicht geklemmt. Aufrufer sind
    /// für die Einschränkung auf [0, 1] selbst verantwortlich.
    pub fn evaluate(&self, t: f32) -> f32 {
        quadratic_blend(self.p0, self.p1, self.p2, t)
    }

    /// Formel-Trace der Auswertung.
    ///
    /// `t = None` lässt `t` symbolisch stehen. Mit `t = Some(..)` wird `t`
    /// numerisch eingesetzt und das Ergebnis angehängt.
    pub fn formula(&self, t: Option<f32>) -> String {
        let Self { axis, p0, p1, p2 } = self;
        match t {
            None => format!(
                "{axis}(t) = {p0:.2}·(1-t)² + {p1:.2}·2·(1-t)·t + {p2:.2}·t²"
            ),
            Some(t) => {
                let result = self.evaluate(t);
                format!(
                    "{axis}({t:.2}) = {p0:.2}·(1-{t:.2})² + {p1:.2}·2·(1-{t:.2})·{t:.2} + {p2:.2}·{t:.2}² = {result:.2}"
                )
            }
        }
    }
}

/// 2D-Kurven-Evaluator: zwei Achsen-Evaluatoren unter gemeinsamem Namen.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeEvaluator {
    name: String,
    x: AxisEvaluator,
    y: AxisEvaluator,
}

impl PipeEvaluator {
    /// Erstellt den Evaluator aus den drei Kontrollpunkten einer Pipe.
    pub fn new(name: impl Into<String>, start: Vec2, control: Vec2, end: Vec2) -> Self {
        Self {
            name: name.into(),
            x: AxisEvaluator::new("x", start.x, control.x, end.x),
            y: AxisEvaluator::new("y", start.y, control.y, end.y),
        }
    }

    /// Gemeinsamer Name beider Achsen.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Achsen-Evaluator für x.
    pub fn x(&self) -> &AxisEvaluator {
        &self.x
    }

    /// Achsen-Evaluator für y.
    pub fn y(&self) -> &AxisEvaluator {
        &self.y
    }

    /// Kurvenpunkt bei Parameter `t` (beide Achsen).
    pub fn evaluate(&self, t: f32) -> Vec2 {
        Vec2::new(self.x.evaluate(t), self.y.evaluate(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_endpoint_interpolation() {
        let eval = AxisEvaluator::new("x", 3.0, 17.5, -4.0);

        assert_relative_eq!(eval.evaluate(0.0), 3.0);
        assert_relative_eq!(eval.evaluate(1.0), -4.0);
    }

    #[test]
    fn test_evaluate_degenerate_constant() {
        let eval = AxisEvaluator::new("y", 42.0, 42.0, 42.0);
        for t in [-1.5f32, 0.0, 0.3, 1.0, 2.5] {
            assert_relative_eq!(eval.evaluate(t), 42.0, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_formula_symbolic_keeps_t_variable() {
        let eval = AxisEvaluator::new("x", 1.0, 2.5, 3.0);
        let formula = eval.formula(None);

        assert_eq!(formula, "x(t) = 1.00·(1-t)² + 2.50·2·(1-t)·t + 3.00·t²");
    }

    #[test]
    fn test_formula_substituted_appends_result() {
        // Symmetrischer Fall: linear in t, B(0.5) = 10
        let eval = AxisEvaluator::new("x", 0.0, 10.0, 20.0);
        let formula = eval.formula(Some(0.5));

        assert!(formula.contains("0.50"), "substituiertes t fehlt: {formula}");
        assert!(formula.ends_with("= 10.00"), "Ergebnis fehlt: {formula}");
    }

    #[test]
    fn test_rounding_is_presentation_only() {
        let eval = AxisEvaluator::new("x", 0.004, 0.0, 1.0);

        // Anzeige rundet auf 0.00, der gespeicherte Wert bleibt exakt
        assert!(eval.formula(None).contains("0.00"));
        assert_relative_eq!(eval.evaluate(0.0), 0.004);
    }

    #[test]
    fn test_pipe_evaluator_composes_both_axes() {
        let eval = PipeEvaluator::new(
            "pipe-0",
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(100.0, 100.0),
        );

        assert_eq!(eval.name(), "pipe-0");
        assert_eq!(eval.x().axis(), "x");
        assert_eq!(eval.y().axis(), "y");

        let mid = eval.evaluate(0.5);
        assert_relative_eq!(mid.x, 50.0);
        assert_relative_eq!(mid.y, 50.0);
    }
}
