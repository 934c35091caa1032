//! Zentrale Konfiguration für das QuadPipe Sketchpad.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Anker ───────────────────────────────────────────────────────────

/// Anker-Radius in Pixeln (Darstellung und Hit-Region).
pub const ANCHOR_RADIUS: f32 = 6.0;
/// Anker-Radius bei Hover (visuelle Betonung).
pub const ANCHOR_RADIUS_HOVER: f32 = 9.0;
/// Strichstärke der Anker-Kontur.
pub const ANCHOR_STROKE_WIDTH: f32 = 1.5;
/// Strichstärke der Anker-Kontur bei Hover.
pub const ANCHOR_STROKE_WIDTH_HOVER: f32 = 3.0;

// ── Kurvenkörper ────────────────────────────────────────────────────

/// Strichstärke des Kurvenkörpers in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 4.0;
/// Zusätzlicher Spielraum für den Kurvenkörper-Hit-Test in Pixeln.
pub const CURVE_HIT_SLACK: f32 = 4.0;
/// Segmente pro Kurve beim Zeichnen.
pub const CURVE_SAMPLES: usize = 48;

// ── Hülle & Erstellung ──────────────────────────────────────────────

/// Strichstärke des Hüllen-Rahmens.
pub const ENVELOPE_STROKE_WIDTH: f32 = 1.0;
/// Offset-Schritt der Erstellungskette (Start → Steuer → Ende), je Achse.
pub const CREATE_OFFSET_STEP: f32 = 50.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe des Kurvenkörpers (RGBA: Cyan).
pub const CURVE_COLOR: [f32; 4] = [0.2, 0.7, 1.0, 1.0];
/// Füllfarbe der Anker (RGBA: Weiß).
pub const ANCHOR_FILL_COLOR: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
/// Kontur-Farbe der Anker (RGBA: Dunkelgrau).
pub const ANCHOR_STROKE_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];
/// Farbe des Hüllen-Rahmens (RGBA: Grau, halbtransparent).
pub const ENVELOPE_COLOR: [f32; 4] = [0.55, 0.55, 0.55, 0.6];
/// Farbe der Formel-Annotation (RGBA: Hellgrau).
pub const ANNOTATION_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: fast Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.08, 0.08, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Sketchpad-Optionen.
/// Wird als `quad_pipe_sketchpad.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Anker ───────────────────────────────────────────────────
    /// Anker-Radius in Pixeln
    pub anchor_radius: f32,
    /// Anker-Radius bei Hover
    pub anchor_radius_hover: f32,
    /// Strichstärke der Anker-Kontur
    pub anchor_stroke_width: f32,
    /// Strichstärke der Anker-Kontur bei Hover
    pub anchor_stroke_width_hover: f32,
    /// Füllfarbe der Anker (RGBA)
    pub anchor_fill_color: [f32; 4],
    /// Kontur-Farbe der Anker (RGBA)
    pub anchor_stroke_color: [f32; 4],

    // ── Kurvenkörper ────────────────────────────────────────────
    /// Strichstärke des Kurvenkörpers
    pub curve_stroke_width: f32,
    /// Spielraum für den Kurvenkörper-Hit-Test
    pub curve_hit_slack: f32,
    /// Segmente pro Kurve beim Zeichnen
    pub curve_samples: usize,
    /// Farbe des Kurvenkörpers (RGBA)
    pub curve_color: [f32; 4],

    // ── Hülle ───────────────────────────────────────────────────
    /// Strichstärke des Hüllen-Rahmens
    pub envelope_stroke_width: f32,
    /// Farbe des Hüllen-Rahmens (RGBA)
    pub envelope_color: [f32; 4],

    // ── Erstellung ──────────────────────────────────────────────
    /// Offset-Schritt der Erstellungskette je Achse
    pub create_offset_step: f32,

    // ── Annotation ──────────────────────────────────────────────
    /// Formel-Annotation neben aktiven Pipes einblenden
    #[serde(default = "default_show_formulas")]
    pub show_formulas: bool,
    /// Farbe der Formel-Annotation (RGBA)
    #[serde(default = "default_annotation_color")]
    pub annotation_color: [f32; 4],

    // ── Fläche ──────────────────────────────────────────────────
    /// Hintergrundfarbe der Zeichenfläche (RGBA)
    pub background_color: [f32; 4],
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            anchor_radius: ANCHOR_RADIUS,
            anchor_radius_hover: ANCHOR_RADIUS_HOVER,
            anchor_stroke_width: ANCHOR_STROKE_WIDTH,
            anchor_stroke_width_hover: ANCHOR_STROKE_WIDTH_HOVER,
            anchor_fill_color: ANCHOR_FILL_COLOR,
            anchor_stroke_color: ANCHOR_STROKE_COLOR,

            curve_stroke_width: CURVE_STROKE_WIDTH,
            curve_hit_slack: CURVE_HIT_SLACK,
            curve_samples: CURVE_SAMPLES,
            curve_color: CURVE_COLOR,

            envelope_stroke_width: ENVELOPE_STROKE_WIDTH,
            envelope_color: ENVELOPE_COLOR,

            create_offset_step: CREATE_OFFSET_STEP,

            show_formulas: true,
            annotation_color: ANNOTATION_COLOR,

            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `show_formulas` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_formulas() -> bool {
    true
}

/// Serde-Default für `annotation_color` (Abwärtskompatibilität).
fn default_annotation_color() -> [f32; 4] {
    ANNOTATION_COLOR
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("quad_pipe_sketchpad"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("quad_pipe_sketchpad.toml")
    }

    /// Halbe Strichstärke plus Spielraum: effektive Hit-Breite des Kurvenkörpers.
    pub fn curve_hit_width(&self) -> f32 {
        self.curve_stroke_width * 0.5 + self.curve_hit_slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = SketchOptions::default();

        assert_eq!(opts.anchor_radius, ANCHOR_RADIUS);
        assert_eq!(opts.create_offset_step, CREATE_OFFSET_STEP);
        assert!(opts.show_formulas);
    }

    #[test]
    fn test_toml_roundtrip_preserves_options() {
        let mut opts = SketchOptions::default();
        opts.anchor_radius = 11.0;
        opts.show_formulas = false;

        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let restored: SketchOptions = toml::from_str(&toml_str).unwrap();

        assert_eq!(restored.anchor_radius, 11.0);
        assert!(!restored.show_formulas);
    }

    #[test]
    fn test_missing_annotation_fields_fall_back_to_defaults() {
        // TOML aus einer älteren Version ohne Annotation-Felder
        let mut opts = SketchOptions::default();
        opts.show_formulas = false;
        let mut toml_str = toml::to_string_pretty(&opts).unwrap();
        // `annotation_color` wird als mehrzeiliges Array serialisiert; daher den
        // gesamten Block (bis zur schließenden Klammer) entfernen, nicht nur die
        // erste Zeile – sonst bliebe ein verwaister Array-Körper zurück.
        let mut skipping = false;
        toml_str = toml_str
            .lines()
            .filter(|l| {
                if skipping {
                    if l.trim() == "]" {
                        skipping = false;
                    }
                    return false;
                }
                if l.starts_with("show_formulas") {
                    return false;
                }
                if l.starts_with("annotation_color") {
                    if !l.contains(']') {
                        skipping = true;
                    }
                    return false;
                }
                true
            })
            .collect::<Vec<_>>()
            .join("\n");

        let restored: SketchOptions = toml::from_str(&toml_str).unwrap();
        assert!(restored.show_formulas);
        assert_eq!(restored.annotation_color, ANNOTATION_COLOR);
    }

    #[test]
    fn test_curve_hit_width() {
        let opts = SketchOptions::default();
        assert_eq!(
            opts.curve_hit_width(),
            CURVE_STROKE_WIDTH * 0.5 + CURVE_HIT_SLACK
        );
    }
}
