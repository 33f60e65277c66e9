use crate::math::prelude::*;
use bevy::prelude::*;
use std::path::PathBuf;

/// Fenster, Eingabesegmente und die Clipping-Ergebnisse eines Laufs.
///
/// Wird einmal beim Start berechnet und danach nur noch gelesen.
#[derive(Resource, Debug, Clone)]
pub struct ClipScene {
    pub window: ClipWindow,
    pub originals: Vec<Segment>,
    /// Ein Trace pro Eingabesegment, gleiche Reihenfolge wie `originals`
    pub traces: Vec<ClipTrace>,
    /// Nur die akzeptierten Segmente, in Eingabereihenfolge
    pub clipped: Vec<Segment>,
    pub stats: ClipStatistics,
}

impl ClipScene {
    pub fn new(window: ClipWindow, originals: Vec<Segment>) -> Self {
        let clipper = SegmentClipper::new(window);
        let traces: Vec<ClipTrace> = originals.iter().map(|s| clipper.clip_traced(s)).collect();
        let clipped = traces
            .iter()
            .filter_map(|trace| trace.result.accepted())
            .collect();
        let stats = ClipStatistics::from_traces(&traces);

        Self {
            window,
            originals,
            traces,
            clipped,
            stats,
        }
    }

    /// Alle Schnittpunkte, an denen ein Endpunkt korrigiert wurde
    pub fn intersection_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.traces
            .iter()
            .flat_map(|trace| trace.steps.iter().map(|step| step.point))
    }
}

#[derive(Resource, Debug)]
pub struct DisplaySettings {
    // --- Leinwand ---
    /// Größe des Fensters beim Start und der SVG-Datei
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub stroke_width: f32,
    pub marker_radius: f32,

    // --- Ebenen ---
    pub show_window: bool,
    pub show_originals: bool,
    pub show_clipped: bool,
    pub show_intersections: bool,

    // --- Farben ---
    pub background_color: Color,
    pub window_color: Color,
    pub original_color: Color,
    pub clipped_color: Color,
    pub intersection_color: Color,

    // --- Export ---
    pub svg_path: PathBuf,
    pub export_svg_request: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            // Leinwand
            canvas_width: 800.0,
            canvas_height: 600.0,
            stroke_width: 2.0,
            marker_radius: 4.0,

            // Ebenen
            show_window: true,
            show_originals: true,
            show_clipped: true,
            show_intersections: false,

            // Farben
            background_color: Color::WHITE,
            window_color: Color::rgb(1.0, 0.0, 0.0),
            original_color: Color::rgb(0.75, 0.75, 0.75),
            clipped_color: Color::BLACK,
            intersection_color: Color::rgb(0.0, 0.4, 1.0),

            // Export
            svg_path: PathBuf::from("clipping.svg"),
            export_svg_request: false,
        }
    }
}
