// src/math/clipping/clipper.rs

use super::outcode::{Boundary, OutCode};
use crate::math::types::*;

/// Obergrenze der Randkorrekturen bei exakter Arithmetik (eine pro Seite)
pub const MAX_CORRECTIONS: usize = 4;

/// Harte Schleifengrenze. Rundung an Ecken kann ein bereits gelöschtes Bit erneut setzen.
const CORRECTION_LIMIT: usize = 2 * MAX_CORRECTIONS;

/// Ergebnis eines einzelnen Clipping-Vorgangs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// Sichtbarer (ggf. verkürzter) Teil des Segments
    Accepted(Segment),
    /// Segment liegt vollständig außerhalb
    Rejected,
}

impl ClipResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ClipResult::Accepted(_))
    }

    pub fn accepted(self) -> Option<Segment> {
        match self {
            ClipResult::Accepted(segment) => Some(segment),
            ClipResult::Rejected => None,
        }
    }
}

/// Welcher Endpunkt in einem Schritt ersetzt wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// Eine Randkorrektur: `endpoint` wurde an `boundary` auf `point` verschoben
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipStep {
    pub endpoint: Endpoint,
    pub boundary: Boundary,
    pub point: Point,
}

/// Vollständiger Verlauf eines Clipping-Vorgangs
#[derive(Debug, Clone, PartialEq)]
pub struct ClipTrace {
    pub input: Segment,
    pub result: ClipResult,
    pub steps: Vec<ClipStep>,
}

/// Cohen-Sutherland Clipper für ein festes Fenster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentClipper {
    window: ClipWindow,
}

impl SegmentClipper {
    pub fn new(window: ClipWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &ClipWindow {
        &self.window
    }

    /// Clippt ein einzelnes Segment
    pub fn clip(&self, segment: &Segment) -> ClipResult {
        self.run(segment, |_| {})
    }

    /// Clippt ein Segment und zeichnet jede Randkorrektur auf
    pub fn clip_traced(&self, segment: &Segment) -> ClipTrace {
        let mut steps = Vec::with_capacity(MAX_CORRECTIONS);
        let result = self.run(segment, |step| steps.push(step));
        ClipTrace {
            input: *segment,
            result,
            steps,
        }
    }

    /// Clippt alle Segmente und behält nur die sichtbaren, in Eingabereihenfolge
    pub fn clip_all(&self, segments: &[Segment]) -> Vec<Segment> {
        segments
            .iter()
            .filter_map(|segment| self.clip(segment).accepted())
            .collect()
    }

    fn run(&self, segment: &Segment, mut on_step: impl FnMut(ClipStep)) -> ClipResult {
        // NaN würde als INSIDE klassifiziert und unverändert akzeptiert
        if !segment.is_finite() {
            return ClipResult::Rejected;
        }

        let window = &self.window;
        let mut p0 = segment.start;
        let mut p1 = segment.end;
        let mut code0 = window.outcode(p0);
        let mut code1 = window.outcode(p1);

        for _ in 0..=CORRECTION_LIMIT {
            if (code0 | code1).is_inside() {
                return ClipResult::Accepted(Segment::new(p0, p1));
            }
            if !(code0 & code1).is_inside() {
                return ClipResult::Rejected;
            }

            // Bei zwei äußeren Punkten wird immer zuerst der Startpunkt korrigiert
            let (endpoint, code_out) = if !code0.is_inside() {
                (Endpoint::Start, code0)
            } else {
                (Endpoint::End, code1)
            };
            let Some(boundary) = code_out.boundary() else {
                return ClipResult::Rejected;
            };
            let Some(point) = boundary.intersect(p0, p1, window) else {
                return ClipResult::Rejected;
            };

            on_step(ClipStep {
                endpoint,
                boundary,
                point,
            });

            match endpoint {
                Endpoint::Start => {
                    p0 = point;
                    code0 = window.outcode(p0);
                }
                Endpoint::End => {
                    p1 = point;
                    code1 = window.outcode(p1);
                }
            }
        }

        ClipResult::Rejected
    }
}

/// Clippt ein Segment gegen ein Fenster
pub fn clip(window: ClipWindow, segment: Segment) -> ClipResult {
    SegmentClipper::new(window).clip(&segment)
}

/// Clippt alle Segmente gegen ein Fenster und verwirft die unsichtbaren
pub fn clip_all(window: ClipWindow, segments: &[Segment]) -> Vec<Segment> {
    SegmentClipper::new(window).clip_all(segments)
}
