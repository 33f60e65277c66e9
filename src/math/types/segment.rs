// src/math/types/segment.rs

use crate::math::{types::*, utils::comparison};
use std::fmt;

/// Geordnetes Punktpaar `(x1,y1)-(x2,y2)`.
///
/// Reiner Werttyp: Clipping erzeugt immer neue Segmente, die Eingabe bleibt unverändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Erstellt ein Segment aus vier Koordinaten, wie sie eingelesen werden
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Alle vier Koordinaten sind endlich (kein NaN, kein ±∞)
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Segment der Länge (nahezu) Null
    pub fn is_degenerate(&self) -> bool {
        comparison::nearly_zero(self.length())
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
