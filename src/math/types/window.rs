// src/math/types/window.rs

use crate::math::{clipping::OutCode, error::*, types::*};
use std::fmt;

/// Achsenparalleles Clip-Fenster.
///
/// Die Grenzen werden einmal beim Erstellen geprüft (`left <= right`,
/// `bottom <= top`, alle Werte endlich) und sind danach unveränderlich.
/// Ein entartetes Fenster (Breite oder Höhe 0) ist erlaubt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl ClipWindow {
    /// Erstellt ein neues Fenster in der Reihenfolge `left, top, right, bottom`
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> MathResult<Self> {
        for (name, value) in [
            ("left", left),
            ("top", top),
            ("right", right),
            ("bottom", bottom),
        ] {
            if !value.is_finite() {
                return Err(MathError::NonFiniteCoordinate {
                    context: format!("clip window ({name})"),
                    value,
                });
            }
        }

        if left > right || bottom > top {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Invalid clip window: left {left} > right {right} or bottom {bottom} > top {top}"
                ),
            });
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Erstellt ein Fenster aus zwei beliebigen Eckpunkten
    pub fn from_corners(a: Point, b: Point) -> MathResult<Self> {
        Self::new(a.x.min(b.x), a.y.max(b.y), a.x.max(b.x), a.y.min(b.y))
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Untere linke Ecke
    pub fn min(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// Obere rechte Ecke
    pub fn max(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Point {
        (self.min() + self.max()) * 0.5
    }

    /// Prüft ob ein Punkt im Fenster oder auf dessen Rand liegt
    pub fn contains(&self, point: Point) -> bool {
        self.outcode(point).is_inside()
    }

    /// Region-Code eines Punktes relativ zu diesem Fenster
    pub fn outcode(&self, point: Point) -> OutCode {
        OutCode::classify(point, self)
    }

    /// Skaliert das Fenster um seinen Mittelpunkt
    pub fn scaled(&self, factor: f64) -> MathResult<Self> {
        let center = self.center();
        let half = Point::new(self.width(), self.height()) * factor.abs() * 0.5;
        Self::from_corners(center - half, center + half)
    }

    /// Die vier Eckpunkte, gegen den Uhrzeigersinn ab unten links
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.bottom),  // unten links
            Point::new(self.right, self.bottom), // unten rechts
            Point::new(self.right, self.top),    // oben rechts
            Point::new(self.left, self.top),     // oben links
        ]
    }
}

impl fmt::Display for ClipWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClipWindow(left={}, top={}, right={}, bottom={})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_window() {
        let window = ClipWindow::new(0.0, 10.0, 20.0, -5.0).unwrap();
        assert_relative_eq!(window.width(), 20.0);
        assert_relative_eq!(window.height(), 15.0);
        assert_eq!(window.min(), Point::new(0.0, -5.0));
        assert_eq!(window.max(), Point::new(20.0, 10.0));
        assert_eq!(window.center(), Point::new(10.0, 2.5));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        assert!(matches!(
            ClipWindow::new(10.0, 10.0, 0.0, 0.0),
            Err(MathError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            ClipWindow::new(0.0, 0.0, 10.0, 10.0),
            Err(MathError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_non_finite_window_is_rejected() {
        assert!(matches!(
            ClipWindow::new(f64::NAN, 10.0, 10.0, 0.0),
            Err(MathError::NonFiniteCoordinate { .. })
        ));
        assert!(ClipWindow::new(0.0, f64::INFINITY, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_degenerate_window_is_allowed() {
        let window = ClipWindow::new(3.0, 5.0, 3.0, 5.0).unwrap();
        assert_eq!(window.width(), 0.0);
        assert_eq!(window.height(), 0.0);
        assert!(window.contains(Point::new(3.0, 5.0)));
        assert!(!window.contains(Point::new(3.0, 5.1)));
    }

    #[test]
    fn test_contains_includes_boundary() {
        let window = ClipWindow::new(0.0, 10.0, 10.0, 0.0).unwrap();
        assert!(window.contains(Point::new(0.0, 0.0)));
        assert!(window.contains(Point::new(10.0, 5.0)));
        assert!(!window.contains(Point::new(-0.001, 5.0)));
    }

    #[test]
    fn test_from_corners_and_scaled() {
        let window = ClipWindow::from_corners(Point::new(4.0, 0.0), Point::new(0.0, 2.0)).unwrap();
        assert_eq!(window, ClipWindow::new(0.0, 2.0, 4.0, 0.0).unwrap());

        let bigger = window.scaled(1.5).unwrap();
        assert_relative_eq!(bigger.width(), 6.0);
        assert_relative_eq!(bigger.height(), 3.0);
        assert_eq!(bigger.center(), window.center());
    }
}
