// src/math/clipping/outcode.rs

use crate::math::types::*;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// 4-Bit Region-Code eines Punktes relativ zu einem Clip-Fenster.
///
/// Jedes Bit steht für eine verletzte Halbebene. `INSIDE` (0) heißt: im Fenster
/// oder genau auf dem Rand. Bits können kombiniert sein (Eckregionen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: OutCode = OutCode(0);
    pub const LEFT: OutCode = OutCode(1); // 0001
    pub const TOP: OutCode = OutCode(2); // 0010
    pub const BOTTOM: OutCode = OutCode(4); // 0100
    pub const RIGHT: OutCode = OutCode(8); // 1000

    /// Berechnet den Code eines Punktes.
    ///
    /// NaN besteht keinen der Vergleiche und landet damit bei `INSIDE`.
    pub fn classify(point: Point, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;
        if point.x < window.left() {
            code |= Self::LEFT;
        }
        if point.x > window.right() {
            code |= Self::RIGHT;
        }
        if point.y < window.bottom() {
            code |= Self::BOTTOM;
        }
        if point.y > window.top() {
            code |= Self::TOP;
        }
        code
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Prüft ob alle Bits von `other` gesetzt sind
    pub fn contains(self, other: OutCode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Erste gesetzte Grenze in der festen Reihenfolge TOP, BOTTOM, RIGHT, LEFT
    pub fn boundary(self) -> Option<Boundary> {
        Boundary::PRIORITY
            .into_iter()
            .find(|boundary| self.contains(boundary.outcode()))
    }
}

impl BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: OutCode) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = OutCode;

    fn bitand(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 & rhs.0)
    }
}

impl fmt::Display for OutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            return write!(f, "INSIDE");
        }
        let names: Vec<&str> = Boundary::PRIORITY
            .into_iter()
            .filter(|boundary| self.contains(boundary.outcode()))
            .map(Boundary::name)
            .collect();
        write!(f, "{}", names.join("|"))
    }
}

/// Eine der vier Fenstergrenzen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    /// Feste Prüfreihenfolge. Bestimmt bei Eckregionen, welche Grenze zuerst korrigiert wird.
    pub const PRIORITY: [Boundary; 4] = [
        Boundary::Top,
        Boundary::Bottom,
        Boundary::Right,
        Boundary::Left,
    ];

    pub fn outcode(self) -> OutCode {
        match self {
            Boundary::Top => OutCode::TOP,
            Boundary::Bottom => OutCode::BOTTOM,
            Boundary::Right => OutCode::RIGHT,
            Boundary::Left => OutCode::LEFT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Boundary::Top => "TOP",
            Boundary::Bottom => "BOTTOM",
            Boundary::Right => "RIGHT",
            Boundary::Left => "LEFT",
        }
    }

    /// Schnittpunkt der Geraden durch `p0` und `p1` mit dieser Grenze.
    ///
    /// `None` bei Nenner 0 oder nicht-endlichem Ergebnis.
    pub fn intersect(self, p0: Point, p1: Point, window: &ClipWindow) -> Option<Point> {
        let point = match self {
            Boundary::Top | Boundary::Bottom => {
                let y = if self == Boundary::Top {
                    window.top()
                } else {
                    window.bottom()
                };
                let dy = p1.y - p0.y;
                if dy == 0.0 {
                    return None;
                }
                Point::new(p0.x + (p1.x - p0.x) * (y - p0.y) / dy, y)
            }
            Boundary::Right | Boundary::Left => {
                let x = if self == Boundary::Right {
                    window.right()
                } else {
                    window.left()
                };
                let dx = p1.x - p0.x;
                if dx == 0.0 {
                    return None;
                }
                Point::new(x, p0.y + (p1.y - p0.y) * (x - p0.x) / dx)
            }
        };

        point.is_finite().then_some(point)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 10.0, 10.0, 0.0).unwrap()
    }

    #[test]
    fn test_classify_single_regions() {
        let w = window();
        assert_eq!(OutCode::classify(Point::new(5.0, 5.0), &w), OutCode::INSIDE);
        assert_eq!(OutCode::classify(Point::new(-1.0, 5.0), &w), OutCode::LEFT);
        assert_eq!(OutCode::classify(Point::new(11.0, 5.0), &w), OutCode::RIGHT);
        assert_eq!(OutCode::classify(Point::new(5.0, -1.0), &w), OutCode::BOTTOM);
        assert_eq!(OutCode::classify(Point::new(5.0, 11.0), &w), OutCode::TOP);
    }

    #[test]
    fn test_classify_corner_regions() {
        let w = window();
        let code = OutCode::classify(Point::new(-1.0, 11.0), &w);
        assert_eq!(code, OutCode::LEFT | OutCode::TOP);
        assert_eq!(code.bits(), 0b0011);

        let code = OutCode::classify(Point::new(12.0, -3.0), &w);
        assert_eq!(code, OutCode::RIGHT | OutCode::BOTTOM);
        assert_eq!(code.bits(), 0b1100);
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let w = window();
        for corner in w.corners() {
            assert!(OutCode::classify(corner, &w).is_inside());
        }
        assert!(OutCode::classify(Point::new(0.0, 7.0), &w).is_inside());
    }

    #[test]
    fn test_nan_classifies_as_inside() {
        let code = OutCode::classify(Point::new(f64::NAN, f64::NAN), &window());
        assert!(code.is_inside());
    }

    #[test]
    fn test_boundary_priority() {
        let all = OutCode::LEFT | OutCode::RIGHT | OutCode::TOP | OutCode::BOTTOM;
        assert_eq!(all.boundary(), Some(Boundary::Top));
        assert_eq!((OutCode::LEFT | OutCode::BOTTOM).boundary(), Some(Boundary::Bottom));
        assert_eq!((OutCode::LEFT | OutCode::RIGHT).boundary(), Some(Boundary::Right));
        assert_eq!(OutCode::LEFT.boundary(), Some(Boundary::Left));
        assert_eq!(OutCode::INSIDE.boundary(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(OutCode::INSIDE.to_string(), "INSIDE");
        assert_eq!((OutCode::LEFT | OutCode::TOP).to_string(), "TOP|LEFT");
    }

    #[test]
    fn test_intersections() {
        let w = window();
        let p0 = Point::new(-5.0, 0.0);
        let p1 = Point::new(15.0, 20.0);

        let top = Boundary::Top.intersect(p0, p1, &w).unwrap();
        assert_relative_eq!(top.x, 5.0);
        assert_relative_eq!(top.y, 10.0);

        let left = Boundary::Left.intersect(p0, p1, &w).unwrap();
        assert_relative_eq!(left.x, 0.0);
        assert_relative_eq!(left.y, 5.0);

        let right = Boundary::Right.intersect(p0, p1, &w).unwrap();
        assert_relative_eq!(right.y, 15.0);

        let bottom = Boundary::Bottom.intersect(p0, p1, &w).unwrap();
        assert_relative_eq!(bottom.x, -5.0);
    }

    #[test]
    fn test_intersection_with_zero_denominator() {
        let w = window();
        let horizontal = (Point::new(-5.0, 12.0), Point::new(5.0, 12.0));
        assert_eq!(Boundary::Top.intersect(horizontal.0, horizontal.1, &w), None);

        let vertical = (Point::new(-1.0, 0.0), Point::new(-1.0, 5.0));
        assert_eq!(Boundary::Left.intersect(vertical.0, vertical.1, &w), None);
    }
}
