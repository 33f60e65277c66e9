// src/debug/visualization/viewport.rs
use crate::math::types::*;

/// Abbildung von Weltkoordinaten auf eine Leinwand fester Größe.
///
/// `scale = min(w / (window_w + 1), h / (window_h + 1))`, Ursprung in der
/// linken unteren Fensterecke, y-Achse für Bildschirmkoordinaten invertiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    scale: f64,
    origin: Point,
    canvas: Point,
}

impl CanvasTransform {
    pub fn fit(window: &ClipWindow, canvas_width: f64, canvas_height: f64) -> Self {
        let scale_x = canvas_width / (window.width() + 1.0);
        let scale_y = canvas_height / (window.height() + 1.0);

        Self {
            scale: scale_x.min(scale_y),
            origin: window.min(),
            canvas: Point::new(canvas_width, canvas_height),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn canvas_size(&self) -> Point {
        self.canvas
    }

    /// Bildschirmkoordinaten: Ursprung oben links, y nach unten
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.origin.x) * self.scale,
            self.canvas.y - (point.y - self.origin.y) * self.scale,
        )
    }

    /// Koordinaten einer zentrierten 2D-Kamera mit y nach oben
    pub fn to_world(&self, point: Point) -> Vec2 {
        let screen = self.to_screen(point);
        Vec2::new(
            (screen.x - self.canvas.x * 0.5) as f32,
            (self.canvas.y * 0.5 - screen.y) as f32,
        )
    }

    /// Bildschirmrechteck des Fensters als `(x, y, width, height)`, oben links verankert
    pub fn window_rect(&self, window: &ClipWindow) -> (f64, f64, f64, f64) {
        let top_left = self.to_screen(Point::new(window.left(), window.top()));
        (
            top_left.x,
            top_left.y,
            window.width() * self.scale,
            window.height() * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_uses_smaller_scale() {
        let window = ClipWindow::new(0.0, 10.0, 10.0, 0.0).unwrap();
        let transform = CanvasTransform::fit(&window, 800.0, 600.0);
        assert_relative_eq!(transform.scale(), 600.0 / 11.0);
    }

    #[test]
    fn test_screen_y_is_inverted() {
        let window = ClipWindow::new(-5.0, 5.0, 5.0, -5.0).unwrap();
        let transform = CanvasTransform::fit(&window, 110.0, 110.0);
        assert_relative_eq!(transform.scale(), 10.0);

        let bottom_left = transform.to_screen(Point::new(-5.0, -5.0));
        assert_relative_eq!(bottom_left.x, 0.0);
        assert_relative_eq!(bottom_left.y, 110.0);

        let top_right = transform.to_screen(Point::new(5.0, 5.0));
        assert_relative_eq!(top_right.x, 100.0);
        assert_relative_eq!(top_right.y, 10.0);
    }

    #[test]
    fn test_world_coordinates_are_centered() {
        let window = ClipWindow::new(0.0, 10.0, 10.0, 0.0).unwrap();
        let transform = CanvasTransform::fit(&window, 110.0, 110.0);

        let world = transform.to_world(Point::new(0.0, 0.0));
        assert_relative_eq!(world.x, -55.0);
        assert_relative_eq!(world.y, -55.0);

        let world = transform.to_world(Point::new(10.0, 10.0));
        assert_relative_eq!(world.x, 45.0);
        assert_relative_eq!(world.y, 45.0);
    }

    #[test]
    fn test_window_rect() {
        let window = ClipWindow::new(0.0, 10.0, 10.0, 0.0).unwrap();
        let transform = CanvasTransform::fit(&window, 110.0, 110.0);
        let (x, y, w, h) = transform.window_rect(&window);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 10.0);
        assert_relative_eq!(w, 100.0);
        assert_relative_eq!(h, 100.0);
    }
}
