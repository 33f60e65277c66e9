// src/input/scene.rs
use super::{error::*, reader::TokenReader};
use crate::math::types::*;
use std::io::BufRead;

/// Eingelesenes Fenster plus Rohsegmente
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInput {
    pub window: ClipWindow,
    pub segments: Vec<Segment>,
}

/// Liest `left top right bottom`, danach die Anzahl und je Segment `x1 y1 x2 y2`.
pub fn read_scene<R: BufRead>(reader: &mut TokenReader<R>) -> InputResult<SceneInput> {
    reader.announce("Enter the clip window coordinates:")?;
    let left = reader.read_f64("window left", "Left boundary (x_left): ")?;
    let top = reader.read_f64("window top", "Top boundary (y_top): ")?;
    let right = reader.read_f64("window right", "Right boundary (x_right): ")?;
    let bottom = reader.read_f64("window bottom", "Bottom boundary (y_bottom): ")?;
    let window = ClipWindow::new(left, top, right, bottom)?;

    let count = reader.read_count("segment count", "Number of segments: ")?;
    let mut segments = Vec::with_capacity(count);
    for i in 1..=count {
        reader.announce(&format!("Segment {i}:"))?;
        let x1 = reader.read_f64(&format!("x1 of segment {i}"), "x1 = ")?;
        let y1 = reader.read_f64(&format!("y1 of segment {i}"), "y1 = ")?;
        let x2 = reader.read_f64(&format!("x2 of segment {i}"), "x2 = ")?;
        let y2 = reader.read_f64(&format!("y2 of segment {i}"), "y2 = ")?;
        segments.push(Segment::from_coords(x1, y1, x2, y2));
    }

    Ok(SceneInput { window, segments })
}
