// src/math/types/mod.rs
pub mod segment;
pub mod window;

pub use segment::*;
pub use window::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::{DVec2, Vec2};

// Einheitlicher Punkttyp für den Clipping-Kern (f64, wie die Eingabe)
pub type Point = DVec2;
