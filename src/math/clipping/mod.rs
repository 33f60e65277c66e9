// src/math/clipping/mod.rs
pub mod clipper;
pub mod outcode;
pub mod stats;

pub use clipper::{
    ClipResult, ClipStep, ClipTrace, Endpoint, MAX_CORRECTIONS, SegmentClipper, clip, clip_all,
};
pub use outcode::{Boundary, OutCode};
pub use stats::ClipStatistics;
