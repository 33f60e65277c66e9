// src/math/clipping/stats.rs

use super::clipper::{ClipResult, ClipTrace, SegmentClipper};
use crate::math::types::*;

/// Statistiken über einen Clipping-Durchlauf
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipStatistics {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Gesamtlänge der Eingabesegmente
    pub original_length: f64,
    /// Gesamtlänge der sichtbaren Teile
    pub clipped_length: f64,
    pub length_retention_ratio: f64,
}

impl ClipStatistics {
    /// Fasst bereits berechnete Traces zusammen
    pub fn from_traces(traces: &[ClipTrace]) -> Self {
        let mut stats = Self {
            total: traces.len(),
            ..Self::default()
        };

        for trace in traces {
            stats.original_length += trace.input.length();
            match trace.result {
                ClipResult::Accepted(segment) => {
                    stats.accepted += 1;
                    stats.clipped_length += segment.length();
                }
                ClipResult::Rejected => stats.rejected += 1,
            }
        }

        stats.length_retention_ratio = if stats.original_length > 0.0 {
            stats.clipped_length / stats.original_length
        } else {
            0.0
        };
        stats
    }
}

impl SegmentClipper {
    /// Clippt alle Segmente und berechnet die Statistiken
    pub fn statistics(&self, segments: &[Segment]) -> ClipStatistics {
        let traces: Vec<ClipTrace> = segments.iter().map(|s| self.clip_traced(s)).collect();
        ClipStatistics::from_traces(&traces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_statistics() {
        let clipper = SegmentClipper::new(ClipWindow::new(0.0, 10.0, 10.0, 0.0).unwrap());
        let segments = [
            Segment::from_coords(-5.0, 5.0, 5.0, 5.0),   // 10 -> 5
            Segment::from_coords(-5.0, -5.0, -1.0, -1.0), // verworfen
            Segment::from_coords(2.0, 2.0, 2.0, 8.0),    // 6 -> 6
        ];
        let stats = clipper.statistics(&segments);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.rejected, 1);
        assert_relative_eq!(stats.original_length, 16.0 + 32.0_f64.sqrt());
        assert_relative_eq!(stats.clipped_length, 11.0);
        assert_relative_eq!(
            stats.length_retention_ratio,
            11.0 / (16.0 + 32.0_f64.sqrt())
        );
    }

    #[test]
    fn test_empty_statistics() {
        let stats = ClipStatistics::from_traces(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.length_retention_ratio, 0.0);
    }
}
