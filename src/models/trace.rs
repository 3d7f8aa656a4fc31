//! Gantt trace (execution history) model.
//!
//! A trace is the ordered list of execution segments a policy produced:
//! which process held the CPU, from when, until when. Segments are
//! write-once; the trace only grows.

use serde::{Deserialize, Serialize};

/// One uninterrupted stretch of CPU time given to a single process.
///
/// Covers the half-open interval `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Process that held the CPU.
    pub process_id: u32,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive). Always greater than `start_time`.
    pub end_time: i64,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(process_id: u32, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Display label of the process (`P1`, ...).
    pub fn label(&self) -> String {
        format!("P{}", self.process_id)
    }
}

/// A stretch of time during which the CPU had nothing to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// Gap start (inclusive).
    pub start_time: i64,
    /// Gap end (exclusive).
    pub end_time: i64,
}

/// The full processor occupancy history of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttTrace {
    segments: Vec<GanttSegment>,
}

impl GanttTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment. Empty or inverted segments are dropped.
    pub fn push(&mut self, segment: GanttSegment) {
        if segment.end_time > segment.start_time {
            self.segments.push(segment);
        }
    }

    /// All segments, in execution order.
    pub fn segments(&self) -> &[GanttSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the trace has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment.
    pub fn start_time(&self) -> Option<i64> {
        self.segments.first().map(|s| s.start_time)
    }

    /// Makespan: end of the last segment (0 for an empty trace).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// All segments belonging to a process.
    pub fn segments_for(&self, process_id: u32) -> Vec<&GanttSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time given to a process.
    pub fn executed_time(&self, process_id: u32) -> i64 {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Completion time for a process (latest end of its segments).
    pub fn completion_time(&self, process_id: u32) -> Option<i64> {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.end_time)
            .max()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Intervals between consecutive segments where the CPU was idle.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        self.segments
            .windows(2)
            .filter(|w| w[1].start_time > w[0].end_time)
            .map(|w| IdleGap {
                start_time: w[0].end_time,
                end_time: w[1].start_time,
            })
            .collect()
    }

    /// Whether every segment starts at or after the previous one ends.
    pub fn is_non_overlapping(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[1].start_time >= w[0].end_time)
    }

    /// Whether there are no idle gaps and no overlaps.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[1].start_time == w[0].end_time)
    }
}

impl<'a> IntoIterator for &'a GanttTrace {
    type Item = &'a GanttSegment;
    type IntoIter = std::slice::Iter<'a, GanttSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace() -> GanttTrace {
        let mut t = GanttTrace::new();
        t.push(GanttSegment::new(1, 0, 4));
        t.push(GanttSegment::new(2, 4, 8));
        t.push(GanttSegment::new(1, 8, 10));
        t
    }

    #[test]
    fn test_segment_duration() {
        let s = GanttSegment::new(3, 5, 9);
        assert_eq!(s.duration(), 4);
        assert_eq!(s.label(), "P3");
    }

    #[test]
    fn test_push_drops_empty_segment() {
        let mut t = GanttTrace::new();
        t.push(GanttSegment::new(1, 4, 4));
        t.push(GanttSegment::new(1, 5, 3));
        assert!(t.is_empty());
    }

    #[test]
    fn test_trace_queries() {
        let t = sample_trace();
        assert_eq!(t.len(), 3);
        assert_eq!(t.start_time(), Some(0));
        assert_eq!(t.makespan(), 10);
        assert_eq!(t.segments_for(1).len(), 2);
        assert_eq!(t.executed_time(1), 6);
        assert_eq!(t.executed_time(2), 4);
        assert_eq!(t.completion_time(1), Some(10));
        assert_eq!(t.completion_time(2), Some(8));
        assert_eq!(t.completion_time(9), None);
        assert_eq!(t.busy_time(), 10);
    }

    #[test]
    fn test_contiguity() {
        let t = sample_trace();
        assert!(t.is_contiguous());
        assert!(t.is_non_overlapping());
        assert!(t.idle_gaps().is_empty());
    }

    #[test]
    fn test_idle_gaps() {
        let mut t = GanttTrace::new();
        t.push(GanttSegment::new(1, 0, 2));
        t.push(GanttSegment::new(2, 5, 7));
        assert!(!t.is_contiguous());
        assert!(t.is_non_overlapping());
        assert_eq!(
            t.idle_gaps(),
            vec![IdleGap {
                start_time: 2,
                end_time: 5
            }]
        );
    }

    #[test]
    fn test_overlap_detected() {
        let mut t = GanttTrace::new();
        t.push(GanttSegment::new(1, 0, 4));
        t.push(GanttSegment::new(2, 3, 6));
        assert!(!t.is_non_overlapping());
    }

    #[test]
    fn test_empty_trace() {
        let t = GanttTrace::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.start_time(), None);
        assert!(t.is_contiguous());
    }
}
