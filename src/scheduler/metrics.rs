//! Run performance metrics.
//!
//! Computes per-process and aggregate indicators from a completed
//! process table. Depends only on each process's final state, never on
//! trace order.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Avg Waiting / Avg Turnaround | Arithmetic mean over processes |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / (makespan - first arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{GanttTrace, ProcessTable};

/// Which arrival time the metrics are measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalBasis {
    /// Each process's own `arrival_time`.
    #[default]
    Stated,
    /// Every process treated as arriving at t=0.
    Origin,
}

impl ArrivalBasis {
    fn arrival(self, stated: i64) -> i64 {
        match self {
            Self::Stated => stated,
            Self::Origin => 0,
        }
    }
}

/// Final timing figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process ID.
    pub process_id: u32,
    /// Arrival time the metrics were measured from (0 under `ArrivalBasis::Origin`).
    pub arrival_time: i64,
    /// Arrival time as given in the process table.
    pub stated_arrival: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Completion time.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
}

impl ProcessMetrics {
    fn new(
        process_id: u32,
        stated_arrival: i64,
        basis: ArrivalBasis,
        burst_time: i64,
        completion_time: i64,
    ) -> Self {
        let arrival_time = basis.arrival(stated_arrival);
        let turnaround_time = completion_time - arrival_time;
        Self {
            process_id,
            arrival_time,
            stated_arrival,
            burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - burst_time,
        }
    }

    /// Display label (`P1`, ...).
    pub fn label(&self) -> String {
        format!("P{}", self.process_id)
    }
}

/// Aggregate performance of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Per-process figures, in process-table order.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean waiting time (exact).
    pub avg_waiting: f64,
    /// Mean turnaround time (exact).
    pub avg_turnaround: f64,
    /// Largest single waiting time.
    pub max_waiting: i64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of [first arrival, makespan) the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl RunMetrics {
    /// Computes metrics from a process table.
    ///
    /// Processes without a completion time are skipped.
    pub fn calculate(table: &ProcessTable, basis: ArrivalBasis) -> Self {
        let per_process = table
            .iter()
            .filter_map(|p| {
                p.completion_time()
                    .map(|c| ProcessMetrics::new(p.id, p.arrival_time, basis, p.burst_time, c))
            })
            .collect();
        Self::from_process_metrics(per_process)
    }

    /// Recomputes metrics using completion times read back from a trace.
    ///
    /// Processes that never appear in the trace are skipped.
    pub fn from_trace(trace: &GanttTrace, table: &ProcessTable, basis: ArrivalBasis) -> Self {
        let per_process = table
            .iter()
            .filter_map(|p| {
                trace
                    .completion_time(p.id)
                    .map(|c| ProcessMetrics::new(p.id, p.arrival_time, basis, p.burst_time, c))
            })
            .collect();
        Self::from_process_metrics(per_process)
    }

    fn from_process_metrics(per_process: Vec<ProcessMetrics>) -> Self {
        let counted = per_process.len();
        // Per-process figures fit in i64; their sums need not.
        let total_waiting: i128 = per_process.iter().map(|m| i128::from(m.waiting_time)).sum();
        let total_turnaround: i128 = per_process
            .iter()
            .map(|m| i128::from(m.turnaround_time))
            .sum();
        let total_burst: i128 = per_process.iter().map(|m| i128::from(m.burst_time)).sum();
        let max_waiting = per_process
            .iter()
            .map(|m| m.waiting_time)
            .max()
            .unwrap_or(0);
        let makespan = per_process
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0);
        let first_arrival = per_process
            .iter()
            .map(|m| m.arrival_time)
            .min()
            .unwrap_or(0);

        let (avg_waiting, avg_turnaround) = if counted == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / counted as f64,
                total_turnaround as f64 / counted as f64,
            )
        };

        let horizon = makespan - first_arrival;
        let cpu_utilization = if horizon <= 0 {
            0.0
        } else {
            total_burst as f64 / horizon as f64
        };

        Self {
            per_process,
            avg_waiting,
            avg_turnaround,
            max_waiting,
            makespan,
            cpu_utilization,
        }
    }

    /// Average waiting time rounded to two decimals.
    pub fn avg_waiting_rounded(&self) -> f64 {
        round2(self.avg_waiting)
    }

    /// Average turnaround time rounded to two decimals.
    pub fn avg_turnaround_rounded(&self) -> f64 {
        round2(self.avg_turnaround)
    }

    /// Metrics for a single process.
    pub fn for_process(&self, process_id: u32) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.process_id == process_id)
    }

    /// Number of processes the metrics cover.
    pub fn process_count(&self) -> usize {
        self.per_process.len()
    }
}

/// Rounds half away from zero to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GanttSegment, Process};

    fn completed_table(rows: &[(i64, i64, i64)]) -> ProcessTable {
        rows.iter()
            .enumerate()
            .map(|(i, &(arrival, burst, completion))| {
                let mut p = Process::new(i as u32 + 1, arrival, burst);
                p.consume(burst);
                p.complete_at(completion);
                p
            })
            .collect()
    }

    #[test]
    fn test_metrics_basic() {
        // Sorted SJF [6, 7, 8] back-to-back from t=0
        let table = completed_table(&[(0, 6, 6), (0, 7, 13), (0, 8, 21)]);
        let m = RunMetrics::calculate(&table, ArrivalBasis::Stated);

        let waits: Vec<i64> = m.per_process.iter().map(|p| p.waiting_time).collect();
        let tats: Vec<i64> = m.per_process.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(waits, vec![0, 6, 13]);
        assert_eq!(tats, vec![6, 13, 21]);
        assert!((m.avg_waiting - 19.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_turnaround - 40.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_waiting_rounded() - 6.33).abs() < 1e-10);
        assert!((m.avg_turnaround_rounded() - 13.33).abs() < 1e-10);
        assert_eq!(m.max_waiting, 13);
        assert_eq!(m.makespan, 21);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_with_arrivals() {
        let table = completed_table(&[(0, 6, 14), (1, 8, 18), (2, 7, 21)]);
        let m = RunMetrics::calculate(&table, ArrivalBasis::Stated);
        let p2 = m.for_process(2).unwrap();
        assert_eq!(p2.turnaround_time, 17);
        assert_eq!(p2.waiting_time, 9);
        assert!((m.avg_turnaround - 50.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_waiting - 29.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_origin_basis_ignores_arrival() {
        let table = completed_table(&[(5, 3, 3)]);
        let m = RunMetrics::calculate(&table, ArrivalBasis::Origin);
        assert_eq!(m.per_process[0].arrival_time, 0);
        assert_eq!(m.per_process[0].stated_arrival, 5);
        assert_eq!(m.per_process[0].turnaround_time, 3);
        assert_eq!(m.per_process[0].waiting_time, 0);
    }

    #[test]
    fn test_totals_beyond_i64() {
        // Each turnaround fits in i64, their sum does not.
        let half = i64::MAX / 2;
        let table = completed_table(&[(0, half, half), (0, half, 2 * half)]);
        let m = RunMetrics::calculate(&table, ArrivalBasis::Stated);
        let expected = (half as f64 + (2 * half) as f64) / 2.0;
        assert!((m.avg_turnaround - expected).abs() / expected < 1e-12);
        assert_eq!(m.makespan, 2 * half);
    }

    #[test]
    fn test_order_independent() {
        let a = completed_table(&[(0, 2, 2), (0, 4, 6)]);
        let b = completed_table(&[(0, 4, 6), (0, 2, 2)]);
        let ma = RunMetrics::calculate(&a, ArrivalBasis::Stated);
        let mb = RunMetrics::calculate(&b, ArrivalBasis::Stated);
        assert!((ma.avg_waiting - mb.avg_waiting).abs() < 1e-10);
        assert!((ma.avg_turnaround - mb.avg_turnaround).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_with_idle() {
        // Busy 2 of the 4 units between first arrival (0) and makespan (4)
        let table = completed_table(&[(0, 1, 1), (3, 1, 4)]);
        let m = RunMetrics::calculate(&table, ArrivalBasis::Stated);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_incomplete_processes_skipped() {
        let mut table = completed_table(&[(0, 2, 2)]);
        table.push(Process::new(2, 0, 5));
        let m = RunMetrics::calculate(&table, ArrivalBasis::Stated);
        assert_eq!(m.process_count(), 1);
        assert!(m.for_process(2).is_none());
    }

    #[test]
    fn test_from_trace_matches_table() {
        let table = completed_table(&[(0, 4, 6), (1, 2, 3)]);
        let mut trace = GanttTrace::new();
        trace.push(GanttSegment::new(1, 0, 1));
        trace.push(GanttSegment::new(2, 1, 3));
        trace.push(GanttSegment::new(1, 3, 6));

        let direct = RunMetrics::calculate(&table, ArrivalBasis::Stated);
        let replayed = RunMetrics::from_trace(&trace, &table, ArrivalBasis::Stated);
        assert_eq!(direct, replayed);
    }

    #[test]
    fn test_metrics_empty() {
        let m = RunMetrics::calculate(&ProcessTable::new(), ArrivalBasis::Stated);
        assert_eq!(m.process_count(), 0);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
        assert_eq!(m.makespan, 0);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_round2() {
        assert!((round2(6.333_333) - 6.33).abs() < 1e-10);
        assert!((round2(16.666_667) - 16.67).abs() < 1e-10);
        assert!((round2(2.0) - 2.0).abs() < 1e-10);
    }
}
