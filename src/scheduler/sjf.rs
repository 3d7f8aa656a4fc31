//! Non-preemptive Shortest-Job-First scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by ascending burst time (stable: table order on ties).
//! 2. Run them back-to-back from t=0, one segment per process.
//!
//! Arrival times are not consulted: every process is treated as available
//! at t=0, and metrics are measured from t=0 accordingly
//! ([`ArrivalBasis::Origin`]). An arrival-aware SJF is a different policy.
//!
//! # Complexity
//! O(n log n)
//!
//! # Reference
//! Smith (1956), SPT ordering minimizes mean flow time on a single machine.

use super::{ArrivalBasis, RunMetrics, RunOutcome, SchedulingPolicy};
use crate::models::{GanttSegment, GanttTrace, ProcessTable, SimulationClock};
use crate::validation::{validate_processes, InvalidInputError};

/// Arrival-oblivious, non-preemptive SJF scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessTable;
/// use cpu_schedule::scheduler::{SchedulingPolicy, SjfScheduler};
///
/// let table = ProcessTable::from_bursts(&[6, 8, 7]);
/// let outcome = SjfScheduler::new().simulate(&table).unwrap();
///
/// let order: Vec<u32> = outcome.trace.segments().iter().map(|s| s.process_id).collect();
/// assert_eq!(order, vec![1, 3, 2]);
/// assert_eq!(outcome.metrics.avg_waiting_rounded(), 6.33);
/// assert_eq!(outcome.metrics.avg_turnaround_rounded(), 13.33);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingPolicy for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn arrival_basis(&self) -> ArrivalBasis {
        ArrivalBasis::Origin
    }

    fn run(&self, table: &mut ProcessTable) -> Result<RunOutcome, InvalidInputError> {
        if let Err(errors) = validate_processes(table.processes()) {
            log::warn!("[SJF] rejected input: {} problem(s)", errors.len());
            return Err(errors.into());
        }
        table.reset();

        let mut order: Vec<usize> = (0..table.len()).collect();
        order.sort_by_key(|&i| table.processes()[i].burst_time);

        let mut clock = SimulationClock::start_at(0);
        let mut trace = GanttTrace::new();

        for idx in order {
            let process = table.process_mut(idx);
            let start = clock.now();
            let burst = process.burst_time;
            clock.advance_by(process.consume(burst));
            process.complete_at(clock.now());
            trace.push(GanttSegment::new(process.id, start, clock.now()));
            log::debug!("[SJF] {} ran [{}, {})", process.label(), start, clock.now());
        }

        let metrics = RunMetrics::calculate(table, self.arrival_basis());
        log::debug!("[SJF] done: makespan {}", trace.makespan());

        Ok(RunOutcome {
            policy: self.name().to_string(),
            trace,
            metrics,
            processes: table.clone(),
        })
    }
}
