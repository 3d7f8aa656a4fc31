//! Round-Robin scheduler with arrival-aware admission.
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival; admit every process that
//!    arrives at that instant (table order on ties).
//! 2. Pop the head of the ready queue and run it for
//!    `min(quantum, remaining)` time units, recording one trace segment.
//! 3. Admit every not-yet-admitted process whose arrival is now `<= clock`,
//!    ordered by (arrival, table index).
//! 4. If the process still has work left, re-enqueue it behind the newly
//!    admitted arrivals.
//! 5. If the queue runs dry while processes are still to arrive, jump the
//!    clock to the next arrival and admit everything tied at it.
//!
//! Consecutive slices of the same process are never merged, so quantum
//! boundaries stay visible in the trace.
//!
//! # Complexity
//! O(n log n + S) where S = number of slices = sum(ceil(burst / quantum)).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use super::{ArrivalBasis, ReadyQueue, RunMetrics, RunOutcome, SchedulingPolicy};
use crate::models::{GanttSegment, GanttTrace, ProcessTable, SimulationClock};
use crate::validation::{validate_round_robin, InvalidInputError};

/// Preemptive, quantum-sliced Round-Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessTable;
/// use cpu_schedule::scheduler::{RoundRobinScheduler, SchedulingPolicy};
///
/// let table = ProcessTable::from_pairs(&[(0, 6), (1, 8), (2, 7)]);
/// let outcome = RoundRobinScheduler::new(4).simulate(&table).unwrap();
///
/// let first = outcome.trace.segments()[0];
/// assert_eq!((first.process_id, first.start_time, first.end_time), (1, 0, 4));
/// assert_eq!(outcome.trace.makespan(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time quantum.
    ///
    /// The quantum is validated when a run starts, not here.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, table: &mut ProcessTable) -> Result<RunOutcome, InvalidInputError> {
        if let Err(errors) = validate_round_robin(table.processes(), self.quantum) {
            log::warn!("[RR] rejected input: {} problem(s)", errors.len());
            return Err(errors.into());
        }
        table.reset();

        // Admission order: arrival ascending, table index on ties (stable sort).
        let mut admission: Vec<usize> = (0..table.len()).collect();
        admission.sort_by_key(|&i| table.processes()[i].arrival_time);

        let start = table.processes()[admission[0]].arrival_time;
        let mut clock = SimulationClock::start_at(start);
        let mut ready = ReadyQueue::with_capacity(table.len());
        let mut next_arrival = 0;
        let mut trace = GanttTrace::new();

        log::debug!(
            "[RR] start: {} processes, quantum {}, t={}",
            table.len(),
            self.quantum,
            start
        );
        admit_arrivals(table, &admission, &mut next_arrival, clock.now(), &mut ready);

        loop {
            let Some(idx) = ready.dequeue() else {
                // Queue empty: skip idle time, or stop once everyone has arrived.
                let Some(&upcoming) = admission.get(next_arrival) else {
                    break;
                };
                let skipped = clock.advance_to(table.processes()[upcoming].arrival_time);
                log::debug!("[RR] idle for {} until t={}", skipped, clock.now());
                admit_arrivals(table, &admission, &mut next_arrival, clock.now(), &mut ready);
                continue;
            };

            let process = table.process_mut(idx);
            if process.is_untouched() {
                clock.advance_to(process.arrival_time);
            }
            let slice_start = clock.now();
            let ran = process.consume(self.quantum);
            clock.advance_by(ran);
            trace.push(GanttSegment::new(process.id, slice_start, clock.now()));

            let finished = process.remaining_time() == 0;
            if finished {
                process.complete_at(clock.now());
                log::debug!("[RR] {} finished at t={}", process.label(), clock.now());
            } else {
                log::debug!(
                    "[RR] {} ran [{}, {}), {} left",
                    process.label(),
                    slice_start,
                    clock.now(),
                    process.remaining_time()
                );
            }

            admit_arrivals(table, &admission, &mut next_arrival, clock.now(), &mut ready);
            if !finished {
                ready.enqueue(idx);
            }
        }

        let metrics = RunMetrics::calculate(table, ArrivalBasis::Stated);
        log::debug!(
            "[RR] done: {} segments, makespan {}",
            trace.len(),
            trace.makespan()
        );

        Ok(RunOutcome {
            policy: self.name().to_string(),
            trace,
            metrics,
            processes: table.clone(),
        })
    }
}

/// Enqueues every pending process whose arrival is `<= now`.
///
/// `admission` is the arrival-sorted index list and `next` the cursor of the
/// first process not yet admitted.
fn admit_arrivals(
    table: &ProcessTable,
    admission: &[usize],
    next: &mut usize,
    now: i64,
    ready: &mut ReadyQueue,
) {
    while let Some(&idx) = admission.get(*next) {
        let process = &table.processes()[idx];
        if process.arrival_time > now {
            break;
        }
        if ready.enqueue(idx) {
            log::debug!("[RR] admit {} at t={}", process.label(), now);
        }
        *next += 1;
    }
}
