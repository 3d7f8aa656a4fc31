//! Scheduling policy engines and run metrics.
//!
//! Two independent engines share the process/trace/metrics data model:
//!
//! - `RoundRobinScheduler`: preemptive, quantum-sliced, FIFO ready queue
//!   with arrival-aware admission.
//! - `SjfScheduler`: non-preemptive, ordered purely by burst time.
//!
//! Both validate their input before touching any simulation state and
//! report metrics through `RunMetrics`.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::ProcessTable;
//! use cpu_schedule::scheduler::{compare, Policy};
//!
//! let table = ProcessTable::from_pairs(&[(0, 6), (1, 8), (2, 7)]);
//! let results = compare(&table, &[Policy::RoundRobin { quantum: 4 }, Policy::Sjf]);
//! assert!(results.iter().all(|r| r.is_ok()));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod metrics;
mod policy;
mod ready_queue;
mod round_robin;
mod sjf;

pub use metrics::{ArrivalBasis, ProcessMetrics, RunMetrics};
pub use policy::{compare, Policy, SimulationRequest};
pub use ready_queue::ReadyQueue;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

use serde::{Deserialize, Serialize};

use crate::models::{GanttTrace, ProcessTable};
use crate::validation::InvalidInputError;

/// Everything a completed run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Name of the policy that produced this run.
    pub policy: String,
    /// Execution segments, in order.
    pub trace: GanttTrace,
    /// Per-process and aggregate metrics.
    pub metrics: RunMetrics,
    /// Final state of the process table.
    pub processes: ProcessTable,
}

/// A CPU scheduling policy.
///
/// A run validates its input first and fails with [`InvalidInputError`]
/// without mutating anything; otherwise it always runs to completion.
pub trait SchedulingPolicy {
    /// Policy name (e.g., "RR", "SJF").
    fn name(&self) -> &'static str;

    /// Which arrival times the policy's metrics are measured from.
    fn arrival_basis(&self) -> ArrivalBasis {
        ArrivalBasis::Stated
    }

    /// Runs the policy, taking ownership of the table's simulation state.
    fn run(&self, table: &mut ProcessTable) -> Result<RunOutcome, InvalidInputError>;

    /// Runs the policy on a deep copy of `table`.
    fn simulate(&self, table: &ProcessTable) -> Result<RunOutcome, InvalidInputError> {
        let mut copy = table.clone();
        self.run(&mut copy)
    }
}
