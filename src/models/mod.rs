//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the
//! process table (inputs + simulation state), the simulation clock, and
//! the Gantt trace (output).
//!
//! # Lifecycle
//!
//! | Type | Built by | Mutated by | Lifetime |
//! |------|----------|------------|----------|
//! | ProcessTable | Caller | Active scheduler (remaining/completion only) | One run per copy |
//! | SimulationClock | Scheduler | Scheduler (forward only) | One run |
//! | GanttTrace | Scheduler | Append-only | Returned to caller |

mod clock;
mod process;
mod trace;

pub use clock::SimulationClock;
pub use process::{Process, ProcessTable};
pub use trace::{GanttSegment, GanttTrace, IdleGap};
