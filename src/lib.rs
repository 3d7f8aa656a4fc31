//! Single-processor CPU scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time), computes the order
//! and timing in which one CPU executes them under a scheduling policy, and
//! derives per-process and aggregate waiting/turnaround metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessTable`, `SimulationClock`,
//!   `GanttSegment`, `GanttTrace`
//! - **`validation`**: Input checks (empty list, bad burst/arrival, bad quantum,
//!   clock overflow)
//! - **`scheduler`**: Policy engines (`RoundRobinScheduler`, `SjfScheduler`)
//!   and `RunMetrics`
//! - **`report`**: Text rendering of Gantt charts and metrics tables
//! - **`workload`**: Seeded random process tables
//!
//! # Example
//!
//! ```
//! use cpu_schedule::scheduler::SimulationRequest;
//!
//! let request = SimulationRequest::round_robin(&[(0, 6), (1, 8), (2, 7)], 4);
//! let outcome = request.run().unwrap();
//! assert_eq!(outcome.trace.len(), 6);
//! assert_eq!(outcome.metrics.avg_turnaround_rounded(), 16.67);
//! ```
//!
//! The crate performs no I/O: collecting input and printing output is the
//! caller's job. Diagnostics go through the `log` facade.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
