//! Process and process table models.
//!
//! A process is the unit of work handed to a scheduling policy. Its static
//! inputs (arrival and burst time) never change once the table is built;
//! the simulation state (remaining time, completion time) is owned by
//! whichever scheduler is currently running the table.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single simulated CPU.
///
/// # Time Representation
/// All times are integral time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (1-based by convention).
    pub id: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// CPU time still owed. Starts at `burst_time`, only ever decreases.
    pub(crate) remaining_time: i64,
    /// Set exactly once, when `remaining_time` first reaches zero.
    pub(crate) completion_time: Option<i64>,
}

impl Process {
    /// Creates a new, not-yet-started process.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            completion_time: None,
        }
    }

    /// Display label used in traces and reports (`P1`, `P2`, ...).
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }

    /// CPU time still owed to this process.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Completion time, once the process has finished.
    #[inline]
    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process has never been dispatched.
    #[inline]
    pub fn is_untouched(&self) -> bool {
        self.remaining_time == self.burst_time
    }

    /// Completion time minus arrival time. `None` until completion.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround time minus burst time. `None` until completion.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Runs the process for up to `slice` time units.
    ///
    /// Returns the time actually consumed: `min(slice, remaining_time)`.
    pub(crate) fn consume(&mut self, slice: i64) -> i64 {
        let ran = slice.min(self.remaining_time);
        self.remaining_time -= ran;
        ran
    }

    /// Records completion at `now`. Later calls are ignored.
    pub(crate) fn complete_at(&mut self, now: i64) {
        if self.completion_time.is_none() {
            self.completion_time = Some(now);
        }
    }

    /// Restores the initial simulation state.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
    }
}

/// An ordered collection of processes.
///
/// Insertion order is significant: it is the "process index" used by every
/// tie-break rule. Cloning a table yields an independent deep copy, which is
/// how separate runs avoid sharing simulation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(arrival_time, burst_time)` pairs.
    ///
    /// Ids are assigned 1..=n in input order.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        let processes = pairs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| Process::new(i as u32 + 1, arrival, burst))
            .collect();
        Self { processes }
    }

    /// Builds a table from burst times alone, every arrival at t=0.
    pub fn from_bursts(bursts: &[i64]) -> Self {
        let pairs: Vec<(i64, i64)> = bursts.iter().map(|&b| (0, b)).collect();
        Self::from_pairs(&pairs)
    }

    /// Appends a process.
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Adds a process with the given attributes.
    pub fn with_process(mut self, id: u32, arrival_time: i64, burst_time: i64) -> Self {
        self.push(Process::new(id, arrival_time, burst_time));
        self
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at the given index.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Mutable access for the running scheduler. Panics on a bad index.
    pub(crate) fn process_mut(&mut self, index: usize) -> &mut Process {
        &mut self.processes[index]
    }

    /// Finds a process by id.
    pub fn find(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// All processes in table order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates over processes in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Whether every process has a completion time.
    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    /// Earliest arrival time, or `None` for an empty table.
    pub fn earliest_arrival(&self) -> Option<i64> {
        self.processes.iter().map(|p| p.arrival_time).min()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Restores every process to its initial simulation state.
    pub fn reset(&mut self) {
        self.processes.iter_mut().for_each(Process::reset);
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

impl FromIterator<Process> for ProcessTable {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self {
            processes: iter.into_iter().collect(),
        }
    }
}
