//! Policy selection and simulation requests.

use serde::{Deserialize, Serialize};

use super::{RoundRobinScheduler, RunOutcome, SchedulingPolicy, SjfScheduler};
use crate::models::ProcessTable;
use crate::validation::InvalidInputError;

/// A selectable scheduling policy.
///
/// Serialized with an internal `policy` tag, e.g.
/// `{"policy":"round_robin","quantum":4}` or `{"policy":"sjf"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// Preemptive Round-Robin with the given time quantum.
    RoundRobin {
        /// Maximum contiguous slice per dispatch.
        quantum: i64,
    },
    /// Arrival-oblivious, non-preemptive Shortest-Job-First.
    Sjf,
}

impl Policy {
    /// Short policy name (`RR`, `SJF`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin { quantum } => RoundRobinScheduler::new(*quantum).name(),
            Self::Sjf => SjfScheduler::new().name(),
        }
    }

    /// Runs this policy on `table` in place.
    pub fn run(&self, table: &mut ProcessTable) -> Result<RunOutcome, InvalidInputError> {
        match self {
            Self::RoundRobin { quantum } => RoundRobinScheduler::new(*quantum).run(table),
            Self::Sjf => SjfScheduler::new().run(table),
        }
    }

    /// Runs this policy on a private copy of `table`.
    pub fn simulate(&self, table: &ProcessTable) -> Result<RunOutcome, InvalidInputError> {
        let mut copy = table.clone();
        self.run(&mut copy)
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: ProcessTable,
    /// Policy to apply.
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: ProcessTable, policy: Policy) -> Self {
        Self { processes, policy }
    }

    /// Creates a Round-Robin request from `(arrival, burst)` pairs.
    pub fn round_robin(pairs: &[(i64, i64)], quantum: i64) -> Self {
        Self::new(ProcessTable::from_pairs(pairs), Policy::RoundRobin { quantum })
    }

    /// Creates an SJF request from burst times.
    pub fn sjf(bursts: &[i64]) -> Self {
        Self::new(ProcessTable::from_bursts(bursts), Policy::Sjf)
    }

    /// Replaces the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the request. The request itself is left untouched.
    pub fn run(&self) -> Result<RunOutcome, InvalidInputError> {
        self.policy.simulate(&self.processes)
    }
}

/// Runs each policy on its own copy of `table`.
///
/// Results are returned in the same order as `policies`.
pub fn compare(
    table: &ProcessTable,
    policies: &[Policy],
) -> Vec<Result<RunOutcome, InvalidInputError>> {
    policies.iter().map(|p| p.simulate(table)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::RoundRobin { quantum: 2 }.name(), "RR");
        assert_eq!(Policy::Sjf.name(), "SJF");
    }

    #[test]
    fn test_simulate_leaves_input_untouched() {
        let table = ProcessTable::from_pairs(&[(0, 6), (1, 8), (2, 7)]);
        let before = table.clone();
        let outcome = Policy::RoundRobin { quantum: 4 }.simulate(&table).unwrap();
        assert_eq!(table, before);
        assert!(outcome.processes.all_completed());
    }

    #[test]
    fn test_run_mutates_in_place() {
        let mut table = ProcessTable::from_bursts(&[2, 1]);
        Policy::Sjf.run(&mut table).unwrap();
        assert!(table.all_completed());
        assert_eq!(table.find(1).unwrap().completion_time(), Some(3));
    }

    #[test]
    fn test_request_builders() {
        let rr = SimulationRequest::round_robin(&[(0, 6), (1, 8), (2, 7)], 4);
        assert_eq!(rr.policy, Policy::RoundRobin { quantum: 4 });
        assert_eq!(rr.run().unwrap().trace.makespan(), 21);

        let sjf = SimulationRequest::sjf(&[6, 8, 7]);
        let outcome = sjf.run().unwrap();
        assert_eq!(outcome.policy, "SJF");

        let switched = sjf.with_policy(Policy::RoundRobin { quantum: 100 });
        assert_eq!(switched.run().unwrap().policy, "RR");
    }

    #[test]
    fn test_compare_runs_independent_copies() {
        let table = ProcessTable::from_pairs(&[(0, 6), (1, 8), (2, 7)]);
        let results = compare(
            &table,
            &[
                Policy::RoundRobin { quantum: 4 },
                Policy::Sjf,
                Policy::RoundRobin { quantum: 0 },
            ],
        );
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().policy, "RR");
        assert_eq!(results[1].as_ref().unwrap().policy, "SJF");
        assert!(results[2].is_err());
        assert!(!table.all_completed());
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 4 }).unwrap();
        assert_eq!(json, r#"{"policy":"round_robin","quantum":4}"#);
        let sjf: Policy = serde_json::from_str(r#"{"policy":"sjf"}"#).unwrap();
        assert_eq!(sjf, Policy::Sjf);
    }

    #[test]
    fn test_request_serde_roundtrip() {
        let request = SimulationRequest::round_robin(&[(0, 3), (2, 5)], 2);
        let json = serde_json::to_string(&request).unwrap();
        let back: SimulationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.run().unwrap(), request.run().unwrap());
    }
}
