//! Seeded random workload generation.
//!
//! Produces process tables for benchmarking policies against each other
//! and for exercising the schedulers over many inputs. The same config
//! (including the seed) always yields the same table.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessTable};

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst time (clamped to at least 1).
    pub min_burst: i64,
    /// Largest burst time.
    pub max_burst: i64,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Creates a config for `process_count` processes with default ranges.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst time range (inclusive).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Generates a process table from `config`.
///
/// Ids are 1..=n; every arrival is non-negative and every burst positive,
/// so the result always passes validation when `process_count > 0`.
pub fn generate(config: &WorkloadConfig) -> ProcessTable {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);

    (0..config.process_count)
        .map(|i| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            Process::new(i as u32 + 1, arrival, burst)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generate_respects_ranges() {
        let config = WorkloadConfig::new(50)
            .with_max_arrival(20)
            .with_burst_range(2, 9)
            .with_seed(7);
        let table = generate(&config);

        assert_eq!(table.len(), 50);
        for (i, p) in table.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((0..=20).contains(&p.arrival_time));
            assert!((2..=9).contains(&p.burst_time));
        }
        assert!(validate_processes(table.processes()).is_ok());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = WorkloadConfig::new(20).with_seed(42);
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_degenerate_ranges_clamped() {
        let config = WorkloadConfig::new(3)
            .with_max_arrival(-5)
            .with_burst_range(0, -1);
        let table = generate(&config);
        assert!(table.iter().all(|p| p.arrival_time == 0 && p.burst_time == 1));
    }

    #[test]
    fn test_empty_workload() {
        assert!(generate(&WorkloadConfig::new(0)).is_empty());
    }
}
