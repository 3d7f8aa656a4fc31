//! Input validation for scheduling runs.
//!
//! Checks the process table and policy parameters before any simulation
//! state is created. Detects:
//! - Empty process lists
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//! - Non-positive time quanta
//! - Schedules whose end time would not fit in an `i64`
//!
//! Every check runs; all problems are reported together.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// The Round-Robin quantum is `<= 0`.
    NonPositiveQuantum,
    /// Two processes share the same ID.
    DuplicateId,
    /// Latest arrival plus total burst time exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Rejected input: the only failure a scheduler run can produce.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidInputError {
    /// Every problem found in the input.
    pub errors: Vec<ValidationError>,
}

impl InvalidInputError {
    /// Whether any of the collected errors has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for InvalidInputError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input")?;
        for (i, e) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidInputError {}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every `arrival_time >= 0`
/// 4. Every `burst_time > 0`
/// 5. `max(arrival_time) + sum(burst_time)` fits in an `i64`, so no
///    simulation clock can overflow
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.label(),
                    p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.label(),
                    p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock reading: latest arrival plus total burst.
///
/// `None` if the sum does not fit in an `i64`.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates a process list and a quantum together, merging all errors.
pub fn validate_round_robin(processes: &[Process], quantum: i64) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Err(mut quantum_errors) = validate_quantum(quantum) {
        errors.append(&mut quantum_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
