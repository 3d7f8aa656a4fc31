//! Plain-text rendering of runs.
//!
//! The Gantt chart is two lines: process cells, then the start time of
//! each cell left-aligned beneath it, closed by the final end time:
//!
//! ```text
//! | P1 | P2 | P3 | P1 | P2 | P3 |
//! 0    4    8    12   14   18   21
//! ```
//!
//! Idle stretches (Round-Robin clock jumps) get an `idle` cell so the
//! markers stay aligned with the timeline.

use crate::models::GanttTrace;
use crate::scheduler::{RunMetrics, RunOutcome};

/// Renders the Gantt chart of a trace. Empty traces render as an empty string.
pub fn render_gantt(trace: &GanttTrace) -> String {
    let mut cells: Vec<(String, i64)> = Vec::with_capacity(trace.len());
    let mut last_end: Option<i64> = None;
    for segment in trace {
        if let Some(end) = last_end {
            if segment.start_time > end {
                cells.push(("idle".to_string(), end));
            }
        }
        cells.push((segment.label(), segment.start_time));
        last_end = Some(segment.end_time);
    }
    let Some(final_end) = last_end else {
        return String::new();
    };

    let mut bar = String::new();
    let mut marks = String::new();
    for (label, start) in &cells {
        let start = start.to_string();
        // A cell is "| <label> "; widen the label so the marker below fits.
        let inner = label.len().max(start.len().saturating_sub(2));
        let cell = format!("| {label:<inner$} ");
        marks.push_str(&format!("{start:<width$}", width = cell.len()));
        bar.push_str(&cell);
    }
    bar.push('|');
    marks.push_str(&final_end.to_string());

    format!("{bar}\n{marks}")
}

/// Renders the per-process metrics table followed by the averages.
///
/// `AT` is the arrival time from the input table. `WT` and `TAT` are measured
/// from the policy's arrival basis, so under SJF they count from t=0 even
/// when `AT` is later. Averages use [`RunMetrics::avg_waiting_rounded`], so
/// ties round the same way as the numeric accessors.
pub fn render_metrics(metrics: &RunMetrics) -> String {
    let mut out = format!(
        "{:<8}{:<6}{:<6}{:<6}{:<6}{:<6}\n",
        "Process", "AT", "BT", "CT", "WT", "TAT"
    );
    for m in &metrics.per_process {
        out.push_str(&format!(
            "{:<8}{:<6}{:<6}{:<6}{:<6}{:<6}\n",
            m.label(),
            m.stated_arrival,
            m.burst_time,
            m.completion_time,
            m.waiting_time,
            m.turnaround_time
        ));
    }
    out.push_str(&format!(
        "\nAverage Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}",
        metrics.avg_waiting_rounded(),
        metrics.avg_turnaround_rounded()
    ));
    out
}

/// Renders a whole run: policy name, Gantt chart, metrics table.
pub fn render_run(outcome: &RunOutcome) -> String {
    format!(
        "{} schedule\n\nGantt Chart:\n{}\n\n{}",
        outcome.policy,
        render_gantt(&outcome.trace),
        render_metrics(&outcome.metrics)
    )
}
