/// Build progress observation
use std::io::Write;
use std::sync::Mutex;

/// Passive observer invoked once per processed row during grid building.
///
/// Throttling is the sink's responsibility: the builder reports every row
/// and a sink decides which of those calls surface anything. Implementations
/// are shared across worker threads by the parallel build path, so reports
/// may arrive out of order there. A sink must never fail the build.
pub trait ProgressSink: Sync {
    /// Observe completion of `current` out of `total` work rows
    fn report(&self, current: usize, total: usize);
}

/// Inert sink for tests and embedding without feedback
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _current: usize, _total: usize) {}
}

/// Status-line sink that surfaces one notification per 10% boundary.
///
/// Emits a "`N % done`" line only when the rounded percentage is a multiple
/// of ten and differs from the previous call's percentage, so a large grid
/// produces at most eleven lines per ramp. Write failures are swallowed;
/// reporting never aborts a conversion.
pub struct DecileLogger<W> {
    out: Mutex<W>,
}

impl<W: Write> DecileLogger<W> {
    /// Wrap an output stream
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the wrapped stream
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> ProgressSink for DecileLogger<W> {
    fn report(&self, current: usize, total: usize) {
        if let Some(percentage) = decile_boundary(current, total) {
            if let Ok(mut out) = self.out.lock() {
                let _ = writeln!(out, "{} % done", percentage);
            }
        }
    }
}

/// The percentage to surface when `current / total` has just crossed a
/// fresh 10% boundary, if it has.
pub fn decile_boundary(current: usize, total: usize) -> Option<i64> {
    if total == 0 {
        return None;
    }

    let percentage = (current as f64 / total as f64 * 100.0).round() as i64;
    let previous = ((current as f64 - 1.0) / total as f64 * 100.0).round() as i64;
    (percentage % 10 == 0 && percentage != previous).then_some(percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted_lines(reports: impl IntoIterator<Item = (usize, usize)>) -> Vec<String> {
        let logger = DecileLogger::new(Vec::new());
        for (current, total) in reports {
            logger.report(current, total);
        }
        let output = String::from_utf8(logger.into_inner()).unwrap();
        output.lines().map(str::to_string).collect()
    }

    #[test]
    fn one_notification_per_decile() {
        let lines = emitted_lines((1..=10).map(|i| (i, 10)));
        assert_eq!(lines.len(), 10);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line, &format!("{} % done", (i + 1) * 10));
        }
    }

    #[test]
    fn large_ramps_stay_at_decile_granularity() {
        let lines = emitted_lines((1..=1000).map(|i| (i, 1000)));
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.first().map(String::as_str), Some("10 % done"));
        assert_eq!(lines.last().map(String::as_str), Some("100 % done"));
    }

    #[test]
    fn off_boundary_reports_are_silent() {
        // 0.1%, 43% and 29% are not fresh decile boundaries.
        assert!(emitted_lines([(1, 1000), (3, 7), (2, 7)]).is_empty());
    }

    #[test]
    fn zero_row_ramps_report_nothing() {
        assert!(emitted_lines([(0, 0), (5, 0)]).is_empty());
    }

    #[test]
    fn zero_based_ramps_start_at_zero_percent() {
        let lines = emitted_lines((0..10).map(|i| (i, 10)));
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.first().map(String::as_str), Some("0 % done"));
        assert_eq!(lines.last().map(String::as_str), Some("90 % done"));
    }
}
