//! Injectable stage timing.
//!
//! The pipeline reports how long each stage took to a [`StageTimer`]. The core
//! types never time themselves; callers choose where timings go.

use std::cell::RefCell;
use std::fmt;
use std::time::{Duration, Instant};

/// Pipeline stages that are timed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    /// Reading the edge list and building both graph representations.
    Load,
    /// Running the community oracle.
    Partition,
    /// Building the community-ordered adjacency.
    Reorder,
    /// Writing the reordered edge list.
    Save,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "Load",
            Stage::Partition => "Partition",
            Stage::Reorder => "Reorder",
            Stage::Save => "Save",
        };
        f.write_str(name)
    }
}

/// Receives the wall time of each finished stage.
pub trait StageTimer {
    fn stage_finished(&self, stage: Stage, elapsed: Duration);
}

/// Logs each stage at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTimer;

impl StageTimer for LogTimer {
    fn stage_finished(&self, stage: Stage, elapsed: Duration) {
        log::info!("{stage} done in {:.6} sec.", elapsed.as_secs_f64());
    }
}

/// Discards timings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTimer;

impl StageTimer for NoopTimer {
    fn stage_finished(&self, _stage: Stage, _elapsed: Duration) {}
}

/// Keeps every timing for later inspection.
#[derive(Debug, Default)]
pub struct RecordingTimer {
    records: RefCell<Vec<(Stage, Duration)>>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage, elapsed)` pairs in completion order.
    pub fn records(&self) -> Vec<(Stage, Duration)> {
        self.records.borrow().clone()
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.records.borrow().iter().map(|&(s, _)| s).collect()
    }

    /// Sum of all recorded durations.
    pub fn total(&self) -> Duration {
        self.records.borrow().iter().map(|&(_, d)| d).sum()
    }
}

impl StageTimer for RecordingTimer {
    fn stage_finished(&self, stage: Stage, elapsed: Duration) {
        self.records.borrow_mut().push((stage, elapsed));
    }
}

impl<T: StageTimer + ?Sized> StageTimer for &T {
    fn stage_finished(&self, stage: Stage, elapsed: Duration) {
        (**self).stage_finished(stage, elapsed)
    }
}

/// Run `f`, then report its wall time for `stage` to `timer`.
///
/// The time is reported whether `f` succeeds or not.
pub fn timed<T, R, F>(timer: &T, stage: Stage, f: F) -> R
where
    T: StageTimer + ?Sized,
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let out = f();
    timer.stage_finished(stage, start.elapsed());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_reports_stage_and_returns_value() {
        let timer = RecordingTimer::new();
        let v = timed(&timer, Stage::Reorder, || 41 + 1);
        assert_eq!(v, 42);
        assert_eq!(timer.stages(), vec![Stage::Reorder]);
    }

    #[test]
    fn timed_reports_failures_too() {
        let timer = RecordingTimer::new();
        let r: Result<(), &str> = timed(&timer, Stage::Load, || Err("boom"));
        assert!(r.is_err());
        assert_eq!(timer.stages(), vec![Stage::Load]);
    }

    #[test]
    fn reference_forwards() {
        fn report<T: StageTimer>(timer: T) {
            timer.stage_finished(Stage::Save, Duration::from_millis(3));
        }
        let timer = RecordingTimer::new();
        report(&timer);
        assert_eq!(timer.total(), Duration::from_millis(3));
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Partition.to_string(), "Partition");
        NoopTimer.stage_finished(Stage::Save, Duration::ZERO);
    }
}
