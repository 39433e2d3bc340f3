//! Frame-driven value interpolation.

/// Current state of a value run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunState {
    /// No frame has been delivered yet
    Idle,
    /// Between the first and the final frame
    Running {
        /// Elapsed fraction of the duration (0.0 - 1.0)
        progress: f64,
    },
    /// The final frame has been rendered
    Done,
}

/// Platform-agnostic interpolator from `start` to `end` over a duration.
///
/// The animator does not schedule anything. The caller hands it the
/// timestamp of every rendering frame via [`advance`](Self::advance) and
/// requests another frame for as long as the run is not done.
///
/// ## Example
///
/// ```rust
/// use page_fx::{RunState, ValueAnimator};
///
/// let mut animator = ValueAnimator::new(0, 500, 2000.0);
/// assert_eq!(animator.state(), RunState::Idle);
///
/// // First frame captures the origin
/// assert_eq!(animator.advance(100.0), Some(0));
///
/// // Halfway through
/// assert_eq!(animator.advance(1100.0), Some(250));
///
/// // Past the end: exactly `end`, then nothing
/// assert_eq!(animator.advance(2500.0), Some(500));
/// assert_eq!(animator.state(), RunState::Done);
/// assert_eq!(animator.advance(2600.0), None);
/// ```
#[derive(Clone, Debug)]
pub struct ValueAnimator {
    start: i64,
    end: i64,
    duration_ms: f64,
    /// Timestamp of the first frame
    origin: Option<f64>,
    state: RunState,
}

impl ValueAnimator {
    /// Create an idle run.
    ///
    /// `end >= start` is expected but not enforced; decreasing ranges
    /// interpolate downwards. A non-positive duration completes on the
    /// first frame.
    pub fn new(start: i64, end: i64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            origin: None,
            state: RunState::Idle,
        }
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Current progress (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        match self.state {
            RunState::Idle => 0.0,
            RunState::Running { progress } => progress,
            RunState::Done => 1.0,
        }
    }

    /// Check if the final frame has been rendered.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == RunState::Done
    }

    /// Advance to the frame at `timestamp` (milliseconds, host clock).
    ///
    /// Returns the value to display, or `None` once the run is done.
    pub fn advance(&mut self, timestamp: f64) -> Option<i64> {
        if self.state == RunState::Done {
            return None;
        }

        let origin = *self.origin.get_or_insert(timestamp);
        // Never step backwards, even if the host clock does
        let progress = self.progress_at(timestamp - origin).max(self.progress());

        if progress >= 1.0 {
            self.state = RunState::Done;
            return Some(self.end);
        }
        self.state = RunState::Running { progress };
        Some(self.value_at(progress))
    }

    /// The value displayed at a given progress.
    ///
    /// Interpolation runs in `f64`, so intermediate values of ranges wider
    /// than 2^53 are approximate; they always stay between `start` and `end`.
    pub fn value_at(&self, progress: f64) -> i64 {
        if progress >= 1.0 {
            return self.end;
        }
        let span = self.end as f64 - self.start as f64;
        let value = (progress * span + self.start as f64).floor() as i64;
        value.clamp(self.start.min(self.end), self.start.max(self.end))
    }

    fn progress_at(&self, elapsed: f64) -> f64 {
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return 1.0;
        }
        let progress = elapsed / self.duration_ms;
        if progress.is_nan() {
            return 1.0;
        }
        progress.clamp(0.0, 1.0)
    }
}
