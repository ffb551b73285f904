use std::time::{Duration, Instant};

/// Decides when a retry loop should give up.
pub trait TerminationCondition {
    /// Returns true once the loop should stop. Called before every attempt.
    fn evaluate(&mut self) -> bool;
}

/// Terminates after a fixed number of attempts.
pub struct MaxAttemptsTermination {
    max_attempts: usize,
    attempts: usize,
}

impl MaxAttemptsTermination {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            attempts: 0,
        }
    }

    /// Number of attempts allowed so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl TerminationCondition for MaxAttemptsTermination {
    fn evaluate(&mut self) -> bool {
        if self.attempts >= self.max_attempts {
            return true;
        }
        self.attempts += 1;
        false
    }
}

/// Terminates once a wall-clock budget is spent.
///
/// The clock starts on the first evaluation.
pub struct MaxTimeTermination {
    max_duration: Duration,
    start: Option<Instant>,
}

impl MaxTimeTermination {
    pub fn new(max_duration: Duration) -> Self {
        Self {
            max_duration,
            start: None,
        }
    }
}

impl TerminationCondition for MaxTimeTermination {
    fn evaluate(&mut self) -> bool {
        let start = *self.start.get_or_insert_with(Instant::now);
        start.elapsed() >= self.max_duration
    }
}
