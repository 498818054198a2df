//! Step-by-step cooking playback
//!
//! Walks a recipe's steps one at a time. The companion remote drives this
//! through `apply`.

use crate::companion::CompanionMessage;

/// Outcome of advancing playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the step at this index
    Advanced(usize),
    /// Was on the last step; playback is done
    Finished,
    /// No steps to play
    Empty,
}

/// Playback position over a list of steps
#[derive(Debug, Clone)]
pub struct StepPlayback {
    steps: Vec<String>,
    current: usize,
    finished: bool,
}

impl StepPlayback {
    pub fn new(steps: Vec<String>) -> Self {
        Self {
            steps,
            current: 0,
            finished: false,
        }
    }

    /// Move to the next step, or finish when on the last one
    pub fn advance(&mut self) -> Advance {
        if self.steps.is_empty() {
            return Advance::Empty;
        }
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            Advance::Advanced(self.current)
        } else {
            self.finished = true;
            Advance::Finished
        }
    }

    /// React to a command from the companion remote
    pub fn apply(&mut self, message: &CompanionMessage) -> Advance {
        match message {
            CompanionMessage::NextStep => self.advance(),
        }
    }

    /// Text of the current step
    pub fn current_step(&self) -> Option<&str> {
        self.steps.get(self.current).map(String::as_str)
    }

    /// 1-based step number and total, for "Step n of m"
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.steps.is_empty() {
            None
        } else {
            Some((self.current + 1, self.steps.len()))
        }
    }

    /// Fraction of steps reached, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        match self.position() {
            Some((step, total)) => step as f64 / total as f64,
            None => 0.0,
        }
    }

    /// Whether the next advance finishes playback
    pub fn on_last_step(&self) -> bool {
        !self.steps.is_empty() && self.current + 1 == self.steps.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}
