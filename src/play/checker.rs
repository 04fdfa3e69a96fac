//! Submit-time solution checking.

use tracing::{debug, info};
use crate::ternary::Trit;
use crate::ast::{AstTemplate, SolveError};
use crate::config::CheckerConfig;

/// Result of a submitted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// `errors` is the running count of wrong answers; `nth` is set on
    /// every n-th one.
    Incorrect { result: Trit, errors: u32, nth: bool },
    /// Some slot is still empty. Not counted as a wrong answer.
    Incomplete(SolveError),
}

/// Checks attempts and counts wrong answers.
#[derive(Debug, Clone, Default)]
pub struct SolutionChecker {
    config: CheckerConfig,
    errors: u32,
}

impl SolutionChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config, errors: 0 }
    }

    /// Evaluate the template against its answer.
    ///
    /// Structural errors are returned as `Err`; an incomplete tree is a
    /// verdict of its own.
    pub fn submit(&mut self, template: &AstTemplate) -> Result<Verdict, SolveError> {
        let result = match template.solve() {
            Ok(result) => result,
            Err(err) if err.is_incomplete() => {
                debug!(%err, "attempt incomplete");
                return Ok(Verdict::Incomplete(err));
            }
            Err(err) => return Err(err),
        };

        if result == template.answer() {
            info!(%result, "solution correct");
            return Ok(Verdict::Correct);
        }

        self.errors += 1;
        let nth = self.config.nth_error_trigger != 0
            && self.errors % self.config.nth_error_trigger == 0;
        info!(%result, answer = %template.answer(), errors = self.errors, nth, "solution incorrect");
        Ok(Verdict::Incorrect { result, errors: self.errors, nth })
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn reset(&mut self) {
        self.errors = 0;
        debug!("error count reset");
    }
}

/// Live readout of the tree's value, `None` while incomplete or broken.
pub fn current_result(template: &AstTemplate) -> Option<Trit> {
    template.solve().ok()
}
