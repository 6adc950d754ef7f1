//! Outcome of a training run.
use colored::Colorize;

use std::fmt;

use crate::error::{LearnerError, Result};


const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;


/// How a training run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convergence {
    /// The update was small relative to `theta`
    /// for `patience` consecutive committed steps.
    Converged,


    /// The gradient vanished, or the step became too small
    /// to move `theta` at all.
    Stationary,


    /// The iteration budget ran out first.
    /// `theta` still holds the best parameters found.
    BudgetExhausted,
}


impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Converged => "converged",
            Self::Stationary => "stationary point",
            Self::BudgetExhausted => "iteration budget exhausted",
        };
        write!(f, "{status}")
    }
}


/// Summary of one call to
/// [`LinearWeakLearner::train`](crate::LinearWeakLearner::train).
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingReport {
    /// How the run ended.
    pub status: Convergence,
    /// Number of loop iterations, committed or not.
    pub iterations: usize,
    /// Number of committed (strictly improving) steps.
    pub committed_steps: usize,
    /// Weighted error at the final `theta`.
    pub error: f64,
    /// Step size when the run ended.
    pub step_size: f64,
}


impl TrainingReport {
    /// `true` unless the iteration budget ran out.
    #[inline(always)]
    pub fn is_converged(&self) -> bool {
        !matches!(self.status, Convergence::BudgetExhausted)
    }


    /// Turns a bounded, non-converged run into
    /// [`LearnerError::NonConvergence`].
    pub fn ensure_converged(self) -> Result<Self> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(LearnerError::NonConvergence { iterations: self.iterations })
        }
    }
}


impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.status {
            Convergence::Converged => "[FIN]".bold().bright_green(),
            Convergence::Stationary => "[STP]".bold().cyan(),
            Convergence::BudgetExhausted => "[MAX]".bold().bright_red(),
        };
        write!(
            f,
            "{} {}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", self.iterations).red(),
            format!("{:>WIDTH$}", self.committed_steps).magenta(),
            format!("{:>WIDTH$.PREC_WIDTH$e}", self.error).blue(),
            format!("{:>WIDTH$.PREC_WIDTH$e}", self.step_size).yellow(),
        )
    }
}
