//! Post-step separator.
//!
//! Each tour step prints one or more engine-rendered tables, so consecutive
//! steps need a visual delimiter. `StepRunner` wraps a step, discards its
//! value, and prints a fixed-width rule after it.
//!
//! The rule is printed only when the step succeeds: a failed step propagates
//! its error untouched and leaves no marker, so a trailing rule always means
//! the step above it ran to completion.

use std::io::{self, Write};

use crate::error::Result;

/// Width of the rule printed after each completed step.
pub const RULE_WIDTH: usize = 64;

/// Runs steps and prints a rule on the owned output stream after each one.
///
/// Holds no state beyond the output handle, so independent runners can be
/// used from independent threads.
pub struct StepRunner<W: Write> {
    out: W,
}

impl StepRunner<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StepRunner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Invoke `step`, discard its value, and print the rule.
    ///
    /// Arguments to the step are closure captures, so the wrapped form
    /// accepts exactly what the step itself accepts.
    pub fn run<T>(&mut self, step: impl FnOnce() -> Result<T>) -> Result<()> {
        let _ = step()?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
