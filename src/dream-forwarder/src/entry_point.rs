//! The capability the forwarder hands control to.

use std::borrow::Cow;

use crate::error::Result;

/// A zero-argument "run the CLI" capability.
///
/// Implementations own their argument handling, configuration and output.
/// The returned value is the exit code the process should report.
pub trait EntryPoint {
    /// Run the entry point to completion.
    fn run(&mut self) -> Result<i32>;

    /// Human-readable name used in diagnostics.
    fn name(&self) -> Cow<'_, str>;
}

/// A function-based entry point.
pub struct FnEntryPoint<F>
where
    F: FnMut() -> Result<i32>,
{
    name: String,
    handler: F,
}

impl<F> FnEntryPoint<F>
where
    F: FnMut() -> Result<i32>,
{
    /// Create a new function-based entry point.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> EntryPoint for FnEntryPoint<F>
where
    F: FnMut() -> Result<i32>,
{
    fn run(&mut self) -> Result<i32> {
        (self.handler)()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}
