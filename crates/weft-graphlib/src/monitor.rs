//! Cooperative progress reporting and cancellation.
//!
//! Long loops report through a [`LoopReporter`], which consults the caller's [`Monitor`] every
//! `interval` iterations. A monitor that answers `false` turns into [`Error::Cancelled`], and
//! the caller is expected to discard anything built before the abort.

use crate::error::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_INTERVAL: usize = 1024;

pub trait Monitor {
    /// Returns whether the computation should keep going.
    fn keep_going(&mut self, stage: &'static str, done: usize, total: usize) -> bool;
}

/// A monitor that never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmonitored;

impl Monitor for Unmonitored {
    fn keep_going(&mut self, _stage: &'static str, _done: usize, _total: usize) -> bool {
        true
    }
}

impl<F> Monitor for F
where
    F: FnMut(&'static str, usize, usize) -> bool,
{
    fn keep_going(&mut self, stage: &'static str, done: usize, total: usize) -> bool {
        self(stage, done, total)
    }
}

/// Shared cancellation flag, typically flipped from another thread while a layout runs on a
/// background worker.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Monitor for CancelFlag {
    fn keep_going(&mut self, _stage: &'static str, _done: usize, _total: usize) -> bool {
        !self.is_cancelled()
    }
}

pub struct Progress<'m> {
    monitor: &'m mut dyn Monitor,
    interval: usize,
}

impl<'m> Progress<'m> {
    pub fn new(monitor: &'m mut dyn Monitor) -> Self {
        Self {
            monitor,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval.max(1);
        self
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    pub fn reporter<'p>(&'p mut self, stage: &'static str, total: usize) -> LoopReporter<'p, 'm> {
        LoopReporter {
            progress: self,
            stage,
            total,
            done: 0,
        }
    }

    /// Consults the monitor immediately, outside of any loop.
    pub fn check(&mut self, stage: &'static str) -> Result<()> {
        if self.monitor.keep_going(stage, 0, 0) {
            return Ok(());
        }
        tracing::debug!(stage, "cancelled before stage start");
        Err(Error::Cancelled)
    }
}

pub struct LoopReporter<'p, 'm> {
    progress: &'p mut Progress<'m>,
    stage: &'static str,
    total: usize,
    done: usize,
}

impl LoopReporter<'_, '_> {
    /// Counts one iteration, checking the monitor on interval boundaries.
    pub fn tick(&mut self) -> Result<()> {
        self.done += 1;
        if self.done % self.progress.interval == 0 {
            return self.check();
        }
        Ok(())
    }

    pub fn done(&self) -> usize {
        self.done
    }

    pub fn check(&mut self) -> Result<()> {
        if self
            .progress
            .monitor
            .keep_going(self.stage, self.done, self.total)
        {
            return Ok(());
        }
        tracing::debug!(
            stage = self.stage,
            done = self.done,
            total = self.total,
            "cancelled"
        );
        Err(Error::Cancelled)
    }
}
