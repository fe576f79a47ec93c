use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use crate::error::Result;

/// Runs a task on the calling thread at a fixed interval until the task
/// breaks, fails, or the tick limit is reached.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    interval: Duration,
    max_ticks: Option<u64>,
}

impl Schedule {
    pub fn every(interval: Duration) -> Self {
        Schedule {
            interval,
            max_ticks: None,
        }
    }

    pub fn limit(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    /// Returns how many times the task ran.
    pub fn run<F>(&self, mut task: F) -> Result<u64>
    where
        F: FnMut(u64) -> Result<ControlFlow<()>>,
    {
        let mut ticks = 0;
        loop {
            if self.max_ticks.map_or(false, |max| ticks >= max) {
                return Ok(ticks);
            }

            let flow = task(ticks)?;
            ticks += 1;
            if flow.is_break() {
                return Ok(ticks);
            }

            thread::sleep(self.interval);
        }
    }
}
