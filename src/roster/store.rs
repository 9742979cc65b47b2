// src/roster/store.rs

use crate::errors::{Result, RunnersError};
use crate::roster::runner::Runner;

/// Ordered, owning sequence of runners.
///
/// Insertion order is preserved and bib numbers are not required to be
/// unique. Removal always hits the first runner with a matching bib.
#[derive(Debug, Default)]
pub struct Roster {
    runners: Vec<Runner>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Runner> + '_ {
        self.runners.iter()
    }

    /// Append at the tail. Fails with `ResourceExhausted` (roster untouched)
    /// if storage for one more runner cannot be obtained.
    pub fn push(&mut self, runner: Runner) -> Result<&Runner> {
        self.runners
            .try_reserve(1)
            .map_err(|_| RunnersError::ResourceExhausted)?;
        self.runners.push(runner);
        let last = self.runners.len() - 1;
        Ok(&self.runners[last])
    }

    /// Unlink and return the first runner whose bib matches.
    pub fn remove_first(&mut self, bib_number: i32) -> Option<Runner> {
        let index = self
            .runners
            .iter()
            .position(|r| r.bib_number == bib_number)?;
        Some(self.runners.remove(index))
    }

    /// Release every runner, returning how many there were.
    pub fn drain(&mut self) -> usize {
        let count = self.runners.len();
        self.runners.clear();
        self.runners.shrink_to_fit();
        count
    }
}
