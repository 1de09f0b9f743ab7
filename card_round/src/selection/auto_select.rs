//! Fallback pick when the decision window runs out.

use super::errors::{SelectionError, SelectionResult};
use rand::{Rng, seq::IndexedRandom};

/// Chooses one live slot at random when the session timer expires.
///
/// Fires at most once per hand; [`AutoSelector::rearm`] on the next deal.
#[derive(Clone, Debug)]
pub struct AutoSelector {
    enabled: bool,
}

impl Default for AutoSelector {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AutoSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick uniformly among `live` positions and disable until re-armed.
    ///
    /// # Errors
    ///
    /// * `SelectionError::Disabled` - already fired for this hand
    /// * `SelectionError::NoCandidates` - `live` is empty
    pub fn pick<R>(&mut self, live: &[usize], rng: &mut R) -> SelectionResult<usize>
    where
        R: Rng + ?Sized,
    {
        if !self.enabled {
            return Err(SelectionError::Disabled);
        }

        let position = *live.choose(rng).ok_or(SelectionError::NoCandidates)?;
        self.enabled = false;

        log::info!(
            "Auto-selecting slot {} ({} live candidates)",
            position,
            live.len()
        );

        Ok(position)
    }

    pub fn rearm(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
