//! The contract every annotation source implements.

use thiserror::Error;

use super::record::Tooltip;

/// Failure a provider can signal from [`TooltipProvider::generate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// `generate` was called without a preceding matching `has_tooltip`
    /// for the same entity in the same frame.
    #[error("generate called without a matching has_tooltip probe")]
    OutOfPhase,
}

/// A pluggable tooltip source for one entity category.
///
/// ## Two-phase contract
///
/// For each entity, [`has_tooltip`](Self::has_tooltip) is called at most
/// once per frame, and [`generate`](Self::generate) is only called
/// immediately after a `has_tooltip` call returned true for the *same*
/// entity, with no other entity interleaved for this provider. `generate`
/// may therefore rely on state the matching `has_tooltip` call cached
/// (see [`MatchCache`]), which saves recomputing expensive matching logic
/// twice per entity. A provider that detects a violated ordering returns
/// [`ProviderError::OutOfPhase`]; stateless providers may instead tolerate
/// it by recomputing.
///
/// Providers are registered at startup, live for the process lifetime and
/// are only ever invoked from the frame-driving thread.
pub trait TooltipProvider<E>: Send + Sync {
    /// Stable identifier, used for enable/disable lookup and removal
    fn id(&self) -> &str;

    /// Human-readable name for config UI
    fn display_name(&self) -> String {
        self.id().to_string()
    }

    /// Longer description for config UI
    fn description(&self) -> String {
        String::new()
    }

    /// Whether this entity produces an annotation.
    ///
    /// Must have no visible effects beyond the provider-local match cache.
    fn has_tooltip(&mut self, entity: &E) -> bool;

    /// Build the annotation for an entity that matched.
    fn generate(&mut self, entity: &E) -> Result<Tooltip, ProviderError>;
}

/// Provider-local cache carrying a match result from `has_tooltip` to
/// `generate`.
///
/// Owned exclusively by one provider instance; overwritten by the next
/// `has_tooltip` call and never valid across frames. `take` on an empty
/// cache is the out-of-phase contract violation.
#[derive(Debug, Default)]
pub struct MatchCache<T> {
    hit: Option<T>,
}

impl<T> MatchCache<T> {
    /// Record the match result of the current `has_tooltip` call
    pub fn store(&mut self, value: T) {
        self.hit = Some(value);
    }

    /// Drop any cached match (call when `has_tooltip` returns false)
    pub fn clear(&mut self) {
        self.hit = None;
    }

    /// Consume the cached match for the `generate` call
    pub fn take(&mut self) -> Result<T, ProviderError> {
        self.hit.take().ok_or(ProviderError::OutOfPhase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_without_store_is_out_of_phase() {
        let mut cache: MatchCache<u32> = MatchCache::default();
        assert_eq!(cache.take(), Err(ProviderError::OutOfPhase));
    }

    #[test]
    fn test_store_take_round_trip() {
        let mut cache = MatchCache::default();
        cache.store(7u32);
        assert_eq!(cache.take(), Ok(7));
        // drained after take
        assert_eq!(cache.take(), Err(ProviderError::OutOfPhase));
    }

    #[test]
    fn test_store_overwrites_previous_match() {
        let mut cache = MatchCache::default();
        cache.store(1u32);
        cache.store(2u32);
        assert_eq!(cache.take(), Ok(2));
    }

    #[test]
    fn test_clear_drops_cached_match() {
        let mut cache = MatchCache::default();
        cache.store(1u32);
        cache.clear();
        assert_eq!(cache.take(), Err(ProviderError::OutOfPhase));
    }
}
