pub mod lookup;

pub use lookup::TierRegistry;

use crate::models::{TierDescriptor, TierId};

// Shorthands over the process-wide registry.

pub fn resolve_tier<'a>(id: impl Into<TierId<'a>>) -> &'static TierDescriptor {
    TierRegistry::global().resolve_tier(id)
}

pub fn badge_for<'a>(id: impl Into<TierId<'a>>) -> &'static str {
    TierRegistry::global().badge_for(id)
}

pub fn burn_multiplier_for<'a>(id: impl Into<TierId<'a>>) -> f64 {
    TierRegistry::global().burn_multiplier_for(id)
}

pub fn xp_multiplier_for<'a>(id: impl Into<TierId<'a>>) -> f64 {
    TierRegistry::global().xp_multiplier_for(id)
}

pub fn streak_cap_for<'a>(id: impl Into<TierId<'a>>) -> u32 {
    TierRegistry::global().streak_cap_for(id)
}

pub fn list_visible_tiers() -> Vec<&'static TierDescriptor> {
    TierRegistry::global().list_visible_tiers()
}
