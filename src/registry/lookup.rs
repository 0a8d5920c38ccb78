use crate::{
    config::RegistryConfig,
    models::{Result, TierDescriptor, TierError, TierId},
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

static GLOBAL_REGISTRY: OnceLock<TierRegistry> = OnceLock::new();

/// Payment tiers in declaration order, with get-or-default lookup by key.
#[derive(Debug, Clone)]
pub struct TierRegistry {
    tiers: Vec<TierDescriptor>,
    index: HashMap<String, usize>,
    default_index: usize,
}

impl TierRegistry {
    pub fn new(tiers: Vec<TierDescriptor>, default_key: &str) -> Result<Self> {
        if tiers.is_empty() {
            return Err(TierError::EmptyRegistry);
        }

        let mut index = HashMap::with_capacity(tiers.len());
        for (position, tier) in tiers.iter().enumerate() {
            Self::validate_tier(tier)?;
            if index.insert(tier.key.clone(), position).is_some() {
                return Err(TierError::DuplicateKey(tier.key.clone()));
            }
        }

        let default_index = *index
            .get(default_key)
            .ok_or_else(|| TierError::UnknownDefaultKey(default_key.to_string()))?;

        Self::check_monotonic(&tiers);

        Ok(Self {
            tiers,
            index,
            default_index,
        })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let tiers = config.tiers.iter().cloned().map(TierDescriptor::from).collect();
        Self::new(tiers, &config.default_key)
    }

    /// The built-in three-tier configuration.
    pub fn reference() -> Self {
        let config = RegistryConfig::default();
        let tiers: Vec<TierDescriptor> = config.tiers.into_iter().map(TierDescriptor::from).collect();
        let index: HashMap<String, usize> = tiers
            .iter()
            .enumerate()
            .map(|(position, tier)| (tier.key.clone(), position))
            .collect();
        let default_index = index.get(&config.default_key).copied().unwrap_or(0);

        Self {
            tiers,
            index,
            default_index,
        }
    }

    /// Process-wide registry. Falls back to the reference configuration
    /// unless `install_global` ran first.
    pub fn global() -> &'static TierRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::reference)
    }

    pub fn install_global(registry: TierRegistry) -> Result<&'static TierRegistry> {
        let tier_count = registry.tiers.len();
        GLOBAL_REGISTRY
            .set(registry)
            .map_err(|_| TierError::AlreadyInstalled("tier registry"))?;

        info!("Installed tier registry with {} tiers", tier_count);
        Ok(Self::global())
    }

    /// Resolve an identifier to its descriptor. Unknown and absent
    /// identifiers resolve to the default tier.
    pub fn resolve_tier<'a>(&self, id: impl Into<TierId<'a>>) -> &TierDescriptor {
        let id = id.into();
        match self.get(&id) {
            Some(tier) => tier,
            None => {
                debug!("No tier for key {}, using default {}", id, self.default_tier().key);
                self.default_tier()
            }
        }
    }

    /// Exact lookup without the default fallback.
    pub fn get(&self, id: &TierId<'_>) -> Option<&TierDescriptor> {
        let key = id.as_key()?;
        self.index.get(key).map(|&position| &self.tiers[position])
    }

    pub fn contains<'a>(&self, id: impl Into<TierId<'a>>) -> bool {
        self.get(&id.into()).is_some()
    }

    pub fn default_tier(&self) -> &TierDescriptor {
        &self.tiers[self.default_index]
    }

    pub fn badge_for<'a>(&self, id: impl Into<TierId<'a>>) -> &str {
        &self.resolve_tier(id).badge
    }

    pub fn burn_multiplier_for<'a>(&self, id: impl Into<TierId<'a>>) -> f64 {
        self.resolve_tier(id).burn_multiplier
    }

    pub fn xp_multiplier_for<'a>(&self, id: impl Into<TierId<'a>>) -> f64 {
        self.resolve_tier(id).xp_multiplier
    }

    pub fn streak_cap_for<'a>(&self, id: impl Into<TierId<'a>>) -> u32 {
        self.resolve_tier(id).streak_cap
    }

    /// Tiers offered in the UI, in declaration order. Hidden tiers stay
    /// resolvable through `resolve_tier`.
    pub fn list_visible_tiers(&self) -> Vec<&TierDescriptor> {
        self.tiers.iter().filter(|t| t.visible).collect()
    }

    pub fn all_tiers(&self) -> &[TierDescriptor] {
        &self.tiers
    }

    fn validate_tier(tier: &TierDescriptor) -> Result<()> {
        // NaN fails both comparisons
        if !(tier.burn_multiplier >= 1.0) {
            return Err(TierError::InvalidMultiplier {
                key: tier.key.clone(),
                field: "burn multiplier",
                value: tier.burn_multiplier,
            });
        }

        if !(tier.xp_multiplier >= 1.0) {
            return Err(TierError::InvalidMultiplier {
                key: tier.key.clone(),
                field: "xp multiplier",
                value: tier.xp_multiplier,
            });
        }

        if tier.streak_cap == 0 {
            return Err(TierError::InvalidStreakCap(tier.key.clone()));
        }

        if tier.price < Decimal::ZERO {
            return Err(TierError::InvalidPrice {
                key: tier.key.clone(),
                price: tier.price.to_string(),
            });
        }

        Ok(())
    }

    fn check_monotonic(tiers: &[TierDescriptor]) {
        let mut by_price: Vec<&TierDescriptor> = tiers.iter().collect();
        by_price.sort_by(|a, b| a.price.cmp(&b.price));

        for pair in by_price.windows(2) {
            let (cheaper, pricier) = (pair[0], pair[1]);
            if pricier.burn_multiplier < cheaper.burn_multiplier
                || pricier.xp_multiplier < cheaper.xp_multiplier
                || pricier.streak_cap < cheaper.streak_cap
            {
                warn!(
                    "Tier {} costs more than {} but grants smaller multipliers or streak cap",
                    pricier.key, cheaper.key
                );
            }
        }
    }
}
