use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use crate::models::TierDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub default_key: String,
    pub tiers: Vec<TierEntry>,
}

/// One row of the tier table as written in configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierEntry {
    pub key: String,
    pub internal_name: String,
    pub display_name: String,
    pub price: Decimal,
    pub burn_multiplier: f64,
    pub xp_multiplier: f64,
    pub streak_cap: u32,
    pub badge: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigratorConfig {
    pub default_name: String,
    pub default_color: String,
    pub default_icon: String,
    pub names: Vec<TierNameEntry>,
    pub aliases: Vec<LegacyAlias>,
}

/// A current display name with its optional color token and icon glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierNameEntry {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Legacy tier code still found in stored data, and the name it now displays as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyAlias {
    pub code: String,
    pub name: String,
}

impl TierNameEntry {
    fn new(name: &str, color: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            color: Some(color.to_string()),
            icon: Some(icon.to_string()),
        }
    }
}

impl LegacyAlias {
    fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

impl From<TierEntry> for TierDescriptor {
    fn from(entry: TierEntry) -> Self {
        Self {
            key: entry.key,
            internal_name: entry.internal_name,
            display_name: entry.display_name,
            price: entry.price,
            burn_multiplier: entry.burn_multiplier,
            xp_multiplier: entry.xp_multiplier,
            streak_cap: entry.streak_cap,
            badge: entry.badge,
            visible: entry.visible,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let tiers = vec![
            // Base tier
            TierEntry {
                key: "19".to_string(),
                internal_name: "minted".to_string(),
                display_name: "Minted".to_string(),
                price: Decimal::from(19),
                burn_multiplier: 1.0,
                xp_multiplier: 1.0,
                streak_cap: 7,
                badge: "Minted".to_string(),
                visible: true,
            },
            TierEntry {
                key: "35".to_string(),
                internal_name: "staked".to_string(),
                display_name: "Staked".to_string(),
                price: Decimal::from(35),
                burn_multiplier: 1.5,
                xp_multiplier: 1.25,
                streak_cap: 14,
                badge: "Staked".to_string(),
                visible: true,
            },
            // Premium tier, withheld from the current product phase
            TierEntry {
                key: "49".to_string(),
                internal_name: "elite".to_string(),
                display_name: "Elite".to_string(),
                price: Decimal::from(49),
                burn_multiplier: 2.0,
                xp_multiplier: 1.5,
                streak_cap: 30,
                badge: "Elite".to_string(),
                visible: false,
            },
        ];

        Self {
            default_key: "19".to_string(),
            tiers,
        }
    }
}

impl Default for MigratorConfig {
    fn default() -> Self {
        let names = vec![
            TierNameEntry::new("Minted", "slate", "🪙"),
            TierNameEntry::new("Verified", "sky", "✅"),
            TierNameEntry::new("Staked", "emerald", "💎"),
            TierNameEntry::new("Elite", "amber", "👑"),
        ];

        let aliases = vec![
            LegacyAlias::new("FREE", "Minted"),
            LegacyAlias::new("MINTED", "Minted"),
            LegacyAlias::new("PLAYER", "Verified"),
            LegacyAlias::new("VERIFIED", "Verified"),
            LegacyAlias::new("FOUNDER", "Staked"),
            LegacyAlias::new("STAKED", "Staked"),
            LegacyAlias::new("ELITE", "Elite"),
            LegacyAlias::new("LEGEND", "Elite"),
            // Price-tier codes stored on older payment records
            LegacyAlias::new("19", "Minted"),
            LegacyAlias::new("35", "Staked"),
            LegacyAlias::new("49", "Elite"),
        ];

        Self {
            default_name: "Minted".to_string(),
            default_color: "slate".to_string(),
            default_icon: "🏅".to_string(),
            names,
            aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_registry_has_one_hidden_tier() {
        let config = RegistryConfig::default();
        let hidden: Vec<_> = config.tiers.iter().filter(|t| !t.visible).collect();

        assert_eq!(config.tiers.len(), 3);
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].internal_name, "elite");
    }

    #[test]
    fn test_reference_aliases_target_current_names() {
        let config = MigratorConfig::default();

        for alias in &config.aliases {
            assert!(
                config.names.iter().any(|n| n.name == alias.name),
                "alias {} targets {}",
                alias.code,
                alias.name
            );
        }
    }
}
