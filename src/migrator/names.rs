use crate::{
    config::MigratorConfig,
    models::{Result, TierError, TierId, TierPresentation},
};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::{debug, info};

static GLOBAL_MIGRATOR: OnceLock<TierNameMigrator> = OnceLock::new();

/// Translates legacy tier codes into the names the UI shows today.
#[derive(Debug, Clone)]
pub struct TierNameMigrator {
    names: Vec<String>,
    current: HashSet<String>,
    aliases: HashMap<String, String>,
    colors: HashMap<String, String>,
    icons: HashMap<String, String>,
    default_name: String,
    default_color: String,
    default_icon: String,
}

impl TierNameMigrator {
    pub fn new(config: MigratorConfig) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &config.names {
            if !seen.insert(entry.name.as_str()) {
                return Err(TierError::DuplicateName(entry.name.clone()));
            }
        }

        if !seen.contains(config.default_name.as_str()) {
            return Err(TierError::UnknownDefaultName(config.default_name.clone()));
        }

        let mut codes = HashSet::new();
        for alias in &config.aliases {
            if !codes.insert(alias.code.as_str()) {
                return Err(TierError::DuplicateAlias(alias.code.clone()));
            }
            // An alias into an unknown name would translate twice
            if !seen.contains(alias.name.as_str()) {
                return Err(TierError::UnknownAliasTarget {
                    alias: alias.code.clone(),
                    target: alias.name.clone(),
                });
            }
        }

        Ok(Self::assemble(config))
    }

    pub fn from_config(config: &MigratorConfig) -> Result<Self> {
        Self::new(config.clone())
    }

    /// The built-in naming scheme.
    pub fn reference() -> Self {
        Self::assemble(MigratorConfig::default())
    }

    pub fn global() -> &'static TierNameMigrator {
        GLOBAL_MIGRATOR.get_or_init(Self::reference)
    }

    pub fn install_global(migrator: TierNameMigrator) -> Result<&'static TierNameMigrator> {
        let alias_count = migrator.aliases.len();
        GLOBAL_MIGRATOR
            .set(migrator)
            .map_err(|_| TierError::AlreadyInstalled("tier name migrator"))?;

        info!("Installed tier name migrator with {} legacy aliases", alias_count);
        Ok(Self::global())
    }

    fn assemble(config: MigratorConfig) -> Self {
        let mut colors = HashMap::new();
        let mut icons = HashMap::new();
        let mut names = Vec::with_capacity(config.names.len());

        for entry in config.names {
            if let Some(color) = entry.color {
                colors.insert(entry.name.clone(), color);
            }
            if let Some(icon) = entry.icon {
                icons.insert(entry.name.clone(), icon);
            }
            names.push(entry.name);
        }

        Self {
            current: names.iter().cloned().collect(),
            names,
            aliases: config
                .aliases
                .into_iter()
                .map(|a| (a.code, a.name))
                .collect(),
            colors,
            icons,
            default_name: config.default_name,
            default_color: config.default_color,
            default_icon: config.default_icon,
        }
    }

    /// Current display name for a code. Absent codes get the default name,
    /// current names and unrecognized codes come back unchanged.
    pub fn display_name<'a>(&'a self, code: impl Into<TierId<'a>>) -> Cow<'a, str> {
        match code.into() {
            TierId::Absent => Cow::Borrowed(self.default_name.as_str()),
            TierId::Key(key) => match self.translate(&key) {
                Some(name) => Cow::Borrowed(name),
                None => {
                    debug!("Unrecognized tier name {}, passing through", key);
                    key
                }
            },
        }
    }

    pub fn color_token<'a>(&self, code: impl Into<TierId<'a>>) -> &str {
        let id = code.into();
        let name = self.resolve_name(&id);
        self.colors.get(name).unwrap_or(&self.default_color)
    }

    pub fn icon_glyph<'a>(&self, code: impl Into<TierId<'a>>) -> &str {
        let id = code.into();
        let name = self.resolve_name(&id);
        self.icons.get(name).unwrap_or(&self.default_icon)
    }

    pub fn present<'a>(&self, code: impl Into<TierId<'a>>) -> TierPresentation {
        let id = code.into();
        let name = self.resolve_name(&id);

        TierPresentation {
            display_name: name.to_string(),
            color_token: self.colors.get(name).unwrap_or(&self.default_color).clone(),
            icon_glyph: self.icons.get(name).unwrap_or(&self.default_icon).clone(),
        }
    }

    pub fn is_current_name(&self, name: &str) -> bool {
        self.current.contains(name)
    }

    pub fn current_names(&self) -> &[String] {
        &self.names
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    fn translate(&self, key: &str) -> Option<&str> {
        if let Some(name) = self.current.get(key) {
            return Some(name.as_str());
        }
        self.aliases.get(key).map(String::as_str)
    }

    fn resolve_name<'s>(&'s self, id: &'s TierId<'_>) -> &'s str {
        match id {
            TierId::Absent => &self.default_name,
            TierId::Key(key) => self.translate(key).unwrap_or(&**key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LegacyAlias, TierNameEntry};

    #[test]
    fn test_absent_code_gets_default_name() {
        let migrator = TierNameMigrator::reference();
        assert_eq!(migrator.display_name(None::<&str>), "Minted");
    }

    #[test]
    fn test_legacy_codes_translate() {
        let migrator = TierNameMigrator::reference();

        assert_eq!(migrator.display_name("FOUNDER"), "Staked");
        assert_eq!(migrator.display_name("PLAYER"), "Verified");
        assert_eq!(migrator.display_name("LEGEND"), "Elite");
        assert_eq!(migrator.display_name(35u32), "Staked");
    }

    #[test]
    fn test_current_and_unknown_names_pass_through() {
        let migrator = TierNameMigrator::reference();

        assert_eq!(migrator.display_name("Staked"), "Staked");
        assert_eq!(migrator.display_name("SomeUnknownTier"), "SomeUnknownTier");
        // Lookups are case-sensitive
        assert_eq!(migrator.display_name("founder"), "founder");
    }

    #[test]
    fn test_display_name_is_idempotent() {
        let migrator = TierNameMigrator::reference();
        let inputs = [
            None,
            Some("FOUNDER"),
            Some("PLAYER"),
            Some("Minted"),
            Some("19"),
            Some("SomeUnknownTier"),
            Some(""),
            Some("ELITE"),
        ];

        for input in inputs {
            let once = migrator.display_name(input).into_owned();
            let twice = migrator.display_name(once.as_str()).into_owned();
            assert_eq!(once, twice, "input {:?}", input);
        }
    }

    #[test]
    fn test_color_and_icon_resolve_display_name_first() {
        let migrator = TierNameMigrator::reference();

        assert_eq!(migrator.color_token("FOUNDER"), migrator.color_token("Staked"));
        assert_eq!(migrator.color_token("FOUNDER"), "emerald");
        assert_eq!(migrator.icon_glyph("PLAYER"), "✅");
        assert_eq!(migrator.color_token(None::<&str>), "slate");
        assert_eq!(migrator.color_token("SomeUnknownTier"), "slate");
        assert_eq!(migrator.icon_glyph("SomeUnknownTier"), "🏅");
    }

    #[test]
    fn test_present_bundles_all_three() {
        let migrator = TierNameMigrator::reference();
        let presentation = migrator.present("FOUNDER");

        assert_eq!(presentation.display_name, "Staked");
        assert_eq!(presentation.color_token, "emerald");
        assert_eq!(presentation.icon_glyph, "💎");
    }

    #[test]
    fn test_name_without_style_uses_defaults() {
        let mut config = MigratorConfig::default();
        config.names.push(TierNameEntry {
            name: "Rookie".to_string(),
            color: None,
            icon: None,
        });
        let migrator = TierNameMigrator::new(config).unwrap();

        assert!(migrator.is_current_name("Rookie"));
        assert_eq!(migrator.color_token("Rookie"), "slate");
        assert_eq!(migrator.icon_glyph("Rookie"), "🏅");
    }

    #[test]
    fn test_validation_rejects_bad_tables() {
        let mut bad_target = MigratorConfig::default();
        bad_target.aliases.push(LegacyAlias {
            code: "OG".to_string(),
            name: "Legendary".to_string(),
        });
        assert!(matches!(
            TierNameMigrator::new(bad_target),
            Err(TierError::UnknownAliasTarget { .. })
        ));

        let mut bad_default = MigratorConfig::default();
        bad_default.default_name = "Nobody".to_string();
        assert!(matches!(TierNameMigrator::new(bad_default), Err(TierError::UnknownDefaultName(_))));

        let mut dup_alias = MigratorConfig::default();
        dup_alias.aliases.push(LegacyAlias {
            code: "FOUNDER".to_string(),
            name: "Elite".to_string(),
        });
        assert!(matches!(TierNameMigrator::new(dup_alias), Err(TierError::DuplicateAlias(c)) if c == "FOUNDER"));

        let mut dup_name = MigratorConfig::default();
        let first = dup_name.names[0].clone();
        dup_name.names.push(first);
        assert!(matches!(TierNameMigrator::new(dup_name), Err(TierError::DuplicateName(_))));
    }

    #[test]
    fn test_current_names_keep_declaration_order() {
        let migrator = TierNameMigrator::from_config(&MigratorConfig::default()).unwrap();
        assert_eq!(migrator.current_names(), ["Minted", "Verified", "Staked", "Elite"]);
        assert_eq!(migrator.default_name(), "Minted");
    }
}
