use clap::{Parser, Subcommand};
use goalcoin_tiers::{
    config::Settings,
    migrator::{self, TierNameMigrator},
    registry::{self, TierRegistry},
    TierDescriptor,
};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "goalcoin-tiers")]
#[clap(about = "Inspect GoalCoin payment tiers and display names", long_about = None)]
struct Cli {
    /// Configuration file to load over the defaults
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a tier key to its descriptor
    Resolve {
        /// Tier key, e.g. 19. Omit to get the default tier
        id: Option<String>,
    },

    /// List the tiers offered in the UI
    List {
        /// Include hidden tiers
        #[clap(short, long)]
        all: bool,
    },

    /// Show the current display name, color and icon for a tier code
    Display {
        /// Legacy code or display name. Omit to get the default name
        code: Option<String>,
    },

    /// Check that the configured tables are consistent
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    };

    // Initialize logging
    let log_level = loaded
        .as_ref()
        .map(|s| s.app.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match (loaded, &cli.config) {
        (Ok(settings), _) => settings,
        (Err(e), Some(path)) => {
            error!("Failed to load {}: {}", path.display(), e);
            return Err(e.into());
        }
        (Err(e), None) => {
            warn!("Failed to load configuration, using default settings: {}", e);
            Settings::default()
        }
    };

    info!("{} v{} ({:?})", settings.app.name, settings.app.version, settings.app.environment);

    let tier_registry = settings.build_registry().map_err(|e| {
        error!("Invalid tier registry: {}", e);
        e
    })?;
    let name_migrator = settings.build_migrator().map_err(|e| {
        error!("Invalid tier name migrator: {}", e);
        e
    })?;

    TierRegistry::install_global(tier_registry)?;
    TierNameMigrator::install_global(name_migrator)?;

    match cli.command {
        Commands::Resolve { id } => {
            let tier = registry::resolve_tier(id.as_deref());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(tier)?);
            } else {
                print_tier(tier);
            }
        }

        Commands::List { all } => {
            let tiers: Vec<&TierDescriptor> = if all {
                TierRegistry::global().all_tiers().iter().collect()
            } else {
                registry::list_visible_tiers()
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tiers)?);
            } else {
                println!("\n=== Tiers ===");
                for tier in tiers {
                    let hidden = if tier.visible { "" } else { " [hidden]" };
                    println!(
                        "{:>6}  {:<10} ${:<8} burn x{:<5} xp x{:<5} streak {}{}",
                        tier.key,
                        tier.display_name,
                        tier.price,
                        tier.burn_multiplier,
                        tier.xp_multiplier,
                        tier.streak_cap,
                        hidden
                    );
                }
            }
        }

        Commands::Display { code } => {
            let presentation = migrator::present(code.as_deref());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&presentation)?);
            } else {
                println!(
                    "{} {} ({})",
                    presentation.icon_glyph, presentation.display_name, presentation.color_token
                );
            }
        }

        Commands::Validate => {
            let tiers = TierRegistry::global();
            let names = TierNameMigrator::global();

            println!("✅ Configuration is valid");
            println!(
                "  Tiers: {} ({} visible), default {}",
                tiers.all_tiers().len(),
                tiers.list_visible_tiers().len(),
                tiers.default_tier().key
            );
            println!(
                "  Display names: {}, default {}",
                names.current_names().join(", "),
                names.default_name()
            );
        }
    }

    Ok(())
}

fn print_tier(tier: &TierDescriptor) {
    println!("\n=== {} ===", tier);
    println!("Internal name: {}", tier.internal_name);
    println!("Price: ${}", tier.price);
    println!("Burn multiplier: {}", tier.burn_multiplier);
    println!("XP multiplier: {}", tier.xp_multiplier);
    println!("Streak cap: {} days", tier.streak_cap);
    println!("Badge: {}", tier.badge);
    println!("Visible: {}", if tier.visible { "yes" } else { "no" });
}
