//! CSX Armory - command-line front end
//!
//! Damage calculations, weapon comparisons and rankings, loadout totals,
//! and a JSON record book of saved builds and comparisons.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use csx_armory::catalog::Catalog;
use csx_armory::core::error::Result;
use csx_armory::core::types::{ArtifactId, RecordId};
use csx_armory::core::AppConfig;
use csx_armory::loadout::Loadout;
use csx_armory::records::{RecordBook, RecordLimits, SavedBuild, SavedComparison};
use csx_armory::report::{self, RankKey};
use csx_armory::session::CalculatorSession;

#[derive(Parser, Debug)]
#[command(name = "csx-armory")]
#[command(about = "Weapon damage calculator and equipment builder")]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file replacing the built-in weapons and equipment
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Target and distance overrides; unset values come from the config
#[derive(Args, Debug)]
struct TargetArgs {
    /// Target health points
    #[arg(long)]
    health: Option<u32>,

    /// Target armor in percent (0-100)
    #[arg(long)]
    armor: Option<f64>,

    /// Distance to the target in meters
    #[arg(long)]
    distance: Option<f64>,
}

#[derive(Args, Debug)]
struct LoadoutArgs {
    #[arg(long)]
    suit: Option<String>,

    #[arg(long)]
    container: Option<String>,

    /// Artifact id to equip (repeatable)
    #[arg(long = "artifact")]
    artifacts: Vec<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog weapons
    Weapons,

    /// Damage breakdown for one weapon
    Calc {
        #[arg(long)]
        weapon: Option<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Compare two weapons against the same target
    Compare {
        first: Option<String>,
        second: Option<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Rank every catalog weapon by a result field
    Rank {
        /// body-ttk, head-ttk, body-shots, head-shots, efficiency, body-damage
        #[arg(long, default_value = "body-ttk")]
        by: RankKey,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Total stats of a suit, container and artifacts
    Loadout {
        #[command(flatten)]
        loadout: LoadoutArgs,
    },

    /// Save a loadout into a record book
    SaveBuild {
        #[arg(long)]
        book: PathBuf,

        #[arg(long)]
        name: String,

        #[command(flatten)]
        loadout: LoadoutArgs,
    },

    /// Save a weapon comparison into a record book
    SaveComparison {
        #[arg(long)]
        book: PathBuf,

        #[arg(long)]
        name: String,

        first: Option<String>,
        second: Option<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Manage a record book
    Records {
        #[arg(long)]
        book: PathBuf,

        #[command(subcommand)]
        action: RecordsAction,
    },
}

#[derive(Subcommand, Debug)]
enum RecordsAction {
    /// List saved builds and comparisons
    List,
    /// Find builds by name
    Search { query: String },
    /// Delete a build or comparison by id
    Delete { id: Uuid },
    /// Record counts against their limits
    Usage,
    /// Print all builds as an export document
    Export,
    /// Import builds from an export document
    Import { file: PathBuf },
    /// Print a full backup
    Backup,
    /// Restore from a backup document
    Restore { file: PathBuf },
    /// Delete every record
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_file(path),
        None => Ok(AppConfig::default()),
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_catalog(cli_path: Option<&Path>, config: &AppConfig) -> Result<Catalog> {
    match cli_path.or(config.catalog_path.as_deref()) {
        Some(path) => Catalog::load_file(path),
        None => Ok(Catalog::standard()),
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref(), config)?;
    let json = cli.json;

    match cli.command {
        Command::Weapons => {
            if json {
                print_json(&catalog.weapons())?;
            } else {
                for weapon in catalog.weapons() {
                    println!(
                        "{:<10} {:<10} {:>4} dmg {:>5} rpm {:>5}/{:<5} m  {}",
                        weapon.key,
                        weapon.name,
                        weapon.base_damage,
                        weapon.fire_rate_rpm,
                        weapon.effective_range,
                        weapon.max_range,
                        weapon.description
                    );
                }
            }
        }

        Command::Calc { weapon, target } => {
            let mut session = CalculatorSession::new(&catalog, config)?;
            if let Some(key) = weapon {
                session.select_weapon(&catalog, &key)?;
            }
            apply_target(&mut session, &target)?;

            let result = session.calculate(&catalog)?;
            if json {
                print_json(&result)?;
            } else {
                let weapon = catalog.weapon(session.weapon().as_str())?;
                println!("{}", report::render_result(weapon, session.distance(), &result));
            }
        }

        Command::Compare {
            first,
            second,
            target,
        } => {
            let mut session = CalculatorSession::new(&catalog, config)?;
            select_pair(&mut session, &catalog, first, second)?;
            apply_target(&mut session, &target)?;

            let (first_result, second_result) = session.compare(&catalog)?;
            if json {
                print_json(&(first_result, second_result))?;
            } else {
                let (first, second) = session.comparison_pair();
                println!(
                    "{}",
                    report::render_comparison(
                        (catalog.weapon(first.as_str())?, &first_result),
                        (catalog.weapon(second.as_str())?, &second_result),
                    )
                );
            }
        }

        Command::Rank { by, target } => {
            let mut session = CalculatorSession::new(&catalog, config)?;
            apply_target(&mut session, &target)?;
            let ranked = report::rank_weapons(&catalog, session.target(), session.distance(), by)?;
            if json {
                print_json(&ranked)?;
            } else {
                for (place, entry) in ranked.iter().enumerate() {
                    println!(
                        "{}. {:<10} body {:>3} shots {:>6.1} s | head {:>3} shots {:>6.1} s | {}%",
                        place + 1,
                        entry.name,
                        entry.result.body_shots_to_kill,
                        entry.result.body_time_to_kill,
                        entry.result.head_shots_to_kill,
                        entry.result.head_time_to_kill,
                        entry.result.efficiency_percent
                    );
                }
            }
        }

        Command::Loadout { loadout } => {
            let loadout = build_loadout(&catalog, config, &loadout)?;
            let stats = loadout.total_stats(&catalog)?;
            if json {
                print_json(&stats)?;
            } else {
                println!("{}", report::render_stats(&stats));
            }
        }

        Command::SaveBuild {
            book,
            name,
            loadout,
        } => {
            let loadout = build_loadout(&catalog, config, &loadout)?;
            let build = SavedBuild::capture(&name, &loadout, &catalog)?;

            let mut records = RecordBook::load_or_default(&book, RecordLimits::from_config(config))?;
            let id = records.save_build(build)?;
            records.save_file(&book)?;
            println!("Saved build '{}' ({})", name.trim(), id);
        }

        Command::SaveComparison {
            book,
            name,
            first,
            second,
            target,
        } => {
            let mut session = CalculatorSession::new(&catalog, config)?;
            select_pair(&mut session, &catalog, first, second)?;
            apply_target(&mut session, &target)?;
            let comparison = SavedComparison::capture(&name, &session, &catalog)?;

            let mut records = RecordBook::load_or_default(&book, RecordLimits::from_config(config))?;
            let id = records.save_comparison(comparison)?;
            records.save_file(&book)?;
            println!("Saved comparison '{}' ({})", name.trim(), id);
        }

        Command::Records { book, action } => {
            let mut records = RecordBook::load_or_default(&book, RecordLimits::from_config(config))?;
            run_records_action(&mut records, &book, action, json)?;
        }
    }

    Ok(())
}

fn run_records_action(
    records: &mut RecordBook,
    book: &Path,
    action: RecordsAction,
    json: bool,
) -> Result<()> {
    match action {
        RecordsAction::List => {
            if json {
                print_json(&*records)?;
            } else {
                for build in records.builds() {
                    println!("build       {}  {}", build.id, build.build_name);
                }
                for comparison in records.comparisons() {
                    println!(
                        "comparison  {}  {} ({} vs {})",
                        comparison.id,
                        comparison.comparison_name,
                        comparison.weapon1_id,
                        comparison.weapon2_id
                    );
                }
            }
        }
        RecordsAction::Search { query } => {
            let hits = records.search_builds(&query);
            if json {
                print_json(&hits)?;
            } else {
                for build in hits {
                    println!("{}  {}", build.id, build.build_name);
                }
            }
        }
        RecordsAction::Delete { id } => {
            let id = RecordId(id);
            match records.delete_build(id) {
                Ok(build) => println!("Deleted build '{}'", build.build_name),
                Err(_) => {
                    let comparison = records.delete_comparison(id)?;
                    println!("Deleted comparison '{}'", comparison.comparison_name);
                }
            }
            records.save_file(book)?;
        }
        RecordsAction::Usage => {
            let usage = records.usage();
            if json {
                print_json(&usage)?;
            } else {
                println!(
                    "Builds: {}/{} ({:.1}%)",
                    usage.builds.count, usage.builds.limit, usage.builds.percentage
                );
                println!(
                    "Comparisons: {}/{} ({:.1}%)",
                    usage.comparisons.count, usage.comparisons.limit, usage.comparisons.percentage
                );
            }
        }
        RecordsAction::Export => println!("{}", records.export_builds()?),
        RecordsAction::Import { file } => {
            let content = std::fs::read_to_string(&file)?;
            let summary = records.import_builds(&content)?;
            records.save_file(book)?;
            println!("Imported {} of {} builds", summary.imported, summary.total);
        }
        RecordsAction::Backup => print_json(&records.backup())?,
        RecordsAction::Restore { file } => {
            let content = std::fs::read_to_string(&file)?;
            let summary = records.restore_from_backup(&content)?;
            records.save_file(book)?;
            println!(
                "Restored {} of {} builds and {} comparisons",
                summary.restored, summary.total, summary.restored_comparisons
            );
        }
        RecordsAction::Clear => {
            let summary = records.clear_all();
            records.save_file(book)?;
            println!(
                "Deleted {} builds and {} comparisons",
                summary.deleted_builds, summary.deleted_comparisons
            );
        }
    }
    Ok(())
}

fn apply_target(session: &mut CalculatorSession, args: &TargetArgs) -> Result<()> {
    let health = args.health.unwrap_or(session.target().health);
    let armor = args.armor.unwrap_or(session.target().armor);
    session.set_target(health, armor)?;
    if let Some(distance) = args.distance {
        session.set_distance(distance)?;
    }
    Ok(())
}

fn select_pair(
    session: &mut CalculatorSession,
    catalog: &Catalog,
    first: Option<String>,
    second: Option<String>,
) -> Result<()> {
    let (default_first, default_second) = session.comparison_pair();
    let first = first.unwrap_or_else(|| default_first.to_string());
    let second = second.unwrap_or_else(|| default_second.to_string());
    session.select_comparison(catalog, &first, &second)
}

/// Explicit keys must exist; configured defaults fall back to the catalog's first entry
fn build_loadout(catalog: &Catalog, config: &AppConfig, args: &LoadoutArgs) -> Result<Loadout> {
    let suit = match args.suit.as_deref() {
        Some(key) => catalog.suit(key)?,
        None => catalog.suit_or_first(config.default_suit.as_str())?,
    };
    let container = match args.container.as_deref() {
        Some(key) => catalog.container(key)?,
        None => catalog.container_or_first(config.default_container.as_str())?,
    };
    let artifacts: Vec<ArtifactId> = args.artifacts.iter().copied().map(ArtifactId).collect();
    Loadout::from_parts(catalog, suit.key.as_str(), container.key.as_str(), &artifacts)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
