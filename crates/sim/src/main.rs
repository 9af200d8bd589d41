//! Headless battle simulator.
//!
//! Loads content from a data directory, picks a starting hero and plays a
//! series of seeded matches against generated rosters, carrying experience,
//! loot and consumed items from one match into the next.
//!
//! # Examples
//!
//! ```bash
//! # Five matches with Red Girl, using her slots every turn
//! cargo run -p fighter-sim -- --hero 1 --matches 5 --slots first
//!
//! # Dump every event of one match as JSON lines
//! RUST_LOG=fighter_core=debug cargo run -p fighter-sim -- --format json
//! ```

mod config;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fighter_content::ContentFactory;
use fighter_core::{DerivedStats, EquippedSlot, FightError, HeroProfile, MatchConfig};
use tracing::{info, warn};

use config::SimConfig;
use session::{MatchReport, Session, SessionContent, SlotPolicy};

/// Headless chibi fighter battle simulator
#[derive(Parser)]
#[command(name = "fighter-sim")]
#[command(about = "Plays seeded battles without a renderer", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides FIGHTER_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Session seed (overrides FIGHTER_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tick budget per match (overrides FIGHTER_MAX_TICKS)
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Index of the starting hero preset
    #[arg(long, default_value_t = 0)]
    hero: usize,

    /// Number of matches to play in a row
    #[arg(short, long, default_value_t = 1)]
    matches: u64,

    /// Battle slot policy for the player side
    #[arg(long, value_enum, default_value = "off")]
    slots: SlotPolicy,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per match
    Summary,
    /// Every match event as a JSON line
    Json,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SimConfig::from_env().with_overrides(cli.data_dir, cli.seed, cli.max_ticks);

    let factory = ContentFactory::new(&config.data_dir);
    let content = SessionContent {
        config: factory.load_config().context("loading match config")?,
        progression: factory.load_progression().context("loading progression rules")?,
        catalog: factory.load_assets().context("loading asset catalog")?,
    };
    let mut heroes = factory.load_heroes().context("loading hero presets")?;
    if cli.hero >= heroes.len() {
        anyhow::bail!("hero index {} out of range (0..{})", cli.hero, heroes.len());
    }
    let mut hero = heroes.swap_remove(cli.hero).into_profile();
    let sheet = DerivedStats::compute(&hero.stats, &content.config.weights, &content.config.combat);
    info!(
        data_dir = %factory.data_dir().display(),
        seed = config.seed,
        hero = %hero.name,
        attack = sheet.attack,
        crit_rate = sheet.crit_rate,
        combo_rate = sheet.combo_rate,
        dodge = sheet.dodge_chance,
        block = sheet.block_chance,
        "simulation starting"
    );

    let session = Session::new(&content, config.seed, config.max_ticks, cli.slots);
    let mut wins = 0;
    for index in 0..cli.matches {
        equip_everything(&mut hero);
        let report = session.play(&hero, index)?;
        if report.outcome.player_won() {
            wins += 1;
        }
        print_report(index, &report, cli.format)?;
        hero.apply_update(&report.outcome.update);
    }

    info!(
        wins,
        matches = cli.matches,
        level = hero.level,
        exp = hero.exp,
        items = hero.items.len(),
        "simulation finished"
    );
    Ok(())
}

/// Fills the battle bar with owned skills first, then items.
fn equip_everything(hero: &mut HeroProfile) {
    let owned: Vec<EquippedSlot> = hero
        .skills
        .iter()
        .cloned()
        .map(EquippedSlot::Skill)
        .chain(hero.items.iter().map(|item| EquippedSlot::Item(item.instance)))
        .collect();

    for slot in owned {
        if hero.equipped.len() >= MatchConfig::MAX_EQUIPPED_SLOTS {
            break;
        }
        if hero.is_equipped(&slot) {
            continue;
        }
        if let Err(e) = hero.toggle_equip(slot) {
            warn!(severity = e.severity().as_str(), "Failed to equip slot: {}", e);
        }
    }
}

fn print_report(index: u64, report: &MatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for event in &report.events {
                println!("{}", serde_json::to_string(event)?);
            }
        }
        OutputFormat::Summary => {
            let update = &report.outcome.update;
            let result = if report.outcome.player_won() { "WIN " } else { "LOSS" };
            println!(
                "#{index:<3} {result} vs {} (lv {}) in {} turns / {} ticks: +{} exp, {} drops, {} consumed",
                report.enemy.name,
                report.enemy.level,
                report.turns,
                report.ticks,
                update.exp_gained,
                update.drops.len(),
                update.consumed_items.len(),
            );
        }
    }
    Ok(())
}
