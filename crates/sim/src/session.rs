//! Runs matches back to back for one hero.

use anyhow::{Context, Result};
use fighter_core::{
    AssetCatalog, BattleEnv, EnemyProfile, HeroProfile, Match, MatchConfig, MatchEvent,
    MatchOutcome, PcgRng, ProgressionRules, Side, compute_seed, generate_roster,
};
use tracing::{debug, info};

/// Everything a session needs besides the hero.
pub struct SessionContent {
    pub config: MatchConfig,
    pub progression: ProgressionRules,
    pub catalog: AssetCatalog,
}

/// How the player side picks its battle slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SlotPolicy {
    /// Never uses a slot.
    Off,
    /// Uses the first unused equipped slot every turn.
    First,
}

/// Summary of one finished match.
#[derive(Debug)]
pub struct MatchReport {
    pub enemy: EnemyProfile,
    pub outcome: MatchOutcome,
    pub ticks: u64,
    pub turns: u32,
    pub events: Vec<MatchEvent>,
}

pub struct Session<'a> {
    content: &'a SessionContent,
    seed: u64,
    max_ticks: u64,
    policy: SlotPolicy,
}

impl<'a> Session<'a> {
    pub fn new(content: &'a SessionContent, seed: u64, max_ticks: u64, policy: SlotPolicy) -> Self {
        Self {
            content,
            seed,
            max_ticks,
            policy,
        }
    }

    /// Plays match `index` against an enemy from the hero's current roster.
    pub fn play(&self, hero: &HeroProfile, index: u64) -> Result<MatchReport> {
        let mut rng = PcgRng::seed_from_u64(compute_seed(self.seed, index, 0));
        let roster = generate_roster(hero.level, &mut rng);
        let enemy = roster
            .get((index % roster.len() as u64) as usize)
            .cloned()
            .context("empty enemy roster")?;
        info!(
            match_index = index,
            hero = %hero.name,
            hero_level = hero.level,
            enemy = %enemy.name,
            enemy_level = enemy.level,
            boss = enemy.is_boss,
            "match starting"
        );

        let mut game = Match::new(hero.clone(), enemy.clone(), self.content.config.clone())
            .with_progression(self.content.progression.clone());
        let mut events = Vec::new();
        // Nothing happens before the first turn; count the kickoff without ticking.
        let mut ticks = u64::from(self.content.config.timings.kickoff_ticks);
        let mut turns = 1;

        events.extend(game.start_first_turn()?);
        self.pick_slot(&mut game);

        while !game.is_over() {
            if ticks >= self.max_ticks {
                anyhow::bail!("match {index} still running after {ticks} ticks");
            }
            let mut env = BattleEnv::new(&self.content.catalog, &mut rng);
            for event in game.tick(&mut env) {
                if let MatchEvent::TurnStarted { side } = event {
                    turns += 1;
                    if side == Side::Player {
                        self.pick_slot(&mut game);
                    }
                }
                events.push(event);
            }
            ticks += 1;
        }

        let outcome = game
            .outcome()
            .cloned()
            .context("match ended without an outcome")?;
        Ok(MatchReport {
            enemy,
            outcome,
            ticks,
            turns,
            events,
        })
    }

    fn pick_slot(&self, game: &mut Match) {
        if self.policy == SlotPolicy::Off {
            return;
        }
        let slot = game
            .battle_slots()
            .iter()
            .find(|slot| game.is_slot_available(slot))
            .cloned();
        if let Some(slot) = slot {
            debug!(?slot, "auto-selecting battle slot");
            game.select_action_slot(Some(slot));
        }
    }
}
