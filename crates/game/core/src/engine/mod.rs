//! Turn state machine.
//!
//! [`Match`] drives alternating attacker/defender exchanges one phase step
//! per [`Match::tick`]. Each tick returns the [`MatchEvent`]s it produced;
//! the only input back into the machine is [`Match::select_action_slot`].
//! Phase handlers are private and dispatched on [`Phase`], so a handler can
//! never run outside its own phase.

mod decide;
mod errors;
mod events;
mod phase;
mod transition;

pub use errors::MatchError;
pub use events::{MatchEvent, MatchOutcome};
pub use phase::{Phase, StrikeAction};

use crate::config::MatchConfig;
use crate::env::BattleEnv;
use crate::progression::ProgressionRules;
use crate::state::{EnemyProfile, EquippedSlot, Fighter, HeroProfile, InstanceId, Pose, Side};

/// One battle between a hero and an enemy.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    progression: ProgressionRules,
    hero: HeroProfile,
    enemy: EnemyProfile,

    player: Fighter,
    opponent: Fighter,

    phase: Phase,
    timer: u32,
    /// `None` until the first turn starts.
    active: Option<Side>,
    pending: Option<EquippedSlot>,
    action: StrikeAction,
    combo_remaining: u32,
    hit_index: u32,

    used_slots: Vec<EquippedSlot>,
    consumed_items: Vec<InstanceId>,
    paused: bool,
    outcome: Option<MatchOutcome>,
}

impl Match {
    /// Builds both fighters from profile snapshots.
    ///
    /// The match idles in Wait until [`Match::start_first_turn`] is called.
    pub fn new(hero: HeroProfile, enemy: EnemyProfile, config: MatchConfig) -> Self {
        let player = Fighter::from_hero(&hero, &config.arena);
        let opponent = Fighter::from_enemy(&enemy, &config.arena);
        Self {
            config,
            progression: ProgressionRules::default(),
            hero,
            enemy,
            player,
            opponent,
            phase: Phase::Wait,
            timer: u32::MAX,
            active: None,
            pending: None,
            action: StrikeAction::Attack,
            combo_remaining: 0,
            hit_index: 0,
            used_slots: Vec::new(),
            consumed_items: Vec::new(),
            paused: false,
            outcome: None,
        }
    }

    pub fn with_progression(mut self, progression: ProgressionRules) -> Self {
        self.progression = progression;
        self
    }

    /// Starts the player's first turn after the kickoff delay.
    pub fn start_first_turn(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        if self.is_over() {
            return Err(MatchError::AlreadyOver);
        }
        if self.active.is_some() {
            return Err(MatchError::AlreadyStarted);
        }
        let mut events = Vec::new();
        self.start_turn(Side::Player, &mut events);
        Ok(events)
    }

    /// Advances the machine by one phase step.
    ///
    /// Does nothing while paused or after the match is over.
    pub fn tick(&mut self, env: &mut BattleEnv<'_>) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        if self.paused || self.is_over() {
            return events;
        }

        match self.phase {
            Phase::Decide => self.on_decide(env, &mut events),
            Phase::Approach => self.on_approach(),
            Phase::Act => self.on_act(),
            Phase::Impact => self.on_impact(env, &mut events),
            Phase::Retreat => self.on_retreat(),
            Phase::Wait => self.on_wait(&mut events),
        }
        events
    }

    /// Sets or clears the player's pending slot.
    ///
    /// Accepted only during the player's Decide phase and only for an
    /// equipped slot not yet used this match. Returns whether it was accepted.
    pub fn select_action_slot(&mut self, slot: Option<EquippedSlot>) -> bool {
        if self.is_over() || self.phase != Phase::Decide || self.active != Some(Side::Player) {
            return false;
        }
        match slot {
            None => {
                self.pending = None;
                true
            }
            Some(slot) if self.is_slot_available(&slot) => {
                self.pending = Some(slot);
                true
            }
            Some(_) => false,
        }
    }

    /// Equipped slot that can still be selected this match.
    pub fn is_slot_available(&self, slot: &EquippedSlot) -> bool {
        self.hero.equipped.contains(slot) && !self.used_slots.contains(slot)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn active_side(&self) -> Option<Side> {
        self.active
    }

    pub fn current_action(&self) -> StrikeAction {
        self.action
    }

    pub fn combo_remaining(&self) -> u32 {
        self.combo_remaining
    }

    pub fn hit_index(&self) -> u32 {
        self.hit_index
    }

    pub fn pending_slot(&self) -> Option<&EquippedSlot> {
        self.pending.as_ref()
    }

    /// The hero's equipped slots, in battle-bar order.
    pub fn battle_slots(&self) -> &[EquippedSlot] {
        &self.hero.equipped
    }

    pub fn used_slots(&self) -> &[EquippedSlot] {
        &self.used_slots
    }

    pub fn consumed_items(&self) -> &[InstanceId] {
        &self.consumed_items
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn hero(&self) -> &HeroProfile {
        &self.hero
    }

    pub fn enemy(&self) -> &EnemyProfile {
        &self.enemy
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.opponent,
        }
    }

    /// Direct access for tests and tooling. The match owns all battle state.
    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.opponent,
        }
    }

    /// `(attacker, defender)` for the side whose turn it is.
    fn pair_mut(&mut self, active: Side) -> (&mut Fighter, &mut Fighter) {
        match active {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Enemy => (&mut self.opponent, &mut self.player),
        }
    }

    fn enter(&mut self, phase: Phase, timer: u32) {
        tracing::debug!(from = %self.phase, to = %phase, timer, "phase transition");
        self.phase = phase;
        self.timer = timer;
    }

    fn start_turn(&mut self, side: Side, events: &mut Vec<MatchEvent>) {
        self.active = Some(side);
        self.combo_remaining = 0;
        self.hit_index = 0;
        let (active, target) = self.pair_mut(side);
        active.is_crit = false;
        target.pose = Pose::Idle;

        let decide_ticks = match side {
            Side::Player => self.config.timings.player_decide_ticks,
            Side::Enemy => self.config.timings.ai_decide_ticks,
        };
        self.enter(Phase::Decide, decide_ticks.max(1));
        events.push(MatchEvent::TurnStarted { side });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AssetCatalog, ScriptedRng};
    use crate::state::{Archetype, Stats};

    fn game() -> Match {
        let hero = HeroProfile::new("Tester", Archetype::Girl, 1, Stats::new(20, 10, 10), 0);
        let enemy = EnemyProfile::new(Archetype::Treant, 50, Stats::new(200, 0, 0), false);
        Match::new(hero, enemy, MatchConfig::default())
    }

    fn step(game: &mut Match, rng: &mut ScriptedRng) -> Vec<MatchEvent> {
        let catalog = AssetCatalog::new();
        let mut env = BattleEnv::new(&catalog, rng);
        game.tick(&mut env)
    }

    fn ticks_in(game: &mut Match, rng: &mut ScriptedRng, phase: Phase) -> u32 {
        let mut ticks = 0;
        while game.phase() == phase {
            step(game, rng);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn player_decides_for_thirty_ticks() {
        let mut rng = ScriptedRng::constant(0.2);
        let mut game = game();
        game.start_first_turn().unwrap();

        assert_eq!(ticks_in(&mut game, &mut rng, Phase::Decide), 30);
        assert_eq!(game.phase(), Phase::Approach);
        assert_eq!(game.current_action(), StrikeAction::Attack);
    }

    #[test]
    fn approach_snaps_to_offset_before_the_target() {
        let mut rng = ScriptedRng::constant(0.2);
        let mut game = game();
        game.start_first_turn().unwrap();
        ticks_in(&mut game, &mut rng, Phase::Decide);

        // 420 units at 12 per tick, then one snapping tick.
        assert_eq!(ticks_in(&mut game, &mut rng, Phase::Approach), 36);
        assert_eq!(game.phase(), Phase::Act);
        assert_eq!(game.fighter(Side::Player).x, 570.0);
        assert_eq!(game.fighter(Side::Player).pose, Pose::Run);
    }

    #[test]
    fn single_swing_precedes_one_impact() {
        let mut rng = ScriptedRng::constant(0.2);
        let mut game = game();
        game.start_first_turn().unwrap();
        ticks_in(&mut game, &mut rng, Phase::Decide);
        ticks_in(&mut game, &mut rng, Phase::Approach);

        assert_eq!(ticks_in(&mut game, &mut rng, Phase::Act), 31);
        assert_eq!(game.fighter(Side::Player).pose, Pose::Attack);
        let events = step(&mut game, &mut rng);
        assert!(matches!(events[0], MatchEvent::ImpactResolved { damage: 15, .. }));
        assert_eq!(game.phase(), Phase::Retreat);
    }

    #[test]
    fn retreat_then_wait_hands_over_to_an_instant_ai_decision() {
        let mut rng = ScriptedRng::constant(0.2);
        let mut game = game();
        game.start_first_turn().unwrap();
        for phase in [Phase::Decide, Phase::Approach, Phase::Act, Phase::Impact] {
            ticks_in(&mut game, &mut rng, phase);
        }

        ticks_in(&mut game, &mut rng, Phase::Retreat);
        let player = game.fighter(Side::Player);
        assert_eq!(player.x, player.start_x);
        assert_eq!(player.facing, 1.0);
        assert_eq!(game.timer(), 20);

        assert_eq!(ticks_in(&mut game, &mut rng, Phase::Wait), 20);
        assert_eq!(game.active_side(), Some(Side::Enemy));
        assert_eq!(ticks_in(&mut game, &mut rng, Phase::Decide), 1);
        assert_eq!(game.phase(), Phase::Approach);
    }

    #[test]
    fn start_after_the_end_is_rejected() {
        let mut game = game();
        game.outcome = Some(MatchOutcome {
            winner: Side::Enemy,
            update: Default::default(),
        });
        assert_eq!(game.start_first_turn(), Err(MatchError::AlreadyOver));
    }
}
