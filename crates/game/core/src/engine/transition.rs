//! Movement, strike and hand-over phases.

use tracing::{debug, info};

use crate::combat::{Defense, apply_impact, resolve_impact};
use crate::env::BattleEnv;
use crate::progression::{ProfileUpdate, RewardContext, compute_rewards};
use crate::state::{Pose, Side};

use super::{Match, MatchEvent, MatchOutcome, Phase, StrikeAction};

impl Match {
    /// Runs toward the target until within snapping distance.
    pub(super) fn on_approach(&mut self) {
        let Some(side) = self.active else {
            return;
        };
        let movement = self.config.movement;
        let (active, target) = self.pair_mut(side);

        active.pose = Pose::Run;
        let destination = target.x - movement.approach_offset * active.facing;
        let distance = destination - active.x;
        if distance.abs() > movement.approach_snap {
            active.x += distance.signum() * movement.approach_speed;
        } else {
            active.x = destination;
            self.enter(Phase::Act, 0);
        }
    }

    /// Telegraph pause (combo only) followed by the swing.
    pub(super) fn on_act(&mut self) {
        let Some(side) = self.active else {
            return;
        };
        let timings = self.config.timings;
        let (pause, swing) = match self.action {
            StrikeAction::Combo => (timings.combo_pause_ticks, timings.combo_swing_ticks),
            StrikeAction::Attack | StrikeAction::Critical => (0, timings.single_swing_ticks),
        };

        self.timer = self.timer.saturating_add(1);
        let timer = self.timer;
        let active = self.fighter_mut(side);
        active.pose = if timer <= pause { Pose::Idle } else { Pose::Attack };

        if timer > pause + swing {
            self.enter(Phase::Impact, timer);
        }
    }

    /// Resolves exactly one impact and decides what follows it.
    pub(super) fn on_impact(&mut self, env: &mut BattleEnv<'_>, events: &mut Vec<MatchEvent>) {
        let Some(side) = self.active else {
            return;
        };
        let action = self.action;
        let hit_index = self.hit_index;
        let rules = self.config.combat;
        let bounce = self.config.movement.dodge_bounce;
        let (attacker, defender) = self.pair_mut(side);

        let result = resolve_impact(attacker, defender, action, hit_index, &rules, env.rng());
        apply_impact(&result, attacker, defender, bounce);
        attacker.end_exchange();

        debug!(
            %side,
            outcome = %result.outcome(),
            damage = result.damage,
            hit_index,
            "impact resolved"
        );
        events.push(MatchEvent::ImpactResolved {
            attacker: side,
            x: defender.x,
            y: defender.y,
            damage: result.damage,
            text: result.display_text(),
            outcome: result.outcome(),
            result: result.clone(),
        });
        if result.defense != Defense::Dodge {
            events.push(MatchEvent::HpChanged {
                side: side.opponent(),
                hp: defender.hp(),
                max_hp: defender.max_hp(),
            });
        }

        if defender.is_dead() {
            defender.pose = Pose::Dead;
            attacker.pose = Pose::Win;
            attacker.is_crit = false;
            self.finish(side, env, events);
            return;
        }

        if action == StrikeAction::Combo && self.combo_remaining > 1 && result.defense != Defense::Dodge
        {
            self.combo_remaining -= 1;
            self.hit_index += 1;
            self.enter(Phase::Act, 0);
        } else {
            self.enter(Phase::Retreat, 0);
        }
    }

    /// Walks back to the start position facing away from the target.
    pub(super) fn on_retreat(&mut self) {
        let Some(side) = self.active else {
            return;
        };
        let movement = self.config.movement;
        let active = self.fighter_mut(side);

        active.pose = Pose::Run;
        active.facing = -side.default_facing();
        let distance = active.start_x - active.x;
        if distance.abs() > movement.retreat_snap {
            active.x += distance.signum() * movement.retreat_speed;
        } else {
            active.snap_home();
            self.enter(Phase::Wait, self.config.timings.turn_wait_ticks);
        }
    }

    /// Counts down before handing the turn to the other side.
    ///
    /// Before the first turn there is no active side and the wait never ends.
    pub(super) fn on_wait(&mut self, events: &mut Vec<MatchEvent>) {
        let Some(side) = self.active else {
            return;
        };
        let target = self.fighter_mut(side.opponent());
        if target.pose == Pose::Dodge {
            target.snap_home();
        }

        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.start_turn(side.opponent(), events);
        }
    }

    /// Ends the match with `winner` and reports the outcome.
    fn finish(&mut self, winner: Side, env: &mut BattleEnv<'_>, events: &mut Vec<MatchEvent>) {
        let update = match winner {
            Side::Player => compute_rewards(
                RewardContext {
                    hero: &self.hero,
                    enemy: &self.enemy,
                    consumed_items: &self.consumed_items,
                },
                &self.progression,
                env.rng(),
            ),
            Side::Enemy => ProfileUpdate::consumed_only(&self.hero, &self.consumed_items),
        };

        info!(
            %winner,
            hero = %self.hero.name,
            enemy = %self.enemy.name,
            exp_gained = update.exp_gained,
            leveled_up = update.leveled_up,
            "match over"
        );
        self.pending = None;
        events.push(MatchEvent::MatchEnded { winner });
        if winner == Side::Player {
            events.push(MatchEvent::RewardComputed {
                update: update.clone(),
            });
        }
        self.outcome = Some(MatchOutcome { winner, update });
    }
}
