//! Decide phase: pending slot resolution and action selection.

use tracing::{debug, warn};

use crate::env::{BattleEnv, RngOracle};
use crate::state::{EquippedSlot, Side};

use super::{Match, MatchEvent, Phase, StrikeAction};

/// What using the pending slot did to the turn.
enum SlotUse {
    /// Offense buff or voided selection: pick an action as usual.
    Continue,
    /// Defensive item or heal: the attack is skipped.
    EndsTurn,
}

impl Match {
    pub(super) fn on_decide(&mut self, env: &mut BattleEnv<'_>, events: &mut Vec<MatchEvent>) {
        let Some(side) = self.active else {
            return;
        };
        self.timer = self.timer.saturating_sub(1);
        if self.timer > 0 {
            return;
        }

        if side == Side::Player {
            if let Some(slot) = self.pending.take() {
                if let SlotUse::EndsTurn = self.use_slot(slot, env, events) {
                    self.enter(Phase::Wait, self.config.timings.item_wait_ticks);
                    return;
                }
            }
        }

        self.choose_action(side, env.rng(), events);
        self.enter(Phase::Approach, 0);
    }

    /// Resolves the slot to an asset and applies it to the player.
    ///
    /// An unresolvable slot is voided: nothing is applied, used or consumed.
    fn use_slot(
        &mut self,
        slot: EquippedSlot,
        env: &BattleEnv<'_>,
        events: &mut Vec<MatchEvent>,
    ) -> SlotUse {
        let lookup = self
            .hero
            .resolve_slot(&slot)
            .and_then(|id| env.assets().lookup(&id));
        let definition = match lookup {
            Ok(definition) => definition,
            Err(reason) => {
                warn!(?slot, %reason, "voiding battle slot selection");
                events.push(MatchEvent::SelectionVoided { slot, reason });
                return SlotUse::Continue;
            }
        };

        self.used_slots.push(slot.clone());
        if let EquippedSlot::Item(instance) = slot {
            self.consumed_items.push(instance);
            events.push(MatchEvent::ItemConsumed {
                item: definition.id.clone(),
                instance,
            });
        }

        let user = &mut self.player;
        let healed = definition.apply(user);
        debug!(asset = %definition.id, healed, "asset used");
        events.push(MatchEvent::AssetUsed {
            side: Side::Player,
            asset: definition.id.clone(),
            display_name: definition.display_name.clone(),
        });

        if healed > 0 {
            events.push(MatchEvent::Healed {
                side: Side::Player,
                amount: healed,
            });
        }
        let ends_turn = definition.ends_turn();
        if healed > 0 || ends_turn {
            events.push(MatchEvent::HpChanged {
                side: Side::Player,
                hp: user.hp(),
                max_hp: user.max_hp(),
            });
        }
        if ends_turn {
            SlotUse::EndsTurn
        } else {
            SlotUse::Continue
        }
    }

    /// Picks the action for this turn.
    ///
    /// A forced combo wins over a forced crit; both are consumed here. Without
    /// a forced action one draw over the weights decides, and a combo draws
    /// once more for its hit count.
    fn choose_action(
        &mut self,
        side: Side,
        rng: &mut dyn RngOracle,
        events: &mut Vec<MatchEvent>,
    ) {
        let weights = self.config.weights;
        let combo = self.config.combo;
        let fighter = self.fighter_mut(side);

        let (action, hits) = if fighter.buffs.force_combo {
            fighter.buffs.force_combo = false;
            (
                StrikeAction::Combo,
                rng.range(combo.forced_min, combo.forced_max),
            )
        } else if fighter.buffs.force_crit {
            fighter.buffs.force_crit = false;
            (StrikeAction::Critical, 1)
        } else {
            let (attack, combo_weight, crit_weight) = weights.for_stats(&fighter.stats);
            let decision = rng.next_unit() * (attack + combo_weight + crit_weight);

            if decision < attack {
                (StrikeAction::Attack, 1)
            } else if decision < attack + combo_weight {
                (
                    StrikeAction::Combo,
                    rng.range(combo.rolled_min, combo.rolled_max),
                )
            } else {
                (StrikeAction::Critical, 1)
            }
        };
        fighter.is_crit = action == StrikeAction::Critical;

        self.action = action;
        self.combo_remaining = if action == StrikeAction::Combo { hits } else { 0 };
        self.hit_index = 1;
        debug!(%side, %action, hits, "action chosen");
        events.push(MatchEvent::ActionChosen { side, action, hits });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::env::{AssetCatalog, AssetDefinition, AssetEffect, AssetId, AssetKind, ScriptedRng};
    use crate::state::{Archetype, EnemyProfile, HeroProfile, Stats};

    /// tec 50 and agi 50: attack, combo and critical weigh 100 each.
    fn game() -> Match {
        let mut hero = HeroProfile::new("Tester", Archetype::Wolf, 1, Stats::new(20, 50, 50), 0)
            .with_skill("critical_strike")
            .with_item("honey");
        let honey = hero.items[0].instance;
        let strike = EquippedSlot::Skill(AssetId::new("critical_strike"));
        hero.toggle_equip(strike).unwrap();
        hero.toggle_equip(EquippedSlot::Item(honey)).unwrap();
        let enemy = EnemyProfile::new(Archetype::Goblin, 1, Stats::new(10, 0, 0), false);
        Match::new(hero, enemy, MatchConfig::default())
    }

    fn catalog() -> AssetCatalog {
        AssetCatalog::from_definitions([
            AssetDefinition::new("critical_strike", "Critical Strike", AssetKind::Skill)
                .with_effect(AssetEffect::ForceCrit),
            AssetDefinition::new("honey", "Honey", AssetKind::Item)
                .with_effect(AssetEffect::Heal { amount: 50 })
                .with_effect(AssetEffect::AttackBoost { amount: 0.2 }),
        ])
    }

    fn choose(game: &mut Match, rng: &mut ScriptedRng) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        game.choose_action(Side::Player, rng, &mut events);
        events
    }

    fn run_decide(game: &mut Match, rng: &mut ScriptedRng) -> Vec<MatchEvent> {
        let catalog = catalog();
        let mut events = Vec::new();
        while game.phase() == Phase::Decide {
            let mut env = BattleEnv::new(&catalog, &mut *rng);
            events.extend(game.tick(&mut env));
        }
        events
    }

    #[test]
    fn weighted_draw_falls_into_equal_buckets() {
        let mut game = game();

        choose(&mut game, &mut ScriptedRng::constant(0.30));
        assert_eq!(game.current_action(), StrikeAction::Attack);
        assert_eq!(game.combo_remaining(), 0);

        let mut rng = ScriptedRng::new(vec![0.50, 0.0]);
        let events = choose(&mut game, &mut rng);
        assert_eq!(game.current_action(), StrikeAction::Combo);
        assert_eq!(game.combo_remaining(), 2);
        assert_eq!(rng.draws(), 2);
        assert_eq!(
            events,
            vec![MatchEvent::ActionChosen {
                side: Side::Player,
                action: StrikeAction::Combo,
                hits: 2,
            }]
        );

        choose(&mut game, &mut ScriptedRng::constant(0.90));
        assert_eq!(game.current_action(), StrikeAction::Critical);
        assert!(game.fighter(Side::Player).is_crit);
    }

    #[test]
    fn rolled_combo_spans_two_to_five_hits() {
        let mut game = game();

        choose(&mut game, &mut ScriptedRng::new(vec![0.5, 0.0]));
        assert_eq!(game.combo_remaining(), 2);

        choose(&mut game, &mut ScriptedRng::new(vec![0.5, 0.999]));
        assert_eq!(game.combo_remaining(), 5);
        assert_eq!(game.hit_index(), 1);
        assert!(!game.fighter(Side::Player).is_crit);
    }

    #[test]
    fn forced_crit_draws_nothing_and_is_consumed() {
        let mut game = game();
        game.fighter_mut(Side::Player).buffs.force_crit = true;
        let mut rng = ScriptedRng::constant(0.1);

        choose(&mut game, &mut rng);
        assert_eq!(game.current_action(), StrikeAction::Critical);
        assert_eq!(rng.draws(), 0);
        let player = game.fighter(Side::Player);
        assert!(player.is_crit);
        assert!(!player.buffs.force_crit);
    }

    #[test]
    fn forced_combo_wins_over_forced_crit() {
        let mut game = game();
        let buffs = &mut game.fighter_mut(Side::Player).buffs;
        buffs.force_combo = true;
        buffs.force_crit = true;
        let mut rng = ScriptedRng::constant(0.999);

        choose(&mut game, &mut rng);
        assert_eq!(game.current_action(), StrikeAction::Combo);
        assert_eq!(game.combo_remaining(), 6);
        assert_eq!(rng.draws(), 1);
        let player = game.fighter(Side::Player);
        assert!(!player.buffs.force_combo);
        assert!(player.buffs.force_crit);
        assert!(!player.is_crit);
    }

    #[test]
    fn critical_strike_slot_forces_a_critical() {
        let mut game = game();
        game.start_first_turn().unwrap();
        assert!(game.select_action_slot(Some(EquippedSlot::Skill(AssetId::new(
            "critical_strike"
        )))));
        let mut rng = ScriptedRng::constant(0.1);

        let events = run_decide(&mut game, &mut rng);
        assert_eq!(game.phase(), Phase::Approach);
        assert_eq!(game.current_action(), StrikeAction::Critical);
        assert_eq!(rng.draws(), 0);
        let player = game.fighter(Side::Player);
        assert!(player.is_crit);
        assert!(!player.buffs.force_crit);
        assert!(events.contains(&MatchEvent::ActionChosen {
            side: Side::Player,
            action: StrikeAction::Critical,
            hits: 1,
        }));
    }

    #[test]
    fn heal_on_an_offense_item_reports_hp_and_still_attacks() {
        let mut game = game();
        game.fighter_mut(Side::Player).take_damage(80);
        game.start_first_turn().unwrap();
        let honey = EquippedSlot::Item(game.hero().items[0].instance);
        assert!(game.select_action_slot(Some(honey)));

        let events = run_decide(&mut game, &mut ScriptedRng::constant(0.1));
        let player = game.fighter(Side::Player);
        assert_eq!(player.hp(), 190);
        assert!(events.contains(&MatchEvent::Healed {
            side: Side::Player,
            amount: 50,
        }));
        assert!(events.contains(&MatchEvent::HpChanged {
            side: Side::Player,
            hp: 190,
            max_hp: 220,
        }));
        assert_eq!(game.phase(), Phase::Approach);
        assert_eq!(game.current_action(), StrikeAction::Attack);
    }
}
