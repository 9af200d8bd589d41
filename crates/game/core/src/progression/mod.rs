//! Match rewards and hero progression.
//!
//! Turns a finished match into a [`ProfileUpdate`]: experience, levels,
//! unlocked skills, loot and the defeated-boss key. The core only computes
//! what changes; storing it is up to the caller via
//! [`HeroProfile::apply_update`].

mod roster;

pub use roster::{enemy_stats, generate_roster};

use crate::env::{AssetId, RngOracle};
use crate::state::{Archetype, EnemyProfile, HeroProfile, InstanceId, ItemInstance};

/// A skill learned when a hero of `archetype` reaches `level`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillUnlock {
    pub archetype: Archetype,
    pub level: u32,
    pub skill: AssetId,
}

/// Tunable reward and levelling parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionRules {
    /// Experience per enemy level before the level-difference factor.
    pub exp_per_enemy_level: f64,
    /// Factor change per level the enemy is above the hero.
    pub level_diff_step: f64,
    pub min_exp_factor: f64,
    pub boss_exp_multiplier: f64,

    /// `max_exp = floor(base * growth^(level - 1))`
    pub base_max_exp: f64,
    pub max_exp_growth: f64,
    pub points_per_level: u32,

    /// Level the hero cannot leave until `cap_unlock_boss` is defeated.
    pub level_cap: u32,
    pub cap_unlock_boss: String,

    pub skill_unlocks: Vec<SkillUnlock>,

    pub min_drops: u32,
    pub max_drops: u32,
    pub drop_table: Vec<AssetId>,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            exp_per_enemy_level: 35.0,
            level_diff_step: 0.1,
            min_exp_factor: 0.1,
            boss_exp_multiplier: 2.0,
            base_max_exp: 100.0,
            max_exp_growth: 1.25,
            points_per_level: 5,
            level_cap: 10,
            cap_unlock_boss: "treant_10".to_owned(),
            skill_unlocks: vec![
                SkillUnlock {
                    archetype: Archetype::Wolf,
                    level: 6,
                    skill: AssetId::new("critical_strike"),
                },
                SkillUnlock {
                    archetype: Archetype::Girl,
                    level: 7,
                    skill: AssetId::new("fireball"),
                },
            ],
            min_drops: 1,
            max_drops: 3,
            drop_table: [
                "water",
                "banana",
                "apple",
                "health_potion",
                "shield",
                "smokebomb",
                "wooden_sword",
                "dagger",
                "spiked_club",
            ]
            .into_iter()
            .map(AssetId::new)
            .collect(),
        }
    }
}

impl ProgressionRules {
    pub fn max_exp(&self, level: u32) -> u32 {
        let exponent = level.saturating_sub(1) as i32;
        (self.base_max_exp * self.max_exp_growth.powi(exponent)).floor() as u32
    }

    pub fn exp_gain(&self, enemy_level: u32, hero_level: u32, is_boss: bool) -> u32 {
        let diff = f64::from(enemy_level) - f64::from(hero_level);
        let factor = (1.0 + diff * self.level_diff_step).max(self.min_exp_factor);
        let mut exp = f64::from(enemy_level) * self.exp_per_enemy_level * factor;
        if is_boss {
            exp *= self.boss_exp_multiplier;
        }
        exp.floor() as u32
    }
}

/// Experience needed to leave `level` under the default rules.
pub fn max_exp_for_level(level: u32) -> u32 {
    ProgressionRules::default().max_exp(level)
}

/// Experience for beating an enemy under the default rules.
pub fn compute_exp_gain(enemy_level: u32, hero_level: u32, is_boss: bool) -> u32 {
    ProgressionRules::default().exp_gain(enemy_level, hero_level, is_boss)
}

/// Inputs to reward computation at the end of a match.
#[derive(Clone, Copy, Debug)]
pub struct RewardContext<'a> {
    pub hero: &'a HeroProfile,
    pub enemy: &'a EnemyProfile,
    /// Item copies used up during the match.
    pub consumed_items: &'a [InstanceId],
}

/// Profile changes produced by one finished match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileUpdate {
    pub exp_gained: u32,
    pub level: u32,
    pub exp: u32,
    pub max_exp: u32,
    pub points_gained: u32,
    pub leveled_up: bool,
    /// The level loop stopped at the cap.
    pub level_capped: bool,
    pub new_skills: Vec<AssetId>,
    pub drops: Vec<ItemInstance>,
    pub defeated_boss: Option<String>,
    pub consumed_items: Vec<InstanceId>,
}

impl ProfileUpdate {
    /// Update for a lost match: only the consumed items change.
    pub fn consumed_only(hero: &HeroProfile, consumed_items: &[InstanceId]) -> Self {
        Self {
            level: hero.level,
            exp: hero.exp,
            max_exp: hero.max_exp,
            consumed_items: consumed_items.to_vec(),
            ..Self::default()
        }
    }
}

/// Computes experience, levels, unlocks and loot for a won match.
///
/// Draws from `rng` only for the loot: one draw for the count, one per item.
pub fn compute_rewards(
    ctx: RewardContext<'_>,
    rules: &ProgressionRules,
    rng: &mut (impl RngOracle + ?Sized),
) -> ProfileUpdate {
    let hero = ctx.hero;
    let enemy = ctx.enemy;

    let mut update = ProfileUpdate::consumed_only(hero, ctx.consumed_items);
    update.exp_gained = rules.exp_gain(enemy.level, hero.level, enemy.is_boss);

    // The boss key counts towards the level cap right away.
    let mut defeated = hero.defeated_bosses.clone();
    if enemy.is_boss {
        let key = enemy.boss_key();
        if !defeated.contains(&key) {
            defeated.push(key.clone());
        }
        update.defeated_boss = Some(key);
    }

    update.exp = hero.exp.saturating_add(update.exp_gained);
    while update.exp >= update.max_exp {
        if update.level == rules.level_cap && !defeated.contains(&rules.cap_unlock_boss) {
            update.exp = update.max_exp.saturating_sub(1);
            update.level_capped = true;
            break;
        }

        update.exp -= update.max_exp;
        update.level += 1;
        update.max_exp = rules.max_exp(update.level);
        update.points_gained += rules.points_per_level;
        update.leveled_up = true;

        for unlock in &rules.skill_unlocks {
            if unlock.archetype == hero.archetype
                && unlock.level == update.level
                && !hero.skills.contains(&unlock.skill)
                && !update.new_skills.contains(&unlock.skill)
            {
                update.new_skills.push(unlock.skill.clone());
            }
        }
    }

    update.drops = roll_drops(hero, rules, rng);
    update
}

fn roll_drops(
    hero: &HeroProfile,
    rules: &ProgressionRules,
    rng: &mut (impl RngOracle + ?Sized),
) -> Vec<ItemInstance> {
    if rules.drop_table.is_empty() {
        return Vec::new();
    }
    let count = rng.range(rules.min_drops, rules.max_drops);
    let first = hero.next_instance_id().0;
    (0..u64::from(count))
        .map(|offset| {
            let item = rules.drop_table[rng.pick_index(rules.drop_table.len())].clone();
            ItemInstance::new(item, InstanceId(first + offset))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::Stats;

    fn wolf(level: u32) -> HeroProfile {
        HeroProfile::new("Wolf Boy", Archetype::Wolf, level, Stats::new(18, 25, 15), 0)
            .with_skill("crazy_slash")
            .with_item("apple")
    }

    fn goblin(level: u32) -> EnemyProfile {
        EnemyProfile::new(Archetype::Goblin, level, enemy_stats(Archetype::Goblin, level), false)
    }

    #[test]
    fn max_exp_curve() {
        assert_eq!(max_exp_for_level(1), 100);
        assert_eq!(max_exp_for_level(2), 125);
        assert_eq!(max_exp_for_level(5), 244);
    }

    #[test]
    fn exp_scales_with_level_difference_and_boss() {
        assert_eq!(compute_exp_gain(5, 5, false), 175);
        assert_eq!(compute_exp_gain(7, 5, false), 294);
        // Far weaker enemies are floored at 10%.
        assert_eq!(compute_exp_gain(1, 20, false), 3);
        assert_eq!(compute_exp_gain(10, 10, true), 700);
    }

    #[test]
    fn wolf_learns_critical_strike_at_six() {
        let hero = wolf(5);
        let enemy = goblin(5);
        let mut rng = ScriptedRng::constant(0.0);

        let update = compute_rewards(
            RewardContext {
                hero: &hero,
                enemy: &enemy,
                consumed_items: &[],
            },
            &ProgressionRules::default(),
            &mut rng,
        );

        // 175 exp against 244 needed: no level yet.
        assert!(!update.leveled_up);
        assert_eq!(update.exp, 175);

        let mut hero = hero;
        hero.exp = 100;
        let update = compute_rewards(
            RewardContext {
                hero: &hero,
                enemy: &enemy,
                consumed_items: &[],
            },
            &ProgressionRules::default(),
            &mut rng,
        );
        assert!(update.leveled_up);
        assert_eq!(update.level, 6);
        assert_eq!(update.exp, 275 - 244);
        assert_eq!(update.max_exp, 305);
        assert_eq!(update.points_gained, 5);
        assert_eq!(update.new_skills, vec![AssetId::new("critical_strike")]);
    }

    #[test]
    fn level_ten_is_capped_until_the_treant_falls() {
        let mut hero = wolf(10);
        hero.exp = hero.max_exp - 10;
        let enemy = goblin(9);
        let mut rng = ScriptedRng::constant(0.0);
        let rules = ProgressionRules::default();

        let update = compute_rewards(
            RewardContext {
                hero: &hero,
                enemy: &enemy,
                consumed_items: &[],
            },
            &rules,
            &mut rng,
        );
        assert!(update.level_capped);
        assert_eq!(update.level, 10);
        assert_eq!(update.exp, hero.max_exp - 1);

        let treant = EnemyProfile::new(Archetype::Treant, 10, enemy_stats(Archetype::Treant, 10), true);
        let update = compute_rewards(
            RewardContext {
                hero: &hero,
                enemy: &treant,
                consumed_items: &[],
            },
            &rules,
            &mut rng,
        );
        assert_eq!(update.defeated_boss.as_deref(), Some("treant_10"));
        assert!(!update.level_capped);
        assert_eq!(update.level, 11);
    }

    #[test]
    fn drops_get_fresh_instance_ids() {
        let hero = wolf(3);
        let enemy = goblin(3);
        // count draw 0.99 -> 3 drops, then picks
        let mut rng = ScriptedRng::new(vec![0.99, 0.0, 0.5, 0.99]);

        let update = compute_rewards(
            RewardContext {
                hero: &hero,
                enemy: &enemy,
                consumed_items: &[InstanceId(1)],
            },
            &ProgressionRules::default(),
            &mut rng,
        );

        let ids: Vec<_> = update.drops.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["water", "shield", "spiked_club"]);
        let instances: Vec<_> = update.drops.iter().map(|d| d.instance.0).collect();
        assert_eq!(instances, [2, 3, 4]);
        assert_eq!(update.consumed_items, vec![InstanceId(1)]);
    }

    #[test]
    fn applying_an_update_writes_the_profile() {
        let mut hero = wolf(5);
        hero.exp = 100;
        let enemy = goblin(5);
        let mut rng = ScriptedRng::constant(0.0);
        let update = compute_rewards(
            RewardContext {
                hero: &hero,
                enemy: &enemy,
                consumed_items: &[InstanceId(1)],
            },
            &ProgressionRules::default(),
            &mut rng,
        );

        hero.apply_update(&update);

        assert_eq!(hero.level, 6);
        assert_eq!(hero.points, 5);
        assert!(hero.skills.contains(&AssetId::new("critical_strike")));
        assert_eq!(hero.items.len(), 1);
        assert_eq!(hero.items[0].id, AssetId::new("water"));
        assert_eq!(hero.items[0].instance, InstanceId(2));
    }
}
