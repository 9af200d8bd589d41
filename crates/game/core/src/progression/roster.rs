//! Enemy roster offered to a hero in the lobby.

use crate::env::RngOracle;
use crate::state::{Archetype, EnemyProfile, Stats};

/// `(base, per_level)` growth of one stat.
type Growth = (f64, f64);

const fn growth(archetype: Archetype) -> [Growth; 3] {
    match archetype {
        Archetype::Villain1 => [(10.0, 1.5), (10.0, 1.5), (10.0, 1.5)],
        Archetype::Villain2 => [(15.0, 2.0), (8.0, 1.0), (10.0, 1.2)],
        Archetype::Villain3 => [(10.0, 1.5), (15.0, 2.0), (15.0, 2.0)],
        Archetype::Goblin => [(8.0, 1.2), (12.0, 1.8), (8.0, 1.0)],
        Archetype::WildBoar => [(12.0, 2.2), (6.0, 0.8), (10.0, 1.1)],
        Archetype::Treant => [(15.0, 1.5), (5.0, 0.5), (15.0, 1.5)],
        Archetype::Wolf | Archetype::Girl => [(10.0, 0.0), (10.0, 0.0), (10.0, 0.0)],
    }
}

/// Stats of an enemy of `archetype` at `level`: `floor(base + level * k)`.
pub fn enemy_stats(archetype: Archetype, level: u32) -> Stats {
    let [str, agi, tec] = growth(archetype).map(|(base, per_level)| {
        (base + f64::from(level) * per_level).floor() as u32
    });
    Stats::new(str, agi, tec)
}

/// Generates the three opponents for a hero of `hero_level`.
///
/// | hero level | enemies |
/// |---|---|
/// | 1-4 | goblin, wild boar, goblin at `max(1, hero_level + {0,1})` |
/// | 5-10 | goblin, wild boar at 5-9; treant boss at 10 |
/// | 11+ | villain 1, villain 2 at 10-14; villain 3 boss at 15 |
///
/// Draws once per non-boss enemy.
pub fn generate_roster(hero_level: u32, rng: &mut (impl RngOracle + ?Sized)) -> Vec<EnemyProfile> {
    let lineup: [(Archetype, &str); 3] = match hero_level {
        0..=4 => [
            (Archetype::Goblin, "Goblin"),
            (Archetype::WildBoar, "Little Boar"),
            (Archetype::Goblin, "Goblin Scout"),
        ],
        5..=10 => [
            (Archetype::Goblin, "Forest Goblin"),
            (Archetype::WildBoar, "Raging Boar"),
            (Archetype::Treant, "Withered Treant"),
        ],
        _ => [
            (Archetype::Villain1, "Shadow Guard"),
            (Archetype::Villain2, "Black Brute"),
            (Archetype::Villain3, "Dark Ninja"),
        ],
    };

    lineup
        .into_iter()
        .enumerate()
        .map(|(slot, (archetype, name))| {
            let is_boss = hero_level >= 5 && slot == 2;
            let level = match hero_level {
                0..=4 => (hero_level + rng.range(0, 1)).max(1),
                5..=10 if is_boss => 10,
                5..=10 => rng.range(5, 9),
                _ if is_boss => 15,
                _ => rng.range(10, 14),
            };
            EnemyProfile::new(archetype, level, enemy_stats(archetype, level), is_boss)
                .with_name(name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn stats_follow_growth_table() {
        assert_eq!(enemy_stats(Archetype::Goblin, 5), Stats::new(14, 21, 13));
        assert_eq!(enemy_stats(Archetype::Treant, 10), Stats::new(30, 10, 30));
        assert_eq!(enemy_stats(Archetype::Villain2, 3), Stats::new(21, 11, 13));
    }

    #[test]
    fn early_roster_tracks_hero_level() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.9, 0.0]);
        let roster = generate_roster(3, &mut rng);

        let levels: Vec<_> = roster.iter().map(|e| e.level).collect();
        assert_eq!(levels, [3, 4, 3]);
        assert!(roster.iter().all(|e| !e.is_boss));
        assert_eq!(roster[1].archetype, Archetype::WildBoar);
    }

    #[test]
    fn forest_roster_ends_with_the_treant_boss() {
        let mut rng = ScriptedRng::constant(0.99);
        let roster = generate_roster(10, &mut rng);

        assert_eq!(roster[0].level, 9);
        let boss = &roster[2];
        assert!(boss.is_boss);
        assert_eq!(boss.boss_key(), "treant_10");
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn late_roster_uses_villains() {
        let mut rng = ScriptedRng::constant(0.0);
        let roster = generate_roster(11, &mut rng);

        assert_eq!(roster[0].archetype, Archetype::Villain1);
        assert_eq!(roster[0].level, 10);
        assert_eq!(roster[2].archetype, Archetype::Villain3);
        assert_eq!(roster[2].level, 15);
        assert!(roster[2].is_boss);
    }
}
