//! Built-in skill and item catalog.
//!
//! Used when no `assets.ron` is available and as the reference for the
//! shipped data file.

use fighter_core::{AssetCatalog, AssetDefinition, AssetEffect, AssetKind, Flourish};

/// Every skill and item the game ships with.
pub fn builtin_definitions() -> Vec<AssetDefinition> {
    vec![
        // ===== skills =====
        AssetDefinition::new("crazy_slash", "Crazy Slash", AssetKind::Skill)
            .with_description("The next attack is always a combo.")
            .with_icon("combo")
            .with_effect(AssetEffect::ForceCombo),
        AssetDefinition::new("critical_strike", "Critical Strike", AssetKind::Skill)
            .with_description("The next attack is always a critical hit.")
            .with_icon("crit")
            .with_effect(AssetEffect::ForceCrit),
        AssetDefinition::new("giants_strength", "Giant's Strength", AssetKind::Skill)
            .with_description("The next attack adds 50% of your strength as damage.")
            .with_icon("power")
            .with_effect(AssetEffect::StrengthBonus { multiplier: 0.5 })
            .with_flourish(Flourish::SpecialPose),
        AssetDefinition::new("fireball", "Fireball", AssetKind::Skill)
            .with_description("Hurls a fireball for bonus damage based on technique.")
            .with_icon("fire")
            .with_effect(AssetEffect::Fireball),
        // ===== offense items =====
        AssetDefinition::new("wooden_sword", "Wooden Sword", AssetKind::Item)
            .with_description("The next attack deals 20% more base damage.")
            .with_icon("sword")
            .with_effect(AssetEffect::AttackBoost { amount: 0.2 })
            .with_flourish(Flourish::HoldWeapon("wooden_sword".into())),
        AssetDefinition::new("dagger", "Dagger", AssetKind::Item)
            .with_description("The next attack gains 50% agility.")
            .with_icon("dagger")
            .with_effect(AssetEffect::AgilityBoost { amount: 0.5 })
            .with_flourish(Flourish::HoldWeapon("dagger".into())),
        AssetDefinition::new("spiked_club", "Spiked Club", AssetKind::Item)
            .with_description("The next attack adds 20% strength and always crits.")
            .with_icon("club")
            .with_effect(AssetEffect::StrengthBonus { multiplier: 0.2 })
            .with_effect(AssetEffect::ForceCrit)
            .with_flourish(Flourish::HoldWeapon("spiked_club".into())),
        // ===== heals =====
        heal("water", "Water", "water", 75),
        heal("banana", "Banana", "banana", 120),
        heal("apple", "Apple", "apple", 180),
        heal("health_potion", "Health Potion", "potion", 240),
        // ===== defense items =====
        AssetDefinition::new("shield", "Shield", AssetKind::Item)
            .with_description("The next hit taken is always blocked.")
            .with_icon("shield")
            .with_effect(AssetEffect::ForceBlock),
        AssetDefinition::new("smokebomb", "Smoke Bomb", AssetKind::Item)
            .with_description("The next hit taken is always dodged.")
            .with_icon("smoke")
            .with_effect(AssetEffect::ForceDodge),
    ]
}

fn heal(id: &str, name: &str, icon: &str, amount: u32) -> AssetDefinition {
    AssetDefinition::new(id, name, AssetKind::Item)
        .with_description(format!("Restores {amount} hp."))
        .with_icon(icon)
        .with_effect(AssetEffect::Heal { amount })
}

/// [`builtin_definitions`] as a ready-to-inject catalog.
pub fn builtin_catalog() -> AssetCatalog {
    AssetCatalog::from_definitions(builtin_definitions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fighter_core::{AssetId, AssetOracle, ProgressionRules};

    #[test]
    fn catalog_holds_every_builtin_asset() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 13);

        let skills = catalog
            .all_definitions()
            .into_iter()
            .filter(|d| d.kind == AssetKind::Skill)
            .count();
        assert_eq!(skills, 4);
    }

    #[test]
    fn every_drop_resolves() {
        let catalog = builtin_catalog();
        for id in ProgressionRules::default().drop_table {
            assert!(catalog.lookup(&id).is_ok(), "{id} missing");
        }
    }

    #[test]
    fn only_defensive_items_end_the_turn() {
        let catalog = builtin_catalog();
        let ends = |id: &str| catalog.lookup(&AssetId::new(id)).unwrap().ends_turn();

        assert!(ends("shield"));
        assert!(ends("smokebomb"));
        assert!(ends("apple"));
        assert!(!ends("dagger"));
        assert!(!ends("spiked_club"));
        assert!(!ends("crazy_slash"));
    }
}
