/// The three attributes every fighter carries.
///
/// - **STR** (Strength): base damage and max hp
/// - **AGI** (Agility): dodge chance, crit chance, critical action weight
/// - **TEC** (Technique): block chance, combo weight, fireball bonus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub str: u32,
    pub agi: u32,
    pub tec: u32,
}

impl Stats {
    pub const fn new(str: u32, agi: u32, tec: u32) -> Self {
        Self { str, agi, tec }
    }

    pub const fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Str => self.str,
            Stat::Agi => self.agi,
            Stat::Tec => self.tec,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Str => &mut self.str,
            Stat::Agi => &mut self.agi,
            Stat::Tec => &mut self.tec,
        }
    }
}

/// Selector for one attribute, used by point allocation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    Str,
    Agi,
    Tec,
}
