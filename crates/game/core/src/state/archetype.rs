/// Creature or class type of a fighter.
///
/// Heroes are `wolf` or `girl`; the rest only appear as enemies.
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
pub enum Archetype {
    Wolf,
    Girl,
    #[strum(serialize = "villain_1")]
    #[cfg_attr(feature = "serde", serde(rename = "villain_1"))]
    Villain1,
    #[strum(serialize = "villain_2")]
    #[cfg_attr(feature = "serde", serde(rename = "villain_2"))]
    Villain2,
    #[strum(serialize = "villain_3")]
    #[cfg_attr(feature = "serde", serde(rename = "villain_3"))]
    Villain3,
    Goblin,
    WildBoar,
    Treant,
}

impl Archetype {
    /// Wolf and Girl are playable; everything else only appears as an enemy.
    pub const fn is_hero(&self) -> bool {
        matches!(self, Self::Wolf | Self::Girl)
    }

    /// Name shown on the health bar of an enemy.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Wolf => "Wolf Boy",
            Self::Girl => "Red Girl",
            Self::Villain1 => "Villain 1",
            Self::Villain2 => "Villain 2",
            Self::Villain3 => "Villain 3",
            Self::Goblin => "Goblin",
            Self::WildBoar => "Wild Boar",
            Self::Treant => "Treant",
        }
    }
}

/// Which corner of the arena a fighter occupies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// Player-controlled hero, starts on the left facing right.
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    /// +1 faces right, -1 faces left.
    pub const fn default_facing(self) -> f32 {
        match self {
            Self::Player => 1.0,
            Self::Enemy => -1.0,
        }
    }
}
