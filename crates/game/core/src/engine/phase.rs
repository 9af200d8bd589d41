/// Stage of the turn state machine.
///
/// ```text
/// Decide -> Approach -> Act -> Impact -> { Act (combo) | Retreat } -> Wait -> Decide
/// ```
///
/// Defensive items and heals jump from Decide straight to Wait.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Decide,
    Approach,
    Act,
    Impact,
    Retreat,
    Wait,
}

/// Kind of attack chosen in the Decide phase.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StrikeAction {
    #[default]
    Attack,
    /// Several hits without re-approaching.
    Combo,
    /// Guaranteed crit.
    Critical,
}
