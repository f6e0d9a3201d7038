//! The four actions an agent can submit for a turn.

/// One discrete move, rendered on the wire as a single character.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Step one cell along the current heading.
    #[strum(serialize = "F")]
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Advance,
    /// Rotate 90° counter-clockwise in place.
    #[strum(serialize = "L")]
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    TurnLeft,
    /// Rotate 90° clockwise in place.
    #[strum(serialize = "R")]
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    TurnRight,
    /// Stay in place and throw along the current heading.
    #[strum(serialize = "T")]
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    Fire,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Advance,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Fire,
    ];

    /// Wire symbol for this action.
    pub const fn symbol(self) -> &'static str {
        match self {
            Action::Advance => "F",
            Action::TurnLeft => "L",
            Action::TurnRight => "R",
            Action::Fire => "T",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn symbols_match_display_and_parse() {
        for action in Action::ALL {
            assert_eq!(action.to_string(), action.symbol());
            assert_eq!(Action::from_str(action.symbol()), Ok(action));
        }
    }}
