use arena_core::{Action, DirectionClassification};

/// Which branch of the policy applies, derived from the threat count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// Nobody is aimed at us: hunt.
    Engage,
    /// Exactly one opponent is aimed at us: fight it.
    Duel,
    /// Two or more opponents are aimed at us: break line of sight.
    Survival,
}

impl Mode {
    pub fn from_threat_count(threats: usize) -> Self {
        match threats {
            0 => Mode::Engage,
            1 => Mode::Duel,
            _ => Mode::Survival,
        }
    }
}

/// Outcome of one decision plus the evidence it was based on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub mode: Mode,
    pub threat_count: usize,
    pub classification: DirectionClassification,
}
