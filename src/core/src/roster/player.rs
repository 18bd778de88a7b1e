use crate::formation::PitchPosition;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The four on-pitch role groups a roster entry can hold.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum PlayerRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerRole {
    pub fn all() -> Vec<PlayerRole> {
        vec![
            PlayerRole::Goalkeeper,
            PlayerRole::Defender,
            PlayerRole::Midfielder,
            PlayerRole::Forward,
        ]
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerRole::Goalkeeper)
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerRole::Goalkeeper => "GK",
            PlayerRole::Defender => "DF",
            PlayerRole::Midfielder => "MF",
            PlayerRole::Forward => "FW",
        }
    }

    /// Cosmetic marker color tag for the role.
    pub fn kit_color(&self) -> &'static str {
        match self {
            PlayerRole::Goalkeeper => "#f59e0b",
            PlayerRole::Defender => "#3b82f6",
            PlayerRole::Midfielder => "#22c55e",
            PlayerRole::Forward => "#ef4444",
        }
    }
}

impl Display for PlayerRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerRole::Goalkeeper => "Goalkeeper",
            PlayerRole::Defender => "Defender",
            PlayerRole::Midfielder => "Midfielder",
            PlayerRole::Forward => "Forward",
        };

        write!(f, "{}", name)
    }
}

/// One roster entry.
///
/// `id` is assigned once by the session's id sequence and never reused.
/// `position` stays `None` until the marker has been placed by a drag;
/// unplaced starters render at their shape's default slot.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub role: PlayerRole,
    pub is_starting: bool,
    pub position: Option<PitchPosition>,
    pub kit_color: &'static str,
}

impl Player {
    pub fn new(id: u32, number: usize, role: PlayerRole, is_starting: bool) -> Self {
        Player {
            id,
            number: number.to_string(),
            name: format!("Player {}", number),
            role,
            is_starting,
            position: None,
            kit_color: role.kit_color(),
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role.is_goalkeeper()
    }
}
