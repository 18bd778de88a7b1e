use crate::formation::PitchPosition;
use crate::roster::{Player, PlayerRole};
use log::debug;

/// Hard cap on simultaneously starting players.
pub const MAX_STARTERS: usize = 11;

/// A single field edit coming from the hosting UI, the typed form of
/// `(playerId, field, value)` events.
#[derive(Debug, Clone)]
pub enum PlayerEdit {
    Name(String),
    Number(String),
    Role(PlayerRole),
    Starting(bool),
}

/// The ordered roster and its membership rules.
///
/// Starter/bench toggles are gated; invalid transitions are silent no-ops
/// (the write simply does not happen), matching a UI where invalid
/// controls are inert. Everything else writes unconditionally.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Roster { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn starter_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_starting).count()
    }

    pub fn starting_goalkeeper_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.is_starting && p.is_goalkeeper())
            .count()
    }

    /// Wholesale replacement - the only way players leave the roster.
    pub fn replace(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    /// Apply one field edit. Returns whether the write happened.
    pub fn apply_edit(&mut self, id: u32, edit: PlayerEdit) -> bool {
        match edit {
            PlayerEdit::Name(name) => match self.player_mut(id) {
                Some(player) => {
                    player.name = name;
                    true
                }
                None => false,
            },
            PlayerEdit::Number(number) => match self.player_mut(id) {
                Some(player) => {
                    player.number = number;
                    true
                }
                None => false,
            },
            // Membership rules bind at toggle time only - a role change is
            // an unconditional write like any other field edit.
            PlayerEdit::Role(role) => match self.player_mut(id) {
                Some(player) => {
                    player.role = role;
                    player.kit_color = role.kit_color();
                    true
                }
                None => false,
            },
            PlayerEdit::Starting(value) => self.set_starting(id, value),
        }
    }

    /// Toggle a player between starter and bench under the membership rules:
    /// at most 11 starters, at most one starting goalkeeper, and never bench
    /// the last starting goalkeeper.
    pub fn set_starting(&mut self, id: u32, value: bool) -> bool {
        let Some(player) = self.player(id) else {
            return false;
        };

        if player.is_starting == value {
            return true;
        }

        if value {
            if self.starter_count() >= MAX_STARTERS {
                debug!("starter cap reached, leaving player {} on the bench", id);
                return false;
            }

            if player.is_goalkeeper() && self.starting_goalkeeper_count() >= 1 {
                debug!("starting goalkeeper already set, ignoring promotion of {}", id);
                return false;
            }
        } else if player.is_goalkeeper() && self.starting_goalkeeper_count() <= 1 {
            debug!("player {} is the last starting goalkeeper, keeping on pitch", id);
            return false;
        }

        if let Some(player) = self.player_mut(id) {
            player.is_starting = value;
            true
        } else {
            false
        }
    }

    /// Position-only write used by the drag commit path. Membership is
    /// untouched.
    pub fn set_position(&mut self, id: u32, position: PitchPosition) -> bool {
        match self.player_mut(id) {
            Some(player) => {
                player.position = Some(position);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::{FormationShape, SquadSize};
    use crate::roster::{IdSequence, PlayerRole, RosterGenerator};

    fn full_roster() -> Roster {
        let mut ids = IdSequence::new();
        Roster::new(RosterGenerator::generate(
            &mut ids,
            &FormationShape::from("4-4-2"),
            SquadSize::Eleven,
        ))
    }

    fn bench_player_id(roster: &Roster, role: PlayerRole) -> u32 {
        roster
            .players()
            .iter()
            .find(|p| !p.is_starting && p.role == role)
            .map(|p| p.id)
            .expect("bench player for role")
    }

    #[test]
    fn test_promotion_past_cap_is_a_no_op() {
        let mut roster = full_roster();
        assert_eq!(roster.starter_count(), 11);

        let bench_id = bench_player_id(&roster, PlayerRole::Defender);
        let applied = roster.apply_edit(bench_id, PlayerEdit::Starting(true));

        assert!(!applied);
        assert_eq!(roster.starter_count(), 11);
        assert!(!roster.player(bench_id).unwrap().is_starting);
    }

    #[test]
    fn test_bench_then_promote_is_idempotent() {
        let mut roster = full_roster();
        let starter_id = roster
            .players()
            .iter()
            .find(|p| p.is_starting && !p.is_goalkeeper())
            .map(|p| p.id)
            .unwrap();

        assert!(roster.apply_edit(starter_id, PlayerEdit::Starting(false)));
        assert_eq!(roster.starter_count(), 10);

        assert!(roster.apply_edit(starter_id, PlayerEdit::Starting(true)));
        assert_eq!(roster.starter_count(), 11);
        assert!(roster.player(starter_id).unwrap().is_starting);
    }

    #[test]
    fn test_second_starting_goalkeeper_is_rejected() {
        let mut roster = full_roster();

        // Open a starter slot so only the goalkeeper rule can reject
        let outfield_id = roster
            .players()
            .iter()
            .find(|p| p.is_starting && !p.is_goalkeeper())
            .map(|p| p.id)
            .unwrap();
        assert!(roster.set_starting(outfield_id, false));

        let bench_keeper = bench_player_id(&roster, PlayerRole::Goalkeeper);
        assert!(!roster.set_starting(bench_keeper, true));
        assert_eq!(roster.starting_goalkeeper_count(), 1);
    }

    #[test]
    fn test_sole_starting_goalkeeper_cannot_be_benched() {
        let mut roster = full_roster();
        let keeper_id = roster
            .players()
            .iter()
            .find(|p| p.is_starting && p.is_goalkeeper())
            .map(|p| p.id)
            .unwrap();

        assert!(!roster.apply_edit(keeper_id, PlayerEdit::Starting(false)));
        assert_eq!(roster.starting_goalkeeper_count(), 1);
    }

    #[test]
    fn test_name_and_number_edits_are_unconditional() {
        let mut roster = full_roster();
        let id = roster.players()[3].id;

        assert!(roster.apply_edit(id, PlayerEdit::Name("Edited".into())));
        assert!(roster.apply_edit(id, PlayerEdit::Number("99".into())));

        let player = roster.player(id).unwrap();
        assert_eq!(player.name, "Edited");
        assert_eq!(player.number, "99");
    }

    #[test]
    fn test_role_edit_is_unconditional_and_refreshes_kit_color() {
        let mut roster = full_roster();
        let keeper_id = roster
            .players()
            .iter()
            .find(|p| p.is_starting && p.is_goalkeeper())
            .map(|p| p.id)
            .unwrap();

        // Even the sole starting goalkeeper can change role; the membership
        // rules only gate starter/bench toggles
        assert!(roster.apply_edit(keeper_id, PlayerEdit::Role(PlayerRole::Forward)));

        let player = roster.player(keeper_id).unwrap();
        assert_eq!(player.role, PlayerRole::Forward);
        assert_eq!(player.kit_color, PlayerRole::Forward.kit_color());
        assert_eq!(roster.starting_goalkeeper_count(), 0);
    }

    #[test]
    fn test_unknown_player_edits_are_ignored() {
        let mut roster = full_roster();

        assert!(!roster.apply_edit(9999, PlayerEdit::Name("Ghost".into())));
        assert!(!roster.set_starting(9999, true));
        assert!(!roster.set_position(9999, PitchPosition::center()));
    }

    #[test]
    fn test_set_position_bypasses_membership_rules() {
        let mut roster = full_roster();
        let keeper_id = roster.players()[0].id;

        assert!(roster.set_position(keeper_id, PitchPosition::new(60.0, 40.0)));
        assert!(roster.player(keeper_id).unwrap().position.is_some());
        assert_eq!(roster.starter_count(), 11);
    }
}
