use crate::formation::{FormationShape, SquadSize};
use crate::roster::{Player, PlayerRole};
use log::debug;

/// Fixed bench appended to every generated roster: one player per role.
pub const BENCH_SIZE: usize = 4;

/// Monotonic id source owned by the editor session. Ids survive roster
/// replacement, so no id is ever handed out twice within a session.
#[derive(Debug)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence { next: 1 }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

pub struct RosterGenerator;

impl RosterGenerator {
    /// Build a fresh roster for a shape: one goalkeeper, then the shape's
    /// defender/midfielder/forward rows, then the fixed bench, with jersey
    /// numbers running sequentially from 1.
    ///
    /// Output length is always `1 + defenders + midfielders + forwards +
    /// BENCH_SIZE`. The generator does not apply the 11-starter cap - a
    /// fresh roster is authoritative as generated, and the cap binds only
    /// the later starter/bench toggle rule.
    pub fn generate(
        ids: &mut IdSequence,
        shape: &FormationShape,
        squad_size: SquadSize,
    ) -> Vec<Player> {
        let counts = shape.counts();

        let mut players = Vec::with_capacity(1 + counts.outfield() + BENCH_SIZE);
        let mut number = 0;

        let mut spawn = |role: PlayerRole, is_starting: bool| {
            number += 1;
            Player::new(ids.next_id(), number, role, is_starting)
        };

        players.push(spawn(PlayerRole::Goalkeeper, true));

        for _ in 0..counts.defenders {
            players.push(spawn(PlayerRole::Defender, true));
        }

        for _ in 0..counts.midfielders {
            players.push(spawn(PlayerRole::Midfielder, true));
        }

        for _ in 0..counts.forwards {
            players.push(spawn(PlayerRole::Forward, true));
        }

        for role in PlayerRole::all() {
            players.push(spawn(role, false));
        }

        debug!(
            "generated {} roster for shape {}: {} starters, {} bench",
            squad_size,
            shape,
            players.len() - BENCH_SIZE,
            BENCH_SIZE
        );

        players
    }
}
