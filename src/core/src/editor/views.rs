use crate::formation::{FormationShape, PitchPercent};
use serde::Serialize;

/// Serializable snapshot of the editor state - the shape a presentation
/// layer renders as positioned markers and the raster-export collaborator
/// snapshots.
#[derive(Debug, Serialize)]
pub struct RosterView {
    pub squad_size: u8,
    pub shape: FormationShape,
    pub players: Vec<PlayerView>,
}

#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub role: &'static str,
    pub kit_color: &'static str,
    pub is_starting: bool,
    pub top: PitchPercent,
    pub left: PitchPercent,
}
