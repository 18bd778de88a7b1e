use crate::formation::FormationShape;
use std::fmt::{Display, Formatter};

/// Supported squad sizes, 5-a-side through full 11-a-side.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SquadSize {
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
}

impl SquadSize {
    pub fn all() -> Vec<SquadSize> {
        vec![
            SquadSize::Five,
            SquadSize::Six,
            SquadSize::Seven,
            SquadSize::Eight,
            SquadSize::Nine,
            SquadSize::Ten,
            SquadSize::Eleven,
        ]
    }

    pub fn player_count(&self) -> u8 {
        match self {
            SquadSize::Five => 5,
            SquadSize::Six => 6,
            SquadSize::Seven => 7,
            SquadSize::Eight => 8,
            SquadSize::Nine => 9,
            SquadSize::Ten => 10,
            SquadSize::Eleven => 11,
        }
    }

    pub fn from_player_count(count: u8) -> Option<SquadSize> {
        SquadSize::all()
            .into_iter()
            .find(|size| size.player_count() == count)
    }
}

impl Display for SquadSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-a-side", self.player_count())
    }
}

/// Valid tactical shapes per squad size. The first entry of each list is
/// that size's default shape.
pub const SQUAD_SHAPES: &[(SquadSize, &[&str])] = &[
    (SquadSize::Five, &["2-2", "1-2-1", "3-1", "1-1-2"]),
    (SquadSize::Six, &["2-2-1", "3-2", "2-1-2", "1-3-1"]),
    (SquadSize::Seven, &["2-3-1", "3-2-1", "2-2-2", "3-1-2"]),
    (SquadSize::Eight, &["3-3-1", "2-4-1", "3-2-2", "2-3-2"]),
    (SquadSize::Nine, &["3-3-2", "3-4-1", "2-4-2", "4-3-1"]),
    (SquadSize::Ten, &["3-4-2", "4-3-2", "3-3-3", "4-4-1"]),
    (
        SquadSize::Eleven,
        &["4-4-2", "4-3-3", "3-5-2", "4-2-3-1", "5-3-2", "4-5-1"],
    ),
];

/// Ordered list of valid shapes for a squad size, default first.
pub fn shapes_for(squad_size: SquadSize) -> &'static [&'static str] {
    SQUAD_SHAPES
        .iter()
        .find(|(size, _)| *size == squad_size)
        .map(|(_, shapes)| *shapes)
        .unwrap_or(&[])
}

pub fn default_shape(squad_size: SquadSize) -> FormationShape {
    FormationShape::from(shapes_for(squad_size).first().copied().unwrap_or("4-4-2"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_size_has_shapes() {
        for squad_size in SquadSize::all() {
            assert!(!shapes_for(squad_size).is_empty(), "{}", squad_size);
        }
    }

    #[test]
    fn test_shape_outfield_counts_match_squad_size() {
        for squad_size in SquadSize::all() {
            let outfield = (squad_size.player_count() - 1) as usize;

            for shape_key in shapes_for(squad_size) {
                let counts = FormationShape::from(*shape_key).counts();
                assert_eq!(counts.outfield(), outfield, "{} {}", squad_size, shape_key);
            }
        }
    }

    #[test]
    fn test_default_shape_is_first_listed() {
        assert_eq!(default_shape(SquadSize::Eleven).as_str(), "4-4-2");
        assert_eq!(default_shape(SquadSize::Five).as_str(), "2-2");
        assert_eq!(default_shape(SquadSize::Seven).as_str(), "2-3-1");
    }

    #[test]
    fn test_from_player_count_round_trips() {
        for squad_size in SquadSize::all() {
            assert_eq!(
                SquadSize::from_player_count(squad_size.player_count()),
                Some(squad_size)
            );
        }

        assert_eq!(SquadSize::from_player_count(4), None);
        assert_eq!(SquadSize::from_player_count(12), None);
    }
}
