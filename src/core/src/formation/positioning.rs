use crate::formation::FormationShape;
use crate::roster::PlayerRole;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Markers never sit closer than this to the pitch edge.
pub const PITCH_MARGIN_MIN: f32 = 5.0;
pub const PITCH_MARGIN_MAX: f32 = 95.0;

/// Normalized percentage-of-pitch coordinate, clamped to the visible
/// margin band. Renders and serializes as a CSS-style percent string
/// ("42%"), which is the form the presentation layer consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchPercent(f32);

impl PitchPercent {
    pub fn new(value: f32) -> Self {
        PitchPercent(value.clamp(PITCH_MARGIN_MIN, PITCH_MARGIN_MAX))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Display for PitchPercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for PitchPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A marker position on the pitch rectangle: offsets from the top and left
/// edges, both in [5%, 95%].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchPosition {
    pub top: PitchPercent,
    pub left: PitchPercent,
}

impl PitchPosition {
    pub fn new(top: f32, left: f32) -> Self {
        PitchPosition {
            top: PitchPercent::new(top),
            left: PitchPercent::new(left),
        }
    }

    /// Fallback for any lookup miss: the middle of the pitch.
    pub fn center() -> Self {
        PitchPosition::new(50.0, 50.0)
    }
}

/// Default marker coordinates for one shape, one ordered (top, left) pair
/// per expected player of each role.
pub struct ShapePositioning {
    pub shape: &'static str,
    pub goalkeeper: &'static [(f32, f32)],
    pub defenders: &'static [(f32, f32)],
    pub midfielders: &'static [(f32, f32)],
    pub forwards: &'static [(f32, f32)],
}

impl ShapePositioning {
    pub fn role_slots(&self, role: PlayerRole) -> &'static [(f32, f32)] {
        match role {
            PlayerRole::Goalkeeper => self.goalkeeper,
            PlayerRole::Defender => self.defenders,
            PlayerRole::Midfielder => self.midfielders,
            PlayerRole::Forward => self.forwards,
        }
    }
}

/// Resolve the default marker position for (shape, role, index within role).
///
/// Unknown shape, a role with no entries for that shape, or an index past
/// the list all fall back to the center of the pitch. This is deliberate
/// policy for malformed lookups, not an error path.
pub fn default_position(
    shape: &FormationShape,
    role: PlayerRole,
    index_within_role: usize,
) -> PitchPosition {
    let Some(positioning) = SHAPE_POSITIONING
        .iter()
        .find(|positioning| positioning.shape == shape.as_str())
    else {
        return PitchPosition::center();
    };

    positioning
        .role_slots(role)
        .get(index_within_role)
        .map(|&(top, left)| PitchPosition::new(top, left))
        .unwrap_or_else(PitchPosition::center)
}

/// Default on-pitch coordinates for every catalogued shape. Own goal at the
/// bottom of the rectangle, attack toward the top. (top%, left%) pairs.
pub const SHAPE_POSITIONING: &[ShapePositioning] = &[
    // 5-a-side
    ShapePositioning {
        shape: "2-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(65.0, 32.0), (65.0, 68.0)],
        midfielders: &[(32.0, 32.0), (32.0, 68.0)],
        forwards: &[],
    },
    ShapePositioning {
        shape: "1-2-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 50.0)],
        midfielders: &[(45.0, 25.0), (45.0, 75.0)],
        forwards: &[(22.0, 50.0)],
    },
    ShapePositioning {
        shape: "3-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(65.0, 25.0), (65.0, 50.0), (65.0, 75.0)],
        midfielders: &[(30.0, 50.0)],
        forwards: &[],
    },
    ShapePositioning {
        shape: "1-1-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 50.0)],
        midfielders: &[(45.0, 50.0)],
        forwards: &[(22.0, 32.0), (22.0, 68.0)],
    },
    // 6-a-side
    ShapePositioning {
        shape: "2-2-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 32.0), (68.0, 68.0)],
        midfielders: &[(42.0, 32.0), (42.0, 68.0)],
        forwards: &[(20.0, 50.0)],
    },
    ShapePositioning {
        shape: "3-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(65.0, 25.0), (65.0, 50.0), (65.0, 75.0)],
        midfielders: &[(32.0, 35.0), (32.0, 65.0)],
        forwards: &[],
    },
    ShapePositioning {
        shape: "2-1-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 32.0), (68.0, 68.0)],
        midfielders: &[(45.0, 50.0)],
        forwards: &[(22.0, 32.0), (22.0, 68.0)],
    },
    ShapePositioning {
        shape: "1-3-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 50.0)],
        midfielders: &[(45.0, 22.0), (45.0, 50.0), (45.0, 78.0)],
        forwards: &[(20.0, 50.0)],
    },
    // 7-a-side
    ShapePositioning {
        shape: "2-3-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 32.0), (68.0, 68.0)],
        midfielders: &[(44.0, 22.0), (44.0, 50.0), (44.0, 78.0)],
        forwards: &[(20.0, 50.0)],
    },
    ShapePositioning {
        shape: "3-2-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 25.0), (68.0, 50.0), (68.0, 75.0)],
        midfielders: &[(44.0, 35.0), (44.0, 65.0)],
        forwards: &[(20.0, 50.0)],
    },
    ShapePositioning {
        shape: "2-2-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 32.0), (68.0, 68.0)],
        midfielders: &[(44.0, 32.0), (44.0, 68.0)],
        forwards: &[(20.0, 32.0), (20.0, 68.0)],
    },
    ShapePositioning {
        shape: "3-1-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(68.0, 25.0), (68.0, 50.0), (68.0, 75.0)],
        midfielders: &[(44.0, 50.0)],
        forwards: &[(20.0, 35.0), (20.0, 65.0)],
    },
    // 8-a-side
    ShapePositioning {
        shape: "3-3-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 25.0), (70.0, 50.0), (70.0, 75.0)],
        midfielders: &[(45.0, 25.0), (45.0, 50.0), (45.0, 75.0)],
        forwards: &[(20.0, 50.0)],
    },
    ShapePositioning {
        shape: "2-4-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 35.0), (70.0, 65.0)],
        midfielders: &[(45.0, 15.0), (45.0, 38.0), (45.0, 62.0), (45.0, 85.0)],
        forwards: &[(20.0, 50.0)],
    },
    ShapePositioning {
        shape: "3-2-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 25.0), (70.0, 50.0), (70.0, 75.0)],
        midfielders: &[(45.0, 35.0), (45.0, 65.0)],
        forwards: &[(20.0, 35.0), (20.0, 65.0)],
    },
    ShapePositioning {
        shape: "2-3-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 35.0), (70.0, 65.0)],
        midfielders: &[(45.0, 25.0), (45.0, 50.0), (45.0, 75.0)],
        forwards: &[(20.0, 35.0), (20.0, 65.0)],
    },
    // 9-a-side
    ShapePositioning {
        shape: "3-3-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 25.0), (70.0, 50.0), (70.0, 75.0)],
        midfielders: &[(45.0, 25.0), (45.0, 50.0), (45.0, 75.0)],
        forwards: &[(22.0, 35.0), (22.0, 65.0)],
    },
    ShapePositioning {
        shape: "3-4-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 25.0), (70.0, 50.0), (70.0, 75.0)],
        midfielders: &[(45.0, 15.0), (45.0, 38.0), (45.0, 62.0), (45.0, 85.0)],
        forwards: &[(20.0, 50.0)],
    },
    ShapePositioning {
        shape: "2-4-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 35.0), (70.0, 65.0)],
        midfielders: &[(45.0, 15.0), (45.0, 38.0), (45.0, 62.0), (45.0, 85.0)],
        forwards: &[(22.0, 35.0), (22.0, 65.0)],
    },
    ShapePositioning {
        shape: "4-3-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 15.0), (70.0, 38.0), (70.0, 62.0), (70.0, 85.0)],
        midfielders: &[(45.0, 25.0), (45.0, 50.0), (45.0, 75.0)],
        forwards: &[(20.0, 50.0)],
    },
    // 10-a-side
    ShapePositioning {
        shape: "3-4-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 25.0), (70.0, 50.0), (70.0, 75.0)],
        midfielders: &[(45.0, 15.0), (45.0, 38.0), (45.0, 62.0), (45.0, 85.0)],
        forwards: &[(22.0, 35.0), (22.0, 65.0)],
    },
    ShapePositioning {
        shape: "4-3-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 15.0), (70.0, 38.0), (70.0, 62.0), (70.0, 85.0)],
        midfielders: &[(45.0, 25.0), (45.0, 50.0), (45.0, 75.0)],
        forwards: &[(22.0, 35.0), (22.0, 65.0)],
    },
    ShapePositioning {
        shape: "3-3-3",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 25.0), (70.0, 50.0), (70.0, 75.0)],
        midfielders: &[(45.0, 25.0), (45.0, 50.0), (45.0, 75.0)],
        forwards: &[(22.0, 25.0), (20.0, 50.0), (22.0, 75.0)],
    },
    ShapePositioning {
        shape: "4-4-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 15.0), (70.0, 38.0), (70.0, 62.0), (70.0, 85.0)],
        midfielders: &[(45.0, 15.0), (45.0, 38.0), (45.0, 62.0), (45.0, 85.0)],
        forwards: &[(20.0, 50.0)],
    },
    // 11-a-side
    ShapePositioning {
        shape: "4-4-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 15.0), (70.0, 38.0), (70.0, 62.0), (70.0, 85.0)],
        midfielders: &[(45.0, 15.0), (45.0, 38.0), (45.0, 62.0), (45.0, 85.0)],
        forwards: &[(22.0, 38.0), (22.0, 62.0)],
    },
    ShapePositioning {
        shape: "4-3-3",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 15.0), (70.0, 38.0), (70.0, 62.0), (70.0, 85.0)],
        midfielders: &[(48.0, 28.0), (48.0, 50.0), (48.0, 72.0)],
        forwards: &[(22.0, 20.0), (18.0, 50.0), (22.0, 80.0)],
    },
    ShapePositioning {
        shape: "3-5-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 28.0), (70.0, 50.0), (70.0, 72.0)],
        midfielders: &[
            (45.0, 10.0),
            (48.0, 32.0),
            (50.0, 50.0),
            (48.0, 68.0),
            (45.0, 90.0),
        ],
        forwards: &[(22.0, 38.0), (22.0, 62.0)],
    },
    ShapePositioning {
        shape: "4-2-3-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(72.0, 15.0), (72.0, 38.0), (72.0, 62.0), (72.0, 85.0)],
        midfielders: &[(55.0, 38.0), (55.0, 62.0)],
        forwards: &[(35.0, 20.0), (32.0, 50.0), (35.0, 80.0), (15.0, 50.0)],
    },
    ShapePositioning {
        shape: "5-3-2",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[
            (70.0, 10.0),
            (70.0, 30.0),
            (70.0, 50.0),
            (70.0, 70.0),
            (70.0, 90.0),
        ],
        midfielders: &[(45.0, 28.0), (45.0, 50.0), (45.0, 72.0)],
        forwards: &[(22.0, 38.0), (22.0, 62.0)],
    },
    ShapePositioning {
        shape: "4-5-1",
        goalkeeper: &[(88.0, 50.0)],
        defenders: &[(70.0, 15.0), (70.0, 38.0), (70.0, 62.0), (70.0, 85.0)],
        midfielders: &[
            (45.0, 10.0),
            (47.0, 32.0),
            (49.0, 50.0),
            (47.0, 68.0),
            (45.0, 90.0),
        ],
        forwards: &[(20.0, 50.0)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::catalog::{shapes_for, SquadSize};

    #[test]
    fn test_default_position_known_slot() {
        let shape = FormationShape::from("4-4-2");

        let keeper = default_position(&shape, PlayerRole::Goalkeeper, 0);
        assert_eq!(keeper.top.value(), 88.0);
        assert_eq!(keeper.left.value(), 50.0);

        let second_forward = default_position(&shape, PlayerRole::Forward, 1);
        assert_eq!(second_forward.top.value(), 22.0);
        assert_eq!(second_forward.left.value(), 62.0);
    }

    #[test]
    fn test_default_position_unknown_shape_falls_back_to_center() {
        let position = default_position(&FormationShape::from("9-9-9"), PlayerRole::Defender, 0);

        assert_eq!(position, PitchPosition::center());
    }

    #[test]
    fn test_default_position_index_past_list_falls_back_to_center() {
        let shape = FormationShape::from("4-4-2");

        let position = default_position(&shape, PlayerRole::Forward, 7);
        assert_eq!(position, PitchPosition::center());

        // "2-2" lists no forwards at all
        let position = default_position(&FormationShape::from("2-2"), PlayerRole::Forward, 0);
        assert_eq!(position, PitchPosition::center());
    }

    #[test]
    fn test_default_position_never_panics_on_garbage() {
        for shape in ["", "x", "---", "4-4-2-1-1-1"] {
            for role in PlayerRole::all() {
                for index in [0, 1, 99, usize::MAX] {
                    let position = default_position(&FormationShape::from(shape), role, index);
                    assert!(position.top.value() >= PITCH_MARGIN_MIN);
                    assert!(position.top.value() <= PITCH_MARGIN_MAX);
                }
            }
        }
    }

    #[test]
    fn test_every_catalogued_shape_has_matching_slot_counts() {
        for squad_size in SquadSize::all() {
            for shape_key in shapes_for(squad_size) {
                let positioning = SHAPE_POSITIONING
                    .iter()
                    .find(|p| p.shape == *shape_key)
                    .unwrap_or_else(|| panic!("no positioning for {}", shape_key));

                let counts = FormationShape::from(*shape_key).counts();

                assert_eq!(positioning.goalkeeper.len(), 1, "{}", shape_key);
                assert_eq!(positioning.defenders.len(), counts.defenders, "{}", shape_key);
                assert_eq!(
                    positioning.midfielders.len(),
                    counts.midfielders,
                    "{}",
                    shape_key
                );
                assert_eq!(positioning.forwards.len(), counts.forwards, "{}", shape_key);
            }
        }
    }

    #[test]
    fn test_table_coordinates_stay_inside_margin_band() {
        for positioning in SHAPE_POSITIONING {
            for role in PlayerRole::all() {
                for &(top, left) in positioning.role_slots(role) {
                    assert!((PITCH_MARGIN_MIN..=PITCH_MARGIN_MAX).contains(&top));
                    assert!((PITCH_MARGIN_MIN..=PITCH_MARGIN_MAX).contains(&left));
                }
            }
        }
    }

    #[test]
    fn test_percent_renders_as_css_string() {
        assert_eq!(PitchPercent::new(42.0).to_string(), "42%");
        assert_eq!(PitchPercent::new(37.5).to_string(), "37.5%");
        assert_eq!(PitchPercent::new(120.0).to_string(), "95%");
        assert_eq!(PitchPercent::new(-3.0).to_string(), "5%");
    }
}
