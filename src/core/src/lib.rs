pub mod editor;
pub mod formation;
pub mod roster;

// Re-export editor items
pub use editor::{
    DragController, DragEnd, DragMove, DragStart, EditorSession, ExportError, ExportOptions,
    FormationSelection, HoverTracker, ImageFormat, PitchBounds, PlayerView, RasterExporter,
    RosterView, ThrottleGate, DRAG_COMMIT_WINDOW,
};

// Re-export formation items
pub use formation::{
    default_position, default_shape, shapes_for, FormationShape, PitchPercent, PitchPosition,
    ShapeCounts, ShapePositioning, SquadSize, PITCH_MARGIN_MAX, PITCH_MARGIN_MIN,
    SHAPE_POSITIONING, SQUAD_SHAPES,
};

// Re-export roster items
pub use roster::{
    IdSequence, Player, PlayerEdit, PlayerRole, Roster, RosterGenerator, BENCH_SIZE, MAX_STARTERS,
};

pub use nalgebra::Vector2;
