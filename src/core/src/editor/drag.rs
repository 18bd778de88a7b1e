use crate::editor::throttle::{ThrottleGate, DRAG_COMMIT_WINDOW};
use crate::formation::PitchPosition;
use crate::roster::Player;
use log::debug;
use nalgebra::Vector2;
use std::time::Instant;

/// The pitch container rectangle in client (pointer) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PitchBounds {
    pub origin: Vector2<f32>,
    pub width: f32,
    pub height: f32,
}

impl PitchBounds {
    pub fn new(origin: Vector2<f32>, width: f32, height: f32) -> Self {
        PitchBounds {
            origin,
            width,
            height,
        }
    }

    /// Map a client-space pointer to pitch percentages, clamped to the
    /// visible margin band. A degenerate rectangle maps to center.
    pub fn percent_of(&self, pointer: Vector2<f32>) -> PitchPosition {
        if self.width <= 0.0 || self.height <= 0.0 {
            return PitchPosition::center();
        }

        let offset = pointer - self.origin;

        PitchPosition::new(
            offset.y / self.height * 100.0,
            offset.x / self.width * 100.0,
        )
    }
}

/// Outcome of a pointer-down on a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    /// Drag is live. The host applies its global cursor/selection lock now.
    Started { player_id: u32 },
    /// Goalkeepers are immovable.
    IgnoredGoalkeeper,
    /// A drag is already active; a second pointer-down is ignored until the
    /// first drag ends.
    IgnoredActiveDrag,
    IgnoredUnknownPlayer,
}

/// A throttled position commit for the dragged player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    pub player_id: u32,
    pub position: PitchPosition,
}

/// Terminal outcome of a drag. `position` is the last computed position,
/// `None` when the pointer never moved. The host drops its global drag
/// styling on receipt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnd {
    pub player_id: u32,
    pub position: Option<PitchPosition>,
}

#[derive(Debug)]
struct ActiveDrag {
    player_id: u32,
    // Grab point inside the marker, captured for hosts that want to anchor
    // the marker under the pointer. Not used for the committed position.
    #[allow(dead_code)]
    grab_offset: Vector2<f32>,
    last_position: Option<PitchPosition>,
}

/// The per-session drag state machine: Idle -> Dragging -> Idle, one drag
/// at a time. Move commits are rate-limited to one per 16ms window with
/// the latest position winning.
#[derive(Debug)]
pub struct DragController {
    active: Option<ActiveDrag>,
    gate: ThrottleGate<PitchPosition>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        DragController {
            active: None,
            gate: ThrottleGate::new(DRAG_COMMIT_WINDOW),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_player(&self) -> Option<u32> {
        self.active.as_ref().map(|drag| drag.player_id)
    }

    /// Idle -> Dragging, unless the marker is a goalkeeper or another drag
    /// is already live.
    pub fn pointer_down(
        &mut self,
        player: &Player,
        pointer: Vector2<f32>,
        marker_origin: Vector2<f32>,
    ) -> DragStart {
        if self.active.is_some() {
            debug!("pointer-down on {} ignored, drag already active", player.id);
            return DragStart::IgnoredActiveDrag;
        }

        if player.is_goalkeeper() {
            debug!("goalkeeper {} is not draggable", player.id);
            return DragStart::IgnoredGoalkeeper;
        }

        self.active = Some(ActiveDrag {
            player_id: player.id,
            grab_offset: pointer - marker_origin,
            last_position: None,
        });

        DragStart::Started {
            player_id: player.id,
        }
    }

    /// Dragging -> Dragging. No-op when idle or when the container
    /// rectangle is unavailable.
    pub fn pointer_move(
        &mut self,
        pointer: Vector2<f32>,
        bounds: Option<&PitchBounds>,
        now: Instant,
    ) -> Option<DragMove> {
        let active = self.active.as_mut()?;
        let bounds = bounds?;

        let position = bounds.percent_of(pointer);
        active.last_position = Some(position);
        let player_id = active.player_id;

        self.gate
            .offer(position, now)
            .map(|position| DragMove {
                player_id,
                position,
            })
    }

    /// Host timer callback releasing a pending trailing-edge commit.
    pub fn tick(&mut self, now: Instant) -> Option<DragMove> {
        let player_id = self.active.as_ref()?.player_id;

        self.gate.tick(now).map(|position| DragMove {
            player_id,
            position,
        })
    }

    /// Dragging -> Idle. Pointer-up, pointer-leave and pointer-cancel are
    /// equivalent terminal transitions.
    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        self.finish()
    }

    pub fn pointer_leave(&mut self) -> Option<DragEnd> {
        self.finish()
    }

    pub fn pointer_cancel(&mut self) -> Option<DragEnd> {
        self.finish()
    }

    fn finish(&mut self) -> Option<DragEnd> {
        let active = self.active.take()?;

        // The pending slot always mirrors the last computed position;
        // drain it so the next drag starts with a closed window.
        self.gate.flush();

        Some(DragEnd {
            player_id: active.player_id,
            position: active.last_position,
        })
    }
}
