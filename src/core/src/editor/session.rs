use crate::editor::drag::{DragController, DragEnd, DragMove, DragStart, PitchBounds};
use crate::editor::export::{ExportError, ExportOptions, RasterExporter};
use crate::editor::hover::HoverTracker;
use crate::editor::selection::FormationSelection;
use crate::editor::views::{PlayerView, RosterView};
use crate::formation::{default_position, FormationShape, PitchPosition, SquadSize};
use crate::roster::{IdSequence, PlayerEdit, Roster, RosterGenerator};
use itertools::Itertools;
use log::warn;
use nalgebra::Vector2;
use std::time::Instant;

/// One editor session: the single owner of all mutable builder state -
/// formation selection, roster, drag machine, hover. Every transition runs
/// synchronously inside one host event.
pub struct EditorSession {
    selection: FormationSelection,
    roster: Roster,
    drag: DragController,
    hover: HoverTracker,
    ids: IdSequence,
}

impl EditorSession {
    pub fn new(squad_size: SquadSize) -> Self {
        let selection = FormationSelection::new(squad_size);
        let mut ids = IdSequence::new();
        let roster = Roster::new(RosterGenerator::generate(
            &mut ids,
            selection.shape(),
            squad_size,
        ));

        EditorSession {
            selection,
            roster,
            drag: DragController::new(),
            hover: HoverTracker::new(),
            ids,
        }
    }

    pub fn squad_size(&self) -> SquadSize {
        self.selection.squad_size()
    }

    pub fn shape(&self) -> &FormationShape {
        self.selection.shape()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Change the squad size: the shape resets to the size's first default
    /// and the roster is regenerated wholesale. Previous ids never
    /// reappear; manual positioning is discarded.
    pub fn set_squad_size(&mut self, squad_size: SquadSize) {
        self.selection.set_squad_size(squad_size);
        self.regenerate();
    }

    /// Change the shape and regenerate the roster wholesale.
    pub fn set_shape(&mut self, shape: FormationShape) {
        self.selection.set_shape(shape);
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let players = RosterGenerator::generate(
            &mut self.ids,
            self.selection.shape(),
            self.selection.squad_size(),
        );
        self.roster.replace(players);

        // Any in-flight drag or hover now refers to discarded ids
        self.drag.pointer_cancel();
        self.hover = HoverTracker::new();
    }

    /// Membership-gated field edit; returns whether the write happened.
    pub fn apply_edit(&mut self, player_id: u32, edit: PlayerEdit) -> bool {
        self.roster.apply_edit(player_id, edit)
    }

    // --- Drag events -------------------------------------------------

    pub fn pointer_down(
        &mut self,
        player_id: u32,
        pointer: Vector2<f32>,
        marker_origin: Vector2<f32>,
    ) -> DragStart {
        match self.roster.player(player_id) {
            Some(player) => self.drag.pointer_down(player, pointer, marker_origin),
            None => DragStart::IgnoredUnknownPlayer,
        }
    }

    pub fn pointer_move(
        &mut self,
        pointer: Vector2<f32>,
        bounds: Option<&PitchBounds>,
        now: Instant,
    ) -> Option<DragMove> {
        let committed = self.drag.pointer_move(pointer, bounds, now);
        self.apply_move(committed)
    }

    /// Host timer callback for the trailing edge of the move throttle.
    pub fn throttle_tick(&mut self, now: Instant) -> Option<DragMove> {
        let committed = self.drag.tick(now);
        self.apply_move(committed)
    }

    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        let end = self.drag.pointer_up();
        self.apply_end(end)
    }

    pub fn pointer_leave(&mut self) -> Option<DragEnd> {
        let end = self.drag.pointer_leave();
        self.apply_end(end)
    }

    pub fn pointer_cancel(&mut self) -> Option<DragEnd> {
        let end = self.drag.pointer_cancel();
        self.apply_end(end)
    }

    pub fn dragged_player(&self) -> Option<u32> {
        self.drag.dragged_player()
    }

    fn apply_move(&mut self, committed: Option<DragMove>) -> Option<DragMove> {
        if let Some(drag_move) = committed {
            self.roster.set_position(drag_move.player_id, drag_move.position);
        }

        committed
    }

    fn apply_end(&mut self, end: Option<DragEnd>) -> Option<DragEnd> {
        if let Some(DragEnd {
            player_id,
            position: Some(position),
        }) = end
        {
            self.roster.set_position(player_id, position);
        }

        end
    }

    // --- Hover events ------------------------------------------------

    pub fn marker_enter(&mut self, player_id: u32) {
        self.hover.pointer_enter(player_id);
    }

    pub fn marker_leave(&mut self, player_id: u32) {
        self.hover.pointer_leave(player_id);
    }

    pub fn hovered_player(&self) -> Option<u32> {
        self.hover.hovered()
    }

    // --- Output ------------------------------------------------------

    /// Where a marker renders right now: the committed drag position if one
    /// exists, else the shape's default slot for the player's role (counted
    /// among starters of that role), else center. Bench players sit at
    /// center until dragged.
    pub fn resolved_position(&self, player_id: u32) -> PitchPosition {
        let Some(player) = self.roster.player(player_id) else {
            return PitchPosition::center();
        };

        if let Some(position) = player.position {
            return position;
        }

        if !player.is_starting {
            return PitchPosition::center();
        }

        let index_within_role = self
            .roster
            .players()
            .iter()
            .filter(|p| p.is_starting && p.role == player.role)
            .position(|p| p.id == player_id)
            .unwrap_or(0);

        default_position(self.selection.shape(), player.role, index_within_role)
    }

    pub fn view(&self) -> RosterView {
        let players = self
            .roster
            .players()
            .iter()
            .map(|player| {
                let position = self.resolved_position(player.id);

                PlayerView {
                    id: player.id,
                    number: player.number.clone(),
                    name: player.name.clone(),
                    role: player.role.short_name(),
                    kit_color: player.kit_color,
                    is_starting: player.is_starting,
                    top: position.top,
                    left: position.left,
                }
            })
            .collect_vec();

        RosterView {
            squad_size: self.selection.squad_size().player_count(),
            shape: self.selection.shape().clone(),
            players,
        }
    }

    /// Hand the current snapshot to the raster-export collaborator. A
    /// failed export is logged and reported; roster state is untouched.
    pub fn export_raster(
        &self,
        exporter: &mut dyn RasterExporter,
        options: &ExportOptions,
    ) -> Result<Vec<u8>, ExportError> {
        let view = self.view();

        exporter.export(&view, options).map_err(|err| {
            warn!("raster export failed: {}", err);
            err
        })
    }
}
