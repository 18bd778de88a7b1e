/// Tracks which marker the pointer is over, independent of drag state.
/// Drives the auxiliary stats overlay only.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: Option<u32>,
}

impl HoverTracker {
    pub fn new() -> Self {
        HoverTracker::default()
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    pub fn pointer_enter(&mut self, player_id: u32) {
        self.hovered = Some(player_id);
    }

    /// Clears the hover only when the leave matches the recorded marker -
    /// enter events for the next marker can arrive before the previous
    /// marker's leave.
    pub fn pointer_leave(&mut self, player_id: u32) {
        if self.hovered == Some(player_id) {
            self.hovered = None;
        }
    }
}
