use std::time::{Duration, Instant};

/// Drag-move commit window, ~60 Hz.
pub const DRAG_COMMIT_WINDOW: Duration = Duration::from_millis(16);

/// Single-slot trailing-edge throttle.
///
/// Offers inside an open window coalesce into one pending slot (last value
/// wins) and are released when the window elapses - by a later offer or by
/// the host's timer calling `tick`. There is no queue; at most one value is
/// in flight. The gate never reads the clock itself, `now` comes from the
/// host event loop.
#[derive(Debug)]
pub struct ThrottleGate<T> {
    window: Duration,
    window_opened: Option<Instant>,
    pending: Option<T>,
}

impl<T> ThrottleGate<T> {
    pub fn new(window: Duration) -> Self {
        ThrottleGate {
            window,
            window_opened: None,
            pending: None,
        }
    }

    /// Store a value in the pending slot, replacing any previous one.
    /// Returns the value to commit when the window has already elapsed.
    pub fn offer(&mut self, value: T, now: Instant) -> Option<T> {
        self.pending = Some(value);

        match self.window_opened {
            None => {
                self.window_opened = Some(now);
                None
            }
            Some(opened) if now.duration_since(opened) >= self.window => self.release(now),
            Some(_) => None,
        }
    }

    /// Timer callback: release the pending value once the window is over.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        match self.window_opened {
            Some(opened) if now.duration_since(opened) >= self.window => self.release(now),
            _ => None,
        }
    }

    /// Drain the pending slot unconditionally and close the window. Used on
    /// terminal drag transitions so the final value always lands.
    pub fn flush(&mut self) -> Option<T> {
        self.window_opened = None;
        self.pending.take()
    }

    fn release(&mut self, now: Instant) -> Option<T> {
        let value = self.pending.take();

        self.window_opened = if value.is_some() { Some(now) } else { None };

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn test_offers_inside_window_coalesce_to_latest() {
        let base = Instant::now();
        let mut gate: ThrottleGate<u32> = ThrottleGate::new(DRAG_COMMIT_WINDOW);

        assert_eq!(gate.offer(1, at(base, 0)), None);
        assert_eq!(gate.offer(2, at(base, 5)), None);
        assert_eq!(gate.offer(3, at(base, 10)), None);

        // Window elapses: only the latest value is released
        assert_eq!(gate.tick(at(base, 16)), Some(3));
        assert_eq!(gate.tick(at(base, 17)), None);
    }

    #[test]
    fn test_late_offer_releases_itself() {
        let base = Instant::now();
        let mut gate: ThrottleGate<u32> = ThrottleGate::new(DRAG_COMMIT_WINDOW);

        assert_eq!(gate.offer(1, at(base, 0)), None);
        assert_eq!(gate.offer(2, at(base, 20)), Some(2));
    }

    #[test]
    fn test_commit_cadence_is_one_per_window() {
        let base = Instant::now();
        let mut gate: ThrottleGate<u32> = ThrottleGate::new(DRAG_COMMIT_WINDOW);

        let mut commits = Vec::new();
        for step in 0..12u64 {
            // Moves every 4ms for 48ms
            if let Some(value) = gate.offer(step as u32, at(base, step * 4)) {
                commits.push((step * 4, value));
            }
        }

        // 16ms cadence: commits at 16ms and 32ms, always the latest value
        assert_eq!(commits, vec![(16, 4), (32, 8)]);
    }

    #[test]
    fn test_flush_drains_pending_and_closes_window() {
        let base = Instant::now();
        let mut gate: ThrottleGate<u32> = ThrottleGate::new(DRAG_COMMIT_WINDOW);

        gate.offer(1, at(base, 0));
        gate.offer(2, at(base, 3));

        assert_eq!(gate.flush(), Some(2));
        assert_eq!(gate.flush(), None);

        // Next offer starts a fresh window
        assert_eq!(gate.offer(3, at(base, 4)), None);
        assert_eq!(gate.tick(at(base, 20)), Some(3));
    }

    #[test]
    fn test_tick_without_pending_closes_window() {
        let base = Instant::now();
        let mut gate: ThrottleGate<u32> = ThrottleGate::new(DRAG_COMMIT_WINDOW);

        gate.offer(1, at(base, 0));
        assert_eq!(gate.tick(at(base, 16)), Some(1));
        assert_eq!(gate.tick(at(base, 40)), None);

        // Window closed again: a quiet period then a new offer re-arms
        assert_eq!(gate.offer(2, at(base, 60)), None);
        assert_eq!(gate.tick(at(base, 76)), Some(2));
    }
}
