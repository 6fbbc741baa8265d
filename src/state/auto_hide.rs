//! Auto-hiding mobile category bar
//!
//! A [`Sentinel`] watches the gallery scroll offset and fires whenever the
//! top of the content comes back into view. Each firing re-arms an
//! [`AutoHide`]: the bar becomes visible and only the most recent hide
//! timer is allowed to take it down again.

use super::{Ticket, Tickets};

/// Edge detector for "scrolled back to the top"
#[derive(Debug, Clone)]
pub struct Sentinel {
    threshold: f32,
    intersecting: Option<bool>,
}

impl Sentinel {
    /// `threshold` is the scroll offset (in logical pixels) at or below
    /// which the sentinel counts as visible
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            intersecting: None,
        }
    }

    /// Feed a new scroll offset. Returns true when the sentinel has just
    /// entered the viewport, including on the very first observation.
    pub fn observe(&mut self, offset_y: f32) -> bool {
        let now = offset_y <= self.threshold;
        let was = self.intersecting.replace(now);
        now && was != Some(true)
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting.unwrap_or(false)
    }
}

/// Visibility flag that clears itself after a delay unless re-triggered
#[derive(Debug, Clone, Default)]
pub struct AutoHide {
    visible: bool,
    pending: Option<Ticket>,
    tickets: Tickets,
}

impl AutoHide {
    /// Show and arm a fresh hide. Any ticket handed out before is now stale.
    pub fn trigger(&mut self) -> Ticket {
        let ticket = self.tickets.next();
        self.visible = true;
        self.pending = Some(ticket);
        ticket
    }

    /// Hide if `ticket` is the one armed by the latest trigger.
    /// Returns true when the flag was cleared.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_fires_on_first_observation_at_top() {
        let mut sentinel = Sentinel::new(1.0);
        assert!(sentinel.observe(0.0));
        assert!(sentinel.is_intersecting());
    }

    #[test]
    fn test_sentinel_fires_only_on_entry() {
        let mut sentinel = Sentinel::new(1.0);
        assert!(!sentinel.observe(200.0));
        assert!(!sentinel.observe(120.0));
        assert!(sentinel.observe(0.5));
        assert!(!sentinel.observe(0.0));
        assert!(!sentinel.observe(80.0));
        assert!(sentinel.observe(0.0));
    }

    #[test]
    fn test_trigger_then_expire_hides() {
        let mut bar = AutoHide::default();
        let ticket = bar.trigger();
        assert!(bar.is_visible());

        assert!(bar.expire(ticket));
        assert!(!bar.is_visible());
    }

    #[test]
    fn test_retrigger_resets_timer() {
        let mut bar = AutoHide::default();
        let first = bar.trigger();
        let second = bar.trigger();

        // The first timer firing must not hide the bar early
        assert!(!bar.expire(first));
        assert!(bar.is_visible());

        assert!(bar.expire(second));
        assert!(!bar.is_visible());
    }

    #[test]
    fn test_expire_twice_is_harmless() {
        let mut bar = AutoHide::default();
        let ticket = bar.trigger();
        assert!(bar.expire(ticket));
        assert!(!bar.expire(ticket));
        assert!(!bar.is_visible());
    }
}
