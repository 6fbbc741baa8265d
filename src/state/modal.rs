//! Project detail sheet lifecycle
//!
//! Closing is split in two: the sheet is hidden right away, but the project
//! it shows is only released once the exit transition has played. The
//! release is tied to a [`Ticket`] so a timer from an earlier close can
//! never blank a sheet that was reopened in the meantime.

use std::time::{Duration, Instant};

use super::data::Project;
use super::{Ticket, Tickets};

/// Where the sheet is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ModalPhase {
    Closed,
    /// Visible; still entering while `since` is within the enter duration
    Open { project: Project, since: Instant },
    /// Hidden, but still holding the project until released
    Closing {
        project: Project,
        since: Instant,
        ticket: Ticket,
    },
}

#[derive(Debug, Clone)]
pub struct ModalState {
    phase: ModalPhase,
    tickets: Tickets,
    enter: Duration,
    exit: Duration,
}

impl ModalState {
    pub fn new(enter: Duration, exit: Duration) -> Self {
        Self {
            phase: ModalPhase::Closed,
            tickets: Tickets::default(),
            enter,
            exit,
        }
    }

    /// Show `project` immediately
    pub fn open(&mut self, project: Project, now: Instant) {
        log::debug!("Opening project sheet: {}", project.id);
        self.phase = ModalPhase::Open {
            project,
            since: now,
        };
    }

    /// Hide the sheet. Returns the ticket the caller must hand back to
    /// [`ModalState::release`] once the exit delay has elapsed, or `None`
    /// when the sheet was not open.
    pub fn close(&mut self, now: Instant) -> Option<Ticket> {
        let ModalPhase::Open { project, .. } =
            std::mem::replace(&mut self.phase, ModalPhase::Closed)
        else {
            return None;
        };

        let ticket = self.tickets.next();
        log::debug!("Closing project sheet: {} ({:?})", project.id, ticket);
        self.phase = ModalPhase::Closing {
            project,
            since: now,
            ticket,
        };
        Some(ticket)
    }

    /// Drop the held project if `ticket` belongs to the current close.
    /// Returns true when the sheet reached `Closed`.
    pub fn release(&mut self, ticket: Ticket) -> bool {
        match &self.phase {
            ModalPhase::Closing { ticket: current, .. } if *current == ticket => {
                self.phase = ModalPhase::Closed;
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Open { .. })
    }

    /// The project currently displayed, including during the exit transition
    pub fn project(&self) -> Option<&Project> {
        match &self.phase {
            ModalPhase::Closed => None,
            ModalPhase::Open { project, .. } | ModalPhase::Closing { project, .. } => Some(project),
        }
    }

    /// Visibility in `[0, 1]`: rises while entering, falls while exiting
    pub fn progress(&self, now: Instant) -> f32 {
        match &self.phase {
            ModalPhase::Closed => 0.0,
            ModalPhase::Open { since, .. } => ratio(now.saturating_duration_since(*since), self.enter),
            ModalPhase::Closing { since, .. } => {
                1.0 - ratio(now.saturating_duration_since(*since), self.exit)
            }
        }
    }

    /// Whether a transition is still playing and the view needs frames
    pub fn is_animating(&self, now: Instant) -> bool {
        match &self.phase {
            ModalPhase::Closed => false,
            ModalPhase::Open { since, .. } => now.saturating_duration_since(*since) < self.enter,
            ModalPhase::Closing { .. } => true,
        }
    }

    pub fn exit_delay(&self) -> Duration {
        self.exit
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
