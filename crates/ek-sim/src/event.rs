use std::fmt;

use ek_core::Label;

/// The viewport axis a reflection occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis (left/right walls).
    X,
    /// Vertical axis (top/bottom walls).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    /// A particle crossed a wall on one axis and had that velocity
    /// component flipped.
    WallBounce {
        /// The particle that bounced.
        label: Label,
        /// The axis whose velocity component flipped.
        axis: Axis,
    },
    /// A particle crossed walls on both axes in the same frame, flipping
    /// both velocity components.
    CornerBounce {
        /// The particle that bounced.
        label: Label,
    },
}

impl SimEventKind {
    /// Check whether a given particle is involved in this event.
    pub fn involves(&self, label: Label) -> bool {
        match self {
            Self::WallBounce { label: l, .. } | Self::CornerBounce { label: l } => *l == label,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The frame when this event occurred.
    pub frame: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given frame, kind, and description.
    pub fn new(frame: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            frame,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given frame.
    pub fn events_at_frame(&self, frame: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.frame == frame).collect()
    }

    /// Return all events involving the given particle.
    pub fn events_for(&self, label: Label) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.involves(label))
            .collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounce(frame: u64, label: Label, axis: Axis) -> SimEvent {
        SimEvent::new(
            frame,
            SimEventKind::WallBounce { label, axis },
            format!("{label} bounced off the {axis} wall"),
        )
    }

    #[test]
    fn event_log_push_and_query() {
        let mut log = EventLog::new(0);
        let a = Label::sequence(0);
        log.push(bounce(1, a, Axis::X));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events_at_frame(1).len(), 1);
        assert_eq!(log.events_for(a).len(), 1);
    }

    #[test]
    fn event_log_max_events_trims() {
        let mut log = EventLog::new(2);
        let a = Label::sequence(0);
        for i in 0..5 {
            log.push(bounce(i, a, Axis::Y));
        }
        assert_eq!(log.len(), 2);
        // Oldest events were dropped, newest remain
        assert_eq!(log.events()[0].frame, 3);
        assert_eq!(log.events()[1].frame, 4);
    }

    #[test]
    fn event_kind_involves_label() {
        let a = Label::sequence(0);
        let b = Label::sequence(1);

        let kind = SimEventKind::WallBounce {
            label: a,
            axis: Axis::X,
        };
        assert!(kind.involves(a));
        assert!(!kind.involves(b));

        let kind = SimEventKind::CornerBounce { label: b };
        assert!(kind.involves(b));
        assert!(!kind.involves(a));
    }

    #[test]
    fn event_log_multi_frame_filtering() {
        let mut log = EventLog::new(0);
        let a = Label::sequence(0);
        let b = Label::sequence(1);
        log.push(bounce(1, a, Axis::X));
        log.push(bounce(1, b, Axis::Y));
        log.push(bounce(2, a, Axis::Y));

        assert_eq!(log.events_at_frame(1).len(), 2);
        assert_eq!(log.events_at_frame(2).len(), 1);
        assert_eq!(log.events_at_frame(3).len(), 0);
        assert_eq!(log.events_for(a).len(), 2);
        assert_eq!(log.events_for(b).len(), 1);
    }

    #[test]
    fn event_log_clear() {
        let mut log = EventLog::new(0);
        log.push(bounce(1, Label::sequence(0), Axis::X));
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Y.to_string(), "y");
    }
}
