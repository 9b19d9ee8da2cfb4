// A simple drained event queue so the presentation layer can react to state
// changes without the controller holding callbacks into UI code.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The visible projection changed; re-render the list and tell the
    /// charts to redraw.
    ProjectionChanged,
    /// The aggregate counters changed.
    StatisticsChanged,
    /// Transient user-facing notification. No failure is fatal; the view
    /// stays interactive and the triggering action can simply be retried.
    Notify { message: String, is_error: bool },
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ViewEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: ViewEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, ViewEvent> {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
