/// Session phase.
///
/// `Done` is terminal for pointer input; only [`Sketch::reset`] leaves it.
///
/// [`Sketch::reset`]: super::Sketch::reset
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Phase {
    /// Nothing committed, no drag in progress.
    #[default]
    Idle,
    /// First gesture: anchor is the circle center, drag length the radius.
    DraggingCircle,
    /// Circle committed, waiting for the segment gesture.
    CircleCommitted,
    /// Second gesture: anchor and drag end are the segment endpoints.
    DraggingLine,
    /// Both entities committed, intersections computed.
    Done,
}

impl Phase {
    /// Phases in which a pointer press starts a new gesture.
    #[inline]
    pub fn accepts_press(self) -> bool {
        matches!(self, Phase::Idle | Phase::CircleCommitted)
    }

    /// Phases with an active drag (anchor recorded, preview live).
    #[inline]
    pub fn is_dragging(self) -> bool {
        matches!(self, Phase::DraggingCircle | Phase::DraggingLine)
    }
}
