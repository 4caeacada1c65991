/// Pointer event in surface-local pixels (top-left origin, y-down).
///
/// Press and move carry a position; release does not — the sketch resolves
/// the gesture against the last position it saw, falling back to the press
/// position when no move ever arrived.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Released,
}
