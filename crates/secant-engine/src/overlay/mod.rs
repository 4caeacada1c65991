//! Text overlay state.
//!
//! A fixed number of line slots stacked top-down over the drawing surface.
//! The engine only holds the strings; a text collaborator displays them.

/// Number of overlay line slots.
pub const LINE_SLOTS: usize = 3;

/// Overlay text, one string per line slot.
///
/// Slots are 1-based, matching how the display stacks them from the top.
/// Writes to a slot outside `1..=LINE_SLOTS` are ignored (debug builds
/// assert), mirroring how out-of-sequence input is handled elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    lines: [String; LINE_SLOTS],
}

impl Overlay {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text in a 1-based line slot.
    pub fn set(&mut self, slot: usize, text: impl Into<String>) {
        debug_assert!(
            (1..=LINE_SLOTS).contains(&slot),
            "overlay slot {slot} out of range 1..={LINE_SLOTS}"
        );

        if let Some(line) = self.lines.get_mut(slot.wrapping_sub(1)) {
            *line = text.into();
        }
    }

    /// Text of a 1-based line slot. Empty string for an out-of-range slot.
    #[inline]
    pub fn line(&self, slot: usize) -> &str {
        self.lines
            .get(slot.wrapping_sub(1))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All lines, top-down.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_back() {
        let mut overlay = Overlay::new();
        overlay.set(1, "first");
        overlay.set(3, "third");

        assert_eq!(overlay.line(1), "first");
        assert_eq!(overlay.line(2), "");
        assert_eq!(overlay.line(3), "third");
    }

    #[test]
    fn set_overwrites() {
        let mut overlay = Overlay::new();
        overlay.set(2, "a");
        overlay.set(2, "b");
        assert_eq!(overlay.line(2), "b");
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn out_of_range_slot_is_ignored() {
        let mut overlay = Overlay::new();
        overlay.set(0, "nope");
        overlay.set(4, "nope");
        assert!(overlay.lines().iter().all(String::is_empty));
    }

    #[test]
    fn out_of_range_read_is_empty() {
        let overlay = Overlay::new();
        assert_eq!(overlay.line(0), "");
        assert_eq!(overlay.line(99), "");
    }
}
