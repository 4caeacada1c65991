use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one redraw.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-redraw
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::geom::Segment;
    use crate::paint::Color;

    fn seg(x: f32) -> Segment {
        Segment::new(Vec2::new(x, 0.0), Vec2::new(x, 1.0))
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_segment(ZIndex::new(10), seg(0.0), Color::opaque(1.0, 0.0, 0.0));
        list.push_segment(ZIndex::new(0), seg(1.0), Color::opaque(0.0, 1.0, 0.0));
        list.push_segment(ZIndex::new(10), seg(2.0), Color::opaque(0.0, 0.0, 1.0));

        let zs: Vec<i32> = list.iter_in_paint_order().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 10, 10]);

        // Equal z keeps insertion order.
        let orders: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(orders, vec![1, 0, 2]);
    }

    #[test]
    fn clear_resets_ordering() {
        let mut list = DrawList::new();
        list.push_segment(ZIndex::new(5), seg(0.0), Color::opaque(1.0, 1.0, 1.0));
        list.clear();

        assert!(list.items().is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_segment(ZIndex::new(5), seg(0.0), Color::opaque(1.0, 1.0, 1.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
