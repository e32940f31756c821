use crate::coords::Vec2;

use super::{DrawCmd, SortKey, ZIndex};

/// Index into [`DrawList::clips`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClipId(pub usize);

/// A clip region: path data translated by `origin`, further limited by `parent`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPath {
    pub d: String,
    pub origin: Vec2,
    pub parent: Option<ClipId>,
}

/// A single draw item: sort key + command + clip + group opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Innermost active clip at push time. `None` = no clipping.
    pub clip: Option<ClipId>,
    /// Product of all active group opacities at push time.
    pub opacity: f32,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
///
/// # Clipping and opacity
///
/// [`push_clip_path`](Self::push_clip_path) / [`pop_clip`](Self::pop_clip) and
/// [`push_opacity`](Self::push_opacity) / [`pop_opacity`](Self::pop_opacity)
/// scope every command pushed in between. Clips nest through `ClipPath::parent`;
/// opacities multiply.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    clips: Vec<ClipPath>,
    clip_stack: Vec<ClipId>,
    opacity_stack: Vec<f32>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears items, clips and both stacks. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clips.clear();
        self.clip_stack.clear();
        self.opacity_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All clip regions recorded this frame, indexed by [`ClipId`].
    #[inline]
    pub fn clips(&self) -> &[ClipPath] {
        &self.clips
    }

    #[inline]
    pub fn clip(&self, id: ClipId) -> Option<&ClipPath> {
        self.clips.get(id.0)
    }

    /// Current group opacity (`1.0` when no group is active).
    #[inline]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip and group opacity.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip: self.clip_stack.last().copied(),
            opacity: self.current_opacity(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a clip region bounded by path `d` translated by `origin`.
    ///
    /// Calls must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip_path(&mut self, d: impl Into<String>, origin: Vec2) -> ClipId {
        let id = ClipId(self.clips.len());
        self.clips.push(ClipPath {
            d: d.into(),
            origin,
            parent: self.clip_stack.last().copied(),
        });
        self.clip_stack.push(id);
        id
    }

    /// Ends the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip_path`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip_path");
        self.clip_stack.pop();
    }

    /// Begins a group whose commands are multiplied by `opacity`.
    #[inline]
    pub fn push_opacity(&mut self, opacity: f32) {
        let o = if opacity.is_finite() { opacity.clamp(0.0, 1.0) } else { 1.0 };
        let effective = self.current_opacity() * o;
        self.opacity_stack.push(effective);
    }

    /// Ends the most recent opacity group.
    #[inline]
    pub fn pop_opacity(&mut self) {
        debug_assert!(!self.opacity_stack.is_empty(), "pop_opacity called without matching push_opacity");
        self.opacity_stack.pop();
    }

    /// Sorts into paint order (back-to-front) if anything changed since the last sort.
    pub fn sort(&mut self) {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
    }

    /// Iterates items in paint order. Call [`sort`](Self::sort) first.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &DrawItem> {
        debug_assert!(!self.sorted_dirty, "iter_sorted called on an unsorted DrawList");
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Sorts if needed and iterates items in paint order.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        self.sort();
        self.iter_sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn rect(list: &mut DrawList, z: i32, x: f32) {
        list.push_solid_rect(ZIndex::new(z), Rect::new(x, 0.0, 1.0, 1.0), Color::black());
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.rect.origin.x,
                DrawCmd::Path(p) => p.origin.x,
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        rect(&mut list, 2, 0.0);
        rect(&mut list, 0, 1.0);
        rect(&mut list, 2, 2.0);
        rect(&mut list, 1, 3.0);
        assert_eq!(xs(&mut list), vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn clips_nest_through_parents() {
        let mut list = DrawList::new();
        let outer = list.push_clip_path("M0 0 L10 0 L10 10 Z", Vec2::zero());
        rect(&mut list, 0, 0.0);
        let inner = list.push_clip_path("M1 1 L2 1 L2 2 Z", Vec2::new(5.0, 5.0));
        rect(&mut list, 0, 1.0);
        list.pop_clip();
        rect(&mut list, 0, 2.0);
        list.pop_clip();
        rect(&mut list, 0, 3.0);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip).collect();
        assert_eq!(clips, vec![Some(outer), Some(inner), Some(outer), None]);
        assert_eq!(list.clip(inner).unwrap().parent, Some(outer));
        assert_eq!(list.clip(outer).unwrap().parent, None);
    }

    #[test]
    fn opacity_groups_multiply() {
        let mut list = DrawList::new();
        list.push_opacity(0.5);
        list.push_opacity(0.5);
        rect(&mut list, 0, 0.0);
        list.pop_opacity();
        rect(&mut list, 0, 1.0);
        list.pop_opacity();
        rect(&mut list, 0, 2.0);
        let opacities: Vec<f32> = list.items().iter().map(|i| i.opacity).collect();
        assert_eq!(opacities, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.push_clip_path("M0 0 Z", Vec2::zero());
        list.push_opacity(0.1);
        rect(&mut list, 0, 0.0);
        list.clear();
        assert!(list.is_empty());
        assert!(list.clips().is_empty());
        assert_eq!(list.current_opacity(), 1.0);
        rect(&mut list, 0, 0.0);
        assert_eq!(list.items()[0].clip, None);
    }
}
