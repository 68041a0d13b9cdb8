//! Scroll synchronization: after any change to the active item, bring
//! its row fully into the scroll viewport with the minimum adjustment.
//!
//! The synchronizer depends only on the narrow [`ScrollSurface`]
//! capability, not on how the list is rendered.

/// Vertical extent of an element, in the viewport's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalRect {
    pub top: i64,
    pub bottom: i64,
}

/// Geometry side-channel onto the realized list layout.
pub trait ScrollSurface {
    /// Extent of the active item, if one is resolvable right now.
    fn active_item_rect(&self) -> Option<VerticalRect>;
    /// Extent of the scrollable viewport, if it is mounted.
    fn viewport_rect(&self) -> Option<VerticalRect>;
    /// Adjust the scroll offset by a signed amount.
    fn scroll_by(&mut self, delta: i64);
}

/// Ensure the active item is fully visible.
///
/// A missing item or viewport is a normal transient state during
/// mount/unmount races and is silently skipped. At most one adjustment
/// is made, top-edge check first; re-running on an already-visible item
/// is a no-op.
pub fn sync_active_item<S: ScrollSurface>(surface: &mut S) {
    let (Some(item), Some(view)) = (surface.active_item_rect(), surface.viewport_rect()) else {
        return;
    };
    if item.top < view.top {
        surface.scroll_by(item.top - view.top);
    } else if item.bottom > view.bottom {
        surface.scroll_by(item.bottom - view.bottom);
    }
}

/// Row-based scroll viewport over the rendered entry list.
///
/// Geometry is refreshed from the realized layout on every draw; item
/// rects are expressed relative to the viewport's own top edge.
#[derive(Debug, Default)]
pub struct ListViewport {
    /// First content row currently scrolled past.
    offset: i64,
    /// Viewport height in rows; zero while unmounted.
    height: i64,
    /// Rows per list item.
    row_height: i64,
    item_count: i64,
    active_index: Option<i64>,
}

impl ListViewport {
    pub fn new(row_height: u16) -> Self {
        Self {
            row_height: i64::from(row_height.max(1)),
            ..Default::default()
        }
    }

    /// Record the realized layout for this draw cycle.
    pub fn set_layout(&mut self, height_rows: u16, item_count: usize) {
        self.height = i64::from(height_rows);
        self.item_count = item_count as i64;
        self.clamp_offset();
    }

    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.active_index = index.map(|i| i as i64);
    }

    /// Index of the first visible item.
    pub fn first_visible_item(&self) -> usize {
        (self.offset / self.row_height.max(1)) as usize
    }

    pub fn offset_rows(&self) -> i64 {
        self.offset
    }

    fn max_offset(&self) -> i64 {
        (self.item_count * self.row_height - self.height).max(0)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(0, self.max_offset());
    }
}

impl ScrollSurface for ListViewport {
    fn active_item_rect(&self) -> Option<VerticalRect> {
        if self.height == 0 {
            return None;
        }
        let index = self.active_index?;
        if index < 0 || index >= self.item_count {
            return None;
        }
        let top = index * self.row_height - self.offset;
        Some(VerticalRect {
            top,
            bottom: top + self.row_height,
        })
    }

    fn viewport_rect(&self) -> Option<VerticalRect> {
        if self.height == 0 {
            return None;
        }
        Some(VerticalRect {
            top: 0,
            bottom: self.height,
        })
    }

    fn scroll_by(&mut self, delta: i64) {
        self.offset += delta;
        self.clamp_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSurface {
        item: Option<VerticalRect>,
        view: Option<VerticalRect>,
        scrolled: Vec<i64>,
    }

    impl FakeSurface {
        fn new(item: Option<VerticalRect>, view: Option<VerticalRect>) -> Self {
            Self {
                item,
                view,
                scrolled: Vec::new(),
            }
        }
    }

    impl ScrollSurface for FakeSurface {
        fn active_item_rect(&self) -> Option<VerticalRect> {
            self.item
        }
        fn viewport_rect(&self) -> Option<VerticalRect> {
            self.view
        }
        fn scroll_by(&mut self, delta: i64) {
            self.scrolled.push(delta);
            if let Some(item) = self.item.as_mut() {
                item.top -= delta;
                item.bottom -= delta;
            }
        }
    }

    fn rect(top: i64, bottom: i64) -> VerticalRect {
        VerticalRect { top, bottom }
    }

    #[test]
    fn item_above_viewport_scrolls_up_by_the_difference() {
        let mut surface = FakeSurface::new(Some(rect(50, 90)), Some(rect(100, 300)));
        sync_active_item(&mut surface);
        assert_eq!(surface.scrolled, vec![-50]);
    }

    #[test]
    fn item_below_viewport_scrolls_down_by_the_difference() {
        let mut surface = FakeSurface::new(Some(rect(250, 350)), Some(rect(100, 300)));
        sync_active_item(&mut surface);
        assert_eq!(surface.scrolled, vec![50]);
    }

    #[test]
    fn visible_item_needs_no_adjustment() {
        let mut surface = FakeSurface::new(Some(rect(120, 160)), Some(rect(100, 300)));
        sync_active_item(&mut surface);
        assert!(surface.scrolled.is_empty());
    }

    #[test]
    fn sync_is_idempotent() {
        let mut surface = FakeSurface::new(Some(rect(250, 350)), Some(rect(100, 300)));
        sync_active_item(&mut surface);
        sync_active_item(&mut surface);
        // One adjustment on the first run, no-op on the second.
        assert_eq!(surface.scrolled, vec![50]);
    }

    #[test]
    fn missing_item_or_viewport_is_skipped() {
        let mut surface = FakeSurface::new(None, Some(rect(100, 300)));
        sync_active_item(&mut surface);
        assert!(surface.scrolled.is_empty());

        let mut surface = FakeSurface::new(Some(rect(50, 90)), None);
        sync_active_item(&mut surface);
        assert!(surface.scrolled.is_empty());
    }

    #[test]
    fn viewport_scrolls_active_row_into_view() {
        let mut viewport = ListViewport::new(1);
        viewport.set_layout(10, 100);
        viewport.set_active_index(Some(25));

        sync_active_item(&mut viewport);
        // Row 25 lands flush with the viewport bottom.
        assert_eq!(viewport.offset_rows(), 16);
        assert_eq!(viewport.first_visible_item(), 16);

        viewport.set_active_index(Some(3));
        sync_active_item(&mut viewport);
        assert_eq!(viewport.offset_rows(), 3);
    }

    #[test]
    fn unmounted_viewport_reports_no_geometry() {
        let mut viewport = ListViewport::new(1);
        viewport.set_active_index(Some(2));
        assert!(viewport.viewport_rect().is_none());
        assert!(viewport.active_item_rect().is_none());
        sync_active_item(&mut viewport);
        assert_eq!(viewport.offset_rows(), 0);
    }

    #[test]
    fn offset_clamps_when_the_list_shrinks() {
        let mut viewport = ListViewport::new(2);
        viewport.set_layout(10, 50);
        viewport.scroll_by(80);
        assert_eq!(viewport.offset_rows(), 80); // 50*2 - 10 = 90 max
        viewport.set_layout(10, 10);
        assert_eq!(viewport.offset_rows(), 10); // 10*2 - 10
    }
}
