//! Window chrome layout and hit-testing.
//!
//! Chrome is computed, not stored: given a window's frame rectangle and its
//! behavioral flags, the header band, control buttons, drag region and resize
//! affordance are deterministic rectangles. The manager hit-tests pointer
//! presses against this layout; renderers use the same layout to draw, so the
//! two can never disagree.

use crate::geometry::Rect;

/// Chrome dimensions in surface units.
///
/// The default suits pixel-like surfaces; terminal backends use
/// [`ChromeMetrics::terminal`] where one cell is one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeMetrics {
    pub header_height: u32,
    pub control_width: u32,
    pub resize_handle: u32,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            header_height: 24,
            control_width: 24,
            resize_handle: 16,
        }
    }
}

impl ChromeMetrics {
    pub fn terminal() -> Self {
        Self {
            header_height: 1,
            control_width: 3,
            resize_handle: 1,
        }
    }
}

/// Result of hit-testing a point against a window's chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Maximize,
    Minimize,
    Close,
    /// Header area outside the control buttons.
    Drag,
    /// The resize affordance in the bottom-right corner.
    Resize,
    /// Inside the window but not on any chrome affordance.
    Body,
    Miss,
}

/// Flags that decide which chrome affordances exist.
#[derive(Debug, Clone, Copy)]
pub struct ChromeFlags {
    pub has_controls: bool,
    pub maximizable: bool,
    /// False while maximized or for non-resizable windows.
    pub show_resize_handle: bool,
}

/// Computed chrome rectangles, in the same coordinate space as the window
/// rectangle they were derived from.
#[derive(Debug, Clone, Copy)]
pub struct ChromeLayout {
    pub header: Rect,
    pub maximize: Option<Rect>,
    pub minimize: Option<Rect>,
    pub close: Option<Rect>,
    pub resize_handle: Option<Rect>,
}

impl ChromeLayout {
    /// Lays out chrome for a window frame. Control buttons sit right-aligned
    /// in the header, in maximize / minimize / close order.
    pub fn compute(rect: Rect, flags: ChromeFlags, metrics: ChromeMetrics) -> Self {
        let header = Rect::new(
            rect.x,
            rect.y,
            rect.width,
            metrics.header_height.min(rect.height),
        );

        let button = |index: u32| -> Rect {
            let offset = metrics.control_width.saturating_mul(index + 1) as i32;
            Rect::new(
                rect.right() - offset,
                header.y,
                metrics.control_width,
                header.height,
            )
        };

        let (maximize, minimize, close) = if flags.has_controls {
            let close = Some(button(0));
            let minimize = Some(button(1));
            let maximize = flags.maximizable.then(|| button(2));
            (maximize, minimize, close)
        } else {
            (None, None, None)
        };

        let resize_handle = flags.show_resize_handle.then(|| {
            let side = metrics.resize_handle;
            Rect::new(
                rect.right() - side as i32,
                rect.bottom() - side as i32,
                side,
                side,
            )
        });

        Self {
            header,
            maximize,
            minimize,
            close,
            resize_handle,
        }
    }

    pub fn hit_test(&self, frame: Rect, x: i32, y: i32) -> ChromeHit {
        if !frame.contains(x, y) {
            return ChromeHit::Miss;
        }
        let in_rect = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(x, y));
        if in_rect(self.close) {
            return ChromeHit::Close;
        }
        if in_rect(self.minimize) {
            return ChromeHit::Minimize;
        }
        if in_rect(self.maximize) {
            return ChromeHit::Maximize;
        }
        if self.header.contains(x, y) {
            return ChromeHit::Drag;
        }
        if in_rect(self.resize_handle) {
            return ChromeHit::Resize;
        }
        ChromeHit::Body
    }
}
