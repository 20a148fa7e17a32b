//! A single desktop window: geometry, display state, and chrome.
//!
//! Windows know nothing about siblings, stacking, or container bounds beyond
//! what the manager hands them; every geometry mutation is unconditional here
//! and clamping is the manager's job. Each mutation syncs the backing surface
//! node so the visual layer always reflects the model.

pub mod chrome;
pub mod window_manager;

use crate::config::WindowConfig;
use crate::constants::{MIN_WINDOW_FLOOR_HEIGHT, MIN_WINDOW_FLOOR_WIDTH};
use crate::geometry::Rect;
use crate::surface::{NodeId, NodeKind, Surface, Transition};

use chrome::{ChromeFlags, ChromeLayout, ChromeMetrics};

/// Opaque window identifier, assigned by the manager at creation and
/// monotonic, so ordering by id equals creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WindowId(pub(crate) u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Normal,
    Maximized,
    Minimized,
}

/// Behavioral flags, fixed at creation.
#[derive(Debug, Clone, Copy)]
pub struct WindowFlags {
    pub resizable: bool,
    pub draggable: bool,
    pub maximizable: bool,
    pub has_controls: bool,
    pub has_toolbar_info: bool,
}

#[derive(Debug)]
pub struct Window {
    id: WindowId,
    node: NodeId,
    title: String,
    icon: String,
    content: String,
    toolbar_info: String,
    rect: Rect,
    min_width: u32,
    min_height: u32,
    flags: WindowFlags,
    state: DisplayState,
    /// Whether the window was maximized when it was minimized, so restore
    /// can return to the exact prior mode.
    was_maximized: bool,
    closing: bool,
    restore_rect: Rect,
    stacking: i64,
}

impl Window {
    /// Builds a window from a configuration record.
    ///
    /// Sizes below the configured minimum grow to it, and minimums below the
    /// absolute floor are clamped to the floor; contradictory input never
    /// errors. The derived flag rules are applied here: a non-resizable
    /// window is never maximizable, and the toolbar exists only when the
    /// window is resizable or carries toolbar info.
    pub(crate) fn create<S: Surface>(
        id: WindowId,
        config: &WindowConfig,
        surface: &mut S,
    ) -> Self {
        let min_width = config.min_width.max(MIN_WINDOW_FLOOR_WIDTH);
        let min_height = config.min_height.max(MIN_WINDOW_FLOOR_HEIGHT);
        let rect = Rect::new(
            config.x,
            config.y,
            config.width.max(min_width),
            config.height.max(min_height),
        );

        let flags = WindowFlags {
            resizable: config.is_resizable,
            draggable: config.is_draggable,
            maximizable: config.is_maximizable && config.is_resizable,
            has_controls: config.has_controls,
            has_toolbar_info: config.has_toolbar_info,
        };

        let node = surface.create_node(NodeKind::WindowFrame);
        surface.set_rect(node, rect);
        surface.set_label(node, &config.title);

        Self {
            id,
            node,
            title: config.title.clone(),
            icon: config.icon.clone(),
            content: config.content.clone(),
            toolbar_info: config.has_toolbar_info.then(|| "NO_INFORMATION".to_string()).unwrap_or_default(),
            rect,
            min_width,
            min_height,
            flags,
            state: DisplayState::Normal,
            was_maximized: false,
            closing: false,
            restore_rect: rect,
            stacking: 0,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn toolbar_info(&self) -> &str {
        &self.toolbar_info
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn restore_rect(&self) -> Rect {
        self.restore_rect
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn is_minimized(&self) -> bool {
        self.state == DisplayState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.state == DisplayState::Maximized
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn stacking(&self) -> i64 {
        self.stacking
    }

    pub(crate) fn set_stacking<S: Surface>(&mut self, surface: &mut S, stacking: i64) {
        self.stacking = stacking;
        surface.set_stacking(self.node, stacking);
    }

    /// Whether the toolbar band is shown at all.
    pub fn has_toolbar(&self) -> bool {
        self.flags.resizable || self.flags.has_toolbar_info
    }

    /// The resize affordance is hidden while maximized.
    pub fn show_resize_handle(&self) -> bool {
        self.flags.resizable && self.state != DisplayState::Maximized
    }

    /// Chrome layout for the current frame rectangle, container-local.
    pub fn chrome(&self, metrics: ChromeMetrics) -> ChromeLayout {
        ChromeLayout::compute(
            self.rect,
            ChromeFlags {
                has_controls: self.flags.has_controls,
                maximizable: self.flags.maximizable,
                show_resize_handle: self.show_resize_handle(),
            },
            metrics,
        )
    }

    /// Unconditional position mutation plus visual sync. Bounds checking is
    /// the manager's responsibility.
    pub fn set_position<S: Surface>(&mut self, surface: &mut S, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
        surface.set_rect(self.node, self.rect);
    }

    /// Unconditional size mutation plus visual sync.
    pub fn set_size<S: Surface>(&mut self, surface: &mut S, width: u32, height: u32) {
        self.rect.width = width;
        self.rect.height = height;
        surface.set_rect(self.node, self.rect);
    }

    fn save_restore_rect(&mut self) {
        self.restore_rect = self.rect;
    }

    /// Minimize: remember whether the window was maximized, snapshot the
    /// geometry when leaving Normal, play the exit transition and hide.
    /// Idempotent when already minimized.
    pub fn minimize<S: Surface>(&mut self, surface: &mut S) {
        if self.state == DisplayState::Minimized {
            return;
        }
        self.was_maximized = self.state == DisplayState::Maximized;
        if !self.was_maximized {
            self.save_restore_rect();
        }
        self.state = DisplayState::Minimized;
        surface.play_transition(self.node, Transition::Minimize);
        surface.set_visible(self.node, false);
    }

    /// Maximize to fill `container` (container-local, so the expanded origin
    /// is (0,0)). Acts as a toggle: maximizing an already-maximized window
    /// restores it. Silent no-op for non-maximizable windows.
    pub fn maximize<S: Surface>(&mut self, surface: &mut S, container: Rect) {
        if !self.flags.maximizable {
            return;
        }
        if self.state == DisplayState::Maximized {
            self.restore(surface, container);
            return;
        }
        self.save_restore_rect();
        self.set_position(surface, 0, 0);
        self.set_size(surface, container.width, container.height);
        self.state = DisplayState::Maximized;
    }

    /// Leave the Minimized state, returning to the exact prior mode: filled
    /// container when the window was maximized before minimizing, otherwise
    /// the restore snapshot. Also restores a Maximized window to Normal.
    pub fn restore<S: Surface>(&mut self, surface: &mut S, container: Rect) {
        surface.set_visible(self.node, true);
        if self.was_maximized {
            self.set_position(surface, 0, 0);
            self.set_size(surface, container.width, container.height);
            self.state = DisplayState::Maximized;
        } else {
            let rect = self.restore_rect;
            self.set_position(surface, rect.x, rect.y);
            self.set_size(surface, rect.width, rect.height);
            self.state = DisplayState::Normal;
        }
        self.was_maximized = false;
    }

    /// Play the exit transition and detach from the surface. Irreversible;
    /// the manager drops the entity afterwards.
    pub(crate) fn close<S: Surface>(&mut self, surface: &mut S) {
        self.closing = true;
        surface.play_transition(self.node, Transition::Close);
        surface.remove_node(self.node);
    }

    /// Detach without the exit transition (manager teardown).
    pub(crate) fn detach<S: Surface>(&mut self, surface: &mut S) {
        surface.remove_node(self.node);
    }

    pub fn set_title<S: Surface>(&mut self, surface: &mut S, title: impl Into<String>) {
        self.title = title.into();
        surface.set_label(self.node, &self.title);
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = icon.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_toolbar_info(&mut self, info: impl Into<String>) {
        if self.flags.has_toolbar_info {
            self.toolbar_info = info.into();
        }
    }
}
