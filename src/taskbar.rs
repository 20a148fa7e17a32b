//! Taskbar: one button per open window, mirroring title, icon, and state.
//!
//! The taskbar never reaches into the window manager. Pointer presses on a
//! button are queued as activation requests and drained by the embedder,
//! which forwards them to the manager. This keeps the dependency one-way:
//! the manager pushes entry updates in, requests flow back out through
//! [`TaskBar::take_activation_requests`].

use std::collections::BTreeMap;

use crate::geometry::Rect;
use crate::surface::{NodeId, NodeKind, PointerEvent, PointerPhase, Surface, Transition};
use crate::window::{Window, WindowId};

const DEFAULT_BUTTON_WIDTH: u32 = 160;

/// Mirror of one window's taskbar-relevant state.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub icon: String,
    pub title: String,
    pub active: bool,
    pub minimized: bool,
    node: NodeId,
}

#[derive(Debug)]
pub struct TaskBar {
    /// Keyed by window id; ids are monotonic, so iteration order equals the
    /// order windows were opened in.
    entries: BTreeMap<WindowId, TaskEntry>,
    area: Rect,
    button_width: u32,
    requested: Vec<WindowId>,
}

impl Default for TaskBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBar {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            area: Rect::ZERO,
            button_width: DEFAULT_BUTTON_WIDTH,
            requested: Vec::new(),
        }
    }

    /// The strip of the surface the taskbar occupies and hit-tests against.
    pub fn set_area<S: Surface>(&mut self, area: Rect, surface: &mut S) {
        self.area = area;
        self.relayout(surface);
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_button_width<S: Surface>(&mut self, width: u32, surface: &mut S) {
        self.button_width = width.max(1);
        self.relayout(surface);
    }

    pub fn add_task<S: Surface>(&mut self, window: &Window, surface: &mut S) {
        let node = surface.create_node(NodeKind::TaskButton);
        surface.set_label(node, window.title());
        self.entries.insert(
            window.id(),
            TaskEntry {
                icon: window.icon().to_string(),
                title: window.title().to_string(),
                active: false,
                minimized: window.is_minimized(),
                node,
            },
        );
        self.relayout(surface);
    }

    pub fn remove_task<S: Surface>(&mut self, id: WindowId, surface: &mut S) {
        if let Some(entry) = self.entries.remove(&id) {
            surface.play_transition(entry.node, Transition::TaskRemove);
            surface.remove_node(entry.node);
            self.relayout(surface);
        }
    }

    /// Refreshes a button from its window. A minimized window's button is
    /// never shown active; activity is only granted through
    /// [`TaskBar::set_active_task`].
    pub fn update_task<S: Surface>(&mut self, window: &Window, surface: &mut S) {
        if let Some(entry) = self.entries.get_mut(&window.id()) {
            entry.title = window.title().to_string();
            entry.icon = window.icon().to_string();
            entry.minimized = window.is_minimized();
            if entry.minimized {
                entry.active = false;
            }
            surface.set_label(entry.node, window.title());
        }
    }

    /// Marks one button active and every other button inactive.
    pub fn set_active_task(&mut self, id: WindowId) {
        for (entry_id, entry) in &mut self.entries {
            entry.active = *entry_id == id;
        }
    }

    /// Consumes a pointer event when it lands inside the taskbar area.
    /// A press on a button queues an activation request for that window.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if event.phase != PointerPhase::Down || !self.area.contains(event.x, event.y) {
            return false;
        }
        let index = ((event.x - self.area.x) / self.button_width as i32) as usize;
        if let Some(id) = self.entries.keys().nth(index) {
            self.requested.push(*id);
        }
        true
    }

    /// Drains the windows whose buttons were pressed since the last call.
    pub fn take_activation_requests(&mut self) -> Vec<WindowId> {
        std::mem::take(&mut self.requested)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: WindowId) -> Option<&TaskEntry> {
        self.entries.get(&id)
    }

    /// Entries in button order, with the rectangle each button occupies.
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, Rect, &TaskEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (id, entry))| (*id, self.button_rect(index), entry))
    }

    fn button_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.area.x + (index as i32) * self.button_width as i32,
            self.area.y,
            self.button_width,
            self.area.height,
        )
    }

    fn relayout<S: Surface>(&mut self, surface: &mut S) {
        let rects: Vec<(NodeId, Rect)> = self
            .entries
            .values()
            .enumerate()
            .map(|(index, entry)| (entry.node, self.button_rect(index)))
            .collect();
        for (node, rect) in rects {
            surface.set_rect(node, rect);
        }
    }
}
