//! Window registry, stacking order, and gesture coordination.
//!
//! The manager owns the surface and every window on it. It is the only place
//! that clamps geometry against container bounds, assigns stacking values,
//! and decides which window is active. Taskbar linkage is explicit: each
//! operation takes the taskbar so the mirror entry can be refreshed in the
//! same step, and activation intents flow back through the taskbar's drain
//! queue rather than a stored callback.
//!
//! All operations on unknown window ids are silent no-ops; inputs originate
//! from user gestures and late-arriving UI events where strict failure would
//! be disruptive.

use std::collections::BTreeMap;

use crate::config::WindowConfig;
use crate::constants::{STACKING_BASE, STACKING_CEILING, STACKING_STEP};
use crate::geometry::{Rect, clamp_dimension, clamp_position};
use crate::surface::{PointerEvent, PointerPhase, Surface};
use crate::taskbar::TaskBar;
use crate::window::chrome::{ChromeHit, ChromeMetrics};
use crate::window::{Window, WindowId};

/// Modal gesture state. At most one gesture is in flight: a pointer press
/// either starts a drag or a resize, and any release or cancel returns to
/// Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Idle,
    Dragging {
        id: WindowId,
        /// Pointer offset from the window's top-left, captured at press.
        offset_x: i32,
        offset_y: i32,
    },
    Resizing {
        id: WindowId,
        /// Pointer position and window size captured at press.
        start_x: i32,
        start_y: i32,
        start_width: u32,
        start_height: u32,
    },
}

pub struct WindowManager<S: Surface> {
    surface: S,
    /// Iteration order equals creation order because ids are monotonic.
    windows: BTreeMap<WindowId, Window>,
    next_id: u64,
    stacking: i64,
    active: Option<WindowId>,
    cached_bounds: Rect,
    metrics: ChromeMetrics,
    gesture: Gesture,
}

impl<S: Surface> WindowManager<S> {
    /// Takes ownership of the surface and caches its container bounds.
    /// Fails fast when the container is unusable; nothing can proceed
    /// without it.
    pub fn new(mut surface: S) -> Result<Self, crate::error::Error> {
        let cached_bounds = surface.container_bounds();
        if cached_bounds.is_empty() {
            return Err(crate::error::Error::SurfaceUnavailable);
        }
        Ok(Self {
            surface,
            windows: BTreeMap::new(),
            next_id: 0,
            stacking: STACKING_BASE,
            active: None,
            cached_bounds,
            metrics: ChromeMetrics::default(),
            gesture: Gesture::Idle,
        })
    }

    pub fn with_metrics(mut self, metrics: ChromeMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn set_metrics(&mut self, metrics: ChromeMetrics) {
        self.metrics = metrics;
    }

    pub fn metrics(&self) -> ChromeMetrics {
        self.metrics
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Releases the underlying surface. Call [`WindowManager::destroy`]
    /// first if the surface should be left empty.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Creates a window from a config record, registers its taskbar entry,
    /// and brings it to front.
    pub fn create_window(&mut self, config: &WindowConfig, taskbar: &mut TaskBar) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        let window = Window::create(id, config, &mut self.surface);
        tracing::debug!(%id, title = %window.title(), "created window");
        taskbar.add_task(&window, &mut self.surface);
        self.windows.insert(id, window);
        self.bring_to_front(id, taskbar);
        id
    }

    /// Closes a window: exit transition, surface detach, taskbar removal.
    /// When the active window closes, the remaining window with the highest
    /// stacking value is promoted (which degrades to creation order for
    /// windows never explicitly focused); closing the last window leaves no
    /// window active.
    pub fn close_window(&mut self, id: WindowId, taskbar: &mut TaskBar) {
        let Some(mut window) = self.windows.remove(&id) else {
            return;
        };
        window.close(&mut self.surface);
        taskbar.remove_task(id, &mut self.surface);
        tracing::debug!(%id, "closed window");
        if let Gesture::Dragging { id: gid, .. } | Gesture::Resizing { id: gid, .. } = self.gesture
            && gid == id
        {
            self.gesture = Gesture::Idle;
        }
        if self.active == Some(id) {
            let next = self
                .windows
                .values()
                .max_by_key(|w| w.stacking())
                .map(|w| w.id());
            match next {
                Some(next_id) => self.bring_to_front(next_id, taskbar),
                None => self.active = None,
            }
        }
    }

    pub fn minimize_window(&mut self, id: WindowId, taskbar: &mut TaskBar) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.minimize(&mut self.surface);
            taskbar.update_task(window, &mut self.surface);
        }
    }

    pub fn maximize_window(&mut self, id: WindowId, taskbar: &mut TaskBar) {
        self.update_container_bounds();
        let container = self.local_container();
        if let Some(window) = self.windows.get_mut(&id) {
            window.maximize(&mut self.surface, container);
            taskbar.update_task(window, &mut self.surface);
        }
    }

    pub fn restore_window(&mut self, id: WindowId, taskbar: &mut TaskBar) {
        self.update_container_bounds();
        let container = self.local_container();
        if let Some(window) = self.windows.get_mut(&id) {
            window.restore(&mut self.surface, container);
            taskbar.update_task(window, &mut self.surface);
        }
    }

    /// Restores the window when minimized, then brings it to front. This is
    /// the consumer of taskbar activation requests.
    pub fn activate_window(&mut self, id: WindowId, taskbar: &mut TaskBar) {
        if !self.windows.contains_key(&id) {
            return;
        }
        self.update_container_bounds();
        let container = self.local_container();
        if let Some(window) = self.windows.get_mut(&id) {
            if window.is_minimized() {
                window.restore(&mut self.surface, container);
            }
            taskbar.update_task(window, &mut self.surface);
        }
        self.bring_to_front(id, taskbar);
    }

    /// Assigns the next stacking value and marks the window active. Once the
    /// counter passes the ceiling, open windows are densely renumbered from
    /// the base preserving relative order so the counter never grows without
    /// bound.
    pub fn bring_to_front(&mut self, id: WindowId, taskbar: &mut TaskBar) {
        if !self.windows.contains_key(&id) {
            return;
        }
        if self.stacking > STACKING_CEILING {
            self.renumber_stacking();
        }
        self.stacking += STACKING_STEP;
        let stacking = self.stacking;
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_stacking(&mut self.surface, stacking);
        }
        self.active = Some(id);
        taskbar.set_active_task(id);
    }

    fn renumber_stacking(&mut self) {
        let mut ids: Vec<WindowId> = self.windows.keys().copied().collect();
        ids.sort_by_key(|id| self.windows.get(id).map(|w| w.stacking()).unwrap_or(0));
        let mut next = STACKING_BASE;
        for id in ids {
            if let Some(window) = self.windows.get_mut(&id) {
                window.set_stacking(&mut self.surface, next);
                next += STACKING_STEP;
            }
        }
        self.stacking = next;
        tracing::debug!(counter = next, "renumbered stacking values");
    }

    /// Re-reads the container's bounding box. Called on container resize and
    /// before every clamping computation, since the container can change
    /// size independent of window gestures.
    pub fn update_container_bounds(&mut self) {
        self.cached_bounds = self.surface.container_bounds();
    }

    pub fn container_bounds(&self) -> Rect {
        self.cached_bounds
    }

    /// Re-reads the container bounds and refills maximized windows so they
    /// keep covering the whole container. Normal windows are left where they
    /// are; a shrink can leave them partially outside, and the next drag or
    /// resize clamps them back.
    pub fn handle_container_resize(&mut self) {
        self.update_container_bounds();
        let container = self.local_container();
        for window in self.windows.values_mut() {
            if window.is_maximized() {
                window.set_position(&mut self.surface, container.x, container.y);
                window.set_size(&mut self.surface, container.width, container.height);
            }
        }
    }

    /// Container rectangle in container-local coordinates.
    fn local_container(&self) -> Rect {
        Rect::new(0, 0, self.cached_bounds.width, self.cached_bounds.height)
    }

    /// Routes a pointer event through the gesture state machine. Returns
    /// true when the event was consumed by a window or an active gesture.
    pub fn handle_pointer(&mut self, event: PointerEvent, taskbar: &mut TaskBar) -> bool {
        match event.phase {
            PointerPhase::Down => self.handle_pointer_down(event, taskbar),
            PointerPhase::Move => self.handle_pointer_move(event),
            PointerPhase::Up | PointerPhase::Cancel => {
                let was_active = self.gesture != Gesture::Idle;
                self.gesture = Gesture::Idle;
                was_active
            }
        }
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    fn handle_pointer_down(&mut self, event: PointerEvent, taskbar: &mut TaskBar) -> bool {
        self.update_container_bounds();
        let lx = event.x - self.cached_bounds.x;
        let ly = event.y - self.cached_bounds.y;

        let hit = self
            .windows
            .values()
            .filter(|w| !w.is_minimized() && w.rect().contains(lx, ly))
            .max_by_key(|w| w.stacking())
            .map(|w| w.id());
        let Some(id) = hit else {
            return false;
        };
        self.bring_to_front(id, taskbar);

        let Some(window) = self.windows.get(&id) else {
            return true;
        };
        let rect = window.rect();
        let flags = window.flags();
        let maximized = window.is_maximized();
        let chrome_hit = window.chrome(self.metrics).hit_test(rect, lx, ly);

        match chrome_hit {
            ChromeHit::Close => self.close_window(id, taskbar),
            ChromeHit::Minimize => self.minimize_window(id, taskbar),
            ChromeHit::Maximize => self.maximize_window(id, taskbar),
            ChromeHit::Drag if flags.draggable && !maximized => {
                self.gesture = Gesture::Dragging {
                    id,
                    offset_x: lx - rect.x,
                    offset_y: ly - rect.y,
                };
            }
            ChromeHit::Resize if flags.resizable && !maximized => {
                self.gesture = Gesture::Resizing {
                    id,
                    start_x: event.x,
                    start_y: event.y,
                    start_width: rect.width,
                    start_height: rect.height,
                };
            }
            _ => {}
        }
        true
    }

    fn handle_pointer_move(&mut self, event: PointerEvent) -> bool {
        match self.gesture {
            Gesture::Idle => false,
            Gesture::Dragging {
                id,
                offset_x,
                offset_y,
            } => {
                self.update_container_bounds();
                let bounds = self.cached_bounds;
                let Some(window) = self.windows.get_mut(&id) else {
                    self.gesture = Gesture::Idle;
                    return false;
                };
                let x = event.x - bounds.x - offset_x;
                let y = event.y - bounds.y - offset_y;
                let clamped = clamp_position(x, y, window.rect().size(), bounds.size());
                window.set_position(&mut self.surface, clamped.x, clamped.y);
                true
            }
            Gesture::Resizing {
                id,
                start_x,
                start_y,
                start_width,
                start_height,
            } => {
                self.update_container_bounds();
                let bounds = self.cached_bounds;
                let Some(window) = self.windows.get_mut(&id) else {
                    self.gesture = Gesture::Idle;
                    return false;
                };
                // Candidate size is the start size plus the pointer delta,
                // clamped to the window's minimum and the container space
                // remaining from its fixed top-left.
                let candidate_w = start_width as i64 + (event.x - start_x) as i64;
                let candidate_h = start_height as i64 + (event.y - start_y) as i64;
                let max_w = bounds.width as i64 - window.rect().x as i64;
                let max_h = bounds.height as i64 - window.rect().y as i64;
                let width = clamp_dimension(candidate_w, window.min_width(), max_w);
                let height = clamp_dimension(candidate_h, window.min_height(), max_h);
                window.set_size(&mut self.surface, width, height);
                true
            }
        }
    }

    /// Tears the manager down: detaches every window from the surface and
    /// clears the registry, taskbar entries, and active pointer.
    pub fn destroy(&mut self, taskbar: &mut TaskBar) {
        for (id, mut window) in std::mem::take(&mut self.windows) {
            window.detach(&mut self.surface);
            taskbar.remove_task(id, &mut self.surface);
        }
        self.active = None;
        self.gesture = Gesture::Idle;
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows in creation order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Windows back-to-front, for painting.
    pub fn windows_by_stacking(&self) -> Vec<&Window> {
        let mut ordered: Vec<&Window> = self.windows.values().collect();
        ordered.sort_by_key(|w| w.stacking());
        ordered
    }

    pub fn set_window_title(
        &mut self,
        id: WindowId,
        title: impl Into<String>,
        taskbar: &mut TaskBar,
    ) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_title(&mut self.surface, title);
            taskbar.update_task(window, &mut self.surface);
        }
    }

    pub fn set_window_icon(
        &mut self,
        id: WindowId,
        icon: impl Into<String>,
        taskbar: &mut TaskBar,
    ) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_icon(icon);
            taskbar.update_task(window, &mut self.surface);
        }
    }

    pub fn set_window_content(&mut self, id: WindowId, content: impl Into<String>) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_content(content);
        }
    }

    pub fn set_window_toolbar_info(&mut self, id: WindowId, info: impl Into<String>) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_toolbar_info(info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    fn manager() -> (WindowManager<HeadlessSurface>, TaskBar) {
        let surface = HeadlessSurface::new(Rect::new(0, 0, 1000, 800));
        (WindowManager::new(surface).unwrap(), TaskBar::new())
    }

    #[test]
    fn empty_container_fails_fast() {
        let surface = HeadlessSurface::new(Rect::ZERO);
        assert!(matches!(
            WindowManager::new(surface),
            Err(crate::error::Error::SurfaceUnavailable)
        ));
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let (mut wm, mut tb) = manager();
        let ghost = WindowId(99);
        wm.close_window(ghost, &mut tb);
        wm.minimize_window(ghost, &mut tb);
        wm.maximize_window(ghost, &mut tb);
        wm.activate_window(ghost, &mut tb);
        wm.bring_to_front(ghost, &mut tb);
        assert!(wm.active_window().is_none());
        assert_eq!(tb.len(), 0);
    }

    #[test]
    fn stacking_values_increase_monotonically() {
        let (mut wm, mut tb) = manager();
        let a = wm.create_window(&WindowConfig::default(), &mut tb);
        let b = wm.create_window(&WindowConfig::default(), &mut tb);
        let za = wm.get(a).unwrap().stacking();
        let zb = wm.get(b).unwrap().stacking();
        assert!(zb > za);
        wm.bring_to_front(a, &mut tb);
        assert!(wm.get(a).unwrap().stacking() > zb);
        assert_eq!(wm.active_window(), Some(a));
    }

    #[test]
    fn renumbering_preserves_relative_order() {
        let (mut wm, mut tb) = manager();
        let a = wm.create_window(&WindowConfig::default(), &mut tb);
        let b = wm.create_window(&WindowConfig::default(), &mut tb);
        let c = wm.create_window(&WindowConfig::default(), &mut tb);
        wm.bring_to_front(a, &mut tb);
        // force the counter past the ceiling; the next bring-to-front must
        // renumber densely while keeping b < c < a
        wm.stacking = STACKING_CEILING + 1;
        wm.bring_to_front(b, &mut tb);
        let (za, zb, zc) = (
            wm.get(a).unwrap().stacking(),
            wm.get(b).unwrap().stacking(),
            wm.get(c).unwrap().stacking(),
        );
        assert!(zc < za && za < zb);
        assert!(zb <= STACKING_BASE + 4 * STACKING_STEP);
        assert!(wm.stacking >= zb);
    }

    #[test]
    fn closing_the_active_window_promotes_the_front_most_remaining() {
        let (mut wm, mut tb) = manager();
        let a = wm.create_window(&WindowConfig::default(), &mut tb);
        let b = wm.create_window(&WindowConfig::default(), &mut tb);
        let c = wm.create_window(&WindowConfig::default(), &mut tb);
        wm.bring_to_front(a, &mut tb);
        wm.close_window(a, &mut tb);
        // b was created before c but c was focused more recently than b
        // only by creation; highest stacking among remaining is c
        assert_eq!(wm.active_window(), Some(c));
        wm.close_window(c, &mut tb);
        assert_eq!(wm.active_window(), Some(b));
        wm.close_window(b, &mut tb);
        assert_eq!(wm.active_window(), None);
        assert!(wm.is_empty());
    }

    #[test]
    fn closing_an_inactive_window_keeps_the_active_one() {
        let (mut wm, mut tb) = manager();
        let a = wm.create_window(&WindowConfig::default(), &mut tb);
        let b = wm.create_window(&WindowConfig::default(), &mut tb);
        wm.close_window(a, &mut tb);
        assert_eq!(wm.active_window(), Some(b));
    }

    #[test]
    fn destroy_clears_registry_and_taskbar() {
        let (mut wm, mut tb) = manager();
        wm.create_window(&WindowConfig::default(), &mut tb);
        wm.create_window(&WindowConfig::default(), &mut tb);
        wm.destroy(&mut tb);
        assert!(wm.is_empty());
        assert!(wm.active_window().is_none());
        assert_eq!(tb.len(), 0);
        assert_eq!(wm.surface().node_count(), 0);
    }

    #[test]
    fn closing_mid_gesture_resets_the_gesture() {
        let (mut wm, mut tb) = manager();
        let id = wm.create_window(&WindowConfig::default(), &mut tb);
        // press on the header drag region
        wm.handle_pointer(PointerEvent::new(PointerPhase::Down, 10, 10), &mut tb);
        assert!(wm.gesture_active());
        wm.close_window(id, &mut tb);
        assert!(!wm.gesture_active());
    }
}
