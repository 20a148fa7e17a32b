//! Top-level desktop composition: window manager, taskbar, status bar.
//!
//! The desktop owns the routing policy between its parts. Pointer events go
//! to the window manager while a gesture is in flight (so a drag that crosses
//! the taskbar does not get hijacked), then to the taskbar, then to the
//! windows. Taskbar activation requests are drained and forwarded here, which
//! is the only place the two sides meet.

use crate::config::{DesktopConfig, WindowConfig};
use crate::error::Error;
use crate::geometry::Rect;
use crate::status_bar::StatusBar;
use crate::surface::{PointerEvent, Surface};
use crate::taskbar::TaskBar;
use crate::window::window_manager::WindowManager;
use crate::window::WindowId;

pub struct Desktop<S: Surface> {
    manager: WindowManager<S>,
    taskbar: TaskBar,
    status_bar: Option<StatusBar>,
}

impl<S: Surface> Desktop<S> {
    /// Builds the desktop from a configuration: status bar first, then one
    /// window per config record, opened in order.
    pub fn new(surface: S, config: &DesktopConfig) -> Result<Self, Error> {
        let mut manager = WindowManager::new(surface)?;
        let mut taskbar = TaskBar::new();
        let status_bar = config
            .status_bar
            .enabled
            .then(|| StatusBar::new(&config.status_bar, manager.surface_mut()));
        for window_config in &config.windows {
            manager.create_window(window_config, &mut taskbar);
        }
        Ok(Self {
            manager,
            taskbar,
            status_bar,
        })
    }

    pub fn open_window(&mut self, config: &WindowConfig) -> WindowId {
        self.manager.create_window(config, &mut self.taskbar)
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.manager.close_window(id, &mut self.taskbar);
    }

    pub fn minimize_window(&mut self, id: WindowId) {
        self.manager.minimize_window(id, &mut self.taskbar);
    }

    pub fn maximize_window(&mut self, id: WindowId) {
        self.manager.maximize_window(id, &mut self.taskbar);
    }

    pub fn restore_window(&mut self, id: WindowId) {
        self.manager.restore_window(id, &mut self.taskbar);
    }

    pub fn activate_window(&mut self, id: WindowId) {
        self.manager.activate_window(id, &mut self.taskbar);
    }

    pub fn rename_window(&mut self, id: WindowId, title: impl Into<String>) {
        self.manager.set_window_title(id, title, &mut self.taskbar);
    }

    /// Routes a pointer event. Returns true when any part consumed it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.manager.gesture_active() {
            return self.manager.handle_pointer(event, &mut self.taskbar);
        }
        if self.taskbar.handle_pointer(event) {
            for id in self.taskbar.take_activation_requests() {
                self.manager.activate_window(id, &mut self.taskbar);
            }
            return true;
        }
        self.manager.handle_pointer(event, &mut self.taskbar)
    }

    /// Call when the surface container changes size.
    pub fn handle_container_resize(&mut self) {
        self.manager.handle_container_resize();
    }

    /// Periodic update hook; feeds the clock into the status bar.
    pub fn tick(&mut self, clock: &str) {
        if let Some(status_bar) = &mut self.status_bar {
            status_bar.set_center(clock, self.manager.surface_mut());
        }
    }

    pub fn set_status_left(&mut self, text: &str) {
        if let Some(status_bar) = &mut self.status_bar {
            status_bar.set_left(text, self.manager.surface_mut());
        }
    }

    pub fn set_status_right(&mut self, text: &str) {
        if let Some(status_bar) = &mut self.status_bar {
            status_bar.set_right(text, self.manager.surface_mut());
        }
    }

    pub fn set_taskbar_area(&mut self, area: Rect) {
        self.taskbar.set_area(area, self.manager.surface_mut());
    }

    pub fn manager(&self) -> &WindowManager<S> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut WindowManager<S> {
        &mut self.manager
    }

    pub fn taskbar(&self) -> &TaskBar {
        &self.taskbar
    }

    pub fn status_bar(&self) -> Option<&StatusBar> {
        self.status_bar.as_ref()
    }

    pub fn surface(&self) -> &S {
        self.manager.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.manager.surface_mut()
    }

    /// Tears everything down and releases the surface.
    pub fn destroy(mut self) -> S {
        self.manager.destroy(&mut self.taskbar);
        if let Some(mut status_bar) = self.status_bar.take() {
            status_bar.detach(self.manager.surface_mut());
        }
        self.manager.into_surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatusBarConfig;
    use crate::surface::{HeadlessSurface, PointerPhase};

    fn desktop_with(windows: Vec<WindowConfig>) -> Desktop<HeadlessSurface> {
        let surface = HeadlessSurface::new(Rect::new(0, 0, 1000, 800));
        let config = DesktopConfig {
            status_bar: StatusBarConfig::default(),
            windows,
        };
        Desktop::new(surface, &config).unwrap()
    }

    #[test]
    fn startup_opens_configured_windows_with_taskbar_entries() {
        let desktop = desktop_with(vec![
            WindowConfig {
                title: "Files".to_string(),
                ..WindowConfig::default()
            },
            WindowConfig {
                title: "Console".to_string(),
                ..WindowConfig::default()
            },
        ]);
        assert_eq!(desktop.manager().window_count(), 2);
        assert_eq!(desktop.taskbar().len(), 2);
        assert!(desktop.status_bar().is_some());
    }

    #[test]
    fn taskbar_press_reactivates_a_minimized_window() {
        let mut desktop = desktop_with(vec![WindowConfig::default()]);
        desktop.set_taskbar_area(Rect::new(0, 776, 1000, 24));
        let id = desktop.manager().active_window().unwrap();
        desktop.minimize_window(id);
        assert!(desktop.manager().get(id).unwrap().is_minimized());

        assert!(desktop.handle_pointer(PointerEvent::new(PointerPhase::Down, 10, 780)));
        let window = desktop.manager().get(id).unwrap();
        assert!(!window.is_minimized());
        assert_eq!(desktop.manager().active_window(), Some(id));
        assert!(desktop.taskbar().get(id).unwrap().active);
    }

    #[test]
    fn gesture_in_flight_bypasses_the_taskbar() {
        let mut desktop = desktop_with(vec![WindowConfig::default()]);
        desktop.set_taskbar_area(Rect::new(0, 776, 1000, 24));
        let id = desktop.manager().active_window().unwrap();

        // start a header drag, then move across the taskbar strip; the drag
        // keeps tracking instead of the press-less move activating a button
        desktop.handle_pointer(PointerEvent::new(PointerPhase::Down, 10, 10));
        desktop.handle_pointer(PointerEvent::new(PointerPhase::Move, 10, 780));
        assert!(desktop.manager().gesture_active());
        let rect = desktop.manager().get(id).unwrap().rect();
        assert_eq!((rect.x, rect.y), (0, 544));
    }

    #[test]
    fn container_resize_refills_maximized_windows() {
        let mut desktop = desktop_with(vec![WindowConfig::default()]);
        let id = desktop.manager().active_window().unwrap();
        desktop.maximize_window(id);
        assert_eq!(
            desktop.manager().get(id).unwrap().rect(),
            Rect::new(0, 0, 1000, 800)
        );

        desktop
            .surface_mut()
            .set_container_bounds(Rect::new(0, 0, 640, 480));
        desktop.handle_container_resize();
        assert_eq!(
            desktop.manager().get(id).unwrap().rect(),
            Rect::new(0, 0, 640, 480)
        );
    }

    #[test]
    fn tick_drives_the_status_clock() {
        let mut desktop = desktop_with(vec![]);
        desktop.tick("09:15:00");
        assert_eq!(desktop.status_bar().unwrap().center(), "09:15:00");
    }

    #[test]
    fn destroy_returns_an_empty_surface() {
        let desktop = desktop_with(vec![WindowConfig::default()]);
        let surface = desktop.destroy();
        assert_eq!(surface.node_count(), 0);
    }
}
