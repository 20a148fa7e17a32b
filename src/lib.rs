//! desk-wm: a desktop-style overlapping window manager.
//!
//! The core (windows, manager, taskbar, status bar, desktop) is written
//! against the abstract [`surface::Surface`] trait and never touches a
//! concrete rendering technology. Two backends ship with the crate: the
//! in-memory [`surface::HeadlessSurface`] and the terminal
//! [`render::TermSurface`] used by the `desk-wm` binary.

pub mod config;
pub mod constants;
pub mod desktop;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod status_bar;
pub mod surface;
pub mod taskbar;
pub mod theme;
pub mod window;

pub use config::{DesktopConfig, StatusBarConfig, WindowConfig, load_config};
pub use desktop::Desktop;
pub use error::Error;
pub use geometry::{Point, Rect, Size};
pub use surface::{HeadlessSurface, PointerEvent, PointerPhase, Surface};
pub use taskbar::TaskBar;
pub use window::window_manager::WindowManager;
pub use window::{DisplayState, Window, WindowId};
