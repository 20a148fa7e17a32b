//! Pointer gesture checks: drag and resize clamping against the container.

use desk_wm::config::{DesktopConfig, WindowConfig};
use desk_wm::desktop::Desktop;
use desk_wm::geometry::Rect;
use desk_wm::surface::{HeadlessSurface, PointerEvent, PointerPhase};

fn desktop(windows: Vec<WindowConfig>) -> Desktop<HeadlessSurface> {
    let surface = HeadlessSurface::new(Rect::new(0, 0, 1000, 800));
    let config = DesktopConfig {
        windows,
        ..DesktopConfig::default()
    };
    Desktop::new(surface, &config).expect("desktop should build on a usable container")
}

fn press(desktop: &mut Desktop<HeadlessSurface>, x: i32, y: i32) {
    desktop.handle_pointer(PointerEvent::new(PointerPhase::Down, x, y));
}

fn drag(desktop: &mut Desktop<HeadlessSurface>, x: i32, y: i32) {
    desktop.handle_pointer(PointerEvent::new(PointerPhase::Move, x, y));
}

fn release(desktop: &mut Desktop<HeadlessSurface>, x: i32, y: i32) {
    desktop.handle_pointer(PointerEvent::new(PointerPhase::Up, x, y));
}

#[test]
fn header_drag_clamps_to_container_edges() {
    let mut desktop = desktop(vec![WindowConfig::default()]);
    let id = desktop.manager().active_window().unwrap();

    // press inside the header drag region of the 256x256 window at (0,0)
    press(&mut desktop, 10, 10);
    assert!(desktop.manager().gesture_active());

    drag(&mut desktop, -50, -50);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (0, 0));

    drag(&mut desktop, 5000, 5000);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (744, 544));

    drag(&mut desktop, 310, 210);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (300, 200));

    release(&mut desktop, 310, 210);
    assert!(!desktop.manager().gesture_active());
}

#[test]
fn corner_resize_clamps_between_minimum_and_container() {
    let mut desktop = desktop(vec![WindowConfig {
        width: 300,
        height: 300,
        min_width: 100,
        min_height: 100,
        ..WindowConfig::default()
    }]);
    let id = desktop.manager().active_window().unwrap();

    // press on the resize handle in the bottom-right corner
    press(&mut desktop, 295, 295);
    assert!(desktop.manager().gesture_active());

    drag(&mut desktop, 395, 345);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!(rect.size().width, 400);
    assert_eq!(rect.size().height, 350);

    // past the container edge: pinned to the remaining space
    drag(&mut desktop, 5000, 5000);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.width, rect.height), (1000, 800));

    // pulled back past the origin: pinned to the minimum
    drag(&mut desktop, -500, -500);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.width, rect.height), (100, 100));

    release(&mut desktop, -500, -500);
}

#[test]
fn resize_maximum_accounts_for_the_window_offset() {
    let mut desktop = desktop(vec![WindowConfig {
        x: 200,
        y: 100,
        width: 300,
        height: 300,
        min_width: 100,
        min_height: 100,
        ..WindowConfig::default()
    }]);
    let id = desktop.manager().active_window().unwrap();

    press(&mut desktop, 495, 395);
    drag(&mut desktop, 5000, 5000);
    let rect = desktop.manager().get(id).unwrap().rect();
    // container minus the fixed top-left offset
    assert_eq!((rect.width, rect.height), (800, 700));
}

#[test]
fn non_draggable_windows_stay_put() {
    let mut desktop = desktop(vec![WindowConfig {
        is_draggable: false,
        ..WindowConfig::default()
    }]);
    let id = desktop.manager().active_window().unwrap();

    press(&mut desktop, 10, 10);
    assert!(!desktop.manager().gesture_active());
    drag(&mut desktop, 400, 400);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (0, 0));
}

#[test]
fn non_resizable_windows_have_no_resize_gesture() {
    let mut desktop = desktop(vec![WindowConfig {
        is_resizable: false,
        ..WindowConfig::default()
    }]);
    let id = desktop.manager().active_window().unwrap();

    // bottom-right corner is plain body for a fixed-size window
    press(&mut desktop, 250, 250);
    assert!(!desktop.manager().gesture_active());
    drag(&mut desktop, 500, 500);
    assert_eq!(desktop.manager().get(id).unwrap().rect().size().width, 256);
}

#[test]
fn cancel_ends_the_gesture_at_the_last_position() {
    let mut desktop = desktop(vec![WindowConfig::default()]);
    let id = desktop.manager().active_window().unwrap();

    press(&mut desktop, 10, 10);
    drag(&mut desktop, 110, 60);
    desktop.handle_pointer(PointerEvent::new(PointerPhase::Cancel, 110, 60));
    assert!(!desktop.manager().gesture_active());

    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (100, 50));

    // further moves without a new press do nothing
    drag(&mut desktop, 600, 600);
    let rect = desktop.manager().get(id).unwrap().rect();
    assert_eq!((rect.x, rect.y), (100, 50));
}

#[test]
fn press_picks_the_topmost_window_at_the_point() {
    let mut desktop = desktop(vec![
        WindowConfig {
            title: "Below".to_string(),
            ..WindowConfig::default()
        },
        WindowConfig {
            title: "Above".to_string(),
            x: 100,
            y: 100,
            ..WindowConfig::default()
        },
    ]);
    let above = desktop.manager().active_window().unwrap();

    // the overlap region belongs to the later, higher-stacked window
    press(&mut desktop, 150, 200);
    assert_eq!(desktop.manager().active_window(), Some(above));
    release(&mut desktop, 150, 200);

    // outside the overlap the lower window wins and comes to front
    press(&mut desktop, 50, 50);
    let below = desktop.manager().active_window().unwrap();
    assert_ne!(below, above);
    assert!(
        desktop.manager().get(below).unwrap().stacking()
            > desktop.manager().get(above).unwrap().stacking()
    );
}

#[test]
fn maximized_windows_ignore_drag_and_resize() {
    let mut desktop = desktop(vec![WindowConfig::default()]);
    let id = desktop.manager().active_window().unwrap();
    desktop.maximize_window(id);

    // header press on a maximized window must not start a drag
    press(&mut desktop, 10, 10);
    assert!(!desktop.manager().gesture_active());
    drag(&mut desktop, 500, 500);
    assert_eq!(
        desktop.manager().get(id).unwrap().rect(),
        Rect::new(0, 0, 1000, 800)
    );
}
