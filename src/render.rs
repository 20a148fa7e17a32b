//! Terminal backend: a [`Surface`] implementation over the terminal grid and
//! an immediate-mode painter for the whole desktop.
//!
//! The terminal redraws every frame from the desktop's state, so the surface
//! node calls are bookkeeping only: geometry lives in the windows themselves
//! and transitions are immediate. What the surface does own is the container
//! split: one status row on top (when enabled), one taskbar row at the
//! bottom, and the window container in between.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as TermRect;
use ratatui::style::Style;

use crate::desktop::Desktop;
use crate::geometry::Rect;
use crate::surface::{NodeId, NodeKind, Surface, Transition};
use crate::theme;
use crate::window::chrome::ChromeFlags;

const CLOSE_GLYPH: &str = "✕";
const MINIMIZE_GLYPH: &str = "▁";
const MAXIMIZE_GLYPH: &str = "□";
const RESIZE_GLYPH: &str = "◢";

/// Surface backed by the terminal grid, one cell per unit.
#[derive(Debug)]
pub struct TermSurface {
    next_node: u64,
    cols: u16,
    rows: u16,
    status_row: bool,
}

impl TermSurface {
    pub fn new(cols: u16, rows: u16, status_row: bool) -> Self {
        Self {
            next_node: 0,
            cols,
            rows,
            status_row,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// The bottom row, reserved for the taskbar.
    pub fn taskbar_area(&self) -> Rect {
        Rect::new(
            0,
            self.rows.saturating_sub(1) as i32,
            self.cols as u32,
            1.min(self.rows as u32),
        )
    }

    fn status_rows(&self) -> u16 {
        if self.status_row { 1 } else { 0 }
    }
}

impl Surface for TermSurface {
    fn create_node(&mut self, _kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    fn set_rect(&mut self, _node: NodeId, _rect: Rect) {}

    fn set_visible(&mut self, _node: NodeId, _visible: bool) {}

    fn set_stacking(&mut self, _node: NodeId, _stacking: i64) {}

    fn set_label(&mut self, _node: NodeId, _label: &str) {}

    fn play_transition(&mut self, _node: NodeId, _transition: Transition) {}

    fn remove_node(&mut self, _node: NodeId) {}

    fn container_bounds(&mut self) -> Rect {
        let top = self.status_rows();
        let reserved = top + 1;
        Rect::new(
            0,
            top as i32,
            self.cols as u32,
            self.rows.saturating_sub(reserved) as u32,
        )
    }
}

pub fn render_desktop(frame: &mut Frame, desktop: &Desktop<TermSurface>) {
    let area = frame.area();
    draw_desktop(frame.buffer_mut(), area, desktop);
}

fn draw_desktop(buffer: &mut Buffer, area: TermRect, desktop: &Desktop<TermSurface>) {
    fill(buffer, area, " ", Style::default().bg(theme::desktop_bg()));

    if let Some(status_bar) = desktop.status_bar() {
        draw_status_row(buffer, area, status_bar);
    }

    let container = desktop.manager().container_bounds();
    let clip = clamp_to_area(container, area);
    let active = desktop.manager().active_window();
    for window in desktop.manager().windows_by_stacking() {
        if window.is_minimized() {
            continue;
        }
        draw_window(
            buffer,
            clip,
            container,
            window,
            desktop.manager().metrics(),
            active == Some(window.id()),
        );
    }

    draw_taskbar(buffer, area, desktop);
}

fn draw_status_row(buffer: &mut Buffer, area: TermRect, status_bar: &crate::status_bar::StatusBar) {
    if area.height == 0 {
        return;
    }
    let row = TermRect::new(area.x, area.y, area.width, 1);
    let style = theme::status_bar_style();
    fill(buffer, row, " ", style);
    put_str(buffer, row, row.x as i32 + 1, row.y as i32, status_bar.left(), style);

    let center = status_bar.center();
    let center_x = row.x as i32 + (row.width as i32 - center.chars().count() as i32) / 2;
    put_str(buffer, row, center_x, row.y as i32, center, style);

    let right = status_bar.right();
    let right_x = row.x as i32 + row.width as i32 - right.chars().count() as i32 - 1;
    put_str(buffer, row, right_x, row.y as i32, right, style);
}

fn draw_window(
    buffer: &mut Buffer,
    clip: TermRect,
    container: Rect,
    window: &crate::window::Window,
    metrics: crate::window::chrome::ChromeMetrics,
    active: bool,
) {
    // window rects are container-local; shift into screen coordinates
    let screen = Rect::new(
        window.rect().x + container.x,
        window.rect().y + container.y,
        window.rect().width,
        window.rect().height,
    );
    let flags = ChromeFlags {
        has_controls: window.flags().has_controls,
        maximizable: window.flags().maximizable,
        show_resize_handle: window.show_resize_handle(),
    };
    let layout = crate::window::chrome::ChromeLayout::compute(screen, flags, metrics);

    let body_style = theme::body_style();
    for y in screen.y..screen.bottom() {
        for x in screen.x..screen.right() {
            put(buffer, clip, x, y, " ", body_style);
        }
    }

    let header_style = if active {
        theme::header_active_style()
    } else {
        theme::header_inactive_style()
    };
    for y in layout.header.y..layout.header.bottom() {
        for x in layout.header.x..layout.header.right() {
            put(buffer, clip, x, y, " ", header_style);
        }
    }
    put_str(
        buffer,
        clip,
        layout.header.x + 1,
        layout.header.y,
        window.title(),
        header_style,
    );
    for (rect, glyph) in [
        (layout.maximize, MAXIMIZE_GLYPH),
        (layout.minimize, MINIMIZE_GLYPH),
        (layout.close, CLOSE_GLYPH),
    ] {
        if let Some(rect) = rect {
            // glyph in the middle cell of the button
            let gx = rect.x + (rect.width / 2) as i32;
            let gy = rect.y + (rect.height / 2) as i32;
            put(buffer, clip, gx, gy, glyph, header_style);
        }
    }

    let content_top = screen.y + layout.header.height as i32;
    for (line_index, line) in window.content().lines().enumerate() {
        let y = content_top + line_index as i32;
        if y >= screen.bottom() {
            break;
        }
        put_str(buffer, clip, screen.x + 1, y, line, body_style);
    }

    if let Some(handle) = layout.resize_handle {
        put(
            buffer,
            clip,
            handle.right() - 1,
            handle.bottom() - 1,
            RESIZE_GLYPH,
            theme::resize_handle_style().bg(body_style.bg.unwrap_or(theme::desktop_bg())),
        );
    }
}

fn draw_taskbar(buffer: &mut Buffer, area: TermRect, desktop: &Desktop<TermSurface>) {
    let taskbar = desktop.taskbar();
    let strip = clamp_to_area(taskbar.area(), area);
    if strip.height == 0 {
        return;
    }
    fill(buffer, strip, " ", theme::taskbar_bg());
    for (_, rect, entry) in taskbar.iter() {
        let style = if entry.active {
            theme::task_button_active_style()
        } else if entry.minimized {
            theme::task_button_minimized_style()
        } else {
            theme::task_button_style()
        };
        let button = clamp_to_area(rect, strip);
        if button.width == 0 {
            continue;
        }
        fill(buffer, button, " ", style);
        let label = format!("▪ {}", entry.title);
        let truncated: String = label
            .chars()
            .take(button.width.saturating_sub(2) as usize)
            .collect();
        put_str(
            buffer,
            button,
            button.x as i32 + 1,
            button.y as i32,
            &truncated,
            style,
        );
    }
}

/// Intersects a container-local-or-screen rect with the terminal area.
fn clamp_to_area(rect: Rect, area: TermRect) -> TermRect {
    let x0 = rect.x.max(area.x as i32);
    let y0 = rect.y.max(area.y as i32);
    let x1 = rect.right().min(area.x as i32 + area.width as i32);
    let y1 = rect.bottom().min(area.y as i32 + area.height as i32);
    if x1 <= x0 || y1 <= y0 {
        return TermRect::new(area.x, area.y, 0, 0);
    }
    TermRect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16)
}

fn fill(buffer: &mut Buffer, rect: TermRect, symbol: &str, style: Style) {
    for y in rect.y..rect.y.saturating_add(rect.height) {
        for x in rect.x..rect.x.saturating_add(rect.width) {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        }
    }
}

fn put(buffer: &mut Buffer, clip: TermRect, x: i32, y: i32, symbol: &str, style: Style) {
    if x < clip.x as i32
        || y < clip.y as i32
        || x >= clip.x as i32 + clip.width as i32
        || y >= clip.y as i32 + clip.height as i32
    {
        return;
    }
    if let Some(cell) = buffer.cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

fn put_str(buffer: &mut Buffer, clip: TermRect, x: i32, y: i32, text: &str, style: Style) {
    for (index, ch) in text.chars().enumerate() {
        put(
            buffer,
            clip,
            x + index as i32,
            y,
            &ch.to_string(),
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DesktopConfig, WindowConfig};
    use crate::window::chrome::ChromeMetrics;

    #[test]
    fn container_excludes_status_and_taskbar_rows() {
        let mut surface = TermSurface::new(80, 24, true);
        assert_eq!(surface.container_bounds(), Rect::new(0, 1, 80, 22));
        assert_eq!(surface.taskbar_area(), Rect::new(0, 23, 80, 1));

        let mut bare = TermSurface::new(80, 24, false);
        assert_eq!(bare.container_bounds(), Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn resize_moves_the_container_edges() {
        let mut surface = TermSurface::new(80, 24, true);
        surface.resize(120, 40);
        assert_eq!(surface.container_bounds(), Rect::new(0, 1, 120, 38));
        assert_eq!(surface.taskbar_area(), Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn degenerate_terminal_yields_an_empty_container() {
        let mut surface = TermSurface::new(80, 1, true);
        assert!(surface.container_bounds().is_empty());
    }

    #[test]
    fn draw_desktop_paints_title_and_taskbar_label() {
        let surface = TermSurface::new(80, 24, true);
        let config = DesktopConfig {
            windows: vec![WindowConfig {
                title: "Files".to_string(),
                width: 40,
                height: 10,
                min_width: 10,
                min_height: 4,
                ..WindowConfig::default()
            }],
            ..DesktopConfig::default()
        };
        let mut desktop = Desktop::new(surface, &config).unwrap();
        desktop
            .manager_mut()
            .set_metrics(ChromeMetrics::terminal());
        let taskbar_area = desktop.surface_mut().taskbar_area();
        desktop.set_taskbar_area(taskbar_area);

        let area = TermRect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        draw_desktop(&mut buffer, area, &desktop);

        // title starts one cell into the header row, below the status row
        let header: String = (1..=5)
            .map(|x| buffer.cell((x as u16, 1)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(header, "Files");
        // taskbar button on the bottom row
        let button: String = (1..=7)
            .map(|x| buffer.cell((x as u16, 23)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(button, "▪ Files");
    }

    #[test]
    fn clamping_clips_rects_that_leave_the_terminal() {
        let area = TermRect::new(0, 0, 80, 24);
        assert_eq!(
            clamp_to_area(Rect::new(-5, -5, 20, 20), area),
            TermRect::new(0, 0, 15, 15)
        );
        assert_eq!(clamp_to_area(Rect::new(100, 0, 10, 10), area).width, 0);
    }
}
