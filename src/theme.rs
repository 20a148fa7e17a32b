use ratatui::style::{Color, Modifier, Style};

// Centralized theme colors for the terminal backend. Keep these as small
// helpers so a future palette swap stays in one place.

pub fn desktop_bg() -> Color {
    Color::Black
}

// Window chrome
pub fn header_active_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn header_inactive_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn body_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::Gray)
}

pub fn resize_handle_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// Taskbar
pub fn taskbar_bg() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::Black)
}

pub fn task_button_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn task_button_active_style() -> Style {
    Style::default()
        .bg(Color::Gray)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn task_button_minimized_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .fg(Color::Gray)
        .add_modifier(Modifier::DIM)
}

// Status bar
pub fn status_bar_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}
