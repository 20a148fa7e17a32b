use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use desk_wm::config::{DesktopConfig, WindowConfig, load_config};
use desk_wm::desktop::Desktop;
use desk_wm::render::{TermSurface, render_desktop};
use desk_wm::surface::{PointerEvent, PointerPhase};
use desk_wm::logging;
use desk_wm::window::chrome::ChromeMetrics;

#[derive(Debug, Parser)]
#[command(name = "desk-wm", about = "Desktop-style window manager in the terminal")]
struct Args {
    /// TOML desktop configuration; without it a single default window opens.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => load_config(path).map_err(io::Error::other)?,
        None => DesktopConfig {
            windows: vec![WindowConfig {
                title: "Welcome".to_string(),
                x: 4,
                y: 2,
                width: 48,
                height: 14,
                min_width: 20,
                min_height: 6,
                content: "Drag the header to move.\nDrag the corner to resize.\nCtrl+Q quits."
                    .to_string(),
                ..WindowConfig::default()
            }],
            ..DesktopConfig::default()
        },
    };

    let (cols, rows) = terminal::size()?;
    let surface = TermSurface::new(cols, rows, config.status_bar.enabled);
    let mut desktop = Desktop::new(surface, &config).map_err(io::Error::other)?;
    desktop.manager_mut().set_metrics(ChromeMetrics::terminal());
    let taskbar_area = desktop.surface_mut().taskbar_area();
    desktop.set_taskbar_area(taskbar_area);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut desktop);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    desktop: &mut Desktop<TermSurface>,
) -> io::Result<()> {
    loop {
        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        desktop.tick(&clock);
        terminal.draw(|frame| render_desktop(frame, desktop))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = map_mouse(mouse) {
                    desktop.handle_pointer(pointer);
                }
            }
            Event::Resize(cols, rows) => {
                desktop.surface_mut().resize(cols, rows);
                desktop.handle_container_resize();
                let taskbar_area = desktop.surface_mut().taskbar_area();
                desktop.set_taskbar_area(taskbar_area);
            }
            // a focus loss mid-drag must not leave the gesture dangling
            Event::FocusLost => {
                desktop.handle_pointer(PointerEvent::new(PointerPhase::Cancel, 0, 0));
            }
            _ => {}
        }
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (mouse.column as i32, mouse.row as i32);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::new(PointerPhase::Down, x, y)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::new(PointerPhase::Move, x, y)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::new(PointerPhase::Up, x, y)),
        _ => None,
    }
}
