use std::error::Error;
use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use genecrew::{app::View, logging, member::roster_report, ui::render_ui, App};

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();
    logging::set_log_level();
    logging::init_logging()?;
    logging::log_system_info();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| render_ui(f, &app))?;
        if let Event::Key(key) = event::read()? {
            match app.view {
                View::Entry => match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Enter => app.submit_member(),
                    KeyCode::Tab | KeyCode::Down => app.next_field(),
                    KeyCode::BackTab | KeyCode::Up => app.prev_field(),
                    KeyCode::Backspace => app.on_backspace(),
                    KeyCode::F(2) => app.show_roster(),
                    KeyCode::Char(c) => app.on_key(c),
                    _ => {}
                },
                View::Roster => match key.code {
                    KeyCode::Esc => app.show_entry(),
                    KeyCode::Char('q') => break,
                    KeyCode::Down => app.next_member(),
                    KeyCode::Up => app.prev_member(),
                    KeyCode::Char('c') => app.mark_for_comparison(),
                    KeyCode::Char('x') => app.clear_comparison(),
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if !app.roster.is_empty() {
        print!("{}", roster_report(&app.roster));
    }

    logging::log_shutdown();
    Ok(())
}
