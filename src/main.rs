mod app;
mod config;
mod page;
mod ui;
mod widget;

use std::io;
use std::time::{Duration, Instant};

use arboard::Clipboard;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use app::App;
use config::CATEGORIES;

fn main() -> io::Result<()> {
    env_logger::init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    // Teardown cancels anything the widget still has scheduled.
    app.widget.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Reveal whatever this frame puts in the viewport.
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ui::layout(area, app);
        ui::observe_reveals(&layout, &mut app.page);

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(app.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key, area) {
                        return Ok(());
                    }
                }
                Event::Paste(text) => {
                    if app.widget.is_open() && app.widget.input_focused() {
                        app.widget.input.push_str(&filter_paste(&text));
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse, area),
                _ => {}
            }
        }
    }
}

/// Newlines would fire a send mid-paste; flatten them to spaces.
fn filter_paste(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

/// Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent, area: Rect) -> bool {
    let now = Instant::now();
    match key.code {
        KeyCode::Esc => {
            // Escape closes the widget only while it is open.
            if app.widget.is_open() {
                app.widget.close();
            } else {
                return true;
            }
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return true;
        }
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.handle_export();
        }
        KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.widget.is_open() && app.widget.input_focused() {
                if let Ok(mut clipboard) = Clipboard::new() {
                    if let Ok(text) = clipboard.get_text() {
                        app.widget.input.push_str(&filter_paste(&text));
                    }
                }
            }
        }
        KeyCode::Enter => {
            if app.widget.is_open() && app.widget.input_focused() {
                app.send_message(now);
            }
        }
        KeyCode::Backspace => {
            if app.widget.is_open() && app.widget.input_focused() {
                app.widget.input.pop();
            }
        }
        KeyCode::Char(c) => {
            if app.widget.is_open() && app.widget.input_focused() {
                app.widget.input.push(c);
            } else if let Some(i) = CATEGORIES.iter().position(|cat| cat.key == c) {
                app.category_trigger(i, now);
            }
        }
        KeyCode::Up => {
            if app.widget.is_open() {
                let max = transcript_scroll_max(app, area);
                app.widget.scroll_up(max);
            } else {
                app.page.scroll_by(-(app.config.scroll_step as isize), ui::max_scroll(area));
            }
        }
        KeyCode::Down => {
            if app.widget.is_open() {
                app.widget.scroll_down();
            } else {
                app.page.scroll_by(app.config.scroll_step as isize, ui::max_scroll(area));
            }
        }
        KeyCode::PageUp => {
            let step = area.height.saturating_sub(3) as isize;
            app.page.scroll_by(-step, ui::max_scroll(area));
        }
        KeyCode::PageDown => {
            let step = area.height.saturating_sub(3) as isize;
            app.page.scroll_by(step, ui::max_scroll(area));
        }
        _ => {}
    }
    false
}

/// How far the open transcript can scroll back, in rendered lines.
fn transcript_scroll_max(app: &App, area: Rect) -> usize {
    ui::layout(area, app)
        .panel
        .map(|p| ui::transcript_max_scroll(app, p.messages))
        .unwrap_or(0)
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    let now = Instant::now();
    let layout = ui::layout(area, app);
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Panel controls first: they sit on top of everything.
            if let Some(panel) = &layout.panel {
                if ui::contains(panel.close, col, row) {
                    log::debug!("close button clicked");
                    app.widget.close();
                    return;
                }
                if ui::contains(panel.send, col, row) {
                    app.send_message(now);
                    return;
                }
                if ui::contains(panel.input, col, row) {
                    app.widget.focus_input();
                    return;
                }
                if ui::contains(panel.area, col, row) {
                    return;
                }
                // Outside the panel: triggers keep it open, anything else
                // closes it.
                if !layout.is_trigger(col, row) {
                    log::debug!("outside click, closing widget");
                    app.widget.close();
                    return;
                }
            }

            if ui::contains(layout.launcher, col, row) {
                log::debug!("launcher clicked");
                app.widget.toggle(now);
                return;
            }

            if let Some(i) = layout.cards.iter().position(|c| ui::contains(*c, col, row)) {
                app.category_trigger(i, now);
                return;
            }

            if ui::contains(layout.hero_chat_button, col, row) {
                log::debug!("start chat button clicked");
                app.page.press_ripple(col, row, layout.hero_chat_button);
                app.widget.open(now);
                return;
            }

            if let Some(live_chat) = layout.channels.first() {
                if ui::contains(*live_chat, col, row) {
                    log::debug!("chat channel clicked");
                    app.widget.open(now);
                    return;
                }
            }

            // Tel affordances are left to the platform: log and move on.
            if ui::contains(layout.hero_phone_button, col, row)
                || ui::contains(layout.phone_footer, col, row)
                || layout.channels.get(1).is_some_and(|c| ui::contains(*c, col, row))
            {
                log::debug!("phone link clicked: tel:{}", config::SUPPORT_PHONE);
            }
        }
        MouseEventKind::ScrollUp => {
            let in_panel = layout.panel.as_ref().is_some_and(|p| ui::contains(p.area, col, row));
            if in_panel {
                let max = transcript_scroll_max(app, area);
                app.widget.scroll_up(max);
            } else {
                app.page.scroll_by(-(app.config.scroll_step as isize), ui::max_scroll(area));
            }
        }
        MouseEventKind::ScrollDown => {
            if layout.panel.as_ref().is_some_and(|p| ui::contains(p.area, col, row)) {
                app.widget.scroll_down();
            } else {
                app.page.scroll_by(app.config.scroll_step as isize, ui::max_scroll(area));
            }
        }
        MouseEventKind::Moved => {
            app.page.hovered_card = layout
                .cards
                .iter()
                .position(|c| c.height > 0 && ui::contains(*c, col, row));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn open_app() -> App {
        let mut app = App::new();
        app.widget.open(Instant::now());
        app
    }

    #[test]
    fn outside_click_closes_open_panel() {
        let mut app = open_app();
        let layout = ui::layout(AREA, &app);
        // Header top-left is neither panel nor trigger.
        assert!(!layout.is_trigger(0, 0));
        handle_mouse(&mut app, click(0, 0), AREA);
        assert!(!app.widget.is_open());
    }

    #[test]
    fn click_inside_panel_keeps_it_open() {
        let mut app = open_app();
        let layout = ui::layout(AREA, &app);
        let messages = layout.panel.as_ref().expect("panel open").messages;
        handle_mouse(&mut app, click(messages.x + 2, messages.y + 2), AREA);
        assert!(app.widget.is_open());
    }

    #[test]
    fn card_click_keeps_panel_open() {
        let mut app = open_app();
        let layout = ui::layout(AREA, &app);
        let card = layout.cards[0];
        assert!(card.height > 0);
        handle_mouse(&mut app, click(card.x + 1, card.y + 1), AREA);
        assert!(app.widget.is_open());
        assert!(app.page.is_card_pressed(0));
    }

    #[test]
    fn close_button_closes_panel() {
        let mut app = open_app();
        let layout = ui::layout(AREA, &app);
        let close = layout.panel.as_ref().expect("panel open").close;
        handle_mouse(&mut app, click(close.x + 1, close.y), AREA);
        assert!(!app.widget.is_open());
    }

    #[test]
    fn send_button_submits_input() {
        let mut app = open_app();
        app.widget.input = "I need help".to_string();
        let layout = ui::layout(AREA, &app);
        let send = layout.panel.as_ref().expect("panel open").send;
        handle_mouse(&mut app, click(send.x + 1, send.y + 1), AREA);
        assert_eq!(app.widget.transcript().len(), 1);
        assert!(app.widget.is_typing());
    }

    #[test]
    fn input_click_focuses_without_closing() {
        let mut app = open_app();
        let layout = ui::layout(AREA, &app);
        let input = layout.panel.as_ref().expect("panel open").input;
        handle_mouse(&mut app, click(input.x + 1, input.y + 1), AREA);
        assert!(app.widget.is_open());
        assert!(app.widget.input_focused());
    }

    #[test]
    fn launcher_click_toggles_panel() {
        let mut app = App::new();
        let launcher = ui::layout(AREA, &app).launcher;
        handle_mouse(&mut app, click(launcher.x + 1, launcher.y + 1), AREA);
        assert!(app.widget.is_open());

        // While open the launcher toggles; it never counts as an
        // outside click.
        handle_mouse(&mut app, click(launcher.x + 1, launcher.y + 1), AREA);
        assert!(!app.widget.is_open());
    }

    #[test]
    fn filter_paste_flattens_newlines() {
        assert_eq!(filter_paste("one\r\ntwo\nthree"), "one two three");
    }
}
