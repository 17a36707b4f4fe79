use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::audio::Backend;
use crate::config;
use crate::player::Player;
use crate::runtime::dialog;
use crate::ui;

/// Main terminal event loop: draws the fixed layout once per iteration and
/// dispatches button clicks to the player. Returns `Ok(())` on quit.
pub fn run<B: Backend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, player, &settings.ui))?;

        if !event::poll(Duration::from_millis(settings.ui.tick_ms))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                // Edge-triggered: one press, one action, regardless of how
                // long the button stays held.
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    continue;
                }
                let size = terminal.size()?;
                let layout = ui::screen_layout(Rect::new(0, 0, size.width, size.height));
                handle_click(mouse.column, mouse.row, &layout, settings, player);
            }
            _ => {}
        }
    }

    Ok(())
}

fn handle_click<B: Backend>(
    column: u16,
    row: u16,
    layout: &ui::ScreenLayout,
    settings: &config::Settings,
    player: &mut Player<B>,
) {
    let Some(button) = ui::hit_test(layout, column, row) else {
        return;
    };

    match button {
        ui::ButtonId::Play => player.play(),
        ui::ButtonId::Pause => player.pause(),
        ui::ButtonId::Stop => player.stop(),
        ui::ButtonId::OpenFile => {
            // Modal: blocks the loop until dismissed.
            if let Some(path) = dialog::pick_track(&settings.library) {
                player.load_track(&path);
            }
        }
        ui::ButtonId::OpenFolder => {
            if let Some(dir) = dialog::pick_folder() {
                player.load_folder(&dir, &settings.library);
            }
        }
    }
}
