use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The clickable controls, in left-to-right order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonId {
    Play,
    Pause,
    Stop,
    OpenFile,
    OpenFolder,
}

/// Rectangles for every fixed widget, computed from the frame area.
pub struct ScreenLayout {
    pub header: Rect,
    pub buttons: [(ButtonId, Rect); 5],
    pub status: Rect,
    pub queue: Rect,
}

/// Compute the fixed layout for `area`.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // button row
            Constraint::Length(3), // status line
            Constraint::Min(1),    // queue list
        ])
        .split(area);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(chunks[1]);

    ScreenLayout {
        header: chunks[0],
        buttons: [
            (ButtonId::Play, row[0]),
            (ButtonId::Pause, row[1]),
            (ButtonId::Stop, row[2]),
            (ButtonId::OpenFile, row[3]),
            (ButtonId::OpenFolder, row[4]),
        ],
        status: chunks[2],
        queue: chunks[3],
    }
}

/// Which button, if any, contains the given terminal cell.
pub fn hit_test(layout: &ScreenLayout, column: u16, row: u16) -> Option<ButtonId> {
    layout
        .buttons
        .iter()
        .find(|(_, r)| point_in_rect(column, row, *r))
        .map(|(id, _)| *id)
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
