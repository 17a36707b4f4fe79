use ratatui::layout::Rect;

use super::layout::{hit_test, screen_layout};

#[test]
fn hit_test_finds_each_button_at_its_center() {
    let layout = screen_layout(Rect::new(0, 0, 100, 30));

    for (id, rect) in layout.buttons {
        let cx = rect.x + rect.width / 2;
        let cy = rect.y + rect.height / 2;
        assert_eq!(hit_test(&layout, cx, cy), Some(id));
    }
}

#[test]
fn click_outside_every_button_hits_nothing() {
    let layout = screen_layout(Rect::new(0, 0, 100, 30));

    // Header, status line and queue list are not buttons.
    assert_eq!(hit_test(&layout, 1, layout.header.y), None);
    assert_eq!(hit_test(&layout, 1, layout.status.y + 1), None);
    assert_eq!(hit_test(&layout, 1, layout.queue.y + 1), None);
}

#[test]
fn buttons_do_not_overlap() {
    let layout = screen_layout(Rect::new(0, 0, 101, 30));

    for (i, (_, a)) in layout.buttons.iter().enumerate() {
        for (_, b) in layout.buttons.iter().skip(i + 1) {
            assert!(!a.intersects(*b));
        }
    }
}

#[test]
fn zero_sized_area_hits_nothing() {
    let layout = screen_layout(Rect::new(0, 0, 0, 0));

    assert_eq!(hit_test(&layout, 0, 0), None);
    assert_eq!(hit_test(&layout, 5, 5), None);
}
