//! Crossterm input reduced to the events the shell handles.

use std::time::{Duration, Instant};

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

/// Key presses the shell cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKey {
    Char(char),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Quit,
}

/// Terminal input after conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Key(ShellKey),
    /// Primary (left) button press at a terminal cell.
    Click { x: u16, y: u16 },
    Resize,
}

/// Convert a crossterm event; `None` for input the shell ignores.
pub fn convert_event(event: CrosstermEvent) -> Option<ShellEvent> {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Resize(..) => Some(ShellEvent::Resize),
        _ => None,
    }
}

fn convert_key_event(event: KeyEvent) -> Option<ShellEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('q') if event.modifiers.contains(KeyModifiers::CONTROL) => ShellKey::Quit,
        KeyCode::Char(c) => ShellKey::Char(c),
        KeyCode::Backspace => ShellKey::Backspace,
        KeyCode::Enter => ShellKey::Enter,
        KeyCode::Tab => ShellKey::Tab,
        KeyCode::BackTab => ShellKey::BackTab,
        KeyCode::Up => ShellKey::Up,
        KeyCode::Down => ShellKey::Down,
        _ => return None,
    };
    Some(ShellEvent::Key(key))
}

fn convert_mouse_event(event: MouseEvent) -> Option<ShellEvent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ShellEvent::Click {
            x: event.column,
            y: event.row,
        }),
        _ => None,
    }
}

/// Window within which a repeated click on the same target counts as a
/// double-click. Terminals only report individual presses, so the shell
/// promotes the second one itself.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Tracks the previous click target and promotes a timely repeat.
#[derive(Debug, Default)]
pub struct DoubleClickDetector<T> {
    last: Option<(T, Instant)>,
}

impl<T: Copy + PartialEq> DoubleClickDetector<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record a click on `target`; true when it completes a double-click.
    /// A completed double-click resets the window, so a third click starts
    /// over rather than chaining.
    pub fn observe(&mut self, target: T, now: Instant) -> bool {
        let double = matches!(
            self.last,
            Some((prev, at)) if prev == target && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        self.last = if double { None } else { Some((target, now)) };
        double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_click_within_window_is_a_double() {
        let mut detector = DoubleClickDetector::new();
        let t0 = Instant::now();
        assert!(!detector.observe((1usize, 2usize), t0));
        assert!(detector.observe((1, 2), t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_slow_second_click_is_not_a_double() {
        let mut detector = DoubleClickDetector::new();
        let t0 = Instant::now();
        detector.observe((1usize, 2usize), t0);
        assert!(!detector.observe((1, 2), t0 + Duration::from_millis(401)));
    }

    #[test]
    fn test_click_on_a_different_target_restarts_the_window() {
        let mut detector = DoubleClickDetector::new();
        let t0 = Instant::now();
        detector.observe((1usize, 2usize), t0);
        assert!(!detector.observe((3, 2), t0 + Duration::from_millis(100)));
        assert!(detector.observe((3, 2), t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_triple_click_does_not_chain() {
        let mut detector = DoubleClickDetector::new();
        let t0 = Instant::now();
        detector.observe((0usize, 0usize), t0);
        assert!(detector.observe((0, 0), t0 + Duration::from_millis(100)));
        assert!(!detector.observe((0, 0), t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_ctrl_q_converts_to_quit() {
        let event = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(convert_event(event), Some(ShellEvent::Key(ShellKey::Quit)));
    }

    #[test]
    fn test_plain_q_is_just_a_character() {
        let event = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(
            convert_event(event),
            Some(ShellEvent::Key(ShellKey::Char('q')))
        );
    }

    #[test]
    fn test_only_left_button_presses_become_clicks() {
        let press = |kind| {
            CrosstermEvent::Mouse(MouseEvent {
                kind,
                column: 4,
                row: 7,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            convert_event(press(MouseEventKind::Down(MouseButton::Left))),
            Some(ShellEvent::Click { x: 4, y: 7 })
        );
        assert_eq!(
            convert_event(press(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(
            convert_event(press(MouseEventKind::Up(MouseButton::Left))),
            None
        );
    }
}
