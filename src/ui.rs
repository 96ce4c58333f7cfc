//! Screen input mapping and HUD text
//!
//! Turns raw window input (clicks, key presses, close) into
//! [`SessionCommand`]s for whichever screen is active, and formats the text
//! a renderer overlays on the play field.

use crate::Point;
use crate::session::{SessionCommand, SessionPhase, Snapshot};
use crate::sim::Rect;

/// Half-width of the menu buttons' clickable area
const BUTTON_HALF_WIDTH: f32 = 100.0;

/// Raw input from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Left mouse button pressed at a screen position
    Click(Point),
    /// A key was pressed
    Key(char),
    /// The window close button
    WindowClose,
}

/// Clickable regions of the main menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub play: Rect,
    pub tutorial: Rect,
}

impl MenuLayout {
    /// Buttons centered horizontally, stacked just below the vertical middle
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let left = screen_width / 2.0 - BUTTON_HALF_WIDTH;
        let mid = screen_height / 2.0;
        Self {
            play: Rect::new(left, mid - 30.0, BUTTON_HALF_WIDTH * 2.0, 60.0),
            tutorial: Rect::new(left, mid + 30.0, BUTTON_HALF_WIDTH * 2.0, 110.0),
        }
    }

    /// Which button (if any) a click lands on. Button edges are not clickable.
    pub fn hit_test(&self, p: Point) -> Option<SessionCommand> {
        let inside =
            |r: &Rect| p.x > r.left() && p.x < r.right() && p.y > r.top() && p.y < r.bottom();
        if inside(&self.play) {
            Some(SessionCommand::Play)
        } else if inside(&self.tutorial) {
            Some(SessionCommand::Tutorial)
        } else {
            None
        }
    }
}

/// Map a raw input event to a command for the active screen
pub fn command_for(
    phase: SessionPhase,
    event: InputEvent,
    menu: &MenuLayout,
) -> Option<SessionCommand> {
    match (phase, event) {
        (_, InputEvent::WindowClose) => Some(SessionCommand::QuitSignal),
        (SessionPhase::Menu, InputEvent::Click(p)) => menu.hit_test(p),
        (SessionPhase::Tutorial, InputEvent::Click(_)) => Some(SessionCommand::Dismiss),
        (SessionPhase::GameOver, InputEvent::Key(key)) => match key.to_ascii_lowercase() {
            'r' => Some(SessionCommand::Restart),
            'm' => Some(SessionCommand::ToMenu),
            'q' => Some(SessionCommand::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Overlay text for the current frame
pub fn hud_lines(snapshot: &Snapshot<'_>) -> Vec<String> {
    match snapshot.phase {
        SessionPhase::Menu => vec!["PLAY".to_string(), "TUTORIAL".to_string()],
        SessionPhase::Tutorial => vec![
            "Move your hand left or right to steer".to_string(),
            "Dodge red blocks, catch green ones".to_string(),
            "Click to return".to_string(),
        ],
        SessionPhase::Playing => vec![
            format!("Score: {}", snapshot.score),
            format!("Lives: {}", snapshot.lives),
        ],
        SessionPhase::GameOver => vec![
            "GAME OVER".to_string(),
            format!("Final Score: {}", snapshot.score),
            "R: Restart, M: Menu, Q: Quit".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionController;
    use crate::tuning::Tuning;

    fn layout() -> MenuLayout {
        MenuLayout::new(580.0, 620.0)
    }

    #[test]
    fn test_menu_buttons() {
        let menu = layout();
        // Screen center is (290, 310)
        assert_eq!(menu.hit_test(Point::new(290.0, 310.0)), Some(SessionCommand::Play));
        assert_eq!(menu.hit_test(Point::new(200.0, 285.0)), Some(SessionCommand::Play));
        assert_eq!(menu.hit_test(Point::new(290.0, 400.0)), Some(SessionCommand::Tutorial));
        assert_eq!(menu.hit_test(Point::new(290.0, 449.0)), Some(SessionCommand::Tutorial));
        assert_eq!(menu.hit_test(Point::new(290.0, 100.0)), None);
        assert_eq!(menu.hit_test(Point::new(50.0, 310.0)), None);
    }

    #[test]
    fn test_menu_button_edges_not_clickable() {
        let menu = layout();
        assert_eq!(menu.hit_test(Point::new(190.0, 310.0)), None);
        // Boundary between the two buttons
        assert_eq!(menu.hit_test(Point::new(290.0, 340.0)), None);
        assert_eq!(menu.hit_test(Point::new(290.0, 450.0)), None);
    }

    #[test]
    fn test_game_over_keys() {
        let menu = layout();
        let over = SessionPhase::GameOver;
        assert_eq!(command_for(over, InputEvent::Key('r'), &menu), Some(SessionCommand::Restart));
        assert_eq!(command_for(over, InputEvent::Key('M'), &menu), Some(SessionCommand::ToMenu));
        assert_eq!(command_for(over, InputEvent::Key('q'), &menu), Some(SessionCommand::Quit));
        assert_eq!(command_for(over, InputEvent::Key('x'), &menu), None);
        assert_eq!(
            command_for(over, InputEvent::Click(Point::new(290.0, 310.0)), &menu),
            None
        );
    }

    #[test]
    fn test_tutorial_any_click_dismisses() {
        let menu = layout();
        let event = InputEvent::Click(Point::new(3.0, 4.0));
        assert_eq!(
            command_for(SessionPhase::Tutorial, event, &menu),
            Some(SessionCommand::Dismiss)
        );
    }

    #[test]
    fn test_window_close_everywhere() {
        let menu = layout();
        for phase in [
            SessionPhase::Menu,
            SessionPhase::Tutorial,
            SessionPhase::Playing,
            SessionPhase::GameOver,
        ] {
            assert_eq!(
                command_for(phase, InputEvent::WindowClose, &menu),
                Some(SessionCommand::QuitSignal)
            );
        }
    }

    #[test]
    fn test_playing_ignores_keys_and_clicks() {
        let menu = layout();
        assert_eq!(command_for(SessionPhase::Playing, InputEvent::Key('q'), &menu), None);
        assert_eq!(
            command_for(SessionPhase::Playing, InputEvent::Click(Point::ZERO), &menu),
            None
        );
    }

    #[test]
    fn test_hud_lines() {
        let mut ctl = SessionController::new(Tuning::default(), Some(1));
        ctl.handle(SessionCommand::Play);
        assert_eq!(hud_lines(&ctl.snapshot()), vec!["Score: 1", "Lives: 3"]);
    }
}
