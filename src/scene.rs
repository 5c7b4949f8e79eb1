//! Frame composition
//!
//! Turns simulation state into a draw list: background, container, ball,
//! then the text overlay on top.

use crate::consts::OVERLAY_POS;
use crate::draw::{Frame, colors};
use crate::sim::SimState;

/// Vertical distance between overlay lines
const OVERLAY_LINE_HEIGHT: f32 = 20.0;

/// Overlay options for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    /// Measured frame rate, shown when set
    pub fps: Option<u32>,
}

/// Debug line describing the ball's velocity
pub fn velocity_text(state: &SimState) -> String {
    format!(
        "Velocity X: {:.2}, Velocity Y: {:.2}",
        state.ball.vel.x, state.ball.vel.y
    )
}

/// Build the draw list for the current state
pub fn compose(state: &SimState, overlay: &Overlay) -> Frame {
    let mut frame = Frame::new();

    frame.fill_background(colors::BLACK);
    state.hexagon.render(&mut frame);
    state.ball.render(&mut frame);

    frame.text(velocity_text(state), OVERLAY_POS, colors::WHITE);
    if let Some(fps) = overlay.fps {
        let pos = OVERLAY_POS + glam::Vec2::new(0.0, OVERLAY_LINE_HEIGHT);
        frame.text(format!("FPS: {}", fps), pos, colors::WHITE);
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use glam::Vec2;

    #[test]
    fn test_velocity_text_format() {
        let state = SimState::new();
        assert_eq!(velocity_text(&state), "Velocity X: 5.00, Velocity Y: -8.00");

        let mut state = SimState::new();
        state.ball.vel = Vec2::new(0.123, -10.5);
        assert_eq!(velocity_text(&state), "Velocity X: 0.12, Velocity Y: -10.50");
    }

    #[test]
    fn test_compose_order() {
        let state = SimState::new();
        let frame = compose(&state, &Overlay::default());
        let commands = frame.commands();

        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], DrawCommand::Clear(colors::BLACK));
        assert!(matches!(commands[1], DrawCommand::PolygonOutline { .. }));
        assert!(matches!(commands[2], DrawCommand::FillCircle { .. }));
        match &commands[3] {
            DrawCommand::Text { text, pos, color } => {
                assert!(text.starts_with("Velocity X:"));
                assert_eq!(*pos, OVERLAY_POS);
                assert_eq!(*color, colors::WHITE);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_fps_line_only_when_requested() {
        let state = SimState::new();
        let frame = compose(&state, &Overlay { fps: Some(59) });

        assert_eq!(frame.len(), 5);
        assert!(matches!(
            &frame.commands()[4],
            DrawCommand::Text { text, .. } if text == "FPS: 59"
        ));
    }
}
