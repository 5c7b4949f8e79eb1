//! Frame loop
//!
//! One iteration per frame: pump events, step the simulation, compose and
//! render the scene, then wait out the rest of the frame interval.

use crate::error::AppError;
use crate::platform::{FrameClock, Platform, Signal};
use crate::renderer::RenderState;
use crate::scene::{Overlay, compose};
use crate::settings::Settings;
use crate::sim::{SimState, tick};

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 60;

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> Result<(), AppError> {
    let mut platform = Platform::new(&settings)?;
    let window = platform.open_window()?;
    let mut render_state = pollster::block_on(RenderState::new(window, &settings))?;

    let mut state = SimState::centered_in(settings.width, settings.height);
    let mut clock = FrameClock::new(settings.target_fps);

    log::info!(
        "Running at {}x{}, target {} fps",
        settings.width,
        settings.height,
        settings.target_fps
    );

    loop {
        if platform.poll() == Signal::Quit {
            break;
        }

        if let Some((width, height)) = platform.take_resize() {
            render_state.resize(width, height);
        }

        tick(&mut state);

        let overlay = Overlay {
            fps: settings.show_fps.then_some(clock.fps()),
        };
        let frame = compose(&state, &overlay);

        match render_state.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                break;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        clock.tick();

        if state.frame % FPS_LOG_INTERVAL == 0 {
            log::debug!("Frame {}: {} fps", state.frame, clock.fps());
        }
    }

    log::info!(
        "Window closed after {} frames ({} bounces)",
        state.frame,
        state.bounces
    );
    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Failed to serialize final state: {}", e),
    }

    Ok(())
}
