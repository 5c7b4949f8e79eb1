//! Window and event polling
//!
//! winit is driven with `pump_app_events` instead of `run_app`, so the frame
//! loop stays an ordinary `loop` owned by the caller. Each poll hands back a
//! [`Signal`] value telling the loop whether to keep going.

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::AppError;
use crate::settings::Settings;

/// How long to wait for events while the window is still opening
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Result of polling the platform once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

struct WindowHandler {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    quit_requested: bool,
    resized: Option<(u32, u32)>,
    error: Option<winit::error::OsError>,
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                let size = window.inner_size();
                log::info!(
                    "Window created: {}x{} physical (scale {:.2})",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Quit requested");
                self.quit_requested = true;
            }
            WindowEvent::Resized(size) => {
                self.resized = Some((size.width, size.height));
            }
            _ => {}
        }
    }
}

/// Owns the OS event loop and the simulation window
pub struct Platform {
    event_loop: EventLoop<()>,
    handler: WindowHandler,
}

impl Platform {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_resizable(false);

        Ok(Self {
            event_loop,
            handler: WindowHandler {
                attributes,
                window: None,
                quit_requested: false,
                resized: None,
                error: None,
            },
        })
    }

    /// Pump events until the window exists, then return it
    pub fn open_window(&mut self) -> Result<Arc<Window>, AppError> {
        loop {
            if let Some(e) = self.handler.error.take() {
                return Err(e.into());
            }
            if let Some(window) = &self.handler.window {
                return Ok(Arc::clone(window));
            }
            if self.pump(Some(STARTUP_PUMP_TIMEOUT)) == Signal::Quit {
                return Err(AppError::WindowClosedBeforeInit);
            }
        }
    }

    /// Drain pending events without blocking
    pub fn poll(&mut self) -> Signal {
        self.pump(Some(Duration::ZERO))
    }

    /// Latest physical size reported since the last call, if any
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.handler.resized.take()
    }

    fn pump(&mut self, timeout: Option<Duration>) -> Signal {
        let status = self.event_loop.pump_app_events(timeout, &mut self.handler);
        if matches!(status, PumpStatus::Exit(_)) || self.handler.quit_requested {
            Signal::Quit
        } else {
            Signal::Continue
        }
    }
}
