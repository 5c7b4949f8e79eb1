//! Startup errors
//!
//! The simulation itself cannot fail. Everything here comes from acquiring a
//! window and a GPU surface to draw on.

use std::fmt;

/// Fatal errors raised while bringing up the window and renderer
#[derive(Debug)]
pub enum AppError {
    /// The platform event loop could not be created or driven
    EventLoop(winit::error::EventLoopError),
    /// The OS refused to create the window
    Window(winit::error::OsError),
    /// The window was closed before it finished opening
    WindowClosedBeforeInit,
    /// Failed to create a surface for rendering
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format or alpha mode for this adapter
    IncompatibleSurface,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            AppError::Window(e) => write!(f, "Failed to create window: {}", e),
            AppError::WindowClosedBeforeInit => {
                write!(f, "Window was closed before initialization finished")
            }
            AppError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            AppError::NoAdapter(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has a GPU with Vulkan/Metal/DX12/GL support.",
                e
            ),
            AppError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            AppError::IncompatibleSurface => {
                write!(f, "GPU surface has no supported format for this adapter")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::SurfaceCreation(e) => Some(e),
            AppError::NoAdapter(e) => Some(e),
            AppError::DeviceCreation(e) => Some(e),
            AppError::WindowClosedBeforeInit | AppError::IncompatibleSurface => None,
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for AppError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        AppError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for AppError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        AppError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for AppError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        AppError::DeviceCreation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_closed_before_init_message() {
        let err = AppError::WindowClosedBeforeInit;
        assert!(err.to_string().contains("closed"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_incompatible_surface_message() {
        let err = AppError::IncompatibleSurface;
        assert!(err.to_string().contains("no supported format"));
        assert!(err.source().is_none());
    }
}
