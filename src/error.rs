//! Error types for the orb.
//!
//! Configuration-range problems (non-positive radii, zero counts) are never
//! errors here: they clamp to safe values inside the particle layer. These
//! types cover the failures that must reach a caller: GPU/window setup and
//! instancing-capacity rejections at regeneration time.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// A particle count the instancing backend cannot hold.
///
/// Returned from regeneration paths instead of silently truncating, so the
/// one-transform-per-record invariant is never broken. The previous particle
/// set stays intact when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// Particle count that was requested.
    pub requested: u32,
    /// Largest count the backend can instance.
    pub available: u32,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Requested {} particles but the instancing backend holds at most {}",
            self.requested, self.available
        )
    }
}

impl std::error::Error for CapacityError {}

/// Errors that can occur when running the orb application.
#[derive(Debug)]
pub enum OrbError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The configured particle count exceeds the backend's capacity.
    Capacity(CapacityError),
}

impl fmt::Display for OrbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            OrbError::Window(e) => write!(f, "Failed to create window: {}", e),
            OrbError::Gpu(e) => write!(f, "GPU error: {}", e),
            OrbError::Capacity(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for OrbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrbError::EventLoop(e) => Some(e),
            OrbError::Window(e) => Some(e),
            OrbError::Gpu(e) => Some(e),
            OrbError::Capacity(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for OrbError {
    fn from(e: winit::error::EventLoopError) -> Self {
        OrbError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for OrbError {
    fn from(e: winit::error::OsError) -> Self {
        OrbError::Window(e)
    }
}

impl From<GpuError> for OrbError {
    fn from(e: GpuError) -> Self {
        OrbError::Gpu(e)
    }
}

impl From<CapacityError> for OrbError {
    fn from(e: CapacityError) -> Self {
        OrbError::Capacity(e)
    }
}
