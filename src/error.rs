use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative length (got {value})")]
    InvalidLength { field: &'static str, value: f64 },
    #[error("window size {width}x{height} has no area")]
    EmptyWindow { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("could not create pixel surface: {0}")]
    Surface(#[from] pixels::Error),
}
