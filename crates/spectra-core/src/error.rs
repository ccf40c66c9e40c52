use thiserror::Error;

/// Rejected UI input. The config is left untouched when one of these is returned.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown center effect `{0}`")]
    UnknownCenterEffect(String),
    #[error("unknown visual version `{0}`")]
    UnknownVersion(String),
    #[error("unknown control `{0}`")]
    UnknownControl(String),
    #[error("control `{control}` expects a number, got `{value}`")]
    InvalidNumber { control: &'static str, value: String },
}

/// Degraded-frame conditions. None of these stop the render loop.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("audio analysis unavailable: {0}")]
    AudioUnavailable(String),
    #[error("pixel buffer access failed: {0}")]
    Pixels(String),
}
