//! Error types for stepper-sequencer.
//!
//! Provides unified error handling across configuration, rotation requests,
//! and digital I/O.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-sequencer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Rotation request rejected before any GPIO activity
    Request(RequestError),
    /// Underlying digital I/O capability failure
    Hardware(HardwareError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Rotation preset name not found in configuration
    RotationNotFound(heapless::String<32>),
    /// The same output line is assigned to more than one coil lead
    DuplicateOutputLine(u8),
    /// The sensor input line collides with a motor output line
    SensorLineConflict(u8),
    /// Rotation preset carries neither an angle nor a time limit
    UnboundedRotation(heapless::String<32>),
    /// Rotation preset requests a sensor but no `[sensor]` section exists
    SensorNotConfigured(heapless::String<32>),
    /// Registry cannot accept another entry
    RegistryFull,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Rotation request errors, raised before any output-line write.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Neither an angle nor a time limit was supplied
    MissingBound,
}

/// Digital I/O capability failures, propagated unmodified (no retries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// An output line could not be driven
    OutputPin,
    /// The sensor input line could not be read
    InputPin,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::RotationNotFound(name) => write!(f, "Rotation '{}' not found", name),
            ConfigError::DuplicateOutputLine(line) => {
                write!(f, "Output line {} assigned to more than one coil lead", line)
            }
            ConfigError::SensorLineConflict(line) => {
                write!(f, "Sensor line {} collides with a motor output line", line)
            }
            ConfigError::UnboundedRotation(name) => {
                write!(f, "Rotation '{}' needs an angle or a time limit", name)
            }
            ConfigError::SensorNotConfigured(name) => {
                write!(f, "Rotation '{}' uses a sensor but none is configured", name)
            }
            ConfigError::RegistryFull => write!(f, "Rotation registry is full"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingBound => {
                write!(f, "Rotation request needs an angle or a time limit")
            }
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::OutputPin => write!(f, "Output line write failed"),
            HardwareError::InputPin => write!(f, "Sensor line read failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RequestError> for Error {
    fn from(e: RequestError) -> Self {
        Error::Request(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for RequestError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
