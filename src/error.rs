// Error types for the pcaudio shim
//
// This module defines the status convention and error type for the audio
// object surface, providing error codes suitable for FFI communication.
// The shim itself never fails, so the error type exists to keep the safe
// layer's signatures honest and to give the FFI layer a status mapping.

use std::fmt;
use std::os::raw::c_int;

/// Status code returned by every I/O entry point on success.
pub const STATUS_SUCCESS: c_int = 0;

/// Message returned by `audio_object_strerror` for every error code.
pub const STRERROR_SUCCESS: &str = "Success";

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from error types, enabling consistent status conversion across the
/// FFI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Audio-related errors
///
/// No shim code path constructs this today: every operation is a no-op that
/// reports success. The variant marks where a genuine backend would surface
/// device failures.
///
/// Error code range: 1001
#[derive(Debug, Clone, PartialEq)]
pub enum AudioError {
    /// Backend error occurred
    Backend { details: String },
}

impl ErrorCode for AudioError {
    fn code(&self) -> i32 {
        match self {
            AudioError::Backend { .. } => 1001,
        }
    }

    fn message(&self) -> String {
        match self {
            AudioError::Backend { details } => {
                format!("Audio backend error: {}", details)
            }
        }
    }
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AudioError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for AudioError {}
