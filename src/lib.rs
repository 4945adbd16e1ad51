// Pcaudio Shim - No-op audio output backend
// Link-compatible stand-in for pcaudiolib's audio_object interface on
// platforms where real audio playback is unavailable or undesired

// Module declarations
pub mod audio;
pub mod error;
pub mod ffi;

// Re-exports for convenience
pub use audio::AudioObject;
pub use error::{AudioError, ErrorCode, STATUS_SUCCESS};

use once_cell::sync::Lazy;

static LOGGING: Lazy<()> = Lazy::new(init_logging);

/// Initialize Android logging
#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("pcaudio-shim"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    // The host application may have installed its own logger already.
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// One-time logger setup.
///
/// The C ABI has no dedicated init entry point, so this is forced from
/// `create_audio_device_object` on first use.
pub(crate) fn ensure_logging() {
    Lazy::force(&LOGGING);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_logging_is_idempotent() {
        ensure_logging();
        ensure_logging();
    }
}
