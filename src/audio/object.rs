//! No-op audio object
//!
//! This module provides the opaque resource behind the C ABI surface. It
//! maintains the same operation set as a real audio output (open, write,
//! drain, flush, close) but does not perform any audio I/O: every operation
//! succeeds immediately and no bytes go anywhere.
//!
//! This enables a dependent build to link and run on platforms without audio
//! playback, with calling code behaving as if audio always works.

use log::{debug, trace};

use crate::error::AudioError;

/// No-op audio output object
///
/// Holds no backing device and no buffered data. The single integer field is
/// unused; it keeps the type nonzero-sized so each handle the constructor
/// hands across the C ABI is a distinct allocation.
///
/// A single object is not promised to be safe for concurrent use (matching
/// the real library's contract); independent objects are.
pub struct AudioObject {
    /// Unused; gives the handle nonzero size
    #[allow(dead_code)]
    reserved: i32,
}

impl AudioObject {
    /// Create a new no-op audio object
    ///
    /// # Arguments
    /// * `_device` - Device identifier (ignored, never retained)
    /// * `_application_name` - Application name (ignored, never retained)
    /// * `_description` - Stream description (ignored, never retained)
    pub fn new(
        _device: Option<&str>,
        _application_name: Option<&str>,
        _description: Option<&str>,
    ) -> Self {
        debug!("[AudioObject] created (no-op backend, inputs ignored)");
        AudioObject { reserved: 0 }
    }

    /// Open the audio output
    ///
    /// Format code, sample rate, and channel count are accepted for
    /// interface compatibility and ignored.
    ///
    /// # Returns
    /// Always `Ok(())`
    pub fn open(&mut self, format: i32, rate: u32, channels: u8) -> Result<(), AudioError> {
        trace!(
            "[AudioObject] open: format={}, rate={}, channels={} (ignored)",
            format,
            rate,
            channels
        );
        Ok(())
    }

    /// Write a buffer of samples
    ///
    /// No bytes are consumed or transmitted anywhere; the buffer content is
    /// never read.
    ///
    /// # Returns
    /// Always `Ok(())`
    pub fn write(&mut self, data: &[u8]) -> Result<(), AudioError> {
        trace!("[AudioObject] write: {} bytes discarded", data.len());
        Ok(())
    }

    /// Wait for playback to finish
    ///
    /// Returns immediately; there is no playback to wait for.
    pub fn drain(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    /// Discard any buffered data
    ///
    /// Returns immediately; nothing is ever buffered.
    pub fn flush(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    /// Close the audio output
    ///
    /// No observable effect. Does not release the object; release happens
    /// when the object is dropped.
    pub fn close(&mut self) {
        trace!("[AudioObject] close (no-op)");
    }
}

impl Drop for AudioObject {
    fn drop(&mut self) {
        debug!("[AudioObject] destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_from_arbitrary_inputs() {
        let _with_strings = AudioObject::new(Some("default"), Some("espeak"), Some("speech"));
        let _with_empty = AudioObject::new(Some(""), Some(""), Some(""));
        let _with_none = AudioObject::new(None, None, None);
    }

    #[test]
    fn test_open_succeeds_for_arbitrary_parameters() {
        let mut object = AudioObject::new(None, None, None);

        assert!(object.open(0, 0, 0).is_ok());
        assert!(object.open(1, 22050, 1).is_ok());
        assert!(object.open(-1, u32::MAX, u8::MAX).is_ok());
    }

    #[test]
    fn test_write_ignores_buffer_contents() {
        let mut object = AudioObject::new(None, None, None);

        assert!(object.write(&[]).is_ok());
        assert!(object.write(&[0u8; 4096]).is_ok());
        assert!(object.write(b"not even audio data").is_ok());
    }

    #[test]
    fn test_drain_and_flush_return_immediately() {
        let mut object = AudioObject::new(None, None, None);

        assert!(object.drain().is_ok());
        assert!(object.flush().is_ok());
    }

    #[test]
    fn test_close_leaves_object_usable() {
        let mut object = AudioObject::new(None, None, None);

        object.close();

        // close does not release the object; further calls still succeed
        assert!(object.write(&[1, 2, 3]).is_ok());
        assert!(object.drain().is_ok());
    }

    #[test]
    fn test_full_lifecycle_sequence() {
        let mut object = AudioObject::new(Some("hw:0"), Some("app"), Some("desc"));

        assert!(object.open(7, 48000, 2).is_ok());
        assert!(object.write(&[0u8; 512]).is_ok());
        assert!(object.drain().is_ok());
        assert!(object.flush().is_ok());
        object.close();
    }
}
