// C ABI surface matching pcaudiolib's audio_object interface
// These exports let a linker substitute this crate for the real library;
// each entry point is a thin wrapper over the no-op AudioObject.

#![allow(dead_code)] // entry points are called by foreign code, not from Rust

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::slice;

use log::debug;

use crate::audio::AudioObject;
use crate::error::{AudioError, ErrorCode, STATUS_SUCCESS};

/// The string handed back by `audio_object_strerror` for every code.
static SUCCESS: &CStr = c"Success";

/// Convert a safe-layer result into the C status convention (0 = success).
fn status_from(result: Result<(), AudioError>) -> c_int {
    match result {
        Ok(()) => STATUS_SUCCESS,
        Err(err) => err.code(),
    }
}

/// Create a new audio object
///
/// The descriptive strings are never inspected or retained, so they are not
/// converted out of their C representation; any of them may be null.
///
/// # Returns
/// An owned handle; release it with [`audio_object_destroy`]. Never null.
#[no_mangle]
pub extern "C" fn create_audio_device_object(
    _device: *const c_char,
    _application_name: *const c_char,
    _description: *const c_char,
) -> *mut AudioObject {
    crate::ensure_logging();
    debug!("[AudioShim] create_audio_device_object");
    Box::into_raw(Box::new(AudioObject::new(None, None, None)))
}

/// Open the audio output. Always succeeds.
#[no_mangle]
pub extern "C" fn audio_object_open(
    object: *mut AudioObject,
    format: c_int,
    rate: u32,
    channels: u8,
) -> c_int {
    if object.is_null() {
        return STATUS_SUCCESS;
    }
    // SAFETY: a non-null handle came from create_audio_device_object and, per
    // the library contract, has not been destroyed.
    let object = unsafe { &mut *object };
    status_from(object.open(format, rate, channels))
}

/// Write a buffer to the audio output. The bytes are discarded; always
/// succeeds.
#[no_mangle]
pub extern "C" fn audio_object_write(
    object: *mut AudioObject,
    data: *const c_void,
    bytes: usize,
) -> c_int {
    if object.is_null() {
        return STATUS_SUCCESS;
    }
    let data: &[u8] = if data.is_null() || bytes == 0 {
        &[]
    } else {
        // SAFETY: caller guarantees `data` points to `bytes` readable bytes,
        // per the real library's write contract.
        unsafe { slice::from_raw_parts(data as *const u8, bytes) }
    };
    // SAFETY: as in audio_object_open.
    let object = unsafe { &mut *object };
    status_from(object.write(data))
}

/// Wait for playback to complete. Returns immediately; always succeeds.
#[no_mangle]
pub extern "C" fn audio_object_drain(object: *mut AudioObject) -> c_int {
    if object.is_null() {
        return STATUS_SUCCESS;
    }
    // SAFETY: as in audio_object_open.
    let object = unsafe { &mut *object };
    status_from(object.drain())
}

/// Discard buffered audio. Returns immediately; always succeeds.
#[no_mangle]
pub extern "C" fn audio_object_flush(object: *mut AudioObject) -> c_int {
    if object.is_null() {
        return STATUS_SUCCESS;
    }
    // SAFETY: as in audio_object_open.
    let object = unsafe { &mut *object };
    status_from(object.flush())
}

/// Close the audio output. Does not release the handle.
#[no_mangle]
pub extern "C" fn audio_object_close(object: *mut AudioObject) {
    if object.is_null() {
        return;
    }
    // SAFETY: as in audio_object_open.
    let object = unsafe { &mut *object };
    object.close();
}

/// Release the handle. Safe to call with null (no-op).
#[no_mangle]
pub extern "C" fn audio_object_destroy(object: *mut AudioObject) {
    if object.is_null() {
        return;
    }
    debug!("[AudioShim] audio_object_destroy");
    // SAFETY: a non-null handle is an owned allocation from
    // create_audio_device_object; this reclaims it exactly once.
    unsafe {
        let _ = Box::from_raw(object);
    }
}

/// Map an error code to a message.
///
/// Every code maps to the literal "Success" here, a known deviation from a
/// real error-reporting contract; nothing in this backend ever fails, so
/// there are no distinct codes to describe.
#[no_mangle]
pub extern "C" fn audio_object_strerror(
    _object: *mut AudioObject,
    _error: c_int,
) -> *const c_char {
    SUCCESS.as_ptr()
}
