//! WASM bindings for the envcraft pipeline.
//!
//! Exposes a C-compatible API suitable for consumption from
//! JavaScript/TypeScript via `wasm-bindgen` or raw WASM imports. The same
//! API also works as a plain `cdylib` on native targets.
//!
//! # Output Buffer
//!
//! Both calls write their result (model JSON or document text) into a
//! thread-local output buffer that stays valid until the next call:
//! read it through [`env_out_ptr`] / [`env_out_len`].

use std::cell::RefCell;

use envcraft_core::compose::{Environment, ImportError, import_document};
use envcraft_core::emit;

// ---------------------------------------------------------------------------
// Result codes
// ---------------------------------------------------------------------------

/// Success.
pub const RESULT_OK: i32 = 0;
/// The input buffer is not valid UTF-8.
pub const RESULT_INVALID_UTF8: i32 = 1;
/// The document text failed to parse as XML.
pub const RESULT_XML_ERROR: i32 = 2;
/// The document parsed but nothing recognizable was found.
pub const RESULT_UNRECOGNIZED: i32 = 3;
/// The model JSON did not deserialize into an environment.
pub const RESULT_INVALID_MODEL: i32 = 4;
/// A null pointer was passed.
pub const RESULT_INTERNAL_ERROR: i32 = 5;

thread_local! {
    static OUT: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

fn set_out(bytes: Vec<u8>) {
    OUT.with(|out| *out.borrow_mut() = bytes);
}

// ---------------------------------------------------------------------------
// Memory management
// ---------------------------------------------------------------------------

/// Allocate `len` bytes the host can write input into.
#[unsafe(no_mangle)]
pub extern "C" fn env_alloc(len: usize) -> *mut u8 {
    let mut buf = vec![0u8; len];
    let ptr = buf.as_mut_ptr();
    std::mem::forget(buf);
    ptr
}

/// Release a buffer obtained from [`env_alloc`].
///
/// # Safety
///
/// `ptr` must come from `env_alloc(len)` and not have been freed already.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn env_dealloc(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(Vec::from_raw_parts(ptr, len, len));
    }
}

/// Pointer to the current output buffer.
#[unsafe(no_mangle)]
pub extern "C" fn env_out_ptr() -> *const u8 {
    OUT.with(|out| out.borrow().as_ptr())
}

/// Length of the current output buffer in bytes.
#[unsafe(no_mangle)]
pub extern "C" fn env_out_len() -> usize {
    OUT.with(|out| out.borrow().len())
}

// ---------------------------------------------------------------------------
// Pipeline calls
// ---------------------------------------------------------------------------

/// Import document text (UTF-8, `len` bytes at `ptr`) into the normalized
/// model. On [`RESULT_OK`] the output buffer holds the model as JSON.
///
/// # Safety
///
/// `ptr` must point to at least `len` valid bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn env_import(ptr: *const u8, len: usize) -> i32 {
    if ptr.is_null() {
        return RESULT_INTERNAL_ERROR;
    }
    let bytes = unsafe { std::slice::from_raw_parts(ptr, len) };
    let Ok(text) = std::str::from_utf8(bytes) else {
        return RESULT_INVALID_UTF8;
    };
    match import_document(text) {
        Ok(env) => match serde_json::to_vec(&env) {
            Ok(json) => {
                set_out(json);
                RESULT_OK
            }
            Err(_) => RESULT_INTERNAL_ERROR,
        },
        Err(ImportError::Xml(_)) => RESULT_XML_ERROR,
        Err(ImportError::UnrecognizedDocument) => RESULT_UNRECOGNIZED,
    }
}

/// Emit a full document from model JSON (`len` bytes at `ptr`). On
/// [`RESULT_OK`] the output buffer holds the document text.
///
/// # Safety
///
/// `ptr` must point to at least `len` valid bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn env_emit(ptr: *const u8, len: usize) -> i32 {
    if ptr.is_null() {
        return RESULT_INTERNAL_ERROR;
    }
    let bytes = unsafe { std::slice::from_raw_parts(ptr, len) };
    let Ok(env) = serde_json::from_slice::<Environment>(bytes) else {
        return RESULT_INVALID_MODEL;
    };
    set_out(emit::document(&env).into_bytes());
    RESULT_OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
