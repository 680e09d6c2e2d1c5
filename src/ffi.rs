//! C ABI over the JSON entry point.
//!
//! Strings crossing the boundary are NUL-terminated UTF-8. Every string
//! returned by this module must be released with [`mdvrp_string_free`].

use std::ffi::{c_char, CStr, CString};

use crate::error::SolveError;
use crate::json::{error_body, respond_json};

/// Solves a JSON request and returns the JSON response body.
///
/// Writes the HTTP-style status code to `status_out` when it is non-null.
/// Returns null only if `request` is null.
///
/// # Safety
///
/// `request` must point to a valid NUL-terminated string and `status_out`
/// must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn mdvrp_solve_json(
    request: *const c_char,
    status_out: *mut libc::c_int,
) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }

    let (status, body) = match CStr::from_ptr(request).to_str() {
        Ok(body) => respond_json(body),
        Err(_) => (400, error_body(&SolveError::InvalidUtf8)),
    };

    if !status_out.is_null() {
        *status_out = libc::c_int::from(status);
    }
    // JSON output never contains interior NUL bytes.
    CString::new(body).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Releases a string returned by [`mdvrp_solve_json`].
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this module that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn mdvrp_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
