//! Module attribution exports.
//!
//! SuperBLT refuses to load a native module unless it exports these
//! attribution strings; they are read by the host and shown to users.

use std::os::raw::c_char;

/// A `const char*`-shaped export the host reads by symbol name.
#[repr(transparent)]
pub struct ExportedCStr(*const c_char);

// The pointers reference 'static data and are never written.
unsafe impl Sync for ExportedCStr {}

#[no_mangle]
pub static MODULE_LICENCE_DECLARATION: ExportedCStr = ExportedCStr(
    c"This module is licenced under the GNU GPL version 2 or later, or another compatible licence"
        .as_ptr(),
);

#[no_mangle]
pub static MODULE_SOURCE_CODE_LOCATION: ExportedCStr =
    ExportedCStr(c"https://github.com/shatyuka/PAYDAY2-Borderless-Windowed-Updated".as_ptr());

/// Null marks a build without a pinned revision.
#[no_mangle]
pub static MODULE_SOURCE_CODE_REVISION: ExportedCStr = ExportedCStr(std::ptr::null());

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_licence_declaration_mentions_gpl() {
        let text = unsafe { CStr::from_ptr(MODULE_LICENCE_DECLARATION.0) };
        assert!(text.to_str().unwrap().contains("GNU GPL"));
    }

    #[test]
    fn test_source_location_is_a_url() {
        let text = unsafe { CStr::from_ptr(MODULE_SOURCE_CODE_LOCATION.0) };
        assert!(text.to_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_revision_is_unset() {
        assert!(MODULE_SOURCE_CODE_REVISION.0.is_null());
    }
}
