//! SuperBLT flat-API imports.
//!
//! The loader resolves its API into exported global function-pointer slots,
//! one per import, looked up by symbol name in the plugin. Only the handful
//! this plugin actually uses are declared. Each slot is written exactly once
//! by the host before `Plugin_Init` runs; until then (and in tests) every
//! wrapper degrades to a harmless fallback.

#![allow(non_camel_case_types, non_upper_case_globals)]

use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr::addr_of;

/// Opaque Lua state (LuaJIT, Lua 5.1 API)
#[repr(C)]
pub struct lua_State {
    _private: [u8; 0],
}

pub type lua_CFunction = unsafe extern "C" fn(state: *mut lua_State) -> c_int;
pub type lua_Integer = isize;

// Host log stream levels, matching the loader's LogType enum.
pub const LOG_LEVEL_LOG: i32 = 1;
pub const LOG_LEVEL_WARN: i32 = 3;
pub const LOG_LEVEL_ERROR: i32 = 4;

type Pd2LogFn = unsafe extern "C" fn(*const c_char, c_int, *const c_char, c_int);
type CheckIntegerFn = unsafe extern "C" fn(*mut lua_State, c_int) -> lua_Integer;
type GetTopFn = unsafe extern "C" fn(*mut lua_State) -> c_int;
type CreateTableFn = unsafe extern "C" fn(*mut lua_State, c_int, c_int);
type PushCClosureFn = unsafe extern "C" fn(*mut lua_State, lua_CFunction, c_int);
type SetFieldFn = unsafe extern "C" fn(*mut lua_State, c_int, *const c_char);

#[no_mangle]
pub static mut pd2_log: Option<Pd2LogFn> = None;

#[no_mangle]
pub static mut luaL_checkinteger: Option<CheckIntegerFn> = None;

#[no_mangle]
pub static mut lua_gettop: Option<GetTopFn> = None;

#[no_mangle]
pub static mut lua_createtable: Option<CreateTableFn> = None;

#[no_mangle]
pub static mut lua_pushcclosure: Option<PushCClosureFn> = None;

#[no_mangle]
pub static mut lua_setfield: Option<SetFieldFn> = None;

const LOG_SOURCE: &std::ffi::CStr = c"borderless_windowed";

/// Write a line to the host log stream, or stderr when the import is
/// missing.
pub fn host_log(level: i32, message: &str) {
    let slot = unsafe { *addr_of!(pd2_log) };
    match slot {
        Some(log) => {
            if let Ok(message) = CString::new(message) {
                unsafe { log(message.as_ptr(), level, LOG_SOURCE.as_ptr(), 0) };
            }
        }
        None => eprintln!("{}", message),
    }
}

/// `luaL_checkinteger`: raises a Lua error (in the host) for a missing or
/// non-numeric argument, so a `Some` return here is a valid integer.
///
/// # Safety
/// `state` must be the live state the host passed to the current call.
pub unsafe fn check_integer(state: *mut lua_State, index: c_int) -> Option<lua_Integer> {
    let slot = *addr_of!(luaL_checkinteger);
    Some(slot?(state, index))
}

/// # Safety
/// `state` must be the live state the host passed to the current call.
pub unsafe fn top(state: *mut lua_State) -> c_int {
    match *addr_of!(lua_gettop) {
        Some(gettop) => gettop(state),
        None => 0,
    }
}

/// Push a fresh table. No-op when the import is missing.
///
/// # Safety
/// `state` must be the live state the host passed to the current call.
pub unsafe fn new_table(state: *mut lua_State) {
    if let Some(createtable) = *addr_of!(lua_createtable) {
        createtable(state, 0, 0);
    }
}

/// Push a C function. No-op when the import is missing.
///
/// # Safety
/// `state` must be the live state the host passed to the current call.
pub unsafe fn push_cfunction(state: *mut lua_State, function: lua_CFunction) {
    if let Some(pushcclosure) = *addr_of!(lua_pushcclosure) {
        pushcclosure(state, function, 0);
    }
}

/// `t[key] = v` where `t` is at `index` and `v` is on top of the stack.
///
/// # Safety
/// `state` must be the live state the host passed to the current call.
pub unsafe fn set_field(state: *mut lua_State, index: c_int, key: &std::ffi::CStr) {
    if let Some(setfield) = *addr_of!(lua_setfield) {
        setfield(state, index, key.as_ptr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_log_without_import_does_not_panic() {
        host_log(LOG_LEVEL_LOG, "falls back to stderr");
    }

    #[test]
    fn test_lua_wrappers_tolerate_missing_imports() {
        // A null state never reaches the host because the slots are unset.
        let state = std::ptr::null_mut();
        unsafe {
            assert_eq!(check_integer(state, 1), None);
            assert_eq!(top(state), 0);
            new_table(state);
            set_field(state, -2, c"change_display_mode");
        }
    }
}
