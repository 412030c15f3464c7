//! Host framework boundary: the SuperBLT plugin ABI, its Lua imports and
//! the mandatory attribution exports.

pub mod ffi;
pub mod legal;
pub mod plugin;
