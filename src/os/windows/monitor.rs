//! Win32 monitor enumeration.

use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW,
};

use crate::core::geometry::Rect;
use crate::os::MonitorInfo;

// MONITORINFOF_PRIMARY
const PRIMARY_FLAG: u32 = 1;

/// Enumerate attached monitors in OS order.
///
/// Enumeration failure yields an empty list rather than an error; callers
/// fall back to the virtual desktop rectangle in that case.
pub fn enumerate() -> Vec<MonitorInfo> {
    let mut monitors: Vec<MonitorInfo> = Vec::new();
    let monitors_ptr = &mut monitors as *mut Vec<MonitorInfo>;

    unsafe {
        let _ = EnumDisplayMonitors(
            HDC::default(),
            None,
            Some(monitor_enum_callback),
            LPARAM(monitors_ptr as isize),
        );
    }

    monitors
}

unsafe extern "system" fn monitor_enum_callback(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let monitors = &mut *(lparam.0 as *mut Vec<MonitorInfo>);

    let mut monitor_info = MONITORINFOEXW::default();
    monitor_info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

    // A monitor whose info cannot be read is skipped, not fatal.
    if GetMonitorInfoW(hmonitor, &mut monitor_info.monitorInfo).as_bool() {
        let rect = monitor_info.monitorInfo.rcMonitor;
        let is_primary = (monitor_info.monitorInfo.dwFlags & PRIMARY_FLAG) != 0;

        let device = &monitor_info.szDevice;
        let len = device.iter().position(|&c| c == 0).unwrap_or(device.len());
        let name = String::from_utf16_lossy(&device[..len]);

        monitors.push(MonitorInfo {
            handle: hmonitor.0 as usize,
            rect: Rect {
                x: rect.left,
                y: rect.top,
                width: rect.right - rect.left,
                height: rect.bottom - rect.top,
            },
            is_primary,
            name,
        });
    }

    BOOL(1) // Continue enumeration
}
