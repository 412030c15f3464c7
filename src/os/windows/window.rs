//! Win32 window operations.
//!
//! Style and position setters deliberately ignore return codes: the engine
//! owns the window and there is nothing sensible to do when a best-effort
//! request is refused.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{BOOL, HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, FindWindowW, GetClientRect, GetDesktopWindow, GetWindowLongW,
    GetWindowRect, SetWindowLongW, SetWindowPos, GWL_EXSTYLE, GWL_STYLE, HWND_NOTOPMOST,
    SWP_FRAMECHANGED, WINDOW_EX_STYLE, WINDOW_STYLE,
};

use crate::core::geometry::Rect;
use crate::os::{MonitorInfo, WindowRef, WindowStyles, WindowSystem};

use super::monitor;

fn hwnd(window: WindowRef) -> HWND {
    HWND(window.0 as isize)
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Win32 window system
pub struct WindowsWindowSystem;

impl WindowsWindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsWindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSystem for WindowsWindowSystem {
    fn find_window(&self, class: &str, title: &str) -> Option<WindowRef> {
        let class_w = wide(class);
        let title_w = wide(title);

        let found = unsafe {
            FindWindowW(
                PCWSTR::from_raw(class_w.as_ptr()),
                PCWSTR::from_raw(title_w.as_ptr()),
            )
        };

        if found.0 == 0 {
            None
        } else {
            Some(WindowRef(found.0 as usize))
        }
    }

    fn styles(&self, window: WindowRef) -> WindowStyles {
        unsafe {
            WindowStyles {
                style: GetWindowLongW(hwnd(window), GWL_STYLE) as u32,
                ex_style: GetWindowLongW(hwnd(window), GWL_EXSTYLE) as u32,
            }
        }
    }

    fn set_styles(&self, window: WindowRef, styles: WindowStyles) {
        unsafe {
            SetWindowLongW(hwnd(window), GWL_STYLE, styles.style as i32);
            SetWindowLongW(hwnd(window), GWL_EXSTYLE, styles.ex_style as i32);
        }
    }

    fn adjust_frame(&self, client: Rect, styles: WindowStyles) -> Rect {
        let mut rect = RECT {
            left: client.x,
            top: client.y,
            right: client.right(),
            bottom: client.bottom(),
        };

        let result = unsafe {
            AdjustWindowRectEx(
                &mut rect,
                WINDOW_STYLE(styles.style),
                BOOL(0),
                WINDOW_EX_STYLE(styles.ex_style),
            )
        };

        match result {
            Ok(()) => Rect {
                x: rect.left,
                y: rect.top,
                width: rect.right - rect.left,
                height: rect.bottom - rect.top,
            },
            Err(_) => client,
        }
    }

    fn set_frame(&self, window: WindowRef, frame: Rect) {
        unsafe {
            let _ = SetWindowPos(
                hwnd(window),
                HWND_NOTOPMOST,
                frame.x,
                frame.y,
                frame.width,
                frame.height,
                SWP_FRAMECHANGED,
            );
        }
    }

    fn client_size(&self, window: WindowRef) -> (i32, i32) {
        let mut rect = RECT::default();
        unsafe {
            if GetClientRect(hwnd(window), &mut rect).is_err() {
                return (0, 0);
            }
        }
        (rect.right - rect.left, rect.bottom - rect.top)
    }

    fn enumerate_monitors(&self) -> Vec<MonitorInfo> {
        monitor::enumerate()
    }

    fn desktop_rect(&self) -> Rect {
        let mut rect = RECT::default();
        unsafe {
            if GetWindowRect(GetDesktopWindow(), &mut rect).is_err() {
                return Rect::default();
            }
        }
        Rect {
            x: rect.left,
            y: rect.top,
            width: rect.right - rect.left,
            height: rect.bottom - rect.top,
        }
    }
}
