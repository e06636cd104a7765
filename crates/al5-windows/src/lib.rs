//! al5-windows: Windows-specific Allegro accessors
//!
//! Exposes the `HWND` behind an Allegro display for interop with Win32 APIs.
//! Displays are created and destroyed elsewhere; this crate only reads from
//! them and never takes ownership.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use al5_core::RawHandle;
use parking_lot::Mutex;

/// Borrowed `ALLEGRO_DISPLAY` belonging to window system `W`
///
/// A display from one window system cannot be resolved by another:
///
/// ```compile_fail
/// use al5_windows::{HeadlessWindows, RawHandle, WindowSystem, window_handle};
///
/// struct Other;
///
/// impl WindowSystem for Other {
///     unsafe fn window_handle(&self, _display: RawHandle) -> usize {
///         0
///     }
/// }
///
/// let display = HeadlessWindows::new().create_display();
/// window_handle(&Other, display);
/// ```
pub struct DisplayHandle<W: ?Sized> {
    raw: RawHandle,
    _system: PhantomData<fn(&W)>,
}

impl<W: ?Sized> DisplayHandle<W> {
    /// Wrap a display pointer. `None` if null.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live `ALLEGRO_DISPLAY` owned by window system
    /// `W` and stay alive for as long as the handle is used.
    pub unsafe fn from_raw<T>(ptr: *mut T) -> Option<Self> {
        RawHandle::from_ptr(ptr).map(Self::new)
    }

    fn new(raw: RawHandle) -> Self {
        Self {
            raw,
            _system: PhantomData,
        }
    }

    #[inline]
    pub fn raw(&self) -> RawHandle {
        self.raw
    }
}

impl<W: ?Sized> Clone for DisplayHandle<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: ?Sized> Copy for DisplayHandle<W> {}

impl<W: ?Sized> PartialEq for DisplayHandle<W> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<W: ?Sized> Eq for DisplayHandle<W> {}

impl<W: ?Sized> Hash for DisplayHandle<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<W: ?Sized> fmt::Debug for DisplayHandle<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DisplayHandle").field(&self.raw).finish()
    }
}

/// Platform window handle (`HWND`) as an integer.
///
/// Only meaningful while the display it came from exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    #[inline]
    pub fn as_raw(&self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Raw display accessor surface
pub trait WindowSystem {
    /// # Safety
    ///
    /// `display` must be a live display known to this window system.
    unsafe fn window_handle(&self, display: RawHandle) -> usize;
}

/// Window handle of the window `display` renders into.
pub fn window_handle<W: WindowSystem + ?Sized>(
    system: &W,
    display: DisplayHandle<W>,
) -> WindowHandle {
    // SAFETY: `DisplayHandle::<W>::from_raw` requires a live display of `W`.
    let hwnd = unsafe { system.window_handle(display.raw()) };
    if hwnd == 0 {
        log::warn!("Display {:?} has no window handle", display.raw());
    }
    WindowHandle(hwnd)
}

// ═══════════════════════════════════════════════════════════════════════════════
// NATIVE
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(all(feature = "native", windows))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeWindows;

#[cfg(all(feature = "native", windows))]
impl WindowSystem for NativeWindows {
    unsafe fn window_handle(&self, display: RawHandle) -> usize {
        unsafe { al5_sys::al_get_win_window_handle(display.as_ptr()) }.addr()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HEADLESS
// ═══════════════════════════════════════════════════════════════════════════════

const FIRST_DISPLAY: usize = 0x2000;
const FIRST_HWND: usize = 0x0001_0000;
const ID_STRIDE: usize = 0x10;

#[derive(Debug, Default)]
struct Registry {
    next: usize,
    windows: HashMap<usize, usize>,
}

/// In-memory window system that also plays the role of display owner.
#[derive(Debug, Default)]
pub struct HeadlessWindows {
    registry: Mutex<Registry>,
}

impl HeadlessWindows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a display with its own window.
    pub fn create_display(&self) -> DisplayHandle<Self> {
        let mut registry = self.registry.lock();
        let n = registry.next;
        registry.next += 1;

        let id = FIRST_DISPLAY + n * ID_STRIDE;
        registry.windows.insert(id, FIRST_HWND + n * ID_STRIDE);
        let raw = RawHandle::from_addr(id).unwrap_or_else(|| unreachable!("ids start above zero"));
        DisplayHandle::new(raw)
    }

    /// Close a display. Its window handle stops resolving.
    pub fn destroy_display(&self, display: DisplayHandle<Self>) {
        self.registry.lock().windows.remove(&display.raw().addr());
    }

    pub fn open_displays(&self) -> usize {
        self.registry.lock().windows.len()
    }

    pub fn reset(&self) {
        *self.registry.lock() = Registry::default();
    }
}

impl WindowSystem for HeadlessWindows {
    unsafe fn window_handle(&self, display: RawHandle) -> usize {
        self.registry
            .lock()
            .windows
            .get(&display.addr())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_handle_is_stable_and_non_zero() {
        let system = HeadlessWindows::new();
        let display = system.create_display();

        let first = window_handle(&system, display);
        let second = window_handle(&system, display);
        assert!(!first.is_null());
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_display_has_its_own_window() {
        let system = HeadlessWindows::new();
        let a = system.create_display();
        let b = system.create_display();
        assert_ne!(window_handle(&system, a), window_handle(&system, b));
    }

    #[test]
    fn test_destroyed_display_resolves_to_null() {
        let system = HeadlessWindows::new();
        let display = system.create_display();
        system.destroy_display(display);

        assert!(window_handle(&system, display).is_null());
        assert_eq!(system.open_displays(), 0);
    }

    #[test]
    fn test_null_display_pointer_is_rejected() {
        let display =
            unsafe { DisplayHandle::<HeadlessWindows>::from_raw(std::ptr::null_mut::<u8>()) };
        assert!(display.is_none());
    }

    #[test]
    fn test_displays_compare_by_handle() {
        let system = HeadlessWindows::new();
        let a = system.create_display();
        let b = system.create_display();

        let mut seen = HashSet::new();
        assert!(seen.insert(a));
        assert!(!seen.insert(a));
        assert!(seen.insert(b));
    }
}
