//! Opaque native handles

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

/// Non-null pointer to a native Allegro object.
///
/// Carries no ownership and no lifetime: whoever hands one out decides how
/// long it stays valid. Null never becomes a `RawHandle`, so "no handle" is
/// always spelled `Option<RawHandle>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RawHandle(NonNull<c_void>);

impl RawHandle {
    /// Wrap a native pointer; `None` if it is null.
    #[inline]
    pub fn from_ptr<T>(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr.cast::<c_void>()).map(Self)
    }

    /// Build a handle from an integer identifier (zero is rejected).
    ///
    /// Useful for backends that hand out synthetic ids rather than real
    /// allocations. The result must never be dereferenced.
    #[inline]
    pub fn from_addr(addr: usize) -> Option<Self> {
        Self::from_ptr(std::ptr::without_provenance_mut::<c_void>(addr))
    }

    #[inline]
    pub fn as_ptr<T>(self) -> *mut T {
        self.0.as_ptr().cast::<T>()
    }

    #[inline]
    pub fn addr(self) -> usize {
        self.0.as_ptr().addr()
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawHandle({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_rejected() {
        assert!(RawHandle::from_ptr(std::ptr::null_mut::<u8>()).is_none());
        assert!(RawHandle::from_addr(0).is_none());
    }

    #[test]
    fn test_addr_round_trip() {
        let handle = RawHandle::from_addr(0x1040).unwrap();
        assert_eq!(handle.addr(), 0x1040);
        assert_eq!(format!("{handle:?}"), "RawHandle(0x1040)");
    }

    #[test]
    fn test_pointer_round_trip() {
        let mut value = 7u32;
        let ptr: *mut u32 = &mut value;
        let handle = RawHandle::from_ptr(ptr).unwrap();
        assert_eq!(handle.as_ptr::<u32>(), ptr);
    }
}
