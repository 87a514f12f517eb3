// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Native handles

use std::ffi::c_void;
use std::fmt;

/// An opaque pointer to a native toolkit object
///
/// The object is owned by the toolkit; a handle never keeps it alive and
/// never frees it. A handle may be null, meaning "no widget" or "not yet
/// created".
///
/// This type is small and cheap to copy.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(*mut c_void);

impl Handle {
    /// The null handle
    pub const NULL: Handle = Handle(std::ptr::null_mut());

    /// Wrap a raw pointer
    #[inline]
    pub const fn from_ptr(ptr: *mut c_void) -> Self {
        Handle(ptr)
    }

    /// The raw pointer
    #[inline]
    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    /// Reinterpret as a pointer to `T`
    ///
    /// This does not validate anything.
    #[inline]
    pub const fn cast<T>(self) -> *mut T {
        self.0.cast()
    }

    /// True if null
    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// Address, usable as a lookup key
    #[inline]
    pub fn addr(self) -> usize {
        self.0 as usize
    }
}

impl Default for Handle {
    #[inline]
    fn default() -> Self {
        Handle::NULL
    }
}

impl<T> From<*mut T> for Handle {
    #[inline]
    fn from(ptr: *mut T) -> Self {
        Handle(ptr.cast())
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_null() {
            write!(f, "Handle(null)")
        } else {
            write!(f, "Handle({:p})", self.0)
        }
    }
}

impl fmt::Pointer for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Pointer::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn size() {
        assert_eq!(size_of::<Handle>(), size_of::<*mut c_void>());
        assert_eq!(align_of::<Handle>(), align_of::<*mut c_void>());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Handle::NULL), "Handle(null)");
        let h = Handle::from_ptr(0x1000 as *mut c_void);
        assert_eq!(format!("{h:?}"), "Handle(0x1000)");
    }
}
