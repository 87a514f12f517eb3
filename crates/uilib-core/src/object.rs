// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The root wrapper

use crate::Handle;
use crate::sys::{GTypeInstance, GtkObject};
use std::ffi::c_void;
use std::fmt;

/// The root of the wrapper hierarchy
///
/// Holds exactly one [`Handle`]. Every other wrapper type derefs (possibly
/// through several levels) to an `Object`.
///
/// All conversions out of an `Object` are explicit: see [`Self::as_raw`],
/// [`Self::as_type_instance`] and [`Convertible::to_native`](crate::Convertible::to_native).
///
/// ```
/// use uilib_core::{Convertible, Object, sys::GtkObject};
/// let p: *mut GtkObject = Object::null().to_native();
/// assert!(p.is_null());
/// ```
///
/// There is no implicit conversion to a native pointer:
///
/// ```compile_fail
/// use uilib_core::{Object, sys::GtkObject};
/// let p: *mut GtkObject = Object::null().into();
/// ```
///
/// Nor may an `Object` stand in where a widget is expected:
///
/// ```compile_fail
/// fn takes(_: impl Into<*mut uilib_core::sys::GtkWidget>) {}
/// takes(uilib_core::Object::null());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Object(Handle);

const _: () = assert!(std::mem::size_of::<Object>() == std::mem::size_of::<*mut GtkObject>());

impl_convertible!(Object => GtkObject, explicit);

impl Object {
    /// The null object
    #[inline]
    pub const fn null() -> Self {
        Object(Handle::NULL)
    }

    /// Wrap a raw pointer, possibly null
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a live object of the toolkit in use.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut c_void) -> Self {
        Object(Handle::from_ptr(ptr))
    }

    /// The stored handle
    #[inline]
    pub const fn handle(self) -> Handle {
        self.0
    }

    /// True if the handle is non-null
    ///
    /// A null wrapper must not be used where a live widget is required.
    #[inline]
    pub fn is_valid(self) -> bool {
        !self.0.is_null()
    }

    /// True if the handle is null
    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// Cast to a pointer into the toolkit's runtime type system
    #[inline]
    pub fn as_type_instance(self) -> *mut GTypeInstance {
        self.0.cast()
    }

    /// Cast to an untyped pointer
    #[inline]
    pub fn as_raw(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Object({:?})", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Convertible;

    #[test]
    fn validity() {
        assert!(!Object::null().is_valid());
        assert!(Object::default().is_null());

        let mut data = 0u64;
        let obj = unsafe { Object::from_raw((&raw mut data).cast()) };
        assert!(obj.is_valid());
        assert_eq!(obj.as_raw(), (&raw mut data).cast::<c_void>());
        assert_eq!(obj.as_type_instance().cast::<u64>(), &raw mut data);
        assert_eq!(obj.to_native().cast::<u64>(), &raw mut data);
    }
}
