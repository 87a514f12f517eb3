// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The conversion protocol and the wrapper generator
//!
//! Each wrapper type declares the native pointer type it converts to and a
//! conversion [`Policy`]:
//!
//! -   [`Implicit`]: the wrapper is usable as its native pointer anywhere
//!     one is expected. The generated `From<Wrapper> for *mut Native` impl
//!     means APIs may take `impl Into<*mut Native>`.
//! -   [`Explicit`]: the conversion is only reachable through a named method
//!     ([`Convertible::to_native`] or a type-specific one), so that it is
//!     visible at the call site.
//!
//! Conversions never allocate, never validate and never fail: they simply
//! reinterpret the stored [`Handle`](crate::Handle).

use crate::Handle;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Implicit {}
    impl Sealed for super::Explicit {}
}

/// Conversion policy marker (sealed)
pub trait Policy: sealed::Sealed {
    /// True if the conversion is implicit
    const IMPLICIT: bool;
}

/// Policy: conversion to the native type is implicit
#[derive(Debug)]
pub enum Implicit {}

/// Policy: conversion to the native type must be requested explicitly
#[derive(Debug)]
pub enum Explicit {}

impl Policy for Implicit {
    const IMPLICIT: bool = true;
}

impl Policy for Explicit {
    const IMPLICIT: bool = false;
}

/// A typed wrapper over a single native [`Handle`]
///
/// Implemented by the [`wrap!`](crate::wrap) generator; implementing it by
/// hand is possible but the generator also checks the layout invariant.
pub trait Convertible: Copy {
    /// Native type this wrapper converts to
    type Native;
    /// Whether that conversion is implicit
    type Policy: Policy;
    /// Type name, for logging
    const NAME: &'static str;

    /// The stored handle
    fn handle(self) -> Handle;

    /// Wrap a handle
    ///
    /// # Safety
    ///
    /// `handle` must be null or refer to a live native object of type
    /// [`Self::Native`] (or a subtype) owned by the toolkit in use.
    unsafe fn from_handle(handle: Handle) -> Self;

    /// Explicit conversion to the native pointer type
    #[inline]
    fn to_native(self) -> *mut Self::Native {
        self.handle().cast()
    }
}

// The floor of every wrapper: a handle converts to an untyped pointer.
impl Convertible for Handle {
    type Native = std::ffi::c_void;
    type Policy = Explicit;
    const NAME: &'static str = "Handle";

    #[inline]
    fn handle(self) -> Handle {
        self
    }

    #[inline]
    unsafe fn from_handle(handle: Handle) -> Self {
        handle
    }
}

/// Implements [`Convertible`] for a `#[repr(transparent)]` newtype over
/// [`Handle`](crate::Handle)
#[doc(hidden)]
#[macro_export]
macro_rules! impl_convertible {
    (@impl $name:ident, $native:ty, $policy:ty) => {
        impl $crate::Convertible for $name {
            type Native = $native;
            type Policy = $policy;
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn handle(self) -> $crate::Handle {
                $crate::Convertible::handle(self.0)
            }

            #[inline]
            unsafe fn from_handle(handle: $crate::Handle) -> Self {
                // SAFETY: forwarded to the caller
                $name(unsafe { $crate::Convertible::from_handle(handle) })
            }
        }
    };
    ($name:ident => $native:ty, explicit) => {
        $crate::impl_convertible!(@impl $name, $native, $crate::Explicit);
    };
    ($name:ident => $native:ty, implicit) => {
        $crate::impl_convertible!(@impl $name, $native, $crate::Implicit);

        impl ::core::convert::From<$name> for *mut $native {
            #[inline]
            fn from(w: $name) -> Self {
                $crate::Convertible::handle(w).cast()
            }
        }
    };
}

/// Generate a wrapper type
///
/// Declares a wrapper by name, native type and ancestry, plus an optional
/// list of constructors. The first ancestor is the direct superclass; the
/// remainder must list every further ancestor up to [`Object`](crate::Object).
///
/// Each constructor forwards a [`Construct`](crate::toolkit::Construct)
/// description to [`Toolkit::construct`](crate::Toolkit::construct) and
/// wraps the returned handle. The generated type gets:
///
/// -   `#[repr(transparent)]` layout over its superclass, with a
///     compile-time check that its size equals the size of a pointer
/// -   `Copy`, `Eq`, `Hash`, `Default` (the null handle) and `Debug`
/// -   `Deref` to the superclass and `From` upcasts to every ancestor
/// -   an implicit conversion to `*mut Native`
/// -   an `unsafe fn from_native(*mut Native)` and `const fn null()`
///
/// ```ignore
/// wrap! {
///     /// A push button
///     pub struct Button(GtkButton): Widget, Object {
///         fn new() => Construct::Button { label: None };
///         fn with_label(label: &str) => Construct::Button { label: Some(label.to_string()) };
///     }
/// }
/// ```
#[macro_export]
macro_rules! wrap {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($native:ty): $super:ident $(, $ancestor:ident)* $(;)?
    ) => {
        $crate::wrap! {
            $(#[$meta])*
            $vis struct $name($native): $super $(, $ancestor)* {}
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($native:ty): $super:ident $(, $ancestor:ident)* {
            $(
                $(#[$cmeta:meta])*
                fn $ctor:ident($($arg:ident: $aty:ty),* $(,)?) => $construct:expr;
            )*
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name($super);

        const _: () = {
            assert!(::core::mem::size_of::<$name>() == ::core::mem::size_of::<$super>());
            assert!(::core::mem::size_of::<$name>() == ::core::mem::size_of::<$crate::Handle>());
        };

        $crate::impl_convertible!($name => $native, implicit);

        impl $name {
            /// The null wrapper
            #[inline]
            pub const fn null() -> Self {
                $name(<$super>::null())
            }

            /// Wrap a native pointer, possibly null
            ///
            /// # Safety
            ///
            /// `ptr` must be null or point to a live native object of this
            /// type, owned by the toolkit in use.
            #[inline]
            pub unsafe fn from_native(ptr: *mut $native) -> Self {
                // SAFETY: forwarded to the caller
                unsafe { <Self as $crate::Convertible>::from_handle($crate::Handle::from(ptr)) }
            }

            $(
                $(#[$cmeta])*
                pub fn $ctor(ui: &$crate::Ui, $($arg: $aty),*) -> Self {
                    let handle = ui.construct($construct);
                    // SAFETY: Toolkit::construct returns null or a handle of the requested kind
                    unsafe { <Self as $crate::Convertible>::from_handle(handle) }
                }
            )*
        }

        impl ::core::ops::Deref for $name {
            type Target = $super;

            #[inline]
            fn deref(&self) -> &$super {
                &self.0
            }
        }

        impl ::core::convert::From<$name> for $super {
            #[inline]
            fn from(w: $name) -> Self {
                w.0
            }
        }

        $(
            impl ::core::convert::From<$name> for $ancestor {
                #[inline]
                fn from(w: $name) -> Self {
                    $ancestor::from(w.0)
                }
            }
        )*

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), $crate::Convertible::handle(*self))
            }
        }
    };
}
