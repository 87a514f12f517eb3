// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Key events and handler subscriptions

use crate::sys::GdkEventKey;
use std::num::NonZeroU64;

/// A native key-press event record
///
/// The record belongs to the toolkit and is only valid for the duration of
/// the handler invocation it is passed to. It is passed through unmodified;
/// [`Ui::key_details`](crate::Ui::key_details) decodes it.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent(*mut GdkEventKey);

impl KeyEvent {
    /// Wrap a native event pointer
    #[inline]
    pub const fn from_native(ptr: *mut GdkEventKey) -> Self {
        KeyEvent(ptr)
    }

    /// The native event pointer
    #[inline]
    pub const fn as_ptr(self) -> *mut GdkEventKey {
        self.0
    }
}

bitflags! {
    /// Keyboard modifier state of a key event
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        /// Usually "Alt"
        const MOD1 = 1 << 3;
        const SUPER = 1 << 26;
    }
}

/// Decoded contents of a [`KeyEvent`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyDetails {
    /// Toolkit key symbol (e.g. `0xff1b` for Escape)
    pub keyval: u32,
    pub modifiers: Modifiers,
}

/// Identifier of a registered event handler
///
/// Identifiers are never zero and are not reused within a process run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(NonZeroU64);

impl SubscriptionId {
    /// Construct from a toolkit connection id; `None` if zero
    #[inline]
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(SubscriptionId)
    }

    /// The toolkit connection id
    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}
