//! `OptionalBox` — an inline slot that holds zero or one `T`.
//!
//! The box is a `MaybeUninit<T>` paired with an occupancy flag. The flag is the
//! only witness of validity: it is set after a `T` has been written and cleared
//! before a `T` is read out or dropped. All raw slot operations are delegated to
//! `raw::slot`.
//!
//! The surface is split by concern:
//! - this module: construction, destruction, `reset`, `emplace*`, `take`/`replace`
//! - `access`: checked (`value*`) and unchecked (`get_unchecked*`) access
//! - `assign`: the four assignment shapes and `move_from`
//! - `traits`: `Clone`, `Debug`, `PartialEq`, conversions
//! - `serde_impl`: `Serialize` / `Deserialize` as `Option<T>`

mod access;
mod assign;
mod serde_impl;
mod traits;

use core::mem::MaybeUninit;

use crate::raw::slot;

/// An inline container that either holds exactly one `T` or nothing.
///
/// No heap allocation is performed: the value lives in storage sized and
/// aligned for `T` directly inside the box.
///
/// # Example
///
/// ```rust
/// use optbox::OptionalBox;
///
/// let mut a: OptionalBox<i32> = OptionalBox::new();
/// assert!(!a.has_value());
///
/// a.emplace(5);
/// assert_eq!(a.value(), Ok(&5));
///
/// let b = a.clone();
/// a.reset();
/// assert!(!a.has_value());
/// assert_eq!(b.value(), Ok(&5));
/// ```
pub struct OptionalBox<T> {
    storage: MaybeUninit<T>,
    occupied: bool,
}

impl<T> OptionalBox<T> {
    /// Creates an empty box. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Creates an occupied box by moving `value` into it.
    #[inline]
    pub fn from_value(value: T) -> Self {
        trace_slot!("construct", T);
        Self {
            storage: MaybeUninit::new(value),
            occupied: true,
        }
    }

    /// Creates an occupied box holding a clone of `value`.
    #[inline]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::from_value(value.clone())
    }

    /// Returns `true` if the box currently holds a value.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.occupied
    }

    /// Drops the contained value, if any, leaving the box empty.
    ///
    /// Resetting an empty box is a no-op.
    pub fn reset(&mut self) {
        if !self.occupied {
            return;
        }
        trace_slot!("reset", T);
        self.occupied = false;
        // SAFETY: the flag was set, so the slot holds a live value. The flag is
        // already cleared, so a panicking destructor cannot cause a second drop.
        unsafe { slot::drop_in_place(&mut self.storage) }
    }

    /// Replaces any contained value with `value` and returns a reference to it.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Constructs a `T` from `args` in place of any contained value.
    #[inline]
    pub fn emplace_from<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Drops any contained value, then stores the value produced by `init`.
    ///
    /// The old value is destroyed before `init` runs, so two values never
    /// coexist. If `init` panics the box is left empty.
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        trace_slot!("emplace", T);
        let value = init();
        self.fill(value)
    }

    /// Fallible form of [`emplace_with`](Self::emplace_with).
    ///
    /// # Errors
    /// Returns the error produced by `init`. The previous value has already
    /// been dropped at that point, so the box is empty.
    pub fn try_emplace_with<F, E>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        trace_slot!("try_emplace", T);
        let value = init()?;
        Ok(self.fill(value))
    }

    /// Stores `value`, returning the previously contained value if there was one.
    ///
    /// Unlike `emplace`, the new value already exists before the old one is
    /// moved out, and the old one is handed back instead of dropped.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.take();
        self.fill(value);
        previous
    }

    /// Moves the contained value out, leaving the box empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        trace_slot!("take", T);
        self.occupied = false;
        // SAFETY: the slot was occupied and the flag is now cleared, so the
        // bitwise copy becomes the only owner of the value.
        Some(unsafe { slot::read(&self.storage) })
    }

    /// Borrows the contained value as an `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.occupied {
            // SAFETY: occupied.
            Some(unsafe { slot::assume_init_ref(&self.storage) })
        } else {
            None
        }
    }

    /// Mutably borrows the contained value as an `Option`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            // SAFETY: occupied.
            Some(unsafe { slot::assume_init_mut(&mut self.storage) })
        } else {
            None
        }
    }

    /// Converts the box into a standard `Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    /// Returns the contained value or `default` if the box is empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Returns the contained value or computes one with `f` if the box is empty.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.into_option().unwrap_or_else(f)
    }

    /// Writes `value` into the empty slot and marks the box occupied.
    #[inline]
    fn fill(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied, "fill on an occupied OptionalBox");
        // SAFETY: the slot is empty, nothing is overwritten.
        let value = unsafe { slot::write(&mut self.storage, value) };
        self.occupied = true;
        value
    }
}

impl<T> Drop for OptionalBox<T> {
    fn drop(&mut self) {
        self.reset();
    }
}
