//! Checked and unchecked access to the contained value.

use super::OptionalBox;
use crate::error::BadOptionalAccess;
use crate::raw::slot;

impl<T> OptionalBox<T> {
    /// Borrows the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the box is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.as_option().ok_or(BadOptionalAccess)
    }

    /// Mutably borrows the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the box is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.as_option_mut().ok_or(BadOptionalAccess)
    }

    /// Consumes the box and returns the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the box is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.into_option().ok_or(BadOptionalAccess)
    }

    /// Moves the payload out, leaving a moved-from `T::default()` behind.
    ///
    /// The box stays occupied: the flag tracks whether a `T` object lives in
    /// the slot, not whether its contents were taken. Use [`take`](Self::take)
    /// to empty the box instead.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the box is empty.
    pub fn take_value(&mut self) -> Result<T, BadOptionalAccess>
    where
        T: Default,
    {
        let value = self.value_mut()?;
        trace_slot!("take_value", T);
        Ok(core::mem::take(value))
    }

    /// Borrows the contained value without checking occupancy.
    ///
    /// # Safety
    /// The box must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.occupied, "get_unchecked on an empty OptionalBox");
        // SAFETY: caller guarantees occupancy.
        unsafe { slot::assume_init_ref(&self.storage) }
    }

    /// Mutably borrows the contained value without checking occupancy.
    ///
    /// # Safety
    /// The box must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied, "get_unchecked_mut on an empty OptionalBox");
        // SAFETY: caller guarantees occupancy.
        unsafe { slot::assume_init_mut(&mut self.storage) }
    }

    /// Consumes the box and returns the contained value without checking occupancy.
    ///
    /// # Safety
    /// The box must be occupied.
    #[inline]
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        debug_assert!(self.occupied, "into_inner_unchecked on an empty OptionalBox");
        self.occupied = false;
        // SAFETY: caller guarantees occupancy; the flag is cleared so `Drop`
        // will not touch the slot again.
        unsafe { slot::read(&self.storage) }
    }

    /// Returns a raw pointer to the slot.
    ///
    /// Obtaining the pointer is always safe; reading through it requires the
    /// box to be occupied.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a mutable raw pointer to the slot.
    ///
    /// Writing through it must not replace a live value without dropping it,
    /// and must not leave the slot uninitialized while the box is occupied.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }
}
