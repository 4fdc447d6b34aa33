//! Unsafe, centralized operations on the `MaybeUninit<T>` slot of an `OptionalBox`.
//!
//! `OptionalBox` never touches its storage through ad-hoc `ptr::*` calls. Every
//! read, write, drop and reference conversion goes through this module so the
//! set of unsafe operations can be audited in one place:
//! - reads (`ptr::read`)
//! - writes (`MaybeUninit::write`)
//! - drops (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! For all callers in this crate, a slot is initialized *exactly when* the
//! occupancy flag stored next to it is `true`. The flag is set only after a
//! write has completed and is cleared before a read or drop begins, so an
//! unwinding panic can never leave the flag claiming a value that is not there.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards, otherwise the value
///   is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and gives up the slot's copy.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Writes a value into an uninitialized slot and returns a reference to it.
///
/// # Safety
/// - `slot` must not currently hold a live value, otherwise that value leaks.
#[inline(always)]
pub(crate) unsafe fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
