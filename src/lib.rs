//! # `optbox` - Inline Optional Container
//!
//! `OptionalBox<T>` holds exactly one `T` or nothing, inside storage sized and
//! aligned for `T`. There is no heap allocation, no null pointer and no
//! sentinel value: a `MaybeUninit<T>` slot is paired with an occupancy flag and
//! every operation keeps the two consistent.
//!
//! ## Safety Guarantees
//!
//! - **Single live value**: a transition into the occupied state writes exactly
//!   one `T`; a transition out drops or moves out exactly one `T`.
//! - **Flag as witness**: the flag is set only after a write completes and is
//!   cleared before a drop or read begins, so a panic inside `T`'s constructor,
//!   `Clone` or `Drop` never leaves the box claiming a value it does not hold.
//! - **Audited unsafe surface**: all raw slot operations live in `raw::slot`.
//!
//! ## Operations
//!
//! | concern            | operations                                                        |
//! |--------------------|-------------------------------------------------------------------|
//! | construction       | `new`, `from_value`, `from_ref`, `clone`, `move_from`             |
//! | query              | `has_value`, `as_option`, `as_option_mut`                         |
//! | checked access     | `value`, `value_mut`, `into_value`, `take_value`                  |
//! | unchecked access   | `get_unchecked`, `get_unchecked_mut`, `into_inner_unchecked`, `as_ptr`, `as_mut_ptr` |
//! | mutation           | `reset`, `emplace`, `emplace_with`, `emplace_from`, `try_emplace_with`, `replace`, `take` |
//! | assignment         | `assign`, `assign_ref`, `assign_from` / `clone_from`, `assign_take` |
//!
//! Checked access fails with [`BadOptionalAccess`], the crate's only error.
//!
//! ## Example
//!
//! ```rust
//! use optbox::{BadOptionalAccess, OptionalBox};
//!
//! let mut slot: OptionalBox<String> = OptionalBox::new();
//! assert_eq!(slot.value(), Err(BadOptionalAccess));
//!
//! slot.emplace_from("ready");
//! assert_eq!(slot.value().map(String::as_str), Ok("ready"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `tracing::trace!` event on every state transition.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a trace event for a slot transition when the `tracing` feature is on.
macro_rules! trace_slot {
    ($op:literal, $ty:ty) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            op = $op,
            ty = core::any::type_name::<$ty>(),
            "optional box transition"
        );
    };
}

pub mod error;
pub mod optional;
mod raw;

pub use error::BadOptionalAccess;
pub use optional::OptionalBox;

// Compile-time assertions for the inline layout.
const _: () = {
    use core::mem;

    // The flag fits in the padding-rounded tail: one alignment unit at most.
    assert!(mem::size_of::<OptionalBox<u64>>() == 2 * mem::size_of::<u64>());
    assert!(mem::align_of::<OptionalBox<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<OptionalBox<u8>>() == 2);
    assert!(mem::size_of::<OptionalBox<[u8; 3]>>() == 4);

    // Zero-sized payloads cost only the flag.
    assert!(mem::size_of::<OptionalBox<()>>() == 1);
};
