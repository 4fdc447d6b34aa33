//! Raw storage building blocks.
//!
//! This layer concentrates the crate's unsafe code. Higher layers
//! (`optional::*`) call the small, audited surface in `slot` instead of
//! performing their own `ptr::*` / `MaybeUninit` operations.

pub(crate) mod slot;
