//! Assignment into an `OptionalBox` from values and from other boxes.
//!
//! | source            | target empty          | target occupied                  |
//! |-------------------|-----------------------|----------------------------------|
//! | value             | construct in place    | assign into the existing `T`     |
//! | empty box         | stays empty           | reset                            |
//! | occupied box      | construct from source | assign source into existing `T`  |
//!
//! Assigning a box to itself cannot be expressed: the target is `&mut self`,
//! which the borrow checker never lets alias the source.

use core::mem;

use super::OptionalBox;
use crate::raw::slot;

impl<T> OptionalBox<T> {
    /// Moves `value` into the box.
    ///
    /// An occupied box assigns into its existing `T` (dropping the old value
    /// through ordinary assignment); an empty box constructs in place.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.occupied {
            trace_slot!("assign_into", T);
            // SAFETY: occupied.
            let current = unsafe { slot::assume_init_mut(&mut self.storage) };
            *current = value;
            current
        } else {
            trace_slot!("assign_construct", T);
            self.fill(value)
        }
    }

    /// Copies `value` into the box.
    ///
    /// An occupied box reuses its existing `T` via [`Clone::clone_from`].
    pub fn assign_ref(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.occupied {
            trace_slot!("assign_ref_into", T);
            // SAFETY: occupied.
            let current = unsafe { slot::assume_init_mut(&mut self.storage) };
            current.clone_from(value);
            current
        } else {
            trace_slot!("assign_ref_construct", T);
            // Clone before touching the flag so a panicking clone leaves us empty.
            let value = value.clone();
            self.fill(value)
        }
    }

    /// Copies the state of `source` into the box.
    ///
    /// An empty source empties the target; an occupied source is copied with
    /// [`assign_ref`](Self::assign_ref). `source` is left untouched.
    pub fn assign_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        match source.as_option() {
            Some(value) => {
                self.assign_ref(value);
            }
            None => self.reset(),
        }
    }

    /// Moves the state of `source` into the box, leaving `source` empty.
    pub fn assign_take(&mut self, source: &mut Self) {
        match source.take() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Builds a new box by moving the value out of `source`.
    ///
    /// If `source` is occupied, its value is taken with [`mem::take`] and
    /// `source` **stays occupied**, holding `T::default()`. Only
    /// [`assign_take`](Self::assign_take) empties its source.
    pub fn move_from(source: &mut Self) -> Self
    where
        T: Default,
    {
        match source.as_option_mut() {
            Some(value) => {
                trace_slot!("move_from", T);
                Self::from_value(mem::take(value))
            }
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_value_into_empty_and_occupied() {
        let mut b = OptionalBox::new();
        assert_eq!(*b.assign(1), 1);
        assert_eq!(*b.assign(2), 2);
        assert_eq!(b.value(), Ok(&2));
    }

    #[test]
    fn test_assign_ref_clones() {
        let source = String::from("abc");
        let mut b = OptionalBox::new();
        b.assign_ref(&source);
        b.assign_ref(&source);
        assert_eq!(b.value().unwrap(), &source);
    }

    #[test]
    fn test_assign_from_empty_source_resets() {
        let mut b = OptionalBox::from_value(3);
        b.assign_from(&OptionalBox::new());
        assert!(!b.has_value());
    }

    #[test]
    fn test_assign_take_empties_source() {
        let mut src = OptionalBox::from_value(String::from("moved"));
        let mut dst = OptionalBox::from_value(String::from("old"));
        dst.assign_take(&mut src);
        assert!(!src.has_value());
        assert_eq!(dst.value().unwrap(), "moved");

        dst.assign_take(&mut src);
        assert!(!dst.has_value());
    }

    #[test]
    fn test_move_from_leaves_source_occupied() {
        let mut src = OptionalBox::from_value(vec![1, 2, 3]);
        let dst = OptionalBox::move_from(&mut src);
        assert!(src.has_value());
        assert!(src.value().unwrap().is_empty());
        assert_eq!(dst.value().unwrap(), &vec![1, 2, 3]);

        let mut empty: OptionalBox<Vec<i32>> = OptionalBox::new();
        assert!(!OptionalBox::move_from(&mut empty).has_value());
    }
}
