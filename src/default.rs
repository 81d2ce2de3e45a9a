//! [`OrdTotalOrder`], the order a [`VecHeap`](crate::VecHeap) uses when none
//! is named: the least element by [`Ord`] sits at the root.

use crate::TotalOrder;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// Orders `T` by its own [`Ord`] implementation.
///
/// Carries no data, so a `VecHeap<T>` is no larger than its `Vec`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder for OrdTotalOrder<T> {
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // Sifting calls `lt` on every step; the operators below let `T` answer
    // directly instead of building an `Ordering`.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}
