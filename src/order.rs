use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A runtime comparator that decides how a collection orders its elements,
/// in place of their [`Ord`] implementation.
///
/// Implementations must define a total order over `OrderedType`: it is a logic
/// error for `cmp` to be inconsistent (for example non-transitive), or for it
/// to change its answer for two elements while they are held in a heap. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the heap that observed it and not result in undefined
/// behavior.
pub trait TotalOrder {
    /// The type over which this order is defined.
    type OrderedType: ?Sized;

    /// Compares `this` with `that`.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering;

    /// Tests whether `this` and `that` are equal under this order.
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Tests whether `this` and `that` are unequal under this order.
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Tests whether `this` is greater than or equal to `that`.
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Tests whether `this` is strictly greater than `that`.
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Tests whether `this` is less than or equal to `that`.
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Tests whether `this` is strictly less than `that`.
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<O: ?Sized + TotalOrder> TotalOrder for &O {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        (**self).cmp(this, that)
    }
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        (**self).lt(this, that)
    }
}

/// Inverts another total order, so that a min-heap built with it pops the
/// greatest element first.
///
/// ```
/// use siftheap::{OrdTotalOrder, Reversed, VecHeap};
///
/// let mut heap = VecHeap::from_vec(vec![1, 5, 2], Reversed(OrdTotalOrder::default()));
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(pub O);

impl<O: TotalOrder> TotalOrder for Reversed<O> {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        self.0.cmp(that, this)
    }
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.lt(that, this)
    }
}

/// A total order defined by a comparison closure.
///
/// ```
/// use siftheap::{CmpFn, VecHeap};
///
/// // shortest word first
/// let by_len = CmpFn::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let mut heap = VecHeap::from_vec(vec!["heap", "of", "words"], by_len);
///
/// assert_eq!(heap.pop(), Some("of"));
/// ```
pub struct CmpFn<F, T: ?Sized> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

impl<F, T: ?Sized> CmpFn<F, T>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Wraps `f` as a total order over `T`.
    pub fn new(f: F) -> Self {
        CmpFn { f, _marker: PhantomData }
    }
}

impl<F: Clone, T: ?Sized> Clone for CmpFn<F, T> {
    fn clone(&self) -> Self {
        CmpFn { f: self.f.clone(), _marker: PhantomData }
    }
}

impl<F, T: ?Sized> fmt::Debug for CmpFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmpFn").finish_non_exhaustive()
    }
}

impl<F, T: ?Sized> TotalOrder for CmpFn<F, T>
where
    F: Fn(&T, &T) -> Ordering,
{
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.f)(this, that)
    }
}
