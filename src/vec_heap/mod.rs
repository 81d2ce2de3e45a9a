//! A priority queue that owns its elements in a `Vec` and drives them with
//! the [`heap`](crate::heap) engine.
//!
//! Insertion and popping the least element have *O*(log(*n*)) time complexity.
//! Checking the least element is *O*(1). Converting a vector to a heap can be
//! done in-place, and has *O*(*n*) complexity.

use core::fmt;
use core::iter::FromIterator;
use core::ops::{Deref, DerefMut};

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::heap::{self, HeapStorage};
use crate::{HeapError, OrdTotalOrder, TotalOrder};

#[cfg(test)]
mod tests;

// Kept private so that the raw primitives cannot be reached through a
// `VecHeap` by importing `HeapStorage`.
#[derive(Clone)]
struct Storage<T, O> {
    data: Vec<T>,
    order: O,
}

impl<T, O: TotalOrder<OrderedType = T>> HeapStorage for Storage<T, O> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.order.lt(&self.data[i], &self.data[j])
    }
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }
    #[inline]
    fn push_raw(&mut self, item: T) {
        self.data.push(item)
    }
    #[inline]
    fn pop_raw(&mut self) -> Option<T> {
        self.data.pop()
    }
}

/// A min-heap over a `Vec<T>`, ordered by the total order `O`.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item changes while it is in the heap, other
/// than through [`get_mut`], [`peek_mut`] or [`order_mut`], or by a change that
/// is followed by a call to [`fix`]. The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the `VecHeap` that
/// observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use siftheap::VecHeap;
///
/// let mut heap: VecHeap<i32> = VecHeap::default();
/// assert_eq!(heap.peek(), None);
///
/// heap.push(5);
/// heap.push(3);
/// heap.push(8);
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(8));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// A max-heap is a `VecHeap` under a [`Reversed`](crate::Reversed) order.
///
/// [`get_mut`]: VecHeap::get_mut
/// [`peek_mut`]: VecHeap::peek_mut
/// [`order_mut`]: VecHeap::order_mut
/// [`fix`]: VecHeap::fix
pub struct VecHeap<T, O = OrdTotalOrder<T>> {
    storage: Storage<T, O>,
}

/// Structure wrapping a mutable reference to one item of a [`VecHeap`].
///
/// When dropped after having been mutably dereferenced, it restores the heap
/// ordering around the item, as [`heap::fix`] does.
///
/// This `struct` is created by [`VecHeap::get_mut`] and [`VecHeap::peek_mut`].
pub struct FixMut<'a, T, O: TotalOrder<OrderedType = T>> {
    heap: &'a mut VecHeap<T, O>,
    index: usize,
    // Set once a `&mut T` has been handed out.
    dirty: bool,
}

impl<T: fmt::Debug, O: TotalOrder<OrderedType = T>> fmt::Debug for FixMut<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixMut")
            .field("index", &self.index)
            .field("item", &self.heap.storage.data[self.index])
            .finish()
    }
}

impl<T, O: TotalOrder<OrderedType = T>> Drop for FixMut<'_, T, O> {
    fn drop(&mut self) {
        if self.dirty {
            let fixed = heap::fix(&mut self.heap.storage, self.index);
            debug_assert!(fixed.is_ok());
        }
    }
}

impl<T, O: TotalOrder<OrderedType = T>> Deref for FixMut<'_, T, O> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.heap.storage.data[self.index]
    }
}

impl<T, O: TotalOrder<OrderedType = T>> DerefMut for FixMut<'_, T, O> {
    fn deref_mut(&mut self) -> &mut T {
        self.dirty = true;
        &mut self.heap.storage.data[self.index]
    }
}

impl<'a, T, O: TotalOrder<OrderedType = T>> FixMut<'a, T, O> {
    /// The position of the wrapped item in the heap.
    pub fn index(this: &Self) -> usize {
        this.index
    }

    /// Removes the wrapped item from the heap and returns it.
    pub fn remove(mut this: FixMut<'a, T, O>) -> T {
        // No fix-up on drop: the item is leaving and its value is irrelevant.
        this.dirty = false;
        this.heap.remove(this.index).unwrap()
    }
}

impl<T: Clone, O: Clone> Clone for VecHeap<T, O> {
    fn clone(&self) -> Self {
        VecHeap { storage: self.storage.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.data.clone_from(&source.storage.data);
        self.storage.order.clone_from(&source.storage.order);
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default> Default for VecHeap<T, O> {
    /// Creates an empty `VecHeap<T, O>`.
    #[inline]
    fn default() -> VecHeap<T, O> {
        VecHeap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for VecHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O: TotalOrder<OrderedType = T>> VecHeap<T, O> {
    /// Creates an empty `VecHeap` ordered by `order`.
    ///
    /// ```
    /// use siftheap::{OrdTotalOrder, VecHeap};
    /// let mut heap = VecHeap::new(OrdTotalOrder::default());
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(order: O) -> VecHeap<T, O> {
        VecHeap { storage: Storage { data: Vec::new(), order } }
    }

    /// Creates an empty `VecHeap` with at least the specified capacity.
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> VecHeap<T, O> {
        VecHeap { storage: Storage { data: Vec::with_capacity(capacity), order } }
    }

    /// Takes ownership of `data` and arranges it into a heap under `order`.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) where *n* = `data.len()`.
    pub fn from_vec(data: Vec<T>, order: O) -> VecHeap<T, O> {
        let mut heap = VecHeap { storage: Storage { data, order } };
        heap.rebuild();
        heap
    }

    /// Pushes an item onto the heap.
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)), plus the amortized cost of growing the `Vec`.
    pub fn push(&mut self, item: T) {
        heap::push(&mut self.storage, item);
    }

    /// Removes the least item from the heap and returns it, or `None` if it is
    /// empty.
    ///
    /// ```
    /// use siftheap::VecHeap;
    /// let mut heap: VecHeap<_> = VecHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        heap::pop(&mut self.storage).ok()
    }

    /// Removes the item at `index` and returns it.
    ///
    /// Indices refer to positions in [`as_slice`](Self::as_slice), which are
    /// only stable until the next mutation of the heap.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] unless `index < self.len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        heap::remove(&mut self.storage, index)
    }

    /// Moves the item at `index` to wherever its current value belongs.
    ///
    /// Needed only when an item's ordering has changed without going through
    /// a [`FixMut`] guard, for example through interior mutability.
    ///
    /// ```
    /// use core::cell::Cell;
    /// use siftheap::{CmpFn, VecHeap};
    ///
    /// let by_value = CmpFn::new(|a: &Cell<i32>, b: &Cell<i32>| a.get().cmp(&b.get()));
    /// let mut heap = VecHeap::from_vec(vec![Cell::new(1), Cell::new(2)], by_value);
    ///
    /// heap.peek().unwrap().set(3);
    /// heap.fix(0).unwrap();
    ///
    /// assert_eq!(heap.peek().map(Cell::get), Some(2));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] unless `index < self.len()`.
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)).
    pub fn fix(&mut self, index: usize) -> Result<(), HeapError> {
        heap::fix(&mut self.storage, index)
    }

    /// Returns a guard granting mutable access to the item at `index`. Once the
    /// guard is dropped, the item is moved to wherever its new value belongs.
    ///
    /// ```
    /// use siftheap::VecHeap;
    /// let mut heap: VecHeap<_> = VecHeap::from([10, 20, 30]);
    ///
    /// let at = heap.iter().position(|&x| x == 30).unwrap();
    /// *heap.get_mut(at).unwrap() = 5;
    ///
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// If the item is modified then the worst case time complexity is
    /// *O*(log(*n*)), otherwise it's *O*(1).
    pub fn get_mut(&mut self, index: usize) -> Option<FixMut<'_, T, O>> {
        if index < self.len() {
            Some(FixMut { heap: self, index, dirty: false })
        } else {
            None
        }
    }

    /// Returns a guard granting mutable access to the least item, or `None` if
    /// the heap is empty.
    pub fn peek_mut(&mut self) -> Option<FixMut<'_, T, O>> {
        self.get_mut(0)
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// ```
    /// use siftheap::VecHeap;
    ///
    /// let mut a: VecHeap<_> = VecHeap::from([-10, 1, 2, 3, 3]);
    /// let mut b: VecHeap<_> = VecHeap::from([-20, 5, 43]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let start = self.len();
        self.storage.data.append(&mut other.storage.data);
        self.rebuild_tail(start);
    }

    /// Consumes the heap and returns its items in pop order, least first.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.storage.swap(0, end);
            heap::down(&mut self.storage, 0, end);
        }
        // The in-place sort leaves the least item last.
        let mut data = self.into_vec();
        data.reverse();
        data
    }

    /// Borrows this heap's order.
    pub fn order(&self) -> &O {
        &self.storage.order
    }

    /// Mutably borrows this heap's order. When the returned guard is dropped,
    /// the heap is rebuilt under the (possibly changed) order.
    pub fn order_mut(&mut self) -> OrderMut<'_, T, O> {
        OrderMut(self)
    }

    /// Rebuilds assuming `data[..start]` is still a proper heap.
    fn rebuild_tail(&mut self, start: usize) {
        let len = self.len();
        if start == len {
            return;
        }
        let tail_len = len - start;

        #[inline(always)]
        fn log2_fast(x: usize) -> usize {
            (usize::BITS - x.leading_zeros() - 1) as usize
        }

        // Rebuilding takes about 2 * len comparisons in the worst case, while
        // sifting up each tail item takes about tail_len * log2(start).
        let better_to_rebuild = if start < tail_len {
            true
        } else if len <= 2048 {
            2 * len < tail_len * log2_fast(start)
        } else {
            2 * len < tail_len * 11
        };

        if better_to_rebuild {
            self.rebuild();
        } else {
            for i in start..len {
                heap::up(&mut self.storage, i);
            }
        }
    }

    fn rebuild(&mut self) {
        heap::init(&mut self.storage);
    }
}

/// Guard returned by [`VecHeap::order_mut`].
pub struct OrderMut<'a, T, O: TotalOrder<OrderedType = T>>(&'a mut VecHeap<T, O>);

impl<T, O: TotalOrder<OrderedType = T>> Deref for OrderMut<'_, T, O> {
    type Target = O;
    fn deref(&self) -> &O {
        &self.0.storage.order
    }
}

impl<T, O: TotalOrder<OrderedType = T>> DerefMut for OrderMut<'_, T, O> {
    fn deref_mut(&mut self) -> &mut O {
        &mut self.0.storage.order
    }
}

impl<T, O: TotalOrder<OrderedType = T>> Drop for OrderMut<'_, T, O> {
    fn drop(&mut self) {
        self.0.rebuild()
    }
}

impl<T, O> VecHeap<T, O> {
    /// Returns an iterator visiting all values in the underlying vector, in
    /// arbitrary order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.data.iter()
    }

    /// Returns the least item in the heap, or `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.storage.data.first()
    }

    /// Returns a slice of all values in the underlying vector, in heap order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.data.as_slice()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.storage.data.reserve(additional);
    }

    /// Consumes the heap and returns the underlying vector in heap order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the length of the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed elements in
    /// arbitrary order.
    #[inline]
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        self.storage.data.drain(..)
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.storage.data.clear();
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default> From<Vec<T>> for VecHeap<T, O> {
    /// Converts a `Vec<T>` into a `VecHeap<T, O>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> VecHeap<T, O> {
        VecHeap::from_vec(vec, O::default())
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default, const N: usize> From<[T; N]> for VecHeap<T, O> {
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<VecHeap<T, O>> for Vec<T> {
    /// Converts a `VecHeap<T, O>` into a `Vec<T>` in heap order, without
    /// copying or allocating.
    fn from(heap: VecHeap<T, O>) -> Vec<T> {
        heap.storage.data
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default> FromIterator<T> for VecHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> VecHeap<T, O> {
        VecHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for VecHeap<T, O> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Creates a consuming iterator that moves each value out of the heap in
    /// arbitrary order.
    fn into_iter(self) -> vec::IntoIter<T> {
        self.storage.data.into_iter()
    }
}

impl<'a, T, O> IntoIterator for &'a VecHeap<T, O> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: TotalOrder<OrderedType = T>> Extend<T> for VecHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let start = self.len();
        self.storage.data.extend(iter);
        self.rebuild_tail(start);
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<OrderedType = T>> Extend<&'a T> for VecHeap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}
