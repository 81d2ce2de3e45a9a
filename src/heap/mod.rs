//! Heap algorithms over any type implementing [`HeapStorage`].
//!
//! A heap is a tree with the property that each node is the minimum-valued
//! node in its subtree. The tree is laid out over the storage's indices: the
//! children of index `i` are `2*i + 1` and `2*i + 2`, and the parent of `j`
//! is `(j - 1) / 2`, so the minimum element is always at index 0.
//!
//! The functions here hold no state of their own between calls. Everything
//! lives in the storage, which is borrowed mutably for the duration of each
//! call. A max-heap is obtained by having `less` answer "greater than".
//!
//! | [`init`]      | [`push`]          | [`pop`]           | [`remove`]        | [`fix`]           |
//! |---------------|-------------------|-------------------|-------------------|-------------------|
//! | *O*(*n*)      | *O*(log(*n*))     | *O*(log(*n*))     | *O*(log(*n*))     | *O*(log(*n*))     |

use crate::HeapError;


/// The primitive operations the heap algorithms need from a backing collection.
///
/// Indices passed to [`less`] and [`swap`] are always within `0..self.len()`.
/// [`pop_raw`] is only ever called on a non-empty collection.
///
/// It is a logic error for `less` not to be a strict weak ordering (irreflexive,
/// transitive, and with a transitive incomparability relation), or for the
/// relative order of two elements to change while they are in the heap other
/// than around a call to [`fix`]. The resulting arrangement is unspecified, but
/// every operation still terminates and touches only valid indices.
///
/// [`less`]: HeapStorage::less
/// [`swap`]: HeapStorage::swap
/// [`pop_raw`]: HeapStorage::pop_raw
pub trait HeapStorage {
    /// The element type.
    type Item;

    /// The number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Appends `item` as the new last element.
    fn push_raw(&mut self, item: Self::Item);

    /// Removes and returns the last element, or `None` if the collection is
    /// empty.
    fn pop_raw(&mut self) -> Option<Self::Item>;
}

impl<H: ?Sized + HeapStorage> HeapStorage for &mut H {
    type Item = H::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
    #[inline]
    fn push_raw(&mut self, item: Self::Item) {
        (**self).push_raw(item)
    }
    #[inline]
    fn pop_raw(&mut self) -> Option<Self::Item> {
        (**self).pop_raw()
    }
}

/// Establishes the heap invariant over an arbitrarily ordered collection.
///
/// May be called again whenever the invariant may have been broken, for
/// example after the collection was filled through some means other than
/// [`push`].
///
/// # Time complexity
///
/// *O*(*n*) where *n* = `h.len()`.
pub fn init<H: ?Sized + HeapStorage>(h: &mut H) {
    let n = h.len();
    trace!("heapifying {} elements", n);
    // Parents are visited bottom-up, so both subtrees of each one are
    // already heaps when it is sifted.
    for i in (0..n / 2).rev() {
        down(h, i, n);
    }
}

/// Pushes `item` onto the heap.
///
/// # Time complexity
///
/// *O*(log(*n*)) where *n* = `h.len()`.
pub fn push<H: ?Sized + HeapStorage>(h: &mut H, item: H::Item) {
    h.push_raw(item);
    let last = h.len() - 1;
    up(h, last);
}

/// Removes and returns the minimum element (according to `less`) from the
/// heap.
///
/// `pop` is equivalent to `remove(h, 0)`.
///
/// Of two siblings that compare equal, the left one (the lower index) is
/// promoted first, so equal-priority elements already in the heap come out
/// left before right.
///
/// # Errors
///
/// Returns [`HeapError::Empty`] if `h` holds no elements.
///
/// # Time complexity
///
/// *O*(log(*n*)) where *n* = `h.len()`.
pub fn pop<H: ?Sized + HeapStorage>(h: &mut H) -> Result<H::Item, HeapError> {
    let Some(n) = h.len().checked_sub(1) else {
        trace!("pop rejected: {}", HeapError::Empty);
        return Err(HeapError::Empty);
    };
    h.swap(0, n);
    down(h, 0, n);
    h.pop_raw().ok_or(HeapError::Empty)
}

/// Removes and returns the element at index `i` from the heap.
///
/// # Errors
///
/// Returns [`HeapError::IndexOutOfBounds`] unless `i < h.len()`.
///
/// # Time complexity
///
/// *O*(log(*n*)) where *n* = `h.len()`.
pub fn remove<H: ?Sized + HeapStorage>(h: &mut H, i: usize) -> Result<H::Item, HeapError> {
    let len = h.len();
    if let Err(err) = HeapError::check_index(i, len) {
        trace!("remove rejected: {}", err);
        return Err(err);
    }
    let n = len - 1;
    if n != i {
        h.swap(i, n);
        // The element moved into `i` came from the bottom of the tree and may
        // belong either above or below its new position.
        if !down(h, i, n) {
            up(h, i);
        }
    }
    h.pop_raw().ok_or(HeapError::Empty)
}

/// Re-establishes the heap ordering after the element at index `i` has changed
/// its value.
///
/// Changing the value of the element at index `i` and then calling `fix` is
/// equivalent to, but less expensive than, calling [`remove(h, i)`](remove)
/// followed by a [`push`] of the new value.
///
/// # Errors
///
/// Returns [`HeapError::IndexOutOfBounds`] unless `i < h.len()`.
///
/// # Time complexity
///
/// *O*(log(*n*)) where *n* = `h.len()`.
pub fn fix<H: ?Sized + HeapStorage>(h: &mut H, i: usize) -> Result<(), HeapError> {
    if let Err(err) = HeapError::check_index(i, h.len()) {
        trace!("fix rejected: {}", err);
        return Err(err);
    }
    let n = h.len();
    if !down(h, i, n) {
        up(h, i);
    }
    Ok(())
}

/// Reports whether every element of `h` is no less than its parent.
///
/// # Time complexity
///
/// *O*(*n*) where *n* = `h.len()`.
#[must_use]
pub fn is_heap<H: ?Sized + HeapStorage>(h: &H) -> bool {
    (1..h.len()).all(|i| !h.less(i, parent(i)))
}

#[inline(always)]
fn parent(j: usize) -> usize {
    (j - 1) / 2
}

/// Moves the element at `j` towards the root while it is less than its
/// parent.
pub(crate) fn up<H: ?Sized + HeapStorage>(h: &mut H, mut j: usize) {
    while j > 0 {
        let i = parent(j);
        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        j = i;
    }
}

/// Moves the element at `i0` towards the leaves, considering only indices
/// below `n`, while some child is less than it. Returns whether it moved.
///
/// Of two equal children, the left one is promoted: the right child replaces
/// it only when `less(right, left)` holds.
pub(crate) fn down<H: ?Sized + HeapStorage>(h: &mut H, i0: usize, n: usize) -> bool {
    let mut i = i0;
    loop {
        let left = match i.checked_mul(2).and_then(|x| x.checked_add(1)) {
            Some(left) if left < n => left,
            _ => break,
        };
        let mut child = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            child = right;
        }
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
    i > i0
}
