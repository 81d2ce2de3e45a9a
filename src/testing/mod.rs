use crate::HeapStorage;
use alloc::vec::Vec;
use core::cell::Cell;

/// A plain integer min-heap storage that counts the primitive operations the
/// engine performs on it.
#[derive(Clone, Debug, Default)]
pub(crate) struct IntHeap {
    pub(crate) data: Vec<i32>,
    pub(crate) compares: Cell<usize>,
    pub(crate) swaps: usize,
}

impl IntHeap {
    pub(crate) fn new(data: Vec<i32>) -> Self {
        IntHeap { data, ..Default::default() }
    }

    pub(crate) fn sorted(&self) -> Vec<i32> {
        let mut v = self.data.clone();
        v.sort_unstable();
        v
    }
}

impl HeapStorage for IntHeap {
    type Item = i32;

    fn len(&self) -> usize {
        self.data.len()
    }
    fn less(&self, i: usize, j: usize) -> bool {
        self.compares.set(self.compares.get() + 1);
        self.data[i] < self.data[j]
    }
    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.data.swap(i, j)
    }
    fn push_raw(&mut self, item: i32) {
        self.data.push(item)
    }
    fn pop_raw(&mut self) -> Option<i32> {
        self.data.pop()
    }
}

/// Elements ordered by their first field only; the second tells equal
/// priorities apart.
#[derive(Clone, Debug, Default)]
pub(crate) struct Tagged(pub(crate) Vec<(u32, char)>);

impl HeapStorage for Tagged {
    type Item = (u32, char);

    fn len(&self) -> usize {
        self.0.len()
    }
    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].0 < self.0[j].0
    }
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
    fn push_raw(&mut self, item: (u32, char)) {
        self.0.push(item)
    }
    fn pop_raw(&mut self) -> Option<(u32, char)> {
        self.0.pop()
    }
}

/// Asserts the heap invariant, naming the first offending index.
#[track_caller]
pub(crate) fn assert_heap<H: HeapStorage>(h: &H) {
    for i in 1..h.len() {
        let p = (i - 1) / 2;
        assert!(!h.less(i, p), "heap invariant violated: index {i} is less than its parent {p}");
    }
}
