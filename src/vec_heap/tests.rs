use super::*;
use crate::test_helpers::test_rng;
use crate::{CmpFn, Reversed};
use alloc::format;
use core::cell::Cell;
use core::cmp::Ordering;
use rand::Rng;

fn check_heap<T, O: TotalOrder<OrderedType = T>>(h: &VecHeap<T, O>) {
    assert!(heap::is_heap(&h.storage), "heap invariant violated");
}

#[test]
fn test_from_vec_pops_in_order() {
    let mut heap: VecHeap<_> = VecHeap::from(vec![5, 3, 8, 1, 9, 2]);
    check_heap(&heap);
    assert_eq!(heap.peek(), Some(&1));

    let mut out = Vec::new();
    while let Some(x) = heap.pop() {
        check_heap(&heap);
        out.push(x);
    }
    assert_eq!(out, [1, 2, 3, 5, 8, 9]);
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_push_len() {
    let mut heap: VecHeap<i32> = VecHeap::default();
    assert!(heap.is_empty());
    for (n, x) in [4, 2, 7, 1].into_iter().enumerate() {
        heap.push(x);
        assert_eq!(heap.len(), n + 1);
        check_heap(&heap);
    }
    assert_eq!(heap.peek(), Some(&1));
}

#[test]
fn test_reversed_is_max_heap() {
    let mut heap = VecHeap::from_vec(vec![2, 9, 4, 7], Reversed(OrdTotalOrder::default()));
    heap.push(11);
    assert_eq!(heap.peek(), Some(&11));
    assert_eq!(heap.into_sorted_vec(), [11, 9, 7, 4, 2]);
}

#[test]
fn test_cmp_fn_by_key() {
    let by_len = CmpFn::new(|a: &String, b: &String| a.len().cmp(&b.len()));
    let words = ["ccc", "a", "bb", "dddd"].map(String::from);
    let heap = VecHeap::from_vec(words.to_vec(), by_len);

    assert_eq!(heap.into_sorted_vec(), ["a", "bb", "ccc", "dddd"]);
}

#[test]
fn test_left_child_wins_ties() {
    let by_priority = CmpFn::new(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    let mut heap = VecHeap::from_vec(vec![(0, 'x'), (1, 'a'), (1, 'b'), (2, 'z')], by_priority);

    let order: Vec<char> = core::iter::from_fn(|| heap.pop()).map(|(_, tag)| tag).collect();
    assert_eq!(order, ['x', 'a', 'b', 'z']);
}

#[test]
fn test_get_mut_fixes_on_drop() {
    let mut heap: VecHeap<_> = VecHeap::from(vec![10, 20, 30, 40, 50]);

    let at = heap.iter().position(|&x| x == 40).unwrap();
    {
        let mut item = heap.get_mut(at).unwrap();
        assert_eq!(FixMut::index(&item), at);
        *item = 5;
    }
    check_heap(&heap);
    assert_eq!(heap.peek(), Some(&5));

    {
        let mut root = heap.peek_mut().unwrap();
        *root = 60;
    }
    check_heap(&heap);
    assert_eq!(heap.into_sorted_vec(), [10, 20, 30, 50, 60]);
}

#[test]
fn test_get_mut_without_write_does_not_move() {
    let mut heap: VecHeap<_> = VecHeap::from(vec![3, 1, 2]);
    let before = heap.as_slice().to_vec();
    for i in 0..heap.len() {
        let item = heap.get_mut(i).unwrap();
        assert_eq!(*item, before[i]);
    }
    assert_eq!(heap.as_slice(), before);
    assert!(heap.get_mut(3).is_none());
}

#[test]
fn test_fix_mut_remove() {
    let mut heap: VecHeap<_> = VecHeap::from(vec![1, 2, 3, 4, 5, 6]);
    let at = heap.iter().position(|&x| x == 4).unwrap();

    let mut item = heap.get_mut(at).unwrap();
    *item = 100;
    assert_eq!(FixMut::remove(item), 100);

    check_heap(&heap);
    assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 5, 6]);
}

#[test]
fn test_peek_mut_empty() {
    let mut heap: VecHeap<i32> = VecHeap::default();
    assert!(heap.peek_mut().is_none());
}

#[test]
fn test_remove() {
    let mut heap: VecHeap<_> = VecHeap::from(vec![5, 3, 8, 1, 9, 2]);
    let at = heap.iter().position(|&x| x == 8).unwrap();

    assert_eq!(heap.remove(at), Ok(8));
    check_heap(&heap);
    assert_eq!(heap.remove(5), Err(HeapError::IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 5, 9]);
}

#[test]
fn test_fix_after_interior_change() {
    let mut rng = test_rng();
    let by_value = CmpFn::new(|a: &Cell<i32>, b: &Cell<i32>| a.get().cmp(&b.get()));
    let mut heap = VecHeap::from_vec((0..30).map(Cell::new).collect::<Vec<_>>(), by_value);

    for _ in 0..100 {
        let at = rng.gen_range(0..heap.len());
        heap.as_slice()[at].set(rng.gen_range(-50..50));
        heap.fix(at).unwrap();
        check_heap(&heap);
    }

    let len = heap.len();
    assert_eq!(heap.fix(len), Err(HeapError::IndexOutOfBounds { index: len, len }));
    check_heap(&heap);

    let mut values: Vec<i32> = heap.iter().map(Cell::get).collect();
    values.sort_unstable();
    let popped: Vec<i32> = core::iter::from_fn(|| heap.pop()).map(|c| c.get()).collect();
    assert_eq!(popped, values);
}

#[test]
fn test_fix_on_empty() {
    let mut heap: VecHeap<i32> = VecHeap::default();
    assert_eq!(heap.fix(0), Err(HeapError::IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_append() {
    let mut a: VecHeap<_> = VecHeap::from(vec![-10, 1, 2, 3, 3]);
    let mut b: VecHeap<_> = VecHeap::from(vec![-20, 5, 43]);

    a.append(&mut b);
    check_heap(&a);
    assert!(b.is_empty());
    assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
}

#[test]
fn test_append_to_empty() {
    let mut a: VecHeap<i32> = VecHeap::default();
    let mut b: VecHeap<_> = VecHeap::from(vec![3, 1, 2]);

    a.append(&mut b);
    check_heap(&a);
    assert_eq!(a.into_sorted_vec(), [1, 2, 3]);
}

#[test]
fn test_extend_small_and_large() {
    let mut rng = test_rng();
    let mut heap: VecHeap<i32> = (0..3000).map(|_| rng.gen_range(0..1000)).collect();
    check_heap(&heap);

    // a short tail is sifted up item by item
    heap.extend([7, -1, 500]);
    check_heap(&heap);
    assert_eq!(heap.peek(), Some(&-1));

    // a long one triggers a rebuild
    heap.extend((0..5000).map(|_| rng.gen_range(-1000..0)));
    check_heap(&heap);
    assert_eq!(heap.len(), 8003);

    heap.extend(&[-2000, 4000]);
    check_heap(&heap);
    assert_eq!(heap.peek(), Some(&-2000));
}

#[test]
fn test_into_sorted_vec_random() {
    let mut rng = test_rng();
    for len in [0, 1, 2, 3, 10, 257] {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        let heap: VecHeap<_> = VecHeap::from(data);
        assert_eq!(heap.into_sorted_vec(), expected);
    }
}

#[derive(Clone, Copy, Default)]
struct Direction {
    descending: bool,
}

impl TotalOrder for Direction {
    type OrderedType = i32;

    fn cmp(&self, this: &i32, that: &i32) -> Ordering {
        if self.descending {
            that.cmp(this)
        } else {
            this.cmp(that)
        }
    }
}

#[test]
fn test_order_mut_rebuilds() {
    let mut heap = VecHeap::from_vec(vec![4, 8, 1, 6], Direction::default());
    assert_eq!(heap.peek(), Some(&1));

    heap.order_mut().descending = true;
    check_heap(&heap);
    assert!(heap.order().descending);
    assert_eq!(heap.pop(), Some(8));
    assert_eq!(heap.pop(), Some(6));
}

#[test]
fn test_conversions() {
    let heap: VecHeap<_> = [3, 1, 2].into_iter().collect();
    assert_eq!(format!("{heap:?}"), "[1, 3, 2]");

    let mut copy = heap.clone();
    assert_eq!(copy.as_slice(), heap.as_slice());
    copy.push(0);
    assert_eq!(heap.len(), 3);

    let mut sum = 0;
    for x in &heap {
        sum += x;
    }
    assert_eq!(sum, 6);

    let v: Vec<i32> = heap.into_vec();
    assert_eq!(v, [1, 3, 2]);

    let mut owned: Vec<i32> = copy.clone().into_iter().collect();
    owned.sort_unstable();
    assert_eq!(owned, [0, 1, 2, 3]);

    let mut drained: Vec<i32> = copy.drain().collect();
    drained.sort_unstable();
    assert_eq!(drained, [0, 1, 2, 3]);
    assert!(copy.is_empty());
}

#[test]
fn test_capacity_and_clear() {
    let mut heap: VecHeap<i32> = VecHeap::with_capacity(OrdTotalOrder::default(), 16);
    assert!(heap.capacity() >= 16);
    heap.extend([1, 2, 3]);
    heap.reserve(100);
    assert!(heap.capacity() >= 103);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_random_against_sorted_model() {
    let mut rng = test_rng();
    let mut heap: VecHeap<u16> = VecHeap::default();
    let mut model: Vec<u16> = Vec::new();

    for _ in 0..1000 {
        if rng.gen_bool(0.6) {
            let x = rng.gen_range(0..500);
            heap.push(x);
            model.push(x);
            model.sort_unstable_by(|a, b| b.cmp(a));
        } else {
            assert_eq!(heap.pop(), model.pop());
        }
        check_heap(&heap);
        assert_eq!(heap.len(), model.len());
    }
}
