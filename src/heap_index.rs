// Heap index arithmetic implemented externally to the queue.
//
// A heap is a tree-like structure where every subtree's root has a better
// priority than all the other nodes in the subtree.
//
// This is often implemented with an array that's traversed in a non-linear way.
// These are the indices we assign to each node.
//
// ```text
//                           0
//              1                         2
//       3            4            5             6
//   7      8      9     10    11     12     13     14
// 15 16  17 18  19 20  21 22 23 24  25
// ```
//
// The last level will often be incomplete
//
// You can easily go up, down-left, and down-right from any index with,
//   - Up:         `(i-1)/2`
//   - Down-left:  `(2*i) + 1`
//   - Down-right: `2(i+1)`

/// The parent node
///
/// ```
/// use pqueue::heap_index::index_parent;
/// assert_eq!(index_parent(1), 0);
/// assert_eq!(index_parent(2), 0);
/// assert_eq!(index_parent(3), 1);
/// assert_eq!(index_parent(4), 1);
/// assert_eq!(index_parent(5), 2);
/// assert_eq!(index_parent(6), 2);
/// assert_eq!(index_parent(25), 12);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent(i: usize) -> usize {
    debug_assert!(i != 0, "The root has no parent");
    (i - 1) / 2
}

/// The left child
///
/// ```
/// use pqueue::heap_index::index_left_child;
/// assert_eq!(index_left_child(0), 1);
/// assert_eq!(index_left_child(1), 3);
/// assert_eq!(index_left_child(3), 7);
/// assert_eq!(index_left_child(11), 23);
/// ```
#[inline(always)]
#[must_use]
pub fn index_left_child(i: usize) -> usize {
    (2 * i) + 1
}

/// The right child
///
/// ```
/// use pqueue::heap_index::index_right_child;
/// assert_eq!(index_right_child(0), 2);
/// assert_eq!(index_right_child(1), 4);
/// assert_eq!(index_right_child(2), 6);
/// assert_eq!(index_right_child(6), 14);
/// assert_eq!(index_right_child(4), 10);
/// ```
#[inline(always)]
#[must_use]
pub fn index_right_child(i: usize) -> usize {
    2 * (i + 1)
}

/// Whether node `i` has no children in a heap of `len` nodes.
///
/// ```
/// use pqueue::heap_index::index_is_leaf;
/// assert_eq!(index_is_leaf(0, 1), true);
/// assert_eq!(index_is_leaf(0, 2), false);
/// assert_eq!(index_is_leaf(1, 3), true);
/// assert_eq!(index_is_leaf(1, 4), false);
/// assert_eq!(index_is_leaf(2, 5), true);
/// ```
#[inline(always)]
#[must_use]
pub fn index_is_leaf(i: usize, len: usize) -> bool {
    debug_assert!(i < len, "Leaf check on index {i} OUT OF BOUNDS({len})");
    index_left_child(i) >= len
}

/// Depth of node `i`, with the root at depth 0.
///
/// ```
/// use pqueue::heap_index::index_depth;
/// assert_eq!(index_depth(0), 0);
/// assert_eq!(index_depth(1), 1);
/// assert_eq!(index_depth(2), 1);
/// assert_eq!(index_depth(6), 2);
/// assert_eq!(index_depth(7), 3);
/// assert_eq!(index_depth(14), 3);
/// assert_eq!(index_depth(15), 4);
/// ```
#[inline(always)]
#[must_use]
pub fn index_depth(i: usize) -> usize {
    (i + 1).ilog2() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_inverts_children() {
        for i in 0..1000usize {
            assert_eq!(index_parent(index_left_child(i)), i);
            assert_eq!(index_parent(index_right_child(i)), i);
        }
    }

    #[test]
    fn children_are_adjacent() {
        for i in 0..1000usize {
            assert_eq!(index_left_child(i) + 1, index_right_child(i));
        }
    }

    #[test]
    fn last_node_parent_is_not_a_leaf() {
        for len in 2..1000usize {
            assert!(!index_is_leaf(index_parent(len - 1), len));
        }
    }
}
