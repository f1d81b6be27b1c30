/// Single-threaded pairing heap: a multi-way tree whose children are threaded
/// through a singly-linked sibling list, newest-inserted at the head.
///
/// The engine is either empty or a single tree whose root holds the minimum
/// key. [`Meld`][Self::meld] (and hence [`insert`][Self::insert]) is O(1):
/// the larger-keyed tree is simply prepended to the smaller-keyed tree's
/// child list. [`remove_min`][Self::remove_min] is amortized O(log n) via the
/// classic two-pass merge of the evicted root's children.
pub struct Pairing<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

struct Node<K, V> {
    key: K,
    value: V,
    next_older_sibling: Option<Box<Node<K, V>>>,
    youngest_child: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            next_older_sibling: None,
            youngest_child: None,
        })
    }

    fn add_child(&mut self, mut child: Box<Node<K, V>>) {
        child.next_older_sibling = self.youngest_child.take();
        self.youngest_child = Some(child);
    }
}

impl<K, V> Pairing<K, V>
where
    K: PartialOrd,
{
    /// Creates an empty heap. Time: O(1).
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Removes all elements. Time: O(n) (drops the tree).
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the number of live elements. Time: O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements. Time: O(1).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a shared reference to the root's `(key, value)`. Time: O(1).
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(|n| (&n.key, &n.value))
    }

    /// Inserts `(key, value)` by melding in a new one-node tree.
    /// Time: O(1).
    pub fn insert(&mut self, key: K, value: V) {
        let new_tree = Node::leaf(key, value);
        self.root = Self::meld_trees(self.root.take(), Some(new_tree));
        self.len += 1;
    }

    /// Removes and returns the minimum element, rebuilding the tree from the
    /// evicted root's children via the two-pass merge. Time: amortized
    /// O(log n).
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        self.len -= 1;

        let Node {
            key,
            value,
            youngest_child,
            ..
        } = *root;

        self.root = Self::two_pass_merge(youngest_child);
        Some((key, value))
    }

    /// Absorbs `other`'s tree into `self` in O(1) and empties `other`.
    pub fn meld(&mut self, other: &mut Self) {
        self.root = Self::meld_trees(self.root.take(), other.root.take());
        self.len += other.len;
        other.len = 0;
    }

    /// Merges two (possibly absent) trees: the smaller-keyed root survives
    /// and the larger-keyed tree becomes its new youngest child. Ties favor
    /// `a` as the surviving root. Time: O(1).
    fn meld_trees(
        a: Option<Box<Node<K, V>>>,
        b: Option<Box<Node<K, V>>>,
    ) -> Option<Box<Node<K, V>>> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(mut a), Some(b)) => {
                if b.key < a.key {
                    let mut b = b;
                    b.add_child(a);
                    Some(b)
                } else {
                    a.add_child(b);
                    Some(a)
                }
            }
        }
    }

    /// Two-pass merge of a sibling list (the evicted root's former
    /// `youngest_child` chain): left-to-right pairwise meld, then a
    /// right-to-left fold of the results.
    fn two_pass_merge(youngest_child: Option<Box<Node<K, V>>>) -> Option<Box<Node<K, V>>> {
        let mut first_pass = Vec::new();
        let mut cur = youngest_child;

        while let Some(mut a) = cur {
            let b = a.next_older_sibling.take();
            match b {
                Some(mut b) => {
                    cur = b.next_older_sibling.take();
                    first_pass.push(Self::meld_trees(Some(a), Some(b)));
                }
                None => {
                    cur = None;
                    first_pass.push(Some(a));
                }
            }
        }

        let mut acc = first_pass.pop().flatten();
        while let Some(next) = first_pass.pop() {
            acc = Self::meld_trees(next, acc);
        }
        acc
    }

    /// Decreases the key of the first node (searched depth-first from the
    /// root, youngest child first) for which `find` returns `true`, detaches
    /// it from its parent's child list, and remelds it with the root.
    /// Internal primitive: not reachable from the public queue surface.
    /// No-op (returns `false`) if `new_key` is not strictly less than the
    /// target's current key, or if no node matches `find` — checked with a
    /// read-only search before any node is detached, so a rejected call
    /// never mutates the tree. Time: O(n) search (no parent back-pointers
    /// are stored; the detach point is discovered during the same descent)
    /// + O(1) remeld.
    #[allow(dead_code)]
    pub(crate) fn decrease_key(
        &mut self,
        mut find: impl FnMut(&K, &V) -> bool,
        new_key: K,
    ) -> bool {
        let Some(root) = self.root.as_deref() else {
            return false;
        };

        let root_matches = find(&root.key, &root.value);
        let would_decrease = if root_matches {
            new_key < root.key
        } else {
            match Self::find_matching(root.youngest_child.as_deref(), &mut find) {
                Some(target) => new_key < target.key,
                None => return false,
            }
        };

        if !would_decrease {
            return false;
        }

        let mut root = self.root.take().unwrap();
        if root_matches {
            root.key = new_key;
            self.root = Some(root);
            return true;
        }

        let detached = Self::detach_matching(&mut root.youngest_child, &mut find);
        self.root = Some(root);

        let mut target =
            detached.expect("node located by the read-only search must still be present");
        target.key = new_key;
        target.next_older_sibling = None;
        self.root = Self::meld_trees(self.root.take(), Some(target));
        true
    }

    /// Read-only counterpart of [`detach_matching`][Self::detach_matching]:
    /// walks a sibling chain depth-first (each sibling, then its children)
    /// and returns a reference to the first node for which `find` holds,
    /// without modifying the tree.
    fn find_matching<'a>(
        chain: Option<&'a Node<K, V>>,
        find: &mut impl FnMut(&K, &V) -> bool,
    ) -> Option<&'a Node<K, V>> {
        let mut cur = chain;
        while let Some(node) = cur {
            if find(&node.key, &node.value) {
                return Some(node);
            }

            if let Some(found) = Self::find_matching(node.youngest_child.as_deref(), find) {
                return Some(found);
            }

            cur = node.next_older_sibling.as_deref();
        }
        None
    }

    /// Walks a sibling chain depth-first (each sibling, then its children),
    /// removing and returning the first node for which `find` holds. The
    /// removed node is spliced out of whichever list it was found in; its
    /// `next_older_sibling` link is left dangling (the caller clears it).
    fn detach_matching(
        chain: &mut Option<Box<Node<K, V>>>,
        find: &mut impl FnMut(&K, &V) -> bool,
    ) -> Option<Box<Node<K, V>>> {
        let mut cur = chain;
        loop {
            let Some(node) = cur.as_mut() else {
                return None;
            };

            if find(&node.key, &node.value) {
                let mut removed = cur.take().unwrap();
                *cur = removed.next_older_sibling.take();
                return Some(removed);
            }

            if let Some(found) = Self::detach_matching(&mut node.youngest_child, find) {
                return Some(found);
            }

            cur = &mut cur.as_mut().unwrap().next_older_sibling;
        }
    }
}

impl<K, V> Default for Pairing<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_all(heap: &mut Pairing<i32, i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some((k, _)) = heap.remove_min() {
            out.push(k);
        }
        out
    }

    #[test]
    fn pairing_drain_seed_case() {
        let mut heap = Pairing::new();
        for k in [5, 3, 8, 1, 4, 9, 2, 7, 6] {
            heap.insert(k, k);
        }
        assert_eq!(pop_all(&mut heap), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn meld_conservation() {
        let mut a = Pairing::new();
        let mut b = Pairing::new();
        for k in [4, 10, 2] {
            a.insert(k, k);
        }
        for k in [7, 1, 5] {
            b.insert(k, k);
        }
        a.meld(&mut b);
        assert!(b.is_empty());
        assert_eq!(a.len(), 6);
        assert_eq!(pop_all(&mut a), vec![1, 2, 4, 5, 7, 10]);
    }

    #[test]
    fn meld_identity_with_empty() {
        let mut a = Pairing::new();
        for k in [3, 1, 2] {
            a.insert(k, k);
        }
        let mut empty = Pairing::<i32, i32>::new();
        a.meld(&mut empty);
        assert_eq!(pop_all(&mut a), vec![1, 2, 3]);
    }

    #[test]
    fn decrease_key_moves_node_to_front() {
        let mut heap = Pairing::new();
        for k in 0..20 {
            heap.insert(k, k);
        }
        let decreased = heap.decrease_key(|k, _| *k == 15, -1);
        assert!(decreased);
        assert_eq!(heap.peek(), Some((&-1, &15)));
        let mut result = pop_all(&mut heap);
        assert_eq!(result.remove(0), -1);
        assert!(result.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn decrease_key_rejects_non_decrease() {
        let mut heap = Pairing::new();
        for k in 0..10 {
            heap.insert(k, k);
        }
        assert!(!heap.decrease_key(|k, _| *k == 5, 9));
        assert_eq!(heap.len(), 10);
        let mut remaining = pop_all(&mut heap);
        remaining.sort();
        assert_eq!(remaining, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn decrease_key_rejects_non_decrease_on_root() {
        let mut heap = Pairing::new();
        for k in 0..10 {
            heap.insert(k, k);
        }
        assert!(!heap.decrease_key(|k, _| *k == 0, 5));
        assert_eq!(heap.len(), 10);
        let mut remaining = pop_all(&mut heap);
        remaining.sort();
        assert_eq!(remaining, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn decrease_key_missing_target_is_noop() {
        let mut heap = Pairing::new();
        for k in 0..5 {
            heap.insert(k, k);
        }
        assert!(!heap.decrease_key(|k, _| *k == 999, -1));
    }
}
