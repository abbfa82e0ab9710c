//! An ordered map implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};

/// An ordered map implemented with an AVL tree.
///
/// ```
/// use avl_dictionary::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(0, "zero");
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.get(&1), Some(&"one"));
/// assert_eq!(map.remove(&1), Ok("one"));
/// assert!(map.find(&1).is_err());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
}

/// An iterator over the entries of a map, in ascending key order.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    height: usize,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns a reference to the value corresponding to the key,
    /// or `Error::NotFound` if the key is not in the map.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    pub fn find<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::NotFound)
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|node| (&node.key, &node.value))
    }

    /// Returns true if the map contains a value for the key.
    /// A missing key is an ordinary outcome here, not an error.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present its value is overwritten in place
    /// and the previous value is returned; the tree shape is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = Node::insert(&mut self.root, key, value);
        if replaced.is_none() {
            self.num_nodes += 1;
        }
        replaced
    }

    /// Removes a key from the map, returning the value stored for it,
    /// or `Error::NotFound` if the key is not in the map.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key)
            .map(|(_, value)| value)
            .ok_or(Error::NotFound)
    }

    /// Removes a key from the map, returning the stored key and value
    /// if the key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let entry = Node::remove(&mut self.root, key)?;
        debug_assert!(self.num_nodes >= 1);
        self.num_nodes -= 1;
        Some(entry)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        self.preorder(|node| {
            let mut height = 0;
            let mut left_height = 0;
            let mut right_height = 0;

            // Check left child node
            if let Some(left) = node.left.as_deref() {
                assert!(left.key < node.key);
                left_height = left.height + 1;
                height = cmp::max(height, left_height);
            }

            // Check right child node
            if let Some(right) = node.right.as_deref() {
                assert!(right.key > node.key);
                right_height = right.height + 1;
                height = cmp::max(height, right_height);
            }

            // Check height
            assert_eq!(node.height, height);

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            num_nodes += 1;
        });

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);

        // Check order across subtrees, not just between parent and child
        let mut keys = self.iter().map(|(key, _)| key);
        if let Some(mut prev) = keys.next() {
            for key in keys {
                assert!(prev < key);
                prev = key;
            }
        }
    }

    fn find_node<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            }
        }
        current
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, counting edges on the longest path
    /// from the root to a leaf: `Some(0)` for a single entry, `None` for an empty map.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|root| root.height)
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        debug!("clearing map with {} entries", self.num_nodes);
        self.root = None;
        self.num_nodes = 0;
    }

    /// Gets an iterator over the entries of the map in ascending key order.
    /// Every call starts a fresh walk from the root.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.num_nodes)
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn preorder<F: FnMut(&Node<K, V>)>(&self, mut f: F) {
        let mut stack: Vec<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
    }

    /// Returns `(key, height)` for every node in pre-order.
    #[cfg(test)]
    pub(crate) fn shape(&self) -> Vec<(K, usize)>
    where
        K: Clone,
    {
        let mut shape = Vec::with_capacity(self.num_nodes);
        self.preorder(|node| shape.push((node.key.clone(), node.height)));
        shape
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    /// Creates an empty map.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        iter.into_iter().for_each(move |(key, value)| {
            self.insert(key, value);
        });
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

// Auto derived clone seems to have an invalid type bound of K: Clone, V: Clone
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: Ord, V> Node<K, V> {
    // Inserts below the given link and rebalances on the way back up.
    // Returns the overwritten value if the key was already present.
    fn insert(link: &mut Link<K, V>, key: K, value: V) -> Option<V> {
        let mut node = match link.take() {
            None => {
                *link = Some(Node::create(key, value));
                return None;
            }
            Some(node) => node,
        };
        let replaced = match key.cmp(&node.key) {
            Ordering::Equal => Some(mem::replace(&mut node.value, value)),
            Ordering::Less => Self::insert(&mut node.left, key, value),
            Ordering::Greater => Self::insert(&mut node.right, key, value),
        };
        *link = Some(match replaced {
            None => node.rebalance_node(),
            Some(_) => node,
        });
        replaced
    }

    // Removes the key below the given link and rebalances every node on the way back up.
    // Leaves the link untouched if the key is not present.
    fn remove<Q>(link: &mut Link<K, V>, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = link.take()?;
        let removed = match key.cmp(node.key.borrow()) {
            Ordering::Less => Self::remove(&mut node.left, key),
            Ordering::Greater => Self::remove(&mut node.right, key),
            Ordering::Equal => {
                let (replacement, entry) = node.unlink_node();
                *link = replacement;
                return Some(entry);
            }
        };
        *link = Some(match removed {
            Some(_) => node.rebalance_node(),
            None => node,
        });
        removed
    }
}

impl<K, V> Node<K, V> {
    fn create(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    // Detaches this node and returns the subtree that takes its place.
    fn unlink_node(mut self: Box<Self>) -> (Link<K, V>, (K, V)) {
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                let Node { key, value, .. } = *self;
                (None, (key, value))
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { key, value, .. } = *self;
                (Some(child), (key, value))
            }
            (Some(left), Some(right)) => {
                // Move the in-order predecessor into this node and
                // remove it from its original position instead.
                trace!("substituting in-order predecessor at height {}", self.height);
                let (left, (pred_key, pred_value)) = left.remove_max();
                let key = mem::replace(&mut self.key, pred_key);
                let value = mem::replace(&mut self.value, pred_value);
                self.left = left;
                self.right = Some(right);
                (Some(self.rebalance_node()), (key, value))
            }
        }
    }

    // Removes the node with the largest key from this subtree.
    // That node has no right child, so its left child takes its place.
    fn remove_max(mut self: Box<Self>) -> (Link<K, V>, (K, V)) {
        match self.right.take() {
            Some(right) => {
                let (right, entry) = right.remove_max();
                self.right = right;
                (Some(self.rebalance_node()), entry)
            }
            None => {
                let Node {
                    key, value, left, ..
                } = *self;
                (left, (key, value))
            }
        }
    }

    fn left_height(&self) -> usize {
        match &self.left {
            None => 0,
            Some(left) => left.height + 1,
        }
    }

    fn right_height(&self) -> usize {
        match &self.right {
            None => 0,
            Some(right) => right.height + 1,
        }
    }

    fn balance_factor(&self) -> isize {
        self.right_height() as isize - self.left_height() as isize
    }

    fn adjust_height(&mut self) {
        self.height = cmp::max(self.left_height(), self.right_height());
    }

    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        match self.right.take() {
            None => self,
            Some(mut right) => {
                trace!("rotate left at height {}", self.height);
                self.right = right.left.take();
                self.adjust_height();
                right.left = Some(self);
                right.adjust_height();
                right
            }
        }
    }

    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        match self.left.take() {
            None => self,
            Some(mut left) => {
                trace!("rotate right at height {}", self.height);
                self.left = left.right.take();
                self.adjust_height();
                left.right = Some(self);
                left.adjust_height();
                left
            }
        }
    }

    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Self::rotate_left);
        self.rotate_right()
    }

    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Self::rotate_right);
        self.rotate_left()
    }

    /// Restores AVL condition (balance) at this node if necessary and adjusts height.
    /// Resulting balance will be +1, 0 or -1 height difference between left and right subtree.
    /// Initial balance must not exceed +2 or -2, which always holds after a single update.
    /// Returns the root of the rebalanced subtree.
    fn rebalance_node(mut self: Box<Self>) -> Box<Self> {
        self.adjust_height();
        let balance = self.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        if balance < -1 {
            // Left heavy
            let left_is_right_heavy = self
                .left
                .as_ref()
                .map_or(false, |left| left.balance_factor() > 0);
            if left_is_right_heavy {
                self.rotate_left_right()
            } else {
                self.rotate_right()
            }
        } else if balance > 1 {
            // Right heavy
            let right_is_left_heavy = self
                .right
                .as_ref()
                .map_or(false, |right| right.balance_factor() < 0);
            if right_is_left_heavy {
                self.rotate_right_left()
            } else {
                self.rotate_left()
            }
        } else {
            self
        }
    }
}
