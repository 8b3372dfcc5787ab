use crate::arena::NodeId;
use crate::avl_tree::error::Result;
use crate::avl_tree::tree::Tree;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::result;

// Upper bound on nodes reserved up front from a deserializer's size hint.
const MAX_PREALLOCATE: usize = 4096;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Nodes are kept in an arena
/// and carry a link to their parent; after every insertion or removal the tree walks from the
/// modified node back to the root, recomputing balance factors from subtree heights and rotating
/// where a node has become too lopsided.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct AvlMap<T, U> {
    tree: Tree<T, U>,
}

impl<T, U> AvlMap<T, U> {
    /// Constructs a new, empty `AvlMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap { tree: Tree::new() }
    }

    /// Constructs a new, empty `AvlMap<T, U>` with room for `capacity` nodes before its node
    /// arena has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::with_capacity(1024);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        AvlMap {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced in place and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        self.tree.insert(key, value)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.remove(key).map(|entry| entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.get(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the height of the tree, counting edges on the longest root-to-leaf path. Returns
    /// `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), None);
    /// for key in 1..8 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), Some(2));
    /// ```
    pub fn height(&self) -> Option<usize> {
        self.tree
            .root()
            .map(|root| self.tree.height(Some(root)) as usize)
    }

    /// Returns the key stored at the root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(10, ());
    /// map.insert(20, ());
    /// map.insert(30, ());
    /// assert_eq!(map.root_key(), Some(&20));
    /// ```
    pub fn root_key(&self) -> Option<&T> {
        self.tree.root().map(|root| self.tree.node(root).key())
    }

    /// Returns the balance factor of the node holding a key: the height of its left subtree
    /// minus the height of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, ());
    /// map.insert(2, ());
    /// assert_eq!(map.balance_of(&1), Some(-1));
    /// assert_eq!(map.balance_of(&2), Some(0));
    /// assert_eq!(map.balance_of(&3), None);
    /// ```
    pub fn balance_of<V>(&self, key: &V) -> Option<i8>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).map(|id| self.tree.node(id).balance)
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.floor(key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.ceil(key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|entry| &entry.key)
    }

    /// Checks the ordering, balance and link invariants of every node. Returns the first
    /// violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert!(map.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        self.tree.validate()
    }

    /// Renders the shape of the tree, one node per line with its balance factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, ());
    /// map.insert(2, ());
    /// assert_eq!(map.render(), "1 [-1]:\n    R 2 [0]\n");
    /// ```
    pub fn render(&self) -> String
    where
        T: fmt::Debug,
    {
        self.tree.render()
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<T, U> {
        AvlMapIter {
            tree: &self.tree,
            current: self.tree.root(),
            stack: Vec::new(),
        }
    }
}

impl<T, U> IntoIterator for AvlMap<T, U> {
    type IntoIter = AvlMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let current = self.tree.root();
        AvlMapIntoIter {
            tree: self.tree,
            current,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a AvlMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = AvlMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct AvlMapIntoIter<T, U> {
    tree: Tree<T, U>,
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<T, U> Iterator for AvlMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.node(id).left;
        }
        let id = self.stack.pop()?;
        let node = self.tree.release(id);
        self.current = node.right;
        Some(node.entry.into_pair())
    }
}

/// An iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct AvlMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    tree: &'a Tree<T, U>,
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a, T, U> Iterator for AvlMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = tree.node(id).left;
        }
        let node = tree.node(self.stack.pop()?);
        self.current = node.right;
        Some((node.key(), node.value()))
    }
}

impl<T, U> Default for AvlMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for AvlMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq for AvlMap<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &AvlMap<T, U>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U> Eq for AvlMap<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> Extend<(T, U)> for AvlMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for AvlMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = AvlMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, T, U, V> Index<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<T, U> Serialize for AvlMap<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct AvlMapVisitor<T, U> {
    marker: PhantomData<fn() -> AvlMap<T, U>>,
}

impl<'de, T, U> Visitor<'de> for AvlMapVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = AvlMap<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = AvlMap::with_capacity(cmp::min(access.size_hint().unwrap_or(0), MAX_PREALLOCATE));
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U> Deserialize<'de> for AvlMap<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AvlMapVisitor {
            marker: PhantomData,
        })
    }
}
