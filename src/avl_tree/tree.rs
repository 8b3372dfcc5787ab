use crate::arena::{Arena, NodeId};
use crate::avl_tree::error::{Error, Result};
use crate::avl_tree::node::Node;
use crate::entry::Entry;
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::Debug;
use std::mem;

/// An avl tree whose nodes live in an arena and point back at their parents.
///
/// Every mutation first edits the tree as a plain binary search tree and then walks from the
/// lowest touched node up to the root, recomputing heights and rotating wherever a node's
/// subtrees differ in height by more than one.
pub struct Tree<T, U> {
    nodes: Arena<Node<T, U>>,
    root: Option<NodeId>,
}

impl<T, U> Tree<T, U> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node<T, U> {
        &self.nodes[id]
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Height of the subtree rooted at `tree`. An absent subtree has height -1.
    pub fn height(&self, tree: Option<NodeId>) -> i32 {
        match tree {
            None => -1,
            Some(id) => self.nodes[id].height,
        }
    }

    fn balance_of(&self, id: NodeId) -> i32 {
        let node = &self.nodes[id];
        self.height(node.left) - self.height(node.right)
    }

    fn update(&mut self, id: NodeId) {
        let (left, right) = {
            let node = &self.nodes[id];
            (self.height(node.left), self.height(node.right))
        };
        let node = &mut self.nodes[id];
        node.height = cmp::max(left, right) + 1;
        node.balance = (left - right) as i8;
    }

    fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.nodes[parent].left = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.nodes[parent].right = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    // Points whichever link referenced `old` (a child slot of `parent`, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else if node.right == Some(old) {
                    node.right = new;
                } else {
                    panic!("Expected node to be a child of its parent.");
                }
            },
        }
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    fn rotate_left(&mut self, n1: NodeId) -> NodeId {
        let n2 = self.nodes[n1]
            .right
            .expect("Expected right child node to be `Some`.");
        trace!("rotating left at {:?}, promoting {:?}", n1, n2);
        let subtree = self.nodes[n2].left;
        let parent = self.nodes[n1].parent;
        self.replace_child(parent, n1, Some(n2));
        self.set_right(n1, subtree);
        self.set_left(n2, Some(n1));
        n2
    }

    fn rotate_right(&mut self, n1: NodeId) -> NodeId {
        let n2 = self.nodes[n1]
            .left
            .expect("Expected left child node to be `Some`.");
        trace!("rotating right at {:?}, promoting {:?}", n1, n2);
        let subtree = self.nodes[n2].right;
        let parent = self.nodes[n1].parent;
        self.replace_child(parent, n1, Some(n2));
        self.set_left(n1, subtree);
        self.set_right(n2, Some(n1));
        n2
    }

    // Refreshes the two children of a freshly rotated subtree root, then the root itself.
    fn update_rotated(&mut self, top: NodeId) {
        let (left, right) = {
            let node = &self.nodes[top];
            (node.left, node.right)
        };
        if let Some(left) = left {
            self.update(left);
        }
        if let Some(right) = right {
            self.update(right);
        }
        self.update(top);
    }

    fn rebalance(&mut self, start: Option<NodeId>) {
        let mut curr = start;
        while let Some(id) = curr {
            self.update(id);
            let balance = self.nodes[id].balance;

            let top = if balance > 1 {
                let child = self.nodes[id]
                    .left
                    .expect("Expected left child node to be `Some`.");
                if self.balance_of(child) < 0 {
                    self.rotate_left(child);
                }
                Some(self.rotate_right(id))
            } else if balance < -1 {
                let child = self.nodes[id]
                    .right
                    .expect("Expected right child node to be `Some`.");
                if self.balance_of(child) > 0 {
                    self.rotate_right(child);
                }
                Some(self.rotate_left(id))
            } else {
                None
            };

            curr = match top {
                Some(top) => {
                    self.update_rotated(top);
                    trace!("rebalanced {:?} with balance {} under {:?}", id, balance, top);
                    self.nodes[top].parent
                },
                None => self.nodes[id].parent,
            };
        }
    }

    // Exchanges the entries and balance factors of two nodes. Links and heights stay put.
    fn swap_contents(&mut self, a: NodeId, b: NodeId) {
        let (first, second) = self.nodes.pair_mut(a, b);
        mem::swap(&mut first.entry, &mut second.entry);
        mem::swap(&mut first.balance, &mut second.balance);
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// The in-order predecessor of a node with a left subtree.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left.map(|left| self.rightmost(left))
    }

    /// Inserts a key-value pair. If the key already exists, its value is replaced in place and
    /// the old value is returned.
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        let (start, ret) = self.insert_node(key, value);
        self.rebalance(Some(start));
        ret
    }

    // Returns the node to start rebalancing from, and the replaced value on a duplicate key.
    fn insert_node(&mut self, key: T, value: U) -> (NodeId, Option<U>)
    where
        T: Ord,
    {
        let mut curr = match self.root {
            Some(root) => root,
            None => {
                let id = self.nodes.allocate(Node::new(key, value, None));
                debug!("inserted {:?} as the root", id);
                self.root = Some(id);
                return (id, None);
            },
        };

        loop {
            let ordering = key.cmp(self.nodes[curr].key());
            let next = match ordering {
                Ordering::Less => self.nodes[curr].left,
                Ordering::Greater => self.nodes[curr].right,
                Ordering::Equal => {
                    let old = mem::replace(self.nodes[curr].value_mut(), value);
                    return (curr, Some(old));
                },
            };

            match next {
                Some(child) => curr = child,
                None => {
                    let id = self.nodes.allocate(Node::new(key, value, Some(curr)));
                    debug!("inserted {:?} under {:?}", id, curr);
                    if ordering == Ordering::Less {
                        self.nodes[curr].left = Some(id);
                    } else {
                        self.nodes[curr].right = Some(id);
                    }
                    return (id, None);
                },
            }
        }
    }

    /// Removes a key and returns its entry. Removing an absent key does nothing.
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let target = self.find(key)?;
        let (entry, start) = self.remove_node(target);
        self.rebalance(start);
        Some(entry)
    }

    // Unlinks and frees the node holding `target`'s entry. Returns that entry and the parent of
    // the node that was physically freed.
    fn remove_node(&mut self, mut target: NodeId) -> (Entry<T, U>, Option<NodeId>) {
        if let (Some(_), Some(_)) = (self.nodes[target].left, self.nodes[target].right) {
            let predecessor = self
                .predecessor(target)
                .expect("Expected a node with two children to have a predecessor.");
            self.swap_contents(target, predecessor);
            target = predecessor;
        }

        let (parent, child) = {
            let node = &self.nodes[target];
            let child = match (node.left, node.right) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(_), Some(_)) => unreachable!(),
            };
            (node.parent, child)
        };

        self.replace_child(parent, target, child);
        debug!("removed {:?}, rebalancing from {:?}", target, parent);
        (self.nodes.free(target).entry, parent)
    }

    /// Frees a node without relinking anything. Only valid while the tree is being drained.
    pub fn release(&mut self, id: NodeId) -> Node<T, U> {
        if self.root == Some(id) {
            self.root = None;
        }
        self.nodes.free(id)
    }

    pub fn find<V>(&self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            curr = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn get<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).map(|id| &self.nodes[id].entry)
    }

    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.find(key) {
            Some(id) => Some(&mut self.nodes[id].entry),
            None => None,
        }
    }

    pub fn floor<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut ret = None;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            match key.cmp(node.key().borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    ret = Some(&node.entry);
                    curr = node.right;
                },
                Ordering::Equal => return Some(&node.entry),
            }
        }
        ret
    }

    pub fn ceil<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut ret = None;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            match key.cmp(node.key().borrow()) {
                Ordering::Less => {
                    ret = Some(&node.entry);
                    curr = node.left;
                },
                Ordering::Greater => curr = node.right,
                Ordering::Equal => return Some(&node.entry),
            }
        }
        ret
    }

    pub fn min(&self) -> Option<&Entry<T, U>> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].entry)
    }

    pub fn max(&self) -> Option<&Entry<T, U>> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].entry)
    }

    /// Checks every structural invariant of the tree and reports the first one that is broken.
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        let root = match self.root {
            Some(root) => root,
            None if self.nodes.is_empty() => return Ok(()),
            None => {
                return Err(Error::LengthMismatch {
                    reachable: 0,
                    stored: self.nodes.len(),
                })
            },
        };

        let node = self.nodes.get(root).ok_or(Error::DanglingHandle(root))?;
        if node.parent.is_some() {
            return Err(Error::RootHasParent(root));
        }

        let mut reachable = 0;
        self.validate_subtree(root, None, None, &mut reachable)?;
        if reachable != self.nodes.len() {
            return Err(Error::LengthMismatch {
                reachable,
                stored: self.nodes.len(),
            });
        }
        Ok(())
    }

    // Returns the recomputed height of the subtree rooted at `id`.
    fn validate_subtree(
        &self,
        id: NodeId,
        lower: Option<&T>,
        upper: Option<&T>,
        reachable: &mut usize,
    ) -> Result<i32>
    where
        T: Ord,
    {
        *reachable += 1;
        let node = self.nodes.get(id).ok_or(Error::DanglingHandle(id))?;
        let key = node.key();
        if lower.map_or(false, |lower| key <= lower) || upper.map_or(false, |upper| key >= upper) {
            return Err(Error::Unordered(id));
        }

        let left = match node.left {
            Some(child) => {
                self.validate_parent_link(child, id)?;
                self.validate_subtree(child, lower, Some(key), reachable)?
            },
            None => -1,
        };
        let right = match node.right {
            Some(child) => {
                self.validate_parent_link(child, id)?;
                self.validate_subtree(child, Some(key), upper, reachable)?
            },
            None => -1,
        };

        let height = cmp::max(left, right) + 1;
        let balance = left - right;
        if balance.abs() > 1 {
            return Err(Error::Unbalanced { node: id, balance });
        }
        if node.height != height {
            return Err(Error::StaleHeight {
                node: id,
                cached: node.height,
                actual: height,
            });
        }
        if i32::from(node.balance) != balance {
            return Err(Error::StaleBalance {
                node: id,
                cached: node.balance,
                actual: balance,
            });
        }
        Ok(height)
    }

    fn validate_parent_link(&self, child: NodeId, parent: NodeId) -> Result<()> {
        let node = self.nodes.get(child).ok_or(Error::DanglingHandle(child))?;
        if node.parent != Some(parent) {
            return Err(Error::BrokenParentLink(child));
        }
        Ok(())
    }

    /// Renders the tree one node per line in pre-order, indented by depth, with each node's
    /// balance factor in brackets.
    pub fn render(&self) -> String
    where
        T: Debug,
    {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.render_subtree(root, 0, "", &mut out);
        }
        out
    }

    fn render_subtree(&self, id: NodeId, depth: usize, label: &str, out: &mut String)
    where
        T: Debug,
    {
        let node = &self.nodes[id];
        let suffix = if node.is_leaf() { "" } else { ":" };
        out.push_str(&format!(
            "{}{}{:?} [{}]{}\n",
            "    ".repeat(depth),
            label,
            node.key(),
            node.balance,
            suffix,
        ));
        if let Some(left) = node.left {
            self.render_subtree(left, depth + 1, "L ", out);
        }
        if let Some(right) = node.right {
            self.render_subtree(right, depth + 1, "R ", out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::arena::NodeId;
    use crate::avl_tree::error::Error;
    use rand::Rng;

    fn key_at(tree: &Tree<u32, u32>, id: Option<NodeId>) -> Option<u32> {
        id.map(|id| *tree.node(id).key())
    }

    fn children(tree: &Tree<u32, u32>, key: u32) -> (Option<u32>, Option<u32>) {
        let node = tree.node(tree.find(&key).unwrap());
        (key_at(tree, node.left), key_at(tree, node.right))
    }

    fn in_order(tree: &Tree<u32, u32>) -> Vec<u32> {
        fn walk(tree: &Tree<u32, u32>, id: Option<NodeId>, out: &mut Vec<u32>) {
            if let Some(id) = id {
                walk(tree, tree.node(id).left, out);
                out.push(*tree.node(id).key());
                walk(tree, tree.node(id).right, out);
            }
        }
        let mut out = Vec::new();
        walk(tree, tree.root(), &mut out);
        out
    }

    fn balances(tree: &Tree<u32, u32>) -> Vec<i8> {
        in_order(tree)
            .iter()
            .map(|key| tree.node(tree.find(key).unwrap()).balance)
            .collect()
    }

    fn parents(tree: &Tree<u32, u32>) -> Vec<(u32, Option<u32>)> {
        in_order(tree)
            .into_iter()
            .map(|key| (key, key_at(tree, tree.node(tree.find(&key).unwrap()).parent)))
            .collect()
    }

    fn ascending(n: u32) -> Tree<u32, u32> {
        let mut tree = Tree::new();
        for key in 1..=n {
            tree.insert(key, key * 10);
        }
        tree
    }

    #[test]
    fn test_single_left_rotation() {
        let mut tree = Tree::new();
        tree.insert(10, 0);
        tree.insert(20, 0);
        tree.insert(30, 0);

        assert_eq!(key_at(&tree, tree.root()), Some(20));
        assert_eq!(children(&tree, 20), (Some(10), Some(30)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_single_right_rotation() {
        let mut tree = Tree::new();
        tree.insert(30, 0);
        tree.insert(20, 0);
        tree.insert(10, 0);

        assert_eq!(key_at(&tree, tree.root()), Some(20));
        assert_eq!(children(&tree, 20), (Some(10), Some(30)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_left_right_rotation() {
        let mut tree = Tree::new();
        tree.insert(30, 0);
        tree.insert(10, 0);
        tree.insert(20, 0);

        assert_eq!(key_at(&tree, tree.root()), Some(20));
        assert_eq!(children(&tree, 20), (Some(10), Some(30)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_right_left_rotation() {
        let mut tree = Tree::new();
        tree.insert(10, 0);
        tree.insert(30, 0);
        tree.insert(20, 0);

        assert_eq!(key_at(&tree, tree.root()), Some(20));
        assert_eq!(children(&tree, 20), (Some(10), Some(30)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_ascending_insertion_shape() {
        let tree = ascending(7);

        assert_eq!(key_at(&tree, tree.root()), Some(4));
        assert_eq!(tree.height(tree.root()), 2);
        assert_eq!(children(&tree, 4), (Some(2), Some(6)));
        assert_eq!(children(&tree, 2), (Some(1), Some(3)));
        assert_eq!(children(&tree, 6), (Some(5), Some(7)));
        assert_eq!(balances(&tree), vec![0; 7]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = ascending(7);
        let root = tree.root();

        let entry = tree.remove(&4).unwrap();
        assert_eq!((entry.key, entry.value), (4, 40));

        // the predecessor's contents moved into the old root's slot
        assert_eq!(tree.root(), root);
        assert_eq!(key_at(&tree, tree.root()), Some(3));
        assert_eq!(tree.node(tree.find(&3).unwrap()).value(), &30);
        assert_eq!(children(&tree, 3), (Some(2), Some(6)));
        assert_eq!(children(&tree, 2), (Some(1), None));
        assert_eq!(in_order(&tree), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut tree = ascending(7);
        tree.remove(&3);
        tree.remove(&2);

        assert_eq!(children(&tree, 4), (Some(1), Some(6)));
        assert_eq!(tree.node(tree.find(&1).unwrap()).parent, tree.root());
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_triggers_rotation() {
        let mut tree = ascending(7);
        tree.remove(&1);
        tree.remove(&3);
        tree.remove(&2);

        // 4 lost its whole left side and rotates left under 6
        assert_eq!(key_at(&tree, tree.root()), Some(6));
        assert_eq!(children(&tree, 6), (Some(4), Some(7)));
        assert_eq!(children(&tree, 4), (None, Some(5)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_only_node() {
        let mut tree = Tree::new();
        tree.insert(1, 1);
        assert!(tree.remove(&1).is_some());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.len(), 0);
        assert!(tree.remove(&1).is_none());
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_insert_duplicate_overwrites_in_place() {
        let mut tree = ascending(7);
        let id = tree.find(&5);

        assert_eq!(tree.insert(5, 500), Some(50));
        assert_eq!(tree.find(&5), id);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.get(&5).map(|entry| entry.value), Some(500));
        assert_eq!(balances(&tree), vec![0; 7]);
    }

    #[test]
    fn test_insert_then_remove_restores_profile() {
        let mut tree = ascending(7);
        let keys = in_order(&tree);
        let profile = balances(&tree);

        tree.insert(8, 80);
        assert_eq!(balances(&tree), vec![0, 0, 0, -1, 0, -1, -1, 0]);
        tree.remove(&8);

        assert_eq!(in_order(&tree), keys);
        assert_eq!(balances(&tree), profile);
    }

    #[test]
    fn test_random_insert_then_remove_restores_profile() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
        let mut tree = Tree::new();
        for _ in 0..300 {
            let key = rng.gen_range(0, 5_000u32);
            tree.insert(key * 2, key);
        }

        let mut unrotated = 0;
        for _ in 0..1_000 {
            let keys = in_order(&tree);
            let profile = balances(&tree);
            let shape = parents(&tree);
            let key = rng.gen_range(0, 5_000u32) * 2 + 1;

            tree.insert(key, 0);
            // every existing node keeps its parent unless the insertion rotated
            let moved = parents(&tree)
                .into_iter()
                .filter(|pair| pair.0 != key)
                .collect::<Vec<(u32, Option<u32>)>>()
                != shape;
            assert_eq!(tree.remove(&key).map(|entry| entry.key), Some(key));

            assert_eq!(in_order(&tree), keys);
            if !moved {
                assert_eq!(balances(&tree), profile);
                unrotated += 1;
            }
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(unrotated > 0);
    }

    #[test]
    fn test_predecessor() {
        let tree = ascending(7);
        let root = tree.root().unwrap();
        assert_eq!(key_at(&tree, tree.predecessor(root)), Some(3));
        assert_eq!(tree.predecessor(tree.find(&1).unwrap()), None);
    }

    #[test]
    fn test_floor_ceil_min_max() {
        let mut tree = Tree::new();
        for key in &[10, 20, 30, 40] {
            tree.insert(*key, 0);
        }

        assert_eq!(tree.floor(&25).map(|entry| entry.key), Some(20));
        assert_eq!(tree.floor(&5).map(|entry| entry.key), None);
        assert_eq!(tree.ceil(&25).map(|entry| entry.key), Some(30));
        assert_eq!(tree.ceil(&45).map(|entry| entry.key), None);
        assert_eq!(tree.min().map(|entry| entry.key), Some(10));
        assert_eq!(tree.max().map(|entry| entry.key), Some(40));
    }

    #[test]
    fn test_validate_detects_stale_height() {
        let mut tree = ascending(3);
        let leaf = tree.find(&1).unwrap();
        tree.nodes[leaf].height = 4;
        assert_eq!(
            tree.validate(),
            Err(Error::StaleHeight {
                node: leaf,
                cached: 4,
                actual: 0,
            }),
        );
        assert_eq!(
            tree.validate().unwrap_err().to_string(),
            format!("node {} caches height 4 but its subtree has height 0", leaf.index()),
        );
    }

    #[test]
    fn test_validate_detects_broken_parent_link() {
        let mut tree = ascending(3);
        let leaf = tree.find(&3).unwrap();
        tree.nodes[leaf].parent = None;
        assert_eq!(tree.validate(), Err(Error::BrokenParentLink(leaf)));
    }

    #[test]
    fn test_validate_detects_unordered_keys() {
        let mut tree = ascending(3);
        let leaf = tree.find(&3).unwrap();
        tree.nodes[leaf].entry.key = 0;
        assert_eq!(tree.validate(), Err(Error::Unordered(leaf)));
    }

    #[test]
    fn test_validate_detects_imbalance() {
        let mut tree = ascending(3);
        let root = tree.root().unwrap();
        let left = tree.find(&1).unwrap();
        let right = tree.find(&3).unwrap();

        // hang 3 below 1 by hand, skipping the rebalance walk
        tree.nodes[root].right = None;
        tree.nodes[root].left = Some(left);
        tree.nodes[left].right = Some(right);
        tree.nodes[right].parent = Some(left);
        tree.nodes[left].height = 1;
        tree.nodes[left].balance = -1;
        tree.nodes[left].entry.key = 0;
        tree.nodes[right].entry.key = 1;

        assert_eq!(
            tree.validate(),
            Err(Error::Unbalanced {
                node: root,
                balance: 2,
            }),
        );
    }

    #[test]
    fn test_render() {
        let tree = ascending(3);
        assert_eq!(tree.render(), "2 [0]:\n    L 1 [0]\n    R 3 [0]\n");
    }

    #[test]
    fn test_release_all_nodes() {
        let mut tree = ascending(3);
        let ids: Vec<NodeId> = [1, 2, 3].iter().map(|key| tree.find(key).unwrap()).collect();
        for id in ids {
            tree.release(id);
        }
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
    }
}
