use crate::arena::NodeId;
use crate::entry::Entry;

/// A struct representing an internal node of an avl tree.
///
/// Child links are the only edges that own a node; `parent` is a plain handle used to walk back
/// up the tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    // height of the left subtree minus height of the right subtree
    pub balance: i8,
    // a leaf has height 0
    pub height: i32,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U, parent: Option<NodeId>) -> Self {
        Node {
            entry: Entry::new(key, value),
            balance: 0,
            height: 0,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &T {
        &self.entry.key
    }

    pub fn value(&self) -> &U {
        &self.entry.value
    }

    pub fn value_mut(&mut self) -> &mut U {
        &mut self.entry.value
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
