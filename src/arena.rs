//! Slab of values addressed by stable handles.

use std::mem;
use std::ops::{Index, IndexMut};

/// A stable handle to a value stored in an `Arena<T>`.
///
/// A handle stays valid until the value it refers to is freed. Freed slots are reused by later
/// allocations, so a stale handle may end up referring to a different value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the slot index this handle refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

enum Slot<T> {
    Occupied(T),
    // next vacant slot in the free list
    Vacant(Option<usize>),
}

/// A growable slab that hands out `NodeId` handles to the values it stores.
///
/// Values are kept in a single `Vec` and vacant slots are chained into a free list, so freeing
/// and allocating never moves other values and every live handle stays valid. All values are
/// dropped with the arena.
///
/// # Examples
///
/// ```
/// use avl_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` values before it reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of live values in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores a value in the arena, reusing a vacant slot if there is one, and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// arena.free(x);
    /// assert_eq!(arena.allocate(1), x);
    /// ```
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free_head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.free_head = next,
                    Slot::Occupied(_) => panic!("Expected the free list to point at a vacant slot."),
                }
                NodeId(index)
            },
        }
    }

    /// Removes a value from the arena and returns it. The slot is pushed onto the free list.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range or refers to a vacant slot.
    pub fn free(&mut self, id: NodeId) -> T {
        if id.0 >= self.slots.len() {
            panic!("Error: attempting to free an out of range slot.");
        }
        match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free_head)) {
            Slot::Occupied(value) => {
                self.free_head = Some(id.0);
                self.len -= 1;
                value
            },
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
        }
    }

    /// Returns an immutable reference to a value. Returns `None` if `id` does not refer to a live
    /// value.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to a value. Returns `None` if `id` does not refer to a live
    /// value.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns mutable references to two distinct live values at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or if either handle does not refer to a live value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::arena::Arena;
    /// use std::mem;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(1);
    /// let y = arena.allocate(2);
    ///
    /// let (a, b) = arena.pair_mut(x, y);
    /// mem::swap(a, b);
    /// assert_eq!((arena[x], arena[y]), (2, 1));
    /// ```
    pub fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Expected two distinct handles.");
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(high);
        let first = match head.get_mut(low) {
            Some(Slot::Occupied(value)) => value,
            _ => panic!("Error: entry out of bounds."),
        };
        let second = match tail.first_mut() {
            Some(Slot::Occupied(value)) => value,
            _ => panic!("Error: entry out of bounds."),
        };
        if a.0 < b.0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Drops every value and forgets all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: entry out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, NodeId};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(NodeId(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0), NodeId(0));
        assert_eq!(arena.allocate(0), NodeId(1));
        assert_eq!(arena.allocate(0).index(), 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots_last_in_first_out() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        arena.allocate(2);

        assert_eq!(arena.free(x), 0);
        assert_eq!(arena.free(y), 1);
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.allocate(3), y);
        assert_eq!(arena.allocate(4), x);
        assert_eq!(arena.allocate(5), NodeId(3));
    }

    #[test]
    fn test_get() {
        let mut arena = Arena::new();
        let x = arena.allocate(7);
        assert_eq!(arena.get(x), Some(&7));
        assert_eq!(arena.get(NodeId(1)), None);

        arena.free(x);
        assert_eq!(arena.get(x), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena[x], 1);
    }

    #[test]
    fn test_pair_mut_preserves_argument_order() {
        let mut arena = Arena::new();
        let x = arena.allocate(1);
        let y = arena.allocate(2);

        let (b, a) = arena.pair_mut(y, x);
        assert_eq!((*a, *b), (1, 2));
    }

    #[test]
    #[should_panic]
    fn test_pair_mut_same_handle() {
        let mut arena = Arena::new();
        let x = arena.allocate(1);
        arena.pair_mut(x, x);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(3), NodeId(0));
    }
}
