//! An ordered map backed by an avl tree whose nodes live in an arena.
//!
//! # Examples
//!
//! ```
//! use avl_collections::avl_tree::AvlMap;
//!
//! let mut map = AvlMap::new();
//! for key in 1..8 {
//!     map.insert(key, key * 10);
//! }
//!
//! assert_eq!(map.root_key(), Some(&4));
//! assert_eq!(map.remove(&4), Some((4, 40)));
//! assert_eq!(map.root_key(), Some(&3));
//! assert!(map.validate().is_ok());
//! ```

mod entry;
pub mod arena;
pub mod avl_tree;
