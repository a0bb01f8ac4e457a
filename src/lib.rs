//! This crate provides a positional doubly-linked stack, the *cascade*, in
//! which every operation takes a cursor and hands back the cursor to use
//! next.
//!
//! A [`Cascade`] owns any number of *chains*. A chain grows from its *tail*
//! (position 0) to its *head*, and each node knows its position. Callers hold
//! [`NodeId`] handles, and any node of a chain can serve as the top of the
//! stack: pushing at a node in the middle splices the new node in right
//! above it.
//!
//! Here is a quick example showing how the cascade works.
//!
//! ```
//! use cascader::Cascade;
//!
//! let mut cascade = Cascade::new();
//!
//! let mut node = cascade.seed(1);
//! for i in 2..=5 {
//!     node = cascade.push(node, i).unwrap(); // the new node is the cursor
//! }
//! assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 5]));
//!
//! node = cascade.pluck(node, -3).unwrap(); // move the 2 to the top
//! assert_eq!(cascade.to_list(node), Ok(vec![1, 3, 4, 5, 2]));
//! assert_eq!(cascade.position(node), Ok(4));
//!
//! node = cascade.jump(node, -2).unwrap(); // stand on the 4
//! assert_eq!(cascade.value(node), Ok(&4));
//! assert_eq!(cascade.len(node), Ok(3)); // the length seen from the 4
//! ```
//!
//! # Memory Layout
//!
//! Every node of every chain lives in one slot table owned by the
//! `Cascade`. Links are slot indices, so a chain looks like:
//! ```text
//!            slot 3            slot 0            slot 4
//!        ╔═══════════╗     ╔═══════════╗     ╔═══════════╗
//!        ║   next    ║ ──→ ║   next    ║ ──→ ║   next    ║ ──→ None
//! None ←─║   prev    ║ ←── ║   prev    ║ ←── ║   prev    ║
//!        ╟───────────╢     ╟───────────╢     ╟───────────╢
//!        ║ position 0║     ║ position 1║     ║ position 2║
//!        ║ payload T ║     ║ payload T ║     ║ payload T ║
//!        ║  (fault)  ║     ║  (fault)  ║     ║  (fault)  ║
//!        ╚═══════════╝     ╚═══════════╝     ╚═══════════╝
//!            tail                                head
//! ```
//! A [`NodeId`] is a slot index paired with the slot's *generation*. When a
//! node is excised its slot is recycled and its generation bumped, so a
//! handle to it turns *stale* rather than pointing at whatever moves in
//! next; using it fails with [`CascadeError::StaleNode`].
//!
//! Each node also carries a `fault` annotation, the error of the last
//! operation invoked on it. It can be disabled by disabling the `fault`
//! feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! cascader = { default-features = false }
//! ```
//!
//! # Offsets and Indices
//!
//! Most operations address a node relative to the cursor by a signed
//! *offset*: positive offsets go up toward the head, negative ones go down
//! toward the tail. An offset that runs off the chain fails with
//! [`CascadeError::InvalidOffset`] and nothing changes.
//!
//! Absolute *indices* ([`Cascade::at`], [`Cascade::slice`]) only cover the
//! nodes at or below the cursor. Negative indices count back from the
//! cursor's length, so `-1` is the cursor itself.
//!
//! ## Examples
//!
//! ```
//! use cascader::{Cascade, CascadeError};
//!
//! let mut cascade = Cascade::new();
//! let tail = cascade.seed("a");
//! let b = cascade.push(tail, "b").unwrap();
//! let c = cascade.push(b, "c").unwrap();
//!
//! assert_eq!(cascade.at(c, -1), Ok(&"c"));
//! assert_eq!(cascade.at(b, -1), Ok(&"b"));
//! assert_eq!(cascade.at(b, 2), Err(CascadeError::InvalidOffset(2)));
//! assert_eq!(cascade.slice(c, None, None, -1), Ok(vec![&"c", &"b", &"a"]));
//!
//! assert_eq!(cascade.remove(c, -2), Ok(c));
//! assert_eq!(cascade.to_list(c), Ok(vec!["b", "c"]));
//! assert_eq!(cascade.value(tail), Err(CascadeError::StaleNode));
//! ```
//!
//! # Cursor Views
//!
//! Threading handles by hand gets verbose. The cursors [`Cursor`] and
//! [`CursorMut`] keep the current node for you. Every editing method of
//! [`CursorMut`] moves the cursor to the node the operation returns and hands
//! back `Result<&mut Self>`, so calls chain; a failed call leaves the cursor
//! where it was.
//!
//! ## Examples
//!
//! ```
//! use cascader::{Cascade, CascadeError};
//!
//! let mut cascade = Cascade::new();
//! let tail = cascade.seed(1);
//!
//! let mut cursor = cascade.cursor_mut(tail).unwrap();
//! cursor.push(2).unwrap().push(3).unwrap().push(4).unwrap();
//! assert_eq!(cursor.current(), &4);
//!
//! cursor.insert(0, 6).unwrap(); // becomes [1, 2, 3, 6, 4], still at 4
//! assert_eq!(cursor.to_list(), Ok(vec![1, 2, 3, 6, 4]));
//! assert_eq!(cursor.position(), 4);
//!
//! cursor.clone_at(-4).unwrap(); // copy the 1 on top of the 4
//! assert_eq!(cursor.to_list(), Ok(vec![1, 2, 3, 6, 4, 1]));
//!
//! assert_eq!(cursor.tail().swap().err(), Some(CascadeError::InvalidOperation("no more values to swap")));
//! assert_eq!(cursor.current(), &1);
//! ```
//!
//! # Values and Conditions
//!
//! The cascade is generic over its payload. For mixed data, [`Value`] is a
//! tagged payload with an explicit [`Value::Empty`] state. The conditional
//! jumps ([`Cascade::jump_if`] and friends) work on any payload implementing
//! [`Condition`], which includes [`Value`] and `bool`.
//!
//! ```
//! use cascader::{Cascade, Value};
//!
//! let mut cascade = Cascade::new();
//! let tail = cascade.seed(Value::from("loop"));
//! let flag = cascade.push(tail, Value::from(false)).unwrap();
//! assert_eq!(cascade.jump_if_else(flag, 0, -1), Ok(tail));
//! ```
//!
//! [`Cursor`]: crate::cascade::cursor::Cursor
//! [`CursorMut`]: crate::cascade::cursor::CursorMut

#[doc(inline)]
pub use cascade::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use cascade::iterator::{Iter, Values};
#[doc(inline)]
pub use cascade::snapshot::Snapshot;
#[doc(inline)]
pub use cascade::{Cascade, NodeId};
#[doc(inline)]
pub use error::{CascadeError, Result};
#[doc(inline)]
pub use value::{Condition, Value};

pub mod cascade;
pub mod error;
pub mod value;
