#[cfg(feature = "fault")]
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

use crate::cascade::cursor::{Cursor, CursorMut};
use crate::error::{CascadeError, Result};

pub mod cursor;
pub mod iterator;
pub mod snapshot;

mod navigation;
mod operations;

/// The `Cascade` is an arena of positional, doubly-linked stacks ("chains").
///
/// Every node of every chain created through a `Cascade` lives in its slot
/// table, and nodes link to each other by slot index. A chain grows from its
/// *tail* (position 0, no `prev`) to its *head* (highest position, no `next`).
/// Each node caches its position, and every splice renumbers the nodes above
/// it, so positions always read `0, 1, ..., n - 1` from tail to head.
///
/// Callers hold [`NodeId`]s. A `NodeId` is a cursor: almost every operation
/// takes one and returns the `NodeId` that should become the new cursor.
/// Handles are generational: once a node is excised its handle goes stale and
/// every later use of it fails with [`CascadeError::StaleNode`].
///
/// Inserting and removing nodes is *O*(1) in the splice itself, plus the
/// renumbering walk up to the head. Addressing by offset or index walks the
/// chain, so it takes *O*(distance) time.
///
/// # Naming Conventions
///
/// - *below* / *down*: toward the tail, following `prev`;
/// - *above* / *up*: toward the head, following `next`;
/// - *offset*: a signed number of links relative to a cursor;
/// - *index*: an absolute position, where negative values count back from
///   the cursor's own length.
#[derive(Clone)]
pub struct Cascade<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    live: usize,
}

/// A handle to a node of a [`Cascade`].
///
/// It is a plain `Copy` value and does not borrow the cascade, so any number of
/// handles may refer to the same chain at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
    pub(crate) position: usize,
    #[cfg(feature = "fault")]
    pub(crate) fault: Cell<Option<CascadeError>>,
}

impl<T> Node<T> {
    fn new(value: T, prev: Option<usize>, next: Option<usize>, position: usize) -> Self {
        Self {
            value,
            prev,
            next,
            position,
            #[cfg(feature = "fault")]
            fault: Cell::new(None),
        }
    }
}

// private methods
impl<T> Cascade<T> {
    pub(crate) fn get(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index).and_then(|slot| slot.node.as_mut())
    }

    /// Look up a live node through its handle.
    pub(crate) fn node(&self, id: NodeId) -> Result<&Node<T>> {
        match self.slots.get(id.index) {
            Some(slot) if slot.generation == id.generation => {
                slot.node.as_ref().ok_or(CascadeError::StaleNode)
            }
            _ => Err(CascadeError::StaleNode),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>> {
        match self.slots.get_mut(id.index) {
            Some(slot) if slot.generation == id.generation => {
                slot.node.as_mut().ok_or(CascadeError::StaleNode)
            }
            _ => Err(CascadeError::StaleNode),
        }
    }

    pub(crate) fn id_of(&self, index: usize) -> NodeId {
        let generation = self.slots.get(index).map_or(0, |slot| slot.generation);
        NodeId { index, generation }
    }

    /// Borrow two distinct live nodes mutably at once.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Node<T>, &mut Node<T>)> {
        if a == b {
            return None;
        }
        let (low, high) = (a.min(b), a.max(b));
        let (below, above) = self.slots.split_at_mut(high);
        let low_node = below.get_mut(low)?.node.as_mut()?;
        let high_node = above.get_mut(0)?.node.as_mut()?;
        if a < b {
            Some((low_node, high_node))
        } else {
            Some((high_node, low_node))
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    /// Vacate a slot without touching its neighbours. Bumping the generation
    /// invalidates every outstanding handle to the slot.
    pub(crate) fn dealloc(&mut self, index: usize) -> Option<Node<T>> {
        let slot = self.slots.get_mut(index)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.live -= 1;
        Some(node)
    }

    /// Link `prev` and `next` to each other. Either side may be absent, in
    /// which case the other side becomes a tail or a head.
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        if let Some(node) = prev.and_then(|index| self.get_mut(index)) {
            node.next = next;
        }
        if let Some(node) = next.and_then(|index| self.get_mut(index)) {
            node.prev = prev;
        }
    }

    /// Add one to the position of `from` and of every node above it.
    fn shift_up(&mut self, mut from: Option<usize>) {
        while let Some(node) = from.and_then(|index| self.get_mut(index)) {
            node.position += 1;
            from = node.next;
        }
    }

    /// Subtract one from the position of `from` and of every node above it.
    fn shift_down(&mut self, mut from: Option<usize>) {
        while let Some(node) = from.and_then(|index| self.get_mut(index)) {
            node.position -= 1;
            from = node.next;
        }
    }

    /// Splice a new node holding `value` between `prev` and `next`, and
    /// renumber everything above it.
    ///
    /// `prev` and `next` must be adjacent (only checked in
    /// `#[cfg(debug_assertions)]`); passing `None` for both seeds a new chain.
    pub(crate) fn attach(&mut self, prev: Option<usize>, next: Option<usize>, value: T) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let position = prev
            .and_then(|index| self.get(index))
            .map_or(0, |node| node.position + 1);
        self.shift_up(next);
        let index = self.alloc(Node::new(value, prev, next, position));
        self.connect(prev, Some(index));
        self.connect(Some(index), next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(index));
            self.assert_adjacent(Some(index), next);
        }
        index
    }

    /// Excise the node at `index` from its chain, repair the links around it,
    /// renumber everything above it, and hand back its value.
    pub(crate) fn detach(&mut self, index: usize) -> Result<T> {
        let node = self.dealloc(index).ok_or(CascadeError::StaleNode)?;
        self.connect(node.prev, node.next);
        self.shift_down(node.next);
        #[cfg(debug_assertions)]
        self.assert_adjacent(node.prev, node.next);
        Ok(node.value)
    }

    /// Slot index of the head of `node`'s chain. Leaves the fault annotation
    /// alone.
    pub(crate) fn head_index(&self, node: NodeId) -> Result<usize> {
        let mut current = self.node(node)?;
        let mut index = node.index;
        while let Some(next) = current.next {
            current = self.get(next).ok_or(CascadeError::StaleNode)?;
            index = next;
        }
        Ok(index)
    }

    /// Slot index of the tail of `node`'s chain. Leaves the fault annotation
    /// alone.
    pub(crate) fn tail_index(&self, node: NodeId) -> Result<usize> {
        let mut current = self.node(node)?;
        let mut index = node.index;
        while let Some(prev) = current.prev {
            current = self.get(prev).ok_or(CascadeError::StaleNode)?;
            index = prev;
        }
        Ok(index)
    }

    /// Record the outcome of an operation invoked on `id` as its fault
    /// annotation.
    pub(crate) fn track<R>(&self, id: NodeId, result: Result<R>) -> Result<R> {
        #[cfg(feature = "fault")]
        {
            if let Ok(node) = self.node(id) {
                node.fault.set(result.as_ref().err().copied());
            }
        }
        #[cfg(not(feature = "fault"))]
        let _ = id;
        result
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<usize>, next: Option<usize>) {
        if let Some(node) = prev.and_then(|index| self.get(index)) {
            assert_eq!(node.next, next);
        }
        if let Some(node) = next.and_then(|index| self.get(index)) {
            assert_eq!(node.prev, prev);
            if let Some(below) = prev.and_then(|index| self.get(index)) {
                assert_eq!(below.position + 1, node.position);
            }
        }
    }
}

impl<T> Cascade<T> {
    /// Create an empty `Cascade`.
    ///
    /// # Examples
    /// ```
    /// use cascader::Cascade;
    /// let cascade: Cascade<u32> = Cascade::new();
    /// assert!(cascade.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `Cascade` with room for `capacity` nodes before the
    /// slot table reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Start a new chain holding a single node, which is both its tail and
    /// its head.
    ///
    /// # Examples
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let node = cascade.seed("only");
    /// assert!(cascade.is_tail(node).unwrap());
    /// assert!(cascade.is_head(node).unwrap());
    /// assert_eq!(cascade.len(node), Ok(1));
    /// ```
    pub fn seed(&mut self, value: T) -> NodeId {
        let index = self.attach(None, None, value);
        self.id_of(index)
    }

    /// Returns `true` if `node` still refers to a live node.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    /// Returns the number of live nodes, across every chain.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Returns `true` if there is no live node at all, in any chain.
    ///
    /// This is the arena-wide counterpart of [`Cascade::node_count`], not of
    /// [`Cascade::len`]: a chain is never empty, and `len` is measured from a
    /// node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Provides a reference to the value held by `node`.
    pub fn value(&self, node: NodeId) -> Result<&T> {
        self.node(node).map(|node| &node.value)
    }

    /// Provides a mutable reference to the value held by `node`.
    pub fn value_mut(&mut self, node: NodeId) -> Result<&mut T> {
        self.node_mut(node).map(|node| &mut node.value)
    }

    /// Replace the value held by `node`, returning the old one.
    ///
    /// # Examples
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let node = cascade.seed(1);
    /// assert_eq!(cascade.set_value(node, 2), Ok(1));
    /// assert_eq!(cascade.value(node), Ok(&2));
    /// ```
    pub fn set_value(&mut self, node: NodeId, value: T) -> Result<T> {
        self.value_mut(node)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Returns the position of `node` in its chain (0 at the tail).
    pub fn position(&self, node: NodeId) -> Result<usize> {
        self.node(node).map(|node| node.position)
    }

    /// Returns the length of the chain *as seen from `node`*: the number of
    /// nodes at or below it, i.e. `position + 1`. Nodes above `node` are not
    /// counted. It is never zero; for the arena-wide total see
    /// [`Cascade::node_count`] and [`Cascade::is_empty`].
    ///
    /// # Examples
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let head = cascade.push(tail, 2).unwrap();
    /// assert_eq!(cascade.len(head), Ok(2));
    /// assert_eq!(cascade.len(tail), Ok(1));
    /// ```
    pub fn len(&self, node: NodeId) -> Result<usize> {
        self.position(node).map(|position| position + 1)
    }

    /// Returns the node directly below `node`, or `None` at the tail.
    pub fn prev(&self, node: NodeId) -> Result<Option<NodeId>> {
        let prev = self.node(node)?.prev;
        Ok(prev.map(|index| self.id_of(index)))
    }

    /// Returns the node directly above `node`, or `None` at the head.
    pub fn next(&self, node: NodeId) -> Result<Option<NodeId>> {
        let next = self.node(node)?.next;
        Ok(next.map(|index| self.id_of(index)))
    }

    /// Returns `true` if nothing is above `node`.
    pub fn is_head(&self, node: NodeId) -> Result<bool> {
        self.node(node).map(|node| node.next.is_none())
    }

    /// Returns `true` if nothing is below `node`.
    pub fn is_tail(&self, node: NodeId) -> Result<bool> {
        self.node(node).map(|node| node.prev.is_none())
    }

    /// The soft-error annotation left on `node` by the last operation invoked
    /// on it, or `None` if that operation succeeded. Enabled by
    /// `feature = "fault"`.
    ///
    /// Plain reads (`value`, `position`, `to_list`, iteration, `save`) do
    /// not count as operations and leave the annotation alone.
    ///
    /// # Examples
    /// ```
    /// #![cfg(feature = "fault")]
    /// use cascader::{Cascade, CascadeError};
    ///
    /// let mut cascade = Cascade::new();
    /// let node = cascade.seed(1);
    /// assert!(cascade.swap(node).is_err());
    /// assert_eq!(cascade.fault(node), Ok(Some(CascadeError::InvalidOperation("no more values to swap"))));
    ///
    /// cascade.push(node, 2).unwrap();
    /// assert_eq!(cascade.fault(node), Ok(None));
    /// ```
    #[cfg(feature = "fault")]
    pub fn fault(&self, node: NodeId) -> Result<Option<CascadeError>> {
        self.node(node).map(|node| node.fault.get())
    }

    /// Walk up to the head of the chain containing `node`.
    pub fn head(&self, node: NodeId) -> Result<NodeId> {
        let result = self.head_index(node).map(|index| self.id_of(index));
        self.track(node, result)
    }

    /// Walk down to the tail of the chain containing `node`.
    pub fn tail(&self, node: NodeId) -> Result<NodeId> {
        let result = self.tail_index(node).map(|index| self.id_of(index));
        self.track(node, result)
    }

    /// Free every node of the chain containing `node`, returning how many
    /// nodes were freed. Every handle into the chain goes stale.
    pub fn release(&mut self, node: NodeId) -> Result<usize> {
        let tail = self.tail_index(node)?;
        let mut freed = 0;
        let mut current = Some(tail);
        while let Some(index) = current {
            current = self.dealloc(index).and_then(|node| node.next);
            freed += 1;
        }
        Ok(freed)
    }

    /// Provides a read-only cursor at `node`.
    pub fn cursor(&self, node: NodeId) -> Result<Cursor<'_, T>> {
        self.node(node)?;
        Ok(Cursor::new(self, node))
    }

    /// Provides a cursor with editing operations at `node`.
    ///
    /// # Examples
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let mut cursor = cascade.cursor_mut(tail).unwrap();
    /// cursor.push(2).unwrap().push(3).unwrap().swap().unwrap();
    /// assert_eq!(cursor.to_list(), Ok(vec![1, 3, 2]));
    /// ```
    pub fn cursor_mut(&mut self, node: NodeId) -> Result<CursorMut<'_, T>> {
        self.node(node)?;
        Ok(CursorMut::new(self, node))
    }

    /// Indices of the chain containing the tail at `tail`, in tail-to-head
    /// order.
    fn chain_from(&self, tail: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = Some(tail);
        while let Some(index) = current {
            chain.push(index);
            current = self.get(index).and_then(|node| node.next);
        }
        chain
    }
}

/// Prints every chain, tail first.
impl<T: Debug> Debug for Cascade<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tails = self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.node
                .as_ref()
                .filter(|node| node.prev.is_none())
                .map(|_| index)
        });
        let chains = tails.map(|tail| {
            self.chain_from(tail)
                .into_iter()
                .filter_map(|index| self.get(index).map(|node| &node.value))
                .collect::<Vec<_>>()
        });
        f.debug_list().entries(chains).finish()
    }
}

impl<T> Default for Cascade<T> {
    fn default() -> Self {
        Self::new()
    }
}
