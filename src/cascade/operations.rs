//! Stack and splice operations.
//!
//! Each public operation takes the cursor and returns the node that should
//! become the new cursor. The inner helpers do the work without touching the
//! fault annotation, so composite operations record exactly one outcome.

use crate::cascade::{Cascade, NodeId};
use crate::error::{CascadeError, Result};

// Methods that might change the linking structure of a chain.
impl<T> Cascade<T> {
    fn push_above(&mut self, node: NodeId, value: T) -> Result<NodeId> {
        let next = self.node(node)?.next;
        let index = self.attach(Some(node.index), next, value);
        Ok(self.id_of(index))
    }

    fn pop_below(&mut self, node: NodeId) -> Result<(NodeId, T)> {
        let prev = self.node(node)?.prev.ok_or(CascadeError::EmptyStack)?;
        let value = self.detach(node.index)?;
        Ok((self.id_of(prev), value))
    }

    fn require_head(&self, node: NodeId, message: &'static str) -> Result<()> {
        if self.node(node)?.next.is_some() {
            return Err(CascadeError::InvalidOperation(message));
        }
        Ok(())
    }

    /// Push `value` directly above `node` and return the new node.
    ///
    /// If `node` is not the head, the new node is spliced between `node` and
    /// the node above it, and everything above is renumbered.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time at the head, and in
    /// *O*(*k*) time with *k* nodes above `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let three = cascade.push(tail, 3).unwrap();
    /// let two = cascade.push(tail, 2).unwrap();
    /// assert_eq!(cascade.to_list(three), Ok(vec![1, 2, 3]));
    /// assert_eq!(cascade.position(two), Ok(1));
    /// assert_eq!(cascade.position(three), Ok(2));
    /// ```
    pub fn push(&mut self, node: NodeId, value: T) -> Result<NodeId> {
        let result = self.push_above(node, value);
        self.track(node, result)
    }

    /// Remove `node` from its chain and return the node that was below it.
    /// The removed value is dropped.
    ///
    /// # Errors
    ///
    /// Fails with [`CascadeError::EmptyStack`] if `node` is the tail, even if
    /// nodes remain above it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::{Cascade, CascadeError};
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let head = cascade.push(tail, 2).unwrap();
    /// assert_eq!(cascade.pop(head), Ok(tail));
    /// assert_eq!(cascade.pop(tail), Err(CascadeError::EmptyStack));
    /// ```
    pub fn pop(&mut self, node: NodeId) -> Result<NodeId> {
        self.pop_value(node).map(|(below, _)| below)
    }

    /// Like [`Cascade::pop`], but hand the removed value to the caller.
    pub fn pop_value(&mut self, node: NodeId) -> Result<(NodeId, T)> {
        let result = self.pop_below(node);
        self.track(node, result)
    }

    /// Exchange the value of `node` with the value directly below it.
    /// Returns `node`.
    ///
    /// # Errors
    ///
    /// Fails with [`CascadeError::InvalidOperation`] if `node` is the tail.
    pub fn swap(&mut self, node: NodeId) -> Result<NodeId> {
        let result = self.node(node).and_then(|current| {
            current
                .prev
                .ok_or(CascadeError::InvalidOperation("no more values to swap"))
        });
        let result = match result {
            Ok(prev) => match self.pair_mut(node.index, prev) {
                Some((upper, lower)) => {
                    std::mem::swap(&mut upper.value, &mut lower.value);
                    Ok(node)
                }
                None => Err(CascadeError::StaleNode),
            },
            Err(err) => Err(err),
        };
        self.track(node, result)
    }

    /// Push a copy of the value at `node` directly above it.
    pub fn dup(&mut self, node: NodeId) -> Result<NodeId>
    where
        T: Clone,
    {
        let result = self
            .node(node)
            .map(|current| current.value.clone())
            .and_then(|value| self.push_above(node, value));
        self.track(node, result)
    }

    /// Copy the value at `offset` from `node` into a new single-node chain,
    /// and return that detached node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let head = cascade.push(tail, 2).unwrap();
    /// let copy = cascade.pick(head, -1).unwrap();
    /// assert_eq!(cascade.to_list(copy), Ok(vec![1]));
    /// assert_eq!(cascade.to_list(head), Ok(vec![1, 2]));
    /// ```
    pub fn pick(&mut self, node: NodeId, offset: isize) -> Result<NodeId>
    where
        T: Clone,
    {
        let result = self
            .resolve(node, offset)
            .and_then(|index| self.get(index).ok_or(CascadeError::StaleNode))
            .map(|target| target.value.clone())
            .map(|value| self.seed(value));
        self.track(node, result)
    }

    /// Excise the node at `offset` from `node` and push its value directly
    /// above `node`. Returns the pushed node. A zero offset leaves the chain
    /// alone and returns `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let mut node = cascade.seed(1);
    /// for i in 2..=5 {
    ///     node = cascade.push(node, i).unwrap();
    /// }
    /// node = cascade.pluck(node, -1).unwrap();
    /// assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 5, 4]));
    /// ```
    pub fn pluck(&mut self, node: NodeId, offset: isize) -> Result<NodeId> {
        let result = self.pluck_inner(node, offset);
        self.track(node, result)
    }

    fn pluck_inner(&mut self, node: NodeId, offset: isize) -> Result<NodeId> {
        let target = self.resolve(node, offset)?;
        if offset == 0 {
            return Ok(node);
        }
        let value = self.detach(target)?;
        self.push_above(node, value)
    }

    /// Push a copy of the value at `offset` from `node` directly above
    /// `node`, leaving the original in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let mut node = cascade.seed(1);
    /// for i in 2..=5 {
    ///     node = cascade.push(node, i).unwrap();
    /// }
    /// node = cascade.clone_at(node, -2).unwrap();
    /// assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 5, 3]));
    /// ```
    pub fn clone_at(&mut self, node: NodeId, offset: isize) -> Result<NodeId>
    where
        T: Clone,
    {
        let result = self
            .resolve(node, offset)
            .and_then(|index| self.get(index).ok_or(CascadeError::StaleNode))
            .map(|target| target.value.clone())
            .and_then(|value| self.push_above(node, value));
        self.track(node, result)
    }

    /// Remove the node at `offset` from `node` entirely.
    ///
    /// With a non-zero offset the cursor stays at `node`. A zero offset pops
    /// `node` itself and returns the node below it.
    ///
    /// # Errors
    ///
    /// Fails with [`CascadeError::InvalidOffset`] if the offset leaves the
    /// chain, and with [`CascadeError::EmptyStack`] for a zero offset at the
    /// tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let mut node = cascade.seed(1);
    /// for i in 2..=5 {
    ///     node = cascade.push(node, i).unwrap();
    /// }
    /// node = cascade.remove(node, 0).unwrap();
    /// assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4]));
    /// node = cascade.remove(node, -3).unwrap();
    /// assert_eq!(cascade.to_list(node), Ok(vec![2, 3, 4]));
    /// ```
    pub fn remove(&mut self, node: NodeId, offset: isize) -> Result<NodeId> {
        let result = self.remove_inner(node, offset);
        self.track(node, result)
    }

    fn remove_inner(&mut self, node: NodeId, offset: isize) -> Result<NodeId> {
        let target = self.resolve(node, offset)?;
        if offset == 0 {
            return self.pop_below(node).map(|(below, _)| below);
        }
        self.detach(target)?;
        Ok(node)
    }

    /// Splice a new node holding `value` in at `offset` from `node`. The new
    /// node takes the target's position, and the target and everything above
    /// it move up by one. Returns `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let mut node = cascade.seed(1);
    /// for i in 2..=5 {
    ///     node = cascade.push(node, i).unwrap();
    /// }
    /// node = cascade.insert(node, 0, 6).unwrap();
    /// assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 6, 5]));
    /// assert_eq!(cascade.position(node), Ok(5));
    /// ```
    pub fn insert(&mut self, node: NodeId, offset: isize, value: T) -> Result<NodeId> {
        let result = self.insert_inner(node, offset, value);
        self.track(node, result)
    }

    fn insert_inner(&mut self, node: NodeId, offset: isize, value: T) -> Result<NodeId> {
        let target = self.resolve(node, offset)?;
        let prev = self.get(target).ok_or(CascadeError::StaleNode)?.prev;
        self.attach(prev, Some(target), value);
        Ok(node)
    }

    /// Replace the value at `offset` from `node` in place. Returns `node`.
    pub fn update(&mut self, node: NodeId, offset: isize, value: T) -> Result<NodeId> {
        let result = self.resolve(node, offset).and_then(|index| {
            let target = self.get_mut(index).ok_or(CascadeError::StaleNode)?;
            target.value = value;
            Ok(node)
        });
        self.track(node, result)
    }

    /// Build a new chain holding the values of `node`'s chain in reverse
    /// order, and return its head. The original chain is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let first = cascade.seed("first");
    /// let second = cascade.push(first, "second").unwrap();
    /// let third = cascade.push(second, "third").unwrap();
    ///
    /// let reversed = cascade.reverse(third).unwrap();
    /// assert_eq!(cascade.to_list(reversed), Ok(vec!["third", "second", "first"]));
    /// assert_eq!(cascade.to_list(third), Ok(vec!["first", "second", "third"]));
    /// ```
    pub fn reverse(&mut self, node: NodeId) -> Result<NodeId>
    where
        T: Clone,
    {
        let result = self.reverse_inner(node);
        self.track(node, result)
    }

    fn reverse_inner(&mut self, node: NodeId) -> Result<NodeId>
    where
        T: Clone,
    {
        let tail = self.tail_index(node)?;
        let values = self
            .chain_from(tail)
            .into_iter()
            .map(|index| {
                self.get(index)
                    .map(|node| node.value.clone())
                    .ok_or(CascadeError::StaleNode)
            })
            .collect::<Result<Vec<_>>>()?;
        let mut values = values.into_iter().rev();
        let first = values.next().ok_or(CascadeError::StaleNode)?;
        let mut top = self.attach(None, None, first);
        for value in values {
            top = self.attach(Some(top), None, value);
        }
        Ok(self.id_of(top))
    }

    /// Drop every node above the tail of `node`'s chain, and return the tail.
    /// On success the outcome is recorded on the tail, since `node` itself is
    /// gone unless it was the tail.
    pub fn reset(&mut self, node: NodeId) -> Result<NodeId> {
        let result = self.reset_inner(node);
        match result {
            Ok(tail) => self.track(tail, result),
            Err(_) => self.track(node, result),
        }
    }

    fn reset_inner(&mut self, node: NodeId) -> Result<NodeId> {
        let tail = self.tail_index(node)?;
        let mut above = self.get_mut(tail).ok_or(CascadeError::StaleNode)?.next.take();
        while let Some(index) = above {
            above = self.dealloc(index).and_then(|node| node.next);
        }
        Ok(self.id_of(tail))
    }
}

// Head-guarded variants: the same operations, refused unless the cursor is
// the head of its chain.
impl<T> Cascade<T> {
    /// [`Cascade::push`], only at the head.
    pub fn push_head(&mut self, node: NodeId, value: T) -> Result<NodeId> {
        match self.require_head(node, "push_head on a non-head node") {
            Ok(()) => self.push(node, value),
            Err(err) => self.track(node, Err(err)),
        }
    }

    /// [`Cascade::pop`], only at the head.
    pub fn pop_head(&mut self, node: NodeId) -> Result<NodeId> {
        match self.require_head(node, "pop_head on a non-head node") {
            Ok(()) => self.pop(node),
            Err(err) => self.track(node, Err(err)),
        }
    }

    /// [`Cascade::swap`], only at the head.
    pub fn swap_head(&mut self, node: NodeId) -> Result<NodeId> {
        match self.require_head(node, "swap_head on a non-head node") {
            Ok(()) => self.swap(node),
            Err(err) => self.track(node, Err(err)),
        }
    }

    /// [`Cascade::dup`], only at the head.
    pub fn dup_head(&mut self, node: NodeId) -> Result<NodeId>
    where
        T: Clone,
    {
        match self.require_head(node, "dup_head on a non-head node") {
            Ok(()) => self.dup(node),
            Err(err) => self.track(node, Err(err)),
        }
    }

    /// [`Cascade::pluck`], only at the head.
    pub fn pluck_head(&mut self, node: NodeId, offset: isize) -> Result<NodeId> {
        match self.require_head(node, "pluck_head on a non-head node") {
            Ok(()) => self.pluck(node, offset),
            Err(err) => self.track(node, Err(err)),
        }
    }

    /// [`Cascade::clone_at`], only at the head.
    pub fn clone_head(&mut self, node: NodeId, offset: isize) -> Result<NodeId>
    where
        T: Clone,
    {
        match self.require_head(node, "clone_head on a non-head node") {
            Ok(()) => self.clone_at(node, offset),
            Err(err) => self.track(node, Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cascade::tests::assert_well_formed;
    use crate::cascade::{Cascade, NodeId};
    use crate::error::CascadeError;

    fn chain_of(cascade: &mut Cascade<i32>, values: &[i32]) -> NodeId {
        let mut node = cascade.seed(values[0]);
        for &value in &values[1..] {
            node = cascade.push(node, value).unwrap();
        }
        node
    }

    #[test]
    fn push_and_pop() {
        let mut cascade = Cascade::new();
        let mut node = cascade.seed(1);
        node = cascade.push(node, 2).unwrap();
        node = cascade.push(node, 3).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3]));

        node = cascade.pop(node).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2]));
        let (tail, value) = cascade.pop_value(node).unwrap();
        assert_eq!(value, 2);
        assert_eq!(cascade.to_list(tail), Ok(vec![1]));
        assert_eq!(cascade.pop(tail), Err(CascadeError::EmptyStack));
        assert_eq!(cascade.to_list(tail), Ok(vec![1]));
        assert_eq!(cascade.node_count(), 1);
    }

    #[test]
    fn push_into_the_middle_renumbers() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3]);
        let two = cascade.jump(head, -1).unwrap();
        let inserted = cascade.push(two, 9).unwrap();
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 9, 3]));
        assert_eq!(cascade.position(inserted), Ok(2));
        assert_eq!(cascade.position(head), Ok(3));
        assert_well_formed(&cascade, head);
    }

    #[test]
    fn pop_in_the_middle_renumbers() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3, 4]);
        let two = cascade.jump(head, -2).unwrap();
        let one = cascade.pop(two).unwrap();
        assert_eq!(cascade.value(one), Ok(&1));
        assert_eq!(cascade.to_list(head), Ok(vec![1, 3, 4]));
        assert_eq!(cascade.position(head), Ok(2));
        assert_well_formed(&cascade, head);
    }

    #[test]
    fn swap_values() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3]);
        assert_eq!(cascade.swap(head), Ok(head));
        assert_eq!(cascade.to_list(head), Ok(vec![1, 3, 2]));

        let tail = cascade.seed(1);
        assert_eq!(
            cascade.swap(tail),
            Err(CascadeError::InvalidOperation("no more values to swap"))
        );
    }

    #[test]
    fn dup_top() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3]);
        let head = cascade.dup(head).unwrap();
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 3, 3]));
    }

    #[test]
    fn pick_detached_copy() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3, 4, 5]);
        for (offset, expected) in (1..=4).zip([4, 3, 2, 1].iter()) {
            let picked = cascade.pick(head, -offset).unwrap();
            assert_eq!(cascade.value(picked), Ok(expected));
            assert_eq!(cascade.prev(picked), Ok(None));
            assert_eq!(cascade.next(picked), Ok(None));
        }
        assert_eq!(cascade.pick(head, -5), Err(CascadeError::InvalidOffset(-5)));
        assert_eq!(cascade.pick(head, 1), Err(CascadeError::InvalidOffset(1)));
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn pluck_reorders() {
        let mut cascade = Cascade::new();
        let mut node = chain_of(&mut cascade, &[1, 2, 3, 4, 5]);
        node = cascade.pluck(node, 0).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 5]));
        node = cascade.pluck(node, -1).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 5, 4]));
        node = cascade.pluck(node, -2).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 5, 4, 3]));
        node = cascade.pluck(node, -3).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 5, 4, 3, 2]));
        node = cascade.pluck(node, -4).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![5, 4, 3, 2, 1]));
        assert_eq!(cascade.pluck(node, -5), Err(CascadeError::InvalidOffset(-5)));
        assert_eq!(cascade.to_list(node), Ok(vec![5, 4, 3, 2, 1]));
        assert_well_formed(&cascade, node);
    }

    #[test]
    fn pluck_from_above() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3, 4]);
        let two = cascade.jump(head, -2).unwrap();
        let moved = cascade.pluck(two, 2).unwrap();
        assert_eq!(cascade.value(moved), Ok(&4));
        assert_eq!(cascade.to_list(two), Ok(vec![1, 2, 4, 3]));
        assert_well_formed(&cascade, two);
    }

    #[test]
    fn clone_copies() {
        let mut cascade = Cascade::new();
        let mut node = chain_of(&mut cascade, &[1, 2, 3, 4, 5]);
        node = cascade.clone_at(node, 0).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 5, 5]));
        node = cascade.clone_at(node, -2).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 5, 5, 4]));
        node = cascade.clone_at(node, -5).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 5, 5, 4, 2]));
        assert_eq!(cascade.clone_at(node, -8), Err(CascadeError::InvalidOffset(-8)));
        assert_eq!(cascade.clone_at(node, 1), Err(CascadeError::InvalidOffset(1)));
    }

    #[test]
    fn remove_values() {
        let mut cascade = Cascade::new();
        let mut node = chain_of(&mut cascade, &[1, 2, 3, 4, 5]);
        node = cascade.remove(node, 0).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4]));
        node = cascade.remove(node, -3).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![2, 3, 4]));
        assert_eq!(cascade.remove(node, -3), Err(CascadeError::InvalidOffset(-3)));
        assert_eq!(cascade.remove(node, 1), Err(CascadeError::InvalidOffset(1)));
        let tail = cascade.tail(node).unwrap();
        assert_eq!(cascade.remove(tail, 0), Err(CascadeError::EmptyStack));
        assert_eq!(cascade.node_count(), 3);
        assert_well_formed(&cascade, node);
    }

    #[test]
    fn insert_shifts_up() {
        let mut cascade = Cascade::new();
        let mut node = chain_of(&mut cascade, &[1, 2, 3, 4, 5]);
        node = cascade.insert(node, 0, 6).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 4, 6, 5]));
        node = cascade.insert(node, -5, 0).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![0, 1, 2, 3, 4, 6, 5]));
        node = cascade.insert(node, -1, 99).unwrap();
        assert_eq!(cascade.to_list(node), Ok(vec![0, 1, 2, 3, 4, 99, 6, 5]));
        assert_eq!(cascade.value(node), Ok(&5));
        assert_eq!(cascade.position(node), Ok(7));
        assert_eq!(cascade.insert(node, 1, 7), Err(CascadeError::InvalidOffset(1)));
        assert_well_formed(&cascade, node);
    }

    #[test]
    fn update_in_place() {
        let mut cascade = Cascade::new();
        let node = chain_of(&mut cascade, &[1, 2, 3, 4, 5]);
        assert_eq!(cascade.update(node, 0, 6), Ok(node));
        assert_eq!(cascade.update(node, -1, 99), Ok(node));
        assert_eq!(cascade.to_list(node), Ok(vec![1, 2, 3, 99, 6]));
        assert_eq!(cascade.update(node, 1, 0), Err(CascadeError::InvalidOffset(1)));
    }

    #[test]
    fn reverse_builds_new_chain() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3]);
        let middle = cascade.jump(head, -1).unwrap();
        let reversed = cascade.reverse(middle).unwrap();
        assert_eq!(cascade.to_list(reversed), Ok(vec![3, 2, 1]));
        assert_eq!(cascade.is_head(reversed), Ok(true));
        assert_eq!(cascade.value(reversed), Ok(&1));
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 3]));
        assert_eq!(cascade.node_count(), 6);
        assert_well_formed(&cascade, reversed);
    }

    #[test]
    fn reset_keeps_tail() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3]);
        let tail = cascade.reset(head).unwrap();
        assert_eq!(cascade.to_list(tail), Ok(vec![1]));
        assert!(!cascade.contains(head));
        assert_eq!(cascade.node_count(), 1);
    }

    #[test]
    fn head_guarded_variants() {
        let mut cascade = Cascade::new();
        let head = chain_of(&mut cascade, &[1, 2, 3]);
        let below = cascade.jump(head, -1).unwrap();
        let refused = CascadeError::InvalidOperation("push_head on a non-head node");
        assert_eq!(cascade.push_head(below, 9), Err(refused));
        assert!(cascade.pop_head(below).is_err());
        assert!(cascade.swap_head(below).is_err());
        assert!(cascade.dup_head(below).is_err());
        assert!(cascade.pluck_head(below, -1).is_err());
        assert!(cascade.clone_head(below, -1).is_err());
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 3]));

        let head = cascade.push_head(head, 4).unwrap();
        let head = cascade.dup_head(head).unwrap();
        let head = cascade.swap_head(head).unwrap();
        let head = cascade.clone_head(head, -4).unwrap();
        let head = cascade.pluck_head(head, -1).unwrap();
        let head = cascade.pop_head(head).unwrap();
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 3, 4, 1]));
    }
}
