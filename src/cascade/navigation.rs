//! Offset and index resolution.
//!
//! Everything here resolves by walking links from the cursor; there is no
//! index acceleration. All resolution happens before any splice, so a failed
//! lookup never leaves a chain half-edited.

use crate::cascade::{Cascade, NodeId};
use crate::error::{CascadeError, Result};
use crate::value::Condition;

impl<T> Cascade<T> {
    /// Resolve a signed offset from `node` to a slot index. Positive offsets
    /// walk up, negative ones walk down; the whole walk must stay inside the
    /// chain.
    pub(crate) fn resolve(&self, node: NodeId, offset: isize) -> Result<usize> {
        let mut current = self.node(node)?;
        let mut index = node.index;
        for _ in 0..offset.unsigned_abs() {
            let step = if offset > 0 { current.next } else { current.prev };
            index = step.ok_or(CascadeError::InvalidOffset(offset))?;
            current = self.get(index).ok_or(CascadeError::StaleNode)?;
        }
        Ok(index)
    }

    /// Resolve an absolute index, with negative indices counting back from
    /// the length seen by `node`.
    pub(crate) fn resolve_index(&self, node: NodeId, index: isize) -> Result<usize> {
        let position = self.node(node)?.position as isize;
        let len = position + 1;
        let target = if index < 0 { len + index } else { index };
        if target < 0 || target >= len {
            return Err(CascadeError::InvalidOffset(index));
        }
        self.resolve(node, target - position)
    }

    /// Slot indices from the tail of `node`'s chain up to and including
    /// `node` itself.
    pub(crate) fn chain_below(&self, node: NodeId) -> Result<Vec<usize>> {
        let mut current = self.node(node)?;
        let mut chain = Vec::with_capacity(current.position + 1);
        chain.push(node.index);
        while let Some(prev) = current.prev {
            current = self.get(prev).ok_or(CascadeError::StaleNode)?;
            chain.push(prev);
        }
        chain.reverse();
        Ok(chain)
    }

    /// Move `offset` links away from `node`: up for positive offsets, down for
    /// negative ones. A zero offset returns `node` itself.
    ///
    /// The jump is all-or-nothing: if the walk would run past the head or the
    /// tail it fails with [`CascadeError::InvalidOffset`] and nothing moves.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(|`offset`|) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::{Cascade, CascadeError};
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let two = cascade.push(tail, 2).unwrap();
    /// let three = cascade.push(two, 3).unwrap();
    ///
    /// assert_eq!(cascade.jump(three, -2), Ok(tail));
    /// assert_eq!(cascade.jump(tail, 1), Ok(two));
    /// assert_eq!(cascade.jump(tail, -1), Err(CascadeError::InvalidOffset(-1)));
    /// ```
    pub fn jump(&self, node: NodeId, offset: isize) -> Result<NodeId> {
        let result = self.resolve(node, offset).map(|index| self.id_of(index));
        self.track(node, result)
    }

    /// Returns the node at absolute `index` as seen from `node`.
    ///
    /// Only the nodes at or below `node` are addressable, matching
    /// [`Cascade::len`]. Negative indices count back from that length, so
    /// `-1` is `node` itself and `-len` is the tail.
    pub fn node_at(&self, node: NodeId, index: isize) -> Result<NodeId> {
        let result = self
            .resolve_index(node, index)
            .map(|index| self.id_of(index));
        self.track(node, result)
    }

    /// Returns the value at absolute `index` as seen from `node`. See
    /// [`Cascade::node_at`] for the addressing rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::{Cascade, CascadeError};
    ///
    /// let mut cascade = Cascade::new();
    /// let mut node = cascade.seed('a');
    /// node = cascade.push(node, 'b').unwrap();
    /// node = cascade.push(node, 'c').unwrap();
    ///
    /// assert_eq!(cascade.at(node, 0), Ok(&'a'));
    /// assert_eq!(cascade.at(node, -1), Ok(&'c'));
    /// assert_eq!(cascade.at(node, -3), Ok(&'a'));
    /// assert_eq!(cascade.at(node, 3), Err(CascadeError::InvalidOffset(3)));
    /// ```
    pub fn at(&self, node: NodeId, index: isize) -> Result<&T> {
        let result = self.resolve_index(node, index);
        self.track(node, result)
            .and_then(|index| self.get(index).ok_or(CascadeError::StaleNode))
            .map(|node| &node.value)
    }

    /// Returns the values selected by `start..stop` with the given `step`,
    /// over the nodes at or below `node`.
    ///
    /// The bounds follow the usual slice conventions: `None` selects the
    /// natural end for the direction of `step`, negative bounds count back
    /// from the length, and out-of-range bounds are clamped. An empty
    /// selection is not an error. A negative `step` walks from high
    /// positions to low ones, and a zero `step` fails with
    /// [`CascadeError::InvalidOperation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let mut node = cascade.seed(0);
    /// for i in 1..6 {
    ///     node = cascade.push(node, i).unwrap();
    /// }
    ///
    /// assert_eq!(cascade.slice(node, Some(1), Some(4), 1), Ok(vec![&1, &2, &3]));
    /// assert_eq!(cascade.slice(node, None, None, 2), Ok(vec![&0, &2, &4]));
    /// assert_eq!(cascade.slice(node, Some(-2), None, 1), Ok(vec![&4, &5]));
    /// assert_eq!(cascade.slice(node, None, None, -2), Ok(vec![&5, &3, &1]));
    /// assert_eq!(cascade.slice(node, Some(4), Some(2), 1), Ok(vec![]));
    /// ```
    pub fn slice(
        &self,
        node: NodeId,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<Vec<&T>> {
        let result = self.chain_below(node).and_then(|chain| {
            let selected = slice_indices(chain.len(), start, stop, step)?;
            selected
                .into_iter()
                .map(|i| {
                    self.get(chain[i])
                        .map(|node| &node.value)
                        .ok_or(CascadeError::StaleNode)
                })
                .collect()
        });
        self.track(node, result)
    }

    /// Jump by `offset` if the value at `node` is exactly `true`; otherwise
    /// stay at `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::{Cascade, Value};
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(Value::from("start"));
    /// let flag = cascade.push(tail, Value::Bool(true)).unwrap();
    /// assert_eq!(cascade.jump_if(flag, -1), Ok(tail));
    ///
    /// cascade.set_value(flag, Value::Int(1)).unwrap();
    /// assert_eq!(cascade.jump_if(flag, -1), Ok(flag));
    /// ```
    pub fn jump_if(&self, node: NodeId, offset: isize) -> Result<NodeId>
    where
        T: Condition,
    {
        match self.node(node).map(|current| current.value.truth()) {
            Ok(Some(true)) => self.jump(node, offset),
            _ => self.jump(node, 0),
        }
    }

    /// Jump by `offset` if the value at `node` is exactly `false`; otherwise
    /// stay at `node`.
    pub fn jump_if_not(&self, node: NodeId, offset: isize) -> Result<NodeId>
    where
        T: Condition,
    {
        match self.node(node).map(|current| current.value.truth()) {
            Ok(Some(false)) => self.jump(node, offset),
            _ => self.jump(node, 0),
        }
    }

    /// Jump by `if_true` if the value at `node` is exactly `true`, and by
    /// `if_false` for any other value.
    pub fn jump_if_else(&self, node: NodeId, if_true: isize, if_false: isize) -> Result<NodeId>
    where
        T: Condition,
    {
        match self.node(node).map(|current| current.value.truth()) {
            Ok(Some(true)) => self.jump(node, if_true),
            _ => self.jump(node, if_false),
        }
    }
}

/// Positions selected by `start..stop` stepping by `step` over a sequence of
/// `len` items.
pub(crate) fn slice_indices(
    len: usize,
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
) -> Result<Vec<usize>> {
    if step == 0 {
        return Err(CascadeError::InvalidOperation("slice step cannot be zero"));
    }
    let len = len as isize;
    let mut selected = Vec::new();
    if step > 0 {
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(0)
            } else {
                bound.min(len)
            }
        };
        let start = start.map_or(0, clamp);
        let stop = stop.map_or(len, clamp);
        let mut i = start;
        while i < stop {
            selected.push(i as usize);
            i += step;
        }
    } else {
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(-1)
            } else {
                bound.min(len - 1)
            }
        };
        let start = start.map_or(len - 1, clamp);
        let stop = stop.map_or(-1, clamp);
        let mut i = start;
        while i > stop {
            selected.push(i as usize);
            i += step;
        }
    }
    Ok(selected)
}
