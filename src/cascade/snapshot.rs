//! Shallow save and restore of a single node.

use crate::cascade::{Cascade, NodeId};
use crate::error::{CascadeError, Result};

/// The local state of one node: its value, its two neighbours and its
/// position at the time it was saved.
///
/// A snapshot does not copy the rest of the chain. Restoring it splices a new
/// node back between the saved neighbours, which is only meaningful if the
/// chain around them has not changed since. Stale neighbours are detected
/// through their handles, and neighbours that are no longer adjacent are
/// refused; any other edit to the chain is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    position: usize,
}

impl<T> Snapshot<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Cascade<T> {
    /// Capture the local state of `node`.
    pub fn save(&self, node: NodeId) -> Result<Snapshot<T>>
    where
        T: Clone,
    {
        let current = self.node(node)?;
        Ok(Snapshot {
            value: current.value.clone(),
            prev: current.prev.map(|index| self.id_of(index)),
            next: current.next.map(|index| self.id_of(index)),
            position: current.position,
        })
    }

    /// Rebuild a node from `snapshot` and splice it back between its saved
    /// neighbours. A snapshot of a single-node chain restores as a new
    /// single-node chain.
    ///
    /// # Errors
    ///
    /// Fails with [`CascadeError::StaleNode`] if a saved neighbour has been
    /// excised, and with [`CascadeError::InvalidOperation`] if the saved
    /// neighbours are no longer adjacent. The outcome is recorded as the
    /// fault of the saved `prev` neighbour (or `next`, for a saved tail).
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let two = cascade.push(tail, 2).unwrap();
    /// let head = cascade.push(two, 3).unwrap();
    ///
    /// let snapshot = cascade.save(two).unwrap();
    /// cascade.remove(head, -1).unwrap();
    /// assert_eq!(cascade.to_list(head), Ok(vec![1, 3]));
    ///
    /// let restored = cascade.restore(snapshot).unwrap();
    /// assert_eq!(cascade.to_list(head), Ok(vec![1, 2, 3]));
    /// assert_eq!(cascade.position(restored), Ok(1));
    /// ```
    pub fn restore(&mut self, snapshot: Snapshot<T>) -> Result<NodeId> {
        // The saved neighbour stands in for the invoking node.
        let anchor = snapshot.prev.or(snapshot.next);
        let result = self.restore_inner(snapshot);
        match anchor {
            Some(anchor) => self.track(anchor, result),
            None => result,
        }
    }

    fn restore_inner(&mut self, snapshot: Snapshot<T>) -> Result<NodeId> {
        let Snapshot {
            value, prev, next, ..
        } = snapshot;
        let prev = match prev {
            Some(id) => Some(self.node(id).map(|_| id.index)?),
            None => None,
        };
        let next = match next {
            Some(id) => Some(self.node(id).map(|_| id.index)?),
            None => None,
        };
        let adjacent = match (prev, next) {
            (Some(prev), next) => self.get(prev).map_or(false, |node| node.next == next),
            (None, Some(next)) => self.get(next).map_or(false, |node| node.prev.is_none()),
            (None, None) => true,
        };
        if !adjacent {
            return Err(CascadeError::InvalidOperation(
                "snapshot neighbours are no longer adjacent",
            ));
        }
        let index = self.attach(prev, next, value);
        Ok(self.id_of(index))
    }
}

#[cfg(test)]
mod tests {
    use crate::cascade::tests::assert_well_formed;
    use crate::cascade::Cascade;
    use crate::error::CascadeError;

    #[test]
    fn save_captures_links() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let two = cascade.push(tail, 2).unwrap();
        let head = cascade.push(two, 3).unwrap();
        let snapshot = cascade.save(two).unwrap();
        assert_eq!(snapshot.value(), &2);
        assert_eq!(snapshot.prev(), Some(tail));
        assert_eq!(snapshot.next(), Some(head));
        assert_eq!(snapshot.position(), 1);
    }

    #[test]
    fn restore_at_the_ends() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let head = cascade.push(tail, 2).unwrap();

        let top = cascade.save(head).unwrap();
        let tail = cascade.pop(head).unwrap();
        let head = cascade.restore(top).unwrap();
        assert_eq!(cascade.to_list(tail), Ok(vec![1, 2]));
        assert_eq!(cascade.is_head(head), Ok(true));

        let bottom = cascade.save(tail).unwrap();
        let head = cascade.remove(head, -1).unwrap();
        let tail = cascade.restore(bottom).unwrap();
        assert_eq!(cascade.to_list(head), Ok(vec![1, 2]));
        assert_eq!(cascade.is_tail(tail), Ok(true));
        assert_well_formed(&cascade, head);
    }

    #[test]
    fn restore_singleton() {
        let mut cascade = Cascade::new();
        let only = cascade.seed(7);
        let snapshot = cascade.save(only).unwrap();
        cascade.release(only).unwrap();
        let restored = cascade.restore(snapshot).unwrap();
        assert_eq!(cascade.to_list(restored), Ok(vec![7]));
        assert_eq!(cascade.node_count(), 1);
    }

    #[test]
    fn restore_refuses_broken_neighbourhood() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let two = cascade.push(tail, 2).unwrap();
        let head = cascade.push(two, 3).unwrap();

        // The saved node is still in place, so its neighbours are not adjacent.
        let snapshot = cascade.save(two).unwrap();
        assert_eq!(
            cascade.restore(snapshot.clone()),
            Err(CascadeError::InvalidOperation(
                "snapshot neighbours are no longer adjacent"
            ))
        );

        // A neighbour was excised.
        cascade.pop(head).unwrap();
        assert_eq!(cascade.restore(snapshot), Err(CascadeError::StaleNode));
        assert_eq!(cascade.to_list(tail), Ok(vec![1, 2]));
    }

    #[cfg(feature = "fault")]
    #[test]
    fn restore_records_fault_on_neighbour() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let two = cascade.push(tail, 2).unwrap();
        cascade.push(two, 3).unwrap();

        let snapshot = cascade.save(two).unwrap();
        assert!(cascade.restore(snapshot.clone()).is_err());
        assert_eq!(
            cascade.fault(tail),
            Ok(Some(CascadeError::InvalidOperation(
                "snapshot neighbours are no longer adjacent"
            )))
        );

        let head = cascade.jump(two, 1).unwrap();
        cascade.remove(head, -1).unwrap();
        let restored = cascade.restore(snapshot).unwrap();
        assert_eq!(cascade.fault(tail), Ok(None));
        assert_eq!(cascade.fault(restored), Ok(None));
    }
}
