use crate::cascade::{Cascade, NodeId};
use crate::error::Result;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over node handles, from a starting node up to the head of its
/// chain.
///
/// It borrows the cascade immutably, so the chain cannot be edited while the
/// iterator is alive. To walk again, call [`Cascade::iter`] again from the
/// same starting node.
///
/// # Examples
///
/// ```compile_fail
/// use cascader::Cascade;
///
/// let mut cascade = Cascade::new();
/// let tail = cascade.seed(1);
/// let mut iter = cascade.iter(tail).unwrap();
///
/// // Won't compile, because the cascade is already borrowed immutably.
/// cascade.push(tail, 2).unwrap();
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    cascade: &'a Cascade<T>,
    next: Option<usize>,
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            cascade: self.cascade,
            next: self.next,
        }
    }
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(cascade: &'a Cascade<T>, start: usize) -> Self {
        Self {
            cascade,
            next: Some(start),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = self.cascade.get(index).and_then(|node| node.next);
        Some(self.cascade.id_of(index))
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T: 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("next", &self.next).finish()
    }
}

/// An iterator over values, from a starting node up to the head of its chain.
pub struct Values<'a, T: 'a> {
    nodes: Iter<'a, T>,
}

impl<'a, T: 'a> Clone for Values<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<'a, T: 'a> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cascade = self.nodes.cascade;
        let index = self.nodes.next?;
        self.nodes.next();
        cascade.get(index).map(|node| &node.value)
    }
}

impl<'a, T: 'a> FusedIterator for Values<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Values<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<T> Cascade<T> {
    /// Provides an iterator over the node handles from `node` up to the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let head = cascade.push(tail, 2).unwrap();
    ///
    /// let nodes: Vec<_> = cascade.iter(tail).unwrap().collect();
    /// assert_eq!(nodes, vec![tail, head]);
    /// assert_eq!(cascade.iter(head).unwrap().count(), 1);
    /// ```
    pub fn iter(&self, node: NodeId) -> Result<Iter<'_, T>> {
        self.node(node)?;
        Ok(Iter::new(self, node.index))
    }

    /// Provides an iterator over the values from `node` up to the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let two = cascade.push(tail, 2).unwrap();
    /// cascade.push(two, 3).unwrap();
    ///
    /// let values: Vec<_> = cascade.values(two).unwrap().collect();
    /// assert_eq!(values, vec![&2, &3]);
    /// ```
    pub fn values(&self, node: NodeId) -> Result<Values<'_, T>> {
        self.iter(node).map(|nodes| Values { nodes })
    }

    /// Copy out every value of `node`'s chain, tail first, wherever `node`
    /// sits in it.
    pub fn to_list(&self, node: NodeId) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let tail = self.tail_index(node)?;
        Ok(Values {
            nodes: Iter::new(self, tail),
        }
        .cloned()
        .collect())
    }
}
