use crate::cascade::iterator::{Iter, Values};
use crate::cascade::snapshot::Snapshot;
use crate::cascade::{Cascade, Node, NodeId};
use crate::error::Result;
use crate::value::Condition;
use std::fmt;

/// A read-only cursor over a [`Cascade`].
///
/// A `Cursor` pairs a borrowed cascade with a node. Navigation moves the
/// cursor in place; nothing it does can edit a chain.
///
/// # Examples
///
/// ```
/// use cascader::Cascade;
///
/// let mut cascade = Cascade::new();
/// let tail = cascade.seed('A');
/// let b = cascade.push(tail, 'B').unwrap();
/// cascade.push(b, 'C').unwrap();
///
/// let mut cursor = cascade.cursor(tail).unwrap();
/// assert_eq!(cursor.current(), &'A');
///
/// cursor.head();
/// assert_eq!(cursor.current(), &'C');
/// assert_eq!(cursor.len(), 3);
///
/// assert!(cursor.jump(-2).is_ok());
/// assert_eq!(cursor.current(), &'A');
/// assert!(cursor.jump(-1).is_err());
/// assert_eq!(cursor.current(), &'A'); // A failed jump does not move
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) node: NodeId,
    pub(crate) cascade: &'a Cascade<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// A cursor over a [`Cascade`] with editing operations.
///
/// Every editing operation moves the cursor to the node the operation
/// returns and hands back `&mut Self`, so calls chain. When an operation
/// fails the cursor stays where it was.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the cascade
/// immutably while the cursor is alive.
///
/// # Examples
///
/// ```
/// use cascader::Cascade;
///
/// let mut cascade = Cascade::new();
/// let tail = cascade.seed(1);
/// let mut cursor = cascade.cursor_mut(tail).unwrap();
///
/// cursor.push(2).unwrap().push(3).unwrap().dup().unwrap();
/// assert_eq!(cursor.to_list(), Ok(vec![1, 2, 3, 3]));
///
/// cursor.pluck(-2).unwrap();
/// assert_eq!(cursor.to_list(), Ok(vec![1, 3, 3, 2]));
/// assert_eq!(cursor.current(), &2);
///
/// assert!(cursor.tail().pop().is_err());
/// assert_eq!(cursor.current(), &1);
/// ```
///
/// ```compile_fail
/// use cascader::Cascade;
///
/// let mut cascade = Cascade::new();
/// let tail = cascade.seed(1);
/// let mut cursor = cascade.cursor_mut(tail).unwrap();
/// println!("{:?}", cascade.value(tail));
/// cursor.push(2).unwrap();
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) node: NodeId,
    pub(crate) cascade: &'a mut Cascade<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn entry(&self) -> &Node<T> {
                // The cursor borrows the cascade for its whole life and only
                // ever moves to nodes an operation returned, so it cannot
                // outlive its node.
                self.cascade
                    .get(self.node.index)
                    .expect("cursor points at a live node")
            }
        }

        // A cursor always stands on a node, so `len` is never zero and there
        // is no `is_empty` to pair with it.
        #[allow(clippy::len_without_is_empty)]
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The handle of the node the cursor is at.
            pub fn node(&self) -> NodeId {
                self.node
            }

            /// The value at the cursor.
            pub fn current(&self) -> &T {
                &self.entry().value
            }

            /// The value directly below the cursor, or `None` at the tail.
            pub fn peek_prev(&self) -> Option<&T> {
                self.entry()
                    .prev
                    .and_then(|index| self.cascade.get(index))
                    .map(|node| &node.value)
            }

            /// The value directly above the cursor, or `None` at the head.
            pub fn peek_next(&self) -> Option<&T> {
                self.entry()
                    .next
                    .and_then(|index| self.cascade.get(index))
                    .map(|node| &node.value)
            }

            pub fn position(&self) -> usize {
                self.entry().position
            }

            /// The number of nodes at or below the cursor.
            pub fn len(&self) -> usize {
                self.position() + 1
            }

            pub fn is_head(&self) -> bool {
                self.entry().next.is_none()
            }

            pub fn is_tail(&self) -> bool {
                self.entry().prev.is_none()
            }

            /// See [`Cascade::fault`].
            #[cfg(feature = "fault")]
            pub fn fault(&self) -> Option<crate::error::CascadeError> {
                self.entry().fault.get()
            }

            /// See [`Cascade::at`].
            pub fn at(&self, index: isize) -> Result<&T> {
                self.cascade.at(self.node, index)
            }

            /// See [`Cascade::slice`].
            pub fn slice(
                &self,
                start: Option<isize>,
                stop: Option<isize>,
                step: isize,
            ) -> Result<Vec<&T>> {
                self.cascade.slice(self.node, start, stop, step)
            }

            /// See [`Cascade::to_list`].
            pub fn to_list(&self) -> Result<Vec<T>>
            where
                T: Clone,
            {
                self.cascade.to_list(self.node)
            }

            /// See [`Cascade::iter`].
            pub fn iter(&self) -> Result<Iter<'_, T>> {
                self.cascade.iter(self.node)
            }

            /// See [`Cascade::values`].
            pub fn values(&self) -> Result<Values<'_, T>> {
                self.cascade.values(self.node)
            }

            /// See [`Cascade::save`].
            pub fn save(&self) -> Result<Snapshot<T>>
            where
                T: Clone,
            {
                self.cascade.save(self.node)
            }

            /// Move the cursor by `offset` links. See [`Cascade::jump`].
            pub fn jump(&mut self, offset: isize) -> Result<&mut Self> {
                self.node = self.cascade.jump(self.node, offset)?;
                Ok(self)
            }

            /// Move the cursor to the node at absolute `index`. See
            /// [`Cascade::node_at`].
            pub fn seek_to(&mut self, index: isize) -> Result<&mut Self> {
                self.node = self.cascade.node_at(self.node, index)?;
                Ok(self)
            }

            /// Move the cursor to the head of its chain.
            pub fn head(&mut self) -> &mut Self {
                // Only a stale handle makes the walk fail, and the cursor's
                // node is always live (see `entry`).
                if let Ok(head) = self.cascade.head(self.node) {
                    self.node = head;
                }
                self
            }

            /// Move the cursor to the tail of its chain.
            pub fn tail(&mut self) -> &mut Self {
                // Cannot fail, as in `head`.
                if let Ok(tail) = self.cascade.tail(self.node) {
                    self.node = tail;
                }
                self
            }

            /// See [`Cascade::jump_if`].
            pub fn jump_if(&mut self, offset: isize) -> Result<&mut Self>
            where
                T: Condition,
            {
                self.node = self.cascade.jump_if(self.node, offset)?;
                Ok(self)
            }

            /// See [`Cascade::jump_if_not`].
            pub fn jump_if_not(&mut self, offset: isize) -> Result<&mut Self>
            where
                T: Condition,
            {
                self.node = self.cascade.jump_if_not(self.node, offset)?;
                Ok(self)
            }

            /// See [`Cascade::jump_if_else`].
            pub fn jump_if_else(&mut self, if_true: isize, if_false: isize) -> Result<&mut Self>
            where
                T: Condition,
            {
                self.node = self.cascade.jump_if_else(self.node, if_true, if_false)?;
                Ok(self)
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("node", &self.node)
                    .field("position", &self.position())
                    .field("current", self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(cascade: &'a Cascade<T>, node: NodeId) -> Self {
        Self { node, cascade }
    }

    /// Returns `true` if both cursors are at the same node of the same
    /// cascade.
    pub fn same_node_as(&self, other: &Self) -> bool {
        std::ptr::eq(self.cascade, other.cascade) && self.node == other.node
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(cascade: &'a mut Cascade<T>, node: NodeId) -> Self {
        Self { node, cascade }
    }
}

// Methods that do not change the linking structure of a chain.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// A mutable reference to the value at the cursor.
    pub fn current_mut(&mut self) -> &mut T {
        let index = self.node.index;
        &mut self
            .cascade
            .get_mut(index)
            .expect("cursor points at a live node")
            .value
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.cascade, self.node)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.cascade, self.node)
    }

    /// Temporarily view the cascade via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use cascader::Cascade;
    ///
    /// let mut cascade = Cascade::new();
    /// let tail = cascade.seed(1);
    /// let mut cursor = cascade.cursor_mut(tail).unwrap();
    /// cursor.push(2).unwrap();
    ///
    /// assert_eq!(cursor.view().value(tail), Ok(&1));
    /// assert_eq!(cursor.view().node_count(), 2);
    /// ```
    pub fn view(&self) -> &Cascade<T> {
        &*self.cascade
    }

    /// See [`Cascade::update`].
    pub fn update(&mut self, offset: isize, value: T) -> Result<&mut Self> {
        self.node = self.cascade.update(self.node, offset, value)?;
        Ok(self)
    }

    /// See [`Cascade::swap`].
    pub fn swap(&mut self) -> Result<&mut Self> {
        self.node = self.cascade.swap(self.node)?;
        Ok(self)
    }

    /// See [`Cascade::swap_head`].
    pub fn swap_head(&mut self) -> Result<&mut Self> {
        self.node = self.cascade.swap_head(self.node)?;
        Ok(self)
    }
}

// Methods that might change the linking structure of a chain.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// See [`Cascade::push`].
    pub fn push(&mut self, value: T) -> Result<&mut Self> {
        self.node = self.cascade.push(self.node, value)?;
        Ok(self)
    }

    /// See [`Cascade::pop`].
    pub fn pop(&mut self) -> Result<&mut Self> {
        self.node = self.cascade.pop(self.node)?;
        Ok(self)
    }

    /// Pop the node at the cursor and return its value. See
    /// [`Cascade::pop_value`].
    pub fn pop_value(&mut self) -> Result<T> {
        let (below, value) = self.cascade.pop_value(self.node)?;
        self.node = below;
        Ok(value)
    }

    /// See [`Cascade::dup`].
    pub fn dup(&mut self) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.node = self.cascade.dup(self.node)?;
        Ok(self)
    }

    /// Move the cursor to a detached copy of the value at `offset`. See
    /// [`Cascade::pick`].
    pub fn pick(&mut self, offset: isize) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.node = self.cascade.pick(self.node, offset)?;
        Ok(self)
    }

    /// See [`Cascade::pluck`].
    pub fn pluck(&mut self, offset: isize) -> Result<&mut Self> {
        self.node = self.cascade.pluck(self.node, offset)?;
        Ok(self)
    }

    /// See [`Cascade::clone_at`].
    pub fn clone_at(&mut self, offset: isize) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.node = self.cascade.clone_at(self.node, offset)?;
        Ok(self)
    }

    /// See [`Cascade::remove`].
    pub fn remove(&mut self, offset: isize) -> Result<&mut Self> {
        self.node = self.cascade.remove(self.node, offset)?;
        Ok(self)
    }

    /// See [`Cascade::insert`].
    pub fn insert(&mut self, offset: isize, value: T) -> Result<&mut Self> {
        self.node = self.cascade.insert(self.node, offset, value)?;
        Ok(self)
    }

    /// Move the cursor to the head of a reversed copy of its chain. See
    /// [`Cascade::reverse`].
    pub fn reverse(&mut self) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.node = self.cascade.reverse(self.node)?;
        Ok(self)
    }

    /// See [`Cascade::reset`].
    pub fn reset(&mut self) -> Result<&mut Self> {
        self.node = self.cascade.reset(self.node)?;
        Ok(self)
    }

    /// Move the cursor to a node rebuilt from `snapshot`. See
    /// [`Cascade::restore`].
    pub fn restore(&mut self, snapshot: Snapshot<T>) -> Result<&mut Self> {
        self.node = self.cascade.restore(snapshot)?;
        Ok(self)
    }

    /// See [`Cascade::push_head`].
    pub fn push_head(&mut self, value: T) -> Result<&mut Self> {
        self.node = self.cascade.push_head(self.node, value)?;
        Ok(self)
    }

    /// See [`Cascade::pop_head`].
    pub fn pop_head(&mut self) -> Result<&mut Self> {
        self.node = self.cascade.pop_head(self.node)?;
        Ok(self)
    }

    /// See [`Cascade::dup_head`].
    pub fn dup_head(&mut self) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.node = self.cascade.dup_head(self.node)?;
        Ok(self)
    }

    /// See [`Cascade::pluck_head`].
    pub fn pluck_head(&mut self, offset: isize) -> Result<&mut Self> {
        self.node = self.cascade.pluck_head(self.node, offset)?;
        Ok(self)
    }

    /// See [`Cascade::clone_head`].
    pub fn clone_head(&mut self, offset: isize) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.node = self.cascade.clone_head(self.node, offset)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::cascade::Cascade;
    use crate::error::CascadeError;
    use crate::value::Value;

    #[test]
    fn cursor_mut_threads_operations() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let mut cursor = cascade.cursor_mut(tail).unwrap();
        cursor
            .push(2)
            .and_then(|c| c.push(3))
            .and_then(|c| c.push(4))
            .and_then(|c| c.push(5))
            .unwrap();
        assert_eq!(cursor.len(), 5);

        cursor.insert(0, 6).unwrap();
        assert_eq!(cursor.to_list(), Ok(vec![1, 2, 3, 4, 6, 5]));
        assert_eq!(cursor.current(), &5);

        cursor.remove(-1).unwrap().update(-1, 40).unwrap();
        assert_eq!(cursor.to_list(), Ok(vec![1, 2, 3, 40, 5]));

        assert_eq!(cursor.pop_value(), Ok(5));
        assert_eq!(cursor.current(), &40);
        assert!(cursor.is_head());
        assert_eq!(cursor.peek_prev(), Some(&3));
        assert_eq!(cursor.peek_next(), None);
    }

    #[test]
    fn cursor_mut_failures_do_not_move() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let mut cursor = cascade.cursor_mut(tail).unwrap();
        cursor.push(2).unwrap();
        let before = cursor.node();

        assert_eq!(cursor.jump(1).err(), Some(CascadeError::InvalidOffset(1)));
        assert_eq!(cursor.pluck(-2).err(), Some(CascadeError::InvalidOffset(-2)));
        assert_eq!(cursor.node(), before);
        #[cfg(feature = "fault")]
        assert_eq!(cursor.fault(), Some(CascadeError::InvalidOffset(-2)));

        cursor.tail();
        assert_eq!(cursor.pop().err(), Some(CascadeError::EmptyStack));
        assert_eq!(cursor.swap().err(), Some(CascadeError::InvalidOperation("no more values to swap")));
        assert_eq!(cursor.to_list(), Ok(vec![1, 2]));
    }

    #[test]
    fn cursor_mut_pick_and_reverse_leave_the_chain() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed("first");
        let mut cursor = cascade.cursor_mut(tail).unwrap();
        cursor.push("second").unwrap().push("third").unwrap();
        let head = cursor.node();

        cursor.reverse().unwrap();
        assert_eq!(cursor.to_list(), Ok(vec!["third", "second", "first"]));
        assert_eq!(cursor.current(), &"first");

        cursor.pick(-2).unwrap();
        assert_eq!(cursor.to_list(), Ok(vec!["third"]));
        assert!(cursor.is_head() && cursor.is_tail());
        assert_eq!(
            cursor.view().to_list(head),
            Ok(vec!["first", "second", "third"])
        );
    }

    #[test]
    fn cursor_mut_as_tape() {
        // A tiny countdown program: the flag below the counter decides
        // whether to keep decrementing.
        let mut cascade = Cascade::new();
        let tail = cascade.seed(Value::Int(3));
        let mut cursor = cascade.cursor_mut(tail).unwrap();
        let mut steps = 0;
        loop {
            let count = match cursor.current() {
                Value::Int(count) => *count,
                _ => unreachable!(),
            };
            cursor.push(Value::Bool(count > 0)).unwrap();
            let at_flag = cursor.node();
            cursor.jump_if_else(-1, 0).unwrap();
            if cursor.node() == at_flag {
                break;
            }
            *cursor.current_mut() = Value::Int(count - 1);
            cursor.head().pop().unwrap();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(
            cursor.to_list(),
            Ok(vec![Value::Int(0), Value::Bool(false)])
        );
    }

    #[test]
    fn cursor_views() {
        let mut cascade = Cascade::new();
        let tail = cascade.seed(1);
        let head = cascade.push(tail, 2).unwrap();

        let a = cascade.cursor(head).unwrap();
        let mut b = a;
        b.jump(-1).unwrap();
        assert!(!a.same_node_as(&b));
        b.head();
        assert!(a.same_node_as(&b));
        assert_eq!(a.at(0), Ok(&1));
        assert_eq!(a.slice(None, None, -1), Ok(vec![&2, &1]));
        assert_eq!(format!("{:?}", b.tail()), format!("Cursor {{ node: {:?}, position: 0, current: 1 }}", tail));

        let mut cursor = cascade.cursor_mut(tail).unwrap();
        cursor.seek_to(-1).unwrap();
        assert_eq!(cursor.as_cursor().current(), &1);
        let snapshot = cursor.save().unwrap();
        assert_eq!(snapshot.value(), &1);
        let frozen = cursor.into_cursor();
        assert_eq!(frozen.values().unwrap().collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(frozen.iter().unwrap().count(), 2);
    }
}
