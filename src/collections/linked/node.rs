use std::{fmt, iter, ptr::NonNull};

/// Owning link. The node behind it came from [`Node::alloc`] and belongs to the holder of the link.
///
/// Nodes are only ever reached through raw pointers, so a non-owning back-pointer
/// (a queue's tail) stays valid while the owning links around it are moved.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn alloc(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

/// Detaches the head node of `link` and returns its value, `link` takes over the successor.
///
/// # Safety
///
/// `link` must own its chain: every reachable node came from [`Node::alloc`] and no
/// other owning link reaches it.
#[inline]
pub(crate) unsafe fn pop_link<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    // SAFETY: the caller guarantees `node` is an owned allocation from `Node::alloc`.
    let node = unsafe { Box::from_raw(node.as_ptr()) };
    let Node { value, next } = *node;
    *link = next;
    Some(value)
}

/// Frees the chain behind `link` one node at a time and returns how many nodes were released.
///
/// # Safety
///
/// Same as [`pop_link`].
pub(crate) unsafe fn release_chain<T>(link: &mut Link<T>) -> usize {
    let mut released = 0;
    // SAFETY: forwarded from the caller.
    while unsafe { pop_link(link) }.is_some() {
        released += 1;
    }
    released
}

/// # Safety
///
/// `link` must own its chain, and the chain must not be mutated while the returned
/// iterator or its references are alive.
unsafe fn nodes<T>(link: &Link<T>) -> impl Iterator<Item = &Node<T>> {
    // SAFETY: every node reachable from an owning link is a live allocation.
    let first = link.map(|node| unsafe { &*node.as_ptr() });
    iter::successors(first, |node| node.next.map(|next| unsafe { &*next.as_ptr() }))
}

/// # Safety
///
/// Same as [`nodes`].
#[inline]
pub(crate) unsafe fn value_ref<T>(link: &Link<T>) -> Option<&T> {
    // SAFETY: the head is live and `&Link` keeps the owner borrowed.
    link.map(|node| unsafe { &(*node.as_ptr()).value })
}

/// # Safety
///
/// Same as [`nodes`].
#[inline]
pub(crate) unsafe fn value_mut<T>(link: &mut Link<T>) -> Option<&mut T> {
    // SAFETY: the head is live and `&mut Link` keeps the owner exclusively borrowed.
    link.map(|node| unsafe { &mut (*node.as_ptr()).value })
}

/// Number of nodes reachable from `link`.
///
/// # Safety
///
/// Same as [`nodes`].
pub(crate) unsafe fn chain_len<T>(link: &Link<T>) -> usize {
    // SAFETY: forwarded from the caller.
    unsafe { nodes(link) }.count()
}

/// `Debug` view over a chain, head first.
pub(crate) struct ChainDebug<'a, T>(&'a Link<T>);

impl<'a, T> ChainDebug<'a, T> {
    /// # Safety
    ///
    /// Same as [`nodes`].
    #[inline]
    pub(crate) unsafe fn new(link: &'a Link<T>) -> Self {
        Self(link)
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: guaranteed by `ChainDebug::new`.
        let values = unsafe { nodes(self.0) }.map(|node| &node.value);
        f.debug_list().entries(values).finish()
    }
}
