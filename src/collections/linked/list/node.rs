/// A link in the chain: either the next owned node or the end of the list.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Nodes are owned through Box rather than raw pointers. A singly-linked chain has exactly
// one owner per node, so the whole structure works in safe code and values can be moved out of
// the heap by dereferencing the Box.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn single(value: T) -> Link<T> {
        Some(Box::new(Node { value, next: None }))
    }
}

/// Walks to the final (always-`None`) link of a chain. The returned link is where an append
/// should land.
pub(crate) fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}
