use crate::traversal::Traversable;
use super::NodeRef;

impl<'a, T> Traversable for NodeRef<'a, T> {
    type Key = T;

    #[inline(always)]
    fn key(&self) -> &T {
        self.value()
    }
    #[inline(always)]
    fn left_child(&self) -> Option<Self> {
        NodeRef::left_child(self)
    }
    #[inline(always)]
    fn right_child(&self) -> Option<Self> {
        NodeRef::right_child(self)
    }
}
