use std::collections::{LinkedList, VecDeque};

/// The first-in-first-out queue of vertices that [`PreOrderBfs`](crate::algo::traversal::PreOrderBfs) waits on.
pub trait BfsQueue<T>: Default {
    /// Appends a discovered element.
    fn enqueue(&mut self, element: T);
    /// Removes the element that was enqueued first.
    fn dequeue(&mut self) -> Option<T>;
    /// Forgets all waiting elements, keeping the allocation where possible.
    fn clear(&mut self);
}

macro_rules! impl_bfs_queue {
    ($queue:ident) => {
        impl<T> BfsQueue<T> for $queue<T> {
            #[inline]
            fn enqueue(&mut self, element: T) {
                self.push_back(element)
            }

            #[inline]
            fn dequeue(&mut self) -> Option<T> {
                self.pop_front()
            }

            fn clear(&mut self) {
                $queue::clear(self)
            }
        }
    };
}

impl_bfs_queue!(VecDeque);
impl_bfs_queue!(LinkedList);
