use tracing::debug;

use crate::buffer::{Buffer, BufferId};

/// Ordered buffers plus the index of the current one.
/// The list is never empty and `current < buffers.len()` always holds.
#[derive(Debug, Clone)]
pub struct BufferList {
    buffers: Vec<Buffer>,
    current: usize,
    next_id: u64,
}

impl Default for BufferList {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferList {
    /// Starts with a single empty buffer.
    pub fn new() -> Self {
        Self {
            buffers: vec![Buffer::new(BufferId(0))],
            current: 0,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Always false, kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Buffer {
        assert!(
            self.current < self.buffers.len(),
            "Current buffer index is out of bounds: {} >= {}",
            self.current,
            self.buffers.len()
        );

        &self.buffers[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Buffer {
        assert!(
            self.current < self.buffers.len(),
            "Current buffer index is out of bounds: {} >= {}",
            self.current,
            self.buffers.len()
        );

        &mut self.buffers[self.current]
    }

    pub fn get(&self, index: usize) -> Option<&Buffer> {
        self.buffers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buffer> {
        self.buffers.iter()
    }

    pub fn find_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
        self.buffers.iter_mut().find(|buffer| buffer.id == id)
    }

    /// Inserts an empty buffer right after the current one and returns its index.
    /// The current index is left alone.
    pub fn insert_after_current(&mut self) -> usize {
        let id = BufferId(self.next_id);
        self.next_id += 1;

        let index = self.current + 1;
        self.buffers.insert(index, Buffer::new(id));
        debug!(?id, index, len = self.buffers.len(), "inserted buffer");

        index
    }

    /// Moves the current index by `delta`.
    /// Stepping below zero lands on the last buffer, stepping at or past the
    /// end lands on the first one.
    pub fn step(&mut self, delta: isize) -> usize {
        let last = self.buffers.len() - 1;
        let target = isize::try_from(self.current)
            .ok()
            .and_then(|current| current.checked_add(delta));

        self.current = match target {
            Some(target) if target < 0 => last,
            Some(target) if target as usize <= last => target as usize,
            Some(_) => 0,
            None if delta < 0 => last,
            None => 0,
        };

        self.current
    }

    /// Makes `index` current. Returns false, changing nothing, when `index`
    /// is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buffers.len() {
            return false;
        }

        self.current = index;
        true
    }

    /// Removes the current buffer after stepping back to the previous one
    /// (wrapping to the last). The last remaining buffer is cleared in place
    /// instead, in which case `None` is returned.
    pub fn remove_current(&mut self) -> Option<Buffer> {
        if self.buffers.len() == 1 {
            self.buffers[0].clear();
            debug!("cleared last buffer in place");
            return None;
        }

        let removed_at = self.current;
        let target = self.step(-1);
        let removed = self.buffers.remove(removed_at);

        if target > removed_at {
            self.current = target - 1;
        }
        debug!(id = ?removed.id, removed_at, current = self.current, "removed buffer");

        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list_with(len: usize) -> BufferList {
        let mut list = BufferList::new();
        for _ in 1..len {
            list.insert_after_current();
            list.step(1);
        }
        list
    }

    fn ids(list: &BufferList) -> Vec<u64> {
        list.iter().map(|buffer| buffer.id.0).collect()
    }

    #[test]
    fn insert_goes_after_current() {
        let mut list = list_with(3);
        list.select(0);

        let index = list.insert_after_current();

        assert_eq!(index, 1);
        assert_eq!(list.index(), 0);
        assert_eq!(ids(&list), vec![0, 3, 1, 2]);
    }

    #[test]
    fn step_wraps_at_both_ends() {
        let mut list = list_with(3);
        list.select(0);
        assert_eq!(list.step(-1), 2);
        assert_eq!(list.step(1), 0);
        assert_eq!(list.step(5), 0);
        list.select(1);
        assert_eq!(list.step(-4), 2);
    }

    #[test]
    fn step_by_extreme_deltas_still_wraps() {
        let mut list = list_with(3);
        list.select(2);
        assert_eq!(list.step(isize::MAX), 0);
        assert_eq!(list.step(isize::MIN), 2);
        list.select(1);
        assert_eq!(list.step(isize::MIN), 2);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut list = list_with(2);
        list.select(1);

        assert!(!list.select(2));
        assert!(!list.select(usize::MAX));
        assert_eq!(list.index(), 1);
    }

    #[test]
    fn remove_last_buffer_clears_it() {
        let mut list = BufferList::new();
        list.current_mut().set_text("keep me?");
        list.current_mut().modified = true;

        assert!(list.remove_current().is_none());

        assert_eq!(list.len(), 1);
        assert_eq!(list.current().text(), "");
        assert!(!list.current().modified);
    }

    #[test]
    fn remove_steps_back_to_previous() {
        let mut list = list_with(3);
        list.select(2);

        let removed = list.remove_current().map(|buffer| buffer.id.0);

        assert_eq!(removed, Some(2));
        assert_eq!(ids(&list), vec![0, 1]);
        assert_eq!(list.current().id, BufferId(1));
    }

    #[test]
    fn remove_first_wraps_to_last() {
        let mut list = list_with(3);
        list.select(0);

        let removed = list.remove_current().map(|buffer| buffer.id.0);

        assert_eq!(removed, Some(0));
        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list.index(), 1);
        assert_eq!(list.current().id, BufferId(2));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut list = list_with(2);
        list.remove_current();
        list.insert_after_current();

        assert_eq!(ids(&list), vec![0, 2]);
    }

    proptest! {
        #[test]
        fn stepping_forward_len_times_is_a_cycle(len in 1usize..12, start in 0usize..12) {
            let mut list = list_with(len);
            let start = start % len;
            list.select(start);

            for _ in 0..len {
                list.step(1);
            }

            prop_assert_eq!(list.index(), start);
        }

        #[test]
        fn index_stays_in_bounds(len in 1usize..8, ops in proptest::collection::vec(0u8..4, 0..40)) {
            let mut list = list_with(len);

            for op in ops {
                match op {
                    0 => { list.insert_after_current(); }
                    1 => { list.remove_current(); }
                    2 => { list.step(1); }
                    _ => { list.step(-1); }
                }

                prop_assert!(!list.is_empty());
                prop_assert!(list.index() < list.len());
            }
        }
    }
}
