use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an ordered collection of sortable items.
///
/// A pane hands the same `SortList` to the [`super::SortArea`] and to its own
/// rendering code; the drag session stores clones of these handles. Two
/// handles are "the same list" only when they share the underlying
/// allocation, so a same-pane reorder is recognized by pointer identity,
/// never by comparing contents.
///
/// Single-threaded by design: all session mutation happens inside input
/// handlers on one UI thread, so the handle is `Rc`-based and not `Send`.
pub struct SortList<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Default for SortList<T> {
    fn default() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> Clone for SortList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SortList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

impl<T> SortList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// True iff both handles refer to the same underlying collection.
    pub fn same_list(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Remove and return the item at `index`, shifting later items down.
    ///
    /// Out-of-range indices are reported and ignored rather than panicking:
    /// the drag machinery treats a vanished slot as a recoverable anomaly.
    pub fn remove_at(&self, index: usize) -> Option<T> {
        let mut items = self.items.borrow_mut();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            log::warn!(
                "remove_at out of range: index={index} len={}",
                items.len()
            );
            None
        }
    }

    /// Insert `item` at `index`, clamping to the end of the list.
    pub fn insert_at(&self, index: usize, item: T) {
        let mut items = self.items.borrow_mut();
        let clamped = index.min(items.len());
        if clamped != index {
            log::warn!(
                "insert_at clamped: index={index} len={}",
                items.len()
            );
        }
        items.insert(clamped, item);
    }

    /// Run `f` with read access to the items.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }
}

impl<T: Clone> SortList<T> {
    pub fn get_cloned(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    /// Copy of the current contents, for assertions and snapshots.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::SortList;

    #[test]
    fn identity_is_by_allocation_not_contents() {
        let a = SortList::from_vec(vec![1, 2, 3]);
        let b = SortList::from_vec(vec![1, 2, 3]);
        let a2 = a.clone();

        assert!(a.same_list(&a2));
        assert!(!a.same_list(&b));
    }

    #[test]
    fn remove_then_insert_moves_within_one_list() {
        let list = SortList::from_vec(vec!["a", "b", "c", "d"]);
        let item = list.remove_at(0).expect("in range");
        list.insert_at(3, item);
        assert_eq!(list.snapshot(), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn out_of_range_remove_is_ignored() {
        let list = SortList::from_vec(vec![1]);
        assert!(list.remove_at(5).is_none());
        assert_eq!(list.snapshot(), vec![1]);
    }

    #[test]
    fn insert_past_end_clamps_to_append() {
        let list = SortList::from_vec(vec![1, 2]);
        list.insert_at(99, 3);
        assert_eq!(list.snapshot(), vec![1, 2, 3]);
    }
}
