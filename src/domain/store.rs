use crate::domain::todo_list::{validate_title, NewList, TodoList};
use crate::error::{Result, TodoError};
use std::fmt;

/// Handle returned by [`ListStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[TodoList])>;

/// Authoritative in-memory sequence of todo lists.
///
/// Lists are kept in insertion order. Whenever the number of lists changes
/// the priorities are renumbered to `1..=N` in that order, and every
/// subscriber is called with the new state.
#[derive(Default)]
pub struct ListStore {
    lists: Vec<TodoList>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an initial collection.
    ///
    /// Seed priorities are kept as supplied; titles must be non-empty and unique.
    pub fn from_seed(seed: Vec<TodoList>) -> Result<Self> {
        for (idx, list) in seed.iter().enumerate() {
            validate_title(&list.title)?;
            if seed[..idx].iter().any(|other| other.title == list.title) {
                return Err(TodoError::DuplicateTitle(list.title.clone()));
            }
        }

        tracing::debug!(count = seed.len(), "seeded list store");
        Ok(Self {
            lists: seed,
            ..Self::default()
        })
    }

    /// Lists in insertion order
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.lists.iter().any(|list| list.title == title)
    }

    /// Finds a list by its exact title
    pub fn find_by_title(&self, title: &str) -> Result<&TodoList> {
        self.lists
            .iter()
            .find(|list| list.title == title)
            .ok_or_else(|| TodoError::ListNotFound(title.to_string()))
    }

    /// Appends a list, renumbers all priorities and notifies subscribers
    pub fn add_list(&mut self, new_list: NewList) -> Result<()> {
        if let Err(e) = self.check_insertable(&new_list.title) {
            tracing::warn!(title = %new_list.title, error = %e, "rejected new list");
            return Err(e);
        }

        tracing::debug!(title = %new_list.title, "adding list");
        self.lists.push(new_list.into());
        self.renumber();
        self.notify();
        Ok(())
    }

    /// Assigns `priority = position + 1` in insertion order
    pub fn renumber(&mut self) {
        for (idx, list) in self.lists.iter_mut().enumerate() {
            list.priority = idx as u32 + 1;
        }
        tracing::debug!(count = self.lists.len(), "renumbered list priorities");
    }

    /// Registers a listener that runs after every mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[TodoList]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn check_insertable(&self, title: &str) -> Result<()> {
        validate_title(title)?;
        if self.contains_title(title) {
            return Err(TodoError::DuplicateTitle(title.to_string()));
        }
        Ok(())
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.lists);
        }
    }
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("lists", &self.lists)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seeded(titles: &[(&str, u32)]) -> ListStore {
        let seed = titles
            .iter()
            .map(|(title, priority)| TodoList::new(*title, *priority))
            .collect();
        ListStore::from_seed(seed).unwrap()
    }

    fn priorities(store: &ListStore) -> Vec<(String, u32)> {
        store
            .lists()
            .iter()
            .map(|l| (l.title.clone(), l.priority))
            .collect()
    }

    #[test]
    fn test_store_creation() {
        let store = ListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_list_renumbers_sequentially() {
        let mut store = seeded(&[("A", 1), ("B", 2)]);

        store.add_list(NewList::new("C")).unwrap();

        assert_eq!(
            priorities(&store),
            vec![
                ("A".to_string(), 1),
                ("B".to_string(), 2),
                ("C".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_add_list_appends_to_end() {
        let mut store = seeded(&[("A", 1), ("B", 2)]);
        let before = store.len();

        store.add_list(NewList::new("Groceries")).unwrap();

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.lists().last().unwrap().title, "Groceries");
    }

    #[test]
    fn test_provisional_priority_is_overwritten() {
        let mut store = seeded(&[("A", 1)]);

        store
            .add_list(NewList {
                title: "B".to_string(),
                priority: 4,
            })
            .unwrap();

        assert_eq!(store.find_by_title("B").unwrap().priority, 2);
    }

    #[test]
    fn test_renumber_follows_insertion_order_not_prior_priority() {
        let mut store = seeded(&[("B", 2), ("A", 1)]);

        store.add_list(NewList::new("C")).unwrap();

        assert_eq!(
            priorities(&store),
            vec![
                ("B".to_string(), 1),
                ("A".to_string(), 2),
                ("C".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let mut store = seeded(&[("A", 7), ("B", 3), ("C", 3)]);

        store.renumber();
        let once = priorities(&store);
        store.renumber();

        assert_eq!(priorities(&store), once);
        assert_eq!(
            once.iter().map(|(_, p)| *p).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_priorities_contiguous_after_many_adds() {
        let mut store = ListStore::new();
        for i in 0..10 {
            store.add_list(NewList::new(format!("List {}", i))).unwrap();
        }

        let mut seen: Vec<u32> = store.lists().iter().map(|l| l.priority).collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_add_list_rejects_duplicate_title() {
        let mut store = seeded(&[("Shopping List", 1)]);

        let err = store.add_list(NewList::new("Shopping List")).unwrap_err();

        assert!(matches!(err, TodoError::DuplicateTitle(t) if t == "Shopping List"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_list_rejects_empty_title() {
        let mut store = ListStore::new();

        assert!(matches!(
            store.add_list(NewList::new("  ")),
            Err(TodoError::EmptyTitle)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_seed_rejects_duplicates() {
        let seed = vec![TodoList::new("A", 1), TodoList::new("A", 2)];
        assert!(matches!(
            ListStore::from_seed(seed),
            Err(TodoError::DuplicateTitle(_))
        ));
    }

    #[test]
    fn test_from_seed_keeps_supplied_priorities() {
        let store = seeded(&[("B", 2), ("A", 1)]);
        assert_eq!(
            priorities(&store),
            vec![("B".to_string(), 2), ("A".to_string(), 1)]
        );
    }

    #[test]
    fn test_find_by_title_not_found() {
        let store = seeded(&[("A", 1)]);

        assert_eq!(store.find_by_title("A").unwrap().priority, 1);
        assert!(matches!(
            store.find_by_title("Missing"),
            Err(TodoError::ListNotFound(t)) if t == "Missing"
        ));
    }

    #[test]
    fn test_subscribers_see_renumbered_state() {
        let mut store = seeded(&[("A", 1)]);
        let seen: Rc<RefCell<Vec<Vec<u32>>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |lists| {
            sink.borrow_mut()
                .push(lists.iter().map(|l| l.priority).collect());
        });

        store.add_list(NewList::new("B")).unwrap();
        store.add_list(NewList::new("C")).unwrap();

        assert_eq!(*seen.borrow(), vec![vec![1, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn test_rejected_add_does_not_notify() {
        let mut store = seeded(&[("A", 1)]);
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.add_list(NewList::new("A")).is_err());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = ListStore::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.add_list(NewList::new("A")).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_list(NewList::new("B")).unwrap();

        assert_eq!(*calls.borrow(), 1);
    }
}
