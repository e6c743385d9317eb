use crate::domain::flame_chart::{ProfileSelection, SelectionStore};
use std::cell::RefCell;

type SelectionListener = Box<dyn Fn(ProfileSelection)>;

/// Selection store kept in memory, for hosts without a store of their own
/// and for tests.
///
/// Listeners run synchronously after every committed update, the way a
/// host store re-renders its panels.
#[derive(Default)]
pub struct InMemorySelectionStore {
    selection: RefCell<ProfileSelection>,
    history: RefCell<Vec<ProfileSelection>>,
    listeners: RefCell<Vec<SelectionListener>>,
}

impl InMemorySelectionStore {
    pub fn new(selection: ProfileSelection) -> Self {
        Self { selection: RefCell::new(selection), ..Self::default() }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(ProfileSelection) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Every update received, oldest first.
    pub fn history(&self) -> Vec<ProfileSelection> {
        self.history.borrow().clone()
    }

    pub fn dispatch_count(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn last_dispatched(&self) -> Option<ProfileSelection> {
        self.history.borrow().last().copied()
    }
}

impl SelectionStore for InMemorySelectionStore {
    fn selection(&self) -> ProfileSelection {
        *self.selection.borrow()
    }

    fn update_profile_selection(&self, selection: ProfileSelection) {
        *self.selection.borrow_mut() = selection;
        self.history.borrow_mut().push(selection);
        for listener in self.listeners.borrow().iter() {
            listener(selection);
        }
    }
}
