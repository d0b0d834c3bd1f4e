//! Category store: the three stored collections plus the live view.

use crate::category::{Category, CategoryElements};
use crate::element::{Element, ElementId};

/// Holds one stored collection per category and the live collection of the
/// current category.
///
/// Every mutation of the live collection goes through a method that mirrors
/// the result into the current category's slot. The only way the two can
/// differ is [`CategoryStore::set_slot`] on the current category, which
/// deliberately leaves the live view alone.
///
/// This type records no history; [`crate::Canvas`] pairs it with
/// [`crate::History`].
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    slots: CategoryElements,
    current: Category,
    live: Vec<Element>,
}

impl CategoryStore {
    /// Create a store with empty collections and `cover` active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from stored collections and activate `current`.
    pub fn with_slots(slots: CategoryElements, current: Category) -> Self {
        let live = slots.get(current).to_vec();
        Self { slots, current, live }
    }

    pub fn live(&self) -> &[Element] {
        &self.live
    }

    pub fn current(&self) -> Category {
        self.current
    }

    pub fn slot(&self, category: Category) -> &[Element] {
        self.slots.get(category)
    }

    pub fn slots(&self) -> &CategoryElements {
        &self.slots
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.live.iter().find(|e| e.id() == id)
    }

    /// Replace the live collection, returning the previous one.
    pub fn replace_live(&mut self, elements: Vec<Element>) -> Vec<Element> {
        let prior = std::mem::replace(&mut self.live, elements);
        self.sync_current_slot();
        prior
    }

    /// Write a category's stored collection without touching the live view.
    pub fn set_slot(&mut self, category: Category, elements: Vec<Element>) {
        self.slots.set(category, elements);
    }

    /// Make `category` current and return the resulting live collection.
    ///
    /// The outgoing live collection is written back to its slot. The
    /// incoming slot becomes live unless it is empty, in which case the
    /// live collection is kept and copied into that slot. Re-activating the
    /// current category reloads its slot, which is how a bulk
    /// [`set_slot`](Self::set_slot) on the active category becomes visible.
    pub fn switch_to(&mut self, category: Category) -> &[Element] {
        if category != self.current {
            self.sync_current_slot();
        }
        let incoming = self.slots.get(category);
        if !incoming.is_empty() {
            self.live = incoming.to_vec();
        }
        self.current = category;
        self.sync_current_slot();
        &self.live
    }

    /// Replace the live element with the same id as `updated`.
    ///
    /// Returns false, leaving the collection untouched, when no element has
    /// that id or when the update would change the element's kind.
    pub fn update(&mut self, updated: Element) -> bool {
        let Some(slot) = self.live.iter_mut().find(|e| e.id() == updated.id()) else {
            return false;
        };
        if slot.kind() != updated.kind() {
            log::warn!(
                "Ignoring update of {} from {} to {}",
                updated.id(),
                slot.kind(),
                updated.kind()
            );
            return false;
        }
        *slot = updated;
        self.sync_current_slot();
        true
    }

    /// Remove the live element with `id`, if present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.live.iter().position(|e| e.id() == id)?;
        let removed = self.live.remove(index);
        self.sync_current_slot();
        Some(removed)
    }

    /// Mutable access to the live collection for history restores. Callers
    /// must follow up with [`sync_current_slot`](Self::sync_current_slot).
    pub(crate) fn live_mut(&mut self) -> &mut Vec<Element> {
        &mut self.live
    }

    /// Mirror the live collection into the current category's slot.
    pub(crate) fn sync_current_slot(&mut self) {
        let live = self.live.clone();
        self.slots.set(self.current, live);
    }

    /// True when the current slot mirrors the live collection.
    pub fn is_synced(&self) -> bool {
        self.slots.get(self.current) == self.live.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementPayload, ImageProps, TextProps};
    use kurbo::{Point, Size};

    fn text(id: &str) -> Element {
        Element::new(id, Point::ZERO, Size::new(50.0, 20.0), ElementPayload::Text(TextProps::new(id)))
    }

    #[test]
    fn test_new_store_is_empty_cover() {
        let store = CategoryStore::new();
        assert_eq!(store.current(), Category::Cover);
        assert!(store.live().is_empty());
        assert!(store.is_synced());
    }

    #[test]
    fn test_replace_live_mirrors() {
        let mut store = CategoryStore::new();
        let prior = store.replace_live(vec![text("a")]);
        assert!(prior.is_empty());
        assert_eq!(store.slot(Category::Cover), store.live());
    }

    #[test]
    fn test_set_slot_on_active_category_leaves_live() {
        let mut store = CategoryStore::new();
        store.replace_live(vec![text("a")]);
        store.set_slot(Category::Cover, vec![text("b")]);
        assert_eq!(store.live()[0].id().as_str(), "a");
        assert_eq!(store.slot(Category::Cover)[0].id().as_str(), "b");
        assert!(!store.is_synced());

        // Re-activating loads the bulk-set slot.
        store.switch_to(Category::Cover);
        assert_eq!(store.live()[0].id().as_str(), "b");
        assert!(store.is_synced());
    }

    #[test]
    fn test_switch_writes_back_and_loads() {
        let mut store = CategoryStore::new();
        store.set_slot(Category::News, vec![text("n")]);
        store.replace_live(vec![text("c")]);

        let live = store.switch_to(Category::News);
        assert_eq!(live[0].id().as_str(), "n");
        assert_eq!(store.slot(Category::Cover)[0].id().as_str(), "c");

        store.switch_to(Category::Cover);
        assert_eq!(store.live()[0].id().as_str(), "c");
    }

    #[test]
    fn test_switch_to_empty_slot_keeps_live() {
        let mut store = CategoryStore::new();
        store.replace_live(vec![text("c")]);
        store.switch_to(Category::Summary);
        assert_eq!(store.current(), Category::Summary);
        assert_eq!(store.live()[0].id().as_str(), "c");
        assert_eq!(store.slot(Category::Summary)[0].id().as_str(), "c");
        assert!(store.is_synced());
    }

    #[test]
    fn test_update_miss_is_noop() {
        let mut store = CategoryStore::new();
        store.replace_live(vec![text("a")]);
        assert!(!store.update(text("zzz")));
        assert_eq!(store.live().len(), 1);
        assert_eq!(store.live()[0].id().as_str(), "a");
    }

    #[test]
    fn test_update_rejects_kind_change() {
        let mut store = CategoryStore::new();
        store.replace_live(vec![text("a")]);
        let image = Element::new("a", Point::ZERO, Size::new(5.0, 5.0), ElementPayload::Image(ImageProps::default()));
        assert!(!store.update(image));
        assert_eq!(store.live()[0], text("a"));
    }

    #[test]
    fn test_update_preserves_order() {
        let mut store = CategoryStore::new();
        store.replace_live(vec![text("a"), text("b"), text("c")]);
        let mut moved = text("b");
        moved.position = Point::new(5.0, 5.0);
        assert!(store.update(moved));
        let ids: Vec<&str> = store.live().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(store.live()[1].position, Point::new(5.0, 5.0));
        assert!(store.is_synced());
    }

    #[test]
    fn test_remove() {
        let mut store = CategoryStore::new();
        store.replace_live(vec![text("a"), text("b")]);
        assert!(store.remove(&ElementId::from("a")).is_some());
        assert!(store.remove(&ElementId::from("a")).is_none());
        assert_eq!(store.slot(Category::Cover).len(), 1);
    }

    #[test]
    fn test_with_slots_activates() {
        let mut slots = CategoryElements::default();
        slots.summary.push(text("s"));
        let store = CategoryStore::with_slots(slots, Category::Summary);
        assert_eq!(store.live().len(), 1);
        assert!(store.is_synced());
    }
}
