//! Editor state: category store, history and selection behind one API.

use crate::category::Category;
use crate::config::EditorConfig;
use crate::content::NewsItem;
use crate::element::{Element, ElementError, ElementId, next_z_index, paint_order, validate_collection};
use crate::export::ExportRequest;
use crate::geometry::Corner;
use crate::gesture::Gesture;
use crate::history::History;
use crate::layout::build_pages;
use crate::selection::{Selection, hit_test_handles};
use crate::shortcuts::{EditorCommand, KeyPress};
use crate::storage::{NewsData, SavedState};
use crate::store::CategoryStore;
use crate::theme::Theme;
use chrono::NaiveDate;
use kurbo::{Point, Vec2};

/// The editor's element state.
///
/// All mutation goes through the methods below. Each structural mutation
/// records the prior live collection in the history and leaves the current
/// category's stored collection equal to the live one. Misses are silent.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: CategoryStore,
    history: History,
    selection: Selection,
}

impl Canvas {
    /// Create a canvas with empty collections, `cover` active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopen a saved session on the cover page, with empty history.
    pub fn restore(state: &SavedState) -> Result<Self, ElementError> {
        state.validate()?;
        log::info!("Restoring editor state saved at {:?}", state.saved_at);
        Ok(Self {
            store: CategoryStore::with_slots(state.edited_elements.clone(), Category::Cover),
            history: History::new(),
            selection: Selection::new(),
        })
    }

    /// The live collection.
    pub fn elements(&self) -> &[Element] {
        self.store.live()
    }

    pub fn current_category(&self) -> Category {
        self.store.current()
    }

    /// A category's stored collection.
    pub fn category_elements(&self, category: Category) -> &[Element] {
        self.store.slot(category)
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.selection.selected()
    }

    /// The selected element, if the selected id is live.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.selected().and_then(|id| self.store.get(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Topmost live element containing `point`.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        paint_order(self.store.live())
            .into_iter()
            .rev()
            .find(|e| e.bounds().contains(point))
    }

    /// Resize handle of the selected element under a logical point.
    pub fn handle_at(&self, point: Point, scale: f64) -> Option<Corner> {
        self.selected_element()
            .and_then(|element| hit_test_handles(element, point, scale))
    }

    /// Replace the live collection.
    pub fn set_active_elements(&mut self, elements: Vec<Element>) {
        debug_assert!(
            validate_collection(&elements).is_ok(),
            "live collection must hold valid elements with unique ids"
        );
        log::debug!("Setting {} live elements on {}", elements.len(), self.store.current());
        let prior = self.store.replace_live(elements);
        self.history.record(prior);
    }

    /// Write a category's stored collection. Records no history and leaves
    /// the live view alone, even for the current category.
    pub fn set_category_elements(&mut self, category: Category, elements: Vec<Element>) {
        log::debug!("Storing {} elements for {category}", elements.len());
        self.store.set_slot(category, elements);
    }

    /// Switch the current category, clearing the selection. Returns the new
    /// live collection.
    ///
    /// A category with nothing stored keeps the live collection, which then
    /// becomes that category's stored collection too.
    pub fn set_active_category(&mut self, category: Category) -> &[Element] {
        log::debug!("Switching category {} -> {category}", self.store.current());
        self.selection.clear();
        self.store.switch_to(category)
    }

    /// Replace the live element with the same id. Returns whether an
    /// element was replaced; history is recorded either way.
    pub fn update_element(&mut self, updated: Element) -> bool {
        debug_assert!(updated.validate().is_ok(), "updated element must be structurally valid");
        let prior = self.store.live().to_vec();
        let id = updated.id().clone();
        let replaced = self.store.update(updated);
        self.history.record(prior);
        if replaced {
            log::debug!("Updated element {id}");
        } else {
            log::debug!("No live element {id} to update");
        }
        replaced
    }

    /// Remove the live element with `id`. The selection is cleared whether
    /// or not the element existed.
    pub fn delete_element(&mut self, id: &ElementId) -> Option<Element> {
        self.selection.clear();
        let prior = self.store.live().to_vec();
        let removed = self.store.remove(id);
        self.history.record(prior);
        log::debug!("Delete {id}: {}", if removed.is_some() { "removed" } else { "not found" });
        removed
    }

    /// Select an element, or clear the selection with `None`. Unknown ids
    /// are accepted.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selection.select(id);
    }

    /// Returns true if undo was performed.
    pub fn undo(&mut self) -> bool {
        let done = self.history.undo(self.store.live_mut());
        if done {
            self.store.sync_current_slot();
            log::debug!("Undo on {}", self.store.current());
        }
        done
    }

    /// Returns true if redo was performed.
    pub fn redo(&mut self) -> bool {
        let done = self.history.redo(self.store.live_mut());
        if done {
            self.store.sync_current_slot();
            log::debug!("Redo on {}", self.store.current());
        }
        done
    }

    /// Append an element on top of the live collection and return its id.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let element = element.with_z_index(next_z_index(self.store.live()));
        let id = element.id().clone();
        let mut elements = self.store.live().to_vec();
        elements.push(element);
        self.set_active_elements(elements);
        id
    }

    /// Delete the selected element. Returns false when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected().cloned() else {
            return false;
        };
        self.delete_element(&id);
        true
    }

    /// Start dragging a live element.
    pub fn begin_drag(&self, id: &ElementId) -> Option<Gesture> {
        self.store.get(id).cloned().map(Gesture::drag)
    }

    /// Start resizing a live element from `corner`.
    pub fn begin_resize(&self, id: &ElementId, corner: Corner) -> Option<Gesture> {
        self.store
            .get(id)
            .cloned()
            .map(|element| Gesture::resize(element, corner))
    }

    /// Finish a gesture with its total screen offset as one update.
    pub fn commit(&mut self, gesture: Gesture, screen_offset: Vec2, scale: f64) -> bool {
        self.update_element(gesture.finish(screen_offset, scale))
    }

    /// Run an editor command. Returns whether anything changed.
    pub fn apply_command(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::DeleteSelected => self.delete_selected(),
        }
    }

    /// Run the command bound to a key press, if any.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        EditorCommand::from_key(press).is_some_and(|command| self.apply_command(command))
    }

    /// Regenerate every page from `items` and show the cover.
    pub fn populate(&mut self, theme: &Theme, items: &[NewsItem], date: NaiveDate) {
        let pages = build_pages(theme, items, date);
        log::info!("Populating pages from {} news items", items.len());

        // Park on the cover first so the switch below does not write the
        // old live collection over a freshly built slot.
        self.set_active_category(Category::Cover);
        for (category, elements) in pages.iter() {
            self.set_category_elements(category, elements.to_vec());
        }
        self.set_active_category(Category::Cover);
    }

    /// Snapshot the session for persistence.
    pub fn to_saved_state(&self, theme: &Theme, news_data: NewsData, config: &EditorConfig) -> SavedState {
        SavedState::new(news_data, self.store.slots().clone(), theme.clone(), config.clone())
    }

    /// The current page for the exporter.
    pub fn export_request(&self, theme: &Theme) -> ExportRequest {
        let category = self.store.current();
        ExportRequest::new(category, theme.background_for(category), self.store.live())
    }

    #[cfg(test)]
    fn is_synced(&self) -> bool {
        self.store.is_synced()
    }
}
