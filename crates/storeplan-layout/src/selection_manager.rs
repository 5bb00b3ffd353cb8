/// Tracks the selected entity of one layout model.
///
/// `SelectionManager` is responsible for:
/// - Holding the id of at most one selected zone (or shelf)
/// - Ignoring selection requests for ids the owning model does not know
/// - Clearing the selection when the selected entity is deleted
///
/// # Design
///
/// The manager only stores an id. Existence checks are done by the owning
/// layout model, which passes the answer in, so the manager never borrows the
/// zone or shelf list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    /// The id of the selected entity, if any
    selected_id: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use storeplan_layout::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the id of the selected entity.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Sets the selection.
    ///
    /// # Arguments
    ///
    /// * `id` - The entity to select, or `None` to clear
    /// * `exists` - Whether the owning model knows `id`; unknown ids are ignored
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn select(&mut self, id: Option<&str>, exists: bool) -> bool {
        let next = match id {
            Some(_) if !exists => return false,
            Some(id) => Some(id.to_string()),
            None => None,
        };
        let changed = next != self.selected_id;
        self.selected_id = next;
        changed
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Clears the selection if `id` is the selected entity.
    ///
    /// # Returns
    ///
    /// `true` if the selection was cleared.
    pub fn on_deleted(&mut self, id: &str) -> bool {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }

    /// Drops the selection if its id no longer passes `exists`.
    pub fn retain(&mut self, exists: impl Fn(&str) -> bool) {
        if let Some(id) = self.selected_id.as_deref() {
            if !exists(id) {
                self.selected_id = None;
            }
        }
    }
}
