//! The exclusivity scope: a registry of per-element interaction state.

use super::controller::ElementController;
use super::state::ElementState;
use crate::element::ElementId;
use std::collections::HashMap;

/// Registry of interaction state for the elements of one slide.
///
/// The scope is the exclusivity domain: at most one registered element is
/// selected at any time, enforced by deselecting siblings before selecting
/// the new target within the same synchronous call. Invalid transitions are
/// ignored (and logged) rather than panicking; a malformed event sequence
/// must never interrupt a live editing surface.
#[derive(Debug, Clone, Default)]
pub struct SelectionScope {
    states: HashMap<ElementId, ElementState>,
    active: Option<ElementId>,
}

impl SelectionScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element. Registration is idempotent and never disturbs
    /// existing state.
    pub fn register(&mut self, id: ElementId) {
        self.states.entry(id).or_default();
    }

    /// Remove an element's record entirely (slide unmount, not deletion;
    /// deleted elements keep their record).
    pub fn remove(&mut self, id: &ElementId) {
        self.states.remove(id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.states.contains_key(id)
    }

    /// The state of an element. Unregistered ids read as Idle.
    pub fn state(&self, id: &ElementId) -> ElementState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// The currently selected element, if any.
    pub fn active(&self) -> Option<&ElementId> {
        self.active.as_ref()
    }

    /// Registered element count.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// A per-element facade exposing the controller operations.
    pub fn controller(&mut self, id: ElementId) -> ElementController<'_> {
        ElementController::new(self, id)
    }

    /// Make `id` the exclusive selection.
    ///
    /// Deselects every sibling first, then selects the target, all within
    /// this call. Returns `true` if the element newly became selected.
    /// Activating the already-active element is idempotent: no deselect or
    /// re-select side effects. An unknown id deselects everything and
    /// selects nothing.
    pub fn activate(&mut self, id: &ElementId) -> bool {
        if self.active.as_ref() == Some(id) {
            return false;
        }
        self.deactivate_all();
        match self.states.get_mut(id) {
            Some(state) => {
                *state = ElementState::Selected;
                self.active = Some(id.clone());
                true
            }
            None => {
                log::debug!("activate for unknown element {id} ignored");
                false
            }
        }
    }

    /// Deselect every element. Clears any dragging/resizing flag.
    pub fn deactivate_all(&mut self) {
        for state in self.states.values_mut() {
            *state = ElementState::Idle;
        }
        self.active = None;
    }

    /// Deselect one element (no-op if it is not selected).
    pub fn deactivate(&mut self, id: &ElementId) {
        if let Some(state) = self.states.get_mut(id) {
            *state = ElementState::Idle;
        }
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }

    /// Transition the selected element into Dragging.
    /// Valid only from Selected; anything else is ignored.
    pub fn begin_drag(&mut self, id: &ElementId) -> bool {
        self.begin_session(id, ElementState::Dragging)
    }

    /// Transition the selected element into Resizing.
    /// Valid only from Selected; anything else is ignored.
    pub fn begin_resize(&mut self, id: &ElementId) -> bool {
        self.begin_session(id, ElementState::Resizing)
    }

    /// End a drag or resize, settling back to Selected.
    pub fn settle(&mut self, id: &ElementId) -> bool {
        match self.states.get_mut(id) {
            Some(state) if state.is_engaged() => {
                *state = ElementState::Selected;
                true
            }
            _ => false,
        }
    }

    fn begin_session(&mut self, id: &ElementId, target: ElementState) -> bool {
        match self.states.get_mut(id) {
            Some(state) if *state == ElementState::Selected => {
                *state = target;
                true
            }
            Some(state) => {
                log::debug!("{target:?} for {id} ignored in state {state:?}");
                false
            }
            None => {
                log::debug!("{target:?} for unknown element {id} ignored");
                false
            }
        }
    }

    /// Count of selected elements. The exclusivity invariant keeps this at
    /// zero or one; tests assert through it.
    pub fn selected_count(&self) -> usize {
        self.states.values().filter(|s| s.is_selected()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_with(ids: &[&str]) -> SelectionScope {
        let mut scope = SelectionScope::new();
        for id in ids {
            scope.register(ElementId::new(*id));
        }
        scope
    }

    #[test]
    fn test_exclusivity_across_selects() {
        let mut scope = scope_with(&["title", "description", "bullet-0-title"]);
        for id in ["title", "description", "bullet-0-title", "description"] {
            scope.activate(&ElementId::new(id));
            assert_eq!(scope.selected_count(), 1);
            assert_eq!(scope.active(), Some(&ElementId::new(id)));
        }
    }

    #[test]
    fn test_sibling_flips_off_in_same_call() {
        let mut scope = scope_with(&["a", "b"]);
        let a = ElementId::new("a");
        let b = ElementId::new("b");

        scope.activate(&a);
        assert!(scope.state(&a).is_selected());

        scope.activate(&b);
        assert!(!scope.state(&a).is_selected());
        assert!(scope.state(&b).is_selected());
        assert_eq!(scope.selected_count(), 1);
    }

    #[test]
    fn test_activate_idempotent() {
        let mut scope = scope_with(&["title"]);
        let id = ElementId::new("title");
        assert!(scope.activate(&id));
        // Second activation reports no change and keeps the selection.
        assert!(!scope.activate(&id));
        assert_eq!(scope.active(), Some(&id));
    }

    #[test]
    fn test_activate_unknown_deselects_all() {
        let mut scope = scope_with(&["title"]);
        let title = ElementId::new("title");
        scope.activate(&title);

        assert!(!scope.activate(&ElementId::new("missing")));
        assert_eq!(scope.selected_count(), 0);
        assert_eq!(scope.active(), None);
    }

    #[test]
    fn test_drag_only_from_selected() {
        let mut scope = scope_with(&["title"]);
        let id = ElementId::new("title");

        // Idle: rejected.
        assert!(!scope.begin_drag(&id));

        scope.activate(&id);
        assert!(scope.begin_drag(&id));
        assert_eq!(scope.state(&id), ElementState::Dragging);

        // Already dragging: rejected, state unchanged.
        assert!(!scope.begin_drag(&id));
        assert!(!scope.begin_resize(&id));
        assert_eq!(scope.state(&id), ElementState::Dragging);

        assert!(scope.settle(&id));
        assert_eq!(scope.state(&id), ElementState::Selected);
    }

    #[test]
    fn test_deactivate_all_clears_session_flags() {
        let mut scope = scope_with(&["title"]);
        let id = ElementId::new("title");
        scope.activate(&id);
        scope.begin_resize(&id);

        scope.deactivate_all();
        assert_eq!(scope.state(&id), ElementState::Idle);
        assert_eq!(scope.selected_count(), 0);
    }

    #[test]
    fn test_remove_clears_active() {
        let mut scope = scope_with(&["title"]);
        let id = ElementId::new("title");
        scope.activate(&id);
        scope.remove(&id);
        assert_eq!(scope.active(), None);
        assert_eq!(scope.state(&id), ElementState::Idle);
    }
}
