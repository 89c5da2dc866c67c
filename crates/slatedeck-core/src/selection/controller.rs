//! Per-element controller facade over the selection scope.

use super::scope::SelectionScope;
use super::state::ElementState;
use crate::element::ElementId;

/// A short-lived view of one element's state machine.
///
/// Layout hosts hold capability sets per element role; this facade gives
/// those capabilities their verbs while the scope keeps enforcing
/// exclusivity underneath. Obtained via [`SelectionScope::controller`].
#[derive(Debug)]
pub struct ElementController<'a> {
    scope: &'a mut SelectionScope,
    id: ElementId,
}

impl<'a> ElementController<'a> {
    pub(super) fn new(scope: &'a mut SelectionScope, id: ElementId) -> Self {
        Self { scope, id }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn state(&self) -> ElementState {
        self.scope.state(&self.id)
    }

    pub fn is_selected(&self) -> bool {
        self.state().is_selected()
    }

    /// Request exclusivity and become selected.
    /// Returns `true` if the element newly became selected.
    pub fn select(&mut self) -> bool {
        self.scope.activate(&self.id)
    }

    /// Return to Idle from any state, clearing session flags.
    pub fn deselect(&mut self) {
        self.scope.deactivate(&self.id);
    }

    /// Enter Dragging. Valid only from Selected.
    pub fn begin_drag(&mut self) -> bool {
        self.scope.begin_drag(&self.id)
    }

    /// Enter Resizing. Valid only from Selected.
    pub fn begin_resize(&mut self) -> bool {
        self.scope.begin_resize(&self.id)
    }

    /// End the active drag/resize, settling back to Selected.
    pub fn settle(&mut self) -> bool {
        self.scope.settle(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_lifecycle() {
        let mut scope = SelectionScope::new();
        scope.register(ElementId::new("title"));
        scope.register(ElementId::new("description"));

        let mut title = scope.controller(ElementId::new("title"));
        assert!(title.select());
        assert!(title.begin_drag());
        assert_eq!(title.state(), ElementState::Dragging);
        assert!(title.settle());
        title.deselect();
        assert_eq!(title.state(), ElementState::Idle);
    }

    #[test]
    fn test_controller_select_displaces_sibling() {
        let mut scope = SelectionScope::new();
        scope.register(ElementId::new("a"));
        scope.register(ElementId::new("b"));

        scope.controller(ElementId::new("a")).select();
        scope.controller(ElementId::new("b")).select();

        assert_eq!(scope.state(&ElementId::new("a")), ElementState::Idle);
        assert_eq!(scope.state(&ElementId::new("b")), ElementState::Selected);
    }
}
