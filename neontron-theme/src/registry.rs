//! # Widget Registry
//!
//! An arena of registered widget handles. Widgets are appended as the
//! presentation layer creates them and live for the whole process; the
//! registry never removes entries. Each registration keeps the widget
//! type tag alongside the handle and is addressed by a stable
//! [WidgetRef].
//!
//! The UI runs single-threaded, so handles are `Rc<RefCell<_>>`: the
//! presentation layer holds typed clones for rendering while the applier
//! works through the type-erased clones stored here.

use std::cell::RefCell;
use std::rc::Rc;

use crate::id::WidgetId;
use crate::widget::Configurable;

/// A shared, type-erased handle to a live widget.
pub type WidgetHandle = Rc<RefCell<dyn Configurable>>;

/// A stable index of one registration in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetRef(usize);

/// One registered widget: its type tag plus the live handle.
pub struct Registration {
    type_id: WidgetId,
    handle: WidgetHandle,
}

impl Registration {
    /// The widget type this registration was created with.
    pub fn type_id(&self) -> &WidgetId {
        &self.type_id
    }

    /// The live widget handle.
    pub fn handle(&self) -> &WidgetHandle {
        &self.handle
    }
}

/// Append-only arena of widget registrations.
#[derive(Default)]
pub struct WidgetRegistry {
    entries: Vec<Registration>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget, reading its type tag from the handle.
    ///
    /// Returns a stable reference that stays valid for the process
    /// lifetime.
    pub fn register(&mut self, handle: WidgetHandle) -> WidgetRef {
        let type_id = handle.borrow().widget_id();
        let index = self.entries.len();
        self.entries.push(Registration { type_id, handle });
        WidgetRef(index)
    }

    /// Look up a registration by reference.
    pub fn get(&self, widget_ref: WidgetRef) -> Option<&Registration> {
        self.entries.get(widget_ref.0)
    }

    /// Iterate registrations in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (WidgetRef, &Registration)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, registration)| (WidgetRef(index), registration))
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no widgets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigureError;
    use crate::properties::StyleProperty;
    use crate::style::StyleVal;

    struct Dummy(&'static str);

    impl Configurable for Dummy {
        fn widget_id(&self) -> WidgetId {
            WidgetId::neontron(self.0)
        }

        fn configure(
            &mut self,
            property: StyleProperty,
            _value: &StyleVal,
        ) -> Result<(), ConfigureError> {
            Err(ConfigureError::UnsupportedProperty { property })
        }
    }

    #[test]
    fn registration_keeps_type_tag_and_order() {
        let mut registry = WidgetRegistry::new();
        let a = registry.register(Rc::new(RefCell::new(Dummy("Button"))));
        let b = registry.register(Rc::new(RefCell::new(Dummy("Label"))));

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(a).map(|r| r.type_id().id()),
            Some("Button")
        );

        let order: Vec<&str> = registry
            .entries()
            .map(|(_, registration)| registration.type_id().id())
            .collect();
        assert_eq!(order, vec!["Button", "Label"]);
    }
}
