//! # Widget Identifiers
//!
//! Widget IDs name widget *types*, not instances. A theme spec is keyed
//! by them, and every registered widget carries one so the applier can
//! find the matching style attributes.
//!
//! IDs are namespaced to keep widget libraries from colliding:
//!
//! ```
//! use neontron_theme::id::WidgetId;
//!
//! let button = WidgetId::new("neontron-widgets", "Button");
//! let custom = WidgetId::new("my-crate", "FancyKnob");
//! assert_ne!(button, custom);
//! ```

use std::fmt::{Debug, Display, Formatter};

/// The namespace used by the widgets shipped with the showcase.
pub const NEONTRON_NAMESPACE: &str = "neontron-widgets";

/// An identifier for a widget type in the theming system.
///
/// Consists of a namespace (typically the crate name) and an id (the
/// widget type name). Implements [Hash] and [Ord] so it can key maps
/// directly.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id from a namespace and a widget type name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a widget id in the [NEONTRON_NAMESPACE] namespace.
    pub fn neontron(id: impl ToString) -> Self {
        Self::new(NEONTRON_NAMESPACE, id)
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_ids_do_not_collide() {
        let ours = WidgetId::neontron("Button");
        let theirs = WidgetId::new("other-widgets", "Button");
        assert_ne!(ours, theirs);
        assert_eq!(ours.namespace(), NEONTRON_NAMESPACE);
        assert_eq!(ours.id(), "Button");
    }

    #[test]
    fn display_includes_namespace() {
        let id = WidgetId::neontron("Slider");
        assert_eq!(id.to_string(), "neontron-widgets:Slider");
    }
}
