//! # Theme Manager
//!
//! The [ThemeManager] owns the theme spec and the current appearance
//! mode, and pushes resolved style values onto widgets. It is plain
//! state owned by the application context — there is no global manager.
//!
//! Application is best-effort by design: a style map is shared by every
//! instance of a widget type, so it may list attributes some instances
//! reject. A rejected attribute is logged and skipped without touching
//! the rest of the map, and one broken registration never stops a full
//! restyle pass.

use crate::mode::Mode;
use crate::registry::WidgetRegistry;
use crate::spec::ThemeSpec;
use crate::widget::Configurable;

/// Owns the theme spec and the live appearance mode.
pub struct ThemeManager {
    spec: ThemeSpec,
    mode: Mode,
}

impl ThemeManager {
    /// Create a manager over the given spec, starting in `mode`.
    pub fn new(spec: ThemeSpec, mode: Mode) -> Self {
        Self { spec, mode }
    }

    /// The theme spec being applied.
    pub fn spec(&self) -> &ThemeSpec {
        &self.spec
    }

    /// The currently active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flip the appearance mode and return the new one.
    ///
    /// The caller is expected to propagate the toolkit-wide light/dark
    /// flag and then run [Self::apply_to_all] over its registry.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        log::info!("appearance mode toggled to {}", self.mode);
        self.mode
    }

    /// Apply the spec entry for the widget's type, if any.
    ///
    /// A widget type without a spec entry is a no-op. Per-attribute
    /// rejections are logged at debug level and do not abort the
    /// remaining attributes.
    pub fn apply_to_widget(&self, widget: &mut dyn Configurable) {
        let id = widget.widget_id();
        let Some(style) = self.spec.of(&id) else {
            return;
        };

        for (property, entry) in style.iter() {
            let value = entry.resolve(self.mode);
            if let Err(err) = widget.configure(property, value) {
                log::debug!("{id}: {err}");
            }
        }
    }

    /// Restyle every registered widget, in registration order.
    ///
    /// Performs exactly one application per registration. A handle that
    /// cannot be borrowed (already mutably held by the caller) is
    /// skipped with a warning rather than aborting the pass.
    pub fn apply_to_all(&self, registry: &WidgetRegistry) {
        for (widget_ref, registration) in registry.entries() {
            match registration.handle().try_borrow_mut() {
                Ok(mut widget) => self.apply_to_widget(&mut *widget),
                Err(_) => {
                    log::warn!(
                        "skipping restyle of busy widget {widget_ref:?} ({})",
                        registration.type_id()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use peniko::Color;

    use super::*;
    use crate::error::ConfigureError;
    use crate::id::WidgetId;
    use crate::properties::StyleProperty;
    use crate::style::{Style, StyleEntry, StyleVal};

    /// Records every configure call; optionally rejects one property.
    struct Probe {
        type_id: WidgetId,
        reject: Option<StyleProperty>,
        seen: Vec<(StyleProperty, StyleVal)>,
    }

    impl Probe {
        fn new(id: &str) -> Self {
            Self {
                type_id: WidgetId::neontron(id),
                reject: None,
                seen: Vec::new(),
            }
        }

        fn rejecting(id: &str, property: StyleProperty) -> Self {
            Self {
                reject: Some(property),
                ..Self::new(id)
            }
        }
    }

    impl Configurable for Probe {
        fn widget_id(&self) -> WidgetId {
            self.type_id.clone()
        }

        fn configure(
            &mut self,
            property: StyleProperty,
            value: &StyleVal,
        ) -> Result<(), ConfigureError> {
            if self.reject == Some(property) {
                return Err(ConfigureError::UnsupportedProperty { property });
            }
            self.seen.push((property, *value));
            Ok(())
        }
    }

    fn probe_spec() -> ThemeSpec {
        ThemeSpec::new().with_style(
            WidgetId::neontron("Probe"),
            Style::new()
                .with(StyleProperty::CornerRadius, StyleEntry::uint(6))
                .with(
                    StyleProperty::FgColor,
                    StyleEntry::color_pair(Color::WHITE, Color::BLACK),
                )
                .with(
                    StyleProperty::TextColor,
                    StyleEntry::color(Color::from_rgb8(0x00, 0x10, 0x10)),
                ),
        )
    }

    #[test]
    fn scalars_apply_regardless_of_mode() {
        for mode in [Mode::Light, Mode::Dark] {
            let manager = ThemeManager::new(probe_spec(), mode);
            let mut probe = Probe::new("Probe");
            manager.apply_to_widget(&mut probe);
            assert!(probe
                .seen
                .contains(&(StyleProperty::CornerRadius, StyleVal::UInt(6))));
        }
    }

    #[test]
    fn mode_pairs_resolve_against_the_live_mode() {
        let manager = ThemeManager::new(probe_spec(), Mode::Light);
        let mut probe = Probe::new("Probe");
        manager.apply_to_widget(&mut probe);
        assert!(probe
            .seen
            .contains(&(StyleProperty::FgColor, StyleVal::Color(Color::WHITE))));

        let manager = ThemeManager::new(probe_spec(), Mode::Dark);
        let mut probe = Probe::new("Probe");
        manager.apply_to_widget(&mut probe);
        assert!(probe
            .seen
            .contains(&(StyleProperty::FgColor, StyleVal::Color(Color::BLACK))));
    }

    #[test]
    fn unknown_widget_type_leaves_the_widget_untouched() {
        let manager = ThemeManager::new(probe_spec(), Mode::Dark);
        let mut probe = Probe::new("Unthemed");
        manager.apply_to_widget(&mut probe);
        assert!(probe.seen.is_empty());
    }

    #[test]
    fn one_rejected_attribute_does_not_block_the_rest() {
        let manager = ThemeManager::new(probe_spec(), Mode::Dark);
        let mut probe = Probe::rejecting("Probe", StyleProperty::FgColor);
        manager.apply_to_widget(&mut probe);

        let applied: Vec<StyleProperty> = probe.seen.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            applied,
            vec![StyleProperty::CornerRadius, StyleProperty::TextColor]
        );
    }

    #[test]
    fn apply_to_all_visits_every_registration_in_order() {
        let manager = ThemeManager::new(probe_spec(), Mode::Dark);
        let mut registry = WidgetRegistry::new();

        let handles: Vec<Rc<RefCell<Probe>>> = (0..4)
            .map(|i| {
                // Odd entries reject their first attribute.
                let probe = if i % 2 == 1 {
                    Probe::rejecting("Probe", StyleProperty::CornerRadius)
                } else {
                    Probe::new("Probe")
                };
                Rc::new(RefCell::new(probe))
            })
            .collect();
        for handle in &handles {
            registry.register(handle.clone());
        }

        manager.apply_to_all(&registry);

        for (i, handle) in handles.iter().enumerate() {
            let seen = &handle.borrow().seen;
            let expected = if i % 2 == 1 { 2 } else { 3 };
            assert_eq!(seen.len(), expected, "registration {i}");
        }
    }

    #[test]
    fn toggle_mode_round_trips() {
        let mut manager = ThemeManager::new(ThemeSpec::new(), Mode::Dark);
        assert_eq!(manager.toggle_mode(), Mode::Light);
        assert_eq!(manager.toggle_mode(), Mode::Dark);
        assert_eq!(manager.mode(), Mode::Dark);
    }
}
