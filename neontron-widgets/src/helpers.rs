//! Shared plumbing for widget `configure` implementations.

use neontron_theme::error::ConfigureError;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use peniko::Color;

/// Assign a color value to a style slot, rejecting non-color values.
pub(crate) fn assign_color(
    slot: &mut Option<Color>,
    property: StyleProperty,
    value: &StyleVal,
) -> Result<(), ConfigureError> {
    *slot = Some(
        value
            .as_color()
            .ok_or(ConfigureError::InvalidValue { property })?,
    );
    Ok(())
}

/// Assign a pixel dimension to a style slot, rejecting non-numeric values.
pub(crate) fn assign_dimension(
    slot: &mut f32,
    property: StyleProperty,
    value: &StyleVal,
) -> Result<(), ConfigureError> {
    *slot = value
        .as_f32()
        .ok_or(ConfigureError::InvalidValue { property })?;
    Ok(())
}
