//! # Theme File Loader
//!
//! Loads a [ThemeSpec] from a theme file, replacing the built-in theme.
//! TOML is the native format; JSON documents of the same shape are
//! accepted as well. The format is picked by file extension.
//!
//! A theme file holds one table per widget type. Values are hex color
//! strings (or `transparent`), numbers, booleans, or two-element
//! `[light, dark]` arrays:
//!
//! ```toml
//! [Button]
//! corner_radius = 6
//! fg_color = ["#00D1D1", "#00D1D1"]
//! text_color = "#001010"
//! ```
//!
//! Unknown widget tables and unknown property keys are hard errors; a
//! typo in a theme file should fail loudly at startup instead of
//! silently styling nothing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ThemeError, ThemeResult};
use crate::id::WidgetId;
use crate::properties::StyleProperty;
use crate::serde_color::parse_color;
use crate::spec::{ThemeSpec, WIDGET_TYPES};
use crate::style::{Style, StyleEntry, StyleVal};

/// Theme spec loader for TOML and JSON theme files.
pub struct ThemeLoader;

impl ThemeLoader {
    /// Load a theme spec from a file, picking the format by extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ThemeResult<ThemeSpec> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ThemeError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ThemeError::Io(err),
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let spec = match extension.as_str() {
            "toml" => Self::load_from_toml(&content, path)?,
            "json" => Self::load_from_json(&content, path)?,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        log::info!(
            "loaded theme from {:?} ({} widget types)",
            path,
            spec.len()
        );
        Ok(spec)
    }

    /// Load a theme spec from TOML content.
    pub fn load_from_toml(content: &str, path: &Path) -> ThemeResult<ThemeSpec> {
        let root: toml::Value = toml::from_str(content).map_err(|err| ThemeError::ParseError {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;
        Self::from_value(root, path)
    }

    /// Load a theme spec from JSON content.
    pub fn load_from_json(content: &str, path: &Path) -> ThemeResult<ThemeSpec> {
        // toml::Value deserializes from any self-describing format, so
        // the JSON document can share the TOML walker.
        let root: toml::Value =
            serde_json::from_str(content).map_err(|err| ThemeError::ParseError {
                path: path.to_path_buf(),
                details: err.to_string(),
            })?;
        Self::from_value(root, path)
    }

    fn from_value(root: toml::Value, path: &Path) -> ThemeResult<ThemeSpec> {
        let tables = root.as_table().ok_or_else(|| ThemeError::ParseError {
            path: path.to_path_buf(),
            details: "expected one table per widget type at the top level".into(),
        })?;

        let mut spec = ThemeSpec::new();
        for (widget_name, table) in tables {
            if !WIDGET_TYPES.contains(&widget_name.as_str()) {
                return Err(ThemeError::UnknownWidget {
                    name: widget_name.clone(),
                });
            }
            let attributes = table.as_table().ok_or_else(|| ThemeError::ParseError {
                path: path.to_path_buf(),
                details: format!("widget '{widget_name}' is not a table"),
            })?;

            let mut style = Style::new();
            for (key, value) in attributes {
                let property =
                    StyleProperty::from_str(key).ok_or_else(|| ThemeError::UnknownProperty {
                        widget: widget_name.clone(),
                        name: key.clone(),
                    })?;
                style.set(property, entry_from_value(widget_name, property, value)?);
            }
            spec = spec.with_style(WidgetId::neontron(widget_name), style);
        }
        Ok(spec)
    }
}

/// Convert one theme-file value into a style entry.
///
/// A two-element array becomes a `(light, dark)` pair; anything else is
/// a mode-independent scalar.
fn entry_from_value(
    widget: &str,
    property: StyleProperty,
    value: &toml::Value,
) -> ThemeResult<StyleEntry> {
    if let Some(items) = value.as_array() {
        if items.len() != 2 {
            return Err(ThemeError::InvalidValue {
                widget: widget.to_string(),
                property: property.to_string(),
                details: format!("mode pair needs exactly 2 values, got {}", items.len()),
            });
        }
        return Ok(StyleEntry::ModePair {
            light: scalar_from_value(widget, property, &items[0])?,
            dark: scalar_from_value(widget, property, &items[1])?,
        });
    }
    Ok(StyleEntry::Scalar(scalar_from_value(
        widget, property, value,
    )?))
}

fn scalar_from_value(
    widget: &str,
    property: StyleProperty,
    value: &toml::Value,
) -> ThemeResult<StyleVal> {
    match value {
        toml::Value::String(text) => Ok(StyleVal::Color(parse_color(text)?)),
        toml::Value::Integer(number) => {
            if *number >= 0 {
                Ok(StyleVal::UInt(*number as u32))
            } else {
                Ok(StyleVal::Int(*number as i32))
            }
        }
        toml::Value::Float(number) => Ok(StyleVal::Float(*number as f32)),
        toml::Value::Boolean(flag) => Ok(StyleVal::Bool(*flag)),
        other => Err(ThemeError::InvalidValue {
            widget: widget.to_string(),
            property: property.to_string(),
            details: format!("unsupported value shape: {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::*;
    use crate::mode::Mode;

    const SAMPLE_TOML: &str = r##"
[Button]
corner_radius = 6
fg_color = ["#00D1D1", "#00D1D1"]
text_color = "#001010"

[Label]
fg_color = "transparent"
text_color = ["#424242", "#00D1D1"]
"##;

    #[test]
    fn loads_scalars_and_pairs_from_toml() {
        let spec = ThemeLoader::load_from_toml(SAMPLE_TOML, Path::new("neon.toml")).unwrap();
        assert_eq!(spec.len(), 2);

        let button = spec.of(&WidgetId::neontron("Button")).unwrap();
        assert_eq!(
            button
                .get(StyleProperty::CornerRadius)
                .unwrap()
                .resolve(Mode::Light)
                .as_f32(),
            Some(6.0)
        );
        assert_eq!(
            button
                .get(StyleProperty::FgColor)
                .unwrap()
                .resolve(Mode::Dark)
                .as_color(),
            Some(Color::from_rgb8(0x00, 0xd1, 0xd1))
        );

        let label = spec.of(&WidgetId::neontron("Label")).unwrap();
        assert_eq!(
            label
                .get(StyleProperty::FgColor)
                .unwrap()
                .resolve(Mode::Dark)
                .as_color(),
            Some(Color::TRANSPARENT)
        );
        assert_eq!(
            label
                .get(StyleProperty::TextColor)
                .unwrap()
                .resolve(Mode::Light)
                .as_color(),
            Some(Color::from_rgb8(0x42, 0x42, 0x42))
        );
    }

    #[test]
    fn loads_the_same_shapes_from_json() {
        let json = r##"{
            "Button": {
                "corner_radius": 6,
                "fg_color": ["#00D1D1", "#00D1D1"]
            }
        }"##;
        let spec = ThemeLoader::load_from_json(json, Path::new("neon.json")).unwrap();
        let button = spec.of(&WidgetId::neontron("Button")).unwrap();
        assert_eq!(
            button
                .get(StyleProperty::FgColor)
                .unwrap()
                .resolve(Mode::Light)
                .as_color(),
            Some(Color::from_rgb8(0x00, 0xd1, 0xd1))
        );
    }

    #[test]
    fn rejects_unknown_widget_tables() {
        let toml = "[Blinkenlight]\nfg_color = \"#ffffff\"\n";
        let err = ThemeLoader::load_from_toml(toml, Path::new("neon.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownWidget { name } if name == "Blinkenlight"));
    }

    #[test]
    fn rejects_unknown_properties() {
        let toml = "[Button]\nglow_intensity = 11\n";
        let err = ThemeLoader::load_from_toml(toml, Path::new("neon.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownProperty { name, .. } if name == "glow_intensity"));
    }

    #[test]
    fn rejects_malformed_colors_and_short_pairs() {
        let toml = "[Button]\nfg_color = \"#12345\"\n";
        assert!(matches!(
            ThemeLoader::load_from_toml(toml, Path::new("neon.toml")).unwrap_err(),
            ThemeError::InvalidColor { .. }
        ));

        let toml = "[Button]\nfg_color = [\"#00D1D1\"]\n";
        assert!(matches!(
            ThemeLoader::load_from_toml(toml, Path::new("neon.toml")).unwrap_err(),
            ThemeError::InvalidValue { .. }
        ));
    }

    #[test]
    fn loads_from_disk_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neon.toml");
        std::fs::write(&path, SAMPLE_TOML).unwrap();

        let spec = ThemeLoader::load_from_file(&path).unwrap();
        assert!(spec.of(&WidgetId::neontron("Button")).is_some());

        let odd = dir.path().join("neon.ini");
        std::fs::write(&odd, "x").unwrap();
        assert!(matches!(
            ThemeLoader::load_from_file(&odd).unwrap_err(),
            ThemeError::UnsupportedFormat { .. }
        ));

        assert!(matches!(
            ThemeLoader::load_from_file(dir.path().join("missing.toml")).unwrap_err(),
            ThemeError::FileNotFound { .. }
        ));
    }
}
