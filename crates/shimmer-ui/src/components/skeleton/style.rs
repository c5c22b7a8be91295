/// Fallback fill when no color is supplied — a light neutral gray.
const DEFAULT_COLOR: &str = "hsl(200, 20%, 95%)";

/// Shape of the skeleton placeholder.
///
/// Sizing inputs ride along with the variant so that the mutually exclusive
/// prop shapes cannot be mixed: `font_size` only exists on [`Text`], pixel
/// dimensions only on the block variants.
///
/// [`Text`]: SkeletonVariant::Text
#[derive(Debug, Clone, PartialEq)]
pub enum SkeletonVariant {
    /// Sharp-cornered block. Dimensions in pixels; omitted width fills the
    /// container and omitted height sizes to content.
    Rectangular {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// Fully rounded block — a circle when width and height match.
    Circular {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// Block with slightly rounded corners, for buttons and chips.
    Rounded {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// Single line of placeholder text. Always fills the container width;
    /// height tracks `font_size` (defaults to 1rem).
    Text { font_size: Option<String> },
    /// Variant key from a dynamic source that matched nothing above. Renders
    /// best-effort with no corner radius; the component warns once per key.
    Unknown(String),
}

impl SkeletonVariant {
    /// Parse a variant key string, wrapping unrecognized keys in `Unknown`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "rectangular" => SkeletonVariant::Rectangular {
                width: None,
                height: None,
            },
            "circular" => SkeletonVariant::Circular {
                width: None,
                height: None,
            },
            "rounded" => SkeletonVariant::Rounded {
                width: None,
                height: None,
            },
            "text" => SkeletonVariant::Text { font_size: None },
            other => SkeletonVariant::Unknown(other.to_string()),
        }
    }

    /// Corner radius for this shape. `Unknown` has no mapping and emits no
    /// radius declaration at all.
    fn radius(&self) -> Option<&'static str> {
        match self {
            SkeletonVariant::Rectangular { .. } => Some("0"),
            SkeletonVariant::Circular { .. } => Some("50%"),
            SkeletonVariant::Rounded { .. } | SkeletonVariant::Text { .. } => Some("4px"),
            SkeletonVariant::Unknown(_) => None,
        }
    }
}

/// Temporal effect applied to the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonAnimation {
    /// Opacity fade on the base fill, 1.5s loop.
    #[default]
    Pulse,
    /// Diagonal light sweep over the base fill, 2s loop.
    Wave,
    /// Static fill, no animation.
    None,
}

impl SkeletonAnimation {
    /// Value for the `data-animation` attribute the stylesheet keys on.
    /// `None` attaches no attribute and therefore no animation.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            SkeletonAnimation::Pulse => Some("pulse"),
            SkeletonAnimation::Wave => Some("wave"),
            SkeletonAnimation::None => None,
        }
    }
}

/// Style values computed from a variant + color, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStyle {
    pub radius: Option<&'static str>,
    pub color: String,
    pub width: String,
    pub height: String,
}

impl DerivedStyle {
    /// Resolve the variant and optional color into concrete style values.
    pub fn derive(variant: &SkeletonVariant, color: Option<&str>) -> Self {
        let (width, height) = match variant {
            SkeletonVariant::Text { font_size } => (
                "100%".to_string(),
                font_size.clone().unwrap_or_else(|| "1rem".to_string()),
            ),
            SkeletonVariant::Rectangular { width, height }
            | SkeletonVariant::Circular { width, height }
            | SkeletonVariant::Rounded { width, height } => (
                width.map_or_else(|| "100%".to_string(), |w| format!("{w}px")),
                height.map_or_else(|| "auto".to_string(), |h| format!("{h}px")),
            ),
            SkeletonVariant::Unknown(_) => ("100%".to_string(), "auto".to_string()),
        };

        DerivedStyle {
            radius: variant.radius(),
            color: color.unwrap_or(DEFAULT_COLOR).to_string(),
            width,
            height,
        }
    }

    /// Custom-property declarations consumed by the component stylesheet.
    /// The radius declaration is absent for unknown variants.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::with_capacity(4);
        if let Some(radius) = self.radius {
            decls.push(("--skeleton-radius", radius.to_string()));
        }
        decls.push(("--skeleton-color", self.color.clone()));
        decls.push(("--skeleton-width", self.width.clone()));
        decls.push(("--skeleton-height", self.height.clone()));
        decls
    }
}

/// Layer caller overrides on top of the computed declarations.
///
/// Last write wins per property name: an override replaces the computed value
/// in place, and properties the derivation never produced are appended.
pub fn merge_declarations(
    computed: Vec<(&'static str, String)>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = computed
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    for (name, value) in overrides {
        if let Some(slot) = merged.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.clone();
        } else {
            merged.push((name.clone(), value.clone()));
        }
    }

    merged
}

/// Render merged declarations as an inline `style` attribute value.
pub fn style_attribute(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Once-per-key guard for the unrecognized-variant diagnostic.
///
/// Returns the key to warn about when the variant is `Unknown` and its key
/// differs from the one last warned about, so re-renders with an unchanged
/// key stay silent.
pub(crate) fn variant_warning<'a>(
    variant: &'a SkeletonVariant,
    last_warned: Option<&str>,
) -> Option<&'a str> {
    match variant {
        SkeletonVariant::Unknown(key) if last_warned != Some(key.as_str()) => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(width: Option<f64>, height: Option<f64>) -> SkeletonVariant {
        SkeletonVariant::Rectangular { width, height }
    }

    #[test]
    fn radius_table_is_exact() {
        let cases = [
            (SkeletonVariant::from_key("rectangular"), Some("0")),
            (SkeletonVariant::from_key("circular"), Some("50%")),
            (SkeletonVariant::from_key("rounded"), Some("4px")),
            (SkeletonVariant::from_key("text"), Some("4px")),
        ];
        for (variant, expected) in cases {
            assert_eq!(DerivedStyle::derive(&variant, None).radius, expected);
        }
    }

    #[test]
    fn text_defaults_to_one_rem() {
        let derived = DerivedStyle::derive(&SkeletonVariant::Text { font_size: None }, None);
        assert_eq!(derived.width, "100%");
        assert_eq!(derived.height, "1rem");
    }

    #[test]
    fn text_height_tracks_font_size() {
        let variant = SkeletonVariant::Text {
            font_size: Some("20px".to_string()),
        };
        let derived = DerivedStyle::derive(&variant, None);
        assert_eq!(derived.width, "100%");
        assert_eq!(derived.height, "20px");
    }

    #[test]
    fn block_defaults_fill_width_auto_height() {
        let derived = DerivedStyle::derive(&block(None, None), None);
        assert_eq!(derived.width, "100%");
        assert_eq!(derived.height, "auto");
    }

    #[test]
    fn block_dimensions_become_pixel_lengths() {
        let derived = DerivedStyle::derive(&block(Some(40.0), Some(40.0)), None);
        assert_eq!(derived.width, "40px");
        assert_eq!(derived.height, "40px");
    }

    #[test]
    fn color_defaults_to_neutral_gray() {
        let derived = DerivedStyle::derive(&block(None, None), None);
        assert_eq!(derived.color, "hsl(200, 20%, 95%)");

        let derived = DerivedStyle::derive(&block(None, None), Some("tomato"));
        assert_eq!(derived.color, "tomato");
    }

    #[test]
    fn unknown_variant_has_no_radius_declaration() {
        let variant = SkeletonVariant::from_key("blob");
        assert_eq!(
            variant,
            SkeletonVariant::Unknown("blob".to_string()),
            "unrecognized keys are preserved, not coerced"
        );

        let decls = DerivedStyle::derive(&variant, None).declarations();
        assert!(decls.iter().all(|(name, _)| *name != "--skeleton-radius"));
        assert_eq!(decls.len(), 3);
    }

    #[test]
    fn overrides_win_over_computed_values() {
        let derived = DerivedStyle::derive(&block(Some(40.0), None), None);
        let overrides = vec![("--skeleton-width".to_string(), "999px".to_string())];
        let merged = merge_declarations(derived.declarations(), &overrides);

        let width = merged.iter().find(|(n, _)| n == "--skeleton-width");
        assert_eq!(
            width,
            Some(&("--skeleton-width".to_string(), "999px".to_string()))
        );
        // The override replaced the slot rather than duplicating it.
        assert_eq!(
            merged
                .iter()
                .filter(|(n, _)| n == "--skeleton-width")
                .count(),
            1
        );
    }

    #[test]
    fn unrelated_overrides_are_appended() {
        let derived = DerivedStyle::derive(&block(None, None), None);
        let overrides = vec![("margin".to_string(), "4px".to_string())];
        let merged = merge_declarations(derived.declarations(), &overrides);
        assert_eq!(
            merged.last(),
            Some(&("margin".to_string(), "4px".to_string()))
        );
    }

    #[test]
    fn style_attribute_joins_declarations() {
        let decls = vec![
            ("--skeleton-width".to_string(), "100%".to_string()),
            ("--skeleton-height".to_string(), "auto".to_string()),
        ];
        assert_eq!(
            style_attribute(&decls),
            "--skeleton-width: 100%; --skeleton-height: auto;"
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        let variant = SkeletonVariant::Circular {
            width: Some(40.0),
            height: Some(40.0),
        };
        let first = DerivedStyle::derive(&variant, Some("rebeccapurple"));
        let second = DerivedStyle::derive(&variant, Some("rebeccapurple"));
        assert_eq!(first, second);
        assert_eq!(first.declarations(), second.declarations());
    }

    #[test]
    fn animation_attribute_values() {
        assert_eq!(SkeletonAnimation::Pulse.as_str(), Some("pulse"));
        assert_eq!(SkeletonAnimation::Wave.as_str(), Some("wave"));
        assert_eq!(SkeletonAnimation::None.as_str(), None);
        assert_eq!(SkeletonAnimation::default(), SkeletonAnimation::Pulse);
    }

    #[test]
    fn warning_fires_once_per_distinct_key() {
        let blob = SkeletonVariant::Unknown("blob".to_string());

        // First render with an unknown key warns.
        assert_eq!(variant_warning(&blob, None), Some("blob"));
        // Re-render with the same key stays silent.
        assert_eq!(variant_warning(&blob, Some("blob")), None);
        // A different unknown key warns again.
        let glob = SkeletonVariant::Unknown("glob".to_string());
        assert_eq!(variant_warning(&glob, Some("blob")), Some("glob"));
    }

    #[test]
    fn known_variants_never_warn() {
        let variant = SkeletonVariant::from_key("text");
        assert_eq!(variant_warning(&variant, None), None);
        assert_eq!(variant_warning(&variant, Some("blob")), None);
    }
}
