use dioxus::prelude::*;

use super::style::{
    merge_declarations, style_attribute, variant_warning, DerivedStyle, SkeletonAnimation,
    SkeletonVariant,
};

/// A loading placeholder that mirrors the shape of the content it stands in
/// for. Callers decide when to show or hide it; the component only renders.
///
/// Style values are exposed as custom properties on the element, so any of
/// them can be replaced through `overrides` without touching variant logic.
#[component]
pub fn Skeleton(
    variant: SkeletonVariant,
    #[props(default)] animation: SkeletonAnimation,
    #[props(into, default)] color: Option<String>,
    #[props(default)] overrides: Vec<(String, String)>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    // Unrecognized variant keys degrade to an unstyled radius instead of
    // failing the caller's tree. Warn once per distinct key per instance.
    let mut warned = use_signal(|| None::<String>);
    let last_warned: Option<String> = (*warned.peek()).clone();
    if let Some(key) = variant_warning(&variant, last_warned.as_deref()) {
        tracing::warn!(variant = %key, "unrecognized skeleton variant");
        let key = key.to_string();
        warned.set(Some(key));
    }

    let derived = DerivedStyle::derive(&variant, color.as_deref());
    let style = style_attribute(&merge_declarations(derived.declarations(), &overrides));

    let mut base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("style", style, None, false),
    ];
    if let Some(mode) = animation.as_str() {
        base.push(Attribute::new("data-animation", mode, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}
