use dioxus::prelude::*;
use shimmer_ui::{Skeleton, SkeletonAnimation, SkeletonVariant};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Catalog {}
    }
}

/// One page of sections exercising the skeleton's public prop surface.
#[component]
fn Catalog() -> Element {
    rsx! {
        main { class: "catalog",
            h1 { "Skeleton" }
            p { class: "lede", "A placeholder preview for content that is loading." }

            section {
                h3 { "Text" }
                p { "Used for text content like paragraphs and titles." }
                Skeleton {
                    variant: SkeletonVariant::Text { font_size: Some("16px".to_string()) },
                }
            }

            section {
                h3 { "Circular" }
                p { "Avatars, icons, and profile pictures." }
                div { class: "row",
                    for size in [40.0, 60.0, 80.0] {
                        Skeleton {
                            variant: SkeletonVariant::Circular {
                                width: Some(size),
                                height: Some(size),
                            },
                        }
                    }
                }
            }

            section {
                h3 { "Rectangular" }
                p { "Cards, images, and content blocks." }
                Skeleton {
                    variant: SkeletonVariant::Rectangular {
                        width: None,
                        height: Some(120.0),
                    },
                }
            }

            section {
                h3 { "Rounded" }
                p { "Buttons, chips, and elements with rounded corners." }
                div { class: "row",
                    for width in [100.0, 120.0, 80.0] {
                        Skeleton {
                            variant: SkeletonVariant::Rounded {
                                width: Some(width),
                                height: Some(36.0),
                            },
                        }
                    }
                }
            }

            section {
                h3 { "Animation modes" }
                p { "Pulse (default), wave, and none." }
                div { class: "row",
                    Skeleton {
                        variant: SkeletonVariant::Rounded {
                            width: Some(140.0),
                            height: Some(48.0),
                        },
                        animation: SkeletonAnimation::Pulse,
                    }
                    Skeleton {
                        variant: SkeletonVariant::Rounded {
                            width: Some(140.0),
                            height: Some(48.0),
                        },
                        animation: SkeletonAnimation::Wave,
                    }
                    Skeleton {
                        variant: SkeletonVariant::Rounded {
                            width: Some(140.0),
                            height: Some(48.0),
                        },
                        animation: SkeletonAnimation::None,
                    }
                }
            }

            section {
                h3 { "Color and overrides" }
                p { "A custom base color, and an override replacing the derived width." }
                div { class: "row",
                    Skeleton {
                        variant: SkeletonVariant::Circular {
                            width: Some(60.0),
                            height: Some(60.0),
                        },
                        color: "hsl(260, 40%, 90%)",
                    }
                    Skeleton {
                        variant: SkeletonVariant::Rounded {
                            width: Some(80.0),
                            height: Some(36.0),
                        },
                        overrides: vec![("--skeleton-width".to_string(), "220px".to_string())],
                    }
                }
            }
        }
    }
}
