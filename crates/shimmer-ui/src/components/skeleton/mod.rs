mod component;
mod style;

pub use component::Skeleton;
pub use style::{
    merge_declarations, style_attribute, DerivedStyle, SkeletonAnimation, SkeletonVariant,
};
