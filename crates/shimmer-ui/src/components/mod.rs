pub mod skeleton;

// Re-exports for convenience
pub use skeleton::*;
