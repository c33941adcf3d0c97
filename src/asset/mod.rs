//! Asset selection module
//!
//! This module decides which of a release's files is published as the
//! update package for that release.

mod picker;

pub use picker::{AssetPicker, ExtensionPriorityPicker};
