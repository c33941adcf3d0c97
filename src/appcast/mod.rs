//! Appcast construction: turns releases into feed items and renders the
//! Sparkle feed document.

mod date;
mod version;
mod xml;

use log::{debug, warn};

use crate::asset::AssetPicker;
use crate::source::SourceRelease;

pub use date::iso_to_rfc2822;
pub use version::extract_version;
pub use xml::{DUBLIN_CORE_NAMESPACE, SPARKLE_NAMESPACE, escape, render_feed};

/// One `<item>` of the appcast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedItem {
    pub title: String,
    pub notes_url: String,
    /// RFC 2822 date, empty when the release carries no timestamp
    pub pub_date: String,
    pub download_url: String,
    /// Asset size in bytes
    pub length: String,
    pub version: String,
}

impl FeedItem {
    /// Builds the item for a release, or `None` when no asset qualifies.
    pub fn from_release(release: &SourceRelease, picker: &dyn AssetPicker) -> Option<Self> {
        let asset = picker.pick(&release.assets)?;

        let pub_date = match release.timestamp() {
            Some(timestamp) => iso_to_rfc2822(timestamp).unwrap_or_else(|e| {
                warn!("Leaving pubDate empty for {}: {:#}", release.title(), e);
                String::new()
            }),
            None => String::new(),
        };

        Some(FeedItem {
            title: release.title().to_string(),
            notes_url: release.notes_url.clone().unwrap_or_default(),
            pub_date,
            download_url: asset.download_url.clone(),
            length: asset.size.to_string(),
            version: extract_version(release.tag.as_deref()),
        })
    }
}

/// Builds one item per release that has a qualifying asset, in release order.
#[tracing::instrument(skip_all)]
pub fn build_items(releases: &[SourceRelease], picker: &dyn AssetPicker) -> Vec<FeedItem> {
    releases
        .iter()
        .filter_map(|release| {
            let item = FeedItem::from_release(release, picker);
            if item.is_none() {
                debug!(
                    "Skipping release {:?}: no .zip, .dmg or .pkg asset",
                    release.tag.as_deref().unwrap_or_default()
                );
            }
            item
        })
        .collect()
}
