use crate::source::ReleaseAsset;

/// Update package extensions, most preferred first.
const EXTENSION_PRIORITY: [&str; 3] = [".zip", ".dmg", ".pkg"];

/// Trait for selecting an asset from a list of available assets
pub trait AssetPicker: Send + Sync {
    /// Pick the most appropriate asset from the given list
    ///
    /// Returns `None` if no suitable asset is found
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset>;
}

/// Picks the asset whose extension ranks best in `.zip`, `.dmg`, `.pkg`.
///
/// Matching is case-insensitive. Among assets of the same rank the first one
/// listed wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionPriorityPicker;

impl ExtensionPriorityPicker {
    pub fn new() -> Self {
        Self
    }

    /// Rank of the first extension the name ends with (lower is better)
    fn rank(&self, name: &str) -> Option<usize> {
        let name_lower = name.to_lowercase();
        EXTENSION_PRIORITY
            .iter()
            .position(|ext| name_lower.ends_with(ext))
    }
}

impl AssetPicker for ExtensionPriorityPicker {
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        let mut best: Option<(usize, &'a ReleaseAsset)> = None;

        for asset in assets {
            let Some(rank) = self.rank(&asset.name) else {
                continue;
            };
            // Strictly lower: the first asset of a given rank is kept
            if best.is_none_or(|(best_rank, _)| rank < best_rank) {
                best = Some((rank, asset));
            }
        }

        best.map(|(_, asset)| asset)
    }
}
