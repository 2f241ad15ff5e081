//! # Asset Screening
//!
//! List filtering and top-movers ranking for the catalog views.

use crate::domain::entities::asset::AssetRecord;
use crate::domain::value_objects::AssetCategory;

/// Filters a list by search text and category.
///
/// A record matches iff its name or symbol contains `search_text`
/// case-insensitively AND its category matches the filter (`All` matches
/// everything). An empty search matches every record.
#[must_use]
pub fn filter<'a>(
    assets: &'a [AssetRecord],
    search_text: &str,
    category: AssetCategory,
) -> Vec<&'a AssetRecord> {
    let needle = search_text.trim().to_lowercase();
    assets
        .iter()
        .filter(|asset| {
            let matches_search = needle.is_empty()
                || asset.name().to_lowercase().contains(&needle)
                || asset.symbol().as_str().to_lowercase().contains(&needle);
            matches_search && category.matches(asset.category())
        })
        .collect()
}

/// Returns the `n` biggest positive movers.
///
/// Only records with a positive change qualify. Results are sorted by change
/// percent descending; the sort is stable, so original list order breaks
/// ties.
#[must_use]
pub fn top_movers(assets: &[AssetRecord], n: usize) -> Vec<&AssetRecord> {
    let mut movers: Vec<&AssetRecord> = assets
        .iter()
        .filter(|asset| asset.is_positive_change())
        .collect();
    movers.sort_by(|a, b| b.change_percent().cmp(&a.change_percent()));
    movers.truncate(n);
    movers
}
