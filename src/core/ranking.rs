use crate::core::geo::distance_km;
use crate::domain::model::{Artisan, Category, GeoPoint, RankedArtisan};

/// Filters `records` to `category`, attaches the distance from `origin` and
/// orders the result nearest first.
///
/// The sort is stable: equal distances keep the order in which the records
/// were supplied. The input slice is left untouched.
pub fn rank_by_proximity(
    records: &[Artisan],
    category: Category,
    origin: GeoPoint,
) -> Vec<RankedArtisan> {
    let mut ranked: Vec<RankedArtisan> = records
        .iter()
        .filter(|artisan| artisan.category == category)
        .map(|artisan| RankedArtisan {
            distance_km: distance_km(origin, artisan.location.point()),
            artisan: artisan.clone(),
        })
        .collect();

    ranked.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    ranked
}

/// Same as [`rank_by_proximity`] but takes a raw category id. Unknown ids
/// match nothing and yield an empty list.
pub fn rank_by_category_id(
    records: &[Artisan],
    category_id: &str,
    origin: GeoPoint,
) -> Vec<RankedArtisan> {
    match Category::from_id(category_id) {
        Some(category) => rank_by_proximity(records, category, origin),
        None => {
            tracing::debug!("Unknown category '{}', nothing to rank", category_id);
            Vec::new()
        }
    }
}
