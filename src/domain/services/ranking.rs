//! Top-N selection
//!
//! The one ranking primitive behind every "most ..." query: take keyed scores,
//! sort them descending with a stable sort, and keep the first `n` keys.
//! Keys with equal scores keep their input order.

use std::cmp::Ordering;

use crate::error::{CatalogError, CatalogResult};

/// Return the `n` keys with the highest scores, best first.
///
/// `n` must be at least 1; zero or negative sizes are an error rather than an
/// empty list. The result holds `min(n, len)` keys.
pub fn top_n<K, S>(scores: impl IntoIterator<Item = (K, S)>, n: i64) -> CatalogResult<Vec<K>>
where
    S: PartialOrd,
{
    let limit = rank_size(n)?;

    let mut ranked: Vec<(K, S)> = scores.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    Ok(ranked.into_iter().map(|(key, _)| key).collect())
}

/// Single best key, `None` when there are no scores.
pub fn top_one<K, S>(scores: impl IntoIterator<Item = (K, S)>) -> Option<K>
where
    S: PartialOrd,
{
    top_n(scores, 1).ok().and_then(|keys| keys.into_iter().next())
}

fn rank_size(n: i64) -> CatalogResult<usize> {
    match usize::try_from(n) {
        Ok(size) if size > 0 => Ok(size),
        _ => {
            tracing::warn!(n, "ranking size must be a positive integer");
            Err(CatalogError::InvalidRankSize { n })
        }
    }
}
