use indexmap::IndexMap;

use crate::{
    dto::taxonomy::{CategoriesResponse, PopularTagsResponse},
    error::ServiceError,
    state::SharedState,
};

/// Distinct sprite categories in ascending order.
pub async fn list_categories(state: &SharedState) -> Result<CategoriesResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let categories = store.list_categories().await?;
    Ok(CategoriesResponse { categories })
}

/// Tags ranked by the number of sprites carrying them.
///
/// Counting happens here rather than in SQL because tags live in a JSON
/// column; the catalogue is small enough that one pass over the tag rows is
/// the simplest correct ranking.
pub async fn popular_tags(state: &SharedState) -> Result<PopularTagsResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let rows = store.sprite_tag_rows().await?;

    let tags = rank_tags(rows, state.config().popular_tag_limit());
    Ok(PopularTagsResponse { tags })
}

/// Count tag occurrences and keep the `limit` most frequent ones; ties keep
/// first-seen order thanks to the insertion-ordered map and stable sort.
fn rank_tags(rows: Vec<Vec<String>>, limit: usize) -> Vec<String> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for tags in rows {
        for tag in tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked.into_iter().map(|(tag, _)| tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_then_first_seen() {
        let rows = vec![
            vec!["ui".into(), "arrows".into()],
            vec!["ui".into(), "social".into()],
            vec!["arrows".into(), "ui".into()],
        ];
        let ranked = rank_tags(rows, 10);
        assert_eq!(ranked, vec!["ui", "arrows", "social"]);
    }

    #[test]
    fn truncates_to_limit() {
        let rows = vec![vec!["a".into(), "b".into(), "c".into()]];
        assert_eq!(rank_tags(rows, 2).len(), 2);
    }

    #[test]
    fn empty_catalogue_has_no_tags() {
        assert!(rank_tags(Vec::new(), 20).is_empty());
    }
}
