use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dao::models::{PageEntity, SortOrder, UserSummaryEntity};
use uuid::Uuid;

/// Pagination envelope returned next to every listed collection.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct PageMeta {
    /// 1-based page number that was served.
    pub page: u64,
    /// Number of rows per page.
    pub page_size: u64,
    /// Total rows matching the filter.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether another page exists after this one.
    pub has_more: bool,
}

impl PageMeta {
    /// Compute the envelope for one served page.
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_more: page < total_pages,
        }
    }

    /// Build the envelope straight from a storage page.
    pub fn from_page<T>(page: u64, page_size: u64, entity: &PageEntity<T>) -> Self {
        Self::new(page, page_size, entity.total)
    }
}

/// Plain page/size query used by feeds without extra filters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default 1).
    pub page: Option<u64>,
    /// Rows per page (default and cap are configuration driven).
    pub page_size: Option<u64>,
}

/// Sort direction accepted in query strings.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrderParam {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl From<SortOrderParam> for SortOrder {
    fn from(value: SortOrderParam) -> Self {
        match value {
            SortOrderParam::Asc => SortOrder::Asc,
            SortOrderParam::Desc => SortOrder::Desc,
        }
    }
}

/// Owner projection shown next to sprites and icons.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct UserSummary {
    /// Stable identifier of the user.
    pub id: Uuid,
    /// Login handle.
    pub username: String,
    /// Name shown in listings.
    pub display_name: String,
}

impl From<UserSummaryEntity> for UserSummary {
    fn from(value: UserSummaryEntity) -> Self {
        Self {
            id: value.id,
            username: value.username,
            display_name: value.display_name,
        }
    }
}

/// Split a comma-separated query value into trimmed, non-empty entries.
pub fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_counts_pages() {
        let meta = PageMeta::new(1, 20, 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_more);

        let last = PageMeta::new(3, 20, 45);
        assert!(!last.has_more);
    }

    #[test]
    fn meta_handles_empty_results() {
        let meta = PageMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_more);
    }

    #[test]
    fn csv_splitting_trims_and_drops_blanks() {
        assert_eq!(split_csv(Some("ui, arrows ,,")), vec!["ui", "arrows"]);
        assert!(split_csv(None).is_empty());
        assert!(split_csv(Some("")).is_empty());
    }
}
