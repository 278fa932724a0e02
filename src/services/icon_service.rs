use crate::{
    dao::models::IconFilter,
    dto::{
        common::PageMeta,
        icon::{ExtractRequest, ExtractResponse, IconListQuery, IconListResponse},
    },
    error::ServiceError,
    state::SharedState,
    svg::sprite::extract_symbols,
};

/// Page through the global icon search.
pub async fn list_icons(
    state: &SharedState,
    query: IconListQuery,
) -> Result<IconListResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let config = state.config();

    let page = config.clamp_page(query.page);
    let page_size = config.clamp_page_size(query.page_size);

    let filter = IconFilter {
        search: query.search.filter(|value| !value.is_empty()),
        page,
        page_size,
        sort_by: query.sort_by.unwrap_or_default().into(),
        sort_order: query.sort_order.unwrap_or_default().into(),
    };

    let result = store.list_icons(filter).await?;
    let meta = PageMeta::from_page(page, page_size, &result);
    Ok(IconListResponse {
        icons: result.items.into_iter().map(Into::into).collect(),
        meta,
    })
}

/// Split uploaded sprite markup into standalone icons.
///
/// Purely computational; the icons are only persisted once the client turns
/// them into a sprite upload.
pub fn extract_icons(
    state: &SharedState,
    request: ExtractRequest,
) -> Result<ExtractResponse, ServiceError> {
    let max_bytes = state.config().max_svg_bytes();
    if request.svg.len() > max_bytes {
        return Err(ServiceError::InvalidInput(format!(
            "sprite markup exceeds the {max_bytes} byte limit"
        )));
    }

    let icons = extract_symbols(&request.svg)?;
    Ok(ExtractResponse {
        icons: icons.into_iter().map(Into::into).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};

    #[test]
    fn extraction_rejects_oversized_markup() {
        let state = AppState::new(AppConfig::default());
        let request = ExtractRequest {
            svg: format!(
                "<svg>{}</svg>",
                "x".repeat(state.config().max_svg_bytes() + 1)
            ),
        };
        assert!(matches!(
            extract_icons(&state, request),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn extraction_splits_symbols() {
        let state = AppState::new(AppConfig::default());
        let request = ExtractRequest {
            svg: "<svg><symbol id=\"a\"><path d=\"M0 0\"/></symbol>\
                  <symbol id=\"b\"><path d=\"M1 1\"/></symbol></svg>"
                .into(),
        };
        let response = extract_icons(&state, request).unwrap();
        assert_eq!(response.icons.len(), 2);
        assert_eq!(response.icons[0].name, "a");
    }
}
