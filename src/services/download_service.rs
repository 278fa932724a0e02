use crate::{
    dto::download::DownloadRequest,
    error::ServiceError,
    state::SharedState,
    svg::{
        slug::name_to_slug,
        sprite::{SpriteIcon, assemble_sprite},
    },
};

/// A generated sprite file ready to be served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFile {
    /// Attachment file name, slug plus `.svg`.
    pub filename: String,
    /// Combined sprite markup.
    pub content: String,
}

/// Build the downloadable sprite file described by `request`.
///
/// A persisted sprite (`id`) has its download counter bumped before the
/// icons are read; an ad-hoc request uses the supplied icons as-is.
pub async fn build_sprite_file(
    state: &SharedState,
    request: DownloadRequest,
) -> Result<SpriteFile, ServiceError> {
    let (name, icons) = match request.id {
        Some(id) => {
            let store = state.require_sprite_store().await?;
            let Some(sprite) = store.find_sprite(id, None).await? else {
                return Err(ServiceError::NotFound(format!("sprite `{id}` not found")));
            };

            store.increment_downloads(id).await?;

            let icons = store
                .sprite_icons(id)
                .await?
                .into_iter()
                .map(|icon| SpriteIcon {
                    name: icon.name,
                    svg: icon.svg,
                })
                .collect::<Vec<_>>();
            (sprite.name, icons)
        }
        None => {
            let icons = request
                .icons
                .unwrap_or_default()
                .into_iter()
                .map(|icon| SpriteIcon {
                    name: icon.name,
                    svg: icon.svg,
                })
                .collect::<Vec<_>>();
            if icons.is_empty() {
                return Err(ServiceError::InvalidInput(
                    "an ad-hoc download requires at least one icon".into(),
                ));
            }
            (request.name.unwrap_or_default(), icons)
        }
    };

    let content = assemble_sprite(&icons)?;
    Ok(SpriteFile {
        filename: format!("{}.svg", name_to_slug(&name)),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::sprite::IconInput;
    use crate::{config::AppConfig, state::AppState};

    #[tokio::test]
    async fn ad_hoc_download_needs_icons() {
        let state = AppState::new(AppConfig::default());
        let request = DownloadRequest {
            id: None,
            name: Some("Empty".into()),
            icons: Some(Vec::new()),
        };
        let result = build_sprite_file(&state, request).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn ad_hoc_download_assembles_without_storage() {
        let state = AppState::new(AppConfig::default());
        let request = DownloadRequest {
            id: None,
            name: Some("My Icons".into()),
            icons: Some(vec![IconInput {
                name: "dot".into(),
                svg: "<svg viewBox=\"0 0 1 1\"><circle r=\"1\"/></svg>".into(),
            }]),
        };
        let file = build_sprite_file(&state, request).await.unwrap();
        assert_eq!(file.filename, "my-icons.svg");
        assert!(file.content.contains("<symbol id=\"dot\""));
    }
}
