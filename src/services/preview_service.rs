use quick_xml::escape::escape;
use uuid::Uuid;

use crate::{dao::models::SpriteEntity, error::ServiceError, state::SharedState};

/// Social-preview card dimensions, the conventional Open Graph size.
const CARD_WIDTH: u32 = 1200;
const CARD_HEIGHT: u32 = 630;

const NAME_MAX_CHARS: usize = 36;
const DESCRIPTION_MAX_CHARS: usize = 90;

/// Render the social-preview card for one sprite.
pub async fn sprite_preview(state: &SharedState, id: Uuid) -> Result<String, ServiceError> {
    let store = state.require_sprite_store().await?;
    let Some(sprite) = store.find_sprite(id, None).await? else {
        return Err(ServiceError::NotFound(format!("sprite `{id}` not found")));
    };
    Ok(render_card(&sprite))
}

/// Template the card as plain SVG text; every dynamic string is escaped.
fn render_card(sprite: &SpriteEntity) -> String {
    let name = escape(&truncate(&sprite.name, NAME_MAX_CHARS)).into_owned();
    let description =
        escape(&truncate(&sprite.description, DESCRIPTION_MAX_CHARS)).into_owned();
    let owner = escape(&sprite.owner.display_name).into_owned();
    let category = escape(&sprite.category).into_owned();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#0a0a0a"/>
      <stop offset="0.5" stop-color="#1a1a2e"/>
      <stop offset="1" stop-color="#16213e"/>
    </linearGradient>
  </defs>
  <rect width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="url(#bg)"/>
  <circle cx="240" cy="504" r="300" fill="#3b82f6" opacity="0.08"/>
  <circle cx="960" cy="126" r="300" fill="#10b981" opacity="0.08"/>
  <text x="80" y="120" font-family="sans-serif" font-size="28" fill="#94a3b8">{category}</text>
  <text x="80" y="220" font-family="sans-serif" font-size="72" font-weight="bold" fill="#f8fafc">{name}</text>
  <text x="80" y="290" font-family="sans-serif" font-size="32" fill="#cbd5e1">{description}</text>
  <text x="80" y="430" font-family="sans-serif" font-size="30" fill="#e2e8f0">by {owner}</text>
  <text x="80" y="520" font-family="sans-serif" font-size="30" fill="#3b82f6">{icon_count} icons · {download_count} downloads</text>
</svg>
"##,
        icon_count = sprite.icon_count,
        download_count = sprite.download_count,
    )
}

/// Cut `text` to `max_chars` characters, appending an ellipsis when trimmed.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::UserSummaryEntity;
    use std::time::SystemTime;

    fn sprite() -> SpriteEntity {
        SpriteEntity {
            id: Uuid::new_v4(),
            name: "Arrows <&> Co".into(),
            description: "Directional arrows".into(),
            category: "navigation".into(),
            tags: vec![],
            download_count: 12,
            owner: UserSummaryEntity {
                id: Uuid::new_v4(),
                username: "alice".into(),
                display_name: "Alice".into(),
            },
            icon_count: 4,
            favourite_count: 0,
            is_favourite: false,
            created_at: SystemTime::UNIX_EPOCH,
            updated_at: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn card_escapes_markup_in_names() {
        let card = render_card(&sprite());
        assert!(card.contains("Arrows &lt;&amp;&gt; Co"));
        assert!(!card.contains("Arrows <&> Co"));
    }

    #[test]
    fn card_shows_counters() {
        let card = render_card(&sprite());
        assert!(card.contains("4 icons · 12 downloads"));
        assert!(card.contains("width=\"1200\" height=\"630\""));
    }

    #[test]
    fn long_text_is_truncated() {
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
