/// Fallback used when a name slugs down to nothing.
const DEFAULT_SLUG: &str = "sprite";

/// Turn a display name into a file/symbol-safe slug: lowercase, spaces to
/// dashes, anything outside `[a-z0-9-]` dropped, dash runs collapsed.
pub fn name_to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        } else if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        DEFAULT_SLUG.to_owned()
    } else {
        slug
    }
}

/// Inverse display helper: dashes to spaces, each word capitalized.
pub fn slug_to_title(slug: &str) -> String {
    let title = slug
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        "Sprite".to_owned()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_mixed_input() {
        assert_eq!(name_to_slug("Social Media Icons"), "social-media-icons");
        assert_eq!(name_to_slug("  UI / UX  kit  "), "ui-ux-kit");
        assert_eq!(name_to_slug("Éclair & Friends!"), "clair-friends");
    }

    #[test]
    fn collapses_dash_runs() {
        assert_eq!(name_to_slug("a -- b"), "a-b");
        assert_eq!(name_to_slug("--a--"), "a");
    }

    #[test]
    fn falls_back_on_empty() {
        assert_eq!(name_to_slug(""), "sprite");
        assert_eq!(name_to_slug("!!!"), "sprite");
    }

    #[test]
    fn titles_from_slugs() {
        assert_eq!(slug_to_title("social-media-icons"), "Social Media Icons");
        assert_eq!(slug_to_title(""), "Sprite");
    }
}
