use crate::api::Organization;

/// Normalize a slug typed by the user: trimmed and lower-cased.
///
/// Returns `None` when nothing is left.
pub fn normalize_slug_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive slug equality.
pub fn slugs_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn org_exists(slug: &str, orgs: &[Organization]) -> bool {
    orgs.iter().any(|org| slugs_match(&org.slug, slug))
}

/// First organization whose slug matches `slug` case-insensitively.
pub fn find_by_slug<'a>(slug: &str, orgs: &'a [Organization]) -> Option<&'a Organization> {
    orgs.iter().find(|org| slugs_match(&org.slug, slug))
}
