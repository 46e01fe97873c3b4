use crate::models::{Profile, ProfileDraft};

/// Avatar service used when a profile has no uploaded image
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://i.pravatar.cc/400";

/// Split comma-delimited text into trimmed, non-empty segments in order
pub fn split_delimited(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deterministic avatar URL derived from the musician's name
pub fn placeholder_image(name: &str) -> String {
    format!("{}?u={}", PLACEHOLDER_IMAGE_BASE, urlencoding::encode(name))
}

/// Build a profile from a draft under the given identifier
///
/// `fallback_image` is used when the draft carries no image; without one the
/// name-derived placeholder is used.
pub fn profile_from_draft(id: String, draft: ProfileDraft, fallback_image: Option<String>) -> Profile {
    let image = match draft.image() {
        Some(image) => image.to_string(),
        None => fallback_image.unwrap_or_else(|| placeholder_image(&draft.name)),
    };

    Profile {
        id,
        instruments: split_delimited(&draft.instruments),
        genres: split_delimited(&draft.genres),
        name: draft.name,
        location: draft.location,
        bio: draft.bio,
        email: draft.email,
        portfolio: draft.portfolio,
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(image: Option<&str>) -> ProfileDraft {
        ProfileDraft {
            name: "João Silva".to_string(),
            location: "Salvador, BA".to_string(),
            instruments: "Guitar,, Cavaquinho ".to_string(),
            genres: " Samba ".to_string(),
            bio: "Sambista.".to_string(),
            email: "joao@example.com".to_string(),
            portfolio: "https://example.com/joao".to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_split_trims_and_drops_empty_segments() {
        assert_eq!(split_delimited(" Sax, Clarinet ,  "), vec!["Sax", "Clarinet"]);
        assert_eq!(split_delimited(""), Vec::<String>::new());
        assert_eq!(split_delimited(",,"), Vec::<String>::new());
        assert_eq!(split_delimited("Drums"), vec!["Drums"]);
    }

    #[test]
    fn test_placeholder_is_url_encoded() {
        assert_eq!(
            placeholder_image("Leo Chen"),
            "https://i.pravatar.cc/400?u=Leo%20Chen"
        );
    }

    #[test]
    fn test_profile_from_draft_uses_placeholder() {
        let profile = profile_from_draft("42".to_string(), draft(None), None);

        assert_eq!(profile.id, "42");
        assert_eq!(profile.instruments, vec!["Guitar", "Cavaquinho"]);
        assert_eq!(profile.genres, vec!["Samba"]);
        assert_eq!(profile.image, placeholder_image("João Silva"));
    }

    #[test]
    fn test_profile_from_draft_image_precedence() {
        let uploaded = profile_from_draft(
            "1".to_string(),
            draft(Some("data:image/png;base64,AAAA")),
            Some("https://old.example.com/a.png".to_string()),
        );
        assert_eq!(uploaded.image, "data:image/png;base64,AAAA");

        let kept = profile_from_draft(
            "1".to_string(),
            draft(Some("  ")),
            Some("https://old.example.com/a.png".to_string()),
        );
        assert_eq!(kept.image, "https://old.example.com/a.png");
    }
}
