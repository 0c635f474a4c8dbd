use chrono::NaiveDateTime;

/// Fallback cover used whenever an event has no usable image.
pub const DEFAULT_COVER_IMAGE: &str = "/api/images/covers/test.jpg";
pub const COVER_IMAGE_PREFIX: &str = "/api/images/covers/";
pub const LEGACY_COVER_IMAGE_PREFIX: &str = "/api/files/covers/";

#[derive(Debug, Default, PartialEq, Clone)]
pub struct CoverImage {
    pub id: i64,
    pub event_id: i64,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Maps a stored cover image path onto its public URL.
///
/// Absolute URLs and already-canonical paths pass through, the legacy
/// `/api/files/covers/` prefix is rewritten, and anything else is treated as
/// a file name under the canonical prefix. Missing or empty input yields
/// [`DEFAULT_COVER_IMAGE`].
pub fn normalize_image_url(raw: Option<&str>) -> String {
    let Some(raw) =
        raw.filter(|raw| !raw.is_empty() && *raw != DEFAULT_COVER_IMAGE)
    else {
        return DEFAULT_COVER_IMAGE.to_string();
    };

    if raw.starts_with("http://")
        || raw.starts_with("https://")
        || raw.starts_with(COVER_IMAGE_PREFIX)
    {
        return raw.to_string();
    }

    if let Some(rest) = raw.strip_prefix(LEGACY_COVER_IMAGE_PREFIX) {
        return format!("{COVER_IMAGE_PREFIX}{rest}");
    }

    format!("{COVER_IMAGE_PREFIX}{raw}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_and_sentinel_fall_back_to_default() {
        assert_eq!(normalize_image_url(None), DEFAULT_COVER_IMAGE);
        assert_eq!(normalize_image_url(Some("")), DEFAULT_COVER_IMAGE);
        assert_eq!(
            normalize_image_url(Some(DEFAULT_COVER_IMAGE)),
            DEFAULT_COVER_IMAGE
        );
    }

    #[test]
    fn test_absolute_and_canonical_pass_through() {
        assert_eq!(
            normalize_image_url(Some("https://cdn.example.com/x.png")),
            "https://cdn.example.com/x.png"
        );
        assert_eq!(
            normalize_image_url(Some("http://cdn.example.com/x.png")),
            "http://cdn.example.com/x.png"
        );
        assert_eq!(
            normalize_image_url(Some("/api/images/covers/b.png")),
            "/api/images/covers/b.png"
        );
    }

    #[test]
    fn test_legacy_prefix_is_rewritten() {
        assert_eq!(
            normalize_image_url(Some("/api/files/covers/a.jpg")),
            "/api/images/covers/a.jpg"
        );
        assert_eq!(
            normalize_image_url(Some("/api/files/covers/2024/a.jpg")),
            "/api/images/covers/2024/a.jpg"
        );
    }

    #[test]
    fn test_bare_file_name_gets_prefix() {
        assert_eq!(
            normalize_image_url(Some("a.jpg")),
            "/api/images/covers/a.jpg"
        );
        assert_eq!(
            normalize_image_url(Some("not a url ://")),
            "/api/images/covers/not a url ://"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        // Arrange
        let inputs = [
            None,
            Some(""),
            Some(DEFAULT_COVER_IMAGE),
            Some("https://cdn.example.com/x.png"),
            Some("http://cdn.example.com/x.png"),
            Some("/api/images/covers/b.png"),
            Some("/api/files/covers/a.jpg"),
            Some("/api/files/covers/"),
            Some("a.jpg"),
            Some("/uploads/c.jpg"),
        ];

        for input in inputs {
            // Act
            let once = normalize_image_url(input);
            let twice = normalize_image_url(Some(&once));

            // Assert
            assert_eq!(once, twice, "input: {:?}", input);
        }
    }
}
