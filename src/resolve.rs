//! Image reference resolution.
//!
//! Turns the raw `src` of an image into a fetchable absolute URL, and derives
//! the file extension and content type used when re-hosting it.

/// Fallback extension for references without one
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Fallback MIME type for extensions outside the whitelist
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Prefix class of a reference, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceKind {
    /// `//cdn.example.com/a.png`
    ProtocolRelative,
    /// `http://...` or `https://...` (any `http` prefix)
    Absolute,
    /// `images/a.png`
    Bare,
}

impl ReferenceKind {
    fn classify(reference: &str) -> Self {
        if reference.starts_with("//") {
            ReferenceKind::ProtocolRelative
        } else if reference.starts_with("http") {
            ReferenceKind::Absolute
        } else {
            ReferenceKind::Bare
        }
    }
}

/// Returns true for `/path` references (but not `//host/path`)
fn is_host_relative(reference: &str) -> bool {
    reference.starts_with('/') && !reference.starts_with("//")
}

/// Resolves an image reference against the page's domain and protocol.
///
/// Host-relative references are joined onto `domain` first; the result is
/// then classified, so the outcome of the first rule feeds the others.
/// `protocol` is the literal `http://` or `https://` of the page itself.
pub fn resolve(reference: &str, domain: &str, protocol: &str) -> String {
    let candidate = if is_host_relative(reference) {
        format!("{}{}", domain, reference)
    } else {
        reference.to_string()
    };

    match ReferenceKind::classify(&candidate) {
        ReferenceKind::ProtocolRelative => format!("https:{}", candidate),
        ReferenceKind::Absolute => candidate,
        ReferenceKind::Bare => format!("{}{}", protocol, candidate),
    }
}

/// Infers the file extension of an image reference.
///
/// Query and fragment are dropped, then the text after the final `.` of the
/// last path segment is used. Falls back to [`DEFAULT_EXTENSION`].
pub fn image_extension(reference: &str) -> String {
    let without_suffix = reference
        .split(['#', '?'])
        .next()
        .unwrap_or(reference);
    let last_segment = without_suffix
        .rsplit('/')
        .next()
        .unwrap_or(without_suffix);

    match last_segment.rsplit_once('.') {
        Some((_, extension)) if !extension.trim().is_empty() => extension.trim().to_string(),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Maps an image extension to the content type used for storage
pub fn mime_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => DEFAULT_MIME_TYPE,
    }
}

/// Object-store key for a re-hosted image
pub fn object_key(website_id: &str, id: &str, extension: &str) -> String {
    format!("uploads/{}/images/{}.{}", website_id, id, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "https://www.example.com";

    #[test]
    fn test_bare_references_get_page_protocol() {
        for reference in ["a.jpg", "img/a.jpg", "cdn.example.com/x.png", "?x=1"] {
            assert_eq!(
                resolve(reference, DOMAIN, "http://"),
                format!("http://{}", reference)
            );
            assert_eq!(
                resolve(reference, DOMAIN, "https://"),
                format!("https://{}", reference)
            );
        }
    }

    #[test]
    fn test_host_relative_references_get_domain() {
        for reference in ["/a.jpg", "/static/img/logo.png?v=2", "/"] {
            assert_eq!(
                resolve(reference, DOMAIN, "http://"),
                format!("{}{}", DOMAIN, reference)
            );
        }
    }

    #[test]
    fn test_protocol_relative_references_get_https() {
        for reference in ["//cdn.example.com/a.jpg", "//x"] {
            assert_eq!(
                resolve(reference, DOMAIN, "http://"),
                format!("https:{}", reference)
            );
        }
    }

    #[test]
    fn test_absolute_references_are_fixed_points() {
        for reference in ["http://a.com/x.png", "https://b.org/y.gif?z=1"] {
            let resolved = resolve(reference, DOMAIN, "http://");
            assert_eq!(resolved, reference);
            assert_eq!(resolve(&resolved, DOMAIN, "http://"), resolved);
        }
    }

    #[test]
    fn test_resolved_urls_carry_a_scheme() {
        for reference in ["a.jpg", "/a.jpg", "//a.com/a.jpg", "https://a.com/a.jpg"] {
            let resolved = resolve(reference, DOMAIN, "https://");
            assert!(
                resolved.starts_with("http://") || resolved.starts_with("https://"),
                "{} resolved to {}",
                reference,
                resolved
            );
        }
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("foo/bar.png?x=1"), "png");
        assert_eq!(image_extension("foo/bar"), "jpg");
        assert_eq!(image_extension("https://a.com/photo.jpeg#top"), "jpeg");
        assert_eq!(image_extension("a.dir/file"), "jpg");
        assert_eq!(image_extension("archive.tar.gif"), "gif");
        assert_eq!(image_extension("trailing."), "jpg");
        assert_eq!(image_extension(""), "jpg");
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("jpg"), "image/jpeg");
        assert_eq!(mime_type("jpeg"), "image/jpeg");
        assert_eq!(mime_type("png"), "image/png");
        assert_eq!(mime_type("PNG"), "image/png");
        assert_eq!(mime_type("gif"), "image/gif");
        assert_eq!(mime_type("webp"), "image/jpeg");
    }

    #[test]
    fn test_object_key() {
        assert_eq!(
            object_key("site-1", "abc", "png"),
            "uploads/site-1/images/abc.png"
        );
    }
}
