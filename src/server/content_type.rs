//! Content type by file extension.

use std::path::Path;

/// Fallback for every extension not listed below, including none at all.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Content type for a served file. Extensions match case-sensitively.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type_for(Path::new("styles.css")), "text/css");
        assert_eq!(content_type_for(Path::new("js/app.js")), "text/javascript");
        assert_eq!(content_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
    }

    #[test]
    fn everything_else_is_html() {
        assert_eq!(content_type_for(Path::new("index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("font.woff2")), "text/html");
        assert_eq!(content_type_for(Path::new("README")), "text/html");
        assert_eq!(content_type_for(Path::new("PHOTO.JPG")), "text/html");
    }
}
