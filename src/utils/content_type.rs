use std::path::Path;

/// Guesses a content type from a filename, for drops and picks that carry
/// no mime information of their own.
pub fn guess_content_type(name: &str) -> String {
    mime_guess::from_path(Path::new(name))
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::guess_content_type;

    #[test]
    fn common_extensions_resolve() {
        assert_eq!(guess_content_type("photo.png"), "image/png");
        assert_eq!(guess_content_type("scan.jpeg"), "image/jpeg");
        assert_eq!(guess_content_type("report.pdf"), "application/pdf");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            guess_content_type("payload.xyzzy"),
            "application/octet-stream"
        );
    }
}
