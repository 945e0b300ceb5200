//! Splitting a document into slide bodies.

/// Literal token separating slides
pub const SLIDE_DELIMITER: &str = "---";

/// Split a document on every occurrence of [`SLIDE_DELIMITER`].
///
/// Segments are returned untrimmed; empty leading or trailing segments are
/// kept, so `k` delimiters always yield `k + 1` slides.
pub fn split_slides(text: &str) -> Vec<&str> {
    text.split(SLIDE_DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiter_is_one_slide() {
        let doc = "# Only\n\nbody - with -- dashes\n";
        assert_eq!(split_slides(doc), vec![doc]);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(split_slides(""), vec![""]);
    }

    #[test]
    fn test_segment_count_and_round_trip() {
        let doc = "---\ntitle: A\n---\ntitle: B\n---";
        let parts = split_slides(doc);
        assert_eq!(parts.len(), doc.matches(SLIDE_DELIMITER).count() + 1);
        assert_eq!(parts, vec!["", "\ntitle: A\n", "\ntitle: B\n", ""]);
        assert_eq!(parts.join(SLIDE_DELIMITER), doc);
    }

    #[test]
    fn test_delimiter_inside_line() {
        // Matched anywhere, not just on a line of its own
        assert_eq!(split_slides("a---b"), vec!["a", "b"]);
        assert_eq!(split_slides("----"), vec!["", "-"]);
    }
}
