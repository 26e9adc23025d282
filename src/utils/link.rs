//! RFC 8288 `Link` header parsing for cursor pagination.

/// Extract the `rel="next"` target from a `Link` header value.
///
/// Entries look like `<https://host/path?page=2>; rel="next"` and are
/// comma separated. Entries without an angle-bracketed target are skipped.
pub fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let target = target.strip_prefix('<')?.strip_suffix('>')?.trim();
        if target.is_empty() {
            return None;
        }

        parts
            .any(is_next_relation)
            .then(|| target.to_string())
    })
}

fn is_next_relation(param: &str) -> bool {
    let Some((key, value)) = param.split_once('=') else {
        return false;
    };
    if !key.trim().eq_ignore_ascii_case("rel") {
        return false;
    }
    value
        .trim()
        .trim_matches('"')
        .split_ascii_whitespace()
        .any(|rel| rel.eq_ignore_ascii_case("next"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS_HEADER: &str = concat!(
        r#"<https://lms.example.edu/api/v1/courses/1/users?page=1&per_page=100>; rel="current","#,
        r#"<https://lms.example.edu/api/v1/courses/1/users?page=2&per_page=100>; rel="next","#,
        r#"<https://lms.example.edu/api/v1/courses/1/users?page=1&per_page=100>; rel="first","#,
        r#"<https://lms.example.edu/api/v1/courses/1/users?page=3&per_page=100>; rel="last""#,
    );

    #[test]
    fn test_selects_next_entry() {
        assert_eq!(
            next_link(CANVAS_HEADER).as_deref(),
            Some("https://lms.example.edu/api/v1/courses/1/users?page=2&per_page=100")
        );
    }

    #[test]
    fn test_no_next_on_last_page() {
        let header = r#"<https://x.test/a?page=3>; rel="current", <https://x.test/a?page=1>; rel="first""#;
        assert_eq!(next_link(header), None);
        assert_eq!(next_link(""), None);
    }

    #[test]
    fn test_relation_must_equal_next() {
        // "nextish" and "prev" are different relations
        let header = r#"<https://x.test/a?page=9>; rel="nextish", <https://x.test/a?page=1>; rel="prev""#;
        assert_eq!(next_link(header), None);
    }

    #[test]
    fn test_skips_malformed_entries() {
        let header = r#"garbage; rel="next", <>; rel="next", <https://x.test/a?page=2>; rel=next"#;
        assert_eq!(next_link(header).as_deref(), Some("https://x.test/a?page=2"));
    }

    #[test]
    fn test_accepts_multiple_relation_tokens() {
        let header = r#"<https://x.test/a?page=2>; title="more"; rel="next last""#;
        assert_eq!(next_link(header).as_deref(), Some("https://x.test/a?page=2"));
    }

    #[test]
    fn test_relation_match_ignores_case() {
        let header = r#"<https://x.test/a?page=2>; REL="Next", <https://x.test/a?page=3>; rel="next-page""#;
        assert_eq!(next_link(header).as_deref(), Some("https://x.test/a?page=2"));
    }
}
