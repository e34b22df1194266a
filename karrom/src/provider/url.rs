//! URL assembly helpers.

/// Joins a base URL and a relative path with exactly one slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(join_url("http://a/", "surah"), "http://a/surah");
        assert_eq!(join_url("http://a", "/surah"), "http://a/surah");
        assert_eq!(join_url("http://a/v1/", "timings/01-01-2025"), "http://a/v1/timings/01-01-2025");
    }
}
