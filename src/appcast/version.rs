/// Version string for a release tag: the tag with one leading `v` removed.
///
/// Releases without a tag get an empty version.
pub fn extract_version(tag: Option<&str>) -> String {
    match tag {
        Some(tag) => tag.strip_prefix('v').unwrap_or(tag).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_v() {
        assert_eq!(extract_version(Some("v2.3.1")), "2.3.1");
    }

    #[test]
    fn test_tag_without_v_unchanged() {
        assert_eq!(extract_version(Some("2.3.1")), "2.3.1");
        assert_eq!(extract_version(Some("V2.3.1")), "V2.3.1");
        assert_eq!(extract_version(Some("release-1")), "release-1");
    }

    #[test]
    fn test_strips_exactly_one_v() {
        assert_eq!(extract_version(Some("vv1.0")), "v1.0");
        assert_eq!(extract_version(Some("v")), "");
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(extract_version(None), "");
    }
}
