use super::FeedItem;

pub const SPARKLE_NAMESPACE: &str = "http://www.andymatuschak.org/xml-namespaces/sparkle";
pub const DUBLIN_CORE_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

const CHANNEL_DESCRIPTION: &str = "App updates generated from GitHub Releases";

const UNSIGNED_WARNING: &str = "<!-- WARNING: This generated appcast does NOT include Sparkle signatures.
                 Do NOT use unsigned updates in production.
                 Sign your update archives with EdDSA (Ed25519) and include sparkle:edSignature attributes in the enclosure elements. -->";

/// Escapes text for use in element content and double- or single-quoted
/// attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the complete appcast document.
///
/// Items appear in the given order. Lines are joined with `\n` and the
/// document has no trailing newline.
pub fn render_feed(repo: &str, repo_url: &str, items: &[FeedItem]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        format!(
            r#"<rss version="2.0" xmlns:sparkle="{}" xmlns:dc="{}">"#,
            SPARKLE_NAMESPACE, DUBLIN_CORE_NAMESPACE
        ),
        "<channel>".to_string(),
        format!("<title>{} updates</title>", escape(repo)),
        format!("<link>{}</link>", escape(repo_url)),
        format!("<description>{}</description>", CHANNEL_DESCRIPTION),
        UNSIGNED_WARNING.to_string(),
    ];

    for item in items {
        lines.extend(render_item(item));
    }

    lines.push("</channel>".to_string());
    lines.push("</rss>".to_string());
    lines.join("\n")
}

fn render_item(item: &FeedItem) -> [String; 6] {
    let version = escape(&item.version);
    [
        "<item>".to_string(),
        format!("<title>{}</title>", escape(&item.title)),
        format!(
            "<sparkle:releaseNotesLink>{}</sparkle:releaseNotesLink>",
            escape(&item.notes_url)
        ),
        format!("<pubDate>{}</pubDate>", escape(&item.pub_date)),
        format!(
            r#"<enclosure url="{}" sparkle:version="{}" sparkle:shortVersionString="{}" length="{}" type="application/octet-stream" />"#,
            escape(&item.download_url),
            version,
            version,
            escape(&item.length)
        ),
        "</item>".to_string(),
    ]
}
