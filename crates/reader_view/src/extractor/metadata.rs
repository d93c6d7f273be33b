use dom_query::Document;
use url::Url;

use crate::models::NO_TITLE;

/// Text of the first `<title>` element, trimmed, or "No title"
pub fn extract_title(html: &str) -> String {
    title_from_document(&Document::from(html))
}

pub(crate) fn title_from_document(doc: &Document) -> String {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| node.text().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Best guess at the publishing site's name.
///
/// Uses the trailing segment of a `"Page | Site"` title when there is one,
/// otherwise a readable form of the host (`www.bbc.co.uk` -> `Bbc Co Uk`).
pub fn site_name(title: &str, source_url: &str) -> Option<String> {
    if let Some((_, site)) = title.rsplit_once(" | ") {
        let site = site.trim();
        if !site.is_empty() {
            return Some(site.to_string());
        }
    }

    let url = Url::parse(source_url).ok()?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    Some(
        host.split('.')
            .filter(|part| !part.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let html = "<html><head><title>\n  My Article  \n</title></head><body></body></html>";
        assert_eq!(extract_title(html), "My Article");
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<html><head><title>First</title><title>Second</title></head></html>";
        assert_eq!(extract_title(html), "First");
    }

    #[test]
    fn test_missing_or_blank_title_defaults() {
        assert_eq!(extract_title("<html><body><p>x</p></body></html>"), NO_TITLE);
        assert_eq!(extract_title("<title>   </title>"), NO_TITLE);
        assert_eq!(extract_title(""), NO_TITLE);
    }

    #[test]
    fn test_site_name_from_title_suffix() {
        assert_eq!(
            site_name("Rates held | Bank of England", "https://www.bankofengland.co.uk/x"),
            Some("Bank of England".to_string())
        );
        assert_eq!(
            site_name("A | B | Gazette", "https://example.com/"),
            Some("Gazette".to_string())
        );
    }

    #[test]
    fn test_site_name_from_host() {
        assert_eq!(
            site_name("Plain title", "https://www.example.co.uk/a"),
            Some("Example Co Uk".to_string())
        );
        assert_eq!(
            site_name("No title", "https://news.ycombinator.com/"),
            Some("News Ycombinator Com".to_string())
        );
    }

    #[test]
    fn test_site_name_without_host() {
        assert_eq!(site_name("Plain title", "not a url"), None);
        assert_eq!(site_name("Plain title", "data:text/html,hi"), None);
    }
}
