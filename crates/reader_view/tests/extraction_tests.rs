use reader_view::{
    FetchCause, OutputFormat, convert, extract_fragment, extract_title, resolve_url,
    retrieve_and_extract, to_markdown, to_text,
};

const BASE: &str = "https://x.com/a/";

fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>Test page</title></head><body>{body}</body></html>")
}

#[test]
fn test_selection_priority() {
    let both = page("<article>From article</article><main>From main</main>");
    assert_eq!(extract_fragment(&both, BASE), "<main>From main</main>");

    let article_only = page("<div>Intro</div><article>From article</article>");
    assert_eq!(extract_fragment(&article_only, BASE), "<article>From article</article>");

    let content_only = page("<div class=\"content\">From content</div>");
    assert_eq!(
        extract_fragment(&content_only, BASE),
        "<div class=\"content\">From content</div>"
    );

    let none = page("<div>Just a div</div>");
    assert_eq!(extract_fragment(&none, BASE), "<body><div>Just a div</div></body>");
}

#[test]
fn test_fragment_is_never_empty() {
    for html in [
        "x",
        "<p>unclosed",
        "<table><tr><td>cell</table>",
        "<html><body></body></html>",
        "<script>only()</script>",
        "\u{0}\u{1}binary-ish",
    ] {
        assert!(!extract_fragment(html, BASE).is_empty(), "{html:?}");
    }
}

#[test]
fn test_url_resolution() {
    assert_eq!(resolve_url(BASE, "img/y.png"), "https://x.com/a/img/y.png");
    assert_eq!(resolve_url(BASE, "https://y.org/z"), "https://y.org/z");
}

#[test]
fn test_markdown_examples() {
    assert_eq!(to_markdown("<h1>Hi</h1><p>World</p>"), "# Hi\n\nWorld");
    assert_eq!(to_markdown("<img src=\"s\">"), "![](s)");
    assert_eq!(to_markdown("<img src=\"s\" alt=\"x\">"), "![x](s)");
}

#[test]
fn test_text_example() {
    assert_eq!(to_text("<p>A</p>\n\n<p>B</p>"), "A B");
}

#[test]
fn test_title_default() {
    assert_eq!(extract_title(&page("")), "Test page");
    assert_eq!(extract_title("<html><head></head></html>"), "No title");
}

#[test]
fn test_end_to_end_conversion() {
    let html = page(
        "<nav><a href=\"/\">Home</a></nav>\
         <article class=\"post\"><h2>Notes</h2>\
         <p>Read the <a href=\"guide.html\">guide</a> first.</p>\
         <ul><li>Fast</li><li>Small</li></ul>\
         <div class=\"ad\">Buy things</div></article>\
         <footer>Contact</footer>",
    );
    let fragment = extract_fragment(&html, BASE);

    assert_eq!(
        convert(&fragment, OutputFormat::Markdown),
        "## Notes\n\nRead the [guide](https://x.com/a/guide.html) first.\n\n- Fast\n- Small"
    );
    assert_eq!(
        convert(&fragment, OutputFormat::Text),
        "NotesRead the guide first.FastSmall"
    );
    assert!(!fragment.contains("Buy things"));
    assert!(!fragment.contains("Home"));
}

#[tokio::test]
async fn test_retrieve_and_extract_rejects_invalid_url() {
    let err = retrieve_and_extract("definitely not a url").await.unwrap_err();

    assert_eq!(err.url(), "definitely not a url");
    assert!(matches!(err.cause(), FetchCause::InvalidUrl { .. }));
}
