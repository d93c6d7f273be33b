//! HTML-to-Markdown rendering by ordered pattern rewrites.
//!
//! Each rewrite consumes the output of the previous one. Structural and inline
//! conversions run first, then the leftover markup is stripped and blank lines
//! are collapsed, so the later passes never see a tag they could have mapped.
//!
//! Rewrites match the first closing tag after an opening one. Nested or
//! overlapping constructs (a list inside a list, a quote inside a quote) are
//! therefore only partially converted.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::strip_tags;

type Rewrite = fn(&str) -> String;

/// Structural and inline conversions, in the order they must run
const STRUCTURAL_REWRITES: [Rewrite; 8] = [
    convert_headings,
    convert_paragraphs,
    convert_emphasis,
    convert_links,
    convert_images,
    convert_lists,
    convert_blockquotes,
    convert_code,
];

static HEADING_RES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    (1..=6)
        .map(|level| {
            let re = Regex::new(&format!(r"(?is)<h{level}\b[^>]*>(.*?)</h{level}>"))
                .expect("heading regex should compile");
            (re, format!("{} ${{1}}\n\n", "#".repeat(level)))
        })
        .collect()
});
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").expect("PARAGRAPH_RE should compile"));
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<strong\b[^>]*>(.*?)</strong>").expect("STRONG_RE should compile")
});
static B_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<b\b[^>]*>(.*?)</b>").expect("B_RE should compile"));
static EM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<em\b[^>]*>(.*?)</em>").expect("EM_RE should compile"));
static I_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<i\b[^>]*>(.*?)</i>").expect("I_RE should compile"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\shref="([^"]*)"[^>]*>(.*?)</a>"#).expect("LINK_RE should compile")
});
static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("IMG_RE should compile"));
static SRC_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)\ssrc="([^"]*)""#).expect("SRC_ATTR_RE should compile"));
static ALT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)\salt="([^"]*)""#).expect("ALT_ATTR_RE should compile"));
static UL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ul\b[^>]*>(.*?)</ul>").expect("UL_RE should compile"));
static LI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li>").expect("LI_RE should compile"));
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<blockquote\b[^>]*>(.*?)</blockquote>").expect("BLOCKQUOTE_RE should compile")
});
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<code\b[^>]*>(.*?)</code>").expect("CODE_RE should compile"));
static PRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<pre\b[^>]*>(.*?)</pre>").expect("PRE_RE should compile"));
static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("BLANK_LINES_RE should compile"));

/// Convert fragment HTML to Markdown. Empty input gives an empty string.
pub fn to_markdown(html: &str) -> String {
    let converted = STRUCTURAL_REWRITES
        .iter()
        .fold(html.to_string(), |acc, rewrite| rewrite(&acc));
    finalize(&converted)
}

/// Strip leftover tags, collapse blank-line runs and trim
fn finalize(markdown: &str) -> String {
    collapse_blank_lines(&strip_tags(markdown)).trim().to_string()
}

fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n\n").into_owned()
}

fn convert_headings(html: &str) -> String {
    HEADING_RES
        .iter()
        .fold(html.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, replacement.as_str()).into_owned()
        })
}

fn convert_paragraphs(html: &str) -> String {
    PARAGRAPH_RE.replace_all(html, "${1}\n\n").into_owned()
}

fn convert_emphasis(html: &str) -> String {
    let result = STRONG_RE.replace_all(html, "**${1}**");
    let result = B_RE.replace_all(&result, "**${1}**");
    let result = EM_RE.replace_all(&result, "*${1}*");
    I_RE.replace_all(&result, "*${1}*").into_owned()
}

fn convert_links(html: &str) -> String {
    LINK_RE.replace_all(html, "[${2}](${1})").into_owned()
}

/// `![alt](src)` for any `<img>` carrying a `src`, whatever the attribute order
fn convert_images(html: &str) -> String {
    IMG_RE
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[0];
            let Some(src) = SRC_ATTR_RE.captures(tag).and_then(|c| c.get(1)) else {
                return tag.to_string();
            };
            let alt = ALT_ATTR_RE
                .captures(tag)
                .and_then(|c| c.get(1))
                .map_or("", |m| m.as_str());
            format!("![{}]({})", alt, src.as_str())
        })
        .into_owned()
}

fn convert_lists(html: &str) -> String {
    UL_RE
        .replace_all(html, |caps: &Captures| {
            let items = LI_RE.replace_all(&caps[1], "- ${1}\n");
            format!("{}\n", items)
        })
        .into_owned()
}

fn convert_blockquotes(html: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(html, |caps: &Captures| {
            format!("> {}\n\n", caps[1].replace('\n', "\n> "))
        })
        .into_owned()
}

fn convert_code(html: &str) -> String {
    let result = CODE_RE.replace_all(html, "`${1}`");
    PRE_RE
        .replace_all(&result, "```\n${1}\n```\n\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(to_markdown("<h1>Hi</h1><p>World</p>"), "# Hi\n\nWorld");
    }

    #[test]
    fn test_all_heading_levels() {
        let html = "<h1>One</h1><h2 id=\"t\">Two</h2><h3>Three</h3>\
            <h4>Four</h4><h5>Five</h5><h6>Six</h6>";
        assert_eq!(
            to_markdown(html),
            "# One\n\n## Two\n\n### Three\n\n#### Four\n\n##### Five\n\n###### Six"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_markdown(""), "");
        assert_eq!(to_markdown("   \n\n  "), "");
    }

    #[test]
    fn test_emphasis() {
        let html = "<p><strong>bold</strong>, <b>also</b>, <em>soft</em> and <i>tilted</i></p>";
        assert_eq!(to_markdown(html), "**bold**, **also**, *soft* and *tilted*");
    }

    #[test]
    fn test_tag_prefixes_do_not_collide() {
        // <b must not match <br>, <p must not match <pre>, <i must not match <img>
        let html = "<p>line<br>break</p><pre>raw</pre><img src=\"a.png\"><i>x</i>";
        assert_eq!(to_markdown(html), "linebreak\n\n```\nraw\n```\n\n![](a.png)*x*");
    }

    #[test]
    fn test_links() {
        let html = "<p>See <a class=\"ext\" href=\"https://x.com/docs\">the docs</a>.</p>";
        assert_eq!(to_markdown(html), "See [the docs](https://x.com/docs).");
    }

    #[test]
    fn test_anchor_without_href_keeps_text() {
        assert_eq!(to_markdown("<a name=\"top\">Top</a>"), "Top");
    }

    #[test]
    fn test_images() {
        assert_eq!(
            to_markdown("<img src=\"https://x.com/y.png\">"),
            "![](https://x.com/y.png)"
        );
        assert_eq!(to_markdown("<img src=\"s\" alt=\"x\">"), "![x](s)");
        assert_eq!(to_markdown("<img alt=\"x\" src=\"s\">"), "![x](s)");
        assert_eq!(to_markdown("<img src=\"s\" alt=\"\">"), "![](s)");
        assert_eq!(to_markdown("<img alt=\"no source\">"), "");
    }

    #[test]
    fn test_unordered_list() {
        let html = "<ul><li>One</li><li>Two</li></ul><p>After</p>";
        assert_eq!(to_markdown(html), "- One\n- Two\n\nAfter");
    }

    #[test]
    fn test_blockquote_prefixes_every_line() {
        let html = "<blockquote>line one\nline two</blockquote><p>After</p>";
        assert_eq!(to_markdown(html), "> line one\n> line two\n\nAfter");
    }

    #[test]
    fn test_inline_code_and_pre() {
        assert_eq!(to_markdown("<p>Run <code>cargo</code> now</p>"), "Run `cargo` now");
        assert_eq!(to_markdown("<pre>let x = 1;</pre>"), "```\nlet x = 1;\n```");
    }

    #[test]
    fn test_remaining_tags_are_stripped() {
        let html = "<div><span>plain</span> <section>words</section></div>";
        assert_eq!(to_markdown(html), "plain words");
    }

    #[test]
    fn test_blank_line_runs_collapse_to_two() {
        let html = "<p>A</p>\n\n   \n<p>B</p>";
        assert_eq!(to_markdown(html), "A\n\nB");
    }

    #[test]
    fn test_nested_lists_are_only_partially_converted() {
        // The inner list closes the outer match early, so its item is not
        // rendered as a separate entry
        let html = "<ul><li>a<ul><li>b</li></ul></li></ul>";
        assert_eq!(to_markdown(html), "- ab");
    }

    #[test]
    fn test_code_inside_pre_keeps_backticks() {
        let html = "<pre><code>x</code></pre>";
        assert_eq!(to_markdown(html), "```\n`x`\n```");
    }

    #[test]
    fn test_finalize_is_idempotent_on_output() {
        let html = "<article><h1>Title</h1><p>Intro with <a href=\"https://x.com\">a link</a>.</p>\
            <ul><li>one</li><li>two</li></ul><blockquote>quoted</blockquote>\
            <pre>code\n\n\n\nblock</pre><p><img src=\"https://x.com/i.png\" alt=\"i\"></p></article>";
        let markdown = to_markdown(html);

        assert!(!markdown.is_empty());
        assert_eq!(finalize(&markdown), markdown);
    }
}
