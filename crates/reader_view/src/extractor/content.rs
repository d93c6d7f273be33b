use dom_query::{Document, Selection};
use url::Url;

use crate::utils::resolve_with_base;

/// Non-content elements removed before the main content is located.
///
/// Covers the layout tags plus anything marked as an advertisement by element
/// name, class token or ARIA role.
const NOISE_SELECTOR: &str = "script, style, nav, header, footer, aside, \
    advertisement, ad, .advertisement, .ad, [role=\"advertisement\"], [role=\"ad\"]";

/// One tier of the main-content search.
///
/// Selectors within a tier are tried in listed order and the first element
/// matching any of them wins the tier.
#[derive(Debug)]
struct SelectionStrategy {
    name: &'static str,
    selectors: &'static [&'static str],
}

/// Tiers in priority order; the search stops at the first tier that matches.
const SELECTION_STRATEGIES: &[SelectionStrategy] = &[
    SelectionStrategy {
        name: "main element",
        selectors: &["main"],
    },
    SelectionStrategy {
        name: "content container",
        selectors: &[
            "article",
            "[role=\"main\"]",
            ".content",
            ".post",
            ".entry",
            ".article",
        ],
    },
    SelectionStrategy {
        name: "body",
        selectors: &["body"],
    },
    SelectionStrategy {
        name: "whole document",
        selectors: &["html"],
    },
];

impl SelectionStrategy {
    fn locate<'a>(&self, doc: &'a Document) -> Option<Selection<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| first_match(doc, selector))
    }
}

fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Extract the main-content fragment of an HTML page.
///
/// Parsing is lenient, so any input (including plain text or badly broken
/// markup) produces a best-effort fragment rather than an error. Image `src`
/// and anchor `href` values inside the fragment are resolved against
/// `base_url`.
pub fn extract_fragment(html: &str, base_url: &str) -> String {
    fragment_from_document(&Document::from(html), base_url)
}

/// [`extract_fragment`] over an already parsed page. Noise nodes are removed
/// from `doc` in place.
pub(crate) fn fragment_from_document(doc: &Document, base_url: &str) -> String {
    let removed = remove_noise(doc);
    tracing::debug!("Removed {} noise nodes", removed);

    let base = Url::parse(base_url).ok();
    if base.is_none() {
        tracing::debug!("Base URL {:?} is not absolute, references stay as-is", base_url);
    }

    let root = locate_main_content(doc);
    resolve_references(&root.select("img"), "src", base.as_ref());
    resolve_references(&root.select("a"), "href", base.as_ref());
    root.html().to_string()
}

/// Drop every noise node from the working tree, returning how many matched
fn remove_noise(doc: &Document) -> usize {
    let noise = doc.select(NOISE_SELECTOR);
    let count = noise.nodes().len();
    noise.remove();
    count
}

/// First strategy hit, or the document node itself when none matches
fn locate_main_content(doc: &Document) -> Selection<'_> {
    SELECTION_STRATEGIES
        .iter()
        .find_map(|strategy| {
            let found = strategy.locate(doc);
            if found.is_some() {
                tracing::debug!("Main content located by {}", strategy.name);
            }
            found
        })
        .unwrap_or_else(|| Selection::from(doc.root()))
}

/// Rewrite `attr` on every element in `elements` to its absolute form.
/// Missing and empty attributes are skipped.
fn resolve_references(elements: &Selection, attr: &str, base: Option<&Url>) {
    let Some(base) = base else {
        return;
    };

    for node in elements.nodes() {
        let element = Selection::from(*node);
        let Some(value) = element.attr(attr) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let resolved = resolve_with_base(base, &value);
        if resolved != *value {
            element.set_attr(attr, &resolved);
        }
    }
}
