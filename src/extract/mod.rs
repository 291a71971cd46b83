pub mod html;


use std::collections::HashSet;

use url::Url;

use crate::filter::OriginFilter;
use crate::results::PageResult;

/// Events emitted by a lenient markup scan, in document order.
///
/// The accumulation logic is a pure state machine over these three events;
/// any tokenizer that can produce them can drive it.
pub trait MarkupSink {
    /// A tag opened, with its attributes as (name, value) pairs in source order
    fn on_tag_open(&mut self, name: &str, attrs: &[(&str, &str)]);

    /// A tag closed
    fn on_tag_close(&mut self, name: &str);

    /// Character data between tags
    fn on_text(&mut self, data: &str);
}

/// Single-pass accumulator for same-origin links and visible text.
///
/// Tracks only the most recently opened tag, not a nesting stack. That single
/// marker decides text suppression: data arriving while the marker reads
/// `script` or `style` is dropped. Well-formed script and style elements
/// never contain child elements, so one marker is enough.
pub struct PageSink {
    filter: OriginFilter,
    base: Url,
    current_tag: Option<String>,
    links: Vec<String>,
    text: Vec<String>,
}

impl PageSink {
    /// Create a sink for one scan of the document at `base`
    pub fn new(base: Url) -> Self {
        Self {
            filter: OriginFilter::new(base.clone()),
            base,
            current_tag: None,
            links: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Consume the sink, returning the joined text and the deduplicated links.
    ///
    /// Dedup keeps the first occurrence of each link and its position.
    pub fn finish(self) -> (String, Vec<String>) {
        let mut seen = HashSet::new();
        let links: Vec<String> = self
            .links
            .into_iter()
            .filter(|link| seen.insert(link.clone()))
            .collect();

        ::log::debug!(
            "Scan collected {} links, {} text fragments",
            links.len(),
            self.text.len()
        );

        (self.text.join(" "), links)
    }
}

impl MarkupSink for PageSink {
    fn on_tag_open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.current_tag = Some(name.to_string());

        if name != "a" {
            return;
        }

        // Each href occurrence is resolved and filtered independently;
        // duplicates are removed in finish().
        for (attr, value) in attrs {
            if *attr != "href" {
                continue;
            }
            match self.base.join(value) {
                Ok(resolved) => {
                    if self.filter.is_same_origin(&resolved) {
                        self.links.push(resolved.to_string());
                    }
                }
                Err(err) => {
                    ::log::debug!("Skipping unresolvable href {:?}: {}", value, err);
                }
            }
        }
    }

    fn on_tag_close(&mut self, _name: &str) {
        // Cleared for any close event, matching or not
        self.current_tag = None;
    }

    fn on_text(&mut self, data: &str) {
        if matches!(self.current_tag.as_deref(), Some("script") | Some("style")) {
            return;
        }

        let trimmed = data.trim();
        if !trimmed.is_empty() {
            self.text.push(trimmed.to_string());
        }
    }
}

/// Scans `html` and builds the page result for the page at `page_url`.
///
/// `page_url` is both the resolution base for relative hrefs and the origin
/// the links are filtered against; it is carried into the result verbatim.
pub fn extract(html: &str, page_url: &str) -> Result<PageResult, url::ParseError> {
    let base = Url::parse(page_url)?;

    let mut sink = PageSink::new(base);
    html::scan(html, &mut sink);
    let (text, links) = sink.finish();

    Ok(PageResult::new(page_url.to_string(), text, links))
}
