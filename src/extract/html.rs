use scraper::node::Node;
use scraper::{ElementRef, Html};

use super::MarkupSink;

/// Scans HTML content, feeding tag and text events to `sink` in document order.
///
/// html5ever recovers from malformed markup instead of failing, so the scan
/// itself never errors. Script and style bodies arrive as plain text events
/// under their element, never as nested tag events.
pub fn scan<S: MarkupSink>(html: &str, sink: &mut S) {
    let doc = Html::parse_document(html);
    walk(doc.root_element(), sink);
}

fn walk<S: MarkupSink>(element: ElementRef, sink: &mut S) {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    sink.on_tag_open(element.value().name(), &attrs);

    for child in element.children() {
        match child.value() {
            Node::Text(text) => sink.on_text(&text.text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    walk(child_element, sink);
                }
            }
            // Comments, doctypes and processing instructions carry no
            // visible content
            _ => {}
        }
    }

    sink.on_tag_close(element.value().name());
}
