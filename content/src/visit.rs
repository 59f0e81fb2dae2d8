//! Visitor API over status content.
//!
//! This module maps closely to the HTML representation of a status.
//! Implement [`Visit`] to be notified about the elements of the content as
//! they appear, then drive the visitor with [`visit_content`].
//!
//! Text runs are buffered across transparent elements (spans, inline markup)
//! and committed as a single [`Visit::text`] call at element boundaries, so
//! `@<span>user</span>` arrives as one `"@user"` notification.

use crate::{Anchor, HashtagLink, MentionLink, PlainLink};
use scraper::{ElementRef, Html, Node};
use std::collections::HashSet;
use std::mem;
use url::Url;

/// A trait to visit status content.
///
/// Visitor-like methods notify about the elements of the content and
/// [`finish`](Visit::finish) builds the output once the end of the content
/// has been reached. All notification methods default to no-ops, so an
/// implementation only handles the events it cares about.
pub trait Visit {
    /// Output type produced by [`finish`](Visit::finish).
    type Output;

    /// A text run.
    ///
    /// Called once per run: consecutive text accumulated across transparent
    /// inline elements arrives as a single call.
    fn text(&mut self, _text: String) {}

    /// A line break, from a `<br>` element inside a paragraph.
    fn line_break(&mut self) {}

    /// Start of a paragraph.
    ///
    /// Followed by text, anchors and line breaks. Mastodon does not nest
    /// paragraph elements.
    fn begin_paragraph(&mut self) {}

    /// End of a paragraph.
    fn end_paragraph(&mut self) {}

    /// Start of an anchor.
    ///
    /// The [`Anchor`] carries the classification of the element: a plain
    /// link, a mention or a hashtag. Mention text starts with `@`, hashtag
    /// text with `#`.
    fn begin_anchor(&mut self, _anchor: &Anchor) {}

    /// End of an anchor.
    fn end_anchor(&mut self, _anchor: &Anchor) {}

    /// The end of the content has been reached.
    ///
    /// Output must be produced at this step.
    fn finish(self) -> Self::Output;
}

/// Visit status content.
///
/// Parses `content` leniently (malformed HTML never fails) and walks the
/// resulting tree with `visitor`.
#[must_use]
pub fn visit_content<V>(content: &str, visitor: V) -> V::Output
where
    V: Visit,
{
    let fragment = Html::parse_fragment(content);
    Walker::new(visitor).run(fragment.root_element())
}

struct Walker<V> {
    visitor: V,
    pending_text: String,
}

impl<V> Walker<V>
where
    V: Visit,
{
    fn new(visitor: V) -> Self {
        Walker {
            visitor,
            pending_text: String::new(),
        }
    }

    fn run(mut self, root: ElementRef<'_>) -> V::Output {
        self.walk_children(root);
        self.commit_text();
        self.visitor.finish()
    }

    fn walk_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => self.pending_text.push_str(text),
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        self.walk_element(el);
                    }
                }
                _ => {}
            }
        }
    }

    fn walk_element(&mut self, element: ElementRef<'_>) {
        match element.value().name() {
            "p" => {
                self.commit_text();
                self.visitor.begin_paragraph();
                self.walk_children(element);
                self.commit_text();
                self.visitor.end_paragraph();
            }
            "a" => {
                let anchor = classify_anchor(element);
                self.commit_text();
                self.visitor.begin_anchor(&anchor);
                self.walk_children(element);
                self.commit_text();
                self.visitor.end_anchor(&anchor);
            }
            "br" => {
                self.commit_text();
                self.visitor.line_break();
            }
            "span" => match element.value().attr("class").unwrap_or("") {
                // Mastodon hides the scheme and trailing parts of long URLs
                // inside these spans; the ellipsis span marks truncation.
                "invisible" => {}
                "ellipsis" => {
                    self.walk_children(element);
                    self.pending_text.push('…');
                }
                _ => self.walk_children(element),
            },
            _ => self.walk_children(element),
        }
    }

    fn commit_text(&mut self) {
        let text = mem::take(&mut self.pending_text);
        if !text.is_empty() {
            self.visitor.text(text);
        }
    }
}

fn classify_anchor(element: ElementRef<'_>) -> Anchor {
    let href = element.value().attr("href").unwrap_or("");
    let class = element.value().attr("class").unwrap_or("");
    let classes = class.split_whitespace().collect::<HashSet<_>>();

    classify_special(href, &classes).unwrap_or_else(|| {
        Anchor::Plain(PlainLink {
            href: href.to_string(),
        })
    })
}

/// Classify mention and hashtag anchors from their class tokens.
///
/// Hashtags are checked first: Mastodon emits `class="mention hashtag"` on
/// hashtag anchors. Anchors whose href cannot be parsed, or whose URL lacks
/// the expected host or path segments, fall back to a plain link.
fn classify_special(href: &str, classes: &HashSet<&str>) -> Option<Anchor> {
    let url = Url::parse(href).ok()?;
    if classes.contains("hashtag") {
        let tag = url.path_segments()?.next_back()?;
        Some(Anchor::Hashtag(HashtagLink {
            href: href.to_string(),
            tag: tag.to_string(),
        }))
    } else if classes.contains("mention") {
        let host = url.host_str()?;
        let user = url.path_segments()?.next_back()?;
        Some(Anchor::Mention(MentionLink {
            href: href.to_string(),
            host: host.to_string(),
            user: user.to_string(),
        }))
    } else {
        None
    }
}
