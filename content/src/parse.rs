//! Tree API over status content.
//!
//! [`parse_content`] turns status content into a processed representation:
//!
//! - content is a list of paragraphs
//! - a paragraph is a list of [`ParagraphNode`]
//! - a paragraph node is an anchor, a text run or a line break
//! - an anchor (plain link, mention or hashtag) contains [`AnchorNode`]
//!   children, which are text runs or line breaks
//!
//! Anything appearing outside a paragraph is dropped, matching how clients
//! render statuses.

use crate::Anchor;
use crate::visit::{self, Visit};
use std::mem;

/// An element that can appear inside a paragraph.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParagraphNode {
    /// An anchor with its classification and children.
    Anchor(Anchor, Vec<AnchorNode>),
    /// A text run.
    Text(String),
    /// A line break.
    LineBreak,
}

/// An element that can appear inside an anchor.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum AnchorNode {
    /// A text run.
    Text(String),
    /// A line break.
    LineBreak,
}

/// Parse status content into a list of paragraphs.
///
/// Each paragraph is a list of [`ParagraphNode`]. Malformed HTML never
/// fails; unrecognized markup is traversed transparently.
#[must_use]
pub fn parse_content(content: &str) -> Vec<Vec<ParagraphNode>> {
    visit::visit_content(content, TreeBuilder::default())
}

/// Assembles the tree from visitor events.
///
/// Depth counters guard against markup the visitor itself does not rule
/// out: content outside any open paragraph is dropped, anchor children
/// collect into the innermost anchor, and counters saturate at zero on
/// unbalanced end events.
#[derive(Default)]
struct TreeBuilder {
    paragraphs: Vec<Vec<ParagraphNode>>,
    paragraph_depth: usize,
    anchor_depth: usize,
    current_paragraph: Vec<ParagraphNode>,
    current_anchor: Vec<AnchorNode>,
}

impl Visit for TreeBuilder {
    type Output = Vec<Vec<ParagraphNode>>;

    fn text(&mut self, text: String) {
        if self.paragraph_depth > 0 {
            if self.anchor_depth > 0 {
                self.current_anchor.push(AnchorNode::Text(text));
            } else {
                self.current_paragraph.push(ParagraphNode::Text(text));
            }
        }
    }

    fn line_break(&mut self) {
        if self.paragraph_depth > 0 {
            if self.anchor_depth > 0 {
                self.current_anchor.push(AnchorNode::LineBreak);
            } else {
                self.current_paragraph.push(ParagraphNode::LineBreak);
            }
        }
    }

    fn begin_paragraph(&mut self) {
        self.paragraph_depth += 1;
    }

    fn end_paragraph(&mut self) {
        self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
        if self.paragraph_depth == 0 {
            let paragraph = mem::take(&mut self.current_paragraph);
            self.paragraphs.push(paragraph);
        }
    }

    fn begin_anchor(&mut self, _anchor: &Anchor) {
        self.anchor_depth += 1;
    }

    fn end_anchor(&mut self, anchor: &Anchor) {
        self.anchor_depth = self.anchor_depth.saturating_sub(1);
        if self.anchor_depth == 0 {
            let children = mem::take(&mut self.current_anchor);
            self.current_paragraph
                .push(ParagraphNode::Anchor(anchor.clone(), children));
        }
    }

    fn finish(self) -> Self::Output {
        self.paragraphs
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorNode, ParagraphNode, parse_content};
    use crate::{Anchor, HashtagLink, MentionLink, PlainLink};

    fn text(value: &str) -> ParagraphNode {
        ParagraphNode::Text(value.to_string())
    }

    fn anchor(anchor: Anchor, label: &str) -> ParagraphNode {
        ParagraphNode::Anchor(anchor, vec![AnchorNode::Text(label.to_string())])
    }

    #[test]
    fn paragraphs_with_link_and_hashtags() {
        let content = concat!(
            "<p>I have a feeling this will appeal to multiple people for multiple reasons.</p>",
            r#"<p>[original source: <a href="https://www.reddit.com/r/comics/comments/10rukp8/oc_magic_coding/" rel="nofollow noopener" target="_blank">"#,
            r#"<span class="invisible">https://www.</span><span class="ellipsis">reddit.com/r/comics/comments/1</span></a>]</p>"#,
            r#"<p><a href="https://dice.camp/tags/ttrpg" class="mention hashtag" rel="tag">#<span>ttrpg</span></a>"#,
            r#" <a href="https://dice.camp/tags/magic" class="mention hashtag" rel="tag">#<span>magic</span></a></p>"#,
        );
        let expected = vec![
            vec![text(
                "I have a feeling this will appeal to multiple people for multiple reasons.",
            )],
            vec![
                text("[original source: "),
                anchor(
                    Anchor::Plain(PlainLink {
                        href: "https://www.reddit.com/r/comics/comments/10rukp8/oc_magic_coding/"
                            .to_string(),
                    }),
                    "reddit.com/r/comics/comments/1…",
                ),
                text("]"),
            ],
            vec![
                anchor(
                    Anchor::Hashtag(HashtagLink {
                        href: "https://dice.camp/tags/ttrpg".to_string(),
                        tag: "ttrpg".to_string(),
                    }),
                    "#ttrpg",
                ),
                text(" "),
                anchor(
                    Anchor::Hashtag(HashtagLink {
                        href: "https://dice.camp/tags/magic".to_string(),
                        tag: "magic".to_string(),
                    }),
                    "#magic",
                ),
            ],
        ];
        assert_eq!(parse_content(content), expected);
    }

    #[test]
    fn paragraphs_with_mentions() {
        let content = concat!(
            r#"<p><a href="https://mastodon.org.uk/@cybette" class="u-url mention">@<span>cybette</span></a>"#,
            " nice! That's way better :)</p>",
            "<p>So basically, you had to take 2 sets of stickers. One for FOSDEM and one for ",
            r#"<a href="https://fosstodon.org/@cfgmgmtcamp" class="u-url mention">@<span>cfgmgmtcamp</span></a>  ?</p>"#,
        );
        let expected = vec![
            vec![
                anchor(
                    Anchor::Mention(MentionLink {
                        href: "https://mastodon.org.uk/@cybette".to_string(),
                        host: "mastodon.org.uk".to_string(),
                        user: "@cybette".to_string(),
                    }),
                    "@cybette",
                ),
                text(" nice! That's way better :)"),
            ],
            vec![
                text("So basically, you had to take 2 sets of stickers. One for FOSDEM and one for "),
                anchor(
                    Anchor::Mention(MentionLink {
                        href: "https://fosstodon.org/@cfgmgmtcamp".to_string(),
                        host: "fosstodon.org".to_string(),
                        user: "@cfgmgmtcamp".to_string(),
                    }),
                    "@cfgmgmtcamp",
                ),
                text("  ?"),
            ],
        ];
        assert_eq!(parse_content(content), expected);
    }

    #[test]
    fn line_breaks_inside_a_paragraph() {
        let content = "<p>Test 1 please ignore<br>Test 1 (cont)</p>";
        let expected = vec![vec![
            text("Test 1 please ignore"),
            ParagraphNode::LineBreak,
            text("Test 1 (cont)"),
        ]];
        assert_eq!(parse_content(content), expected);
    }

    #[test]
    fn content_outside_paragraphs_is_dropped() {
        let content = "stray<p>kept</p>";
        assert_eq!(parse_content(content), vec![vec![text("kept")]]);
    }

    #[test]
    fn empty_content_yields_no_paragraphs() {
        assert!(parse_content("").is_empty());
        assert_eq!(parse_content("<p></p>"), vec![Vec::new()]);
    }
}
