//! Mastodon status content processing.
//!
//! Status content is written in a constrained subset of HTML where links,
//! mentions and hashtags are all expressed as `<a>` elements. HTML is
//! notoriously hard to parse correctly, so this crate walks the content with
//! a real HTML parser rather than pattern matching on tags.
//!
//! Two APIs are offered:
//!
//! - [`visit`] is the low-level one. It maps closely to the HTML
//!   representation: implement [`visit::Visit`] and get notified about
//!   paragraphs, anchors, text runs and line breaks as they appear.
//! - [`parse`] is the high-level one. It produces a processed, tree-like
//!   representation of the content, built on top of the visitor.
//!
//! This module only contains the structures shared between the two.

pub mod parse;
pub mod visit;

/// An `<a>` element that carries no recognized Mastodon semantics.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct PlainLink {
    /// Link target.
    pub href: String,
}

/// An `<a>` element classified as a mention of another user.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct MentionLink {
    /// Link target, the profile page of the mentioned user.
    pub href: String,
    /// Hostname of the instance the user is on, without any prefix.
    pub host: String,
    /// Mentioned user, always with the `@` prefix.
    pub user: String,
}

/// An `<a>` element classified as a hashtag.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct HashtagLink {
    /// Link target, the hashtag page on the instance.
    pub href: String,
    /// Hashtag value, without the `#` prefix.
    pub tag: String,
}

/// Classification of an anchor found in status content.
///
/// Mentions and hashtags are recognized from the class tokens Mastodon puts
/// on the element; anything else, including anchors whose href cannot be
/// parsed, is a [`PlainLink`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Anchor {
    /// A plain link.
    Plain(PlainLink),
    /// A mention of another user.
    Mention(MentionLink),
    /// A hashtag.
    Hashtag(HashtagLink),
}
