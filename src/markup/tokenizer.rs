//! logos-based HTML tokenizer.
//!
//! Two lexers cooperate:
//! - [`Token`] splits a document into doctype, comments, tags and text.
//! - [`AttrToken`] splits the inside of a start tag into attribute names,
//!   `=` and values, so quoted values containing `>` never confuse the outer
//!   lexer (the outer `StartTag` regex already consumed them whole).
//!
//! Token priority in logos is determined by longest match, so a well-formed
//! `<div ...>` always wins over the lone [`Token::Lt`] fallback.

use std::ops::Range;

use logos::{Lexer, Logos};

/// Markup token produced by the document lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `<!DOCTYPE html>` (case-insensitive).
    #[regex(r"<![dD][oO][cC][tT][yY][pP][eE][^>]*>")]
    Doctype,

    /// `<!-- ... -->`. Unterminated comments are lexer errors.
    #[token("<!--", comment)]
    Comment,

    /// Start tag with its attributes: `<div class="a" data-x='b' hidden>`.
    /// Unquoted values may contain `=` and `/`; whitespace after a quoted
    /// value is optional.
    #[regex(r#"<[a-zA-Z][a-zA-Z0-9-]*([ \t\n\r\f]*[^ \t\n\r\f"'>/=]+([ \t\n\r\f]*=[ \t\n\r\f]*("[^"]*"|'[^']*'|[^ \t\n\r\f"'<>`]+))?)*[ \t\n\r\f]*/?>"#)]
    StartTag,

    /// End tag: `</div>`.
    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[ \t\n\r\f]*>")]
    EndTag,

    /// Character data between tags.
    #[regex(r"[^<]+")]
    Text,

    /// A `<` that does not open a well-formed tag.
    #[token("<")]
    Lt,
}

fn comment(lex: &mut Lexer<Token>) -> bool {
    match lex.remainder().find("-->") {
        Some(end) => {
            lex.bump(end + 3);
            true
        }
        None => {
            let rest = lex.remainder().len();
            lex.bump(rest);
            false
        }
    }
}

/// Token inside a start tag, after the element name.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum AttrToken {
    /// `=`
    #[token("=")]
    Equals,

    /// `/` before the closing `>` of a self-closing tag.
    #[token("/")]
    Slash,

    /// `"value"`
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// `'value'`
    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// Attribute name or unquoted value.
    #[regex(r#"[^ \t\n\r\f"'=<>/`]+"#)]
    Word,
}

/// A start tag broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Lowercased element name.
    pub name: String,
    /// Attributes in source order; names lowercased, values entity-decoded.
    pub attributes: Vec<(String, String)>,
    /// Whether the tag ended in `/>`.
    pub self_closing: bool,
}

/// Byte ranges of one attribute inside a start tag slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSpan {
    pub name: Range<usize>,
    /// Raw value, quotes included; `None` for a bare attribute.
    pub value: Option<Range<usize>>,
}

/// Start tag layout: element name range, attribute ranges, and whether
/// the tag ended in `/>`. Ranges index into the slice passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTagSpans {
    pub name: Range<usize>,
    pub attributes: Vec<AttrSpan>,
    pub self_closing: bool,
}

/// Locate the name and attributes of a [`Token::StartTag`] slice.
pub fn scan_start_tag(slice: &str) -> StartTagSpans {
    let open = usize::from(slice.starts_with('<'));
    let close = if slice.ends_with('>') { slice.len() - 1 } else { slice.len() };
    let inner = &slice[open..close.max(open)];
    let name_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(inner.len());
    let base = open + name_len;
    let rest = &inner[name_len..];

    let tokens: Vec<(AttrToken, Range<usize>)> = AttrToken::lexer(rest)
        .spanned()
        .filter_map(|(res, span)| res.ok().map(|t| (t, base + span.start..base + span.end)))
        .collect();

    let mut attributes = Vec::new();
    let mut self_closing = false;
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            (AttrToken::Word, name) => {
                let mut value = None;
                if matches!(tokens.get(i + 1), Some((AttrToken::Equals, _))) {
                    match tokens.get(i + 2) {
                        Some((AttrToken::DoubleQuoted | AttrToken::SingleQuoted, span)) => {
                            value = Some(span.clone());
                            i += 2;
                        }
                        Some((_, span)) => {
                            // An unquoted value runs until whitespace, so glue
                            // together every adjacent token (`a=b?c=d`, `x/y`).
                            let mut end = span.end;
                            let mut last = i + 2;
                            while let Some((kind, next)) = tokens.get(last + 1) {
                                let joins = matches!(
                                    kind,
                                    AttrToken::Word | AttrToken::Equals | AttrToken::Slash
                                );
                                if !joins || next.start != end {
                                    break;
                                }
                                end = next.end;
                                last += 1;
                            }
                            value = Some(span.start..end);
                            i = last;
                        }
                        None => i += 1,
                    }
                }
                attributes.push(AttrSpan { name: name.clone(), value });
            }
            (AttrToken::Slash, _) if i == tokens.len() - 1 => self_closing = true,
            _ => {}
        }
        i += 1;
    }

    StartTagSpans {
        name: open..base,
        attributes,
        self_closing,
    }
}

/// Split the slice of a [`Token::StartTag`] into name and attributes.
pub fn parse_start_tag(slice: &str) -> StartTag {
    let spans = scan_start_tag(slice);
    let mut attributes: Vec<(String, String)> = Vec::new();
    for attr in spans.attributes {
        let name = slice[attr.name].to_ascii_lowercase();
        // First occurrence wins, as in browsers.
        if attributes.iter().any(|(n, _)| *n == name) {
            continue;
        }
        let value = attr
            .value
            .map(|v| decode_entities(unquote(&slice[v])))
            .unwrap_or_default();
        attributes.push((name, value));
    }

    StartTag {
        name: slice[spans.name].to_ascii_lowercase(),
        attributes,
        self_closing: spans.self_closing,
    }
}

/// Strip one pair of matching quotes.
pub(crate) fn unquote(raw: &str) -> &str {
    let quoted = raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')));
    if quoted {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Element name of a [`Token::EndTag`] slice, lowercased.
pub fn end_tag_name(slice: &str) -> String {
    slice
        .trim_start_matches("</")
        .trim_end_matches('>')
        .trim()
        .to_ascii_lowercase()
}

/// Decode the handful of character references the page uses.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_owned();
    }
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
