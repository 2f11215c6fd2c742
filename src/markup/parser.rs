//! Tree builder: turns the token stream into a [`Dom`].
//!
//! Every document gets a synthetic `#document` root so that fragments with
//! several top-level elements remain queryable. Text is not kept; the runtime
//! only ever reads elements, classes and attributes.

use logos::Logos;

use super::tokenizer::{end_tag_name, parse_start_tag, Token};
use crate::dom::{Dom, NodeData, NodeId};

/// Errors from markup parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("unterminated comment starting at byte {position}")]
    UnterminatedComment { position: usize },
    #[error("unterminated tag starting at byte {position}")]
    UnterminatedTag { position: usize },
}

/// Elements that never have children or end tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements that take keyboard focus without a `tabindex`.
const NATIVELY_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea"];

/// Tag name of the synthetic document root.
pub const DOCUMENT_TAG: &str = "#document";

/// Parse an HTML document into a [`Dom`].
pub fn parse_document(source: &str) -> Result<Dom, MarkupError> {
    let mut dom = Dom::new();
    let document = dom.insert(NodeData::new(DOCUMENT_TAG));
    let mut open: Vec<(String, NodeId)> = Vec::new();

    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let token = match result {
            Ok(token) => token,
            Err(()) if slice.starts_with("<!--") => {
                return Err(MarkupError::UnterminatedComment { position: span.start });
            }
            Err(()) => return Err(MarkupError::UnterminatedTag { position: span.start }),
        };

        match token {
            Token::Doctype | Token::Comment | Token::Text => {}
            Token::Lt => {
                let next = source[span.end..].chars().next();
                if next.is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!') {
                    return Err(MarkupError::UnterminatedTag { position: span.start });
                }
            }
            Token::StartTag => {
                let tag = parse_start_tag(slice);
                let parent = open.last().map(|&(_, id)| id).unwrap_or(document);
                let mut data = element_data(&tag.name, tag.attributes);
                data.source = Some(span.clone());
                let node = dom.insert_child(parent, data);

                if RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) && !tag.self_closing {
                    skip_raw_text(&mut lexer, &tag.name);
                } else if !tag.self_closing && !VOID_ELEMENTS.contains(&tag.name.as_str()) {
                    open.push((tag.name, node));
                }
            }
            Token::EndTag => {
                let name = end_tag_name(slice);
                // Implicitly close anything left open inside the matching
                // element; a stray end tag with no match is ignored.
                if let Some(pos) = open.iter().rposition(|(n, _)| *n == name) {
                    open.truncate(pos);
                }
            }
        }
    }

    Ok(dom)
}

fn element_data(name: &str, attributes: Vec<(String, String)>) -> NodeData {
    let mut data = NodeData::new(name);
    for (attr, value) in attributes {
        data.set_attr(attr, value);
    }
    data.focusable = data.attr("tabindex").is_some_and(|t| t.trim() != "-1")
        || NATIVELY_FOCUSABLE.contains(&name)
        || (name == "a" && data.attr("href").is_some());
    data
}

/// Advance the lexer past the raw content and end tag of a `script`/`style`.
fn skip_raw_text(lexer: &mut logos::Lexer<'_, Token>, name: &str) {
    let rest = lexer.remainder();
    let needle = format!("</{name}");
    let lower = rest.to_ascii_lowercase();
    match lower.find(&needle) {
        Some(start) => {
            let close = lower[start..].find('>').map(|i| start + i + 1).unwrap_or(rest.len());
            lexer.bump(close);
        }
        None => lexer.bump(rest.len()),
    }
}
