//! Write DOM class changes back into the markup they were parsed from.
//!
//! Text is never stored in the [`Dom`], so the page cannot be serialised
//! from the tree alone. Instead every element remembers where its start tag
//! sits in the source, and the writer patches only the `class` attribute of
//! tags whose classes changed. Everything else is copied byte for byte.

use std::ops::Range;

use super::tokenizer::{decode_entities, scan_start_tag, unquote};
use crate::dom::{Dom, NodeData};

/// Re-emit `source` with the classes each element carries in `dom`.
///
/// `dom` must have been parsed from `source`. A DOM whose classes did not
/// change yields `source` unchanged.
pub fn write_classes(source: &str, dom: &Dom) -> String {
    let mut edits: Vec<(Range<usize>, String)> = dom
        .document_order()
        .into_iter()
        .filter_map(|node| dom.get(node))
        .filter_map(|data| class_edit(source, data))
        .collect();
    edits.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(source.len() + edits.len() * 16);
    let mut cursor = 0;
    for (range, replacement) in edits {
        if range.start < cursor {
            continue;
        }
        out.push_str(&source[cursor..range.start]);
        out.push_str(&replacement);
        cursor = range.end;
    }
    out.push_str(&source[cursor..]);
    out
}

fn class_edit(source: &str, data: &NodeData) -> Option<(Range<usize>, String)> {
    let tag = data.source.clone()?;
    let slice = source.get(tag.clone())?;
    let spans = scan_start_tag(slice);
    let attr = spans
        .attributes
        .iter()
        .find(|a| slice[a.name.clone()].eq_ignore_ascii_case("class"));

    let before = attr
        .and_then(|a| a.value.clone())
        .map(|v| class_list(&decode_entities(unquote(&slice[v]))))
        .unwrap_or_default();
    if before == data.classes {
        return None;
    }

    let quoted = format!("\"{}\"", escape(&data.classes.join(" ")));
    let at = |offset: usize| tag.start + offset;
    Some(match attr {
        Some(attr) => match &attr.value {
            Some(value) => (at(value.start)..at(value.end), quoted),
            None => (at(attr.name.end)..at(attr.name.end), format!("={quoted}")),
        },
        None => (
            at(spans.name.end)..at(spans.name.end),
            format!(" class={quoted}"),
        ),
    })
}

fn class_list(value: &str) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for class in value.split_ascii_whitespace() {
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }
    classes
}

fn escape(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
