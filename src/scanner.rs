//! Header declaration scanner — line-by-line state machine.
//!
//! Every line runs through the same ordered checks: block close,
//! enumerator, enum, namespace, class/struct, function. Several checks may
//! fire on one line. Only one level of class and one level of enum are
//! tracked; nested classes do not indent further.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_ENUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*enum\s+(class|struct)?\s*([a-zA-Z_]\w*)?\s*(?::\s*[a-zA-Z_]\w*)?").unwrap()
});

static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*namespace ([a-zA-Z_]\w*)").unwrap());

static RE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:class|struct)\s*([a-zA-Z_]\w*)").unwrap());

// Modifiers, return type, name, then the parameter list up to the first `)`
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:(?:inline|static|constexpr|friend|virtual|explicit|const|\[\[.+\]\])\s+)*",
        r"[a-zA-Z_][\w&<>:]*\s+",
        r"(?:operator\s*.{1,2}|[A-Za-z_:]\w*)",
        r"\(.*?\)"
    ))
    .unwrap()
});

static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*return").unwrap());

// -- Scanner state ------------------------------------------------------------

#[derive(Debug, Default)]
struct ScanState {
    in_class: bool,
    in_enum: bool,
    blocks: Vec<Block>,
}

impl ScanState {
    fn indentation(&self) -> usize {
        4 * usize::from(self.in_class) + 4 * usize::from(self.in_enum)
    }

    fn push(&mut self, line: usize, indent: usize, declaration: Declaration) {
        self.blocks.push(Block::Entry(Entry {
            line,
            indent,
            declaration,
        }));
    }
}

// -- Public API ---------------------------------------------------------------

/// Scan a header's text into a Document.
pub fn scan(input: &str, path: &str) -> Document {
    let mut state = ScanState::default();

    for (index, line) in input.lines().enumerate() {
        process_line(&mut state, index + 1, line);
    }

    let mut unclosed = Vec::new();
    if state.in_class {
        unclosed.push(Scope::Class);
    }
    if state.in_enum {
        unclosed.push(Scope::Enum);
    }

    Document {
        source: Source::new(path),
        blocks: state.blocks,
        unclosed,
    }
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ScanState, number: usize, line: &str) {
    // Computed before this line changes any state, so a closing line
    // still reports the depth it closes.
    let indent = s.indentation();
    let stripped = line.trim();

    // 1. Block close
    if stripped.starts_with("};") {
        if s.in_enum {
            s.in_enum = false;
            s.blocks.push(Block::Close(Scope::Enum));
        } else if s.in_class {
            s.in_class = false;
            s.blocks.push(Block::Close(Scope::Class));
        }
    }

    // 2. Enumerator, only inside an enum opened on an earlier line
    if s.in_enum {
        s.push(
            number,
            indent,
            Declaration::Enumerator {
                name: enumerator_name(stripped).to_string(),
            },
        );
    }

    // 3. Enum opening
    if let Some(caps) = RE_ENUM.captures(line) {
        s.in_enum = true;
        s.push(
            number,
            indent,
            Declaration::Enum {
                scoped: caps.get(1).is_some(),
                name: caps.get(2).map(|m| m.as_str().to_string()),
            },
        );
        if let Some(body) = inline_body(line) {
            let body_indent = s.indentation();
            for name in body.split(',').filter_map(inline_enumerator_name) {
                s.push(
                    number,
                    body_indent,
                    Declaration::Enumerator {
                        name: name.to_string(),
                    },
                );
            }
            s.in_enum = false;
            s.blocks.push(Block::Close(Scope::Enum));
        }
    }

    // 4. Namespace opening, always flush
    if let Some(caps) = RE_NAMESPACE.captures(line) {
        s.push(
            number,
            0,
            Declaration::Namespace {
                name: caps[1].to_string(),
            },
        );
    }

    // 5. Class/struct opening, directive flush with its body one level in
    if let Some(caps) = RE_CLASS.captures(line) {
        s.push(
            number,
            0,
            Declaration::Class {
                name: caps[1].to_string(),
            },
        );
        s.in_class = true;
    }

    // 6. Function declaration
    if let Some(signature) = function_signature(line) {
        s.push(
            number,
            indent,
            Declaration::Function {
                signature: signature.to_string(),
            },
        );
    }
}

/// Name of an enumerator from a trimmed line inside an enum body.
///
/// `name = value,` keeps what precedes `=`; otherwise the last character
/// (the separating comma) is dropped.
fn enumerator_name(stripped: &str) -> &str {
    match stripped.find('=') {
        Some(i) => stripped[..i].trim(),
        None => {
            let mut chars = stripped.chars();
            chars.next_back();
            chars.as_str()
        }
    }
}

/// Text between `{` and a later `}` on an enum line, if the body is
/// complete on that line.
fn inline_body(line: &str) -> Option<&str> {
    let open = line.find('{')?;
    let rest = &line[open + 1..];
    let close = rest.find('}')?;
    Some(&rest[..close])
}

/// One comma-separated piece of a single-line enum body.
fn inline_enumerator_name(piece: &str) -> Option<&str> {
    let name = match piece.find('=') {
        Some(i) => &piece[..i],
        None => piece,
    }
    .trim();
    (!name.is_empty()).then_some(name)
}

/// Function signature on the line, cut after the last `)` of the match.
fn function_signature(line: &str) -> Option<&str> {
    if RE_RETURN.is_match(line) {
        return None;
    }
    let matched = RE_FUNCTION.find(line)?.as_str().trim();
    let end = matched.rfind(')').map_or(matched.len(), |i| i + 1);
    Some(&matched[..end])
}
