//! Block-style YAML emitter
//!
//! Writes a mapping-rooted document in the layout `serde_yaml` produces
//! (two-space mapping indent, sequences flush with their parent key, literal
//! blocks for multi-line text) but chooses scalar styles itself. Any string
//! that a YAML 1.1 or 1.2 reader would resolve to a boolean, null, number or
//! timestamp is single-quoted, so `"no"`, `"12:30"` and `"2024-01-01"` stay
//! strings for every consumer.

use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

/// Render `root` as a block-style YAML document ending in a newline
pub fn to_string(root: &Mapping) -> String {
    let mut emitter = Emitter::default();
    if root.is_empty() {
        emitter.out.push_str("{}\n");
    } else {
        emitter.mapping(root, 0, false);
    }
    emitter.out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Right after `key:`
    MappingValue,
    /// Right after `- `
    SequenceItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Block,
    Flow,
}

#[derive(Default)]
struct Emitter {
    out: String,
}

impl Emitter {
    fn pad(&mut self, indent: usize) {
        self.out.extend(std::iter::repeat(' ').take(indent));
    }

    /// Entries at `indent`; with `inline` the first one continues the current line
    fn mapping(&mut self, mapping: &Mapping, indent: usize, mut inline: bool) {
        for (key, value) in mapping {
            if !inline {
                self.pad(indent);
            }
            inline = false;
            self.key(key);
            self.out.push(':');
            self.node(value, indent, Slot::MappingValue);
        }
    }

    fn sequence(&mut self, items: &[Value], indent: usize, mut inline: bool) {
        for item in items {
            if !inline {
                self.pad(indent);
            }
            inline = false;
            self.out.push_str("- ");
            self.node(item, indent, Slot::SequenceItem);
        }
    }

    /// `indent` is the indent of the collection holding the node
    fn node(&mut self, value: &Value, indent: usize, slot: Slot) {
        match value {
            Value::Mapping(mapping) if !mapping.is_empty() => match slot {
                Slot::MappingValue => {
                    self.out.push('\n');
                    self.mapping(mapping, indent + 2, false);
                }
                Slot::SequenceItem => self.mapping(mapping, indent + 2, true),
            },
            Value::Sequence(items) if !items.is_empty() => match slot {
                Slot::MappingValue => {
                    self.out.push('\n');
                    self.sequence(items, indent, false);
                }
                Slot::SequenceItem => self.sequence(items, indent + 2, true),
            },
            Value::Tagged(tagged) => {
                if slot == Slot::MappingValue {
                    self.out.push(' ');
                }
                self.tagged(tagged, indent);
            }
            scalar => {
                if slot == Slot::MappingValue {
                    self.out.push(' ');
                }
                self.scalar(scalar, indent);
            }
        }
    }

    fn tagged(&mut self, tagged: &TaggedValue, indent: usize) {
        self.out.push_str(&tagged.tag.to_string());
        match &tagged.value {
            Value::Mapping(mapping) if !mapping.is_empty() => {
                self.out.push('\n');
                self.mapping(mapping, indent + 2, false);
            }
            Value::Sequence(items) if !items.is_empty() => {
                self.out.push('\n');
                self.sequence(items, indent + 2, false);
            }
            inner => {
                self.out.push(' ');
                self.scalar(inner, indent);
            }
        }
    }

    /// A scalar or empty collection in block context, through the end of its line
    fn scalar(&mut self, value: &Value, indent: usize) {
        match value {
            Value::String(text) if text.contains('\n') && literal_allowed(text) => {
                self.literal(text, indent + 2);
            }
            _ => {
                let rendered = inline_text(value, Context::Block);
                self.out.push_str(&rendered);
                self.out.push('\n');
            }
        }
    }

    fn literal(&mut self, text: &str, indent: usize) {
        let chomp = if !text.ends_with('\n') {
            "-"
        } else if text.ends_with("\n\n") {
            "+"
        } else {
            ""
        };
        self.out.push('|');
        self.out.push_str(chomp);
        self.out.push('\n');

        let body = text.strip_suffix('\n').unwrap_or(text);
        for line in body.split('\n') {
            if !line.is_empty() {
                self.pad(indent);
                self.out.push_str(line);
            }
            self.out.push('\n');
        }
    }

    fn key(&mut self, key: &Value) {
        let rendered = inline_text(key, Context::Flow);
        self.out.push_str(&rendered);
    }
}

/// Single-line rendering, used for keys, flow collections and plain scalars
fn inline_text(value: &Value, context: Context) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote(text, context),
        Value::Sequence(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| inline_text(item, Context::Flow))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Mapping(mapping) => {
            let rendered: Vec<String> = mapping
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}: {}",
                        inline_text(key, Context::Flow),
                        inline_text(value, Context::Flow)
                    )
                })
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
        Value::Tagged(tagged) => {
            format!("{} {}", tagged.tag, inline_text(&tagged.value, context))
        }
    }
}

fn quote(text: &str, context: Context) -> String {
    if text.chars().any(needs_escape) {
        double_quoted(text)
    } else if plain_allowed(text, context) {
        text.to_string()
    } else {
        format!("'{}'", text.replace('\'', "''"))
    }
}

fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if needs_escape(c) => {
                out.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Literal blocks cannot carry control characters other than line breaks,
/// and need an explicit indentation hint when the text starts with a space
fn literal_allowed(text: &str) -> bool {
    !text.starts_with([' ', '\n'])
        && !text.chars().any(|c| c != '\n' && needs_escape(c))
}

/// Characters that only a double-quoted scalar can carry: controls, plus the
/// Unicode separators and BOM that readers treat as breaks or markers
fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}')
}

fn plain_allowed(text: &str, context: Context) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    if text.trim() != text || resolves_to_non_string(text) {
        return false;
    }
    if matches!(
        first,
        '-' | '?' | ':' | ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\''
            | '"' | '%' | '@' | '`'
    ) {
        return false;
    }
    if text.contains(": ") || text.contains(" #") || text.ends_with(':') {
        return false;
    }
    context == Context::Block || !text.contains([',', '[', ']', '{', '}'])
}

/// True when a plain scalar with this text would load as something other than
/// a string under the YAML 1.1 or 1.2 core schemas
fn resolves_to_non_string(text: &str) -> bool {
    is_reserved_word(text) || looks_numeric(text) || looks_like_date(text)
}

fn is_reserved_word(text: &str) -> bool {
    matches!(
        text,
        "~" | "null" | "Null" | "NULL"
            | "y" | "Y" | "yes" | "Yes" | "YES"
            | "n" | "N" | "no" | "No" | "NO"
            | "true" | "True" | "TRUE"
            | "false" | "False" | "FALSE"
            | "on" | "On" | "ON"
            | "off" | "Off" | "OFF"
            | ".inf" | ".Inf" | ".INF"
            | "+.inf" | "+.Inf" | "+.INF"
            | "-.inf" | "-.Inf" | "-.INF"
            | ".nan" | ".NaN" | ".NAN"
            | "<<" | "="
    )
}

/// Integers in any base, floats, exponents, `_` separators and sexagesimal
/// forms such as `12:30`. Errs toward quoting: `1.0.0` is caught as well.
fn looks_numeric(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);
    let mut chars = unsigned.chars();
    let leads_with_digit = match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };
    leads_with_digit
        && unsigned.chars().all(|c| {
            c.is_ascii_hexdigit() || matches!(c, '_' | '.' | ':' | 'x' | 'X' | 'o' | 'O' | '+' | '-')
        })
}

/// `YYYY-M-D` prefix of a YAML timestamp
fn looks_like_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 8 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}
