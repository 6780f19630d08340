//! Block-style YAML emission.
//!
//! One emitter serves both engine backends so dumped output is identical
//! whichever engine is active, and so everything dumped loads back to an
//! equal value. Strings that a plain rendering would re-resolve as some
//! other scalar type get single-quoted; symbols stay plain.

use crate::scalar::resolve_plain;
use crate::value::Value;

/// Serializes a value to a YAML document string.
pub(crate) fn dump(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Seq(items) if !items.is_empty() => {
            out.push_str("---\n");
            emit_block(&mut out, value, "", 0);
        }
        Value::Map(map) if !map.is_empty() => {
            out.push_str("---\n");
            emit_block(&mut out, value, "", 0);
        }
        Value::Seq(_) | Value::Map(_) => {
            out.push_str("--- ");
            out.push_str(empty_flow(value));
            out.push('\n');
        }
        scalar => {
            out.push_str("--- ");
            out.push_str(&render_scalar(scalar));
            out.push('\n');
        }
    }
    out
}

fn pad(indent: usize) -> String {
    " ".repeat(indent)
}

const fn empty_flow(value: &Value) -> &'static str {
    match value {
        Value::Map(_) => "{}",
        _ => "[]",
    }
}

fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Seq(items) => items.is_empty(),
        Value::Map(map) => map.is_empty(),
        _ => false,
    }
}

fn emit_block(out: &mut String, value: &Value, prefix: &str, indent: usize) {
    match value {
        Value::Seq(items) if !items.is_empty() => {
            for (i, item) in items.iter().enumerate() {
                let child_prefix = if i == 0 {
                    format!("{prefix}- ")
                } else {
                    format!("{}- ", pad(indent))
                };
                emit_block(out, item, &child_prefix, indent + 2);
            }
        }
        Value::Map(map) if !map.is_empty() => {
            for (i, (key, val)) in map.iter().enumerate() {
                let line_prefix = if i == 0 {
                    prefix.to_string()
                } else {
                    pad(indent)
                };
                if key.is_scalar() {
                    emit_entry(out, &line_prefix, key, val, indent);
                } else {
                    emit_complex_entry(out, &line_prefix, key, val, indent);
                }
            }
        }
        Value::Seq(_) | Value::Map(_) => {
            out.push_str(prefix);
            out.push_str(empty_flow(value));
            out.push('\n');
        }
        scalar => {
            let rendered = render_scalar(scalar);
            if rendered.is_empty() {
                out.push_str(prefix.trim_end());
            } else {
                out.push_str(prefix);
                out.push_str(&rendered);
            }
            out.push('\n');
        }
    }
}

fn emit_entry(out: &mut String, line_prefix: &str, key: &Value, val: &Value, indent: usize) {
    let rendered_key = render_scalar(key);
    if val.is_scalar() {
        let rendered_val = render_scalar(val);
        if rendered_val.is_empty() {
            out.push_str(&format!("{line_prefix}{rendered_key}:\n"));
        } else {
            out.push_str(&format!("{line_prefix}{rendered_key}: {rendered_val}\n"));
        }
    } else if is_empty_collection(val) {
        out.push_str(&format!("{line_prefix}{rendered_key}: {}\n", empty_flow(val)));
    } else {
        out.push_str(&format!("{line_prefix}{rendered_key}:\n"));
        emit_block(out, val, &pad(indent + 2), indent + 2);
    }
}

fn emit_complex_entry(out: &mut String, line_prefix: &str, key: &Value, val: &Value, indent: usize) {
    let key_prefix = format!("{line_prefix}? ");
    if is_empty_collection(key) {
        out.push_str(&format!("{key_prefix}{}\n", empty_flow(key)));
    } else {
        emit_block(out, key, &key_prefix, indent + 2);
    }

    let val_prefix = format!("{}: ", pad(indent));
    if is_empty_collection(val) {
        out.push_str(&format!("{val_prefix}{}\n", empty_flow(val)));
    } else {
        emit_block(out, val, &val_prefix, indent + 2);
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Float(v) => render_float(*v),
        Value::Symbol(v) => format!(":{v}"),
        Value::String(v) => render_string(v),
        Value::Date(v) => v.format("%Y-%m-%d").to_string(),
        Value::Timestamp(v) => {
            if v.timestamp_subsec_nanos() == 0 {
                v.format("%Y-%m-%d %H:%M:%S %:z").to_string()
            } else {
                v.format("%Y-%m-%d %H:%M:%S%.9f %:z").to_string()
            }
        }
        // Collections never reach here; emit_block handles them.
        Value::Seq(_) | Value::Map(_) => String::new(),
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        return ".nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { ".inf" } else { "-.inf" }.to_string();
    }
    let s = format!("{f}");
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{s}.0")
    }
}

fn render_string(s: &str) -> String {
    if s.contains('\n') || s.chars().any(char::is_control) {
        return render_double_quoted(s);
    }
    if needs_quote(s) {
        return format!("'{}'", s.replace('\'', "''"));
    }
    s.to_string()
}

// YAML double-quote escapes, not Rust's: `\x7F` rather than `\u{7f}`.
fn render_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\x1b' => out.push_str("\\e"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{code:02X}"));
                } else {
                    out.push_str(&format!("\\u{code:04X}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn needs_quote(s: &str) -> bool {
    // A plain rendering must load back as this exact string.
    if resolve_plain(s) != Value::String(s.to_string()) {
        return true;
    }
    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return true;
    }
    if s == "-" || s.starts_with("- ") || s.starts_with("? ") || s.starts_with(": ") {
        return true;
    }
    if let Some(first) = s.chars().next() {
        if matches!(
            first,
            '&' | '*' | '!' | '|' | '>' | '%' | '@' | '`' | '"' | '\'' | '#' | '{' | '}' | '['
                | ']' | ','
        ) {
            return true;
        }
    }
    s.contains(": ") || s.ends_with(':') || s.contains(" #")
}
