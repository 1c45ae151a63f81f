//! Serializes a [`Table`] into the body of a Go map literal.

use std::fmt::Write;
use std::hash::Hash;

use crate::config::Order;
use crate::table::Table;

/// A key type that knows how to spell itself inside Go source.
pub trait GoLiteral {
    fn go_literal(&self) -> String;
}

impl GoLiteral for String {
    fn go_literal(&self) -> String {
        go_string(self)
    }
}

impl GoLiteral for u16 {
    fn go_literal(&self) -> String {
        format!("0x{:04x}", self)
    }
}

/// Quotes `s` as a Go interpreted string literal.
pub fn go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// One `\t<key>: <value>,\n` line per entry, concatenated.
///
/// An empty table gives an empty string, which leaves the surrounding
/// `map[..]..{}` literal valid.
pub fn render_entries<K>(table: &Table<K>, order: Order) -> String
where
    K: Clone + Eq + Hash + Ord + GoLiteral,
{
    let mut body = String::new();
    for (key, name) in table.entries(order) {
        let _ = writeln!(body, "\t{}: {},", key.go_literal(), go_string(name));
    }
    body
}
