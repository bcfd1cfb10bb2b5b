//! Parser for the small list literals embedded in `data-content` attributes
//!
//! Product links carry analytics metadata such as
//! `['Navigation Motorcycle', 'Ninja 400', 'Sport']`. Only this fixed shape is
//! accepted: a bracketed, comma-separated list of quoted strings or bare
//! tokens. Anything else is rejected as a whole rather than guessed at.

use std::iter::Peekable;
use std::str::Chars;

/// Parses a bracketed list literal into its elements
///
/// # Returns
///
/// * `Some(Vec<String>)` - The unquoted elements, in order
/// * `None` - The input is not a well-formed list literal
///
/// # Example
///
/// ```
/// use motospec::extract::parse_literal_list;
///
/// let items = parse_literal_list("['Navigation Motorcycle', 'Ninja 400']").unwrap();
/// assert_eq!(items, vec!["Navigation Motorcycle", "Ninja 400"]);
/// ```
pub fn parse_literal_list(input: &str) -> Option<Vec<String>> {
    let mut chars = input.trim().chars().peekable();
    let mut items = Vec::new();

    if chars.next()? != '[' {
        return None;
    }

    loop {
        skip_whitespace(&mut chars);
        match chars.peek()? {
            ']' => {
                chars.next();
                break;
            }
            '\'' | '"' => items.push(parse_quoted(&mut chars)?),
            _ => items.push(parse_bare(&mut chars)?),
        }

        skip_whitespace(&mut chars);
        match chars.next()? {
            ',' => continue,
            ']' => break,
            _ => return None,
        }
    }

    // Nothing may follow the closing bracket
    if chars.next().is_some() {
        return None;
    }

    Some(items)
}

/// Extracts the canonical model name (second element) from a data-content value
pub fn model_name_from_data_content(data_content: &str) -> Option<String> {
    let items = parse_literal_list(data_content)?;
    let name = items.get(1)?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let quote = chars.next()?;
    let mut value = String::new();

    loop {
        match chars.next()? {
            '\\' => match chars.next()? {
                'n' => value.push('\n'),
                't' => value.push('\t'),
                other => value.push(other),
            },
            c if c == quote => return Some(value),
            c => value.push(c),
        }
    }
}

fn parse_bare(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut value = String::new();

    while let Some(&c) = chars.peek() {
        if c == ',' || c == ']' || c == '[' || c == '\'' || c == '"' {
            break;
        }
        value.push(c);
        chars.next();
    }

    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
