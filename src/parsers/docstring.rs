//! Python string literal decoding and docstring cleanup

/// Decode the source text of a single Python string literal.
///
/// Returns `None` for literals that never produce a `str` constant
/// (f-strings, bytes) and for text that is not a quoted literal.
pub fn decode_string_literal(literal: &str) -> Option<String> {
    let quote_start = literal.find(|c: char| c == '"' || c == '\'')?;
    let prefix = literal[..quote_start].to_ascii_lowercase();
    if prefix.contains('f') || prefix.contains('b') {
        return None;
    }
    let raw = prefix.contains('r');

    let rest = &literal[quote_start..];
    let body = ["\"\"\"", "'''", "\"", "'"]
        .iter()
        .find(|quote| {
            rest.len() >= quote.len() * 2 && rest.starts_with(**quote) && rest.ends_with(**quote)
        })
        .map(|quote| &rest[quote.len()..rest.len() - quote.len()])?;

    if raw {
        Some(body.to_string())
    } else {
        Some(unescape(body))
    }
}

/// Process backslash escapes of a non-raw literal body
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };

        match next {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                push_code_point(&mut out, u32::from_str_radix(&digits, 8).ok(), next, &digits);
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = (0..width)
                    .map_while(|_| chars.next_if(|d| d.is_ascii_hexdigit()))
                    .collect();
                if digits.len() == width {
                    push_code_point(&mut out, u32::from_str_radix(&digits, 16).ok(), next, &digits);
                } else {
                    out.push('\\');
                    out.push(next);
                    out.push_str(&digits);
                }
            }
            other => {
                // Unknown escapes, and named `\N{...}` escapes, are kept verbatim
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn push_code_point(out: &mut String, value: Option<u32>, marker: char, digits: &str) {
    match value.and_then(char::from_u32) {
        Some(ch) => out.push(ch),
        None => {
            out.push('\\');
            if !marker.is_ascii_digit() {
                out.push(marker);
            }
            out.push_str(digits);
        }
    }
}

/// Clean up a docstring's indentation.
///
/// Tabs are expanded, the first line is left-stripped, the smallest
/// indentation of the remaining non-blank lines is removed from each of
/// them, and leading/trailing blank lines are dropped.
pub fn clean_docstring(doc: &str) -> String {
    let expanded = expand_tabs(doc, 8);
    let mut lines: Vec<String> = expanded.split('\n').map(str::to_string).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start();
            (!content.is_empty()).then(|| line.chars().count() - content.chars().count())
        })
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.chars().skip(margin).collect();
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading_blank = lines.iter().take_while(|line| line.is_empty()).count();

    lines[leading_blank..].join("\n")
}

/// Expand tab characters to the next multiple of `tab_size` columns
fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = tab_size - (column % tab_size);
                out.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}
