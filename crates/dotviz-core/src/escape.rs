//! DOT string escaping.

/// Escape letters that already form a meaningful DOT escape sequence
/// after a backslash (`\n`, `\l`, `\N`, `\G`, ...).
const DOT_ESCAPES: &[char] = &['\\', 'N', 'G', 'E', 'T', 'H', 'L', 'n', 'l', 'r'];

/// Backslash-escape quotes, backslashes and NUL.
///
/// NUL becomes the two characters `\0`.
pub fn slashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        match c {
            '\'' | '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value that carries DOT escape sequences.
///
/// Quotes and NUL get a leading backslash. A backslash is doubled unless the
/// next character turns it into a DOT escape, so `\l` survives while a lone
/// `\` becomes `\\`.
pub fn specials(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '\0' => {
                out.push('\\');
                out.push(c);
            }
            '\\' => {
                let keeps = chars.peek().is_some_and(|next| DOT_ESCAPES.contains(next));
                if !keeps {
                    out.push('\\');
                }
                out.push('\\');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Whether the value holds any backslash.
pub fn contains_specials(value: &str) -> bool {
    value.contains('\\')
}

/// Whether the value is an HTML-like label (`<...>`), passed through verbatim.
pub fn is_html(value: &str) -> bool {
    value.starts_with('<')
}
