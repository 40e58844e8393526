//! Escaped versus raw string literals.
//!
//! In an ordinary literal a backslash starts an escape sequence, so `\n`
//! becomes a newline character. In a raw literal (`r"..."`) backslashes are
//! kept as-is.

/// Contains a real line break between the two sentences.
pub const ESCAPED_SAMPLE: &str = "This is a simple string\nWith a new line";

/// Contains a backslash followed by `n`, not a line break.
pub const RAW_SAMPLE: &str = r"This is a raw string\nWith a literal backslash";

/// Raw literals with hashes may contain quotes.
pub const RAW_QUOTED_SAMPLE: &str = r#"Raw strings may hold "quotes" and C:\paths\verbatim"#;

/// All samples with a short label, in display order.
pub fn samples() -> [(&'static str, &'static str); 3] {
    [
        ("escaped", ESCAPED_SAMPLE),
        ("raw", RAW_SAMPLE),
        ("raw with hashes", RAW_QUOTED_SAMPLE),
    ]
}

/// Render `text` on a single line with control characters and backslashes
/// spelled out as escape sequences.
pub fn visible_escapes(text: &str) -> String {
    let mut rendered = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '\\' => rendered.push_str("\\\\"),
            c if c.is_control() => rendered.extend(c.escape_default()),
            c => rendered.push(c),
        }
    }
    rendered
}
