/// Wraps an identifier in MSSQL square brackets.
/// An embedded `]` is doubled, as T-SQL expects inside a bracketed name.
pub fn bracket_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('[');

    for ch in name.chars() {
        if ch == ']' {
            out.push(']');
        }
        out.push(ch);
    }

    out.push(']');
    out
}

/// Length in characters, which is what column alignment is measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
