//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
///
/// Formatter outputs are single lines, so alongside the two strings the
/// diff names the first diverging byte offset.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let byte = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()));

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str(&format!("-{expected:?}\n"));
    out.push_str("+++ actual\n");
    out.push_str(&format!("+{actual:?}\n"));
    out.push_str(&format!("@@ first divergence at byte {byte} @@\n"));
    out
}
