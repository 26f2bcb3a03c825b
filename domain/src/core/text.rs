//! Short previews of customer and agent text for log lines and errors.

use std::borrow::Cow;

/// The first `max_chars` characters of `text`, with `...` appended when
/// anything was cut. Line breaks are flattened to spaces.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    let cut = text.char_indices().nth(max_chars).map(|(end, _)| end);
    let head = &text[..cut.unwrap_or(text.len())];

    if cut.is_none() && !head.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut out: String = head
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if cut.is_some() {
        out.push_str("...");
    }
    Cow::Owned(out)
}
