//! Transcript markup. Content is always escaped; only the fixed wrapper
//! spans are real markup.

use chat_core::ports::EntryKind;
use chat_types::config::RoleLabels;

/// Escape the characters that would let text turn into markup.
/// `&` goes first so existing entities are not double-interpreted.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of one `div.msg` transcript entry
pub fn entry_markup(label: &str, content: &str) -> String {
    format!(
        r#"<span class="role">{}:</span> <span>{}</span>"#,
        escape_html(label),
        escape_html(content)
    )
}

pub fn label_for(kind: EntryKind, labels: &RoleLabels) -> &str {
    match kind {
        EntryKind::User => &labels.user,
        EntryKind::Assistant => &labels.assistant,
        EntryKind::Error => &labels.error,
    }
}

/// CSS class of the entry wrapper; errors get an extra modifier
pub fn entry_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Error => "msg msg-error",
        _ => "msg",
    }
}
