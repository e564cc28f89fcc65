//! Guestbook page — the render payload shared by the read and write paths.
//!
//! Both routes end here with an optional feed. `None` (fetch failed) and an
//! empty feed render the same shell with no entries.

use askama::Template;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::feed::Message;

/// One rendered list entry.
pub struct Entry<'a> {
    pub id: &'a str,
    pub author: &'a str,
    pub message: &'a str,
    pub posted_at: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct GuestbookPage<'a> {
    pub entries: Vec<Entry<'a>>,
    pub notice: Option<&'a str>,
}

impl<'a> GuestbookPage<'a> {
    #[must_use]
    pub fn new(feed: Option<&'a [Message]>, notice: Option<&'a str>) -> Self {
        let entries = feed
            .unwrap_or_default()
            .iter()
            .map(|m| Entry {
                id: &m.id,
                author: &m.author,
                message: &m.message,
                posted_at: format_timestamp(&m.created_at),
            })
            .collect();
        Self { entries, notice }
    }
}

/// Format an RFC 3339 timestamp as `18 Oct 2026, 14:05` (UTC). Anything that
/// does not parse is shown verbatim.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| {
            ts.to_offset(time::UtcOffset::UTC)
                .format(format_description!("[day padding:none] [month repr:short] [year], [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
