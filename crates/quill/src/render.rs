use std::fmt::{Display, Write as _};

use chrono::{DateTime, Local, TimeZone, Utc};
use owo_colors::OwoColorize;
use quill_core::GeneratedItem;
use quill_core::normalize::{Block, EXCERPT_CHARS, excerpt, paragraphize};

pub const BAR_CHAR: &str = "▎";

/// `Oct 19, 2026`, or `October 19, 2026` when `long`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, long: bool) -> String
where
    Tz::Offset: Display,
{
    let fmt = if long { "%B %-d, %Y" } else { "%b %-d, %Y" };
    date.format(fmt).to_string()
}

fn local_date(date: &DateTime<Utc>, long: bool) -> String {
    format_date(&date.with_timezone(&Local), long)
}

/// The article just generated, or the error shown in its place.
pub fn result(item: &GeneratedItem, failed: bool) -> String {
    let mut out = String::new();
    if failed {
        let bar = BAR_CHAR.bright_red();
        writeln!(out, "{bar}{}", item.title.bright_red().bold()).ok();
        for line in item.content.lines() {
            writeln!(out, "{bar}{}", line.red()).ok();
        }
        return out;
    }

    let bar = BAR_CHAR.bright_cyan();
    writeln!(out, "{bar}{}", item.title.bright_white().bold()).ok();
    writeln!(out, "{bar}").ok();
    for line in item.content.lines() {
        writeln!(out, "{bar}{line}").ok();
    }
    write!(
        out,
        "{}",
        "Saved. `:discard` deletes it again, `:clear` dismisses it.".dimmed()
    )
    .ok();
    out
}

/// One entry of `:list`.
pub fn card(position: usize, item: &GeneratedItem) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} {} {}",
        format!("[{position}]").bright_cyan(),
        item.topic.bright_yellow(),
        local_date(&item.created_at, false).dimmed()
    )
    .ok();
    writeln!(out, "    {}", item.title.bold()).ok();
    write!(
        out,
        "    {}",
        excerpt(&item.content, EXCERPT_CHARS).replace('\n', " ")
    )
    .ok();
    out
}

/// The full read view of an item.
pub fn read_view(item: &GeneratedItem) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} {}",
        item.topic.bright_yellow(),
        local_date(&item.created_at, true).dimmed()
    )
    .ok();
    writeln!(out, "{}", item.title.bright_white().bold()).ok();
    for block in paragraphize(&item.content) {
        writeln!(out).ok();
        let text = match block {
            Block::Heading(text) => text.bold().to_string(),
            Block::Paragraph(text) => text,
        };
        writeln!(out, "{text}").ok();
    }
    out
}
