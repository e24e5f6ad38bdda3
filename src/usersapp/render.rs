//! # Rendering
//!
//! Turns `CmdResult`s into terminal text. Layout math (column widths,
//! centering) is done on display width so names with wide or combining
//! characters still line up.

use crate::commands::{CmdMessage, CmdResult};
use crate::message::Message;
use crate::model::User;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 3] = ["(index)", "name", "age"];

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        Message::write_colorized(out, message.variant, &message.content)?;
    }
    Ok(())
}

/// Messages first, then the user table when the result lists any users.
pub fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    print_messages(out, &result.messages)?;
    if !result.listed_users.is_empty() {
        out.write_all(render_user_table(&result.listed_users).as_bytes())?;
    }
    Ok(())
}

/// Box-drawn table with one row per user, in the given order.
pub fn render_user_table(users: &[User]) -> String {
    let rows: Vec<[String; 3]> = users
        .iter()
        .enumerate()
        .map(|(i, user)| [i.to_string(), user.name.clone(), user.age.to_string()])
        .collect();

    let mut widths = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐', &widths));
    out.push_str(&line(&HEADERS, &widths));
    out.push_str(&border('├', '┼', '┤', &widths));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&cells, &widths));
    }
    out.push_str(&border('└', '┴', '┘', &widths));
    out
}

fn border(left: char, mid: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

fn line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", center(cell, *width)))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

fn center(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(padding - left))
}
