//! PGN export for finished games.
//!
//! Serializes a move history and headers to PGN text with coordinate
//! movetext, for handing a completed game to external recorders.

use std::collections::BTreeMap;

use chrono::Local;

use crate::board::chess_move::Move;
use crate::utils::notation::move_to_coords;

/// Write a game record with default headers; the `Date` tag carries the
/// local date.
pub fn write_pgn(move_history: &[Move], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Arbiter Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    write_pgn_with_headers(move_history, &headers)
}

/// Write a game record with caller-supplied headers.
pub fn write_pgn_with_headers(
    move_history: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let coords = move_to_coords(mv);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, coords));
        } else {
            movetext_parts.push(coords);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
