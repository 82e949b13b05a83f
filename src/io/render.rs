//! Text rendering of seating charts with optional ANSI gender colors

use crate::algorithm::roster::{Gender, Roster};
use crate::spatial::Seating;

const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Format one identifier as two digits, colored by gender when requested
pub fn format_identifier(identifier: u32, roster: &Roster, colored: bool) -> String {
    let digits = format!("{identifier:02}");
    if !colored {
        return digits;
    }
    match roster.gender_of(identifier) {
        Some(Gender::Male) => format!("{ANSI_BLUE}{digits}{ANSI_RESET}"),
        Some(Gender::Female) => format!("{ANSI_RED}{digits}{ANSI_RESET}"),
        None => digits,
    }
}

/// Render the seating as tab-separated rows, blank for empty seats
pub fn render_seating(seating: &Seating, roster: &Roster, colored: bool) -> String {
    seating
        .to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| {
                    slot.map_or_else(
                        || "  ".to_string(),
                        |identifier| format_identifier(identifier, roster, colored),
                    )
                })
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
