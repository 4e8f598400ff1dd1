use std::collections::HashMap;

use crate::models::NewCandidate;

/// A sheet row keyed by header text. Blank cells are absent.
pub type SheetRow = HashMap<String, String>;

/// Header aliases per logical field, in lookup order.
pub const NAME_ALIASES: &[&str] = &["name", "Name"];
pub const NUMBER_ALIASES: &[&str] = &["mobile", "Mobile", "number", "Phone"];
pub const LOCATION_ALIASES: &[&str] = &["location", "Location"];
pub const PROFILE_ALIASES: &[&str] = &["profile", "Profile"];

pub const MIN_NUMBER_LEN: usize = 10;

/// First non-empty value among `aliases`, or `""`.
pub fn resolve<'a>(row: &'a SheetRow, aliases: &[&str]) -> &'a str {
    aliases
        .iter()
        .filter_map(|alias| row.get(*alias))
        .map(String::as_str)
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Keep digits, plus a `+` only when it is the first character kept.
pub fn normalize_number(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Build an insertable candidate from a sheet row, or `None` when the row
/// has no name or its number is too short after normalization.
pub fn candidate_from_row(row: &SheetRow, assign_to: &str) -> Option<NewCandidate> {
    let name = resolve(row, NAME_ALIASES).trim();
    let number = normalize_number(resolve(row, NUMBER_ALIASES));

    if name.is_empty() || number.len() < MIN_NUMBER_LEN {
        return None;
    }

    Some(NewCandidate {
        name: name.to_string(),
        number,
        location: resolve(row, LOCATION_ALIASES).trim().to_string(),
        profile: resolve(row, PROFILE_ALIASES).trim().to_string(),
        assigned_to: assign_to.to_string(),
    })
}
