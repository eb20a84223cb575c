//! File name helpers
//!
//! Splits a file name into base name and suffix parts around its dots.

/// Part of `file_name` before the first dot, or the whole name.
pub fn base_name(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(index) => &file_name[..index],
        None => file_name,
    }
}

/// Part of `file_name` before the last dot, or the whole name.
pub fn complete_base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) => &file_name[..index],
        None => file_name,
    }
}

/// Part of `file_name` after the last dot.
///
/// Empty if there is no dot or the dot is the last character.
pub fn suffix(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index + 1 < file_name.len() => &file_name[index + 1..],
        _ => "",
    }
}

/// Part of `file_name` after the first dot.
///
/// Empty if there is no dot or the dot is the last character.
pub fn complete_suffix(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(index) if index + 1 < file_name.len() => &file_name[index + 1..],
        _ => "",
    }
}
