//! Attribute code normalization and flag parsing

/// Strips a code down to what is normally found in an attribute code.
///
/// Lowercases the input and drops every character outside `[a-z0-9_]`.
pub fn strip_code(code: Option<&str>) -> String {
	code.unwrap_or_default()
		.to_lowercase()
		.chars()
		.filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
		.collect::<String>()
		.trim()
		.to_string()
}

/// Splits a comma-separated list and normalizes each part.
///
/// Every part yields one code, so an empty list gives a single `""`.
pub fn split_codes(raw: &str) -> Vec<String> {
	raw.trim().split(',').map(|part| strip_code(Some(part))).collect()
}

/// Reads an enable flag. Empty, `0` and `false` are off, anything else is on.
pub fn is_truthy(raw: &str) -> bool {
	let raw = raw.trim();
	!(raw.is_empty() || raw == "0" || raw.eq_ignore_ascii_case("false"))
}


// vim: ts=4
