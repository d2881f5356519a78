//! Feed settings snapshot

use serde::Serialize;

/// All feed settings resolved for one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSettings {
	pub enabled: bool,
	pub default_brand: String,
	pub brand_code: String,
	pub gender_code: String,
	pub age_group_code: String,
	pub colour_code: String,
	pub attribute_codes: Vec<String>,
}

impl FeedSettings {
	/// Every attribute code the feed needs to load, without duplicates or blanks
	pub fn all_codes(&self) -> Vec<&str> {
		let mut codes: Vec<&str> = Vec::new();
		let fixed = [&self.brand_code, &self.gender_code, &self.age_group_code, &self.colour_code];
		for code in fixed.into_iter().chain(self.attribute_codes.iter()) {
			if !code.is_empty() && !codes.contains(&code.as_str()) {
				codes.push(code);
			}
		}
		codes
	}
}


// vim: ts=4
