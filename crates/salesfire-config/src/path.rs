//! Setting paths used throughout the extension

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingPath {
	GeneralEnabled,
	GeneralSiteId,
	FeedEnabled,
	FeedDefaultBrand,
	FeedBrandCode,
	FeedGenderCode,
	FeedColourCode,
	FeedAgeGroupCode,
	FeedAttributeCodes,
}

impl SettingPath {
	pub const ALL: [SettingPath; 9] = [
		SettingPath::GeneralEnabled,
		SettingPath::GeneralSiteId,
		SettingPath::FeedEnabled,
		SettingPath::FeedDefaultBrand,
		SettingPath::FeedBrandCode,
		SettingPath::FeedGenderCode,
		SettingPath::FeedColourCode,
		SettingPath::FeedAgeGroupCode,
		SettingPath::FeedAttributeCodes,
	];

	/// Dot-separated key as stored in the scoped configuration
	pub fn as_str(self) -> &'static str {
		match self {
			SettingPath::GeneralEnabled => "general.isEnabled",
			SettingPath::GeneralSiteId => "general.siteId",
			SettingPath::FeedEnabled => "feed.isEnabled",
			SettingPath::FeedDefaultBrand => "feed.defaultBrand",
			SettingPath::FeedBrandCode => "feed.brandCode",
			SettingPath::FeedGenderCode => "feed.genderCode",
			SettingPath::FeedColourCode => "feed.colourCode",
			SettingPath::FeedAgeGroupCode => "feed.ageGroupCode",
			SettingPath::FeedAttributeCodes => "feed.attributeCodes",
		}
	}
}

impl std::fmt::Display for SettingPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}


// vim: ts=4
