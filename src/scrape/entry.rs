/// One ranked repository from the trending page
///
/// Entries are built once during extraction and never modified; their rank
/// is their position in the list returned by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingEntry {
    /// `owner/repo` with whitespace normalized
    pub name: String,

    /// Absolute link to the repository
    pub url: String,

    /// Star count as shown on the page, 0 when missing
    pub stars: u64,

    /// Repository description, possibly empty
    pub description: String,
}

impl TrendingEntry {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        stars: u64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            stars,
            description: description.into(),
        }
    }
}
