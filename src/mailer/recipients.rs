use std::collections::HashSet;

/// Ordered, duplicate-free list of recipient addresses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Parses a comma and/or whitespace separated address list
    ///
    /// Empty items are dropped and repeats removed, keeping the first
    /// occurrence's position.
    ///
    /// # Example
    ///
    /// ```
    /// use trending_digest::mailer::Recipients;
    ///
    /// let recipients = Recipients::parse("a@x.com, b@y.com a@x.com");
    /// assert_eq!(recipients.as_slice(), ["a@x.com", "b@y.com"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut seen = HashSet::new();
        let addresses = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(*s))
            .map(str::to_string)
            .collect();

        Self(addresses)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the list is exactly `[address]`
    pub fn is_only(&self, address: &str) -> bool {
        self.0.len() == 1 && self.0[0] == address
    }
}
