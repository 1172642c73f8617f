use super::cards::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and tests.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into face-up Card instances.
    ///
    /// Intended only for hardcoded valid tokens in fixtures and test
    /// scenarios (e.g. `["AS", "2C", "TH"]`); invalid tokens panic.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }
}
