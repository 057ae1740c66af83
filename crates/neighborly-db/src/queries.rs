use crate::ExchangeStore;
use neighborly_types::models::Exchange;

/// Most matches returned for a single lookup.
pub const MATCH_LIMIT: usize = 3;

impl ExchangeStore {
    // -- Listing --

    pub fn all(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn exchanges_for_user(&self, user_id: u64) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter().filter(move |e| e.user_id == user_id)
    }

    // -- Matching --

    /// Exchanges from other users whose type is the opposite of the user's
    /// first exchange, in list order, at most `MATCH_LIMIT`. Users without
    /// exchanges get nothing.
    pub fn find_matches(&self, user_id: u64) -> Vec<Exchange> {
        let Some(first) = self.exchanges_for_user(user_id).next() else {
            return Vec::new();
        };
        let wanted = first.kind.opposite();

        self.exchanges
            .iter()
            .filter(|e| e.user_id != user_id && e.kind == wanted)
            .take(MATCH_LIMIT)
            .cloned()
            .collect()
    }
}
