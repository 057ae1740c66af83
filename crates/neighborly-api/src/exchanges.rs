use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use neighborly_types::models::Exchange;

use crate::state::AppState;

/// GET /api/exchanges — every exchange, in list order.
pub async fn list_exchanges(State(state): State<AppState>) -> Json<Vec<Exchange>> {
    Json(state.store.all().to_vec())
}

/// GET /api/match/{user_id} — opposite-type exchanges from other users.
///
/// An id without a leading number owns no exchanges, so it gets an empty list
/// rather than a rejection.
pub async fn match_exchanges(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<Vec<Exchange>> {
    let Some(user_id) = parse_user_id(&raw_id) else {
        debug!("Match lookup for non-numeric user id '{}'", raw_id);
        return Json(Vec::new());
    };

    let matches = state.store.find_matches(user_id);
    debug!("User {} matched {} exchanges", user_id, matches.len());
    Json(matches)
}

/// Read the leading integer of `raw`: leading whitespace, an optional sign,
/// then ASCII digits. Anything after the digits is ignored, so `101abc` and
/// `101.0` both name user 101. Negative ids and overflow own nothing.
fn parse_user_id(raw: &str) -> Option<u64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: u64 = rest[..end].parse().ok()?;

    if negative && value != 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_digits() {
        assert_eq!(parse_user_id("101"), Some(101));
        assert_eq!(parse_user_id("101abc"), Some(101));
        assert_eq!(parse_user_id("101.0"), Some(101));
        assert_eq!(parse_user_id("  +42 "), Some(42));
        assert_eq!(parse_user_id("-0"), Some(0));
    }

    #[test]
    fn no_leading_digits_is_none() {
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("-"), None);
        assert_eq!(parse_user_id("x101"), None);
        assert_eq!(parse_user_id("-101"), None);
        assert_eq!(parse_user_id("99999999999999999999999"), None);
    }
}
