pub mod analysis;
pub mod chart;
pub mod health;
pub mod roast;

use serde::Deserialize;

use crate::api::ApiError;
use crate::config::MAX_MATCH_COUNT;

#[derive(Debug, Deserialize)]
pub struct CountParams {
    pub count: Option<usize>,
}

/// Requested match count, or the default. Must be within 1..=MAX_MATCH_COUNT.
pub fn resolve_count(requested: Option<usize>, default_count: usize) -> Result<usize, ApiError> {
    let count = requested.unwrap_or(default_count);
    if (1..=MAX_MATCH_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(ApiError::BadRequest(format!(
            "count must be between 1 and {MAX_MATCH_COUNT}, got {count}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_count() {
        assert_eq!(resolve_count(None, 10).unwrap(), 10);
        assert_eq!(resolve_count(Some(1), 10).unwrap(), 1);
        assert_eq!(resolve_count(Some(100), 10).unwrap(), 100);
        assert!(matches!(resolve_count(Some(0), 10), Err(ApiError::BadRequest(_))));
        assert!(matches!(resolve_count(Some(101), 10), Err(ApiError::BadRequest(_))));
    }
}
