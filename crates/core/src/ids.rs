//! Identifier and quantity helpers shared by every repository.
//!
//! Ids are assigned as `max(existing) + 1`, so a deleted id can be handed out
//! again once it is the maximum. Callers that need stable ids across deletes
//! must not rely on them being unique over time.

use crate::error::CoreError;
use crate::types::DbId;

/// Reject ids that are not positive integers.
pub fn validate_id(entity: &str, id: DbId) -> Result<DbId, CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidArgument(format!(
            "{entity} ID must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

/// Coerce a raw string (path segment, query value) into a valid id.
pub fn parse_id(entity: &str, raw: &str) -> Result<DbId, CoreError> {
    let id = raw.trim().parse::<DbId>().map_err(|_| {
        CoreError::InvalidArgument(format!("{entity} ID must be a number, got '{raw}'"))
    })?;
    validate_id(entity, id)
}

/// The id the next record in a collection receives.
///
/// Fails once the collection already holds the largest representable id.
///
/// ```
/// use sitetrack_core::ids::next_id;
/// assert_eq!(next_id([3, 7, 5]), Ok(8));
/// assert_eq!(next_id(std::iter::empty()), Ok(1));
/// ```
pub fn next_id(ids: impl IntoIterator<Item = DbId>) -> Result<DbId, CoreError> {
    let max = ids.into_iter().fold(0, DbId::max);
    max.checked_add(1).ok_or_else(|| {
        CoreError::Internal(format!("No id available after {max}"))
    })
}

/// Validate a requested quantity, returning it as an unsigned count.
pub fn validate_quantity(quantity: i64) -> Result<u32, CoreError> {
    if quantity <= 0 {
        return Err(CoreError::InvalidArgument(format!(
            "Quantity must be greater than 0, got {quantity}"
        )));
    }
    u32::try_from(quantity).map_err(|_| {
        CoreError::InvalidArgument(format!("Quantity {quantity} exceeds the supported maximum"))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn positive_id_is_accepted() {
        assert_eq!(validate_id("Task", 1), Ok(1));
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert_matches!(validate_id("Task", 0), Err(CoreError::InvalidArgument(_)));
        assert_matches!(validate_id("Task", -4), Err(CoreError::InvalidArgument(_)));
    }

    #[test]
    fn parse_id_trims_whitespace() {
        assert_eq!(parse_id("Material", " 12 "), Ok(12));
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        assert_matches!(
            parse_id("Material", "abc"),
            Err(CoreError::InvalidArgument(msg)) if msg.contains("must be a number")
        );
        assert_matches!(parse_id("Material", "1.5"), Err(CoreError::InvalidArgument(_)));
        assert_matches!(parse_id("Material", "-2"), Err(CoreError::InvalidArgument(_)));
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        assert_eq!(next_id(vec![1, 2, 3]), Ok(4));
        assert_eq!(next_id(vec![10, 2]), Ok(11));
    }

    #[test]
    fn next_id_of_empty_collection_is_one() {
        assert_eq!(next_id(Vec::new()), Ok(1));
    }

    #[test]
    fn next_id_after_largest_id_is_an_error() {
        assert_matches!(next_id(vec![1, DbId::MAX]), Err(CoreError::Internal(_)));
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(validate_quantity(5), Ok(5));
        assert_matches!(validate_quantity(0), Err(CoreError::InvalidArgument(_)));
        assert_matches!(validate_quantity(-1), Err(CoreError::InvalidArgument(_)));
    }

    #[test]
    fn quantity_beyond_u32_is_rejected() {
        assert_matches!(
            validate_quantity(i64::from(u32::MAX) + 1),
            Err(CoreError::InvalidArgument(_))
        );
    }
}
