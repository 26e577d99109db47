//! Identifier assignment for stores that do not have a native identity
//! mechanism.

use crate::types::DbId;

/// The id handed out when a store holds no records yet.
pub const FIRST_ID: DbId = 1;

/// Compute the next id as `max(existing) + 1`.
///
/// An empty store starts at [`FIRST_ID`]. Returns `None` once the maximum is
/// `DbId::MAX`: there is no larger id to hand out, and reusing the maximum
/// would duplicate it.
pub fn next_id<I>(existing: I) -> Option<DbId>
where
    I: IntoIterator<Item = DbId>,
{
    match existing.into_iter().max() {
        Some(max) => max.checked_add(1),
        None => Some(FIRST_ID),
    }
}
