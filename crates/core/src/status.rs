//! Event publication lifecycle.
//!
//! An event is inserted as `pending` and becomes `approved` when an admin
//! approves it. The transition is one-way and there is no rejected state;
//! rejection is admin non-action.

/// Status of a newly submitted event awaiting review.
pub const STATUS_PENDING: &str = "pending";

/// Status of a published, publicly visible event.
pub const STATUS_APPROVED: &str = "approved";

/// Whether `from -> to` is a legal status transition.
///
/// The only legal transition is `pending -> approved`.
pub fn is_valid_transition(from: &str, to: &str) -> bool {
    from == STATUS_PENDING && to == STATUS_APPROVED
}
