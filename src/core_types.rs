//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.

/// Order ID - assigned by storage on creation, never client-supplied.
///
/// # Constraints:
/// - **Immutable**: Once assigned, NEVER changes
/// - **Monotonic**: Both storage backends hand out increasing ids
pub type OrderId = i64;

/// User ID - assigned by storage on registration.
pub type UserId = i64;

/// Role name - roles are identified by name only (no numeric key).
pub type RoleName = String;
