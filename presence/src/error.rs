//! Error types signaled by [`Optional`](crate::Optional) operations.
//!
//! There are exactly two failure kinds: requiring a value at a boundary
//! where none was supplied ([`AbsentValueError`]) and asking a container
//! for a value it does not hold ([`EmptyOptionalError`]). Both indicate a
//! broken caller contract, so neither is retried, logged or suppressed
//! anywhere in this crate; they surface synchronously through `Result` and
//! stay with the caller. [`OptionalError`] bundles the two for call sites
//! that mix construction and access under a single `?`.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("required value is absent")]
/// A required value was absent at a nullable boundary.
///
/// Signaled by [`Optional::try_of`](crate::Optional::try_of) when the
/// boundary value turns out to be `None`: the caller demanded a present
/// container and supplied nothing to put in it.
pub struct AbsentValueError;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("no value present")]
/// An empty container was asked for its value.
///
/// Signaled by [`Optional::get`](crate::Optional::get). Check
/// [`is_present`](crate::Optional::is_present) first, or let the error
/// propagate to whoever can decide what an absent value means there.
pub struct EmptyOptionalError;

#[derive(Error, Debug, PartialEq, Eq)]
/// Either failure kind, for call sites that mix construction and access.
///
/// # Examples
///
/// ```
/// use presence::error::OptionalError;
/// use presence::Optional;
///
/// fn first_even(input: Option<i32>) -> Result<i32, OptionalError> {
///     let held = Optional::try_of(input)?.filter(|n| n % 2 == 0);
///     Ok(*held.get()?)
/// }
///
/// assert_eq!(first_even(Some(4)), Ok(4));
/// assert!(first_even(None).is_err());
/// assert!(first_even(Some(3)).is_err());
/// ```
pub enum OptionalError {
    /// Construction demanded a value and the boundary supplied none
    #[error("construction rejected an absent value")]
    Absent(#[from] AbsentValueError),
    /// A value was read out of a container holding none
    #[error("access to an empty container")]
    Empty(#[from] EmptyOptionalError),
}
