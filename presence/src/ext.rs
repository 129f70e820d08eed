//! Extension traits for lifting plain and nullable values into [`Optional`].

use crate::Optional;

/// Extension trait to wrap any value in a present [`Optional`].
///
/// A postfix spelling of [`Optional::of`] for the end of method chains.
pub trait PresentExt: Sized {
    /// Turns a value into a present [`Optional`].
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::ext::PresentExt;
    ///
    /// let grown = 5.present().map(|n| n + 1);
    /// assert_eq!(grown.get(), Ok(&6));
    /// ```
    fn present(self) -> Optional<Self> {
        Optional::of(self)
    }
}

impl<T> PresentExt for T {}

/// Extension trait to convert a nullable value into an [`Optional`].
///
/// A postfix spelling of [`Optional::of_nullable`].
pub trait IntoOptionalExt<T> {
    /// Turns `Some` into a present container and `None` into an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::ext::IntoOptionalExt;
    ///
    /// assert!(Some(7).into_optional().is_present());
    /// assert!("x".parse::<i32>().ok().into_optional().is_empty());
    /// ```
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptionalExt<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        Optional::of_nullable(self)
    }
}
