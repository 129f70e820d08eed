//! The [`Optional`] container: construction, presence queries, checked
//! access, conditional actions and value transformation.

use std::fmt;

use crate::error::{AbsentValueError, EmptyOptionalError};

/// Internal storage of [`Optional`]. A tagged variant, so absence needs no
/// sentinel value of `T` and types without a spare encoding work unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T> {
    Present(T),
    Empty,
}

/// An immutable container holding at most one value of type `T`.
///
/// A container is either *present* (holds exactly one value) or *empty*,
/// and the state is fixed at construction: the API below takes `&self` or
/// `self` only, so no operation ever flips a container from one state to
/// the other in place.
///
/// Construction goes through [`of`](Optional::of), [`empty`](Optional::empty),
/// [`of_nullable`](Optional::of_nullable) and [`try_of`](Optional::try_of).
/// `std::option::Option` marks the present-or-absent boundary with the rest
/// of the Rust ecosystem; the container itself keeps the strict surface
/// documented here.
///
/// Because nothing mutates after construction, sharing an `Optional` across
/// threads needs no synchronization: `Optional<T>` is `Send`/`Sync` exactly
/// when `T` is. Caller-supplied closures run synchronously on the calling
/// thread; the container never schedules, retries or suspends anything.
///
/// # Examples
///
/// ```
/// use presence::Optional;
///
/// let doubled = Optional::of(21).map(|n| n * 2);
/// assert_eq!(doubled.get(), Ok(&42));
///
/// let nothing = Optional::<i32>::empty();
/// assert!(nothing.is_empty());
/// assert!(nothing.get().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// The canonical empty container for this instantiation.
    ///
    /// Empty containers carry no state and are interchangeable; the
    /// constant exists so an empty can sit in `const` and `static` places,
    /// and so repeated [`empty`](Self::empty) calls can share one value.
    /// Address identity of empties is not part of the contract.
    pub const EMPTY: Self = Self { slot: Slot::Empty };

    /// Creates a container holding `value`.
    ///
    /// The parameter is taken by value, so presence is guaranteed by the
    /// type system and this constructor cannot fail. Use
    /// [`try_of`](Self::try_of) where the input arrives through an
    /// `Option` and absence must be rejected at run time.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let held = Optional::of("carrier");
    /// assert!(held.is_present());
    /// assert_eq!(held.get(), Ok(&"carrier"));
    /// ```
    pub const fn of(value: T) -> Self {
        Self {
            slot: Slot::Present(value),
        }
    }

    /// Creates an empty container.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let nothing = Optional::<u8>::empty();
    /// assert!(nothing.is_empty());
    /// assert_eq!(nothing, Optional::EMPTY);
    /// ```
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a container from a value that may be absent.
    ///
    /// `Some(value)` behaves as [`of`](Self::of), `None` behaves as
    /// [`empty`](Self::empty). Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// assert!(Optional::of_nullable(Some(1)).is_present());
    /// assert!(Optional::<i32>::of_nullable(None).is_empty());
    /// ```
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }

    /// Creates a container from a value that must be present.
    ///
    /// The checked counterpart of [`of`](Self::of) for nullable
    /// boundaries: `Some(value)` yields a present container, `None` is a
    /// precondition violation and is rejected with [`AbsentValueError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::error::AbsentValueError;
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::try_of(Some(7)), Ok(Optional::of(7)));
    /// assert_eq!(Optional::<i32>::try_of(None), Err(AbsentValueError));
    /// ```
    pub fn try_of(value: Option<T>) -> Result<Self, AbsentValueError> {
        match value {
            Some(value) => Ok(Self::of(value)),
            None => Err(AbsentValueError),
        }
    }

    /// Returns `true` if the container holds a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// Returns `true` if the container holds no value; the negation of
    /// [`is_present`](Self::is_present).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the held value.
    ///
    /// The reference points at the value as stored; nothing is copied or
    /// cloned. An empty container signals [`EmptyOptionalError`]; empty
    /// access is a caller mistake to surface at the call boundary, not a
    /// state the container recovers from.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::error::EmptyOptionalError;
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::of(3).get(), Ok(&3));
    /// assert_eq!(Optional::<i32>::empty().get(), Err(EmptyOptionalError));
    /// ```
    pub fn get(&self) -> Result<&T, EmptyOptionalError> {
        match &self.slot {
            Slot::Present(value) => Ok(value),
            Slot::Empty => Err(EmptyOptionalError),
        }
    }

    /// Runs `action` with a borrow of the held value, if any.
    ///
    /// The closure runs synchronously on the calling thread, exactly once
    /// when the container is present; for an empty container it is dropped
    /// uninvoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let mut seen = Vec::new();
    /// Optional::of("a").if_present(|v| seen.push(*v));
    /// Optional::<&str>::empty().if_present(|v| seen.push(*v));
    /// assert_eq!(seen, ["a"]);
    /// ```
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Slot::Present(value) = &self.slot {
            action(value);
        }
    }

    /// Runs `action` with the held value, or `empty_action` when empty.
    ///
    /// Exactly one of the two closures runs per call, synchronously:
    /// `action` with a borrow of the value for a present container,
    /// `empty_action` with no argument for an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    ///
    /// use presence::Optional;
    ///
    /// let log = RefCell::new(Vec::new());
    /// Optional::of("a").if_present_or_else(
    ///     |v| log.borrow_mut().push(v.to_string()),
    ///     || log.borrow_mut().push("none".into()),
    /// );
    /// Optional::<&str>::empty().if_present_or_else(
    ///     |v| log.borrow_mut().push(v.to_string()),
    ///     || log.borrow_mut().push("none".into()),
    /// );
    /// assert_eq!(log.into_inner(), ["a", "none"]);
    /// ```
    pub fn if_present_or_else<F, G>(&self, action: F, empty_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.slot {
            Slot::Present(value) => action(value),
            Slot::Empty => empty_action(),
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    ///
    /// An empty container passes through as empty and `predicate` is never
    /// invoked for it. For a present container the predicate runs exactly
    /// once on a borrow of the value: `true` keeps the value (moved, not
    /// copied), `false` discards it and yields an empty container.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::of(5).filter(|n| *n > 2), Optional::of(5));
    /// assert!(Optional::of(5).filter(|n| *n > 10).is_empty());
    /// assert!(Optional::<i32>::empty().filter(|_| panic!("unreachable")).is_empty());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.slot {
            Slot::Present(value) => {
                if predicate(&value) {
                    Self::of(value)
                } else {
                    Self::empty()
                }
            }
            Slot::Empty => Self::empty(),
        }
    }

    /// Transforms the held value with `mapper`.
    ///
    /// An empty container maps to an empty container and `mapper` is never
    /// invoked. For a present container the mapper runs exactly once,
    /// consuming the held value, and its result is wrapped present. A
    /// mapper that may come back empty-handed returns an `Option` through
    /// [`map_nullable`](Self::map_nullable) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::of(5).map(|n| n * 2).get(), Ok(&10));
    /// assert!(Optional::<i32>::empty().map(|n| n * 2).is_empty());
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Slot::Present(value) => Optional::of(mapper(value)),
            Slot::Empty => Optional::empty(),
        }
    }

    /// Transforms the held value with a mapper whose result may be absent.
    ///
    /// The mapper's result is wrapped with [`of_nullable`](Self::of_nullable)
    /// semantics: `None` collapses to an empty container, so a "present but
    /// absent" state cannot arise downstream of a lookup or parse that
    /// found nothing. An empty container short-circuits without invoking
    /// `mapper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let parse = |s: &str| s.parse::<i32>().ok();
    /// assert_eq!(Optional::of("12").map_nullable(parse).get(), Ok(&12));
    /// assert!(Optional::of("junk").map_nullable(parse).is_empty());
    /// ```
    pub fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.slot {
            Slot::Present(value) => Optional::of_nullable(mapper(value)),
            Slot::Empty => Optional::empty(),
        }
    }

    /// Borrows the container as a std `Option`.
    ///
    /// The bridge for pattern matching and for handing the value to
    /// `Option`-based code without giving up the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let held = Optional::of(9);
    /// assert_eq!(held.as_option(), Some(&9));
    /// assert!(held.is_present());
    /// ```
    pub fn as_option(&self) -> Option<&T> {
        match &self.slot {
            Slot::Present(value) => Some(value),
            Slot::Empty => None,
        }
    }
}

/// The empty container, matching the `Default` of std's `Option`.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Diagnostic rendering of the state and the held value; the exact format
/// is not a stable contract.
impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => write!(f, "Optional[{value:?}]"),
            Slot::Empty => f.write_str("Optional[empty]"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value.slot {
            Slot::Present(value) => Some(value),
            Slot::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::Optional;
    use crate::error::{AbsentValueError, EmptyOptionalError};

    #[test]
    fn construction_fixes_presence() {
        assert!(Optional::of(1).is_present());
        assert!(!Optional::of(1).is_empty());
        assert!(Optional::<i32>::empty().is_empty());
        assert!(!Optional::<i32>::empty().is_present());
    }

    #[test]
    fn empty_values_are_interchangeable() {
        assert_eq!(Optional::<u8>::empty(), Optional::<u8>::EMPTY);
        assert_eq!(Optional::<u8>::default(), Optional::<u8>::empty());
    }

    #[test]
    fn empty_constant_is_usable_in_const_context() {
        const NOTHING: Optional<u32> = Optional::EMPTY;
        assert!(NOTHING.is_empty());
    }

    #[test]
    fn get_borrows_the_stored_value() {
        let held = Optional::of(String::from("payload"));
        assert_eq!(held.get().map(String::as_str), Ok("payload"));

        // Same storage on every access, not a copy
        let first = held.get().unwrap() as *const String;
        let second = held.get().unwrap() as *const String;
        assert_eq!(first, second);
    }

    #[test]
    fn get_on_empty_signals_empty_access() {
        assert_eq!(Optional::<u8>::empty().get(), Err(EmptyOptionalError));
    }

    #[test]
    fn try_of_rejects_absent_values() {
        assert_eq!(Optional::try_of(Some(3)), Ok(Optional::of(3)));
        assert_eq!(Optional::<u8>::try_of(None), Err(AbsentValueError));
    }

    #[test]
    fn filter_runs_the_predicate_exactly_once() {
        let calls = Cell::new(0);
        let kept = Optional::of(4).filter(|n| {
            calls.set(calls.get() + 1);
            *n % 2 == 0
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(kept, Optional::of(4));
    }

    #[test]
    fn filter_skips_the_predicate_on_empty() {
        let calls = Cell::new(0);
        let out = Optional::<i32>::empty().filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn filter_moves_the_value_instead_of_copying() {
        // Token is deliberately neither Clone nor Copy
        struct Token(u8);

        let kept = Optional::of(Token(7)).filter(|t| t.0 == 7);
        assert_eq!(kept.get().map(|t| t.0), Ok(7));

        let dropped = Optional::of(Token(7)).filter(|t| t.0 == 8);
        assert!(dropped.is_empty());
    }

    #[test]
    fn map_runs_the_mapper_exactly_once() {
        let calls = Cell::new(0);
        let mapped = Optional::of(5).map(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped, Optional::of(10));
    }

    #[test]
    fn map_skips_the_mapper_on_empty() {
        let calls = Cell::new(0);
        let mapped = Optional::<i32>::empty().map(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(calls.get(), 0);
        assert!(mapped.is_empty());
    }

    #[test]
    fn map_nullable_collapses_absent_results() {
        let none = Optional::of(3).map_nullable(|_| None::<i32>);
        assert!(none.is_empty());

        let some = Optional::of(3).map_nullable(|n| Some(n + 1));
        assert_eq!(some, Optional::of(4));
    }

    #[test]
    fn if_present_runs_the_action_only_when_present() {
        let calls = Cell::new(0);
        Optional::of(1).if_present(|_| calls.set(calls.get() + 1));
        Optional::<i32>::empty().if_present(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn if_present_or_else_selects_exactly_one_branch() {
        let present_hits = Cell::new(0);
        let empty_hits = Cell::new(0);

        Optional::of(1).if_present_or_else(
            |_| present_hits.set(present_hits.get() + 1),
            || empty_hits.set(empty_hits.get() + 1),
        );
        assert_eq!((present_hits.get(), empty_hits.get()), (1, 0));

        Optional::<i32>::empty().if_present_or_else(
            |_| present_hits.set(present_hits.get() + 1),
            || empty_hits.set(empty_hits.get() + 1),
        );
        assert_eq!((present_hits.get(), empty_hits.get()), (1, 1));
    }

    #[test]
    fn debug_output_names_the_state() {
        assert_eq!(format!("{:?}", Optional::of(5)), "Optional[5]");
        assert_eq!(format!("{:?}", Optional::<i32>::empty()), "Optional[empty]");
    }

    #[test]
    fn std_option_conversions_run_both_ways() {
        let held: Optional<i32> = Some(3).into();
        assert_eq!(held, Optional::of(3));
        assert_eq!(held.as_option(), Some(&3));

        let lifted: Optional<i32> = 3.into();
        assert_eq!(lifted, held);

        let back: Option<i32> = held.into();
        assert_eq!(back, Some(3));

        let none: Option<i32> = Optional::empty().into();
        assert_eq!(none, None);
    }
}
