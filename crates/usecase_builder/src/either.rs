// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// A value that is either a failure ([`Left`][Either::Left]) or a success ([`Right`][Either::Right]).
///
/// Usecases return this to express expected branching outcomes, such as a validation
/// failure versus a computed response, without treating the failure as an error.
///
/// The inspection surface is deliberately small: test which variant is held, then extract
/// it. Extracting the variant that is not held is a programming error and panics.
///
/// # Examples
///
/// ```
/// use usecase_builder::Either;
///
/// let outcome: Either<&str, u32> = Either::Right(42);
///
/// assert!(outcome.is_right());
/// assert_eq!(*outcome.right(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),

    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a [`Left`][Either::Left].
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a [`Right`][Either::Right].
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns a reference to the failure value.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Right`][Either::Right].
    #[must_use]
    #[track_caller]
    pub fn left(&self) -> &L {
        match self {
            Self::Left(error) => error,
            Self::Right(_) => either_is("Right"),
        }
    }

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Left`][Either::Left].
    #[must_use]
    #[track_caller]
    pub fn right(&self) -> &R {
        match self {
            Self::Right(response) => response,
            Self::Left(_) => either_is("Left"),
        }
    }

    /// Consumes the value and returns the failure.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Right`][Either::Right].
    #[must_use]
    #[track_caller]
    pub fn into_left(self) -> L {
        match self {
            Self::Left(error) => error,
            Self::Right(_) => either_is("Right"),
        }
    }

    /// Consumes the value and returns the success.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Left`][Either::Left].
    #[must_use]
    #[track_caller]
    pub fn into_right(self) -> R {
        match self {
            Self::Right(response) => response,
            Self::Left(_) => either_is("Left"),
        }
    }
}

#[track_caller]
#[expect(clippy::panic, reason = "accessing the variant that is not held must fail loudly")]
fn either_is(variant: &str) -> ! {
    panic!("Either is {variant}")
}
