// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{Debug, Formatter};

use crate::chain::Chain;
use crate::{Bag, Fixture, Partial, Usecase, UsecaseBuilder};

/// A [`UsecaseBuilder`] for fixture-heavy tests.
///
/// On top of replacing params and dependencies wholesale, it can hand the usecase input that
/// breaks its normal contract:
///
/// - `with_partial_*` takes a [`Partial`], a well-typed subset of the fields.
/// - `with_invalid_*` takes a [`Bag`], where any field may hold any value.
///
/// Both replace the whole input; nothing is merged with what was held before. The held
/// inputs can be read back with [`get_params`][Self::get_params] and
/// [`get_dependencies`][Self::get_dependencies].
///
/// # Examples
///
/// ```
/// use usecase_builder::{Bag, Either, Fixture, TestcaseBuilder, fields};
///
/// #[derive(Clone)]
/// struct Params {
///     age: u32,
/// }
///
/// fields!(Params { age: u32 });
///
/// async fn check_age(params: Fixture<Params>, _dependencies: Fixture<()>) -> Either<&'static str, u32> {
///     match params.get::<u32>("age") {
///         Some(&age) if age >= 18 => Either::Right(age),
///         _ => Either::Left("Too young"),
///     }
/// }
///
/// let adult = TestcaseBuilder::new(check_age).with_params(Params { age: 30 });
/// let garbage = adult.with_invalid_params(Bag::new().with("age", "thirty"));
///
/// # futures::executor::block_on(async {
/// assert_eq!(adult.execute().await, Either::Right(30));
/// assert_eq!(garbage.execute().await, Either::Left("Too young"));
/// # });
/// ```
pub struct TestcaseBuilder<U, P, D> {
    chain: Chain<U, P, D>,
}

impl<U, P, D> TestcaseBuilder<U, P, D>
where
    U: Usecase<P, D>,
{
    /// Creates a builder with neither params nor dependencies set.
    #[must_use]
    pub fn new(usecase: U) -> Self {
        Self::from_parts(usecase, None, None)
    }

    /// Creates a builder seeded with the given params and dependencies.
    ///
    /// `None` leaves the respective input unset.
    #[must_use]
    pub fn from_parts(usecase: U, params: Option<P>, dependencies: Option<D>) -> Self {
        Self {
            chain: Chain::new(usecase, params, dependencies),
        }
    }

    /// Returns a new builder with the params replaced.
    #[must_use]
    pub fn with_params(&self, params: P) -> Self
    where
        D: Clone,
    {
        self.replace_params(Fixture::Value(params))
    }

    /// Returns a new builder whose params are only the fields set on `params`.
    #[must_use]
    pub fn with_partial_params(&self, params: Partial<P>) -> Self
    where
        D: Clone,
    {
        self.replace_params(Fixture::Loose(params.into()))
    }

    /// Returns a new builder whose params are the given bag, unchecked.
    #[must_use]
    pub fn with_invalid_params(&self, params: Bag) -> Self
    where
        D: Clone,
    {
        self.replace_params(Fixture::Loose(params))
    }

    /// Returns a new builder with the dependencies replaced.
    #[must_use]
    pub fn with_dependencies(&self, dependencies: D) -> Self
    where
        P: Clone,
    {
        self.replace_dependencies(Fixture::Value(dependencies))
    }

    /// Returns a new builder whose dependencies are only the fields set on `dependencies`.
    #[must_use]
    pub fn with_partial_dependencies(&self, dependencies: Partial<D>) -> Self
    where
        P: Clone,
    {
        self.replace_dependencies(Fixture::Loose(dependencies.into()))
    }

    /// Returns a new builder whose dependencies are the given bag, unchecked.
    #[must_use]
    pub fn with_invalid_dependencies(&self, dependencies: Bag) -> Self
    where
        P: Clone,
    {
        self.replace_dependencies(Fixture::Loose(dependencies))
    }

    /// Runs the usecase once with the held params and dependencies and returns its output.
    ///
    /// The output is returned as-is, and a panic in the usecase is not caught.
    pub async fn execute(&self) -> U::Out
    where
        P: Clone + Sync,
        D: Clone + Sync,
    {
        self.chain.execute().await
    }

    fn replace_params(&self, params: Fixture<P>) -> Self
    where
        D: Clone,
    {
        Self {
            chain: self.chain.replace_params(params),
        }
    }

    fn replace_dependencies(&self, dependencies: Fixture<D>) -> Self
    where
        P: Clone,
    {
        Self {
            chain: self.chain.replace_dependencies(dependencies),
        }
    }
}

impl<U, P, D> TestcaseBuilder<U, P, D> {
    /// The params currently held.
    #[must_use]
    pub const fn get_params(&self) -> &Fixture<P> {
        self.chain.params()
    }

    /// The dependencies currently held.
    #[must_use]
    pub const fn get_dependencies(&self) -> &Fixture<D> {
        self.chain.dependencies()
    }

    /// The usecase this builder runs.
    #[must_use]
    pub fn usecase(&self) -> &U {
        self.chain.usecase()
    }

    /// Dumps the held params to standard error.
    pub fn log_params(&self)
    where
        P: Debug,
    {
        eprintln!("{:#?}", self.get_params());
    }

    /// Dumps the held dependencies to standard error.
    pub fn log_dependencies(&self)
    where
        D: Debug,
    {
        eprintln!("{:#?}", self.get_dependencies());
    }
}

impl<U, P, D> From<UsecaseBuilder<U, P, D>> for TestcaseBuilder<U, P, D> {
    fn from(builder: UsecaseBuilder<U, P, D>) -> Self {
        Self {
            chain: builder.into_chain(),
        }
    }
}

impl<U, P: Clone, D: Clone> Clone for TestcaseBuilder<U, P, D> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<U, P: Debug, D: Debug> Debug for TestcaseBuilder<U, P, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestcaseBuilder")
            .field("params", self.get_params())
            .field("dependencies", self.get_dependencies())
            .finish_non_exhaustive()
    }
}
