// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{Debug, Formatter};

use crate::chain::Chain;
use crate::{Fixture, Usecase};

/// Assembles the params and dependencies of a usecase, then runs it.
///
/// Each `with_*` call returns a new builder and leaves the receiver untouched, so a
/// partially built chain can serve as the base of several tests. All builders derived from
/// one constructor call share the same usecase instance.
///
/// # Examples
///
/// ```
/// use usecase_builder::{Fixture, UsecaseBuilder};
///
/// async fn describe(params: Fixture<u32>, dependencies: Fixture<String>) -> String {
///     format!("{:?} {:?}", params.into_value(), dependencies.into_value())
/// }
///
/// let base = UsecaseBuilder::new(describe);
/// let with_params = base.with_params(1);
///
/// # futures::executor::block_on(async {
/// assert_eq!(base.execute().await, "None None");
/// assert_eq!(with_params.execute().await, "Some(1) None");
/// assert_eq!(with_params.with_dependencies("db".to_owned()).execute().await, r#"Some(1) Some("db")"#);
/// # });
/// ```
///
/// For partial or invalid fixtures and read-back of the held values, use
/// [`TestcaseBuilder`][crate::TestcaseBuilder].
pub struct UsecaseBuilder<U, P, D> {
    chain: Chain<U, P, D>,
}

impl<U, P, D> UsecaseBuilder<U, P, D>
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
        Self {
            chain: self.chain.replace_params(Fixture::Value(params)),
        }
    }

    /// Returns a new builder with the dependencies replaced.
    #[must_use]
    pub fn with_dependencies(&self, dependencies: D) -> Self
    where
        P: Clone,
    {
        Self {
            chain: self.chain.replace_dependencies(Fixture::Value(dependencies)),
        }
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
}

impl<U, P, D> UsecaseBuilder<U, P, D> {
    /// The usecase this builder runs.
    #[must_use]
    pub fn usecase(&self) -> &U {
        self.chain.usecase()
    }

    pub(crate) fn into_chain(self) -> Chain<U, P, D> {
        self.chain
    }
}

impl<U, P: Clone, D: Clone> Clone for UsecaseBuilder<U, P, D> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<U, P: Debug, D: Debug> Debug for UsecaseBuilder<U, P, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsecaseBuilder")
            .field("params", self.chain.params())
            .field("dependencies", self.chain.dependencies())
            .finish_non_exhaustive()
    }
}
