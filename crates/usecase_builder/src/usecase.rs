// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::Fixture;

/// An async unit of work taking params `P` and dependencies `D`.
///
/// The builders are generic over this trait. It is implemented for every function or
/// closure of shape `Fn(Fixture<P>, Fixture<D>) -> impl Future`, so a plain `async fn`
/// is a usecase:
///
/// ```
/// use usecase_builder::{Fixture, Usecase};
///
/// async fn double(params: Fixture<u32>, _dependencies: Fixture<()>) -> Option<u32> {
///     params.into_value().map(|value| value * 2)
/// }
///
/// # futures::executor::block_on(async {
/// assert_eq!(double.execute(Fixture::Value(21), Fixture::Unset).await, Some(42));
/// # });
/// ```
///
/// Either input may be unset or replaced by a loose stand-in. What that means is up to the
/// usecase: it may treat absence as a valid default or fail, typically by returning a
/// [`FixtureError`][crate::FixtureError] obtained from [`Fixture::require`].
pub trait Usecase<P, D>: Send + Sync {
    /// The output of one execution.
    type Out;

    /// Runs the unit of work once with the given inputs.
    fn execute(&self, params: Fixture<P>, dependencies: Fixture<D>) -> impl Future<Output = Self::Out> + Send;
}

impl<F, Fut, P, D> Usecase<P, D> for F
where
    F: Fn(Fixture<P>, Fixture<D>) -> Fut + Send + Sync,
    Fut: Future + Send,
{
    type Out = Fut::Output;

    fn execute(&self, params: Fixture<P>, dependencies: Fixture<D>) -> impl Future<Output = Self::Out> + Send {
        self(params, dependencies)
    }
}
