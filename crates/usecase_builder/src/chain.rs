// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use crate::{Fixture, Usecase};

/// State shared by both builders: the usecase and one fixture per input slot.
///
/// A chain is never modified. Replacing a slot yields a new chain that shares the usecase
/// and copies the other slot.
pub(crate) struct Chain<U, P, D> {
    usecase: Arc<U>,
    params: Fixture<P>,
    dependencies: Fixture<D>,
}

impl<U, P, D> Chain<U, P, D> {
    pub(crate) fn new(usecase: U, params: Option<P>, dependencies: Option<D>) -> Self {
        Self {
            usecase: Arc::new(usecase),
            params: params.into(),
            dependencies: dependencies.into(),
        }
    }

    pub(crate) fn replace_params(&self, params: Fixture<P>) -> Self
    where
        D: Clone,
    {
        Self {
            usecase: Arc::clone(&self.usecase),
            params,
            dependencies: self.dependencies.clone(),
        }
    }

    pub(crate) fn replace_dependencies(&self, dependencies: Fixture<D>) -> Self
    where
        P: Clone,
    {
        Self {
            usecase: Arc::clone(&self.usecase),
            params: self.params.clone(),
            dependencies,
        }
    }

    pub(crate) const fn params(&self) -> &Fixture<P> {
        &self.params
    }

    pub(crate) const fn dependencies(&self) -> &Fixture<D> {
        &self.dependencies
    }

    pub(crate) const fn usecase(&self) -> &Arc<U> {
        &self.usecase
    }

    pub(crate) async fn execute(&self) -> U::Out
    where
        U: Usecase<P, D>,
        P: Clone + Sync,
        D: Clone + Sync,
    {
        tracing::debug!(
            params = self.params.kind(),
            dependencies = self.dependencies.kind(),
            "executing usecase"
        );

        self.usecase.execute(self.params.clone(), self.dependencies.clone()).await
    }
}

impl<U, P: Clone, D: Clone> Clone for Chain<U, P, D> {
    fn clone(&self) -> Self {
        Self {
            usecase: Arc::clone(&self.usecase),
            params: self.params.clone(),
            dependencies: self.dependencies.clone(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::future::{Ready, ready};

    use futures::executor::block_on;

    use super::*;

    type Echo = fn(Fixture<u32>, Fixture<String>) -> Ready<(Option<u32>, Option<String>)>;

    fn echo(params: Fixture<u32>, dependencies: Fixture<String>) -> Ready<(Option<u32>, Option<String>)> {
        ready((params.into_value(), dependencies.into_value()))
    }

    #[test]
    fn replacing_a_slot_keeps_the_other_and_the_usecase() {
        let root: Chain<Echo, u32, String> = Chain::new(echo as Echo, Some(1), Some("deps".to_owned()));
        let derived = root.replace_params(Fixture::Value(2));

        assert!(Arc::ptr_eq(root.usecase(), derived.usecase()));
        assert_eq!(root.params().value(), Some(&1));
        assert_eq!(derived.params().value(), Some(&2));
        assert_eq!(derived.dependencies().value().map(String::as_str), Some("deps"));

        let derived = derived.replace_dependencies(Fixture::Unset);
        assert!(Arc::ptr_eq(root.usecase(), derived.usecase()));
        assert!(derived.dependencies().is_unset());
        assert_eq!(derived.params().value(), Some(&2));
    }

    #[test]
    fn execute_passes_clones_of_held_fixtures() {
        let chain: Chain<Echo, u32, String> = Chain::new(echo as Echo, Some(5), None);

        assert_eq!(block_on(chain.execute()), (Some(5), None));
        assert_eq!(block_on(chain.execute()), (Some(5), None));
        assert_eq!(chain.params().value(), Some(&5));
    }
}
