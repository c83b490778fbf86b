// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Usecase Builder
//!
//! Immutable, chainable builders that assemble the inputs of an async usecase in tests.
//!
//! A usecase is a unit of work taking two inputs, params and dependencies, and returning a
//! future. A test starts from a builder, overrides whole inputs or individual fields, then
//! executes the usecase and inspects its output.
//!
//! ## Quick Start
//!
//! ```
//! use usecase_builder::{Either, Fixture, FixtureError, TestcaseBuilder, fields};
//!
//! #[derive(Clone, Debug)]
//! struct Params {
//!     name: String,
//!     age: u32,
//! }
//!
//! fields!(Params { name: String, age: u32 });
//!
//! async fn greet(params: Fixture<Params>, _dependencies: Fixture<()>) -> Result<Either<String, String>, FixtureError> {
//!     let age = params.get::<u32>("age").copied();
//!     if age.is_some_and(|age| age < 18) {
//!         return Ok(Either::Left("Too young".to_owned()));
//!     }
//!
//!     let name = params.require::<String>("name")?;
//!     Ok(Either::Right(format!("Hello {name}")))
//! }
//!
//! let builder = TestcaseBuilder::new(greet).with_params(Params {
//!     name: "John".to_owned(),
//!     age: 18,
//! });
//!
//! # futures::executor::block_on(async {
//! let greeting = builder.execute().await?;
//! assert_eq!(greeting.right(), "Hello John");
//! # Ok::<(), FixtureError>(())
//! # }).unwrap();
//! ```
//!
//! ## Key Concepts
//!
//! - **Usecase**: anything implementing [`Usecase`], including every
//!   `async fn(Fixture<P>, Fixture<D>)`.
//! - **Fixture**: one input as the usecase sees it: unset, a complete value, or a loose
//!   [`Bag`] of fields standing in for one. See [`Fixture`].
//! - **Builders**: [`UsecaseBuilder`] replaces whole inputs; [`TestcaseBuilder`] also takes
//!   [`Partial`] and invalid ([`Bag`]) inputs and reads the held inputs back.
//! - **Either**: the [`Either`] result, a failure on the left or a success on the right.
//!
//! ## Reading Fields
//!
//! Usecases that accept partial or invalid input read it by field name through
//! [`Fixture::get`] and [`Fixture::require`], which work the same for every kind of fixture.
//! The input shape must implement [`Fields`], most easily with the [`fields!`] macro.
//!
//! ## Logging
//!
//! Every execution emits a `tracing` debug event naming the kind of each input. No
//! subscriber is installed by this crate.

mod bag;
mod chain;
mod either;
mod error;
mod fixture;
mod testcase_builder;
mod usecase;
mod usecase_builder;

pub use bag::{Bag, Partial};
pub use either::Either;
pub use error::FixtureError;
pub use fixture::{Fields, Fixture};
pub use testcase_builder::TestcaseBuilder;
pub use usecase::Usecase;
pub use usecase_builder::UsecaseBuilder;
