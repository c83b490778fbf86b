// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "test code")]

//! Integration tests for `TestcaseBuilder`, driven through an age-gated greeting usecase.

use std::sync::Arc;

use futures::executor::block_on;
use mockall::predicate::eq;
use testing_aids::LogCapture;
use usecase_builder::{Bag, Either, Fixture, FixtureError, Partial, TestcaseBuilder, fields};

#[derive(Debug, Clone, PartialEq)]
struct Params {
    name: String,
    age: u32,
    uuid: String,
}

fields!(Params {
    name: String,
    age: u32,
    uuid: String,
});

#[mockall::automock]
trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

#[mockall::automock]
trait Emailer: Send + Sync {
    fn send(&self, message: &str);
}

#[derive(Clone)]
struct Dependencies {
    logger: Arc<dyn Logger>,
    emailer: Arc<dyn Emailer>,
}

fields!(Dependencies {
    logger: Arc<dyn Logger>,
    emailer: Arc<dyn Emailer>,
});

type Greeting = Either<String, String>;

async fn greet(params: Fixture<Params>, dependencies: Fixture<Dependencies>) -> Result<Greeting, FixtureError> {
    if too_young(&params) {
        return Ok(Either::Left("Too young".to_owned()));
    }

    let logger = dependencies.require::<Arc<dyn Logger>>("logger")?;
    let emailer = dependencies.require::<Arc<dyn Emailer>>("emailer")?;

    logger.log("usecase called");
    emailer.send("usecase called");

    let name = params.get::<String>("name").map_or("undefined", String::as_str);
    let uuid = params.get::<String>("uuid").map_or("undefined", String::as_str);

    Ok(Either::Right(format!("Hello {name} with uuid {uuid}")))
}

// An absent age passes the gate; one that is present must be a number of at least 18.
fn too_young(params: &Fixture<Params>) -> bool {
    match params.require::<u32>("age") {
        Ok(age) => *age < 18,
        Err(FixtureError::Missing { .. }) => false,
        Err(_) => true,
    }
}

fn john() -> Params {
    Params {
        name: "John".to_owned(),
        age: 18,
        uuid: "123".to_owned(),
    }
}

fn logger(expected_calls: usize) -> Arc<dyn Logger> {
    let mut logger = MockLogger::new();
    logger.expect_log().with(eq("usecase called")).times(expected_calls).return_const(());
    Arc::new(logger)
}

fn emailer(expected_calls: usize) -> Arc<dyn Emailer> {
    let mut emailer = MockEmailer::new();
    emailer.expect_send().with(eq("usecase called")).times(expected_calls).return_const(());
    Arc::new(emailer)
}

fn dependencies(expected_calls: usize) -> Dependencies {
    Dependencies {
        logger: logger(expected_calls),
        emailer: emailer(expected_calls),
    }
}

#[test]
fn executes_with_seeded_params_and_dependencies() {
    let result = block_on(TestcaseBuilder::from_parts(greet, Some(john()), Some(dependencies(1))).execute()).unwrap();

    assert!(result.is_right());
    assert_eq!(result.right(), "Hello John with uuid 123");
}

#[test]
fn executes_with_params_passed_through_with_functions() {
    let result = block_on(
        TestcaseBuilder::new(greet)
            .with_params(john())
            .with_dependencies(dependencies(1))
            .execute(),
    )
    .unwrap();

    assert!(result.is_right());
    assert_eq!(result.right(), "Hello John with uuid 123");
}

#[test]
fn executes_with_partial_params() {
    let result = block_on(
        TestcaseBuilder::new(greet)
            .with_partial_params(Partial::new().with("age", 2_u32))
            .with_dependencies(dependencies(0))
            .execute(),
    )
    .unwrap();

    assert!(result.is_left());
    assert_eq!(result.left(), "Too young");
}

#[test]
fn fails_with_partial_dependencies() {
    let testcase = TestcaseBuilder::from_parts(greet, Some(john()), None)
        .with_partial_dependencies(Partial::new().with("logger", logger(0)));

    let error = block_on(testcase.execute()).unwrap_err();

    assert_eq!(
        error,
        FixtureError::Missing {
            field: "emailer".to_owned()
        }
    );
}

#[test]
fn executes_with_invalid_params() {
    let result = block_on(
        TestcaseBuilder::new(greet)
            .with_dependencies(dependencies(0))
            .with_invalid_params(Bag::new().with("age", Vec::<u32>::new()))
            .execute(),
    )
    .unwrap();

    assert!(result.is_left());
    assert_eq!(result.left(), "Too young");
}

#[test]
fn fails_with_invalid_dependencies() {
    let testcase = TestcaseBuilder::from_parts(greet, Some(john()), None)
        .with_invalid_dependencies(Bag::new().with("logger", "not a function"));

    let error = block_on(testcase.execute()).unwrap_err();

    assert!(matches!(error, FixtureError::Mismatched { .. }), "{error:?}");
    assert_eq!(error.field(), "logger");
}

#[test]
fn fails_without_dependencies() {
    let error = block_on(TestcaseBuilder::from_parts(greet, Some(john()), None).execute()).unwrap_err();

    assert_eq!(error.field(), "logger");
}

#[test]
fn partial_params_without_age_pass_the_gate() {
    let result = block_on(
        TestcaseBuilder::new(greet)
            .with_partial_params(Partial::new().with("name", "John".to_owned()))
            .with_dependencies(dependencies(1))
            .execute(),
    )
    .unwrap();

    assert_eq!(result, Either::Right("Hello John with uuid undefined".to_owned()));
}

#[test]
fn invalid_age_of_another_type_is_turned_away() {
    let result = block_on(
        TestcaseBuilder::new(greet)
            .with_dependencies(dependencies(0))
            .with_invalid_params(Bag::new().with("age", "eighteen"))
            .execute(),
    )
    .unwrap();

    assert_eq!(result.left(), "Too young");
}

#[test]
fn partial_adult_params_greet_with_placeholders() {
    let result = block_on(
        TestcaseBuilder::new(greet)
            .with_partial_params(Partial::new().with("age", 30_u32))
            .with_dependencies(dependencies(1))
            .execute(),
    )
    .unwrap();

    assert_eq!(result.into_right(), "Hello undefined with uuid undefined");
}

#[test]
fn gets_currently_set_params() {
    let params = john();
    let testcase = TestcaseBuilder::from_parts(greet, Some(params.clone()), None);

    assert_eq!(testcase.get_params().value(), Some(&params));
    assert!(testcase.get_dependencies().is_unset());
}

#[test]
fn gets_currently_set_dependencies() {
    let dependencies = dependencies(0);
    let testcase = TestcaseBuilder::from_parts(greet, Some(john()), Some(dependencies.clone()));

    let held = testcase.get_dependencies().value().unwrap();
    assert!(Arc::ptr_eq(&held.logger, &dependencies.logger));
    assert!(Arc::ptr_eq(&held.emailer, &dependencies.emailer));
}

#[test]
fn gets_loose_fixtures_back() {
    let testcase = TestcaseBuilder::new(greet).with_invalid_params(Bag::new().with("age", "eighteen"));

    let params = testcase.get_params().loose().unwrap();
    assert_eq!(params.get::<&str>("age"), Some(&"eighteen"));
    assert_eq!(testcase.get_params().get::<u32>("age"), None);
}

#[test]
fn with_params_leaves_the_receiver_untouched() {
    let base = TestcaseBuilder::from_parts(greet, Some(john()), None);
    let derived = base.with_partial_params(Partial::new().with("age", 2_u32));

    assert_eq!(base.get_params().value(), Some(&john()));
    assert!(derived.get_params().value().is_none());
    assert!(std::ptr::eq(base.usecase(), derived.usecase()));
}

#[test]
fn one_base_serves_several_branches() {
    let base = TestcaseBuilder::new(greet).with_dependencies(dependencies(1));

    let adult = block_on(base.with_params(john()).execute()).unwrap();
    let child = block_on(base.with_partial_params(Partial::new().with("age", 2_u32)).execute()).unwrap();

    assert_eq!(adult.right(), "Hello John with uuid 123");
    assert_eq!(child.left(), "Too young");
    assert!(base.get_params().is_unset());
}

#[test]
fn execute_logs_loose_inputs() {
    let testcase = TestcaseBuilder::new(greet).with_invalid_params(Bag::new().with("age", 2_u32));
    let capture = LogCapture::new();

    tracing::subscriber::with_default(capture.subscriber(), || {
        _ = block_on(testcase.execute());
    });

    capture.assert_contains(r#"params="loose""#);
}
