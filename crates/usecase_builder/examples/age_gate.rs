// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Runs an age-gated greeting usecase against valid, partial and invalid fixtures.

use std::sync::Arc;

use futures::executor::block_on;
use usecase_builder::{Bag, Either, Fixture, FixtureError, Partial, TestcaseBuilder, fields};

#[derive(Debug, Clone)]
struct Params {
    name: String,
    age: u32,
}

fields!(Params { name: String, age: u32 });

trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(text = message, "notification sent");
    }
}

#[derive(Clone)]
struct Dependencies {
    notifier: Arc<dyn Notifier>,
}

fields!(Dependencies {
    notifier: Arc<dyn Notifier>
});

async fn greet(params: Fixture<Params>, dependencies: Fixture<Dependencies>) -> Result<Either<String, String>, FixtureError> {
    let too_young = match params.require::<u32>("age") {
        Ok(age) => *age < 18,
        Err(FixtureError::Missing { .. }) => false,
        Err(_) => true,
    };

    if too_young {
        return Ok(Either::Left("Too young".to_owned()));
    }

    let name = params.require::<String>("name")?;
    dependencies.require::<Arc<dyn Notifier>>("notifier")?.notify(name);

    Ok(Either::Right(format!("Hello {name}")))
}

fn main() {
    testing_aids::log_to_stdout();

    let base = TestcaseBuilder::new(greet).with_dependencies(Dependencies {
        notifier: Arc::new(PrintNotifier),
    });

    let cases = [
        (
            "valid",
            base.with_params(Params {
                name: "John".to_owned(),
                age: 18,
            }),
        ),
        ("partial", base.with_partial_params(Partial::new().with("age", 2_u32))),
        ("invalid", base.with_invalid_params(Bag::new().with("age", "eighteen"))),
        ("nameless", base.with_partial_params(Partial::new().with("age", 40_u32))),
        ("ageless", base.with_partial_params(Partial::new().with("name", "Jane".to_owned()))),
    ];

    for (label, testcase) in cases {
        match block_on(testcase.execute()) {
            Ok(Either::Right(greeting)) => println!("{label}: {greeting}"),
            Ok(Either::Left(reason)) => println!("{label}: rejected ({reason})"),
            Err(error) => println!("{label}: failed ({error})"),
        }
    }
}
