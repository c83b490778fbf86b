// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Runs the statement, asserts that it panics and evaluates to the panic message.
///
/// ```
/// let message = testing_aids::assert_panic!(Option::<u8>::None.expect("no value"));
///
/// assert_eq!(message, "no value");
/// ```
// We assert unwind safety here because the topic is too much hassle to worry about and since
// #[should_panic] does not require us to worry about it, we are not going to worry about it here.
#[macro_export]
macro_rules! assert_panic {
    ($stmt:stmt$(,)?) => {
        {
            let payload = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> () { _ = { $stmt } }))
                .expect_err("assert_panic! argument did not panic");

            $crate::panic_message(payload)
        }
    };
}
