//! Assertion macros for `Result`-returning operations.
//!
//! - [`crate::assert_result_ok!`]: assert `Ok` and extract the value
//! - [`crate::assert_result_err!`]: assert `Err` and extract the error
//! - [`crate::assert_error_category!`]: assert `Err` of a given `GenerateError` category
//!
//! ```rust
//! use testgen::{assert_result_ok, assert_result_err};
//!
//! let ok: Result<i32, String> = Ok(42);
//! assert_eq!(assert_result_ok!(ok), 42);
//!
//! let err: Result<i32, String> = Err("oops".to_string());
//! assert_eq!(assert_result_err!(err), "oops");
//! ```

/// Assert that a Result is Ok and extract the value.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => panic!(
                "{}: Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that a Result failed with a `GenerateError` of the given category.
///
/// Returns the error.
#[macro_export]
macro_rules! assert_error_category {
    ($result:expr, $category:expr) => {{
        let err = $crate::assert_result_err!($result);
        assert_eq!(
            err.category(),
            $category,
            "Unexpected error: {}\n  at {}:{}:{}",
            err,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}
