// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// A usecase could not read a field it depends on from a [`Fixture`][crate::Fixture].
///
/// Returned by [`Fixture::require`][crate::Fixture::require]. Usecases typically propagate
/// it with `?`, and the builders hand it back from `execute()` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FixtureError {
    /// The fixture is unset or does not contain the field.
    #[error("fixture field `{field}` is missing")]
    Missing {
        /// Name of the requested field.
        field: String,
    },

    /// The field is present but holds a value of another type.
    #[error("fixture field `{field}` does not hold a value of type `{expected}`")]
    Mismatched {
        /// Name of the requested field.
        field: String,

        /// Type name the usecase asked for.
        expected: &'static str,
    },
}

impl FixtureError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::Missing { field: field.to_owned() }
    }

    pub(crate) fn mismatched<V: ?Sized>(field: &str) -> Self {
        Self::Mismatched {
            field: field.to_owned(),
            expected: std::any::type_name::<V>(),
        }
    }

    /// Name of the field the failed lookup was for.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Mismatched { field, .. } => field,
        }
    }
}
