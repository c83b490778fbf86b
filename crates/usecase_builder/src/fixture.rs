// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::{Any, TypeId};

use crate::{Bag, FixtureError};

/// A shape whose fields can be read by name.
///
/// This lets a usecase read its input the same way whether it was given a complete value or
/// a [`Bag`] standing in for one. Implement it with the [`fields!`][crate::fields] macro.
pub trait Fields: 'static {
    /// Names of all fields of the shape.
    const FIELDS: &'static [&'static str];

    /// Returns the field called `name`, if the shape has one.
    fn field(&self, name: &str) -> Option<&dyn Any>;

    /// Returns the declared type of the field called `name`, if the shape has one.
    fn field_type(name: &str) -> Option<TypeId>;
}

/// Implements [`Fields`] for a struct by listing its fields and their types.
///
/// Every listed field must exist on the struct with exactly the listed type.
///
/// ```
/// use usecase_builder::{Fields, fields};
///
/// struct Params {
///     name: String,
///     age: u32,
/// }
///
/// fields!(Params { name: String, age: u32 });
///
/// assert_eq!(Params::FIELDS, ["name", "age"]);
/// ```
#[macro_export]
macro_rules! fields {
    ($shape:ty { $($field:ident : $ty:ty),* $(,)? }) => {
        impl $crate::Fields for $shape {
            const FIELDS: &'static [&'static str] = &[$(::core::stringify!($field)),*];

            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::core::any::Any> {
                match name {
                    $(::core::stringify!($field) => {
                        let value: &$ty = &self.$field;
                        ::core::option::Option::Some(value)
                    })*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_type(name: &str) -> ::core::option::Option<::core::any::TypeId> {
                match name {
                    $(::core::stringify!($field) => ::core::option::Option::Some(::core::any::TypeId::of::<$ty>()),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

/// One input slot of a usecase: its params or its dependencies.
///
/// Builders hold a `Fixture` per slot and pass both to the usecase on every execution.
#[derive(Debug, Clone)]
pub enum Fixture<T> {
    /// Nothing was supplied.
    Unset,

    /// A complete, well-typed value.
    Value(T),

    /// A partial or invalid stand-in for a value.
    Loose(Bag),
}

impl<T> Fixture<T> {
    /// Returns `true` if nothing was supplied.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the complete value, if one was supplied.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Loose(_) => None,
        }
    }

    /// Consumes the fixture and returns the complete value, if one was supplied.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Loose(_) => None,
        }
    }

    /// Returns the stand-in bag, if one was supplied.
    #[must_use]
    pub const fn loose(&self) -> Option<&Bag> {
        match self {
            Self::Loose(bag) => Some(bag),
            Self::Unset | Self::Value(_) => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Value(_) => "value",
            Self::Loose(_) => "loose",
        }
    }
}

impl<T: Fields> Fixture<T> {
    /// Returns the field called `name` if it is present and of type `V`.
    ///
    /// Absent fields, unset fixtures and values of any other type all read as `None`.
    #[must_use]
    pub fn get<V: Any>(&self, name: &str) -> Option<&V> {
        self.field(name)?.downcast_ref()
    }

    /// Returns the field called `name`, failing if it is absent or not of type `V`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Missing`] if the fixture is unset or has no such field, and
    /// [`FixtureError::Mismatched`] if the field holds a value of another type.
    pub fn require<V: Any>(&self, name: &str) -> Result<&V, FixtureError> {
        self.field(name)
            .ok_or_else(|| FixtureError::missing(name))?
            .downcast_ref()
            .ok_or_else(|| FixtureError::mismatched::<V>(name))
    }

    fn field(&self, name: &str) -> Option<&dyn Any> {
        match self {
            Self::Unset => None,
            Self::Value(value) => value.field(name),
            Self::Loose(bag) => bag.get_any(name),
        }
    }
}

impl<T> Default for Fixture<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Option<T>> for Fixture<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

impl<T> From<Bag> for Fixture<T> {
    fn from(bag: Bag) -> Self {
        Self::Loose(bag)
    }
}
