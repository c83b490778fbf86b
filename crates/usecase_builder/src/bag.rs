// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::Fields;

/// A weakly typed set of named fields.
///
/// Each field holds a value of any type. Nothing checks the names or the types against the
/// shape the bag stands in for, which makes it the way to hand a usecase structurally wrong
/// input, such as a list where a number is expected:
///
/// ```
/// use usecase_builder::Bag;
///
/// let params = Bag::new().with("age", Vec::<u32>::new());
///
/// assert!(params.contains("age"));
/// assert_eq!(params.get::<u32>("age"), None);
/// ```
///
/// Values are shared rather than copied when a bag is cloned.
#[derive(Clone, Default)]
pub struct Bag {
    entries: BTreeMap<String, Entry>,
}

#[derive(Clone)]
struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Bag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bag with `name` set to `value`, replacing any previous value.
    #[must_use]
    pub fn with<V>(mut self, name: impl Into<String>, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        let entry = Entry {
            value: Arc::new(value),
            type_name: type_name::<V>(),
        };

        self.entries.insert(name.into(), entry);
        self
    }

    /// Returns the value of `name` if it is present and of type `V`.
    #[must_use]
    pub fn get<V: Any>(&self, name: &str) -> Option<&V> {
        self.get_any(name)?.downcast_ref()
    }

    /// Returns `true` if `name` is present, whatever the type of its value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of the fields present, in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get_any(&self, name: &str) -> Option<&dyn Any> {
        // Deref through the Arc, otherwise the Arc itself is what gets downcast.
        self.entries.get(name).map(|entry| &*entry.value as &dyn Any)
    }
}

impl Debug for Bag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, entry)| (name, TypeName(entry.type_name))))
            .finish()
    }
}

struct TypeName(&'static str);

impl Debug for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A subset of the fields of the shape `T`.
///
/// Unlike a [`Bag`], every field set on a `Partial` must exist on `T` and carry the type `T`
/// declares for it. Use it to hand a usecase an incomplete but otherwise well-typed input.
///
/// ```
/// use usecase_builder::{Partial, fields};
///
/// struct Params {
///     name: String,
///     age: u32,
/// }
///
/// fields!(Params { name: String, age: u32 });
///
/// let partial = Partial::<Params>::new().with("age", 2_u32);
///
/// assert_eq!(partial.as_bag().get::<u32>("age"), Some(&2));
/// assert!(!partial.as_bag().contains("name"));
/// ```
pub struct Partial<T> {
    bag: Bag,
    shape: PhantomData<fn() -> T>,
}

impl<T: Fields> Partial<T> {
    /// Creates a partial with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the partial with the field `name` set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `T` has no field called `name`, or if that field is not of type `V`.
    #[must_use]
    #[track_caller]
    pub fn with<V>(self, name: &str, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        let declared = T::field_type(name);

        assert!(declared.is_some(), "`{name}` is not a field of `{}`", type_name::<T>());
        assert!(
            declared == Some(TypeId::of::<V>()),
            "field `{name}` of `{}` does not accept a `{}`",
            type_name::<T>(),
            type_name::<V>()
        );

        Self {
            bag: self.bag.with(name, value),
            shape: PhantomData,
        }
    }
}

impl<T> Partial<T> {
    /// The fields set so far.
    #[must_use]
    pub const fn as_bag(&self) -> &Bag {
        &self.bag
    }
}

impl<T> Default for Partial<T> {
    fn default() -> Self {
        Self {
            bag: Bag::new(),
            shape: PhantomData,
        }
    }
}

impl<T> Clone for Partial<T> {
    fn clone(&self) -> Self {
        Self {
            bag: self.bag.clone(),
            shape: PhantomData,
        }
    }
}

impl<T> Debug for Partial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Partial").field(&self.bag).finish()
    }
}

impl<T> From<Partial<T>> for Bag {
    fn from(partial: Partial<T>) -> Self {
        partial.bag
    }
}
