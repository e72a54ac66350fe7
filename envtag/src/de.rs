//! Field-level helpers called by `#[derive(Unmarshal)]` code
//!
//! Generated code inspects every field type twice: once for a nested record
//! to descend into and once for a leaf setter. Both checks resolve at
//! compile time through method lookup on `&Detect<T>`. When `T` implements
//! the capability the by-value impl on `Detect<T>` is picked; otherwise the
//! lookup falls through to the autoref impl on `&Detect<T>`, which reports
//! that the capability is missing.

use crate::error::{Error, ParseError};
use crate::snapshot::Snapshot;
use crate::tag::Tag;
use crate::value::EnvValue;
use crate::Unmarshal;
use std::marker::PhantomData;

/// Coerces a string into a field, reporting parse failures.
pub type Setter<T> = fn(&mut T, &str) -> Result<(), ParseError>;

/// Populates the fields of a nested record.
pub type Descent<T> = fn(&mut T, &mut Snapshot) -> Result<(), Error>;

/// Zero-sized marker for detecting the capabilities of `T`.
pub struct Detect<T>(PhantomData<T>);

impl<T> Detect<T> {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// `T` is a record: descend into it.
pub trait Nested {
    type Field;
    fn nested(&self) -> Option<Descent<Self::Field>>;
}

impl<T: Unmarshal> Nested for Detect<T> {
    type Field = T;
    fn nested(&self) -> Option<Descent<T>> {
        Some(<T as Unmarshal>::unmarshal_fields)
    }
}

/// `T` is not a record.
pub trait Flat {
    type Field;
    fn nested(&self) -> Option<Descent<Self::Field>>;
}

impl<T> Flat for &Detect<T> {
    type Field = T;
    fn nested(&self) -> Option<Descent<T>> {
        None
    }
}

/// `T` has a coercion rule.
pub trait Leaf {
    type Field;
    fn setter(&self) -> Option<Setter<Self::Field>>;
}

impl<T: EnvValue> Leaf for Detect<T> {
    type Field = T;
    fn setter(&self) -> Option<Setter<T>> {
        Some(<T as EnvValue>::set_env)
    }
}

/// `T` has no coercion rule.
pub trait Unsupported {
    type Field;
    fn setter(&self) -> Option<Setter<Self::Field>>;
}

impl<T> Unsupported for &Detect<T> {
    type Field = T;
    fn setter(&self) -> Option<Setter<T>> {
        None
    }
}

/// Static description of a tagged field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field identifier as declared
    pub name: &'static str,
    /// Raw tag string from `#[env("...")]`
    pub tag: &'static str,
    /// Struct-level key prefix, empty when none
    pub prefix: &'static str,
}

/// Resolve a tagged field's value and assign it.
///
/// The primary key is looked up first, then the tag's default literal. A
/// field with neither is left untouched. After a successful assignment the
/// raw tag string is marked consumed; later lookups still see every key.
pub fn assign<T>(
    env: &mut Snapshot,
    spec: FieldSpec,
    target: &mut T,
    setter: Option<Setter<T>>,
) -> Result<(), Error> {
    let tag = Tag::parse(spec.tag);
    let key = tag.primary().map(|key| format!("{}{}", spec.prefix, key));

    let (source, value) = match key.as_deref().and_then(|k| env.get(k)) {
        Some(value) => (key.clone().unwrap_or_default(), value.to_string()),
        None => match tag.default {
            Some(default) => ("default".to_string(), default),
            None => {
                tracing::debug!(field = spec.name, key = ?key, "No value, leaving field unset");
                return Ok(());
            }
        },
    };

    let setter = setter.ok_or_else(|| Error::unsupported::<T>(spec.name))?;
    setter(target, &value)
        .map_err(|e| Error::coercion::<T>(spec.name, source.clone(), e))?;
    tracing::debug!(field = spec.name, source = %source, "Assigned field");

    env.mark_consumed(spec.tag);
    Ok(())
}
