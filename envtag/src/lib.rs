//! Populate typed configuration structs from environment variables
//!
//! `envtag` maps environment variables onto struct fields through a tag
//! attached to each field. Fields are visited depth-first in declaration
//! order; nested records are descended into and tagged leaf fields are
//! coerced from the variable's string value.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(Unmarshal)]` plus `#[env("KEY")]` on fields
//! - **Default literals**: `#[env("KEY,default=8080")]`
//! - **Optional fields**: `Option<T>` distinguishes "unset" from "set to empty"
//! - **Nested records**: fields whose type derives `Unmarshal` are walked recursively
//! - **Testable**: inject a [`Snapshot`] instead of reading the process environment
//!
//! # Value Parsing
//!
//! - Strings: assigned verbatim, including the empty string
//! - Booleans: `1`, `t`, `T`, `TRUE`, `true`, `True` and their `0`/`f`/`false` counterparts
//! - Floats: `f32`, `f64`
//! - Signed integers: `i8` to `i64`, `isize`
//! - Durations: `std::time::Duration` from literals such as `5s`, `100ms`, `1h30m`
//! - `Option<T>` of any of the above, nested to any depth
//!
//! Any other type yields [`Error::UnsupportedType`] once a value resolves for it.
//!
//! # Example
//!
//! ```rust
//! use envtag::{Snapshot, Unmarshal};
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, Unmarshal)]
//! struct Config {
//!     #[env("DATABASE_URL")]
//!     pub database_url: String,
//!
//!     #[env("MAX_CONNECTIONS,default=10")]
//!     pub max_connections: i32,
//!
//!     #[env("REQUEST_TIMEOUT,default=30s")]
//!     pub request_timeout: Duration,
//!
//!     #[env("API_KEY")]
//!     pub api_key: Option<String>,
//! }
//!
//! # fn main() -> Result<(), envtag::Error> {
//! let env = Snapshot::from_environ(["DATABASE_URL=postgres://localhost/db"]);
//! let config = Config::from_snapshot(env)?;
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.max_connections, 10);
//! assert_eq!(config.request_timeout, Duration::from_secs(30));
//! assert_eq!(config.api_key, None);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env("KEY[,KEY2,...][,default=LITERAL]")]`
//!
//! Field-level tag. Only the first key is looked up. When it is absent the
//! `default=` literal (which may itself contain `=`) is coerced instead, and
//! with no default the field keeps its current value. Untagged fields are
//! never touched. Tagged fields must be `pub`.
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! Struct-level prefix prepended to the looked-up key of every tagged field
//! of that struct.
//!
//! ```rust
//! # use envtag::{Snapshot, Unmarshal};
//! #[derive(Default, Unmarshal)]
//! #[env(prefix = "APP_")]
//! pub struct Config {
//!     // Loaded from APP_PORT
//!     #[env("PORT,default=8080")]
//!     pub port: i64,
//! }
//! # fn main() -> Result<(), envtag::Error> {
//! #     let config = Config::from_snapshot(Snapshot::from_environ(["APP_PORT=9090"]))?;
//! #     assert_eq!(config.port, 9090);
//! #     Ok(())
//! # }
//! ```

#[doc(hidden)]
pub mod de;

mod duration;
mod error;
mod snapshot;
mod tag;
mod value;

pub use duration::{parse_duration, DurationError};
pub use envtag_derive::Unmarshal;
pub use error::{Error, ErrorKind, ParseError};
pub use snapshot::Snapshot;
pub use tag::Tag;
pub use value::EnvValue;

/// A record whose tagged fields can be populated from a [`Snapshot`].
///
/// Implement with `#[derive(Unmarshal)]`.
pub trait Unmarshal {
    /// Walk the fields of `self` in declaration order, assigning tagged ones.
    ///
    /// Stops at the first error; fields assigned before it keep their values.
    fn unmarshal_fields(&mut self, env: &mut Snapshot) -> Result<(), Error>;

    /// Build a default record and populate it from the process environment.
    fn from_env() -> Result<Self, Error>
    where
        Self: Sized + Default,
    {
        Self::from_snapshot(Snapshot::from_process())
    }

    /// Build a default record and populate it from `env`.
    fn from_snapshot(env: Snapshot) -> Result<Self, Error>
    where
        Self: Sized + Default,
    {
        let mut record = Self::default();
        unmarshal_from(env, &mut record)?;
        Ok(record)
    }
}

/// A reference that may point at a record to populate.
///
/// Implemented for `&mut T` and `Option<&mut T>`. Other shapes, such as a
/// record passed by value or a reference to a reference, are rejected at
/// compile time.
///
/// A record passed by value:
///
/// ```compile_fail
/// # use envtag::{unmarshal, Unmarshal};
/// #[derive(Default, Unmarshal)]
/// struct Config {
///     #[env("HOME")]
///     pub home: String,
/// }
///
/// let config = Config::default();
/// unmarshal(config).unwrap();
/// ```
///
/// A reference to a reference:
///
/// ```compile_fail
/// # use envtag::{unmarshal, Unmarshal};
/// #[derive(Default, Unmarshal)]
/// struct Config {
///     #[env("HOME")]
///     pub home: String,
/// }
///
/// let mut config = Config::default();
/// unmarshal(&mut &mut config).unwrap();
/// ```
///
/// A reference to something that is not a record:
///
/// ```compile_fail
/// envtag::unmarshal(&mut 5i32).unwrap();
/// ```
pub trait Target<'a> {
    fn into_record(self) -> Option<&'a mut dyn Unmarshal>;
}

impl<'a, T: Unmarshal> Target<'a> for &'a mut T {
    fn into_record(self) -> Option<&'a mut dyn Unmarshal> {
        Some(self)
    }
}

impl<'a, T: Unmarshal> Target<'a> for Option<&'a mut T> {
    fn into_record(self) -> Option<&'a mut dyn Unmarshal> {
        self.map(|record| record as &mut dyn Unmarshal)
    }
}

/// Populate `target` from the environment of the current process.
///
/// # Errors
///
/// - [`Error::InvalidValue`] if `target` is `None`
/// - [`Error::UnexportedField`] if a tagged field is not `pub`
/// - [`Error::UnsupportedType`] if a value resolves for a field without a coercion rule
/// - [`Error::Coercion`] if a value does not parse as its field's type
pub fn unmarshal<'a>(target: impl Target<'a>) -> Result<(), Error> {
    let record = target.into_record().ok_or(Error::InvalidValue)?;
    record.unmarshal_fields(&mut Snapshot::from_process())
}

/// Populate `target` from an explicit snapshot.
///
/// Same contract as [`unmarshal`].
pub fn unmarshal_from<'a>(mut env: Snapshot, target: impl Target<'a>) -> Result<(), Error> {
    let record = target.into_record().ok_or(Error::InvalidValue)?;
    record.unmarshal_fields(&mut env)
}
