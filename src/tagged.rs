//! Discriminant and payload representation shared by every container.
//!
//! Each container in this crate is a closed sum type: a tag identifying the
//! active case plus zero or one payload. The [`Tagged`] trait exposes that
//! tag uniformly so that diagnostics, ordering and formatting agree across
//! all containers.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{Maybe, RemoteData, Tagged};
//!
//! let present = Maybe::some(1);
//! assert_eq!(present.tag(), "Some");
//! assert_eq!(Maybe::<i32>::CONTAINER, "Maybe");
//!
//! let loading: RemoteData<i32, String> = RemoteData::loading();
//! assert_eq!(loading.tag(), "Loading");
//! assert_eq!(loading.discriminant(), 1);
//! ```

use std::fmt;

/// A container whose active case can be named and ranked.
///
/// `discriminant` follows the declaration order of the container's variants,
/// which is also the order used by the derived `Ord` implementation.
pub trait Tagged {
    /// Name of the container type, used in diagnostics.
    const CONTAINER: &'static str;

    /// Name of the active case, for example `"Some"` or `"Invalid"`.
    fn tag(&self) -> &'static str;

    /// Rank of the active case within the container's fixed case order.
    fn discriminant(&self) -> u8;
}

/// Writes the stable `Tag(payload)` / `Tag` textual form.
pub(crate) fn write_tagged(
    formatter: &mut fmt::Formatter<'_>,
    tag: &str,
    payload: Option<&dyn fmt::Display>,
) -> fmt::Result {
    match payload {
        Some(payload) => write!(formatter, "{tag}({payload})"),
        None => formatter.write_str(tag),
    }
}
