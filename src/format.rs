//! Serialization formats of a signed token.
//!
//! Only the [`Compact`] serialization is supported.

mod compact;

pub(crate) use self::compact::signing_input;
#[doc(inline)]
pub use self::compact::Compact;
