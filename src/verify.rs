use core::ops::Deref;

/// Wrapper type around a value whose signature was checked by a
/// [`Validator`](crate::jws::Validator).
///
/// Only a successful verification creates this type, so holding one is
/// proof that the check happened. Which algorithm it used is recorded in
/// the header of the wrapped token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T>(pub(crate) T);

impl<T> Verified<T> {
    /// Turns self into it's inner `T`.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Verified<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
