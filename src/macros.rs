/// Implements `Display`, `FromStr` and serde for an identifier enum that has
/// an `Other(String)` catch-all variant.
macro_rules! impl_serde_jwa {
    ($T:ty, [
        $($name:literal => $val:expr; $valp:pat,)*
    ]) => {
        impl core::fmt::Display for $T {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $T {
            type Err = core::convert::Infallible;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_str_without_other(name)
                    .unwrap_or_else(|| Self::Other(alloc::borrow::ToOwned::to_owned(name))))
            }
        }

        #[allow(unused_qualifications)]
        impl<'de> serde::Deserialize<'de> for $T {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let name = <alloc::borrow::Cow<'_, str> as serde::Deserialize>::deserialize(deserializer)?;

                Ok(Self::from_str_without_other(&name).unwrap_or_else(|| {
                    Self::Other(name.into_owned())
                }))
            }
        }

        #[allow(unused_qualifications)]
        impl serde::Serialize for $T {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                <&str as serde::Serialize>::serialize(&self.as_str(), serializer)
            }
        }

        impl $T {
            /// Returns the registered name of this algorithm, as it appears in
            /// the `alg` header parameter.
            pub fn as_str(&self) -> &str {
                match self {
                    $($valp => $name,)*
                    Self::Other(custom) => custom,
                }
            }

            /// Tries to parse the given name into a variant, and returns `None`
            /// if no variant matched.
            pub(crate) fn from_str_without_other(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($val),)*
                    _ => None,
                }
            }
        }
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled, and
/// nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! event {
    (debug, $($arg:tt)+) => { tracing::debug!($($arg)+) };
    (trace, $($arg:tt)+) => { tracing::trace!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {};
}
