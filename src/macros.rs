/// Implements `Display`, `FromStr` and the serde traits for a fieldless enum
/// whose variants are identified by a registered name, e.g. `"P-256"`.
///
/// `$err` is the error returned by `FromStr` and must provide a
/// `From<String>`-like constructor via the given closure.
macro_rules! impl_serde_jwa {
    ($T:ty, $err:expr, [
        $($name:literal => $val:expr; $valp:pat,)*
    ]) => {
        impl $T {
            /// Returns the registered name of this value.
            pub const fn name(&self) -> &'static str {
                match self {
                    $($valp => $name,)*
                }
            }

            /// Tries to parse the given name into a variant, and returns `None`
            /// if no variant matched.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($val),)*
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $T {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl core::str::FromStr for $T {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| ($err)(alloc::string::ToString::to_string(s)))
            }
        }

        #[allow(unused_qualifications)]
        impl<'de> serde::Deserialize<'de> for $T {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let name = <alloc::borrow::Cow<'_, str> as serde::Deserialize>::deserialize(deserializer)?;

                Self::from_name(&name).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(alloc::format!(
                        "unknown {} `{}`",
                        stringify!($T),
                        name
                    ))
                })
            }
        }

        #[allow(unused_qualifications)]
        impl serde::Serialize for $T {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                <&str as serde::Serialize>::serialize(&self.name(), serializer)
            }
        }
    };
}

/// Generates the `Option`-taking setters of a JWK builder.
macro_rules! gen_builder_methods {
    ($($field:ident: $T:ty,)*) => {
        $(#[doc = concat!("Override the `", stringify!($field), "` for this JWK.")]
        #[inline]
        pub fn $field(mut self, $field: impl Into<Option<$T>>) -> Self {
            self.$field = $field.into();
            self
        })*
    };
}
