//! Style resolution: named presets and tokens to concrete paint descriptors.
//!
//! Every lookup table is a closed enum matched exhaustively. Strings only
//! appear at the configuration boundary (`from_name`, serde), where unknown
//! names fall back to the documented default instead of erroring.

/// Implements the string boundary for a closed, field-less enum:
/// `ALL`, `name()`, `from_name()`, `Display` and `FromStr`.
macro_rules! named_variants {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Kebab-case name used in configuration files.
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            /// Case-insensitive lookup; `None` for unknown names.
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                Self::ALL.iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::style::UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::style::UnknownName {
                    kind: stringify!($ty),
                    name: s.to_string(),
                })
            }
        }
    };
}
pub(crate) use named_variants;

pub mod color;
pub mod gradient;
pub mod roundness;
pub mod shadow;

pub use color::{
    resolve_color, ColorSource, ColorToken, DefaultPalette, HoverColor, HoverState, TokenPalette,
};
pub use gradient::{resolve_gradient, CustomGradient, GradientKindName, GradientPreset, GradientSpec};
pub use roundness::{Roundness, RoundnessConfig, RoundnessLevel};
pub use shadow::{resolve_shadow, CustomShadow, ShadowPreset, ShadowSpec};

/// A preset, token or level name that is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{name}`")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

/// Logs a fallback for an unrecognized name. Silent in release builds.
#[inline]
pub(crate) fn note_fallback(kind: &str, name: &str, fallback: &str) {
    if cfg!(debug_assertions) {
        log::debug!("unknown {kind} `{name}`, using {fallback}");
    }
}
