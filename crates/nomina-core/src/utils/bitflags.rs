// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A macro to define bitflags whose flags carry display names.
//!
//! Each flag is declared with the name used in authored files:
//!
//! ```
//! nomina_core::nomina_bitflags! {
//!     pub struct Layers: u8 {
//!         const WORLD = 1 << 0 => "World";
//!         const UI = 1 << 1 => "Ui";
//!     }
//! }
//!
//! let layers = Layers::from_names("World | Ui");
//! assert_eq!(layers, Layers::WORLD | Layers::UI);
//! assert_eq!(layers.to_string(), "World|Ui");
//! ```
//!
//! Parsing accepts both the display name and the constant identifier, split
//! on `|`, `+` or `,`. [`from_names`] skips unknown tokens, like the tolerant
//! enum lookup; `try_from_names` reports the first one.
//!
//! [`from_names`]: crate::input::KeyModifiers::from_names

/// Declares a bit flag set whose flags have display names.
#[macro_export]
macro_rules! nomina_bitflags {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $ty:ty {
            $(
                $(#[$flag_attr:meta])*
                const $flag_name:ident = $flag_value:expr => $label:literal;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name {
            pub(crate) bits: $ty,
        }

        impl $name {
            /// An empty set of flags.
            pub const EMPTY: Self = Self { bits: 0 };

            $(
                $(#[$flag_attr])*
                pub const $flag_name: Self = Self { bits: $flag_value };
            )*

            /// Every named flag with its display name, in declaration order.
            pub const FLAG_NAMES: &'static [(&'static str, Self)] = &[
                $(($label, Self::$flag_name),)*
            ];

            /// Creates a flag set from raw bits, keeping unknown bits.
            pub const fn from_bits_truncate(bits: $ty) -> Self {
                Self { bits }
            }

            /// Returns the raw value of the flag set.
            pub const fn bits(&self) -> $ty {
                self.bits
            }

            /// Returns `true` if no flag is set.
            pub const fn is_empty(&self) -> bool {
                self.bits == 0
            }

            /// Returns `true` if all flags in `other` are contained within `self`.
            pub const fn contains(&self, other: Self) -> bool {
                (self.bits & other.bits) == other.bits
            }

            /// Returns `true` if any flag in `other` is contained within `self`.
            pub const fn intersects(&self, other: Self) -> bool {
                (self.bits & other.bits) != 0
            }

            /// Inserts the flags in `other` into `self`.
            pub fn insert(&mut self, other: Self) {
                self.bits |= other.bits;
            }

            /// Removes the flags in `other` from `self`.
            pub fn remove(&mut self, other: Self) {
                self.bits &= !other.bits;
            }

            /// Returns the display names of the contained flags.
            ///
            /// Bits not covered by a named flag are omitted.
            pub fn names(&self) -> Vec<&'static str> {
                let mut remaining = self.bits;
                let mut names = Vec::new();
                for (label, flag) in Self::FLAG_NAMES {
                    if flag.bits != 0 && (remaining & flag.bits) == flag.bits {
                        names.push(*label);
                        remaining &= !flag.bits;
                    }
                }
                names
            }

            /// Returns the flag matching a display name or constant identifier.
            pub fn flag_from_name(token: &str) -> Option<Self> {
                $(
                    if token == $label || token == stringify!($flag_name) {
                        return Some(Self::$flag_name);
                    }
                )*
                None
            }

            /// Parses a list of flag names, skipping unknown tokens.
            ///
            /// Empty input yields [`EMPTY`](Self::EMPTY).
            pub fn from_names(text: &str) -> Self {
                Self::tokens(text)
                    .filter_map(Self::flag_from_name)
                    .fold(Self::EMPTY, |acc, flag| acc | flag)
            }

            /// Parses a list of flag names, failing on the first unknown token.
            pub fn try_from_names(text: &str) -> Result<Self, $crate::NameError> {
                let mut flags = Self::EMPTY;
                for token in Self::tokens(text) {
                    let flag = Self::flag_from_name(token).ok_or_else(|| {
                        $crate::NameError::NotFound {
                            type_name: stringify!($name),
                            name: token.to_string(),
                        }
                    })?;
                    flags.insert(flag);
                }
                Ok(flags)
            }

            fn tokens(text: &str) -> impl Iterator<Item = &str> {
                text.split(['|', '+', ','])
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self { bits: self.bits | other.bits }
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self { bits: self.bits & other.bits }
            }
        }

        impl core::ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                Self { bits: !self.bits }
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.bits |= other.bits;
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.names().join("|"))
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let names = self.names();
                let named_bits = names
                    .iter()
                    .filter_map(|label| Self::flag_from_name(label))
                    .fold(0, |acc, flag| acc | flag.bits);
                let unknown = self.bits & !named_bits;

                write!(f, "{}(", stringify!($name))?;
                if names.is_empty() && unknown == 0 {
                    write!(f, "EMPTY")?;
                } else {
                    write!(f, "{}", names.join(" | "))?;
                    if unknown != 0 {
                        if !names.is_empty() {
                            write!(f, " | ")?;
                        }
                        write!(f, "UNKNOWN({:#x})", unknown)?;
                    }
                }
                write!(f, ")")
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from_names(s)
            }
        }
    };
}
