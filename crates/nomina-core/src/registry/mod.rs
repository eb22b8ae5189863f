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

//! The enum name registry: per-type descriptors and the trait exposing them.

mod descriptor;

pub use self::descriptor::{EnumDescriptor, UNNAMED};

use crate::error::NameError;
use std::fmt::Debug;
use std::hash::Hash;

/// An enumerated type with a closed, contiguous set of values `0..COUNT`
/// and a name registry.
///
/// Normally implemented with `#[derive(NamedEnum)]`, which emits the static
/// tables and keeps them consistent with the variants.
///
/// # Examples
///
/// ```
/// use nomina_core::renderer::WrapMode;
/// use nomina_core::NamedEnum;
///
/// assert_eq!(WrapMode::Repeat.name(), "WrapModeRepeat");
/// assert_eq!(WrapMode::from_name("Repeat"), WrapMode::Repeat);
/// assert_eq!(WrapMode::from_name("Bogus"), WrapMode::None);
/// assert!(WrapMode::name_of_raw(3).is_err());
/// ```
pub trait NamedEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The sentinel count: the number of values of this type.
    const COUNT: usize;

    /// The value-0 variant returned for unrecognized names.
    const FALLBACK: Self;

    /// Returns the process-wide name tables for this type.
    fn descriptor() -> &'static EnumDescriptor<Self>;

    /// Returns the integer value of this constant.
    fn index(self) -> usize;

    /// Returns the constant with the given integer value, if any.
    fn from_index(index: usize) -> Option<Self>;

    /// Returns the canonical display name of this constant.
    fn name(self) -> &'static str {
        Self::descriptor().name(self)
    }

    /// Resolves a name through the reverse index, falling back to
    /// [`FALLBACK`](Self::FALLBACK) on a miss.
    fn from_name(name: &str) -> Self {
        Self::descriptor().value_from_name(name)
    }

    /// Resolves a name through the reverse index, reporting a miss as
    /// [`NameError::NotFound`].
    fn try_from_name(name: &str) -> Result<Self, NameError> {
        Self::descriptor().try_value_from_name(name)
    }

    /// Returns the canonical name for a raw integer value, checking its range.
    fn name_of_raw(raw: i64) -> Result<&'static str, NameError> {
        Self::descriptor().name_of_raw(raw)
    }

    /// Returns the first alias declared for this constant, if it has any.
    fn preferred_alias(self) -> Option<&'static str> {
        Self::descriptor().preferred_alias(self)
    }

    /// Iterates over every value in index order.
    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}
