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

//! `serde` adapters storing registered enums by name.
//!
//! Use them with `#[serde(with = "...")]` on a field:
//!
//! ```
//! use nomina_core::renderer::WrapMode;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Sampler {
//!     #[serde(with = "nomina_core::serde_names::alias")]
//!     wrap_u: WrapMode,
//! }
//! ```

/// Writes the preferred alias (the authoring form) and reads tolerantly.
///
/// On read, the reverse index is tried first, then the canonical names, and
/// anything else becomes the fallback variant. Variants without an alias are
/// written with their canonical name.
pub mod alias {
    use crate::registry::NamedEnum;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `value` as its preferred alias.
    pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: NamedEnum,
        S: Serializer,
    {
        serializer.serialize_str(value.preferred_alias().unwrap_or_else(|| value.name()))
    }

    /// Deserializes a name, never failing on unrecognized input.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: NamedEnum,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        let descriptor = E::descriptor();
        Ok(descriptor
            .try_value_from_name(&name)
            .ok()
            .or_else(|| descriptor.value_from_canonical(&name))
            .unwrap_or_else(|| descriptor.value_from_name(&name)))
    }
}

/// Writes the canonical name and reads canonical names strictly.
pub mod canonical {
    use crate::error::NameError;
    use crate::registry::NamedEnum;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `value` as its canonical name.
    pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: NamedEnum,
        S: Serializer,
    {
        serializer.serialize_str(value.name())
    }

    /// Deserializes a canonical name, failing on anything else.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: NamedEnum,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        let descriptor = E::descriptor();
        descriptor.value_from_canonical(&name).ok_or_else(|| {
            D::Error::custom(NameError::NotFound {
                type_name: descriptor.type_name(),
                name,
            })
        })
    }
}
