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

//! A process-wide catalog of every registered enumerated type.
//!
//! `#[derive(NamedEnum)]` submits a [`CatalogEntry`] for each type through
//! `inventory`, so editors and debug tooling can list the registered enums
//! and their names without knowing the concrete Rust types.

use crate::error::NameError;
use crate::registry::NamedEnum;
use std::fmt;

/// A type-erased view over one enum's name tables.
pub struct CatalogEntry {
    type_name: &'static str,
    count: usize,
    names: fn() -> &'static [&'static str],
    aliases: fn() -> Vec<(&'static str, usize)>,
    name_of: fn(usize) -> Result<&'static str, NameError>,
    index_of: fn(&str) -> Option<usize>,
    validate: fn() -> Result<(), NameError>,
}

inventory::collect!(CatalogEntry);

impl CatalogEntry {
    /// Creates the catalog entry for `E`.
    pub const fn of<E: NamedEnum>(type_name: &'static str) -> Self {
        Self {
            type_name,
            count: E::COUNT,
            names: names_of::<E>,
            aliases: aliases_of::<E>,
            name_of: name_of::<E>,
            index_of: index_of::<E>,
            validate: validate_of::<E>,
        }
    }

    /// Returns the name of the enumerated type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the sentinel count of the type.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the canonical names, indexed by value.
    pub fn names(&self) -> &'static [&'static str] {
        (self.names)()
    }

    /// Returns `(alias, value)` pairs in declaration order.
    pub fn aliases(&self) -> Vec<(&'static str, usize)> {
        (self.aliases)()
    }

    /// Returns the canonical name stored at `index`.
    pub fn name_of(&self, index: usize) -> Result<&'static str, NameError> {
        (self.name_of)(index)
    }

    /// Resolves a name through the reverse index, falling back to `0`.
    pub fn index_from_name(&self, name: &str) -> usize {
        (self.index_of)(name).unwrap_or(0)
    }

    /// Resolves a name through the reverse index, failing on a miss.
    pub fn try_index_from_name(&self, name: &str) -> Result<usize, NameError> {
        (self.index_of)(name).ok_or_else(|| NameError::NotFound {
            type_name: self.type_name,
            name: name.to_string(),
        })
    }

    /// Checks the registry invariants of this type's tables.
    pub fn validate(&self) -> Result<(), NameError> {
        (self.validate)()
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("type_name", &self.type_name)
            .field("count", &self.count)
            .finish()
    }
}

fn names_of<E: NamedEnum>() -> &'static [&'static str] {
    E::descriptor().names()
}

fn aliases_of<E: NamedEnum>() -> Vec<(&'static str, usize)> {
    E::descriptor()
        .aliases()
        .iter()
        .map(|(alias, value)| (*alias, value.index()))
        .collect()
}

fn name_of<E: NamedEnum>(index: usize) -> Result<&'static str, NameError> {
    E::descriptor().name_of(index)
}

fn index_of<E: NamedEnum>(name: &str) -> Option<usize> {
    E::try_from_name(name).ok().map(E::index)
}

fn validate_of<E: NamedEnum>() -> Result<(), NameError> {
    E::descriptor().validate()
}

/// Iterates over every registered type, in no particular order.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    inventory::iter::<CatalogEntry>.into_iter()
}

/// Finds the entry of a registered type by name.
pub fn find(type_name: &str) -> Option<&'static CatalogEntry> {
    entries().find(|entry| entry.type_name == type_name)
}

/// Validates every registered type, logging each failure.
///
/// Returns the first error encountered.
pub fn validate_all() -> Result<(), NameError> {
    let mut first_error = None;
    let mut checked = 0usize;
    for entry in entries() {
        checked += 1;
        if let Err(err) = entry.validate() {
            log::error!("{err}");
            first_error.get_or_insert(err);
        }
    }
    log::debug!("Validated name tables of {checked} enumerated types");
    first_error.map_or(Ok(()), Err)
}
