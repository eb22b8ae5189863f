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

use super::NamedEnum;
use crate::config::{LookupConfig, MissPolicy};
use crate::error::NameError;
use ahash::{AHashMap, AHashSet};
use std::fmt;
use std::sync::OnceLock;

/// Placeholder returned by [`EnumDescriptor::name`] when a hand-written
/// `names` table has no entry for a value.
pub const UNNAMED: &str = "<unnamed>";

/// Reports `index` as a signed value; indices past `i64::MAX` saturate.
fn saturating_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// The immutable name tables of one enumerated type.
///
/// `names` is indexed by value and holds exactly one canonical name per
/// constant. `aliases` lists the accepted input strings in declaration
/// order; it may use short forms and may leave some constants out. The two
/// tables are independent and need not be inverses of each other.
///
/// Descriptors are built in `const` context and live in `static` items. The
/// hash map backing reverse lookups is built on first use behind a
/// [`OnceLock`], so no reader ever sees a partially built index.
pub struct EnumDescriptor<E: 'static> {
    type_name: &'static str,
    names: &'static [&'static str],
    aliases: &'static [(&'static str, E)],
    reverse: OnceLock<AHashMap<&'static str, E>>,
}

impl<E: 'static> EnumDescriptor<E> {
    /// Creates a descriptor from static tables.
    pub const fn new(
        type_name: &'static str,
        names: &'static [&'static str],
        aliases: &'static [(&'static str, E)],
    ) -> Self {
        Self {
            type_name,
            names,
            aliases,
            reverse: OnceLock::new(),
        }
    }

    /// Returns the name of the enumerated type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the canonical names, indexed by value.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Returns the accepted input names in declaration order.
    pub fn aliases(&self) -> &'static [(&'static str, E)] {
        self.aliases
    }
}

impl<E: NamedEnum> EnumDescriptor<E> {
    /// Returns the sentinel count of the type.
    pub fn count(&self) -> usize {
        E::COUNT
    }

    /// Returns the canonical name of a typed value.
    ///
    /// A descriptor whose `names` table is shorter than `COUNT` fails
    /// [`validate`](Self::validate); for such a descriptor the missing names
    /// come back as [`UNNAMED`] and the miss is logged as an error.
    pub fn name(&self, value: E) -> &'static str {
        match self.name_of(value.index()) {
            Ok(name) => name,
            Err(err) => {
                log::error!("{err}");
                UNNAMED
            }
        }
    }

    /// Returns the canonical name stored at `index`.
    ///
    /// Fails with [`NameError::OutOfRange`] unless `index < count` and the
    /// table holds a name at that index.
    pub fn name_of(&self, index: usize) -> Result<&'static str, NameError> {
        if index >= E::COUNT {
            return Err(self.out_of_range(saturating_i64(index)));
        }
        self.names
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(saturating_i64(index)))
    }

    /// Like [`name_of`](Self::name_of), for signed values coming from outside
    /// the type system (file formats, FFI, scripting).
    pub fn name_of_raw(&self, raw: i64) -> Result<&'static str, NameError> {
        let index = usize::try_from(raw).map_err(|_| self.out_of_range(raw))?;
        self.name_of(index)
    }

    /// Resolves `name` through the reverse index.
    ///
    /// Unrecognized input, including the empty string, resolves to
    /// [`NamedEnum::FALLBACK`]. Existing configuration data relies on this.
    pub fn value_from_name(&self, name: &str) -> E {
        match self.reverse_index().get(name) {
            Some(value) => *value,
            None => {
                log::debug!(
                    "Unknown {} name '{}', falling back to {:?}",
                    self.type_name,
                    name,
                    E::FALLBACK
                );
                E::FALLBACK
            }
        }
    }

    /// Resolves `name` through the reverse index, failing with
    /// [`NameError::NotFound`] on a miss.
    pub fn try_value_from_name(&self, name: &str) -> Result<E, NameError> {
        self.reverse_index()
            .get(name)
            .copied()
            .ok_or_else(|| NameError::NotFound {
                type_name: self.type_name,
                name: name.to_string(),
            })
    }

    /// Resolves `name` with the miss policy and log level of `config`.
    pub fn resolve(&self, name: &str, config: &LookupConfig) -> Result<E, NameError> {
        if let Some(value) = self.reverse_index().get(name) {
            return Ok(*value);
        }

        if let Some(level) = config.log_level.to_level() {
            log::log!(
                level,
                "Unrecognized {} name '{}' ({:?} lookup)",
                self.type_name,
                name,
                config.policy
            );
        }

        match config.policy {
            MissPolicy::Tolerant => Ok(E::FALLBACK),
            MissPolicy::Strict => Err(NameError::NotFound {
                type_name: self.type_name,
                name: name.to_string(),
            }),
        }
    }

    /// Looks `name` up among the canonical names only.
    pub fn value_from_canonical(&self, name: &str) -> Option<E> {
        self.names
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(E::from_index)
    }

    /// Returns the first alias declared for `value`, the form written back to
    /// authored files.
    pub fn preferred_alias(&self, value: E) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(_, target)| *target == value)
            .map(|(alias, _)| *alias)
    }

    /// Iterates over every value in index order.
    pub fn iter(&self) -> impl Iterator<Item = E> {
        E::all()
    }

    /// Checks the registry invariants of both tables.
    pub fn validate(&self) -> Result<(), NameError> {
        if self.names.len() != E::COUNT {
            return Err(self.invalid(format!(
                "{} canonical names for {} values",
                self.names.len(),
                E::COUNT
            )));
        }

        for index in 0..E::COUNT {
            match E::from_index(index) {
                Some(value) if value.index() == index => {}
                _ => return Err(self.invalid(format!("no constant with value {index}"))),
            }
        }

        if E::FALLBACK.index() != 0 {
            return Err(self.invalid(format!(
                "fallback {:?} does not have value 0",
                E::FALLBACK
            )));
        }

        let mut seen = AHashSet::with_capacity(self.names.len());
        for name in self.names {
            if !seen.insert(*name) {
                return Err(self.invalid(format!("duplicate canonical name '{name}'")));
            }
        }

        let mut seen = AHashSet::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            if !seen.insert(*alias) {
                return Err(self.invalid(format!("duplicate alias '{alias}'")));
            }
            if target.index() >= E::COUNT {
                return Err(self.invalid(format!(
                    "alias '{alias}' maps to out-of-range value {}",
                    target.index()
                )));
            }
        }

        Ok(())
    }

    fn reverse_index(&self) -> &AHashMap<&'static str, E> {
        self.reverse.get_or_init(|| {
            log::trace!(
                "Building reverse name index for {} ({} aliases)",
                self.type_name,
                self.aliases.len()
            );
            let mut index = AHashMap::with_capacity(self.aliases.len());
            for (alias, value) in self.aliases {
                // First declaration wins; `validate` reports the duplicate.
                index.entry(*alias).or_insert(*value);
            }
            index
        })
    }

    fn out_of_range(&self, value: i64) -> NameError {
        NameError::OutOfRange {
            type_name: self.type_name,
            value,
            count: E::COUNT,
        }
    }

    fn invalid(&self, reason: String) -> NameError {
        NameError::InvalidDescriptor {
            type_name: self.type_name,
            reason,
        }
    }
}

impl<E: fmt::Debug + 'static> fmt::Debug for EnumDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("type_name", &self.type_name)
            .field("names", &self.names)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A hand-registered enum whose tables can be broken on purpose.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Shade {
        None,
        Light,
        Dark,
    }

    static SHADE_NAMES: [&str; 3] = ["ShadeNone", "ShadeLight", "ShadeDark"];
    static SHADE_ALIASES: [(&str, Shade); 3] = [
        ("Light", Shade::Light),
        ("Pale", Shade::Light),
        ("Dark", Shade::Dark),
    ];
    static SHADE: EnumDescriptor<Shade> =
        EnumDescriptor::new("Shade", &SHADE_NAMES, &SHADE_ALIASES);

    impl NamedEnum for Shade {
        const COUNT: usize = 3;
        const FALLBACK: Self = Shade::None;

        fn descriptor() -> &'static EnumDescriptor<Self> {
            &SHADE
        }

        fn index(self) -> usize {
            self as usize
        }

        fn from_index(index: usize) -> Option<Self> {
            match index {
                0 => Some(Shade::None),
                1 => Some(Shade::Light),
                2 => Some(Shade::Dark),
                _ => None,
            }
        }
    }

    #[test]
    fn test_forward_lookup() {
        assert_eq!(SHADE.name(Shade::Dark), "ShadeDark");
        assert_eq!(SHADE.name_of(1), Ok("ShadeLight"));
    }

    #[test]
    fn test_forward_lookup_out_of_range() {
        assert_eq!(
            SHADE.name_of(3),
            Err(NameError::OutOfRange {
                type_name: "Shade",
                value: 3,
                count: 3,
            })
        );
        assert!(matches!(
            SHADE.name_of_raw(-1),
            Err(NameError::OutOfRange { value: -1, .. })
        ));
        assert_eq!(
            SHADE.name_of(usize::MAX),
            Err(NameError::OutOfRange {
                type_name: "Shade",
                value: i64::MAX,
                count: 3,
            })
        );
    }

    #[test]
    fn test_reverse_lookup_with_aliases() {
        assert_eq!(SHADE.value_from_name("Pale"), Shade::Light);
        assert_eq!(SHADE.value_from_name("Light"), Shade::Light);
        // Canonical names are not reverse keys here.
        assert_eq!(SHADE.value_from_name("ShadeDark"), Shade::None);
        assert_eq!(SHADE.value_from_name(""), Shade::None);
    }

    #[test]
    fn test_strict_reverse_lookup() {
        assert_eq!(SHADE.try_value_from_name("Dark"), Ok(Shade::Dark));
        assert_eq!(
            SHADE.try_value_from_name("dark"),
            Err(NameError::NotFound {
                type_name: "Shade",
                name: "dark".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_follows_policy() {
        assert_eq!(
            SHADE.resolve("Grey", &LookupConfig::TOLERANT),
            Ok(Shade::None)
        );
        assert!(SHADE.resolve("Grey", &LookupConfig::STRICT).is_err());
        assert_eq!(SHADE.resolve("Dark", &LookupConfig::STRICT), Ok(Shade::Dark));
    }

    #[test]
    fn test_preferred_alias_is_first_declared() {
        assert_eq!(SHADE.preferred_alias(Shade::Light), Some("Light"));
        assert_eq!(SHADE.preferred_alias(Shade::None), None);
    }

    #[test]
    fn test_value_from_canonical() {
        assert_eq!(SHADE.value_from_canonical("ShadeLight"), Some(Shade::Light));
        assert_eq!(SHADE.value_from_canonical("Light"), None);
    }

    #[test]
    fn test_validate_accepts_consistent_tables() {
        assert_eq!(SHADE.validate(), Ok(()));
        assert_eq!(
            SHADE.iter().collect::<Vec<_>>(),
            vec![Shade::None, Shade::Light, Shade::Dark]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_alias() {
        static ALIASES: [(&str, Shade); 2] = [("Dark", Shade::Dark), ("Dark", Shade::Light)];
        static BROKEN: EnumDescriptor<Shade> =
            EnumDescriptor::new("Shade", &SHADE_NAMES, &ALIASES);
        assert!(matches!(
            BROKEN.validate(),
            Err(NameError::InvalidDescriptor { .. })
        ));
        // The first declaration is the one the index keeps.
        assert_eq!(BROKEN.value_from_name("Dark"), Shade::Dark);
    }

    #[test]
    fn test_validate_rejects_missing_and_duplicate_names() {
        static SHORT: [&str; 2] = ["ShadeNone", "ShadeLight"];
        static SHORT_DESC: EnumDescriptor<Shade> = EnumDescriptor::new("Shade", &SHORT, &[]);
        assert!(SHORT_DESC.validate().is_err());
        assert_eq!(
            SHORT_DESC.name_of(2),
            Err(NameError::OutOfRange {
                type_name: "Shade",
                value: 2,
                count: 3,
            })
        );
        // Typed lookups on a short table degrade instead of panicking.
        assert_eq!(SHORT_DESC.name(Shade::Light), "ShadeLight");
        assert_eq!(SHORT_DESC.name(Shade::Dark), UNNAMED);

        static DUPES: [&str; 3] = ["ShadeNone", "ShadeLight", "ShadeLight"];
        static DUPES_DESC: EnumDescriptor<Shade> = EnumDescriptor::new("Shade", &DUPES, &[]);
        assert!(DUPES_DESC.validate().is_err());
    }
}
