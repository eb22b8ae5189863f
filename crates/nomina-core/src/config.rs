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

//! Configuration for how reverse lookups treat unrecognized names.

use serde::{Deserialize, Serialize};

/// What a configured lookup does when the input is not a known name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MissPolicy {
    /// Resolve to the value-0 fallback variant.
    #[default]
    Tolerant,
    /// Report [`NameError::NotFound`](crate::NameError::NotFound).
    Strict,
}

/// The log level used to report unrecognized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MissLogLevel {
    /// Misses are not logged.
    Off,
    /// Log at `trace`.
    Trace,
    /// Log at `debug`.
    #[default]
    Debug,
    /// Log at `info`.
    Info,
    /// Log at `warn`.
    Warn,
}

impl MissLogLevel {
    /// Returns the matching `log` level, or `None` when logging is off.
    pub fn to_level(self) -> Option<log::Level> {
        match self {
            MissLogLevel::Off => None,
            MissLogLevel::Trace => Some(log::Level::Trace),
            MissLogLevel::Debug => Some(log::Level::Debug),
            MissLogLevel::Info => Some(log::Level::Info),
            MissLogLevel::Warn => Some(log::Level::Warn),
        }
    }
}

/// Settings applied by [`EnumDescriptor::resolve`](crate::EnumDescriptor::resolve).
///
/// Can be embedded in a larger RON/JSON settings file; missing fields take
/// their defaults.
///
/// ```
/// use nomina_core::{LookupConfig, MissPolicy};
///
/// let config = LookupConfig::from_ron("(policy: Strict)").unwrap();
/// assert_eq!(config.policy, MissPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// How unrecognized names are resolved.
    pub policy: MissPolicy,
    /// How unrecognized names are reported.
    pub log_level: MissLogLevel,
}

impl LookupConfig {
    /// The default behavior: fall back to value 0 and log at `debug`.
    pub const TOLERANT: Self = Self {
        policy: MissPolicy::Tolerant,
        log_level: MissLogLevel::Debug,
    };

    /// Reject unrecognized names and log them at `warn`.
    pub const STRICT: Self = Self {
        policy: MissPolicy::Strict,
        log_level: MissLogLevel::Warn,
    };

    /// Parses a configuration from RON text.
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }

    /// Serializes this configuration to pretty-printed RON.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tolerant() {
        assert_eq!(LookupConfig::default(), LookupConfig::TOLERANT);
    }

    #[test]
    fn test_from_ron_partial() {
        let config = LookupConfig::from_ron("(log_level: Warn)").unwrap();
        assert_eq!(config.policy, MissPolicy::Tolerant);
        assert_eq!(config.log_level, MissLogLevel::Warn);
    }

    #[test]
    fn test_from_ron_rejects_unknown_policy() {
        assert!(LookupConfig::from_ron("(policy: Lenient)").is_err());
    }

    #[test]
    fn test_ron_text_reloads() {
        let text = LookupConfig::STRICT.to_ron().unwrap();
        assert_eq!(LookupConfig::from_ron(&text).unwrap(), LookupConfig::STRICT);
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(MissLogLevel::Off.to_level(), None);
        assert_eq!(MissLogLevel::Warn.to_level(), Some(log::Level::Warn));
    }
}
