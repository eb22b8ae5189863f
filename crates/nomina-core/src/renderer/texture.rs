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

//! Texture sampling enums.

use crate::NamedEnum;

/// Defines how texture coordinates outside the `[0, 1]` range are handled.
///
/// Authored files use the short names (`"Repeat"`); the canonical names
/// (`"WrapModeRepeat"`) are used for debug display and strict exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NamedEnum)]
#[named(prefix = "WrapMode")]
pub enum WrapMode {
    /// No wrapping is specified; the sampler default applies.
    #[default]
    None,
    /// Coordinates wrap around. `1.1` becomes `0.1`.
    Repeat,
    /// Coordinates wrap around, mirroring at each integer boundary.
    #[named(alias = "MirrorRepeat")]
    MirroredRepeat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameError;

    #[test]
    fn test_wrap_mode_forward_names() {
        assert_eq!(WrapMode::None.name(), "WrapModeNone");
        assert_eq!(WrapMode::Repeat.name(), "WrapModeRepeat");
        assert_eq!(WrapMode::MirroredRepeat.name(), "WrapModeMirroredRepeat");
        assert_eq!(WrapMode::Repeat.to_string(), "WrapModeRepeat");
    }

    #[test]
    fn test_wrap_mode_reverse_names() {
        assert_eq!(WrapMode::from_name("Repeat"), WrapMode::Repeat);
        assert_eq!(WrapMode::from_name("MirrorRepeat"), WrapMode::MirroredRepeat);
        assert_eq!(WrapMode::from_name("Bogus"), WrapMode::None);
        assert_eq!(WrapMode::from_name("WrapModeRepeat"), WrapMode::None);
        assert_eq!(WrapMode::from_name("repeat"), WrapMode::None);
    }

    #[test]
    fn test_wrap_mode_one_past_the_end() {
        assert_eq!(WrapMode::COUNT, 3);
        assert_eq!(
            WrapMode::name_of_raw(3),
            Err(NameError::OutOfRange {
                type_name: "WrapMode",
                value: 3,
                count: 3,
            })
        );
    }

    #[test]
    fn test_wrap_mode_from_str_is_strict() {
        assert_eq!("MirroredRepeat".parse::<WrapMode>(), Ok(WrapMode::MirroredRepeat));
        assert!("Clamp".parse::<WrapMode>().is_err());
    }
}
