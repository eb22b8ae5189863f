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

//! Index buffer formats.

use crate::NamedEnum;

/// Specifies the data type of indices in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NamedEnum)]
#[named(prefix = "IndexFormat")]
pub enum IndexFormat {
    /// The mesh is not indexed.
    #[default]
    None,
    /// Indices are 16-bit unsigned integers.
    #[named(alias = "U16")]
    UInt16,
    /// Indices are 32-bit unsigned integers.
    #[named(alias = "U32")]
    UInt32,
}

impl IndexFormat {
    /// Returns the size in bytes of a single index, or `0` for unindexed meshes.
    pub fn byte_size(self) -> u32 {
        match self {
            IndexFormat::None => 0,
            IndexFormat::UInt16 => 2,
            IndexFormat::UInt32 => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_format_names() {
        assert_eq!(IndexFormat::UInt16.name(), "IndexFormatUInt16");
        assert_eq!(IndexFormat::from_name("U32"), IndexFormat::UInt32);
        assert_eq!(IndexFormat::from_name("UInt32"), IndexFormat::UInt32);
        assert_eq!(IndexFormat::from_name("u32"), IndexFormat::None);
    }

    #[test]
    fn test_index_format_byte_size() {
        assert_eq!(IndexFormat::None.byte_size(), 0);
        assert_eq!(IndexFormat::UInt16.byte_size(), 2);
        assert_eq!(IndexFormat::UInt32.byte_size(), 4);
    }

    #[test]
    fn test_index_format_preferred_alias() {
        assert_eq!(IndexFormat::UInt16.preferred_alias(), Some("UInt16"));
    }
}
