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

//! Defines the error type for name lookups.

use std::fmt;

/// An error raised by a name registry lookup or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// A forward lookup was given a value outside `[0, count)`.
    OutOfRange {
        /// The enumerated type being looked up.
        type_name: &'static str,
        /// The rejected raw value.
        value: i64,
        /// The type's sentinel count.
        count: usize,
    },
    /// A strict reverse lookup did not recognize the input string.
    NotFound {
        /// The enumerated type being looked up.
        type_name: &'static str,
        /// The unrecognized input.
        name: String,
    },
    /// A descriptor's tables break one of the registry invariants.
    InvalidDescriptor {
        /// The enumerated type owning the descriptor.
        type_name: &'static str,
        /// What is wrong with the tables.
        reason: String,
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::OutOfRange {
                type_name,
                value,
                count,
            } => {
                write!(
                    f,
                    "Value {value} is out of range for '{type_name}' (expected 0..{count})"
                )
            }
            NameError::NotFound { type_name, name } => {
                write!(f, "Unknown name '{name}' for '{type_name}'")
            }
            NameError::InvalidDescriptor { type_name, reason } => {
                write!(f, "Invalid name tables for '{type_name}': {reason}")
            }
        }
    }
}

impl std::error::Error for NameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = NameError::OutOfRange {
            type_name: "WrapMode",
            value: 3,
            count: 3,
        };
        assert_eq!(
            format!("{err}"),
            "Value 3 is out of range for 'WrapMode' (expected 0..3)"
        );
    }

    #[test]
    fn not_found_display() {
        let err = NameError::NotFound {
            type_name: "TouchAction",
            name: "Swipe".to_string(),
        };
        assert_eq!(format!("{err}"), "Unknown name 'Swipe' for 'TouchAction'");
    }

    #[test]
    fn invalid_descriptor_display() {
        let err = NameError::InvalidDescriptor {
            type_name: "IndexFormat",
            reason: "duplicate canonical name 'IndexFormatUInt16'".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Invalid name tables for 'IndexFormat': duplicate canonical name 'IndexFormatUInt16'"
        );
    }
}
