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

//! Gamepad button identifiers.

use crate::NamedEnum;

/// A gamepad button, using the common Xbox-style layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NamedEnum)]
#[named(prefix = "JoystickButton")]
pub enum JoystickButton {
    /// No button.
    #[default]
    None,
    /// The bottom face button.
    A,
    /// The right face button.
    B,
    /// The left face button.
    X,
    /// The top face button.
    Y,
    /// The left shoulder button.
    LeftBumper,
    /// The right shoulder button.
    RightBumper,
    /// The left center button.
    #[named(alias = "Select")]
    Back,
    /// The right center button.
    Start,
    /// The vendor logo button.
    #[named(alias = "Home")]
    Guide,
    /// Pressing the left stick.
    LeftThumb,
    /// Pressing the right stick.
    RightThumb,
    /// D-pad up.
    DPadUp,
    /// D-pad right.
    DPadRight,
    /// D-pad down.
    DPadDown,
    /// D-pad left.
    DPadLeft,
}

impl JoystickButton {
    /// Returns `true` for the four d-pad directions.
    pub fn is_dpad(self) -> bool {
        matches!(
            self,
            JoystickButton::DPadUp
                | JoystickButton::DPadRight
                | JoystickButton::DPadDown
                | JoystickButton::DPadLeft
        )
    }
}
