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

//! Touch gesture phases.

use crate::NamedEnum;

/// The phase of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NamedEnum)]
#[named(prefix = "TouchAction")]
pub enum TouchAction {
    /// No touch activity.
    #[default]
    None,
    /// A finger touched the surface.
    #[named(alias = "Press")]
    Down,
    /// A finger left the surface.
    #[named(alias = "Release")]
    Up,
    /// A finger moved while touching the surface.
    Move,
    /// The system cancelled the touch (e.g. the window lost focus).
    Cancel,
}

impl TouchAction {
    /// Returns `true` if the touch point is no longer active after this action.
    pub fn ends_touch(self) -> bool {
        matches!(self, TouchAction::Up | TouchAction::Cancel)
    }
}
