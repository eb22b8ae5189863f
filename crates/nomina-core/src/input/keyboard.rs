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

//! Keyboard modifier flags.

use crate::nomina_bitflags;

nomina_bitflags! {
    /// The set of modifier keys held during a key event.
    ///
    /// Binding files spell modifiers as `"Shift|Control"`.
    pub struct KeyModifiers: u16 {
        /// Either Shift key.
        const SHIFT = 1 << 0 => "Shift";
        /// Either Control key.
        const CONTROL = 1 << 1 => "Control";
        /// Either Alt (Option) key.
        const ALT = 1 << 2 => "Alt";
        /// Either Super (Windows, Command) key.
        const SUPER = 1 << 3 => "Super";
        /// Caps Lock is active.
        const CAPS_LOCK = 1 << 4 => "CapsLock";
        /// Num Lock is active.
        const NUM_LOCK = 1 << 5 => "NumLock";
    }
}

impl KeyModifiers {
    /// Returns the modifiers that change a binding, ignoring lock states.
    pub fn without_locks(self) -> Self {
        let mut modifiers = self;
        modifiers.remove(Self::CAPS_LOCK | Self::NUM_LOCK);
        modifiers
    }
}
