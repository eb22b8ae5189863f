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

//! Named input enums exposed to binding files and the editor.
//!
//! These types describe input values only; polling devices is the platform
//! layer's job.

pub mod joystick;
pub mod keyboard;
pub mod touch;

pub use self::joystick::JoystickButton;
pub use self::keyboard::KeyModifiers;
pub use self::touch::TouchAction;
