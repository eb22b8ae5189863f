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

//! # Nomina Core
//!
//! Bidirectional name registries for the engine's enumerated types.
//!
//! Every registered enum gets two immutable tables: canonical names indexed
//! by value (`WrapModeRepeat`), and a reverse index from accepted input
//! strings to values (`Repeat`). See [`NamedEnum`] for the lookup surface.
//!
//! # Tolerant parsing
//!
//! [`NamedEnum::from_name`] never fails: a mistyped or stale name in an
//! authored configuration file resolves to the enum's value-0 variant
//! (usually `None`) instead of aborting the load. Callers that must tell
//! "explicitly none" apart from "unrecognized" use
//! [`NamedEnum::try_from_name`] or a strict [`LookupConfig`].

#![warn(missing_docs)]

extern crate self as nomina_core;

pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod registry;
pub mod renderer;
pub mod serde_names;
pub mod utils;

pub use config::{LookupConfig, MissLogLevel, MissPolicy};
pub use error::NameError;
pub use nomina_macros::NamedEnum;
pub use registry::{EnumDescriptor, NamedEnum};

#[doc(hidden)]
pub use inventory;
