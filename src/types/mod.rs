// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for climate entity control.
//!
//! This module provides closed, type-safe representations of the values a
//! climate entity works with. Parsing is validated at the boundary, so a
//! constructed value is always a member of the device vocabulary.
//!
//! # Types
//!
//! - [`OperationMode`] - Off/Heat/Cool/Auto/Idle functional states
//! - [`FanMode`] - Auto/Low/Mid/High fan speeds
//! - [`Temperature`] / [`TemperatureUnit`] - readings with C/F conversion
//! - [`TemperatureRange`] - configured min/max target bounds

mod fan;
mod operation;
mod temperature;

pub use fan::FanMode;
pub use operation::OperationMode;
pub use temperature::{Temperature, TemperatureRange, TemperatureUnit};
