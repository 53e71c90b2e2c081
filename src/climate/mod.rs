// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity adapter: configuration, state, and persistence.

mod config;
mod entity;
mod features;
mod restore;

pub use config::{ClimateConfig, Customize};
pub use entity::{ClimateEntity, ClimateState};
pub use features::SupportedFeatures;
pub use restore::SavedState;
