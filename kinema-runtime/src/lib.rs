// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `kinema` library animates manipulator kinematics.
//!
//! Scenarios compute scenes of drawing primitives up front. The animator
//! feeds those scenes into a frame sink at a configured pace. Arm
//! parameters come from a terminal prompt or a JSON program.

mod config;

pub use self::config::*;

mod error;

pub use self::error::{Error, Result};

pub mod animator;
pub mod program;
pub mod scenario;
pub mod scene;
pub mod sink;
pub mod source;
pub mod trace;

pub use kinema_core as core;

/// Kinema runtime module containing various constants.
pub mod consts {
    /// Kinema runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use kinema::consts::VERSION;
    ///
    /// println!("Kinema runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Kinema default configuration file.
    pub const DEFAULT_CONFIG_PATH: &str = "/etc/kinema/kinema.toml";

    /// Kinema configuration file looked up in the working directory.
    pub const LOCAL_CONFIG_FILE: &str = "kinema.toml";
}
