//! Types shared between the settings console frontend and the settings API.
//!
//! Everything here is target-independent so it can be unit-tested on the host.

pub mod system;
