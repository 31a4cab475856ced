//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the explorer is up.
//!
//! # Tasks
//! - Cache reaper: sweeps expired response cache entries once per TTL

mod reaper;

pub(crate) use reaper::{spawn_reaper, ReaperHandle};
