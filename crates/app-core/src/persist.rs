//! Persisted-state codec.
//!
//! The web frontend stores four JSON blobs in a string-keyed store. Each blob
//! carries a `timestamp` in milliseconds since the epoch; a blob older than
//! 24 hours is rejected wholesale so the caller can remove the key. The
//! codec takes `now_ms` as a parameter and therefore runs (and tests) on the
//! host.

use crate::constants::STATE_MAX_AGE_MS;
use fnv::FnvHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("malformed persisted state: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("persisted state expired ({age_ms} ms old)")]
    Expired { age_ms: f64 },
}

/// Blobs that carry a save timestamp and are subject to expiry.
pub trait Stamped {
    fn timestamp(&self) -> f64;
}

/// Per-section layout entry inside the interface blob, in registry order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Global layout, nav box position, and the ordered active section list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceState {
    pub scale: f32,
    pub header_height: f32,
    pub sidebar_width: f32,
    pub nav_x: f32,
    pub nav_y: f32,
    pub sections: Vec<SectionEntry>,
    pub timestamp: f64,
}

impl Stamped for InterfaceState {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// Per-section flags and position, keyed by section name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub minimized: bool,
    pub fullscreen: bool,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionState {
    pub entries: FnvHashMap<String, SectionFlags>,
    pub timestamp: f64,
}

impl Stamped for SectionState {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// Nav box screen position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    pub x: f32,
    pub y: f32,
    pub timestamp: f64,
}

impl Stamped for NavState {
    fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, StateError> {
    Ok(serde_json::to_string(value)?)
}

/// Decodes a blob and enforces expiry against `now_ms`. Expired blobs are an
/// error (not a value) so the caller knows to remove the key.
pub fn decode<T: DeserializeOwned + Stamped>(json: &str, now_ms: f64) -> Result<T, StateError> {
    let value: T = serde_json::from_str(json)?;
    let age_ms = now_ms - value.timestamp();
    if age_ms > STATE_MAX_AGE_MS {
        return Err(StateError::Expired { age_ms });
    }
    Ok(value)
}
