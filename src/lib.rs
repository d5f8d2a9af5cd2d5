#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod combinatorics;
pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod segment;

pub use crate::config::CurveConfig;
pub use crate::curve::CurveModel;
pub use crate::error::{Error, Result};
pub use crate::segment::{CurveSegment, Sample};
