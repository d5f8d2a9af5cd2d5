//! Static configuration of a [`CurveModel`](crate::CurveModel).
//!
//! The struct is serializable so a host application can embed it in its own settings.
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of straight segments approximating a curve
pub const DEFAULT_SEGMENT_COUNT: usize = 200;
/// Default length of a displayed tangent vector
pub const DEFAULT_TANGENT_DISPLAY_LENGTH: f64 = 40.0;
/// Default length of a displayed curvature vector
pub const DEFAULT_CURVATURE_DISPLAY_LENGTH: f64 = 30.0;

/// Parameters controlling discretization and vector display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Number of discretization intervals the parameter range `[0, 1]` is split into.
    ///
    /// It doesn't depend on the number of control points.
    pub segment_count: usize,

    /// Length tangent vectors are scaled to.
    pub tangent_display_length: f64,

    /// Length curvature vectors are scaled to.
    pub curvature_display_length: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            tangent_display_length: DEFAULT_TANGENT_DISPLAY_LENGTH,
            curvature_display_length: DEFAULT_CURVATURE_DISPLAY_LENGTH,
        }
    }
}

impl CurveConfig {
    /// Checks every value is usable.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for a zero segment count
    /// or a display length which isn't positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.segment_count == 0 {
            return Err(Error::InvalidConfig(
                "segment_count must be at least 1".to_owned(),
            ));
        }
        for (name, length) in [
            ("tangent_display_length", self.tangent_display_length),
            ("curvature_display_length", self.curvature_display_length),
        ] {
            if !(length.is_finite() && length > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be positive and finite, got {length}"
                )));
            }
        }
        Ok(())
    }
}
