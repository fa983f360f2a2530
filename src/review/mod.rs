//! Review Submission
//!
//! Client-side gate (throttle, login, low-rating confirmation) and the
//! validate → moderate → create pipeline.

mod gate;
mod submit;
mod throttle;

pub use gate::*;
pub use submit::*;
pub use throttle::*;
