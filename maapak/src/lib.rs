//! Maapak - parallax length estimation from device tilt
//!
//! Aim the device at one end of an object, capture, aim at the other end,
//! capture again. Knowing the horizontal standoff distance, the two tilt
//! angles give the object's length.
//!
//! ## Modules
//!
//! - [`core`]: Pure tilt, capture, and length computations
//! - [`session`]: Explicitly owned session state and display snapshot
//! - [`events`]: Single-threaded event dispatch
//! - [`sensors`]: Orientation sample suppliers (simulated, replay)
//! - [`console`]: Line-oriented command front end
//! - [`config`]: TOML configuration

pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod events;
pub mod sensors;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
pub use session::{DistancePolicy, MeasurementSession};
pub use types::{LengthEstimate, OrientationSample, StandoffDistance, TiltAngle};
