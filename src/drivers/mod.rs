//! Edge detectors for the gadget's inputs, generic over `embedded-hal` pins.
//!
//! | Driver         | Pin          | Feeds           |
//! |----------------|--------------|-----------------|
//! | `ButtonDriver` | active-low   | `ButtonHandler` |
//! | `MotionDriver` | active-high  | `MotionHandler` |

pub mod button;
pub mod motion;
