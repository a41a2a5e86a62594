//! Wheel position allocation.
//!
//! Given the eight wheels a skater owns and a few profile fields, decide which
//! wheel goes in which position (1 = front, 4 = rear) on each foot.
//!
//! # Example
//!
//! ```ignore
//! use wheelmate::position::{allocate, WheelCount, WheelInventory};
//!
//! let inventory: WheelInventory =
//!     [WheelCount::new("85A", 4), WheelCount::new("87A", 4)].into_iter().collect();
//! let assignment = allocate(&inventory, &profile)?;
//! println!("{:?} / {:?}", assignment.right_foot, assignment.left_foot);
//! ```

mod allocator;
mod strategy;
mod types;

pub use allocator::{allocate, UNIFORM_STRATEGY};
pub use strategy::positioning_strategy;
pub use types::*;
