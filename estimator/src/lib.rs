//! This module contains the [`estimate::estimate`] function which turns
//! model geometry and customer options into a cost/time/weight breakdown.

pub mod breakdown;
pub mod estimate;
pub mod format;
pub mod order;
