//! Utility modules shared by the node model and the builder.

pub mod case;
pub mod date;
pub mod html;
pub mod number;
