pub mod bitfield;
pub mod floatx;
pub mod numeric;

pub use crate::floatx::{double_to_floatx, FloatxFormat};
