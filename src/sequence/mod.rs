//! Sets of 2D samples covering `[0,1)²`, ready to be warped by the sampling kernels.

mod stratified;

pub use self::stratified::Stratified;
