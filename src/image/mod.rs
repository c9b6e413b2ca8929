pub mod io;
pub mod mask;
pub mod traits;

pub use self::mask::BinaryMask;
pub use self::traits::{ImageView, ImageViewMut, Rows};
