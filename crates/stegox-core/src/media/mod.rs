pub mod image;

use std::path::Path;

pub use self::image::ImageCarrier;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
