pub mod color;
pub mod debounce;
pub mod palette;

pub use self::color::Rgb;
pub use debounce::DebounceScheduler;
pub use palette::{Palette, PaletteBlend};
