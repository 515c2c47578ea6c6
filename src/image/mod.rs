//! Pixel buffers and the helpers around them.
//!
//! - `buffer`: owned 8-bit buffer with a symmetric border.
//! - `padding`: pad/unpad, saturating merge and the padded workspace used by
//!   every filter stage.
//! - `convert`: grayscale and channel reduction of loaded images.
//! - `io`: image and JSON file helpers for the binary.
//! - `traits`: row-oriented read/write views.

pub mod buffer;
pub mod convert;
pub mod io;
pub mod padding;
pub mod traits;

pub use self::buffer::Buffer;
pub use self::convert::{grayscale, prepare_gray, to_single_channel};
pub use self::io::{load_image, write_json_file, write_png};
pub use self::padding::{
    merge_add, pad, pad_with, unpad, unpad_into, BorderMode, PaddedWorkspace,
};
pub use self::traits::{ImageView, ImageViewMut, Rows};
