//! Background image adapters.

pub mod fs_picker;

pub use fs_picker::FsImagePicker;
