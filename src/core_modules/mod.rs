pub mod contrast;
pub mod gray_mapper;
pub mod grid;
pub mod luminance;
pub mod neighborhood;
pub mod pixel;
pub mod relative_luminance;
pub mod utils;
