pub mod model;
pub mod render;

pub use model::{load_raw_bin, Image, Segment};
pub use render::{operand_text, text_line, Record};
