pub mod format;
pub mod header;

pub use format::Precision;
pub use header::{render_loop, write_loop};
