//! Pure text layout: wrapping, the timestamp gutter, banners, argument dumps and
//! elapsed-time labels. Nothing here touches I/O or logger state, so every piece
//! can be tested with plain strings.

mod align;
mod args;
mod banner;
mod elapsed;
mod gutter;
mod wrap;

pub use align::Alignment;
pub use args::{Args, NIL, render_args};
pub use banner::render_banner;
pub use elapsed::elapsed;
pub use gutter::{
    INDENT_UNIT, TIMESTAMP_FORMAT, category, gutter, indent_dots, no_timestamp_prefix,
    render_block, timestamp,
};
pub use wrap::{DEFAULT_WIDTH, wrap};
