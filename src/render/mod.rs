pub mod cull;

pub use cull::query_visible_rect;
