pub mod apply;
pub mod calendar;
pub mod cli;
pub mod commit;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod model;
pub mod output;
pub mod plan;
pub mod preview;
