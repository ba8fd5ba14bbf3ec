pub mod charts;
pub mod elements;
pub mod palette;
pub mod popup;
pub mod text;
