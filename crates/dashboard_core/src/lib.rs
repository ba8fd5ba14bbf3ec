//! Core of the NYC offense exposure dashboard: the fixed dataset, the tab
//! registry, the view controller and the panel model both front ends draw.

pub mod controller;
pub mod dataset;
pub mod heatmap;
pub mod panels;
pub mod section;
pub mod tooltip;
pub mod view;

pub use controller::Dashboard;
pub use dataset::{Borough, Dataset, OffenseCategory, Rgb};
pub use heatmap::{Intensity, TextContrast};
pub use section::Section;
pub use tooltip::{format_tooltip, ChartDatum};
pub use view::{Element, Panel, RichText, Tone};
