//! Charts module - Chart rendering

mod plotter;
mod renderer;
mod wordcloud;

pub use plotter::{abstract_preview, ChartPlotter, PALETTE};
pub use renderer::{RenderError, StaticChartRenderer, CHART_SIZE};
pub use wordcloud::{draw_word_cloud, flow_layout, font_size};
