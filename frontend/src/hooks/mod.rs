pub mod widget_view;

pub use widget_view::*;
