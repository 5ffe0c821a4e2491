pub mod entry_form;
pub mod spin_controls;
pub mod wheel_canvas;

pub use entry_form::EntryForm;
pub use spin_controls::{ResultDisplay, SpinButton, TriesLeft};
pub use wheel_canvas::WheelCanvas;
