//! UI-Layer mit egui: Toolbar, Zeichenfläche, Input-Handling, Status, Optionen.

pub mod canvas;
pub mod input;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::{show_canvas, PainterSink};
pub use input::{InputState, PointerFrame};
pub use options_dialog::{show_options_dialog, OptionsDialogOutput};
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
