mod canvas_panel;
mod palette_panel;
mod properties_panel;

pub use canvas_panel::canvas_panel;
pub use palette_panel::palette_panel;
pub use properties_panel::properties_panel;
