/// User interface module
///
/// - render.rs: pure store -> view model rendering
/// - widgets.rs: view model -> iced elements

pub mod render;
pub mod widgets;
