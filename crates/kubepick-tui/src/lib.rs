pub mod picker;
pub mod theme;
pub mod widgets;

pub use picker::PickerState;
pub use theme::Theme;
pub use widgets::ContextSelectorWidget;
