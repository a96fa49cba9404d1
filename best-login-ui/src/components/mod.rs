//! Presentational building blocks

mod api_alert;
mod checkbox_field;
mod confetti_canvas;
mod input_field;
mod theme_switcher;

pub use api_alert::ApiAlert;
pub use checkbox_field::CheckboxField;
pub use confetti_canvas::ConfettiCanvas;
pub use input_field::InputField;
pub use theme_switcher::ThemeSwitcher;
