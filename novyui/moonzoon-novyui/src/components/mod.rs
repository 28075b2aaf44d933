// NovyUI components

pub mod badge;
pub mod button;
pub mod card;
pub mod date_input;
pub mod date_input_picker;
pub mod date_time_picker;
pub mod dropdown;
pub mod file_input;
pub mod modal;
pub mod segment_input;
pub mod time_picker;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use date_input::*;
pub use date_input_picker::*;
pub use date_time_picker::*;
pub use dropdown::*;
pub use file_input::*;
pub use modal::*;
pub use time_picker::*;
pub use toast::*;
