//! Form controls and badges used across the pages

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod field;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, RecordBadges, StatusBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
