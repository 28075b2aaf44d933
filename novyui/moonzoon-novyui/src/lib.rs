//! # MoonZoon NovyUI Component Library
//!
//! Form and date/time components for MoonZoon applications, plus the small
//! set of presentational pieces they are laid out with.
//!
//! Value handling (segment sanitizing, the age window, disabled dates,
//! quick actions) lives in `novyui-shared`, re-exported here as
//! [`shared`]; the components in this crate only render that state and
//! derive their styling from it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moonzoon_novyui::*;
//! use zoon::*;
//!
//! fn birth_date() -> impl Element {
//!     Column::new()
//!         .item(
//!             date_input()
//!                 .label("Date of birth")
//!                 .name("birth_date")
//!                 .required(true)
//!                 .min_age(18)
//!                 .max_age(65)
//!                 .on_change(|name, value| zoon::println!("{name} = {value}"))
//!                 .build()
//!         )
//!         .item(
//!             button("Submit")
//!                 .variant(ButtonVariant::Primary)
//!                 .build()
//!         )
//! }
//! ```

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;

pub use novyui_shared as shared;
