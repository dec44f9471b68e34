pub mod form;
pub mod pointer;
pub mod scroll;

pub use form::wire_form_submit;
pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use scroll::{wire_nav_links, wire_resize, wire_sound_toggle};
