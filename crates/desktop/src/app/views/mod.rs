//! View composition for the installer window.

mod form;
mod layout;
mod status;
mod styles;
mod toolbar;

pub(crate) use layout::compose as compose_root;
