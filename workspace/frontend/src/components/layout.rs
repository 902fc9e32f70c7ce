pub mod layout;
mod navbar;

pub use layout::Layout;
