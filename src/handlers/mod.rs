pub mod about;
pub mod fallback;
pub mod reverse;
pub mod root;
