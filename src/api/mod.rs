pub mod body;
pub mod entry;
