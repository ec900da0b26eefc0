pub mod alignment;
pub mod complete;
pub mod error;
pub mod header;
pub mod layout;
pub mod report;
pub mod species;
pub mod struct_helper;
pub mod validate;
