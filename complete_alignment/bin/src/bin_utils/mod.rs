pub mod complete_orthogroups;
pub mod get_args;
