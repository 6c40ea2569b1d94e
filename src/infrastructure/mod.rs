pub mod codes;
pub mod in_memory;
pub mod json_file;
