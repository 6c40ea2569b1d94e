pub mod application_reader;
pub mod screening_writer;
