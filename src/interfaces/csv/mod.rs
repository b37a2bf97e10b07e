pub mod bill_reader;
pub mod quote_writer;
