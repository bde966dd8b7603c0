pub mod flatten;
pub mod name_parser;
pub mod serializer;
