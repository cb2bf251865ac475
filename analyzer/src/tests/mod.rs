mod common;
mod test_check;
mod test_parser;
mod test_registry;
mod test_types;
