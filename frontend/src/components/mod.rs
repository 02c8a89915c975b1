pub mod field_builder;
