mod config_tests;
mod schema_index_tests;
mod selection_set_to_object_tests;
mod utils;
