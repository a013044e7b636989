mod mapping_tests;
mod utils;
