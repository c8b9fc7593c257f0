pub mod test_utils;

mod edge_case_tests;
