mod api_tests;
mod directory_tests;
mod static_tests;
