mod api_tests;
mod form_tests;
mod page_tests;
mod search_tests;
mod static_tests;
