mod resource_tests;
mod router_tests;
pub mod utils;
