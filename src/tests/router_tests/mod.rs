mod analytics_tests;
mod data_tests;
mod export_route_tests;
mod sentiment_tests;
