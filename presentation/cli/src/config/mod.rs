pub mod app_config;
pub mod diagnostic_config;
pub mod openai_config;
