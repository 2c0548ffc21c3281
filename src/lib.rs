pub mod app;
pub mod capture;
pub mod counter;
pub mod error;
pub mod font_metrics;
pub mod gateway;
pub mod hardware;
pub mod key_mapping;
pub mod labels;
pub mod replay;
pub mod reset_timer;
pub mod router;
pub mod settings;
pub mod surface;
pub mod text_fit;
