pub mod chart_renderer;
pub mod dashboard_service;
