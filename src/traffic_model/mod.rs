pub mod api;
pub mod mock_routes;
pub mod predictor;
pub mod routing;
