mod signal;
mod transport;
mod websocket;

pub use signal::AttitudeSimulator;
pub use transport::LineSource;
pub use websocket::start_ws_server;
pub use websocket::WebsocketServer;
