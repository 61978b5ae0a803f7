pub mod di;
pub mod gate;
pub mod handler;
pub mod middleware;
pub mod state;
