pub mod app;
pub mod error;
pub mod gql;
pub mod schedule;
pub mod state;

pub use state::AppState;
