pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{Action, Effect, Phase, ViewState};
