// Application layer - Use case interactors

pub mod container;
pub mod remove_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use remove_interactor::{ProcessOutcome, RemoveInteractor};
