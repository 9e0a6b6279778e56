pub mod history;
pub mod initialize;
pub mod migrate;
pub mod queries;
pub mod store;

pub use store::EventStore;
