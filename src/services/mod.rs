pub mod aggregator;
pub mod providers;
pub mod seed;
pub mod session_gate;

pub use aggregator::CatalogAggregator;
pub use session_gate::SessionGate;
