pub mod demand;
pub mod streams;
pub mod traits;
