pub mod candidates;
pub mod reporting;
