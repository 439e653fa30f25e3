pub mod dashboard;
pub mod ivr;
pub mod lead;
