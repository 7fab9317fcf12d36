pub mod calculator;
pub mod inputs;
