pub mod cash_release;
pub mod covenants;
pub mod forecast;
pub mod scenarios;
pub mod sensitivity;
