pub mod convert;
pub mod currencies;
pub mod setup;
pub mod ui;
pub mod watch;
