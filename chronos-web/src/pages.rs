pub mod account;
pub mod admin;
pub mod dashboard;
pub mod login;
pub mod radar;
pub mod signals;
pub mod support;
