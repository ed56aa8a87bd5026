mod bank;

pub use bank::questions;
