pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod lookup;
pub mod notification;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
