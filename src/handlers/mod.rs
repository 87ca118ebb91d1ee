//! HTTP handlers

pub mod health;
pub mod predict;
pub mod text;
pub mod training;

#[cfg(test)]
mod tests;
