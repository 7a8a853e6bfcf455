/// Chess domain types.
pub mod chess;
/// The rules of legal movement and check.
pub mod rules;
