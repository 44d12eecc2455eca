#![warn(clippy::all, clippy::pedantic)]

pub mod board_tests;
pub mod piece_tests;
pub mod scores_tests;
pub mod shapes_tests;

pub mod test_utils;
