pub mod action;
pub mod game;
pub mod observation;
pub mod street;
pub mod strength;
pub mod turn;
