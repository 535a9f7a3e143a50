pub mod greeks;
pub mod payoffs;
