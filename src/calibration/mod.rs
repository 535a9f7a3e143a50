pub mod ou_estimator;
pub mod regression;
