pub mod esg;
