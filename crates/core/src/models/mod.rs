pub mod catalog;
pub mod portfolio;
pub mod settings;
pub mod valuation;
