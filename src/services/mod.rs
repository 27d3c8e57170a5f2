pub mod amount;
pub mod catalog;
pub mod glassware;
pub mod validation;
