pub mod alcohol;
pub mod cocktail;
pub mod submission;
pub mod verdict;
