pub mod difficulty;
pub mod finale;
pub mod not_found;
pub mod prologue;
pub mod quests;
pub mod welcome;
