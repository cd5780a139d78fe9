pub mod code_block;
pub mod header;
pub mod progress_bar;
pub mod quest_card;
pub mod quest_icon;
pub mod quest_step;
pub mod victory_banner;
