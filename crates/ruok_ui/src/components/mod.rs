pub mod button;
pub mod card;
pub mod input;
pub mod link;
pub mod pagination;
pub mod sidebar;
pub mod status;
pub mod table;
