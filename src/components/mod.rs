pub mod animated_section;
pub mod icon;
pub mod menu;
