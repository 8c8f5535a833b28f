pub mod goal;
pub mod menu;
pub mod status;
