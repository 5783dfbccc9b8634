pub mod load_failed;
pub mod loading;
pub mod quiz;
pub mod results;
pub mod scope_menu;
