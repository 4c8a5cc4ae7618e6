pub mod app;
pub mod credits;
pub mod end_screen;
pub mod main_menu;
pub mod scene;
pub mod stats_panel;
pub mod strings;
