pub mod counter_display;
pub mod magnetic_button;
pub mod navigation;
pub mod reveal;
pub mod scroll_effects;
pub mod station_map;
