pub mod components;
pub mod constants;
pub mod counter;
pub mod dom;
pub mod geometry;
pub mod leaflet;
pub mod logging;
pub mod map;
pub mod models;

use components::{magnetic_button, navigation, reveal, scroll_effects, station_map};

/// Attach every page effect once the document is ready
pub fn start() {
    logging::print_banner();
    dom::on_dom_ready(wire_page);
}

fn wire_page() {
    scroll_effects::wire_scroll_effects();

    match reveal::observe_reveal_targets() {
        Ok(count) => {
            logging::log!("Observing {} reveal targets", count);
        }
        Err(e) => leptos::logging::error!("Failed to create reveal observer: {:?}", e),
    }

    match magnetic_button::wire_magnetic_buttons() {
        Ok(count) => {
            logging::log!("Wired {} magnetic buttons", count);
        }
        Err(e) => leptos::logging::error!("Failed to wire magnetic buttons: {:?}", e),
    }

    match navigation::wire_anchor_links() {
        Ok(count) => {
            logging::log!("Wired {} anchor links", count);
        }
        Err(e) => leptos::logging::error!("Failed to wire anchor links: {:?}", e),
    }

    match navigation::wire_mobile_menu() {
        Ok(true) => {
            logging::log!("Mobile menu toggle wired");
        }
        Ok(false) => {}
        Err(e) => leptos::logging::error!("Failed to wire mobile menu: {:?}", e),
    }

    station_map::mount_station_map();
}
