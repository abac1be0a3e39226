use crate::constants::MAP_CONTAINER_ID;
use crate::dom::document;
use crate::leaflet::LeafletBackend;
use crate::map::init_station_map;
use crate::models::Station;

/// Build the station map if the page has a map container and Leaflet is loaded.
///
/// Every failure is logged and leaves the container untouched.
pub fn mount_station_map() {
    let container = document().and_then(|d| d.get_element_by_id(MAP_CONTAINER_ID));
    let (Some(_), Some(backend)) = (container, LeafletBackend::detect()) else {
        leptos::logging::log!("Map container not found or Leaflet library missing");
        return;
    };

    let stations = Station::load_bundled().unwrap_or_else(|e| {
        leptos::logging::error!("Failed to parse station list: {}", e);
        Vec::new()
    });

    match init_station_map(&backend, MAP_CONTAINER_ID, &stations) {
        Ok(_) => leptos::logging::log!("Leaflet Map Loaded Successfully"),
        Err(e) => leptos::logging::error!("Failed to initialize Leaflet map: {:?}", e),
    }
}
