use crate::constants::{MAP_CENTER, MAP_ZOOM, TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_SUBDOMAINS, TILE_URL};
use crate::models::{LatLng, Station};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
    pub subdomains: &'a str,
    pub max_zoom: u8,
}

pub const DARK_TILES: TileLayerOptions<'static> = TileLayerOptions {
    attribution: TILE_ATTRIBUTION,
    subdomains: TILE_SUBDOMAINS,
    max_zoom: TILE_MAX_ZOOM,
};

/// The slice of a slippy-map library the station map needs
pub trait MapBackend {
    type Map;
    type Marker;
    type Error: std::fmt::Debug;

    /// Create a map in the element with `container_id`, centered on `center`
    ///
    /// # Errors
    ///
    /// Returns an error if the library rejects the container or view.
    fn create_map(&self, container_id: &str, center: LatLng, zoom: u8) -> Result<Self::Map, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the layer cannot be created or attached.
    fn add_tile_layer(
        &self,
        map: &Self::Map,
        url_template: &str,
        options: &TileLayerOptions<'_>,
    ) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the marker cannot be created or attached.
    fn add_marker(&self, map: &Self::Map, at: LatLng) -> Result<Self::Marker, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the popup cannot be bound.
    fn bind_popup(&self, marker: &Self::Marker, html: &str) -> Result<(), Self::Error>;
}

/// Build the station map: dark tiles plus one popup marker per station
///
/// # Errors
///
/// Returns the first error reported by the backend.
pub fn init_station_map<B: MapBackend>(
    backend: &B,
    container_id: &str,
    stations: &[Station],
) -> Result<B::Map, B::Error> {
    let center = LatLng {
        lat: MAP_CENTER.0,
        lng: MAP_CENTER.1,
    };
    let map = backend.create_map(container_id, center, MAP_ZOOM)?;
    backend.add_tile_layer(&map, TILE_URL, &DARK_TILES)?;

    for station in stations {
        let marker = backend.add_marker(&map, station.coordinates)?;
        backend.bind_popup(&marker, &station.popup_html())?;
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateMap(String, LatLng, u8),
        TileLayer {
            url: String,
            attribution: String,
            subdomains: String,
            max_zoom: u8,
        },
        Marker(LatLng),
        Popup(usize, String),
    }

    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<Call>>,
        markers: RefCell<usize>,
        fail_markers: bool,
    }

    impl MapBackend for RecordingBackend {
        type Map = ();
        type Marker = usize;
        type Error = String;

        fn create_map(&self, container_id: &str, center: LatLng, zoom: u8) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(Call::CreateMap(container_id.to_string(), center, zoom));
            Ok(())
        }

        fn add_tile_layer(&self, _map: &(), url_template: &str, options: &TileLayerOptions<'_>) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(Call::TileLayer {
                    url: url_template.to_string(),
                    attribution: options.attribution.to_string(),
                    subdomains: options.subdomains.to_string(),
                    max_zoom: options.max_zoom,
                });
            Ok(())
        }

        fn add_marker(&self, _map: &(), at: LatLng) -> Result<usize, String> {
            if self.fail_markers {
                return Err("marker rejected".to_string());
            }
            self.calls.borrow_mut().push(Call::Marker(at));
            let mut count = self.markers.borrow_mut();
            *count += 1;
            Ok(*count - 1)
        }

        fn bind_popup(&self, marker: &usize, html: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Popup(*marker, html.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_map_view_and_tiles() {
        let backend = RecordingBackend::default();
        init_station_map(&backend, "map-container", &[]).expect("map init");

        let calls = backend.calls.borrow();
        assert_eq!(
            calls[0],
            Call::CreateMap("map-container".to_string(), LatLng { lat: 20.5937, lng: 78.9629 }, 5)
        );
        assert_eq!(
            calls[1],
            Call::TileLayer {
                url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string(),
                attribution: "&copy; OpenStreetMap contributors &copy; CARTO".to_string(),
                subdomains: "abcd".to_string(),
                max_zoom: 19,
            }
        );
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_one_popup_marker_per_station() {
        let stations = Station::load_bundled().expect("bundled stations parse");
        let backend = RecordingBackend::default();
        init_station_map(&backend, "map-container", &stations).expect("map init");

        assert_eq!(*backend.markers.borrow(), 5);

        let calls = backend.calls.borrow();
        let popups: Vec<(usize, &String)> = calls
            .iter()
            .filter_map(|c| match c {
                Call::Popup(marker, html) => Some((*marker, html)),
                _ => None,
            })
            .collect();
        assert_eq!(popups.len(), 5);

        for (station, (marker, html)) in stations.iter().zip(popups) {
            assert!(html.contains(&station.name));
            assert!(html.contains(&station.info.replace('&', "&amp;")));
            assert!(marker < 5);
        }
        assert!(calls.contains(&Call::Marker(LatLng { lat: 18.5204, lng: 73.8567 })));
    }

    #[test]
    fn test_backend_error_stops_setup() {
        let stations = Station::load_bundled().expect("bundled stations parse");
        let backend = RecordingBackend {
            fail_markers: true,
            ..RecordingBackend::default()
        };
        let result = init_station_map(&backend, "map-container", &stations);
        assert_eq!(result, Err("marker rejected".to_string()));
        assert_eq!(*backend.markers.borrow(), 0);
    }
}
