use crate::map::{MapBackend, TileLayerOptions};
use crate::models::LatLng;
use wasm_bindgen::{JsCast, JsValue};

/// `MapBackend` over the page's global Leaflet object (`window.L`)
pub struct LeafletBackend {
    l: JsValue,
}

impl LeafletBackend {
    /// Returns `None` when the Leaflet script has not been loaded on the page
    #[must_use]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let l = js_sys::Reflect::get(&window, &JsValue::from_str("L")).ok()?;
        if l.is_undefined() || l.is_null() {
            return None;
        }
        Some(Self { l })
    }
}

fn method(target: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| JsValue::from_str(&format!("{name} is not a function")))
}

fn lat_lng_array(at: LatLng) -> js_sys::Array {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_f64(at.lat));
    array.push(&JsValue::from_f64(at.lng));
    array
}

fn add_to(layer: &JsValue, map: &JsValue) -> Result<(), JsValue> {
    method(layer, "addTo")?.call1(layer, map)?;
    Ok(())
}

impl MapBackend for LeafletBackend {
    type Map = JsValue;
    type Marker = JsValue;
    type Error = JsValue;

    fn create_map(&self, container_id: &str, center: LatLng, zoom: u8) -> Result<JsValue, JsValue> {
        // L.map(id).setView([lat, lng], zoom)
        let map = method(&self.l, "map")?.call1(&self.l, &JsValue::from_str(container_id))?;
        method(&map, "setView")?.call2(&map, &lat_lng_array(center), &JsValue::from_f64(f64::from(zoom)))?;
        Ok(map)
    }

    fn add_tile_layer(
        &self,
        map: &JsValue,
        url_template: &str,
        options: &TileLayerOptions<'_>,
    ) -> Result<(), JsValue> {
        let js_options = js_sys::Object::new();
        js_sys::Reflect::set(&js_options, &JsValue::from_str("attribution"), &JsValue::from_str(options.attribution))?;
        js_sys::Reflect::set(&js_options, &JsValue::from_str("subdomains"), &JsValue::from_str(options.subdomains))?;
        js_sys::Reflect::set(&js_options, &JsValue::from_str("maxZoom"), &JsValue::from_f64(f64::from(options.max_zoom)))?;

        let layer = method(&self.l, "tileLayer")?.call2(&self.l, &JsValue::from_str(url_template), &js_options)?;
        add_to(&layer, map)
    }

    fn add_marker(&self, map: &JsValue, at: LatLng) -> Result<JsValue, JsValue> {
        let marker = method(&self.l, "marker")?.call1(&self.l, &lat_lng_array(at))?;
        add_to(&marker, map)?;
        Ok(marker)
    }

    fn bind_popup(&self, marker: &JsValue, html: &str) -> Result<(), JsValue> {
        method(marker, "bindPopup")?.call1(marker, &JsValue::from_str(html))?;
        Ok(())
    }
}
