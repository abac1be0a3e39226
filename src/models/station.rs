use serde::Deserialize;

const STATIONS_JSON: &str = include_str!("../../stations.json");

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A battery swap station shown on the network map
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub name: String,
    pub coordinates: LatLng,
    pub info: String,
}

impl Station {
    /// Parse the station list bundled with the site
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed.
    pub fn load_bundled() -> Result<Vec<Station>, serde_json::Error> {
        serde_json::from_str(STATIONS_JSON)
    }

    /// Markup shown in this station's map popup
    #[must_use]
    pub fn popup_html(&self) -> String {
        format!(
            "<div style=\"text-align: center; font-family: 'Poppins', sans-serif;\">\
             <h3 style=\"color: #00d26a; margin: 0 0 5px; font-size: 16px;\">{}</h3>\
             <p style=\"margin: 0; color: #333; font-size: 13px;\">{}</p>\
             </div>",
            escape_html(&self.name),
            escape_html(&self.info)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
