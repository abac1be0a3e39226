/// Vertical scroll offset (px) past which the navbar switches to its scrolled style
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Fraction of an element that must be inside the viewport before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Root margin for the reveal observer; the bottom edge is pulled up by 80px
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

/// Wall-clock duration of a statistic counter animation in milliseconds
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Nominal animation frame interval (~60fps) used to size counter increments
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Share of the pointer's offset from center that a magnetic button follows
pub const MAGNETIC_PULL: f64 = 0.15;

/// Scale applied to a magnetic button while hovered
pub const MAGNETIC_SCALE: f64 = 1.02;

/// Damping applied on top of each element's `data-parallax` speed
pub const PARALLAX_DAMPING: f64 = 0.1;

// DOM contract
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const STAT_ITEM_CLASS: &str = "stat-item";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const COUNTED_CLASS: &str = "counted";
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const MAGNETIC_SELECTOR: &str = ".btn, .btn-app";
pub const PARALLAX_SELECTOR: &str = ".benefit-image[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const MENU_SELECTOR: &str = ".navbar nav";
pub const ACTIVE_CLASS: &str = "active";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const MAP_CONTAINER_ID: &str = "map-container";

/// Initial map center (latitude, longitude), roughly the middle of India
pub const MAP_CENTER: (f64, f64) = (20.5937, 78.9629);
pub const MAP_ZOOM: u8 = 5;

/// CARTO "Dark Matter" basemap
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors &copy; CARTO";
pub const TILE_SUBDOMAINS: &str = "abcd";
pub const TILE_MAX_ZOOM: u8 = 19;
