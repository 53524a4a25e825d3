//! Static test page served at `/index`

/// HTML page with forms driving `/omikuji` and `/diagnose`
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
