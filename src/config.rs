pub const CLINIC_NAME: &str = "Cyra Beauty Clinic";
pub const CLINIC_ADDRESS: &str = "3056 Glen Dr Unit 204, Coquitlam, BC V3B 0V1, Canada";
pub const CLINIC_PHONE: &str = "+1 778-504-5400";
pub const CLINIC_EMAIL: &str = "info@cyrabeauty.ca";
pub const CLINIC_LAT: f64 = 49.282670069485164;
pub const CLINIC_LON: f64 = -122.79079514232714;

pub fn get_booking_url() -> &'static str {
    "https://booking.cyrabeauty.ca"
}

pub fn get_reviews_url() -> &'static str {
    "https://www.google.com/search?sca_esv=a8ceca4dfe58fbed&q=Cyra%20Beauty%2C%20Health%20and%20Laser%20Clinic&stick=H4sIAAAAAAAAAONgU1I1qDA1sTAzTzNPMzJONLY0NTW3MqgwNrI0MgTCZKOkZHNLA9NFrCrOlUWJCk6piaUllToKHqmJOSUZCol5KQo-icWpRQrOOZl5mckAGXWd8VAAAAA&mat=CWlethn1mwJk&ved=2ahUKEwjp4PSTpLyMAxWC4gIHHSQTNykQrMcEegQIHhAF"
}

/// Google Maps search link for the clinic address.
pub fn directions_url() -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(CLINIC_ADDRESS)
    )
}

/// OpenStreetMap embed centered on the clinic, with a marker.
pub fn map_embed_url() -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.6}%2C{:.6}%2C{:.6}%2C{:.6}&layer=mapnik&marker={:.6}%2C{:.6}",
        CLINIC_LON - 0.008,
        CLINIC_LAT - 0.004,
        CLINIC_LON + 0.008,
        CLINIC_LAT + 0.004,
        CLINIC_LAT,
        CLINIC_LON
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_url_encodes_the_address() {
        let url = directions_url();
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.contains("3056%20Glen%20Dr"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn map_embed_url_carries_the_marker() {
        let url = map_embed_url();
        assert!(url.contains("openstreetmap.org/export/embed.html"));
        assert!(url.contains("marker=49.282670%2C-122.790795"));
    }
}
