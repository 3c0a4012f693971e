/// Symbol shown for an OpenWeather icon code.
#[must_use]
pub fn weather_symbol(icon_code: &str) -> &'static str {
    match icon_code {
        "01d" => "sun.max.fill",
        "01n" => "sun.max",
        "02d" => "cloud.sun.fill",
        "02n" => "cloud.sun",
        "03d" => "cloud.fill",
        "03n" | "04d" | "04n" => "cloud",
        "09d" => "cloud.rain.fill",
        "10d" => "cloud.sun.rain.fill",
        "11d" => "cloud.bolt.rain.fill",
        "13d" => "snow",
        "50d" => "cloud.fog.fill",
        _ => "questionmark.circle",
    }
}
