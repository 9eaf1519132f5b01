use weather_core::{LookupError, WeatherRecord};

pub const EMPTY_INPUT_WARNING: &str = "Please enter a city name.";

pub fn render_record(record: &WeatherRecord) -> String {
    format!(
        "📍 Current weather in {}\n\
         🌡️  Temperature: {:.1} °C\n\
         💧 Humidity:    {} %\n\
         ☀️  Conditions:  {}",
        record.resolved_location_name,
        record.temperature_celsius,
        record.humidity_percent,
        record.condition_description,
    )
}

pub fn render_error(err: &LookupError) -> String {
    match err {
        LookupError::Network(_) => {
            "A network error occurred. Please check your internet connection.".to_string()
        }
        LookupError::LocationNotFound(query) => format!(
            "Could not find '{query}' or fetch its weather. Try again with the English name of the city."
        ),
    }
}
