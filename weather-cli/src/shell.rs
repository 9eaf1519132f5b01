//! Interactive front end: one text input, one trigger.

use inquire::{InquireError, Text};
use tracing::debug;
use weather_core::{WeatherLookupService, WeatherQuery};

use crate::render::{EMPTY_INPUT_WARNING, render_error, render_record};

/// State owned by the shell between lookups. The core service keeps none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Last text typed into the city prompt, shown again on the next one.
    pub city_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; warn and skip the lookup.
    Empty,
    Lookup(WeatherQuery),
}

impl AppState {
    pub fn new(initial_city: impl Into<String>) -> Self {
        Self { city_input: initial_city.into() }
    }

    /// Record `input` as the current prompt value and decide what to do with it.
    pub fn submit(&mut self, input: String) -> Submission {
        self.city_input = input;

        match WeatherQuery::new(&self.city_input) {
            Ok(query) => Submission::Lookup(query),
            Err(_) => Submission::Empty,
        }
    }
}

/// Run one submission through the service and render the outcome.
pub async fn handle(service: &WeatherLookupService, submission: Submission) -> Outcome {
    match submission {
        Submission::Empty => Outcome::Warning(EMPTY_INPUT_WARNING.to_string()),
        Submission::Lookup(query) => {
            println!("Checking the latest weather for '{query}'...");
            match service.fetch_weather(&query).await {
                Ok(record) => Outcome::Report(render_record(&record)),
                Err(err) => Outcome::Error(render_error(&err)),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Report(String),
    Warning(String),
    Error(String),
}

impl Outcome {
    pub fn print(&self) {
        match self {
            Outcome::Report(text) => println!("{text}"),
            Outcome::Warning(text) => eprintln!("⚠️  {text}"),
            Outcome::Error(text) => eprintln!("❌ {text}"),
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, Outcome::Report(_))
    }
}

/// Prompt until the user cancels with Esc or Ctrl-C.
pub async fn run(service: &WeatherLookupService, state: &mut AppState) -> anyhow::Result<()> {
    loop {
        let input = match Text::new("Enter a city name (e.g. London, Tokyo, 제주):")
            .with_initial_value(&state.city_input)
            .with_help_message("Enter to look up, Esc to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("prompt cancelled, leaving interactive mode");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let submission = state.submit(input);
        handle(service, submission).await.print();
    }
}
