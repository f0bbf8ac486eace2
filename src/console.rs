use crate::coordinate_picker::{CoordinateInputError, CoordinatePicker, parse_coordinate};
use crate::domain::Coordinate;
use crate::location_selector::{LocationSelector, RowSelection};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list                 show all locations, the active one is marked with [x]
  select <row>         simulate the location in <row>, row 0 needs `custom`
  custom [<lat> <lon>] pick a custom location, without a coordinate the pick is cancelled
  entry <lat> <lon>    enter a custom location by hand
  reset                stop simulating a location
  status               show the simulated location
  help                 show this message
  quit                 exit";

#[derive(PartialEq, Debug)]
pub enum ConsoleCommand {
    List,
    Select(usize),
    Custom(Option<Coordinate>),
    Entry { latitude: String, longitude: String },
    Reset,
    Status,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ConsoleError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name.to_lowercase().as_str(), args.as_slice()) {
            ("list" | "ls", []) => ConsoleCommand::List,
            ("select", [row]) => ConsoleCommand::Select(row.parse().map_err(|_| ConsoleError::InvalidRow(row.to_string()))?),
            ("custom", []) => ConsoleCommand::Custom(None),
            ("custom", [latitude, longitude]) => ConsoleCommand::Custom(Some(parse_coordinate(latitude, longitude)?)),
            ("entry", [latitude, longitude]) => ConsoleCommand::Entry {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            },
            ("reset", []) => ConsoleCommand::Reset,
            ("status", []) => ConsoleCommand::Status,
            ("help" | "?", []) => ConsoleCommand::Help,
            ("quit" | "exit", []) => ConsoleCommand::Quit,
            ("list" | "ls" | "select" | "custom" | "entry" | "reset" | "status" | "help" | "?" | "quit" | "exit", _) => {
                return Err(ConsoleError::WrongArguments(name.to_string()));
            }
            _ => return Err(ConsoleError::UnknownCommand(name.to_string())),
        };

        Ok(command)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),
    #[error("wrong arguments for '{0}', type 'help' for usage")]
    WrongArguments(String),
    #[error("'{0}' is not a row number")]
    InvalidRow(String),
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateInputError),
}

/// Hands a coordinate that was chosen up front to the selector.
struct ProvidedCoordinate(Option<Coordinate>);

impl CoordinatePicker for ProvidedCoordinate {
    fn pick(&mut self, _current: Option<Coordinate>) -> Option<Coordinate> {
        self.0.take()
    }
}

/// Runs a command and returns what should be printed.
pub fn execute(selector: &LocationSelector, command: ConsoleCommand) -> String {
    match command {
        ConsoleCommand::List => render_rows(selector),
        ConsoleCommand::Select(row) => match selector.select_row(row, &mut ProvidedCoordinate(None)) {
            Ok(RowSelection::Preset { row, coordinate }) => format!("Simulating row {} at {}", row, coordinate),
            Ok(RowSelection::Custom(coordinate)) => format!("Simulating custom location {}", coordinate),
            Ok(RowSelection::Cancelled) => "Use 'custom <lat> <lon>' to pick a custom location".to_string(),
            Err(err) => err.to_string(),
        },
        ConsoleCommand::Custom(coordinate) => match selector.select_row(0, &mut ProvidedCoordinate(coordinate)) {
            Ok(RowSelection::Custom(coordinate)) => format!("Simulating custom location {}", coordinate),
            Ok(_) => "Cancelled".to_string(),
            Err(err) => err.to_string(),
        },
        ConsoleCommand::Entry { latitude, longitude } => match selector.submit_manual_entry(&latitude, &longitude) {
            Ok(coordinate) => format!("Simulating custom location {}", coordinate),
            Err(err) => format!("Invalid Input: {}", err),
        },
        ConsoleCommand::Reset => {
            // Clears whatever is persisted, including leftovers that never read as an override
            let was_simulating = selector.reset_enabled();
            selector.reset();
            if was_simulating {
                "Stopped simulating a location".to_string()
            } else {
                "No location is being simulated".to_string()
            }
        }
        ConsoleCommand::Status => match selector.manual_entry_prefill() {
            Some((latitude, longitude)) => format!("Simulating latitude {} longitude {}", latitude, longitude),
            None => "Using the real location".to_string(),
        },
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::Quit => String::new(),
    }
}

fn render_rows(selector: &LocationSelector) -> String {
    selector
        .rows()
        .iter()
        .enumerate()
        .map(|(row, model)| {
            let mark = if model.checked { "x" } else { " " };
            match &model.subtitle {
                Some(subtitle) => format!("[{}] {:>2}  {} ({})", mark, row, model.title, subtitle),
                None => format!("[{}] {:>2}  {}", mark, row, model.title),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{Defaults, MemoryDefaults};
    use crate::location_override_store::{LATITUDE_KEY, LONGITUDE_KEY, LocationOverrideStore};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Arc;

    fn new_selector() -> (LocationSelector, Arc<LocationOverrideStore>) {
        let store = Arc::new(LocationOverrideStore::new(Arc::new(MemoryDefaults::new())));
        (LocationSelector::new(store.clone()), store)
    }

    fn run(selector: &LocationSelector, line: &str) -> String {
        execute(selector, line.parse().unwrap())
    }

    #[rstest]
    #[case("list", ConsoleCommand::List)]
    #[case("  LS  ", ConsoleCommand::List)]
    #[case("select 5", ConsoleCommand::Select(5))]
    #[case("custom", ConsoleCommand::Custom(None))]
    #[case("custom 12.5 -4", ConsoleCommand::Custom(Some(Coordinate::new(12.5, -4.0).unwrap())))]
    #[case("entry 1 x", ConsoleCommand::Entry { latitude: "1".to_string(), longitude: "x".to_string() })]
    #[case("reset", ConsoleCommand::Reset)]
    #[case("status", ConsoleCommand::Status)]
    #[case("?", ConsoleCommand::Help)]
    #[case("exit", ConsoleCommand::Quit)]
    fn parses_commands(#[case] line: &str, #[case] expected: ConsoleCommand) {
        assert_eq!(line.parse::<ConsoleCommand>(), Ok(expected));
    }

    #[rstest]
    #[case::blank("   ", ConsoleError::Empty)]
    #[case::unknown("teleport", ConsoleError::UnknownCommand("teleport".to_string()))]
    #[case::missing_row("select", ConsoleError::WrongArguments("select".to_string()))]
    #[case::extra_args("reset now", ConsoleError::WrongArguments("reset".to_string()))]
    #[case::negative_row("select -1", ConsoleError::InvalidRow("-1".to_string()))]
    #[case::bad_custom("custom a b", ConsoleError::InvalidCoordinate(CoordinateInputError::InvalidInput))]
    fn rejects_invalid_commands(#[case] line: &str, #[case] expected: ConsoleError) {
        assert_eq!(line.parse::<ConsoleCommand>(), Err(expected));
    }

    #[test]
    fn selecting_a_preset() {
        let (selector, store) = new_selector();

        assert_eq!(run(&selector, "select 5"), "Simulating row 5 at 35.702069, 139.775327");
        assert_eq!(store.matched_preset_index(), Some(5));
        assert_eq!(run(&selector, "status"), "Simulating latitude 35.702069 longitude 139.775327");
    }

    #[test]
    fn selecting_the_custom_row_without_a_coordinate() {
        let (selector, store) = new_selector();

        assert_eq!(run(&selector, "select 0"), "Use 'custom <lat> <lon>' to pick a custom location");
        assert_eq!(store.get_override(), None);
    }

    #[test]
    fn selecting_a_row_past_the_catalog() {
        let (selector, _) = new_selector();

        assert_eq!(run(&selector, "select 40"), "row 40 does not exist, expected a row below 18");
    }

    #[test]
    fn picking_a_custom_location() {
        let (selector, store) = new_selector();

        assert_eq!(run(&selector, "custom 12.3456 65.4321"), "Simulating custom location 12.3456, 65.4321");
        assert_eq!(store.matched_preset_index(), None);
        assert!(run(&selector, "list").starts_with("[x]  0  Custom... (12.3456, 65.4321)\n[ ]  1  London, England"));
    }

    #[test]
    fn cancelling_a_custom_pick() {
        let (selector, store) = new_selector();

        assert_eq!(run(&selector, "custom"), "Cancelled");
        assert_eq!(store.get_override(), None);
    }

    #[test]
    fn invalid_manual_entry_is_reported() {
        let (selector, store) = new_selector();

        assert_eq!(run(&selector, "entry north 10"), "Invalid Input: Please enter valid latitude and longitude.");
        assert_eq!(store.get_override(), None);
    }

    #[test]
    fn resetting() {
        let (selector, store) = new_selector();
        assert_eq!(run(&selector, "reset"), "No location is being simulated");

        run(&selector, "entry 19.017615 72.856164");
        assert_eq!(store.matched_preset_index(), Some(4));

        assert_eq!(run(&selector, "reset"), "Stopped simulating a location");
        assert_eq!(run(&selector, "status"), "Using the real location");
    }

    #[rstest]
    #[case::lone_latitude(51.5, 0.0)]
    #[case::out_of_range_pair(120.0, 10.0)]
    fn resetting_clears_leftover_persisted_values(#[case] latitude: f64, #[case] longitude: f64) {
        let defaults = Arc::new(MemoryDefaults::new());
        defaults.set_double(LATITUDE_KEY, latitude);
        defaults.set_double(LONGITUDE_KEY, longitude);
        let selector = LocationSelector::new(Arc::new(LocationOverrideStore::new(defaults.clone())));

        assert_eq!(run(&selector, "reset"), "No location is being simulated");

        assert_eq!(defaults.double(LATITUDE_KEY), 0.0);
        assert_eq!(defaults.double(LONGITUDE_KEY), 0.0);
    }

    #[test]
    fn listing_marks_the_active_preset() {
        let (selector, _) = new_selector();
        run(&selector, "select 17");

        let list = run(&selector, "list");
        let lines: Vec<&str> = list.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "[ ]  0  Custom...");
        assert_eq!(lines[17], "[x] 17  Coimbatore, India");
    }
}
