//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use vehicles_query::{QueryRequest, DEFAULT_PAGE_SIZE};

/// Default page size for `query`, matching the request shape callers send.
pub const DEFAULT_QUERY_PAGE_SIZE: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "vehicles", version, about = "Query an in-memory vehicle catalog")]
pub struct Cli {
    /// JSON file holding the vehicle catalog.
    #[arg(long, env = "VEHICLES_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Indent JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every vehicle.
    All,
    /// List one page of vehicles without filtering.
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Vehicles whose make matches exactly, ignoring case.
    Make { make: String },
    /// Vehicles whose model matches exactly, ignoring case.
    Model { model: String },
    /// Free-text search across every text field.
    Search { term: String },
    /// Filtered, paginated query.
    Query(QueryArgs),
    /// Edit distance between two strings.
    Distance { a: String, b: String },
}

#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    #[arg(long, default_value_t = 1)]
    pub page_number: usize,
    #[arg(long, default_value_t = DEFAULT_QUERY_PAGE_SIZE)]
    pub page_size: usize,
    #[arg(long)]
    pub min_price: Option<Decimal>,
    #[arg(long)]
    pub max_price: Option<Decimal>,
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub trim: Option<String>,
    #[arg(long)]
    pub colour: Option<String>,
    #[arg(long)]
    pub min_co2_level: Option<i32>,
    #[arg(long)]
    pub max_co2_level: Option<i32>,
    #[arg(long)]
    pub transmission: Option<String>,
    #[arg(long)]
    pub fuel_type: Option<String>,
    #[arg(long)]
    pub min_engine_size: Option<i32>,
    #[arg(long)]
    pub max_engine_size: Option<i32>,
    /// Earliest registration date, YYYY-MM-DD.
    #[arg(long)]
    pub min_date_first_registered: Option<NaiveDate>,
    /// Latest registration date, YYYY-MM-DD.
    #[arg(long)]
    pub max_date_first_registered: Option<NaiveDate>,
    #[arg(long)]
    pub min_mileage: Option<i32>,
    #[arg(long)]
    pub max_mileage: Option<i32>,
}

impl From<QueryArgs> for QueryRequest {
    fn from(args: QueryArgs) -> Self {
        QueryRequest {
            page_number: Some(args.page_number),
            page_size: Some(args.page_size),
            min_price: args.min_price,
            max_price: args.max_price,
            make: args.make,
            model: args.model,
            trim: args.trim,
            colour: args.colour,
            min_co2_level: args.min_co2_level,
            max_co2_level: args.max_co2_level,
            transmission: args.transmission,
            fuel_type: args.fuel_type,
            min_engine_size: args.min_engine_size,
            max_engine_size: args.max_engine_size,
            min_date_first_registered: args.min_date_first_registered,
            max_date_first_registered: args.max_date_first_registered,
            min_mileage: args.min_mileage,
            max_mileage: args.max_mileage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vehicles").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults() {
        let cli = parse(&["--data", "v.json", "list"]);
        match cli.command {
            Command::List { page, page_size } => {
                assert_eq!(page, 1);
                assert_eq!(page_size, DEFAULT_PAGE_SIZE);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.data, Some(PathBuf::from("v.json")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["search", "red", "--pretty", "--data", "v.json"]);
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Search { ref term } if term == "red"));
    }

    #[test]
    fn query_flags_become_request() {
        let cli = parse(&[
            "query",
            "--make",
            "Ford",
            "--min-price",
            "1500.50",
            "--max-date-first-registered",
            "2020-12-31",
            "--min-mileage",
            "100",
        ]);

        let Command::Query(args) = cli.command else {
            panic!("expected query command");
        };
        let request = QueryRequest::from(args);

        assert_eq!(request.page_number, Some(1));
        assert_eq!(request.page_size, Some(DEFAULT_QUERY_PAGE_SIZE));
        assert_eq!(request.make.as_deref(), Some("Ford"));
        assert_eq!(request.min_price, Some(Decimal::new(150_050, 2)));
        assert_eq!(
            request.max_date_first_registered,
            NaiveDate::from_ymd_opt(2020, 12, 31)
        );
        assert_eq!(request.min_mileage, Some(100));
        assert_eq!(request.max_mileage, None);
    }

    #[test]
    fn malformed_date_flag_is_rejected() {
        let result = Cli::try_parse_from(["vehicles", "query", "--min-date-first-registered", "31/12/2020"]);
        assert!(result.is_err());
    }

    #[test]
    fn distance_takes_two_words() {
        let cli = parse(&["distance", "kitten", "sitting"]);
        assert!(matches!(
            cli.command,
            Command::Distance { ref a, ref b } if a == "kitten" && b == "sitting"
        ));
    }
}
