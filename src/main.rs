use chrono::{Local, NaiveDate};
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};
use triplog::application::{
    init::init, AddPlaceService, CheckDateService, ConfigService, CreateJournalService,
    JournalStatusService, ListJournalsService, ListPlacesService, NewPlace, TogglePlaceService,
};
use triplog::cli::{format_journal_list, format_place_list, format_status_report, Cli, Commands};
use triplog::domain::{resolve_date, PlaceDateValidation, PlaceStatus, TravelStatus, ISO_DATE_FORMAT};
use triplog::error::TriplogError;
use triplog::infrastructure::FileSystemRepository;

fn main() {
    let filter = EnvFilter::try_from_env("TRIPLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_status(value: &str) -> Result<PlaceStatus, TriplogError> {
    PlaceStatus::from_str(value).map_err(TriplogError::Config)
}

fn run(cli: Cli) -> Result<(), TriplogError> {
    // Captured once so every check in this invocation sees the same day
    let wall_clock = Local::now().date_naive();
    let today: NaiveDate = match cli.today.as_deref() {
        Some(input) => resolve_date(input, wall_clock)?,
        None => wall_clock,
    };

    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized triplog store at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("date_format = {}", config.date_format);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: triplog config [--list | <key> [<value>]]");
                println!("Valid keys: date_format");
            }
            Ok(())
        }
        Commands::New {
            title,
            start,
            end,
            public,
        } => {
            let start_date = resolve_date(&start, today)?;
            let end_date = match end.as_deref() {
                Some(end) => resolve_date(end, today)?,
                None => start_date,
            };

            let service = CreateJournalService::new(FileSystemRepository::discover()?);
            let journal = service.execute(&title, start_date, end_date, public)?;
            println!(
                "Created journal '{}' ({} to {}, {} days), {}",
                journal.id,
                journal.start_date.format(ISO_DATE_FORMAT),
                journal.end_date.format(ISO_DATE_FORMAT),
                journal.duration_days(),
                journal.status(today)
            );
            Ok(())
        }
        Commands::List { status } => {
            let filter = status
                .as_deref()
                .map(TravelStatus::from_str)
                .transpose()
                .map_err(TriplogError::Config)?;

            let service = ListJournalsService::new(FileSystemRepository::discover()?);
            let summaries = service.execute(today, filter)?;
            print!("{}", format_journal_list(&summaries));
            if summaries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Status { journal } => {
            let service = JournalStatusService::new(FileSystemRepository::discover()?);
            let report = service.execute(&journal, today)?;
            print!("{}", format_status_report(&report));
            Ok(())
        }
        Commands::Add {
            journal,
            name,
            status,
            date,
            until,
            rating,
            notes,
        } => {
            let input = NewPlace {
                name,
                status: status.as_deref().map(parse_status).transpose()?,
                start_date: date.as_deref().map(|d| resolve_date(d, today)).transpose()?,
                end_date: until.as_deref().map(|d| resolve_date(d, today)).transpose()?,
                rating,
                notes,
            };

            let service = AddPlaceService::new(FileSystemRepository::discover()?);
            let place = service.execute(&journal, input, today)?;
            println!(
                "Added {} place '{}' on {}",
                place.status,
                place.name,
                place.start_date.format(ISO_DATE_FORMAT)
            );
            Ok(())
        }
        Commands::Places { journal } => {
            let service = ListPlacesService::new(FileSystemRepository::discover()?);
            let journal = service.execute(&journal)?;
            print!("{}", format_place_list(&journal.places));
            if journal.places.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Toggle { journal, place } => {
            let service = TogglePlaceService::new(FileSystemRepository::discover()?);
            let outcome = service.execute(&journal, &place, today)?;
            println!("'{}' is now {}", outcome.place.name, outcome.place.status);
            if outcome.dates_changed {
                println!(
                    "Dates moved to {}",
                    outcome.place.start_date.format(ISO_DATE_FORMAT)
                );
            }
            Ok(())
        }
        Commands::Check {
            journal,
            date,
            status,
        } => {
            let candidate = resolve_date(&date, today)?;
            let status = parse_status(&status)?;

            let service = CheckDateService::new(FileSystemRepository::discover()?);
            match service.validate(&journal, candidate, status, today)? {
                PlaceDateValidation::Valid => {
                    println!(
                        "OK: {} is a valid {} date",
                        candidate.format(ISO_DATE_FORMAT),
                        status
                    );
                    Ok(())
                }
                PlaceDateValidation::Invalid(reason) => {
                    Err(TriplogError::InvalidPlaceDate(reason.to_string()))
                }
            }
        }
        Commands::Suggest { journal, status } => {
            let status = parse_status(&status)?;

            let service = CheckDateService::new(FileSystemRepository::discover()?);
            let suggested = service.suggest(&journal, status, today)?;
            println!(
                "start_date = {}\nend_date = {}",
                suggested.start_date.format(ISO_DATE_FORMAT),
                suggested.end_date.format(ISO_DATE_FORMAT)
            );
            Ok(())
        }
    }
}
