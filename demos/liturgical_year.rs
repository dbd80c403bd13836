use lectio::civil::ymd;
use lectio::{
    CoverageReport, DateSpan, LiturgicalPosition, MemoryStore, MoveableFeasts, PeriodCategory,
    Resolver,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "lectio=warn".into()))
        .with_target(false)
        .init();

    let year: i32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 2025,
    };

    let mut store = MemoryStore::new();
    store.insert(LiturgicalPosition::new("Christmas", "December 25", PeriodCategory::Fixed));
    store.insert(LiturgicalPosition::new(
        "Epiphany and Following",
        "January 6",
        PeriodCategory::Fixed,
    ));
    for label in [
        "Week following Sun. between Feb. 4 and 10",
        "Week following Sun. between Feb. 11 and 17",
        "Week following Sun. between Feb. 18 and 24",
        "Week following Sun. between Feb. 25 and 29",
    ] {
        store.insert(LiturgicalPosition::new(label, "Sunday", PeriodCategory::Dated));
    }
    let resolver = Resolver::new(&store);

    println!("{}", MoveableFeasts::for_year(year)?);
    println!();

    // One line per period change.
    let mut current = String::new();
    for date in DateSpan::inclusive(ymd(year, 1, 1)?, ymd(year, 12, 31)?).days() {
        let pos = resolver.resolve(date)?;
        if pos.period != current {
            let note = pos.observance().map(|o| format!(" [{o}]")).unwrap_or_default();
            println!("{date}  {:<45} {} ({}){note}", pos.period, pos.day_identifier, pos.year_cycle);
            current = pos.period;
        }
    }
    println!();

    println!("{}", CoverageReport::scan_years(&resolver, year, 1)?);
    Ok(())
}
