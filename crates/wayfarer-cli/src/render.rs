use wayfarer_core::featured::FeaturedUpdate;
use wayfarer_core::notice::NoticeKind;
use wayfarer_core::prelude::*;

pub fn card(record: &CountryRecord, favourite: bool) {
    let star = if favourite { " ★" } else { "" };
    println!("{}{}", record.name(), star);
    println!("  Capital:    {}", record.capital_label());
    println!("  Region:     {} / {}", record.region_label(), record.subregion_label());
    println!("  Population: {}", record.population_label());
    println!("  Currencies: {}", record.currencies_label());
    println!("  Languages:  {}", record.languages_label());
    match record.coordinates {
        Some(p) => println!("  Location:   {:.2}, {:.2}", p.lat, p.lng),
        None => println!("  Location:   N/A"),
    }
}

/// Print a committed view: cards (optionally narrowed by `filter`), marker
/// count and viewport.
pub fn view<S: FavouritesStore>(view: &ViewState, filter: Option<&str>, favourites: &Favourites<S>) {
    let shown: Vec<&CountryRecord> = view
        .records()
        .iter()
        .filter(|r| filter.map_or(true, |q| r.name_contains(q)))
        .collect();

    for record in &shown {
        card(record, favourites.contains_record(*record));
        println!();
    }

    let stats = view.stats();
    if shown.len() == stats.records {
        println!("{} countries, {} on the map", stats.records, stats.markers);
    } else {
        println!(
            "{} of {} countries shown, {} on the map",
            shown.len(),
            stats.records,
            stats.markers
        );
    }
    if let Some(b) = view.viewport() {
        println!(
            "Viewport: {:.2},{:.2} .. {:.2},{:.2}",
            b.south, b.west, b.north, b.east
        );
    }
}

pub fn notices(notices: &[Notice]) {
    for n in notices {
        match n.kind {
            NoticeKind::Error => eprintln!("error: {}", n.message),
            NoticeKind::Info => eprintln!("{}", n.message),
        }
    }
}

pub fn featured(update: FeaturedUpdate<'_>) {
    match update.entry {
        FeaturedEntry::Loaded(record) => {
            println!(
                "{}. {} ({}) pop. {}",
                update.index + 1,
                record.name(),
                record.capital_label(),
                record.population_label()
            );
        }
        FeaturedEntry::Failed(_) | FeaturedEntry::Pending => {}
    }
}
