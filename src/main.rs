use anyhow::Context;
use clap::{Parser, Subcommand};
use rental_scout::format::{format_minutes, format_try};
use rental_scout::models::{FilterCriteria, Listing, UserProfile, WorkSchedule};
use rental_scout::services::{summarize, Comparison, QueryService, RoutePlan};
use rental_scout::session::{
    PhotoCursor, ProfileEdit, SelectionChange, Session, MAX_COMPARE, MIN_COMPARE,
};
use rental_scout::{logger, AppConfig, DataStore};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "rental-scout", about = "Browse, filter and compare rental listings")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every listing
    List,
    /// Show one listing with its commute options
    Show {
        id: String,
        /// Commute destination; defaults to the profile's work district
        #[arg(long)]
        to: Option<String>,
        /// Photo to show, starting at 1
        #[arg(long, default_value_t = 1)]
        photo: usize,
    },
    /// Filter listings
    Filter {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        min_rent: Option<u32>,
        #[arg(long)]
        max_rent: Option<u32>,
        #[arg(long = "rooms", num_args = 1..)]
        rooms: Vec<u32>,
        #[arg(long = "district", num_args = 1..)]
        districts: Vec<String>,
    },
    /// Recommend listings for the current profile
    Recommend,
    /// Compare two or three listings
    Compare {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show the current profile, or edit it and refresh recommendations
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        income: Option<u32>,
        #[arg(long)]
        max_rent: Option<u32>,
        /// Replace the preferred districts
        #[arg(long = "district", num_args = 1..)]
        districts: Vec<String>,
        /// Drop the district preference
        #[arg(long, conflicts_with = "districts")]
        any_district: bool,
        /// Replace the preferred room counts
        #[arg(long = "rooms", num_args = 1..)]
        rooms: Vec<u32>,
        /// Drop the room preference
        #[arg(long, conflicts_with = "rooms")]
        any_rooms: bool,
        /// Whether a vehicle is available (true or false)
        #[arg(long)]
        vehicle: Option<bool>,
        /// morning, afternoon, night or flexible
        #[arg(long)]
        schedule: Option<WorkSchedule>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("❌ {:#}", e);
        eprintln!("❌ Bir şeyler ters gitti. Lütfen tekrar deneyin.");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let source = config.data_source();
    let store = DataStore::load(source.as_ref())
        .await
        .context("Failed to load listings")?;
    info!("🏠 Rental Scout - {} listings loaded", store.len());

    let service = QueryService::new(Arc::new(store), config.latency);
    let mut session = Session::start(&service);

    match cli.command {
        Command::List => {
            let listings = service.list_all().await;
            emit(cli.json, &listings, || print_listings(&listings))?;
        }
        Command::Show { id, to, photo } => {
            let Some(listing) = service.get_by_id(&id).await else {
                println!("Ev bulunamadı: {}", id);
                return Ok(());
            };
            let destination = to.unwrap_or_else(|| default_destination(session.current_profile(), &listing));
            let plan = service.route_options(&listing.id, &destination).await?;

            let mut cursor = PhotoCursor::new(&listing);
            cursor.select(photo.saturating_sub(1));

            #[derive(Serialize)]
            struct Detail<'a> {
                listing: &'a Listing,
                routes: &'a Option<RoutePlan>,
            }
            let detail = Detail {
                listing: &listing,
                routes: &plan,
            };
            emit(cli.json, &detail, || print_detail(&listing, &cursor, plan.as_ref()))?;
        }
        Command::Filter {
            city,
            min_rent,
            max_rent,
            rooms,
            districts,
        } => {
            let criteria = FilterCriteria {
                city,
                min_rent,
                max_rent,
                rooms: Some(rooms),
                districts: Some(districts),
            }
            .normalized();
            let listings = service.filter(&criteria).await;
            emit(cli.json, &listings, || print_listings(&listings))?;
        }
        Command::Recommend => {
            let listings = session.recommendations(&service).await;
            emit(cli.json, &listings, || {
                println!(
                    "Profilinize göre en uygun {} ev bulundu\n",
                    listings.len()
                );
                print_listings(&listings);
            })?;
        }
        Command::Compare { ids } => {
            for id in &ids {
                if session.selection_mut().pick(id) == SelectionChange::Full {
                    warn!("En fazla {} ev karşılaştırılabilir, {} atlandı", MAX_COMPARE, id);
                }
            }
            if !session.selection().can_compare() {
                println!("En az {} farklı ev seçmelisiniz.", MIN_COMPARE);
                return Ok(());
            }

            let comparison = service.compare(session.selection().ids()).await?;
            emit(cli.json, &comparison, || print_comparison(&comparison))?;
        }
        Command::Profile {
            name,
            income,
            max_rent,
            districts,
            any_district,
            rooms,
            any_rooms,
            vehicle,
            schedule,
        } => {
            let edit = ProfileEdit {
                name,
                income,
                max_rent,
                preferred_districts: (any_district || !districts.is_empty()).then_some(districts),
                preferred_rooms: (any_rooms || !rooms.is_empty()).then_some(rooms),
                has_vehicle: vehicle,
                work_schedule: schedule,
            };

            if edit.is_empty() {
                let profile = session.profile(&service).await;
                emit(cli.json, &profile, || print_profile(&profile))?;
                return Ok(());
            }

            let profile = session.edit_profile(edit).clone();
            let recommendations = session.recommendations(&service).await;

            #[derive(Serialize)]
            struct Updated<'a> {
                profile: &'a UserProfile,
                recommendations: &'a [Listing],
            }
            let updated = Updated {
                profile: &profile,
                recommendations: &recommendations,
            };
            emit(cli.json, &updated, || {
                println!("✅ Profil güncellendi\n");
                print_profile(&profile);
                println!(
                    "\nProfilinize göre en uygun {} ev bulundu\n",
                    recommendations.len()
                );
                print_listings(&recommendations);
            })?;
        }
    }

    Ok(())
}

fn default_destination(profile: &UserProfile, listing: &Listing) -> String {
    profile
        .work_location
        .as_ref()
        .map(|work| work.district.clone())
        .unwrap_or_else(|| listing.city.clone())
}

fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human();
    }
    Ok(())
}

fn print_listings(listings: &[Listing]) {
    let summary = summarize(listings);
    println!(
        "{} ev bulundu · Ortalama Kira: {} · Şehir Sayısı: {}\n",
        summary.count,
        format_try(summary.average_rent),
        summary.city_count
    );

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.name, format_try(listing.rent as f64));
        println!("   {}, {}", listing.district, listing.city);
        println!(
            "   {} oda · {} yaşında bina · Günlük: {}",
            listing.rooms,
            listing.building_age,
            format_try(listing.daily_cost as f64)
        );
        println!("   ID: {}", listing.id);
        println!();
    }
}

fn print_detail(listing: &Listing, cursor: &PhotoCursor, plan: Option<&RoutePlan>) {
    println!("{}", listing.name);
    println!("{}, {}", listing.district, listing.city);
    println!(
        "Kira: {} · Günlük: {}",
        format_try(listing.rent as f64),
        format_try(listing.daily_cost as f64)
    );
    match listing.size {
        Some(size) => println!("{} oda · {} m² · {} yaşında bina", listing.rooms, size, listing.building_age),
        None => println!("{} oda · {} yaşında bina", listing.rooms, listing.building_age),
    }
    if let Some(photo) = cursor.current(listing) {
        println!("Fotoğraf {}/{}: {}", cursor.index() + 1, cursor.count(), photo);
    }
    if let Some(description) = &listing.description {
        println!("\n{}", description);
    }
    if let Some(features) = listing.features.as_ref().filter(|f| !f.is_empty()) {
        println!("Özellikler: {}", features.join(", "));
    }

    if let Some(plan) = plan {
        println!("\nUlaşım ({}):", plan.destination);
        for route in &plan.routes {
            println!(
                "   {}: {} · {} (günlük {})",
                route.label,
                format_minutes(route.duration),
                format_try(route.cost as f64),
                format_try(route.daily_cost() as f64)
            );
        }
    }
}

fn print_comparison(comparison: &Comparison) {
    for listing in &comparison.listings {
        println!("{} ({}, {})", listing.name, listing.district, listing.city);
        println!(
            "   Kira: {} · Günlük: {} · {} oda · {} yaşında bina",
            format_try(listing.rent as f64),
            format_try(listing.daily_cost as f64),
            listing.rooms,
            listing.building_age
        );
    }

    if !comparison.insights.is_empty() {
        println!("\nÖneriler:");
        for insight in &comparison.insights {
            println!("   • {}", insight);
        }
    }
}

fn print_profile(profile: &UserProfile) {
    println!("{} ({})", profile.name, profile.id);
    println!("Gelir: {}", format_try(profile.income as f64));
    println!(
        "Maksimum kira: {}",
        profile
            .max_rent
            .map(|rent| format_try(rent as f64))
            .unwrap_or_else(|| "Belirtilmemiş".to_string())
    );
    if profile.preferred_districts.is_empty() {
        println!("Tercih edilen bölgeler: Hepsi");
    } else {
        println!("Tercih edilen bölgeler: {}", profile.preferred_districts.join(", "));
    }
    if let Some(rooms) = &profile.preferred_rooms {
        let rooms: Vec<String> = rooms.iter().map(|r| r.to_string()).collect();
        println!("Oda sayısı: {}", rooms.join(", "));
    }
    println!("Araç: {}", if profile.has_vehicle { "Var" } else { "Yok" });
    println!("Çalışma saatleri: {}", profile.work_schedule.label());
    if let Some(work) = &profile.work_location {
        println!("İş yeri: {}, {}", work.district, work.city);
    }
}
