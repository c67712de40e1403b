//! `niramay`: operator CLI over the doctor directory and the AI pipelines.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use base64::Engine;
use clap::{Parser, Subcommand};
use tracing::info;

use niramay_core::pipeline::{doctor_details, list_doctor_directory, prescription_history};
use niramay_core::{resolve, Config, Database, DietCoach, DoctorMatcher, PrescriptionAnalyzer};
use niramay_llm::{GeminiClient, InlineImage};

/// Niramay doctor matching, prescription reading and diet planning
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long, default_value = "niramay.json")]
    config: PathBuf,

    /// Override the database path
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the doctor directory
    Doctors {
        #[command(subcommand)]
        action: DoctorsAction,
    },
    /// Recommend a doctor for a health description
    Match {
        /// Free-text description of the symptoms
        description: String,
    },
    /// Query the medication knowledge base
    Medication {
        #[command(subcommand)]
        action: MedicationAction,
    },
    /// Read prescription images
    Prescription {
        #[command(subcommand)]
        action: PrescriptionAction,
    },
    /// Generate diet plans
    Diet {
        #[command(subcommand)]
        action: DietAction,
    },
}

#[derive(Subcommand, Debug)]
enum DoctorsAction {
    /// Import doctors from a JSON array file
    Import { file: PathBuf },
    /// List the directory
    List,
    /// Show one doctor by id
    Show { id: String },
}

#[derive(Subcommand, Debug)]
enum MedicationAction {
    /// Resolve a medication name
    Lookup { name: String },
}

#[derive(Subcommand, Debug)]
enum PrescriptionAction {
    /// Read a prescription image and store the result
    Analyze {
        /// User the reading is stored under
        #[arg(short, long)]
        user: String,
        /// Image file (png, jpg, webp, heic)
        image: PathBuf,
    },
    /// Show stored readings, enriched
    History {
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Subcommand, Debug)]
enum DietAction {
    /// Generate a plan from a free-text request
    Generate {
        #[arg(short, long)]
        user: String,
        prompt: String,
    },
    /// Show stored plans
    History {
        #[arg(short, long)]
        user: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = Config::load(&args.config)?.with_env();
    if let Some(path) = args.database {
        config.database_path = path;
    }

    run(args.command, &config)
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Medication {
            action: MedicationAction::Lookup { name },
        } => {
            let resolution = resolve(&name);
            info!(key = resolution.key, method = ?resolution.method, "Resolved medication");
            print_json(&resolution)
        }
        Command::Doctors { action } => {
            let db = open_database(config)?;
            match action {
                DoctorsAction::Import { file } => {
                    let json = std::fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read {}", file.display()))?;
                    let count = db.import_doctors_json(&json)?;
                    let total = db.count_doctors()?;
                    info!(count, total, "Imported doctors");
                    println!("Imported {} doctors ({} in directory)", count, total);
                    Ok(())
                }
                DoctorsAction::List => print_json(&list_doctor_directory(&db)?),
                DoctorsAction::Show { id } => print_json(&doctor_details(&db, &id)?),
            }
        }
        Command::Match { description } => {
            let db = open_database(config)?;
            let generator = gemini_client(config)?;
            let matched = DoctorMatcher::new(&db, &generator)
                .min_description_chars(config.min_description_chars)
                .match_doctor(&description)?;
            print_json(&matched)
        }
        Command::Prescription { action } => {
            let db = open_database(config)?;
            match action {
                PrescriptionAction::Analyze { user, image } => {
                    let generator = gemini_client(config)?;
                    let image = load_image(&image)?;
                    let analysis = PrescriptionAnalyzer::new(&db, &generator).analyze(&user, image)?;
                    print_json(&analysis)
                }
                PrescriptionAction::History { user } => {
                    let analyses: Vec<_> = prescription_history(&db, &user)?
                        .into_iter()
                        .map(|(_, analysis)| analysis)
                        .collect();
                    print_json(&analyses)
                }
            }
        }
        Command::Diet { action } => {
            let db = open_database(config)?;
            match action {
                DietAction::Generate { user, prompt } => {
                    let generator = gemini_client(config)?;
                    let plan = DietCoach::new(&db, &generator).generate_plan(&user, &prompt)?;
                    print_json(&plan)
                }
                DietAction::History { user } => {
                    let plans = niramay_core::pipeline::diet_history(&db, &user)?
                        .into_iter()
                        .map(|stored| stored.plan())
                        .collect::<Result<Vec<_>, _>>()
                        .context("Stored diet plan is corrupt")?;
                    print_json(&plans)
                }
            }
        }
    }
}

fn open_database(config: &Config) -> Result<Database> {
    Database::open(&config.database_path)
        .with_context(|| format!("Failed to open database {}", config.database_path.display()))
}

fn gemini_client(config: &Config) -> Result<GeminiClient> {
    let client = GeminiClient::with_options(
        config.require_api_key()?,
        &config.gemini_model,
        &config.gemini_endpoint,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!(model = client.model(), "AI service configured");
    Ok(client)
}

fn load_image(path: &Path) -> Result<InlineImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    let data = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(InlineImage::new(mime_type_for(path), data))
}

fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
