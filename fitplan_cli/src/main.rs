use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitplan_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Weekly workout and nutrition planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Profile TOML file
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Config TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show BMR, TDEE, calorie target and macros for the profile
    Targets,

    /// Generate a weekly workout plan
    Workout {
        /// Comma-separated body parts (chest, back, shoulders, biceps, triceps, legs, abs, cardio)
        #[arg(long, value_delimiter = ',')]
        parts: Vec<String>,

        /// Training days per week, 1-7 (defaults to the profile's activity level)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        frequency: Option<u8>,

        /// Seed for reproducible exercise selection
        #[arg(long)]
        seed: Option<u64>,

        /// Show the plan without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Spread the saved plan over a different number of training days
    Rebalance {
        #[arg(long)]
        frequency: u8,
    },

    /// Generate a day of meals for the profile's calorie target
    Meals {
        /// Plan date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Show the plan without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the saved workout plan
    Show,

    /// Export the saved workout plan as CSV
    Export {
        #[arg(long)]
        output: PathBuf,
    },

    /// Discard the saved workout plan and body-part selection
    Reset,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    fitplan_core::logging::init_with_level(fitplan_core::logging::level_for_verbosity(
        cli.verbose,
    ));

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());
    let profile_path = cli.profile.clone().unwrap_or_else(UserProfile::default_path);

    tracing::debug!("Using data directory {:?}", data_dir);

    let catalog = Catalog::load(&config.catalog)?;
    let store = JsonFileStore::new(data_dir.join("store"));
    let mut planner = Planner::new(&catalog, config.allocator.clone(), store);

    match cli.command {
        Commands::Targets => cmd_targets(&profile_path),
        Commands::Workout {
            parts,
            frequency,
            seed,
            dry_run,
        } => cmd_workout(&mut planner, &profile_path, parts, frequency, seed, dry_run),
        Commands::Rebalance { frequency } => cmd_rebalance(&mut planner, frequency),
        Commands::Meals { date, dry_run } => {
            cmd_meals(&mut planner, &catalog, &profile_path, date, dry_run)
        }
        Commands::Show => cmd_show(&planner),
        Commands::Export { output } => cmd_export(&planner, &output),
        Commands::Reset => {
            planner.reset()?;
            println!("✓ Workout plan cleared");
            Ok(())
        }
    }
}

fn cmd_targets(profile_path: &Path) -> Result<()> {
    let profile = UserProfile::load(profile_path)?;
    let summary = MetabolicSummary::for_profile(&profile);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY TARGETS ({})", profile.goal.label());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMR:            {:.0} kcal", summary.bmr);
    println!("  TDEE:           {} kcal", summary.tdee);
    println!("  Calorie target: {} kcal", summary.calorie_target);
    println!();
    println!("  Protein: {} g", summary.macros.protein_g);
    println!("  Carbs:   {} g", summary.macros.carbs_g);
    println!("  Fat:     {} g", summary.macros.fat_g);
    println!();
    println!("  Suggested training days: {}", summary.training_days);
    println!();

    Ok(())
}

fn cmd_workout(
    planner: &mut Planner<'_, JsonFileStore>,
    profile_path: &Path,
    parts: Vec<String>,
    frequency: Option<u8>,
    seed: Option<u64>,
    dry_run: bool,
) -> Result<()> {
    let profile = UserProfile::load(profile_path)?;

    let selected: Vec<BodyPart> = if parts.is_empty() {
        planner.selected_body_parts()?
    } else {
        parts
            .iter()
            .map(|p| p.parse())
            .collect::<Result<Vec<BodyPart>>>()?
    };

    if selected.is_empty() {
        return Err(Error::Other(
            "Select at least one body part with --parts".into(),
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if dry_run {
        let plan = planner.preview_workout(&profile, &selected, frequency, &mut rng)?;
        display_workout(&plan);
        println!("\n[Dry run - plan not saved]");
        return Ok(());
    }

    let plan = planner.generate_workout(&profile, &selected, frequency, &mut rng)?;
    display_workout(&plan);
    println!("\n✓ Workout plan saved");
    Ok(())
}

fn cmd_rebalance(planner: &mut Planner<'_, JsonFileStore>, frequency: u8) -> Result<()> {
    let plan = planner.change_frequency(frequency)?;
    display_workout(&plan);
    println!("\n✓ Plan rebalanced to {} training days", plan.frequency);
    Ok(())
}

fn cmd_meals(
    planner: &mut Planner<'_, JsonFileStore>,
    catalog: &Catalog,
    profile_path: &Path,
    date: Option<NaiveDate>,
    dry_run: bool,
) -> Result<()> {
    let profile = UserProfile::load(profile_path)?;
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let plan = if dry_run {
        build_nutrition_plan(&profile, catalog, date)?
    } else {
        planner.generate_nutrition(&profile, date)?
    };

    display_nutrition(&plan, date);

    if dry_run {
        println!("\n[Dry run - plan not saved]");
    } else {
        println!("\n✓ Nutrition plan saved");
    }
    Ok(())
}

fn cmd_show(planner: &Planner<'_, JsonFileStore>) -> Result<()> {
    match planner.current_workout()? {
        Some(plan) => display_workout(&plan),
        None => println!("No workout plan saved yet. Run `fitplan workout --parts ...`."),
    }
    Ok(())
}

fn cmd_export(planner: &Planner<'_, JsonFileStore>, output: &Path) -> Result<()> {
    let plan = planner.current_workout()?.ok_or(Error::NoWorkoutPlan)?;
    let count = export_schedule_csv(&plan, output)?;
    println!("✓ Exported {} exercises", count);
    println!("  CSV: {}", output.display());
    Ok(())
}

fn display_workout(plan: &WorkoutPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", plan.name);
    println!("╰─────────────────────────────────────────╯");
    println!("  {}", plan.description);

    for (day, exercises) in &plan.days {
        println!();
        if exercises.is_empty() {
            println!("  {} - rest", day.name());
            continue;
        }

        println!("  {}", day.name());
        for exercise in exercises {
            println!(
                "    → {} ({}) {}×{}, rest {}s",
                exercise.name,
                exercise.body_part,
                exercise.sets,
                exercise.reps,
                exercise.rest_time_seconds
            );
        }
    }
}

fn display_nutrition(plan: &NutritionPlan, date: NaiveDate) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} ({})", plan.name, date);
    println!("╰─────────────────────────────────────────╯");
    println!("  {}", plan.description);
    println!();

    for (meal_type, entries) in &plan.meals {
        for entry in entries {
            println!(
                "  {:<10} {} ({} kcal, P{:.0} C{:.0} F{:.0})",
                meal_type.to_string(),
                entry.name,
                entry.calories,
                entry.protein,
                entry.carbs,
                entry.fat
            );
        }
    }
}
