use clap::{Args, Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use goschool_cli::commands::{self, Command, StepContext};
use goschool_cli::seeder::CourseCounts;
use goschool_config::{DatabaseConfig, ProvisionConfig};
use goschool_core::{Outcome, ProvisionError};
use goschool_db::ProvisionSession;
use goschool_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "goschool-cli")]
#[command(about = "GoSchool CLI - Provisioning tools for the GoSchool database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert one course per year and division
    #[command(name = "create_courses", alias = "create-courses")]
    CreateCourses(CourseArgs),
    /// Drop every table of this year's database
    #[command(name = "delete_tables", alias = "delete-tables")]
    DeleteTables,
    /// Run the schema script against this year's database
    #[command(name = "create_tables", alias = "create-tables")]
    CreateTables,
    /// Register the backend's test users and seed their records
    #[command(name = "create_users", alias = "create-users")]
    CreateUsers,
    /// Assign the demonstration preceptor to its courses
    #[command(name = "create_preceptors", alias = "create-preceptors")]
    CreatePreceptors,
    /// Generate the P-256 key pair the backend signs tokens with
    #[command(name = "generate_rsa", alias = "generate-rsa")]
    GenerateRsa,
    /// Keys, tables, courses, users and preceptors, in that order
    #[command(name = "create_all", alias = "create-all")]
    CreateAll(CourseArgs),
}

#[derive(Args)]
struct CourseArgs {
    /// Number of years (prompted if not provided)
    #[arg(short = 'y', long)]
    years: Option<usize>,

    /// Number of divisions per year (prompted if not provided)
    #[arg(short = 'd', long)]
    divisions: Option<usize>,

    /// Number of primary levels (prompted if not provided)
    #[arg(short = 'p', long)]
    primary: Option<usize>,
}

impl Commands {
    fn split(self) -> (Command, Option<CourseArgs>) {
        match self {
            Commands::CreateCourses(args) => (Command::CreateCourses, Some(args)),
            Commands::DeleteTables => (Command::DeleteTables, None),
            Commands::CreateTables => (Command::CreateTables, None),
            Commands::CreateUsers => (Command::CreateUsers, None),
            Commands::CreatePreceptors => (Command::CreatePreceptors, None),
            Commands::GenerateRsa => (Command::GenerateRsa, None),
            Commands::CreateAll(args) => (Command::CreateAll, Some(args)),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

async fn handle_command(command: Commands) -> Result<(), ProvisionError> {
    let (command, course_args) = command.split();

    let counts = match course_args {
        Some(args) if command.needs_course_counts() => Some(resolve_counts(args)?),
        _ => None,
    };

    let ctx = StepContext::new(ProvisionConfig::from_env(), counts)?;

    let mut session = if command.needs_database() {
        Some(ProvisionSession::connect(&DatabaseConfig::from_env()).await?)
    } else {
        None
    };

    let reports = commands::run_command(command, &ctx, session.as_mut()).await?;

    if let Some(session) = session {
        session.finish().await?;
    }

    for report in &reports {
        match &report.outcome {
            Outcome::Executed { summary } => println!("✅ {}: {}", report.step, summary),
            Outcome::Skipped { reason } => println!("⚠️  {} skipped: {}", report.step, reason),
        }
    }

    Ok(())
}

fn resolve_counts(args: CourseArgs) -> Result<CourseCounts, ProvisionError> {
    let years = match args.years {
        Some(years) => years,
        None => prompt_count("Enter the number of years")?,
    };
    let divisions = match args.divisions {
        Some(divisions) => divisions,
        None => prompt_count("Enter the number of divisions per year")?,
    };
    let primary = match args.primary {
        Some(primary) => primary,
        None => prompt_count("Enter the number of primary levels")?,
    };

    let counts = CourseCounts::new(years, divisions, primary);
    counts.validate()?;
    Ok(counts)
}

fn prompt_count(prompt: &str) -> Result<usize, ProvisionError> {
    Input::<usize>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| ProvisionError::input(e).context(format!("reading `{prompt}`")))
}
