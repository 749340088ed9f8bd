use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use ecole::bootstrap::bootstrap_database;
use ecole_config::JwtConfig;
use ecole_core::RoleName;
use ecole_db::{PgPool, assign_role, create_user, init_db_pool, list_roles};

#[derive(Parser)]
#[command(name = "ecole-cli")]
#[command(about = "Ecole CLI - Administrative tools for the Ecole API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop and recreate the schema, then seed the four fixed roles
    Seed,
    /// Create a user and assign roles to it
    CreateUser {
        /// Username
        #[arg(short = 'u', long)]
        username: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Role to assign (USER, ETUDIANT, PROFESSEUR, ADMIN); repeatable
        #[arg(short = 'r', long = "role")]
        roles: Vec<RoleName>,
    },
    /// Print a signed access token for a user id
    IssueToken {
        /// Id of the user the token is issued for
        #[arg(long)]
        user_id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed => handle_seed().await,
        Commands::CreateUser {
            username,
            email,
            roles,
        } => handle_create_user(&username, &email, &roles).await,
        Commands::IssueToken { user_id } => handle_issue_token(user_id),
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")
}

async fn handle_seed() -> anyhow::Result<()> {
    let pool = connect().await?;

    bootstrap_database(&pool).await?;

    println!("✅ Database reset and roles seeded:");
    for role in list_roles(&pool).await? {
        println!("   {} {}", role.id, role.name);
    }

    Ok(())
}

async fn handle_create_user(username: &str, email: &str, roles: &[RoleName]) -> anyhow::Result<()> {
    let pool = connect().await?;

    let user = create_user(&pool, username, email)
        .await
        .context("Failed to create user")?;

    for role in roles {
        assign_role(&pool, user.id, *role)
            .await
            .with_context(|| format!("Failed to assign role {}", role))?;
    }

    println!("✅ User created successfully!");
    println!("   Id: {}", user.id);
    println!("   Username: {}", user.username);
    println!("   Email: {}", user.email);
    if !roles.is_empty() {
        let names: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
        println!("   Roles: {}", names.join(", "));
    }

    Ok(())
}

fn handle_issue_token(user_id: i32) -> anyhow::Result<()> {
    let config = JwtConfig::from_env();

    let token = ecole_auth::create_access_token(user_id, &config)?;
    println!("{}", token);

    Ok(())
}
