use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::user::models::CreateUserCommand;
use account_service::domain::user::models::EmailAddress;
use account_service::domain::user::models::Password;
use account_service::domain::user::models::UserName;
use account_service::domain::user::ports::UserServicePort;
use account_service::domain::user::service::UserService;
use account_service::outbound::repositories::PostgresUserRepository;
use account_service::user::errors::UserError;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const SEED_PASSWORD: &str = "password123";

const SEED_USERS: [(&str, &str); 5] = [
    ("Admin", "admin@example.com"),
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Bob Johnson", "bob@example.com"),
    ("Alice Williams", "alice@example.com"),
];

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=info,seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Seeding database");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let user_service = UserService::new(user_repository, config.password_hasher()?);

    let mut created = 0;
    for (name, email) in SEED_USERS {
        let command = CreateUserCommand::new(
            UserName::new(name.to_string())?,
            EmailAddress::new(email.to_string())?,
            Password::new(SEED_PASSWORD.to_string())?,
        );

        match user_service.create_user(command).await {
            Ok(user) => {
                created += 1;
                tracing::info!(user_id = %user.id, email, "Seed user created");
            }
            Err(UserError::EmailAlreadyExists(_)) => {
                tracing::info!(email, "Seed user already exists, skipping");
            }
            Err(e) => {
                tracing::error!(email, error = %e, "Failed to create seed user");
            }
        }
    }

    tracing::info!(created, total = SEED_USERS.len(), "Seeding completed");

    Ok(())
}
