use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use schema::identity::{PasswordRequest, PasswordResponse, error_from_identity_body};
use schema::{
    ActivityLevel, ApiError, Endpoint, Goal, HttpMethod, IdentityConfig, IdentityError, RecipeRequest, ReportKind,
    Session, SuggestionRequest, UpdateProfileRequest, UserProfile, WeekData, WorkoutLogRequest, WorkoutType,
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credentials; pass --id-token, or --email and --password")]
    MissingCredentials,
    #[error("{0}")]
    Identity(#[from] IdentityError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "balancebite", about = "BalanceBite backend CLI")]
struct Cli {
    #[arg(long, env = "BALANCEBITE_API_URL", default_value = schema::DEFAULT_API_BASE_URL)]
    api_url: String,

    /// SSR host probed by `ping`.
    #[arg(long, env = "BALANCEBITE_HOST_URL", default_value = "http://127.0.0.1:3000")]
    host_url: String,

    #[arg(long, env = "BALANCEBITE_ID_TOKEN")]
    id_token: Option<String>,

    #[arg(long, env = "BALANCEBITE_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "BALANCEBITE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long, env = "BALANCEBITE_FIREBASE_API_KEY", hide_env_values = true, default_value = "")]
    firebase_api_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    api_url: String,
    host_url: String,
    id_token: Option<String>,
    email: Option<String>,
    password: Option<String>,
    identity: IdentityConfig,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the SSR host's health probe.
    Ping,
    /// Sign in and print the session (including the ID token).
    Login,
    Profile,
    MealPlan,
    /// Update profile fields; prints the new profile and meal plan.
    Update(UpdateArgs),
    /// Log one week of a workout type.
    Workout(WorkoutArgs),
    Suggest {
        text: String,
    },
    /// Generate a recipe for a meal name.
    Recipe {
        meal_name: String,
    },
    /// Download a PDF report.
    Report(ReportArgs),
    Admin(AdminCommand),
}

/// Omitted optional flags keep the stored profile value.
#[derive(Args, Debug)]
struct UpdateArgs {
    #[arg(long)]
    weight: f64,
    #[arg(long)]
    meals: u32,
    #[arg(long)]
    activity: Option<ActivityLevel>,
    #[arg(long)]
    goal: Option<Goal>,
    #[arg(long)]
    diet_type: Option<String>,
}

impl UpdateArgs {
    fn is_partial(&self) -> bool {
        self.activity.is_none() || self.goal.is_none() || self.diet_type.is_none()
    }
}

#[derive(Args, Debug)]
struct WorkoutArgs {
    #[arg(long = "type", default_value = "steps")]
    workout_type: WorkoutType,
    /// Monday of the logged week, `YYYY-MM-DD`.
    #[arg(long)]
    week_start: String,
    /// Seven comma-separated values, Monday first.
    #[arg(long)]
    days: String,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// `user-updates` or `weekly-workout`.
    #[arg(value_parser = parse_report_kind)]
    kind: ReportKind,
    /// Output path; defaults to the report's standard file name.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    Users,
    Suggestions,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        api_url: cli.api_url,
        host_url: cli.host_url,
        id_token: cli.id_token,
        email: cli.email,
        password: cli.password,
        identity: IdentityConfig::new(cli.firebase_api_key),
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login => {
            let session = sign_in(&ctx).await?;
            print_json(&serde_json::to_value(&session)?)
        }
        Command::Profile => print_json(&api_request(&ctx, Endpoint::Profile, None).await?),
        Command::MealPlan => print_json(&api_request(&ctx, Endpoint::MealPlan, None).await?),
        Command::Update(args) => {
            let current = if args.is_partial() {
                Some(serde_json::from_value::<UserProfile>(api_request(&ctx, Endpoint::Profile, None).await?)?)
            } else {
                None
            };
            let body = update_request(&args, current.as_ref())?;
            print_json(&api_request(&ctx, Endpoint::UpdateProfile, Some(serde_json::to_value(body)?)).await?)
        }
        Command::Workout(args) => {
            let days = parse_days(&args.days)?;
            let body = WorkoutLogRequest::new(args.workout_type, &args.week_start, WeekData::from_days(days))?;
            print_json(&api_request(&ctx, Endpoint::Workout, Some(serde_json::to_value(body)?)).await?)
        }
        Command::Suggest { text } => {
            let body = SuggestionRequest::new(&text)?;
            print_json(&api_request(&ctx, Endpoint::Suggestion, Some(serde_json::to_value(body)?)).await?)
        }
        Command::Recipe { meal_name } => {
            let body = serde_json::to_value(RecipeRequest { meal_name })?;
            let value = api_request(&ctx, Endpoint::GenerateRecipe, Some(body)).await?;
            let recipe = schema::decode_recipe(value.to_string().as_bytes())?;
            print_json(&serde_json::to_value(recipe)?)
        }
        Command::Report(args) => run_report(&ctx, args).await,
        Command::Admin(admin) => {
            let endpoint = match admin.command {
                AdminSubcommand::Users => Endpoint::AdminUsers,
                AdminSubcommand::Suggestions => Endpoint::AdminSuggestions,
            };
            print_json(&api_request(&ctx, endpoint, None).await?)
        }
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", cli.host_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), message: "health check failed".to_owned() }.into());
    }
    println!("ok");
    Ok(())
}

async fn run_report(cli: &CliContext, args: ReportArgs) -> Result<(), CliError> {
    let response = authorized(cli, args.kind.endpoint()).await?.send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    if !(200..300).contains(&status) {
        return Err(schema::error_from_status(status, &body).into());
    }
    schema::validate_pdf(&body)?;

    let path = args.out.unwrap_or_else(|| PathBuf::from(args.kind.file_name()));
    std::fs::write(&path, &body).map_err(|source| CliError::Write { path: path.clone(), source })?;
    eprintln!("saved {} ({} bytes)", path.display(), body.len());
    Ok(())
}

/// Bearer token from `--id-token`, else a fresh password sign-in.
async fn bearer_token(cli: &CliContext) -> Result<String, CliError> {
    if let Some(token) = cli.id_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_owned());
    }
    Ok(sign_in(cli).await?.id_token)
}

async fn sign_in(cli: &CliContext) -> Result<Session, CliError> {
    let (Some(email), Some(password)) = (cli.email.as_deref(), cli.password.as_deref()) else {
        return Err(CliError::MissingCredentials);
    };
    let url = cli.identity.sign_in_url()?;
    let body = PasswordRequest::new(email, password)?;

    let response = reqwest::Client::new().post(url).json(&body).send().await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    if !(200..300).contains(&status) {
        return Err(error_from_identity_body(status, &bytes).into());
    }
    let resp: PasswordResponse =
        serde_json::from_slice(&bytes).map_err(|e| IdentityError::Malformed(e.to_string()))?;
    Ok(Session::from_password(resp, now_ms())?)
}

async fn authorized(cli: &CliContext, endpoint: Endpoint) -> Result<reqwest::RequestBuilder, CliError> {
    let token = bearer_token(cli).await?;
    let client = reqwest::Client::new();
    let url = endpoint.url(&cli.api_url);
    let request = match endpoint.method() {
        HttpMethod::Get => client.get(url),
        HttpMethod::Post => client.post(url),
    };
    Ok(request.header(AUTHORIZATION, HeaderValue::from_str(&schema::bearer(&token))?))
}

async fn api_request(cli: &CliContext, endpoint: Endpoint, body: Option<Value>) -> Result<Value, CliError> {
    let request = authorized(cli, endpoint).await?;
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    if !(200..300).contains(&status) {
        return Err(schema::error_from_status(status, &bytes).into());
    }
    Ok(schema::decode_json(&bytes)?)
}

/// Build the update body; flags left out fall back to `current`.
fn update_request(args: &UpdateArgs, current: Option<&UserProfile>) -> Result<UpdateProfileRequest, CliError> {
    if !(args.weight.is_finite() && args.weight > 0.0) {
        return Err(CliError::InvalidArgument("weight must be a positive number".to_owned()));
    }
    if args.meals == 0 {
        return Err(CliError::InvalidArgument("meals must be at least 1".to_owned()));
    }
    let missing = || CliError::InvalidArgument("current profile required for omitted flags".to_owned());
    let a_level = args.activity.or(current.map(|p| p.a_level)).ok_or_else(missing)?;
    let goal = args.goal.or(current.map(|p| p.goal)).ok_or_else(missing)?;
    let diet_type = match (&args.diet_type, current) {
        (Some(raw), _) => raw.trim().to_owned(),
        (None, Some(profile)) => profile.diet_type.trim().to_owned(),
        (None, None) => return Err(missing()),
    };
    Ok(UpdateProfileRequest {
        weight: args.weight,
        meals: args.meals,
        a_level,
        goal,
        diet_type: if diet_type.is_empty() { schema::profile::DEFAULT_DIET_TYPE.to_owned() } else { diet_type },
    })
}

/// Parse `"1,2,3,4,5,6,7"`; blank entries count as zero.
fn parse_days(raw: &str) -> Result<[f64; 7], CliError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 7 {
        return Err(CliError::InvalidArgument(format!("expected 7 daily values, got {}", parts.len())));
    }
    let mut days = [0.0; 7];
    for (slot, part) in days.iter_mut().zip(parts) {
        if part.is_empty() {
            continue;
        }
        *slot = part.parse().map_err(|_| CliError::InvalidArgument(format!("not a number: {part}")))?;
    }
    Ok(days)
}

fn parse_report_kind(raw: &str) -> Result<ReportKind, String> {
    ReportKind::ALL
        .into_iter()
        .find(|kind| kind.slug() == raw.trim())
        .ok_or_else(|| format!("unknown report `{raw}` (expected user-updates or weekly-workout)"))
}

fn now_ms() -> u64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    u64::try_from(duration.as_millis()).unwrap_or(0)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
