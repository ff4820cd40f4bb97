//! `club`: the club site from a terminal.
//!
//! Configuration comes from the `CLUBHOUSE_*` environment variables and
//! logging from `RUST_LOG`.

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use clubhouse::prelude::*;
use clubhouse::views::{catalog, schedule};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    name = "club",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse the science club's events and gallery, and manage your sign-ups",
    long_about = None
)]
struct Cli {
    /// Override the API base URL
    #[arg(global = true, long = "api")]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List events, upcoming first
    Events {
        #[arg(long, help = "Show past events instead of upcoming ones")]
        past: bool,
    },

    /// List photo albums
    Gallery {
        #[arg(long, value_enum, help = "Only albums of this activity")]
        activity: Option<ActivityArg>,
    },

    /// Describe the club's activities
    Activities,

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long, help = "National identity card number")]
        cni: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in and remember the session
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the saved session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Sign up for an event
    Join { id: String },

    /// Withdraw from an event
    Leave { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum ActivityArg {
    Robotics,
    Chess,
    Tipe,
    Innovation,
}

impl From<ActivityArg> for Activity {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Robotics => Activity::Robotics,
            ActivityArg::Chess => Activity::Chess,
            ActivityArg::Tipe => Activity::TipePrize,
            ActivityArg::Innovation => Activity::Innovation,
        }
    }
}

type Client = ClubClient<HttpTransport, clubhouse::DynStore>;

#[tokio::main]
async fn main() {
    clubhouse::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult {
    let mut config = ClientConfig::from_env()?;
    if let Some(api) = cli.api {
        config = config.api_url(api);
    }
    let client = ClubClient::builder().config(config).build()?;

    match cli.command {
        Command::Events { past } => list_events(&client, past).await,
        Command::Gallery { activity } => list_albums(&client, activity.map(Activity::from)).await,
        Command::Activities => {
            print_activities(&client);
            Ok(())
        }
        Command::Register {
            username,
            cni,
            phone,
            email,
            password,
        } => {
            let data = RegisterData {
                username,
                cni,
                phone,
                email,
                password,
            };
            client.register(&data).await?;
            println!("Inscription réussie. Connectez-vous avec `club login {}`.", data.username);
            Ok(())
        }
        Command::Login { username, password } => {
            let member = client.login(&Credentials::new(username, password)).await?;
            println!("Connecté en tant que {}.", member.username);
            Ok(())
        }
        Command::Logout => {
            client.logout();
            println!("Déconnecté.");
            Ok(())
        }
        Command::Whoami => {
            match client.member() {
                Some(member) => println!("{} <{}>", member.username, member.email),
                None => println!("Non connecté."),
            }
            Ok(())
        }
        Command::Join { id } => change_membership(&client, EventId::new(id), true).await,
        Command::Leave { id } => change_membership(&client, EventId::new(id), false).await,
    }
}

async fn list_events(client: &Client, past: bool) -> CliResult {
    let view = client.events_view();
    view.mount();
    if let ViewState::Failed { message, .. } = view.settled().await {
        return Err(message.into());
    }

    let now = Utc::now();
    let events = if past { view.past(now) } else { view.upcoming(now) };
    if events.is_empty() {
        println!("Aucun événement.");
    }
    for event in &events {
        println!("[{}] {} ({})", event.id, event.title, event.activity);
        println!("    {} · {}", schedule::date_label(event.date), event.location);
        println!(
            "    {} · {}",
            schedule::seats_label(event),
            view.button_for(event).label
        );
    }
    Ok(())
}

async fn list_albums(client: &Client, activity: Option<Activity>) -> CliResult {
    let view = client.gallery_view();
    view.mount();
    if let ViewState::Failed { message, .. } = view.settled().await {
        return Err(message.into());
    }

    let albums = match activity {
        Some(activity) => view.by_activity(activity),
        None => view.albums(),
    };
    for album in &albums {
        let date = album.date.as_deref().unwrap_or_default();
        println!(
            "{} ({}) {} · {} photos",
            album.title,
            album.activity,
            date,
            album.photo_count()
        );
    }
    Ok(())
}

fn print_activities(client: &Client) {
    for info in &catalog::ACTIVITIES {
        println!("{}", info.title);
        println!("  {}", info.description);
        for feature in info.features {
            println!("  - {feature}");
        }
        println!("  Partenaires : {}", info.partners);
        println!("  Durée : {}", info.duration);
        if let Some(note) = info.note {
            println!("  {note}");
        }
        println!();
    }

    if let Some(cta) = catalog::call_to_action(&client.session()) {
        println!("{}: {}", cta.title, cta.text);
    }
    println!("Contact : {}", catalog::CONTACT_EMAIL);
}

async fn change_membership(client: &Client, id: EventId, join: bool) -> CliResult {
    let view = client.events_view();
    view.mount();
    view.settled().await;

    let notice = if join { view.join(&id).await } else { view.leave(&id).await };
    if notice.is_destructive() {
        return Err(notice.to_string().into());
    }
    println!("{notice}");
    if let Some(event) = view.event(&id) {
        println!("{}", schedule::seats_label(&event));
    }
    tracing::debug!(event_id = %id, join, "membership command done");
    Ok(())
}
