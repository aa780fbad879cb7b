use anyhow::Context;
use colored::Colorize;

use shelf_client::actions::{BOOK_NAME_FIELD, ID_FIELD, KEYWORD_FIELD, STATUS_FIELD};
use shelf_client::{Action, ClientConfig, FormInput, HttpBookApi, Session};
use shelf_server::{ServerConfig, ShelfServer};

use crate::cli::*;
use crate::render::print_state;
use crate::shell;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let server = cli.server;
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::List => cmd_list(server, format).await,
        Command::Search(args) => {
            let form = FormInput::new().with(KEYWORD_FIELD, args.keyword);
            cmd_action(server, format, Action::Search, form).await
        }
        Command::Add(args) => {
            let form = FormInput::new().with(BOOK_NAME_FIELD, args.name.join(" "));
            cmd_action(server, format, Action::Add, form).await
        }
        Command::Update(args) => {
            let form = FormInput::new()
                .with(ID_FIELD, args.id)
                .with(STATUS_FIELD, args.status);
            cmd_action(server, format, Action::Update, form).await
        }
        Command::Shell => {
            let session = connect(server).await?;
            shell::run(session, format).await
        }
    }
}

fn server_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if !args.origins.is_empty() {
        config.allowed_origins = args.origins;
    }
    if args.no_seed {
        config.seed = false;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(args)?;
    println!(
        "{} Shelf server on {} (origins: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.allowed_origins.join(", ")
    );
    ShelfServer::new(config).serve().await?;
    Ok(())
}

async fn connect(server: Option<String>) -> anyhow::Result<Session<HttpBookApi>> {
    let config = match server {
        Some(base_url) => ClientConfig { base_url },
        None => ClientConfig::from_env(),
    };
    let api = HttpBookApi::from_config(&config);
    Session::load(api)
        .await
        .with_context(|| format!("could not load books from {}", config.base_url))
}

async fn cmd_list(server: Option<String>, format: OutputFormat) -> anyhow::Result<()> {
    let session = connect(server).await?;
    print_state(&session.state(), format)
}

async fn cmd_action(
    server: Option<String>,
    format: OutputFormat,
    action: Action,
    form: FormInput,
) -> anyhow::Result<()> {
    let session = connect(server).await?;
    let state = session
        .dispatch(action.as_str(), &form)
        .await
        .with_context(|| format!("{action} failed"))?;
    print_state(&state, format)
}
