use clap::Parser;
use hero_service::core::{ConfigProvider, DiagnosticSink, HttpTransport, MessageSink};
use hero_service::utils::logger;
use hero_service::{
    CliConfig, Command, Hero, HeroService, InMemoryHeroApi, MessageService, NewHero,
    ReqwestTransport, TracingMessages,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting hero-service CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let transport: Arc<dyn HttpTransport> = if config.in_memory {
        tracing::info!("🗂️ Using the in-memory hero data set");
        Arc::new(InMemoryHeroApi::seeded(settings.heroes_path()))
    } else {
        let http = ReqwestTransport::from_config(&settings)?;
        tracing::info!("🌐 Using hero API at {}", http.base_url());
        Arc::new(http)
    };

    let messages = Arc::new(MessageService::new());
    // Verbose runs also stream the message log as it is written.
    let sink: Arc<dyn MessageSink> = if config.verbose {
        Arc::new((messages.clone(), TracingMessages))
    } else {
        messages.clone()
    };
    let service = HeroService::new(transport, sink).with_heroes_path(settings.heroes_path());

    let outcome = run(&service, &config.command).await;

    for message in messages.messages() {
        println!("{}", message);
    }

    match outcome {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }
}

async fn run<H, M, D>(
    service: &HeroService<H, M, D>,
    command: &Command,
) -> hero_service::Result<String>
where
    H: HttpTransport,
    M: MessageSink,
    D: DiagnosticSink,
{
    let output = match command {
        Command::List => serde_json::to_string_pretty(&service.get_heroes().await?)?,
        Command::Get { id } => match service.get_hero(*id).await? {
            Some(hero) => serde_json::to_string_pretty(&hero)?,
            None => format!("No hero with id {}", id),
        },
        Command::Add { name } => {
            let created = service.add_hero(&NewHero::new(name.as_str())).await?;
            serde_json::to_string_pretty(&created)?
        }
        Command::Update { id, name } => {
            match service.update_hero(&Hero::new(*id, name.as_str())).await? {
                Some(body) => serde_json::to_string_pretty(&body)?,
                None => format!("Updated hero {}", id),
            }
        }
        Command::Delete { id } => match service.delete_hero(*id).await? {
            Some(hero) => serde_json::to_string_pretty(&hero)?,
            None => format!("Deleted hero {}", id),
        },
    };

    Ok(output)
}
