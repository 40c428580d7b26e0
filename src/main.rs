use article_hooks::configuration::get_configuration;
use article_hooks::startup::Application;
use article_hooks::telemetry::{construct_open_telemetry_tracer, get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let configuration = get_configuration()?;

    let tracer = if configuration.telemetry.enabled {
        Some(construct_open_telemetry_tracer("article_hooks", &configuration.telemetry)?)
    } else {
        None
    };
    let subscriber = get_subscriber("article_hooks".into(), "info".into(), std::io::stdout, tracer);
    init_subscriber(subscriber)?;

    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Listening");
    application.run_until_stopped().await?;
    Ok(())
}
