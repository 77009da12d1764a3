//! Consumer-side rendering surface: polls the mailbox and prints the
//! latest record. Reads only, never writes; safe to stop at any poll
//! boundary and safe to run several of at once.

use tokio::time::MissedTickBehavior;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use callsense::config::AppConfig;
use callsense::mailbox::{Mailbox, Record, RecordObserver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_env();
    let mut observer = RecordObserver::new(Mailbox::new(&config.mailbox_path));

    let mut cadence = tokio::time::interval(config.poll_interval);
    cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

    println!(
        "Watching {} (poll every {:?}). Press Ctrl+C to stop.",
        config.mailbox_path.display(),
        config.poll_interval
    );

    let mut last_rendered: Option<Record> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = cadence.tick() => {
                if let Some(record) = observer.poll() {
                    if last_rendered.as_ref() != Some(record) {
                        render(record);
                        last_rendered = Some(record.clone());
                    }
                }
            }
        }
    }

    Ok(())
}

fn render(record: &Record) {
    println!();
    println!("You said: {}", record.text);
    println!("-- Analysis --------------------------------");
    println!("  sentiment: {}", record.sentiment);
    println!("  intent:    {}", record.intent);
    println!("  category:  {}", record.category);
    println!("  emotion:   {}", record.emotion);
    if record.entities.is_empty() {
        println!("  entities:  (none)");
    } else {
        for entity in &record.entities {
            println!("  entity:    {:?} = {}", entity.kind, entity.value);
        }
    }
    println!("-- Suggestions -----------------------------");
    println!("  next question:      {}", record.ai_suggestions.next_question);
    println!("  objection handling: {}", record.ai_suggestions.objection_response);
    println!("  recommendation:     {}", record.ai_suggestions.recommendation);
}
