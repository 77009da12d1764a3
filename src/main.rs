use tracing_subscriber::{EnvFilter, FmtSubscriber};

use callsense::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_env();
    run(config).await
}

/// Producer: capture → utterance assembly → classify/reason → mailbox.
///
/// Model or device unavailability is fatal here, before any stream
/// processing starts. Everything after startup is recoverable.
#[cfg(feature = "vosk-backend")]
async fn run(config: AppConfig) -> anyhow::Result<()> {
    use anyhow::Context;
    use ringbuf::traits::Split;
    use ringbuf::HeapRb;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    use callsense::analysis::Classifier;
    use callsense::audio::{AudioCapture, BLOCK_SAMPLES, SAMPLE_RATE};
    use callsense::mailbox::{Mailbox, RecordPublisher};
    use callsense::speech::{AssemblerPump, UtteranceAssembler, VoskRecognizer};

    tracing::info!("callsense producer starting");

    // Room for a few blocks so capture survives scheduling jitter.
    let rb = HeapRb::<i16>::new(BLOCK_SAMPLES * 4);
    let (producer, consumer) = rb.split();

    let capture = AudioCapture::new(producer).context("failed to open audio input")?;
    tracing::info!("audio capture initialized at {}Hz", capture.sample_rate);

    let recognizer = VoskRecognizer::new(&config.model_path, SAMPLE_RATE)
        .context("failed to load acoustic model")?;

    let (tx, mut rx) = mpsc::channel(16);
    let cancel = CancellationToken::new();

    let pump = AssemblerPump::new(
        consumer,
        UtteranceAssembler::new(recognizer),
        tx,
        cancel.clone(),
    );
    let pump_handle = std::thread::spawn(move || pump.run());

    let publisher = RecordPublisher::new(
        Classifier::new(),
        Mailbox::new(&config.mailbox_path),
    );

    tracing::info!(
        "listening; publishing to {}; press Ctrl+C to stop",
        config.mailbox_path.display()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("stop requested");
                break;
            }
            maybe_transcript = rx.recv() => {
                match maybe_transcript {
                    Some(transcript) => {
                        let record = publisher.publish(&transcript);
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    }
                    None => break, // pump ended
                }
            }
        }
    }

    cancel.cancel();
    drop(capture); // stop the stream before joining the pump
    let _ = pump_handle.join();
    Ok(())
}

#[cfg(not(feature = "vosk-backend"))]
async fn run(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "built without a speech backend; rebuild with `--features vosk-backend` to run live capture"
    )
}
