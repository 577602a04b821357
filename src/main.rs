//! Tradea - Traduction de texte en terminal
//!
//! Traduction en une fois depuis la ligne de commande, ou session
//! interactive avec lecture vocale et presse-papiers.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradea::cli::{parse_line, render_update, Args, Command, HELP};
use tradea::clipboard::{Clipboard, SystemClipboard};
use tradea::config::AppConfig;
use tradea::locale::Language;
use tradea::session::Session;
use tradea::speech::{EspeakSynthesizer, SpeechOutput, SpeechSynthesizer};
use tradea::translate::{FailureKind, GoogleBackend, TranslationClient, TranslationRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialiser le logging (stderr, stdout reste aux traductions)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradea=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Tradea v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = AppConfig::load(args.config.as_deref());
    if let Some(from) = &args.from {
        config.source_language = from.clone();
    }
    if let Some(to) = &args.to {
        config.target_language = to.clone();
    }

    let backend = GoogleBackend::with_endpoint(&config.endpoint, &config.client_id);
    let client = Arc::new(TranslationClient::new(
        Box::new(backend),
        config.retry_policy(),
    ));
    tracing::info!(
        "Service de traduction: {} (timeout {:?}, {} nouvelle(s) tentative(s))",
        client.backend_name(),
        client.policy().timeout,
        client.policy().max_retries
    );

    match args.one_shot_text() {
        Some(text) => translate_once(&client, &config, &args, &text).await,
        None => run_interactive(client, &config).await,
    }
}

/// Traduit le texte de la ligne de commande et affiche le résultat
async fn translate_once(
    client: &TranslationClient,
    config: &AppConfig,
    args: &Args,
    text: &str,
) -> anyhow::Result<()> {
    let target = config.target();
    let Some(request) = TranslationRequest::new(text, config.source(), target.clone()) else {
        return Ok(());
    };

    let result = match client.translate(&request).await {
        Ok(result) => result,
        Err(e) => {
            let message = match e.failure_kind() {
                Some(FailureKind::Unexpected) => &config.messages.unexpected,
                _ => &config.messages.unavailable,
            };
            anyhow::bail!("{} ({})", message, e);
        }
    };

    if let Some(detected) = &result.detected_source {
        tracing::info!("Langue source détectée: {}", detected);
    }
    println!("{}", result.translated_text);

    if args.speak {
        match EspeakSynthesizer::detect() {
            Some(mut synthesizer) => {
                let locale = Language::from_code(&target).speech_locale();
                synthesizer
                    .speak(&result.translated_text, locale)
                    .context("Lecture vocale impossible")?;
                synthesizer.wait();
            }
            None => tracing::warn!("Synthèse vocale indisponible (espeak-ng introuvable)"),
        }
    }

    if args.copy {
        // Le processus garde le contenu jusqu'à sa reprise par un autre programme
        let text = result.translated_text;
        let copied = tokio::task::spawn_blocking(move || {
            SystemClipboard::for_one_shot().set_text(&text)
        })
        .await
        .context("Tâche du presse-papiers interrompue")?;
        if let Err(e) = copied {
            tracing::warn!("{}", e);
        }
    }

    Ok(())
}

/// Lit les lignes de stdin et pilote une session jusqu'à `:quit` ou la fin de l'entrée
async fn run_interactive(client: Arc<TranslationClient>, config: &AppConfig) -> anyhow::Result<()> {
    let speech_output = match EspeakSynthesizer::detect() {
        Some(synthesizer) => SpeechOutput::new(Box::new(synthesizer)),
        None => SpeechOutput::unavailable(),
    };
    if !speech_output.is_available() {
        tracing::info!("Synthèse vocale indisponible, :speak désactivé");
    }

    let session = Session::new(client, config)
        .with_speech_output(speech_output)
        .with_clipboard(Box::new(SystemClipboard::new()));

    let mut updates = session.subscribe();
    let handle = session.spawn();

    let printer = tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(update) => {
                    if let Some(line) = render_update(&update) {
                        println!("{}", line);
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("{} mises à jour perdues", skipped);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Lecture de stdin impossible")? {
        match parse_line(&line) {
            Command::Events(events) => {
                for event in events {
                    if !handle.send(event).await {
                        break;
                    }
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Nothing => {}
            Command::Unknown(input) => println!("Commande inconnue: {} (:help)", input),
        }
    }

    // La session termine la requête en cours avant de s'arrêter
    let state = handle.shutdown().await.context("Tâche de session en échec")?;
    tracing::debug!("État final: {:?}", state);
    printer.await.context("Tâche d'affichage en échec")?;
    Ok(())
}
