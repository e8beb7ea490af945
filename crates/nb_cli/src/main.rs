use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use nb_core::{FileStore, NewsItem, Result, TranslatedNewsItem, Translator, UploadSource, VectorIndex};
use nb_feeds::{fetch_all, write_knowledge_file, DEFAULT_FEEDS};
use nb_remote::backends::OpenAiBackend;
use nb_remote::models::{OpenAiTranslator, ResponsesEngine};
use nb_remote::RemoteConfig;
use tracing::info;

mod chat;
use chat::{run_chat_loop, StdinSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch recent news, build a remote knowledge base, and chat against it", long_about = None)]
struct Cli {
    /// API key for the completion, file and vector-store endpoints
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: String,
    /// Completion model used for translation and querying
    #[arg(long, default_value = nb_remote::DEFAULT_MODEL)]
    model: String,
    /// Base URL of the OpenAI-compatible API
    #[arg(long, default_value = nb_remote::DEFAULT_BASE_URL)]
    base_url: String,
    /// Language news titles are translated into
    #[arg(long, default_value = "English")]
    target_lang: String,
    /// Path of the knowledge file
    #[arg(long, default_value = "news_titles.txt")]
    output: PathBuf,
    /// Name given to the newly created vector store
    #[arg(long, default_value = "news_knowledge_base")]
    index_name: String,
    /// RSS feed URL, repeatable. Defaults to the built-in feed list.
    #[arg(long = "feed")]
    feeds: Vec<String>,
}

/// Translate every title in feed order, one remote call per item.
async fn translate_all(
    translator: &dyn Translator,
    items: Vec<NewsItem>,
) -> Result<Vec<TranslatedNewsItem>> {
    let mut translated = Vec::with_capacity(items.len());
    for item in items {
        let translated_title = translator.translate(&item.title).await?;
        translated.push(TranslatedNewsItem {
            item,
            translated_title,
        });
    }
    Ok(translated)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let client = Arc::new(reqwest::Client::new());
    let config = RemoteConfig::new(cli.api_key)
        .with_base_url(cli.base_url)
        .with_model(cli.model);

    let feeds: Vec<String> = if cli.feeds.is_empty() {
        DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.feeds
    };

    info!("📰 Fetching news from {} feeds", feeds.len());
    let items = fetch_all(&client, &feeds).await?;

    info!("🌐 Translating {} titles into {}", items.len(), cli.target_lang);
    let translator = OpenAiTranslator::new(client.clone(), config.clone(), cli.target_lang);
    let translated = translate_all(&translator, items).await?;

    write_knowledge_file(&cli.output, &translated)?;
    println!("News data successfully saved to {}", cli.output.display());

    let backend = OpenAiBackend::new(client.clone(), config.clone());
    let file = backend.upload(&UploadSource::Path(cli.output.clone())).await?;
    let index = backend.create_index(&cli.index_name).await?;
    backend.attach_file(&index, &file).await?;

    println!("\nStarting multi-turn conversation, type 'quit' to end conversation.");
    let engine = ResponsesEngine::new(client, config, index);
    run_chat_loop(&engine, &mut StdinSource, &mut std::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use nb_remote::backends::MemoryBackend;
    use nb_remote::models::EchoTranslator;

    #[tokio::test]
    async fn test_echo_pipeline_writes_single_line() {
        let published = Utc::now() - Duration::hours(1);
        let items = vec![NewsItem {
            title: "Hello".to_string(),
            link: "http://example.com/hello".to_string(),
            published_at: published,
        }];

        let translated = translate_all(&EchoTranslator, items).await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news_titles.txt");
        write_knowledge_file(&path, &translated).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            format!(
                "Hello | Hello | http://example.com/hello | {}\n",
                published.format("%Y-%m-%d %H:%M:%S")
            )
        );
    }

    #[tokio::test]
    async fn test_translate_all_preserves_order() {
        let now = Utc::now();
        let items = vec!["first", "second", "third"]
            .into_iter()
            .map(|title| NewsItem {
                title: title.to_string(),
                link: format!("http://example.com/{}", title),
                published_at: now,
            })
            .collect();

        let translated = translate_all(&EchoTranslator, items).await.unwrap();
        let titles: Vec<&str> = translated
            .iter()
            .map(|t| t.translated_title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_persist_stages_run_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news_titles.txt");
        std::fs::write(&path, "Hello | Hello | http://example.com | 2026-08-30 12:00:00\n")
            .unwrap();

        let backend = MemoryBackend::new();
        let file = backend.upload(&UploadSource::Path(path)).await.unwrap();
        let index = backend.create_index("news_knowledge_base").await.unwrap();
        backend.attach_file(&index, &file).await.unwrap();

        assert_eq!(backend.attachments().await, vec![(index.0, file.0)]);
    }
}
