use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use corpus_analysis::{AnalyzerConfig, Language};
use corpus_index::{Corpus, CorpusLoader, WordTree};

use concordance::{AppState, SearchState, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_CORPUS: &str = "corpus.txt";
const MAX_PAGE_SIZE: usize = 500;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("binding to {}:{}", config.host, config.port);
    info!("using corpus at {}", config.corpus_path.display());
    info!("corpus language: {:?}", config.language);
    if config.keep_stop_words {
        info!("stop-word filtering disabled");
    }

    let mut analyzer_config = AnalyzerConfig::new(config.language);
    if config.keep_stop_words {
        analyzer_config = analyzer_config.keep_stop_words();
    }
    if let Some(pattern) = &config.figure_pattern {
        analyzer_config = analyzer_config.figure_pattern(pattern.clone());
    }
    let analyzer = analyzer_config.build()?;

    let start = Instant::now();
    let mut corpus = Corpus::new();
    let loader = CorpusLoader::new();
    let articles = loader.load_file(&config.corpus_path, &mut corpus, &analyzer)?;
    info!(
        "ingested {articles} articles ({} sentences, {} stems) in {} ms",
        corpus.sentences().len(),
        corpus.registry().len(),
        start.elapsed().as_millis()
    );

    let tree_start = Instant::now();
    let tree = WordTree::build(corpus.registry());
    info!(
        "word tree built: {} nodes in {} ms",
        tree.node_count(),
        tree_start.elapsed().as_millis()
    );

    let state = AppState {
        search: Arc::new(SearchState {
            corpus,
            tree,
            analyzer,
        }),
        max_page_size: MAX_PAGE_SIZE,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid listen address");
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    corpus_path: PathBuf,
    language: Language,
    keep_stop_words: bool,
    figure_pattern: Option<String>,
}

fn load_config() -> Config {
    let mut keep_stop_words = false;
    let mut cli_corpus: Option<PathBuf> = None;
    let mut cli_figure_pattern: Option<String> = None;
    let mut args = env::args().skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--keep-stop-words" => keep_stop_words = true,
            "--corpus" => {
                if let Some(path) = args.next() {
                    cli_corpus = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--corpus=") {
                    cli_corpus = Some(PathBuf::from(path));
                } else if let Some(pattern) = arg.strip_prefix("--figure-pattern=") {
                    cli_figure_pattern = Some(pattern.to_string());
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let corpus_path = cli_corpus
        .or_else(|| env::var("CORPUS_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS));
    let language = env::var("CORPUS_LANG")
        .ok()
        .as_deref()
        .and_then(parse_language)
        .unwrap_or(Language::Russian);

    Config {
        host,
        port,
        corpus_path,
        language,
        keep_stop_words,
        figure_pattern: cli_figure_pattern,
    }
}

fn parse_language(raw: &str) -> Option<Language> {
    match raw.to_ascii_lowercase().as_str() {
        "ru" | "russian" => Some(Language::Russian),
        "en" | "english" => Some(Language::English),
        _ => None,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
