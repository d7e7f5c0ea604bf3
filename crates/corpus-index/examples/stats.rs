//! Print corpus statistics for a raw article dump.
//!
//! Usage: `cargo run -p corpus-index --example stats -- <corpus.txt>`

use corpus_analysis::{AnalyzerConfig, Language};
use corpus_index::{Corpus, CorpusLoader, WordTree};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: stats <corpus.txt>"))?;

    let analyzer = AnalyzerConfig::new(Language::Russian).build()?;
    let mut corpus = Corpus::new();
    let loader = CorpusLoader::new();
    let articles = loader.load_file(&path, &mut corpus, &analyzer)?;
    let tree = WordTree::build(corpus.registry());

    println!("articles:  {articles}");
    println!("sentences: {}", corpus.sentences().len());
    println!("stems:     {}", corpus.registry().len());
    println!("trie nodes: {}", tree.node_count());

    let mut words: Vec<_> = corpus.registry().iter().map(|(_, w)| w).collect();
    words.sort_by(|a, b| b.occurrences().cmp(&a.occurrences()));
    println!("\nmost frequent stems:");
    for word in words.iter().take(10) {
        println!(
            "  {:>6}  {} ({} forms)",
            word.occurrences(),
            word.stem(),
            word.forms().len()
        );
    }
    Ok(())
}
