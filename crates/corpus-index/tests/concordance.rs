use std::path::PathBuf;

use corpus_analysis::{Analyzer, AnalyzerConfig, Language};
use corpus_index::{Corpus, CorpusLoader, WordTree, search};
use corpus_types::PartOfSpeech;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("corpus.txt")
}

fn load() -> (Corpus, WordTree, Analyzer) {
    let analyzer = AnalyzerConfig::new(Language::Russian).build().expect("analyzer");
    let mut corpus = Corpus::new();
    let loader = CorpusLoader::new();
    let count = loader
        .load_file(fixture_path(), &mut corpus, &analyzer)
        .expect("load fixture corpus");
    assert_eq!(count, 2);
    let tree = WordTree::build(corpus.registry());
    (corpus, tree, analyzer)
}

#[test]
fn ingests_articles_with_metadata() {
    let (corpus, _, _) = load();
    assert_eq!(corpus.articles().len(), 2);

    let first = &corpus.articles()[0];
    assert_eq!(first.title(), "ИНДЕКСАЦИЯ НАУЧНЫХ ТЕКСТОВ");
    assert_eq!(first.authors(), &["И.В. Петров", "А.А. Смирнова"]);
    assert_eq!(first.sentences().len(), 4);
    // The literature list never reaches the corpus.
    assert!(!first.text().contains("старая работа"));
    // Inline figure references are stripped during normalization.
    assert!(!first.text().contains("рис."));
}

#[test]
fn word_lookup_spans_articles_and_forms() {
    let (corpus, tree, analyzer) = load();
    let word = search::word(&corpus, &tree, &analyzer, "котом").expect("stem present");
    assert_eq!(word.stem(), "кот");

    let groups = corpus.occurrences(word);
    assert_eq!(groups.len(), 2);
    let titles: Vec<&str> = groups
        .iter()
        .map(|g| corpus.article(g.article).title())
        .collect();
    assert_eq!(
        titles,
        ["ИНДЕКСАЦИЯ НАУЧНЫХ ТЕКСТОВ", "ПОИСК ФРАЗ В КОРПУСЕ"]
    );
}

#[test]
fn trie_round_trips_the_registry() {
    let (corpus, tree, _) = load();
    for (id, word) in corpus.registry().iter() {
        assert_eq!(tree.lookup_stem(word.stem()), Some(id));
    }
    assert_eq!(tree.lookup_stem("нет_такой_основы"), None);
}

#[test]
fn rebuilding_the_tree_is_stable() {
    let (corpus, tree, _) = load();
    assert_eq!(WordTree::build(corpus.registry()), tree);
}

#[test]
fn phrase_search_end_to_end() {
    let (corpus, tree, analyzer) = load();
    let hits = search::phrase(&corpus, &tree, &analyzer, &["кот", "сидит"]);
    // One hit per article; inflection of the context does not matter.
    assert_eq!(hits.len(), 2);
    for id in &hits {
        assert!(corpus.sentence(*id).text().starts_with("кот сидит"));
    }
    assert!(search::phrase(&corpus, &tree, &analyzer, &["сидит", "кот"]).is_empty());
}

#[test]
fn pos_filter_narrows_forms() {
    let (corpus, tree, analyzer) = load();
    let word = search::word(&corpus, &tree, &analyzer, "сидит").expect("stem present");
    let morph = corpus_analysis::SuffixMorphology::new(Language::Russian);
    let verbs = corpus.occurrences_with_pos(word, PartOfSpeech::Verb, &morph);
    assert!(!verbs.is_empty());
    let nouns = corpus.occurrences_with_pos(word, PartOfSpeech::Noun, &morph);
    assert!(nouns.is_empty());
}
