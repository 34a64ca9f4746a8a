use doc_similarity::{evaluate, evaluate_by_name, ScanParams, Strategy};

fn main() {
    let original = "The quick brown fox jumps over the lazy dog. The dog was not amused.";
    let rewritten = "A quick brown fox jumped over a lazy dog, and the dog was not amused.";

    let params = ScanParams::default();
    for strategy in Strategy::ALL {
        match evaluate(original, rewritten, strategy, &params) {
            Ok(record) => {
                println!("{}:", strategy);
                println!("  jaccard (words):  {:.4}", record.jaccard_word());
                println!("  jaccard (lemmas): {:.4}", record.jaccard_lemma());
                println!("  cosine (tf-idf):  {:.4}", record.cosine_tfidf());
                println!("  matches:          {}", record.strategy_match_count());
                println!("  {} ({:.2}%)", record.severity().headline(), record.similarity_percentage());
            }
            Err(err) => eprintln!("{strategy}: {err}"),
        }
    }

    // unknown strategy names still produce the metrics
    if let Ok(record) = evaluate_by_name(original, rewritten, "First Come First Served", &params) {
        println!("{}: {}", record.strategy_name(), record.verdict().description);
    }

    // debug
    if let Ok(record) = evaluate(original, rewritten, Strategy::RoundRobin, &ScanParams::with_chunk_size(10)) {
        println!("{:#?}", record);
    }
}
