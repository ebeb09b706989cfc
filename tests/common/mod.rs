// tests/common/mod.rs
#![allow(dead_code)]

use citegraph_core::Article;

/// The three-article scenario: A and B share title tokens, author and keyword; C is unrelated.
pub fn abc() -> Vec<Article> {
    vec![
        Article::new("generative ai in education", "Smith", "genai;education"),
        Article::new("generative ai education tools", "Smith", "genai"),
        Article::new("unrelated topic about birds", "Jones", "ornithology"),
    ]
}

/// A small mixed corpus with overlapping titles, shared authors and blank records.
pub fn corpus() -> Vec<Article> {
    vec![
        Article::new("Generative AI in higher education", "Smith, J.; Lee, K.", "genai; education"),
        Article::new("Large language models for education", "Lee, K.", "llm|education"),
        Article::new("Generative artificial intelligence and assessment", "Pérez, M.", "genai; assessment"),
        Article::new("Assessment with large language models", "Pérez, M.; Smith, J.", "llm; assessment"),
        Article::new("ChatGPT in the classroom", "Okafor, N.", "chatgpt, education"),
        Article::new("Educación e inteligencia artificial generativa", "García, L.", "IA generativa"),
        Article::new("", "", ""),
        Article::new("Bird migration patterns", "Jones", "ornithology"),
        Article::new("Generative AI in higher education", "Smith, J.", "genai"),
        Article::new("Teaching with ChatGPT: a survey", "Okafor, N.; Lee, K.", "chatgpt|survey"),
    ]
}
