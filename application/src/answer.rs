use domain::clauses::Clause;
use domain::models::GeneratedAnswer;
use domain::providers::{Generator, Retriever};
use shared::types::Result;

/// Prompt sent per clause, with the retrieved context and the clause
/// question substituted in.
const PROMPT_TEMPLATE: &str = "Use the following pieces of context to answer the question at the end. \
You are a technical proposal writer, specific to engineering, procurement, and construction services.
You have to explain how your company fulfils the enquired criteria in an RFP response.
Answer in detail how your company fulfils the criteria as mentioned in the question?
{context}
Question: {question}
Helpful Answer:";

pub fn compose_prompt(context: &str, question: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}

/// Answers a single clause: retrieve supporting segments, compose the
/// prompt, generate. The generated text is returned verbatim; the clause
/// label prefix is applied later, at render-context construction.
pub struct AnswerGenerator<R, G> {
    retriever: R,
    generator: G,
    top_k: usize,
}

impl<R: Retriever, G: Generator> AnswerGenerator<R, G> {
    pub fn new(retriever: R, generator: G, top_k: usize) -> Self {
        Self {
            retriever,
            generator,
            top_k,
        }
    }

    pub async fn answer(&self, clause: &Clause) -> Result<GeneratedAnswer> {
        let matches = self.retriever.retrieve(&clause.question, self.top_k).await?;
        let context = matches
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let prompt = compose_prompt(&context, &clause.question);
        let text = self.generator.generate(&prompt).await?;
        let sources: Vec<String> = matches.into_iter().map(|m| m.id).collect();
        eprintln!("Clause {} answered from segments [{}]", clause.label, sources.join(", "));
        Ok(GeneratedAnswer {
            label: clause.label.clone(),
            text,
            sources,
        })
    }
}
