use crate::answer::AnswerGenerator;
use anyhow::ensure;
use domain::clauses::Clause;
use domain::models::GeneratedAnswer;
use domain::providers::{Generator, Retriever};
use futures::stream::{self, StreamExt, TryStreamExt};
use shared::types::Result;

/// Clause generations are independent, so a few run in flight at once;
/// results are still collected in clause order.
const MAX_IN_FLIGHT: usize = 3;

/// Runs the clause loop: one retrieval-augmented generation per clause,
/// collected in clause order.
pub struct ResponseService<R, G> {
    answerer: AnswerGenerator<R, G>,
    clauses: Vec<Clause>,
}

impl<R: Retriever, G: Generator> ResponseService<R, G> {
    pub fn new(retriever: R, generator: G, clauses: Vec<Clause>, top_k: usize) -> Self {
        Self {
            answerer: AnswerGenerator::new(retriever, generator, top_k),
            clauses,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub async fn answer_clauses(&self) -> Result<Vec<GeneratedAnswer>> {
        let answers: Vec<GeneratedAnswer> = stream::iter(self.clauses.iter())
            .map(|clause| self.answerer.answer(clause))
            .buffered(MAX_IN_FLIGHT)
            .try_collect()
            .await?;
        ensure!(
            answers.len() == self.clauses.len(),
            "generated {} answers for {} clauses",
            answers.len(),
            self.clauses.len()
        );
        Ok(answers)
    }
}
