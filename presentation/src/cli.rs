use application::context::build_render_context;
use application::service::ResponseService;
use clap::Parser;
use colored::Colorize;
use infrastructure::chunker::Chunker;
use infrastructure::config::{self, Config};
use infrastructure::embedder::Embedder;
use infrastructure::index::{SemanticRetriever, VectorIndex};
use infrastructure::loader;
use infrastructure::renderer::DocumentRenderer;
use infrastructure::watsonx::WatsonxClient;
use shared::confirmation::confirm_overwrite;
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rfpgen")]
#[command(about = "Generates an RFP response document from a knowledge corpus")]
pub struct Cli {
    /// Knowledge corpus file the clause answers are grounded on
    #[arg(long, default_value = "knowledge.txt")]
    pub knowledge: PathBuf,

    /// Template document (.docx, or plain text with one paragraph per line)
    #[arg(long, default_value = "Evaluation_template.docx")]
    pub template: PathBuf,

    /// JSON file of {label, question} clauses; defaults to the built-in set
    #[arg(long)]
    pub clauses: Option<PathBuf>,

    /// JSON file of project metadata; defaults to the built-in sample
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Directory the response document is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output filename prefix
    #[arg(long, default_value = "SampleResponse")]
    pub prefix: String,

    /// Segments retrieved per clause (overrides TOP_K)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Ask before overwriting an existing output document
    #[arg(long)]
    pub confirm_overwrite: bool,
}

pub struct CliApp;

impl CliApp {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        let telemetry = Telemetry::new();
        let config = Config::load()?;
        let clauses = config::load_clauses(cli.clauses.as_deref())?;
        let project = config::load_project(cli.project.as_deref())?;
        let top_k = cli.top_k.unwrap_or(config.top_k);

        println!(
            "{}",
            format!("Loading corpus from {}...", cli.knowledge.display()).green()
        );
        let corpus = loader::load_corpus(&cli.knowledge)?;
        let chunker = Chunker::new(config.chunk_size, config.chunk_overlap)?;
        let segments = chunker.split(&corpus);
        println!(
            "{}",
            format!("Split {} bytes into {} segments", corpus.len(), segments.len()).green()
        );

        let client = WatsonxClient::connect(&config).await?;
        let corpus_label = cli
            .knowledge
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "corpus".to_string());
        let embeddings = Embedder::new(client.clone())
            .embed_segments(&corpus_label, &segments)
            .await?;
        let index = VectorIndex::build(embeddings);
        println!("{}", format!("Indexed {} segments", index.len()).green());

        let retriever = SemanticRetriever::new(index, client.clone());
        let service = ResponseService::new(retriever, client, clauses, top_k);
        println!(
            "{}",
            format!("Answering {} clauses...", service.clauses().len()).green()
        );
        let answers = service.answer_clauses().await?;

        let context = build_render_context(&project, &answers);
        let renderer = DocumentRenderer::from_path(&cli.template)?;
        let rendered = renderer.render(&context)?;
        let out_path = DocumentRenderer::output_path(&cli.out_dir, &cli.prefix, &project.project_name);
        if cli.confirm_overwrite && out_path.exists() && !confirm_overwrite(&out_path)? {
            println!("{}", "Left the existing document in place.".yellow());
            return Ok(());
        }
        DocumentRenderer::save(&rendered, &out_path)?;
        println!(
            "{}",
            format!(
                "Saved {} in {}s",
                out_path.display(),
                telemetry.elapsed_seconds()
            )
            .green()
        );
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
