use application::context::build_render_context;
use application::service::ResponseService;
use chrono::NaiveDate;
use docx_rs::{read_docx, DocumentChild};
use domain::clauses::default_clauses;
use domain::models::ProjectInfo;
use infrastructure::chunker::Chunker;
use infrastructure::embedder::Embedder;
use infrastructure::index::{SemanticRetriever, VectorIndex};
use infrastructure::loader;
use infrastructure::renderer::DocumentRenderer;
use std::io::Write;
use tests::{CannedGenerator, LetterFrequencyEmbedder};

fn test_project() -> ProjectInfo {
    ProjectInfo {
        project_name: "RTPS-II".to_string(),
        company_name: "Damodar Valley Corporation".to_string(),
        project_address: "Purulia, West Bengal".to_string(),
        project_code: "DVC/RTPS/BOP".to_string(),
        client_name: "Damodar Sharma".to_string(),
        start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
        submitter_name: "Jane Smith".to_string(),
    }
}

fn write_template(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("evaluation_template.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "Response for {{{{project_name}}}} ({{{{project_code}}}})\n\
         Submitted by {{{{submitter_name}}}} on {{{{tedate}}}}\n\
         {{{{#clauses}}}}\n\
         {{{{details}}}}\n\
         {{{{/clauses}}}}\n\
         Client: {{{{client_name}}}}"
    )
    .unwrap();
    path
}

fn docx_paragraphs(path: &std::path::Path) -> Vec<String> {
    let bytes = std::fs::read(path).unwrap();
    let docx = read_docx(&bytes).unwrap();
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn fifty_character_corpus_yields_a_three_clause_document() {
    let dir = tempfile::tempdir().unwrap();

    // 50-character corpus: one chunk at the default chunk size.
    let corpus_path = dir.path().join("knowledge.txt");
    std::fs::write(&corpus_path, "EPC bidder built two 500 MW coal plants since 2015").unwrap();
    let corpus = loader::load_corpus(&corpus_path).unwrap();
    assert_eq!(corpus.len(), 50);

    let chunker = Chunker::new(1000, 0).unwrap();
    let segments = chunker.split(&corpus);
    assert_eq!(segments.len(), 1);

    let embeddings = Embedder::new(LetterFrequencyEmbedder)
        .embed_segments("knowledge.txt", &segments)
        .await
        .unwrap();
    let index = VectorIndex::build(embeddings);
    assert_eq!(index.len(), 1);

    let retriever = SemanticRetriever::new(index, LetterFrequencyEmbedder);
    let generator = CannedGenerator::new(&[
        ("atleast 500 MW", "A1"),
        ("250 MW", "A2"),
        ("Consortium", "A3"),
    ]);
    let service = ResponseService::new(retriever, generator, default_clauses(), 4);
    let answers = service.answer_clauses().await.unwrap();
    assert_eq!(answers.len(), 3);
    // Every answer drew on the single indexed segment.
    assert!(answers.iter().all(|a| a.sources == vec!["knowledge.txt:0"]));

    let project = test_project();
    let context = build_render_context(&project, &answers);
    let renderer = DocumentRenderer::from_path(&write_template(dir.path())).unwrap();
    let rendered = renderer.render(&context).unwrap();

    let out_path = DocumentRenderer::output_path(dir.path(), "SampleResponse", &project.project_name);
    assert_eq!(
        out_path.file_name().unwrap().to_str().unwrap(),
        "SampleResponse_RTPS-II.docx"
    );
    DocumentRenderer::save(&rendered, &out_path).unwrap();

    let paragraphs = docx_paragraphs(&out_path);
    assert!(paragraphs.iter().any(|p| p.starts_with("1.1.0 :A1")));
    assert!(paragraphs.iter().any(|p| p.starts_with("1.2.0 :A2")));
    assert!(paragraphs.iter().any(|p| p.starts_with("1.3.0 :A3")));
    // Clause entries appear in clause order.
    let first = paragraphs.iter().position(|p| p.starts_with("1.1.0")).unwrap();
    let second = paragraphs.iter().position(|p| p.starts_with("1.2.0")).unwrap();
    let third = paragraphs.iter().position(|p| p.starts_with("1.3.0")).unwrap();
    assert!(first < second && second < third);
    assert!(paragraphs.iter().any(|p| p.contains("RTPS-II")));
    assert!(paragraphs.iter().any(|p| p.contains("Jane Smith")));
}

#[tokio::test]
async fn a_template_field_without_a_value_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.txt");
    std::fs::write(&template_path, "Approved by {{board_chair}}").unwrap();

    let context = build_render_context(&test_project(), &[]);
    let renderer = DocumentRenderer::from_path(&template_path).unwrap();
    let err = renderer.render(&context).unwrap_err();
    assert!(err.to_string().contains("board_chair"));
    // Nothing was written.
    assert!(std::fs::read_dir(dir.path()).unwrap().count() == 1);
}

#[tokio::test]
async fn rerunning_the_pipeline_overwrites_the_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.txt");
    std::fs::write(&template_path, "For {{project_name}}").unwrap();

    let project = test_project();
    let out_path = DocumentRenderer::output_path(dir.path(), "SampleResponse", &project.project_name);

    let renderer = DocumentRenderer::from_path(&template_path).unwrap();
    let context = build_render_context(&project, &[]);
    let rendered = renderer.render(&context).unwrap();
    DocumentRenderer::save(&rendered, &out_path).unwrap();
    let first_len = std::fs::metadata(&out_path).unwrap().len();

    DocumentRenderer::save(&rendered, &out_path).unwrap();
    assert_eq!(std::fs::metadata(&out_path).unwrap().len(), first_len);
    assert!(docx_paragraphs(&out_path).iter().any(|p| p.contains("RTPS-II")));
}
