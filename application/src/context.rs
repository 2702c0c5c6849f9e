use domain::models::{ClauseEntry, GeneratedAnswer, ProjectInfo, RenderContext};
use shared::dates;

/// Builds the render context the document template consumes: project
/// fields, document-format dates, and one `"<label> :<answer>"` entry per
/// clause, in clause order.
pub fn build_render_context(project: &ProjectInfo, answers: &[GeneratedAnswer]) -> RenderContext {
    let mut context = RenderContext::default();
    let fields = &mut context.fields;
    fields.insert("project_name".to_string(), project.project_name.clone());
    fields.insert("company_name".to_string(), project.company_name.clone());
    fields.insert("project_address".to_string(), project.project_address.clone());
    fields.insert("project_code".to_string(), project.project_code.clone());
    fields.insert("client_name".to_string(), project.client_name.clone());
    fields.insert("start_date".to_string(), dates::format_date(project.start_date));
    fields.insert("end_date".to_string(), dates::format_date(project.end_date));
    fields.insert("tedate".to_string(), dates::today());
    fields.insert("submitter_name".to_string(), project.submitter_name.clone());

    context.clauses = answers
        .iter()
        .map(|answer| ClauseEntry {
            details: format!("{} :{}", answer.label, answer.text),
        })
        .collect();
    context
}
