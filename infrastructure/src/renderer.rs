use anyhow::{anyhow, bail, ensure, Context};
use docx_rs::{read_docx, Docx, DocumentChild, Paragraph, Run};
use domain::models::{ClauseEntry, RenderContext};
use shared::types::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Renders a placeholder template into the final response document.
///
/// Templates are a flat sequence of paragraphs: a `.docx` file is read
/// paragraph by paragraph, any other extension is read as plain text lines.
/// `{{name}}` resolves against the context fields; the block between
/// `{{#clauses}}` and `{{/clauses}}` repeats once per clause entry, with
/// `{{details}}` resolving against the entry.
pub struct DocumentRenderer {
    template: Vec<String>,
}

impl DocumentRenderer {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let template = if ext.eq_ignore_ascii_case("docx") {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            let docx = read_docx(&bytes)
                .map_err(|e| anyhow!("failed to parse template {}: {}", path.display(), e))?;
            docx.document
                .children
                .iter()
                .filter_map(|child| match child {
                    DocumentChild::Paragraph(p) => Some(p.raw_text()),
                    _ => None,
                })
                .collect()
        } else {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            text.lines().map(str::to_string).collect::<Vec<_>>()
        };
        ensure!(
            !template.is_empty(),
            "template {} contains no paragraphs",
            path.display()
        );
        Ok(Self { template })
    }

    /// Substitutes the context into the template. Every placeholder the
    /// template names must have a value; a miss is a rendering error, never
    /// a silently omitted field.
    pub fn render(&self, context: &RenderContext) -> Result<Vec<String>> {
        let mut rendered = Vec::with_capacity(self.template.len() + context.clauses.len());
        let mut position = 0;
        while position < self.template.len() {
            let paragraph = &self.template[position];
            if paragraph.trim() == "{{#clauses}}" {
                let block_len = self.template[position + 1..]
                    .iter()
                    .position(|p| p.trim() == "{{/clauses}}")
                    .ok_or_else(|| anyhow!("clause block opened but never closed in template"))?;
                let block = &self.template[position + 1..position + 1 + block_len];
                for entry in &context.clauses {
                    for line in block {
                        rendered.push(substitute_entry(line, entry, &context.fields)?);
                    }
                }
                position += block_len + 2;
            } else {
                rendered.push(substitute(paragraph, &context.fields)?);
                position += 1;
            }
        }
        Ok(rendered)
    }

    /// Writes the rendered paragraphs as a fresh `.docx` document.
    pub fn save(paragraphs: &[String], path: &Path) -> Result<()> {
        let mut docx = Docx::new();
        for paragraph in paragraphs {
            docx = docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(paragraph.as_str())));
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create output document {}", path.display()))?;
        docx.build()
            .pack(file)
            .map_err(|e| anyhow!("failed to write document {}: {}", path.display(), e))?;
        Ok(())
    }

    /// Output path derived from the project name, `<prefix>_<name>.docx`.
    pub fn output_path(dir: &Path, prefix: &str, project_name: &str) -> PathBuf {
        dir.join(format!("{prefix}_{project_name}.docx"))
    }
}

fn substitute(line: &str, fields: &BTreeMap<String, String>) -> Result<String> {
    resolve_placeholders(line, |name| fields.get(name).map(String::as_str))
}

fn substitute_entry(
    line: &str,
    entry: &ClauseEntry,
    fields: &BTreeMap<String, String>,
) -> Result<String> {
    resolve_placeholders(line, |name| match name {
        "details" => Some(entry.details.as_str()),
        _ => fields.get(name).map(String::as_str),
    })
}

fn resolve_placeholders<'a>(
    line: &str,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> Result<String> {
    let mut rendered = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            bail!("unterminated placeholder in template paragraph: {line}");
        };
        let name = after[..end].trim();
        let value = lookup(name)
            .ok_or_else(|| anyhow!("template placeholder '{name}' has no value in the render context"))?;
        rendered.push_str(value);
        rest = &after[end + 2..];
    }
    rendered.push_str(rest);
    Ok(rendered)
}
