use std::path::PathBuf;

use chrono::Utc;
use cv_html::{render, Language, RenderOptions};

use crate::error::{GenerateError, GenerateResult};
use crate::fs::write_atomic;

/// One generation run: source markdown in, finished HTML out.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    pub photo: String,
    pub lang: Language,
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub output: PathBuf,
    pub section_count: usize,
    /// Best-effort diagnostics from the renderer, for the caller to print.
    /// They never affect the outcome.
    pub warnings: Vec<String>,
}

/// Read the source, parse it, render it, and write the result atomically.
pub fn generate(request: &GenerateRequest) -> GenerateResult<GenerateOutcome> {
    let text =
        std::fs::read_to_string(&request.source).map_err(|source| GenerateError::ReadSource {
            path: request.source.clone(),
            source,
        })?;

    let document = cv_parser::parse(&text);

    let options = RenderOptions {
        photo: request.photo.clone(),
        lang: request.lang,
        generated_at: Some(Utc::now()),
    };
    let rendered = render(&document, &options);

    write_atomic(&request.output, &rendered.html).map_err(|source| {
        GenerateError::WriteOutput {
            path: request.output.clone(),
            source,
        }
    })?;

    Ok(GenerateOutcome {
        output: request.output.clone(),
        section_count: document.sections.len(),
        warnings: rendered.warnings,
    })
}
