//! Word document discovery and paragraph extraction.
//!
//! A `.docx` file is a ZIP of XML parts; `docx-rs` gives a typed tree of
//! `Document -> Paragraph -> Run -> Text`, with hyperlinks wrapping runs.
//! Only top-level body paragraphs are read, tables and headers are ignored.

use crate::error::LoadError;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use quiz_core::{parse_lines, QuizSequence};
use std::fs;
use std::io;
use std::path::Path;

const EXTENSION: &str = "docx";

/// Word keeps `~$name.docx` lock files next to open documents.
const LOCK_FILE_PREFIX: &str = "~$";

/// List `.docx` file names directly inside `folder`, sorted by name.
pub fn list_documents(folder: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks; directories and dangling links are skipped.
        if !path.is_file() {
            continue;
        }
        if path.extension().map_or(true, |ext| ext != EXTENSION) {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        if name.starts_with(LOCK_FILE_PREFIX) {
            continue;
        }
        names.push(name.to_string());
    }

    names.sort();
    tracing::debug!(folder = %folder.display(), count = names.len(), "listed documents");
    Ok(names)
}

/// Trimmed, non-blank paragraph text in document order.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let docx = read_docx(&bytes).map_err(|e| LoadError::Docx {
        path: path.to_path_buf(),
        message: format!("{:?}", e),
    })?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(paragraphs)
}

/// Read and parse a quiz document.
pub fn load_quiz(path: &Path) -> Result<QuizSequence, LoadError> {
    let paragraphs = read_paragraphs(path)?;
    let quiz = parse_lines(&paragraphs);
    tracing::info!(
        file = %path.display(),
        paragraphs = paragraphs.len(),
        questions = quiz.len(),
        "loaded quiz"
    );
    Ok(quiz)
}

// Runs in one paragraph are fragments of the same line.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    collect_text(&para.children, &mut text);
    text
}

fn collect_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    if let RunChild::Text(t) = rc {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_text(&link.children, text),
            _ => {}
        }
    }
}
