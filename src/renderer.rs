//! One-page canvas rendering for report DTOs.
//!
//! The renderer writes a fixed header followed by the DTO's pretty-printed
//! JSON as successive text lines on a single US Letter page. Everything is
//! placed at a fixed origin with constant leading; there is no wrapping and no
//! pagination. Output is produced with `printpdf`'s text-section API and the
//! built-in Helvetica font, so no font assets are required on disk.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::dto::ReportDto;
use crate::error::RenderError;

/// Literal first line of every rendered page.
pub const HEADER_LINE: &str = "AIMM renderer stub";

/// Title recorded in the PDF document metadata.
const DOCUMENT_TITLE: &str = "AIMM report (stub)";

// US Letter geometry in points, text block origin measured from the
// bottom-left corner of the page.
const PAGE_WIDTH_PT: f64 = 612.0;
const PAGE_HEIGHT_PT: f64 = 792.0;
const TEXT_ORIGIN_X_PT: f64 = 72.0;
const TEXT_ORIGIN_Y_PT: f64 = 720.0;

const FONT_SIZE_PT: f64 = 12.0;
// Default canvas leading of 1.2 times the font size.
const LINE_HEIGHT_PT: f64 = 14.4;

/// A rendered PDF held in memory.
pub struct RenderedPdf {
    /// The serialized PDF file contents.
    pub bytes: Vec<u8>,
}

/// Assembles the literal text lines that make up the page.
///
/// The page starts with [`HEADER_LINE`], the DTO's file name and a blank
/// separator, followed by one text line per pretty-printed JSON line.
pub fn page_lines(dto: &ReportDto) -> Vec<String> {
    let mut lines = vec![
        HEADER_LINE.to_owned(),
        format!("DTO: {}", dto.file_name()),
        String::new(),
    ];
    lines.extend(dto.pretty_lines());
    lines
}

/// Renders the DTO into a single-page PDF in memory.
pub fn render(dto: &ReportDto) -> Result<RenderedPdf, RenderError> {
    let lines = page_lines(dto);

    let (document, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Layer 1",
    );
    let font = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| RenderError::Pdf(err.to_string()))?;

    let canvas = document.get_page(page).get_layer(layer);
    canvas.begin_text_section();
    canvas.set_font(&font, FONT_SIZE_PT);
    canvas.set_line_height(LINE_HEIGHT_PT);
    canvas.set_text_cursor(Mm::from(Pt(TEXT_ORIGIN_X_PT)), Mm::from(Pt(TEXT_ORIGIN_Y_PT)));

    for line in &lines {
        if !line.is_empty() {
            canvas.write_text(line.as_str(), &font);
        }
        canvas.add_line_break();
    }
    canvas.end_text_section();

    debug!("rendered {} text lines onto a single page", lines.len());
    let mut bytes = Vec::new();
    document
        .save(&mut io::BufWriter::new(&mut bytes))
        .map_err(|err| RenderError::Pdf(err.to_string()))?;
    Ok(RenderedPdf { bytes })
}

/// Renders the DTO and writes the PDF to `output`, creating missing parent
/// directories and overwriting any existing file.
pub fn render_to_file(dto: &ReportDto, output: &Path) -> Result<(), RenderError> {
    let rendered = render(dto)?;

    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, &rendered.bytes).map_err(|source| RenderError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        "wrote {} bytes of PDF to {}",
        rendered.bytes.len(),
        output.display()
    );
    Ok(())
}
