use render_pdf::dto::ReportDto;
use render_pdf::renderer;
use serde_json::json;
use sha2::{Digest, Sha256};

fn render_sample_pdf() -> Vec<u8> {
    let dto = ReportDto::new(
        "report-dto.json",
        json!({
            "company": "Acme Corp",
            "metrics": { "revenue": 1250000, "margin": 0.18 },
            "peers": ["Globex", "Initech"],
        }),
    );
    renderer::render(&dto).expect("render sample pdf").bytes
}

/// Blanks out every byte between `start` (exclusive) and the first
/// `terminator` byte, leaving structural characters untouched.
fn blank_span(data: &mut [u8], start: &[u8], terminator: u8) {
    let mut index = 0;
    while index + start.len() < data.len() {
        if !data[index..].starts_with(start) {
            index += 1;
            continue;
        }
        let mut cursor = index + start.len();
        while cursor < data.len() && data[cursor] != terminator {
            if !matches!(data[cursor], b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                data[cursor] = b'0';
            }
            cursor += 1;
        }
        index = cursor;
    }
}

/// Normalizes the writer's volatile metadata: timestamps, document IDs and
/// the producer string differ between runs even for identical input.
fn scrub_volatile_metadata(bytes: &[u8]) -> Vec<u8> {
    const INFO_SPANS: &[(&[u8], u8)] = &[
        (b"/CreationDate(", b')'),
        (b"/ModDate(", b')'),
        (b"/Producer(", b')'),
        (b"/ID[", b']'),
    ];
    const XMP_TAGS: &[&str] = &[
        "xmp:CreateDate",
        "xmp:ModifyDate",
        "xmp:MetadataDate",
        "xmpMM:DocumentID",
        "xmpMM:InstanceID",
        "xmpMM:VersionID",
    ];

    let mut normalized = bytes.to_vec();
    for (start, terminator) in INFO_SPANS {
        blank_span(&mut normalized, start, *terminator);
    }
    for tag in XMP_TAGS {
        let open = format!("<{tag}>");
        blank_span(&mut normalized, open.as_bytes(), b'<');
    }
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub_volatile_metadata(bytes)).into()
}

#[test]
fn renders_non_empty_pdf() {
    let bytes = render_sample_pdf();
    assert!(!bytes.is_empty(), "rendered PDF must not be empty");
    assert!(bytes.starts_with(b"%PDF-"), "output must be a PDF file");
}

#[test]
fn rendering_is_deterministic_after_metadata_normalization() {
    let bytes_a = render_sample_pdf();
    let bytes_b = render_sample_pdf();

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "renders of identical input must match after metadata normalization"
    );
}

#[test]
fn render_to_file_creates_missing_parent_directories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = temp.path().join("out").join("nested").join("stub.pdf");
    let dto = ReportDto::new("report-dto.json", json!({"a": 1}));

    renderer::render_to_file(&dto, &output).expect("render to file");

    let written = std::fs::read(&output).expect("read output");
    assert!(written.starts_with(b"%PDF-"));
}

#[test]
fn render_to_file_overwrites_existing_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = temp.path().join("stub.pdf");
    std::fs::write(&output, b"previous contents").expect("seed output");

    let dto = ReportDto::new("report-dto.json", json!({"a": 1}));
    renderer::render_to_file(&dto, &output).expect("render to file");

    let written = std::fs::read(&output).expect("read output");
    assert!(written.starts_with(b"%PDF-"), "old contents must be replaced");
}
