use crate::apply::assign::apply_structured;
use crate::dom::document::FormDocument;
use crate::error::FormError;
use crate::request::request_model::HttpRequest;
use crate::serialize::serializer::{SerializeOptions, serialize, serialize_entries};
use crate::trace::logger::OpLogger;
use crate::trace::trace::TraceEvent;
use crate::value::value_model::Value;

// ============================================================================
// serialize subcommand
// ============================================================================

pub fn cmd_serialize(
    form_path: &str,
    skip_empty: bool,
    pretty: bool,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(form_path)?;
    let entries = doc.field_entries();

    if verbose > 0 {
        eprintln!(
            "Serializing {} field entries from {}",
            entries.len(),
            form_path
        );
    }

    let report = serialize_entries(&entries, &SerializeOptions { skip_empty });
    logger.log(
        &TraceEvent::now("serialize")
            .with_fields(report.merged)
            .with_skipped(report.skipped),
    );

    let json = report.value.to_json();
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    println!("{}", rendered);

    Ok(())
}

// ============================================================================
// apply subcommand
// ============================================================================

pub fn cmd_apply(
    form_path: &str,
    data_path: &str,
    output: Option<&str>,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load_document(form_path)?;
    let payload = load_json(data_path)?;
    let value = Value::from_json(&payload);

    apply_structured(&mut doc, &value);
    logger.log(&TraceEvent::now("apply").with_assigned(doc.elements.len()));

    if verbose > 0 {
        eprintln!("Applied {} onto {}", data_path, form_path);
    }

    write_document(&doc, output)
}

// ============================================================================
// reset subcommand
// ============================================================================

pub fn cmd_reset(
    form_path: &str,
    clear_hidden: bool,
    output: Option<&str>,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load_document(form_path)?;
    doc.reset(!clear_hidden);
    logger.log(&TraceEvent::now("reset").with_fields(doc.elements.len()));
    write_document(&doc, output)
}

// ============================================================================
// request subcommand
// ============================================================================

pub fn cmd_request(
    form_path: &str,
    method: &str,
    url: &str,
    skip_empty: bool,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(form_path)?;
    let data = serialize(&doc.field_entries(), &SerializeOptions { skip_empty });

    let method: reqwest::Method = method.parse()?;
    let request = HttpRequest::new(method, url, data)?;
    logger.log(&TraceEvent::now("request").with_detail(&request.method));

    if verbose > 0 {
        eprintln!("Built request from {}", form_path);
    }

    println!("{} {}", request.method, request.resolved_url());
    if let Some(body) = request.body() {
        println!("{}", body);
    }

    Ok(())
}

// ============================================================================
// Shared helpers
// ============================================================================

fn load_document(path: &str) -> Result<FormDocument, FormError> {
    let payload = load_json(path)?;
    FormDocument::from_json(&payload)
}

fn load_json(path: &str) -> Result<serde_json::Value, FormError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FormError::Json {
        context: path.to_string(),
        source,
    })
}

fn write_document(
    doc: &FormDocument,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = serde_json::to_string_pretty(doc)?;
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}
