//! Hand rendered reports to the browser as file downloads.

use dashboard_core::error_message;
use dashboard_core::export::{
    PDF_MIME, Report, XLSX_MIME, excel, pdf, report_filename,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};

use crate::config;

const REVOKE_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Excel => XLSX_MIME,
            ExportFormat::Pdf => PDF_MIME,
        }
    }
}

/// Render `report` and start the download. Returns the file name, or a
/// message suitable for a toast.
pub fn export_report(
    report: &Report,
    kind: &str,
    format: ExportFormat,
) -> Result<String, String> {
    let bytes = match format {
        ExportFormat::Excel => excel::render(report),
        ExportFormat::Pdf => pdf::render(report, config().pdf_row_cap),
    }
    .map_err(|e| error_message(&e))?;

    let filename = report_filename(
        kind,
        report.subject.as_deref(),
        report.generated_on,
        format.extension(),
    );
    trigger_download(&bytes, &filename, format.mime()).map_err(|e| {
        tracing::error!(error = ?e, %filename, "download failed");
        "Could not start the download".to_string()
    })?;
    tracing::info!(%filename, size = bytes.len(), "report exported");
    Ok(filename)
}

/// Save `bytes` as `filename` through a temporary object URL.
pub fn trigger_download(
    bytes: &[u8],
    filename: &str,
    mime: &str,
) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // Revoking in the same tick can cancel the download in some browsers.
    let _ = Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            tracing::warn!(error = ?e, "could not revoke download url");
        }
    })
    .forget();
    Ok(())
}
