//! Upload Flow State
//!
//! Tracks the selected image, its preview, the in-flight flag and the last
//! classification. Failures are reduced to a single user-facing
//! [`UploadAlert`]; the underlying transport error is only logged by the
//! caller.

use thiserror::Error;

use crate::dto::{ClassificationResult, ReportRequest};
use crate::mapper::ResultPresentation;
use crate::transport::{PredictTransport, TransportError};

/// Anything that can be uploaded as the screening image
pub trait ImageFile {
    fn file_name(&self) -> String;
}

/// An image held in memory, as the CLI reads it from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

impl ImageFile for SelectedImage {
    fn file_name(&self) -> String {
        self.name.clone()
    }
}

/// The only messages the upload page ever shows on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadAlert {
    #[error("Please select an image first!")]
    NoFileSelected,

    #[error("Error processing the image. Try again.")]
    AnalyzeFailed,

    #[error("Failed to generate PDF report.")]
    ReportFailed,
}

/// Upload page state
#[derive(Debug, Clone)]
pub struct UploadFlow<F> {
    file: Option<F>,
    preview: Option<String>,
    loading: bool,
    result: Option<ClassificationResult>,
    presentation: Option<ResultPresentation>,
}

impl<F> Default for UploadFlow<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            loading: false,
            result: None,
            presentation: None,
        }
    }
}

impl<F> UploadFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the picked file. The preview is cleared until
    /// [`UploadFlow::set_preview`] delivers the new one.
    pub fn select_file(&mut self, file: Option<F>) {
        self.file = file;
        self.preview = None;
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn presentation(&self) -> Option<&ResultPresentation> {
        self.presentation.as_ref()
    }

    /// Start an analysis: raises the loading flag and hands back the file
    /// to upload, or alerts when nothing is selected.
    pub fn begin_analyze(&mut self) -> Result<&F, UploadAlert> {
        match self.file {
            Some(ref file) => {
                self.loading = true;
                Ok(file)
            }
            None => Err(UploadAlert::NoFileSelected),
        }
    }

    /// Complete an analysis. On success the result is run through the
    /// mapper; on failure the previous result is left in place.
    pub fn finish_analyze(
        &mut self,
        result: Result<ClassificationResult, TransportError>,
    ) -> Result<(), UploadAlert> {
        self.loading = false;

        let result = result.map_err(|_| UploadAlert::AnalyzeFailed)?;
        self.presentation = Some(result.presentation());
        self.result = Some(result);
        Ok(())
    }

    /// Upload the selected file and map the prediction
    pub async fn analyze<T>(&mut self, transport: &T) -> Result<(), UploadAlert>
    where
        T: PredictTransport<File = F> + ?Sized,
    {
        let file = self.begin_analyze()?;
        let result = transport.predict(file).await;
        self.finish_analyze(result)
    }
}

impl<F: ImageFile> UploadFlow<F> {
    /// Attach the data-URL preview read from `file_name`. Ignored unless
    /// that file is still the selected one.
    pub fn set_preview(&mut self, file_name: &str, data_url: impl Into<String>) {
        if self.file.as_ref().map(ImageFile::file_name).as_deref() == Some(file_name) {
            self.preview = Some(data_url.into());
        }
    }

    /// Report payload for the current result. `None` until there is a
    /// prediction with a confidence for a selected file.
    pub fn report_request(&self) -> Option<ReportRequest> {
        let result = self.result.as_ref()?;
        let confidence = result.confidence?;
        let file = self.file.as_ref()?;

        Some(ReportRequest::new(
            result.prediction.clone(),
            confidence,
            file.file_name(),
        ))
    }

    /// Fetch the PDF report bytes.
    ///
    /// Returns `Ok(None)` without any request when there is nothing to
    /// report on.
    pub async fn download_report<T>(&self, transport: &T) -> Result<Option<Vec<u8>>, UploadAlert>
    where
        T: PredictTransport<File = F> + ?Sized,
    {
        let Some(request) = self.report_request() else {
            return Ok(None);
        };

        transport
            .generate_report(&request)
            .await
            .map(Some)
            .map_err(|_| UploadAlert::ReportFailed)
    }
}
