// MIT/Apache2 License

use crate::{encode_path_with_precision, Document, ElementId, Error, PathData, Result, DEFAULT_PRECISION};
use linecrop_geometry::{check_bounds, clip_rect, default_bounds, Box2D, ClipOutcome};
use std::fmt;

/// What happened to a single element when it was cropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CropResult {
    /// The element was already inside of the bounds.
    Unchanged,
    /// The element crossed the bounds and was rewritten to the part inside of them.
    Altered,
    /// The element was entirely outside of the bounds and was removed.
    Removed,
}

/// Counts of what happened to the elements of a document during [`crop_all`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CropStats {
    pub removed: usize,
    pub altered: usize,
    pub unchanged: usize,
    /// Elements that could not be cropped and were left alone.
    pub skipped: usize,
    /// Every element that was looked at, skipped ones included.
    pub total: usize,
}

impl CropStats {
    #[inline]
    fn record(&mut self, result: CropResult) {
        match result {
            CropResult::Unchanged => self.unchanged += 1,
            CropResult::Altered => self.altered += 1,
            CropResult::Removed => self.removed += 1,
        }
        self.total += 1;
    }

    #[inline]
    fn skip(&mut self) {
        self.skipped += 1;
        self.total += 1;
    }
}

impl fmt::Display for CropStats {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} elements: {} removed, {} altered, {} unchanged, {} skipped",
            self.total, self.removed, self.altered, self.unchanged, self.skipped
        )
    }
}

/// What [`CropOptions::crop_all`] does when an element cannot be cropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BatchPolicy {
    /// Leave the element alone, count it as skipped and carry on.
    Skip,
    /// Stop at the first element that fails, leaving the rest of the document as it is.
    FailFast,
}

impl Default for BatchPolicy {
    #[inline]
    fn default() -> Self {
        Self::Skip
    }
}

/// Options for cropping a document.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CropOptions {
    /// The bounds to crop against. If this is `None`, the document's canvas is used, and if the document has
    /// no canvas, [`default_bounds`].
    pub bounds: Option<Box2D<f64>>,
    /// The number of fractional digits written for rewritten elements.
    pub precision: usize,
    pub policy: BatchPolicy,
}

impl Default for CropOptions {
    #[inline]
    fn default() -> Self {
        CropOptions {
            bounds: None,
            precision: DEFAULT_PRECISION,
            policy: BatchPolicy::default(),
        }
    }
}

impl CropOptions {
    #[must_use]
    #[inline]
    pub fn new() -> CropOptions {
        CropOptions::default()
    }

    #[must_use]
    #[inline]
    pub fn with_bounds(self, bounds: Box2D<f64>) -> CropOptions {
        CropOptions {
            bounds: Some(bounds),
            ..self
        }
    }

    #[must_use]
    #[inline]
    pub fn with_precision(self, precision: usize) -> CropOptions {
        CropOptions { precision, ..self }
    }

    #[must_use]
    #[inline]
    pub fn with_policy(self, policy: BatchPolicy) -> CropOptions {
        CropOptions { policy, ..self }
    }

    /// The bounds these options crop `document` against.
    #[must_use]
    #[inline]
    pub fn resolve_bounds<D: Document + ?Sized>(&self, document: &D) -> Box2D<f64> {
        self.bounds
            .or_else(|| document.canvas())
            .unwrap_or_else(default_bounds)
    }

    /// Crop a single element of `document`.
    ///
    /// # Errors
    ///
    /// Fails if the bounds are inverted, if the element does not exist, if its path data cannot be decoded,
    /// or if it has fewer than two points. The element is left untouched in all of these cases.
    pub fn crop_path<D: Document + ?Sized>(
        &self,
        document: &mut D,
        element: ElementId,
    ) -> Result<CropResult> {
        let bounds = self.resolve_bounds(document);
        check_bounds(&bounds)?;
        crop_element(document, element, &bounds, self.precision)
    }

    /// Crop every element of `document`, in document order.
    ///
    /// The list of elements is taken before the first one is cropped, so removing elements along the way
    /// never skips or revisits any.
    ///
    /// # Errors
    ///
    /// Fails if the bounds are inverted. Under [`BatchPolicy::FailFast`], also fails with the first error
    /// any element runs into.
    pub fn crop_all<D: Document + ?Sized>(&self, document: &mut D) -> Result<CropStats> {
        let bounds = self.resolve_bounds(document);
        check_bounds(&bounds)?;

        let mut stats = CropStats::default();
        for element in document.list() {
            match crop_element(document, element, &bounds, self.precision) {
                Ok(result) => stats.record(result),
                Err(err) => match self.policy {
                    BatchPolicy::FailFast => return Err(err),
                    BatchPolicy::Skip => {
                        log::warn!("Skipping element {}: {}", element, err);
                        stats.skip();
                    }
                },
            }
        }

        log::info!("Cropped {} against {:?}", stats, bounds);
        Ok(stats)
    }
}

/// Crop a single element of `document` against `bounds`.
///
/// Only the segment between the first two points of the path is clipped. If the element has to be
/// rewritten, the points after those two are dropped.
///
/// # Errors
///
/// Fails in the same cases as [`CropOptions::crop_path`].
#[inline]
pub fn crop_path<D: Document + ?Sized>(
    document: &mut D,
    element: ElementId,
    bounds: &Box2D<f64>,
) -> Result<CropResult> {
    CropOptions::new()
        .with_bounds(*bounds)
        .crop_path(document, element)
}

/// Crop every element of `document` against `bounds`, skipping elements that cannot be cropped.
///
/// # Errors
///
/// Fails if the bounds are inverted.
#[inline]
pub fn crop_all<D: Document + ?Sized>(document: &mut D, bounds: &Box2D<f64>) -> Result<CropStats> {
    CropOptions::new().with_bounds(*bounds).crop_all(document)
}

fn crop_element<D: Document + ?Sized>(
    document: &mut D,
    element: ElementId,
    bounds: &Box2D<f64>,
    precision: usize,
) -> Result<CropResult> {
    let data = document
        .read(element)
        .ok_or(Error::NoSuchElement(element))?;
    let path = PathData::parse(data)?;
    let segment = path
        .leading_segment()
        .ok_or_else(|| Error::NotALine(path.points.len()))?;

    let outcome = clip_rect(segment, bounds);
    log::trace!("Element {}: {:?} clips to {:?}", element, segment, outcome);

    let clipped = match outcome {
        ClipOutcome::Rejected => {
            document.remove(element)?;
            log::debug!("Element {} is out of bounds, removed it", element);
            return Ok(CropResult::Removed);
        }
        ClipOutcome::Clipped(clipped) if clipped == segment => return Ok(CropResult::Unchanged),
        ClipOutcome::Collapsed(pt) if segment.from == pt && segment.to == pt => {
            return Ok(CropResult::Unchanged)
        }
        ClipOutcome::Clipped(clipped) => [clipped.from, clipped.to],
        ClipOutcome::Collapsed(pt) => [pt, pt],
    };

    if path.points.len() > 2 {
        log::debug!(
            "Element {} has {} points past its first segment, dropping them",
            element,
            path.points.len() - 2
        );
    }

    document.write(
        element,
        encode_path_with_precision(&clipped, path.closed, precision),
    )?;
    log::debug!("Element {} crosses the bounds, rewrote it", element);
    Ok(CropResult::Altered)
}
