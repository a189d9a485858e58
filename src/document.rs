// MIT/Apache2 License

use crate::{Error, Result};
use linecrop_geometry::Box2D;
use std::{fmt, iter::FromIterator};

/// A handle to one path element in a [`Document`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A container of path elements that the cropper can read, rewrite and remove.
///
/// The cropper never creates elements. It only ever touches the elements returned by [`Document::list`].
pub trait Document {
    /// The elements currently in the document, in document order.
    fn list(&self) -> Vec<ElementId>;
    /// The path data of an element, or `None` if it does not exist.
    fn read(&self, element: ElementId) -> Option<&str>;
    /// Replace the path data of an element.
    fn write(&mut self, element: ElementId, data: String) -> Result;
    /// Detach an element from the document.
    fn remove(&mut self, element: ElementId) -> Result;

    /// The canvas rectangle the document is drawn on, if it knows one.
    #[inline]
    fn canvas(&self) -> Option<Box2D<f64>> {
        None
    }
}

impl<D: Document + ?Sized> Document for &mut D {
    #[inline]
    fn list(&self) -> Vec<ElementId> {
        (**self).list()
    }

    #[inline]
    fn read(&self, element: ElementId) -> Option<&str> {
        (**self).read(element)
    }

    #[inline]
    fn write(&mut self, element: ElementId, data: String) -> Result {
        (**self).write(element, data)
    }

    #[inline]
    fn remove(&mut self, element: ElementId) -> Result {
        (**self).remove(element)
    }

    #[inline]
    fn canvas(&self) -> Option<Box2D<f64>> {
        (**self).canvas()
    }
}

/// An in-memory [`Document`] holding path data strings.
///
/// Removing an element leaves a hole behind, so the ids of the other elements never change. Holes are never
/// reclaimed: memory grows with every element ever pushed, and [`len`](PathDocument::len) and
/// [`list`](Document::list) walk over the holes too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathDocument {
    elements: Vec<Option<String>>,
    canvas: Option<Box2D<f64>>,
}

impl PathDocument {
    /// Create an empty document with no canvas.
    #[must_use]
    #[inline]
    pub fn new() -> PathDocument {
        PathDocument::default()
    }

    /// Set the canvas rectangle of this document.
    #[must_use]
    #[inline]
    pub fn with_canvas(mut self, canvas: Box2D<f64>) -> PathDocument {
        self.canvas = Some(canvas);
        self
    }

    /// Add an element to the end of the document.
    #[inline]
    pub fn push(&mut self, data: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Some(data.into()));
        id
    }

    #[must_use]
    #[inline]
    pub fn get(&self, element: ElementId) -> Option<&str> {
        self.elements.get(element.0)?.as_deref()
    }

    /// The number of elements that have not been removed. This counts them one by one.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.iter().flatten().count()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the remaining elements and their path data.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &str)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(i, data)| Some((ElementId(i), data.as_deref()?)))
    }

    #[inline]
    fn slot(&mut self, element: ElementId) -> Result<&mut Option<String>> {
        match self.elements.get_mut(element.0) {
            Some(slot) if slot.is_some() => Ok(slot),
            _ => Err(Error::NoSuchElement(element)),
        }
    }
}

impl Document for PathDocument {
    #[inline]
    fn list(&self) -> Vec<ElementId> {
        self.iter().map(|(id, _)| id).collect()
    }

    #[inline]
    fn read(&self, element: ElementId) -> Option<&str> {
        self.get(element)
    }

    #[inline]
    fn write(&mut self, element: ElementId, data: String) -> Result {
        *self.slot(element)? = Some(data);
        Ok(())
    }

    #[inline]
    fn remove(&mut self, element: ElementId) -> Result {
        *self.slot(element)? = None;
        Ok(())
    }

    #[inline]
    fn canvas(&self) -> Option<Box2D<f64>> {
        self.canvas
    }
}

impl<T: Into<String>> FromIterator<T> for PathDocument {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PathDocument {
        PathDocument {
            elements: iter.into_iter().map(|data| Some(data.into())).collect(),
            canvas: None,
        }
    }
}
