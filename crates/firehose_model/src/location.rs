//! Source positions and the locations that anchor a diagnostic.

use crate::markup::{element, escape_attr, ToMarkup};
use serde::Serialize;

/// A column/line position within a source file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Point {
    /// Column number.
    pub column: u32,
    /// Line number.
    pub line: u32,
}

impl Point {
    /// Creates a new point at the given column and line.
    pub fn new(column: u32, line: u32) -> Self {
        Self { column, line }
    }
}

impl ToMarkup for Point {
    fn to_markup(&self) -> String {
        format!(
            "<point column=\"{}\" line=\"{}\"/>",
            self.column, self.line
        )
    }
}

/// A span between two points.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Range {
    /// Where the span starts.
    pub start: Point,
    /// Where the span ends.
    pub end: Point,
}

impl Range {
    /// Creates a new range from `start` to `end`.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl ToMarkup for Range {
    fn to_markup(&self) -> String {
        element(
            "<range>",
            "range",
            [self.start.to_markup(), self.end.to_markup()],
        )
    }
}

/// A reference to a source file by the path the tool was given.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct File {
    /// The path as given to the tool.
    pub given_path: String,
}

impl File {
    /// Creates a file reference.
    pub fn new(given_path: impl Into<String>) -> Self {
        Self {
            given_path: given_path.into(),
        }
    }
}

impl ToMarkup for File {
    fn to_markup(&self) -> String {
        if self.given_path.is_empty() {
            return String::new();
        }
        format!("<file given-path=\"{}\"/>", escape_attr(&self.given_path))
    }
}

/// A reference to a function by name.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Function {
    /// The function name.
    pub name: String,
}

impl Function {
    /// Creates a function reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ToMarkup for Function {
    fn to_markup(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!("<function name=\"{}\"/>", escape_attr(&self.name))
    }
}

/// The positional part of a [`Location`]: either a whole range or a single point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// A span of source text.
    Range(Range),
    /// A single position.
    Point(Point),
}

impl From<Range> for Anchor {
    fn from(range: Range) -> Self {
        Anchor::Range(range)
    }
}

impl From<Point> for Anchor {
    fn from(point: Point) -> Self {
        Anchor::Point(point)
    }
}

impl ToMarkup for Anchor {
    fn to_markup(&self) -> String {
        match self {
            Anchor::Range(range) => range.to_markup(),
            Anchor::Point(point) => point.to_markup(),
        }
    }
}

/// Where a diagnostic happened: file, function, and a range or point.
///
/// Every field may be absent. A location with nothing in it renders as the
/// empty string, so it never produces an empty `<location>` element.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct Location {
    /// The source file, if known.
    pub file: Option<File>,
    /// The enclosing function, if known.
    pub function: Option<Function>,
    /// The position within the file, if known.
    pub anchor: Option<Anchor>,
}

impl Location {
    /// Creates a location with a file, a function, and an optional anchor.
    pub fn new(file: File, function: Function, anchor: Option<Anchor>) -> Self {
        Self {
            file: Some(file),
            function: Some(function),
            anchor,
        }
    }

    /// Creates a location anchored at a range.
    pub fn with_range(file: File, function: Function, range: Range) -> Self {
        Self::new(file, function, Some(Anchor::Range(range)))
    }

    /// Creates a location anchored at a single point.
    pub fn with_point(file: File, function: Function, point: Point) -> Self {
        Self::new(file, function, Some(Anchor::Point(point)))
    }

    /// Returns the range, if this location is anchored at one.
    pub fn range(&self) -> Option<&Range> {
        match &self.anchor {
            Some(Anchor::Range(range)) => Some(range),
            _ => None,
        }
    }

    /// Returns the point, if this location is anchored at one.
    pub fn point(&self) -> Option<&Point> {
        match &self.anchor {
            Some(Anchor::Point(point)) => Some(point),
            _ => None,
        }
    }

    /// Returns `true` if no field of this location renders anything.
    pub fn is_empty(&self) -> bool {
        self.file.to_markup().is_empty()
            && self.function.to_markup().is_empty()
            && self.anchor.is_none()
    }
}

impl ToMarkup for Location {
    fn to_markup(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        element(
            "<location>",
            "location",
            [
                self.file.to_markup(),
                self.function.to_markup(),
                self.anchor.to_markup(),
            ],
        )
    }
}
