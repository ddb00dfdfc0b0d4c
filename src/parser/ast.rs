//! Template model produced by the parser

use std::collections::{BTreeMap, HashMap};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// One depth slice of a template: `rows[height][width]` of token keys
pub type Layer = Vec<Vec<String>>;

/// Placement offset from `> offset dx dy dz`, authored for a north facing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Offset {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Foundation spec from `> base <block> [prop:value ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    pub block: String,
    /// Free-form properties; values stay strings until consumed
    pub properties: BTreeMap<String, String>,
}

impl Base {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a property, replacing any earlier value
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Raw property value
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }
}

/// Template extent in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of layers (front to back)
    pub depth: usize,
    /// Rows per layer (bottom to top)
    pub height: usize,
    /// Keys per row
    pub width: usize,
}

impl Dimensions {
    /// Total number of cells
    pub fn volume(&self) -> usize {
        self.depth * self.height * self.width
    }
}

/// A parsed structure description
///
/// Construction goes through [`crate::parser::parse`], which guarantees at
/// least one cell and a uniform `depth × height × width` shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub(crate) tokens: HashMap<String, String>,
    pub(crate) layers: Vec<Layer>,
    pub(crate) dimensions: Dimensions,
    pub(crate) offset: Offset,
    pub(crate) base: Option<Base>,
}

impl Template {
    /// Token dictionary: key -> raw block specification
    pub fn tokens(&self) -> &HashMap<String, String> {
        &self.tokens
    }

    /// Raw specification for a token key
    pub fn token(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(|s| s.as_str())
    }

    /// Layer grid indexed `[depth][height][width]`
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Key at a grid index
    pub fn key_at(&self, i: usize, j: usize, k: usize) -> &str {
        &self.layers[i][j][k]
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn depth(&self) -> usize {
        self.dimensions.depth
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn base(&self) -> Option<&Base> {
        self.base.as_ref()
    }
}
