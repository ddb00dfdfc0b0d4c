//! Block Templater - build layered text templates into a block world
//!
//! This library parses a small layered-grid template format and places the
//! described structure into a [`World`], turned to face one of the four
//! cardinal directions.
//!
//! # Example
//!
//! ```rust
//! use block_templater::{fill, BlockPos, CommandWorld, Direction};
//!
//! let mut world = CommandWorld::new();
//! fill("house", BlockPos::new(0, 64, 0), Direction::North, &mut world).unwrap();
//! assert!(world.render().contains("setblock"));
//! ```

pub mod error;
pub mod library;
pub mod parser;
pub mod placement;
pub mod world;

pub use error::ParseError;
pub use library::{LibraryError, TemplateLibrary};
pub use parser::{parse, Template};
pub use placement::{BlockPos, Direction, Placement, PlacementConfig, PlacementError, Plan};
pub use world::{Command, CommandConfig, CommandWorld, World};

use thiserror::Error;

/// Errors that can occur while resolving and filling a template
#[derive(Debug, Error)]
pub enum FillError {
    /// Error during parsing
    #[error("parse errors in template '{name}': {}", format_parse_errors(.errors))]
    Parse {
        name: String,
        errors: Vec<ParseError>,
    },

    /// Error looking up the template
    #[error("library error: {0}")]
    Library(#[from] LibraryError),
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Template lookup plus placement settings
#[derive(Debug, Clone, Default)]
pub struct Templater {
    /// Where named templates come from
    pub library: TemplateLibrary,
    /// Placement settings
    pub placement: PlacementConfig,
}

impl Templater {
    /// Create a templater over the built-in library
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template library
    pub fn with_library(mut self, library: TemplateLibrary) -> Self {
        self.library = library;
        self
    }

    /// Set the placement configuration
    pub fn with_placement(mut self, config: PlacementConfig) -> Self {
        self.placement = config;
        self
    }

    /// Look up and parse a named template, falling back to the library default
    pub fn template_of(&self, name: &str) -> Result<Template, FillError> {
        let (resolved, source) = self.library.source_of(name)?;
        parse(source).map_err(|errors| FillError::Parse {
            name: resolved.to_string(),
            errors,
        })
    }

    /// Build the named template at `position`, facing `direction`
    ///
    /// The template is fully parsed before the first world call, so a broken
    /// template never leaves a partial structure behind.
    pub fn fill<W: World + ?Sized>(
        &self,
        name: &str,
        position: BlockPos,
        direction: Direction,
        world: &mut W,
    ) -> Result<Plan, FillError> {
        log::info!(
            "Generating template '{}' at {} with direction {}",
            name,
            position,
            direction
        );
        let template = self.template_of(name)?;
        Ok(placement::fill_template(
            &template,
            position,
            direction,
            &self.placement,
            world,
        ))
    }
}

/// Look up and parse a built-in template, falling back to `house`
pub fn template_of(name: &str) -> Result<Template, FillError> {
    Templater::default().template_of(name)
}

/// Build a built-in template with default settings
pub fn fill<W: World + ?Sized>(
    name: &str,
    position: BlockPos,
    direction: Direction,
    world: &mut W,
) -> Result<Plan, FillError> {
    Templater::default().fill(name, position, direction, world)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_builtin_house() {
        let mut world = CommandWorld::new();
        let plan = fill("house", BlockPos::new(0, 64, 0), Direction::North, &mut world).unwrap();
        assert_eq!(world.commands().len(), plan.call_count());
        assert!(matches!(world.commands()[0], Command::Fill { .. }));
        assert!(world.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_name_uses_house() {
        assert_eq!(
            template_of("castle").unwrap(),
            template_of("house").unwrap()
        );
    }

    #[test]
    fn test_broken_template_places_nothing() {
        let mut library = TemplateLibrary::empty();
        library.insert("house", "a=stone\n> offset 1 2\n a\n");
        let templater = Templater::new().with_library(library);
        let mut world = CommandWorld::new();
        let err = templater
            .fill("house", BlockPos::default(), Direction::East, &mut world)
            .unwrap_err();
        assert!(matches!(err, FillError::Parse { .. }));
        assert!(world.commands().is_empty());
    }

    #[test]
    fn test_custom_missing_block() {
        let mut library = TemplateLibrary::empty();
        library.insert("house", " q\n");
        let templater = Templater::new()
            .with_library(library)
            .with_placement(PlacementConfig::new().with_missing_block("bedrock"));
        let mut world = CommandWorld::new();
        templater
            .fill("house", BlockPos::default(), Direction::North, &mut world)
            .unwrap();
        assert_eq!(
            world.commands(),
            [Command::SetBlock {
                block: "bedrock".to_string(),
                pos: BlockPos::new(0, 0, 1)
            }]
        );
        assert_eq!(world.diagnostics().len(), 1);
    }
}
