//! Node shapes and their renderer tokens.

use std::str::FromStr;

use infradot_error::{Error, Result};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Node shapes understood by the renderer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Shape {
    Box,
    Diamond,
    Octagon,
    Parallelogram,
    Box3d,
    Msquare,
    InvHouse,
}

impl Shape {
    /// The complete attribute token for this shape.
    ///
    /// `Box3d` keeps its historical `share=Box3d` token; existing consumers
    /// of the generated documents depend on it.
    pub fn token(&self) -> &'static str {
        match self {
            Shape::Box => "shape=box",
            Shape::Diamond => "shape=diamond",
            Shape::Octagon => "shape=octagon",
            Shape::Parallelogram => "shape=parallelogram",
            Shape::Box3d => "share=Box3d",
            Shape::Msquare => "shape=Msquare",
            Shape::InvHouse => "shape=invhouse",
        }
    }

    /// Parse a shape name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        Shape::from_str(name)
            .map_err(|_| Error::unsupported_shape(name).with_operation("dot::parse_shape"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infradot_error::ErrorKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_shape_has_a_token() {
        for shape in Shape::iter() {
            assert!(shape.token().contains('='), "{shape} has no token");
        }
        assert_eq!(Shape::InvHouse.token(), "shape=invhouse");
        assert_eq!(Shape::Box3d.token(), "share=Box3d");
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(Shape::from_name("Msquare").unwrap(), Shape::Msquare);
        assert_eq!(Shape::from_name("BOX").unwrap(), Shape::Box);
        assert_eq!(Shape::from_name("invhouse").unwrap(), Shape::InvHouse);
        for shape in Shape::iter() {
            let name: &'static str = shape.into();
            assert_eq!(Shape::from_name(name).unwrap(), shape);
        }

        let err = Shape::from_name("hexagon").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedShape);
        assert_eq!(err.operation(), "dot::parse_shape");
        assert_eq!(err.context()[0], ("shape", "hexagon".to_string()));
    }
}
