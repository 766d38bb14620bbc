//! Names and descriptors of the types every [`TypeTable`](super::TypeTable) starts with.
//!
//! These are the value types UI objects are built from. The path engine's
//! codec recognises several of them by name.

use crate::info::{EnumInfo, EnumRepr, PropertyInfo, StructInfo};
use crate::registry::TypeTable;

/// The root class every object class derives from.
pub const OBJECT: &str = "Object";

/// `{ X, Y }`
pub const VECTOR2D: &str = "Vector2D";
/// `{ Left, Top, Right, Bottom }`
pub const MARGIN: &str = "Margin";
/// `{ R, G, B, A }`
pub const LINEAR_COLOR: &str = "LinearColor";
/// An image or box drawing description.
pub const SLATE_BRUSH: &str = "SlateBrush";
/// Per-state brushes of a button.
pub const BUTTON_STYLE: &str = "ButtonStyle";

/// How a [`SLATE_BRUSH`] is drawn.
pub const SLATE_BRUSH_DRAW_TYPE: &str = "SlateBrushDrawType";
/// How a [`SLATE_BRUSH`] image repeats.
pub const SLATE_BRUSH_TILE_TYPE: &str = "SlateBrushTileType";

/// `(name, value)` of [`SLATE_BRUSH_DRAW_TYPE`].
pub const DRAW_TYPES: [(&str, i64); 5] = [
    ("NoDrawType", 0),
    ("Box", 1),
    ("Border", 2),
    ("Image", 3),
    ("RoundedBox", 4),
];

/// `(name, value)` of [`SLATE_BRUSH_TILE_TYPE`].
pub const TILE_TYPES: [(&str, i64); 4] = [
    ("NoTile", 0),
    ("Horizontal", 1),
    ("Vertical", 2),
    ("Both", 3),
];

/// Registers every builtin type into `table`, skipping names already taken.
pub fn register_builtin_types(table: &mut TypeTable) {
    table.register(StructInfo::new(OBJECT, [PropertyInfo::identifier("Name").read_only()]));

    table.register(EnumInfo::new(SLATE_BRUSH_DRAW_TYPE, EnumRepr::U8, DRAW_TYPES));
    table.register(EnumInfo::new(SLATE_BRUSH_TILE_TYPE, EnumRepr::U8, TILE_TYPES));

    table.register(StructInfo::new(VECTOR2D, [
        PropertyInfo::float("X"),
        PropertyInfo::float("Y"),
    ]));

    table.register(StructInfo::new(MARGIN, [
        PropertyInfo::float("Left"),
        PropertyInfo::float("Top"),
        PropertyInfo::float("Right"),
        PropertyInfo::float("Bottom"),
    ]));

    table.register(StructInfo::new(LINEAR_COLOR, [
        PropertyInfo::float("R").with_metadata("ClampMin", "0.0"),
        PropertyInfo::float("G").with_metadata("ClampMin", "0.0"),
        PropertyInfo::float("B").with_metadata("ClampMin", "0.0"),
        PropertyInfo::float("A")
            .with_metadata("ClampMin", "0.0")
            .with_metadata("ClampMax", "1.0"),
    ]));

    table.register(StructInfo::new(SLATE_BRUSH, [
        PropertyInfo::object("ResourceObject", OBJECT),
        PropertyInfo::enumeration("DrawAs", SLATE_BRUSH_DRAW_TYPE),
        PropertyInfo::enumeration("Tiling", SLATE_BRUSH_TILE_TYPE),
        PropertyInfo::structure("TintColor", LINEAR_COLOR),
        PropertyInfo::structure("ImageSize", VECTOR2D),
        PropertyInfo::structure("Margin", MARGIN),
    ]));

    table.register(StructInfo::new(BUTTON_STYLE, [
        PropertyInfo::structure("Normal", SLATE_BRUSH),
        PropertyInfo::structure("Hovered", SLATE_BRUSH),
        PropertyInfo::structure("Pressed", SLATE_BRUSH),
        PropertyInfo::structure("Disabled", SLATE_BRUSH),
        PropertyInfo::structure("NormalPadding", MARGIN),
        PropertyInfo::structure("PressedPadding", MARGIN),
    ]));
}
