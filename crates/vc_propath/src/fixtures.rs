//! A small widget tree shared by the tests of this crate.

use alloc::vec;

use vc_reflect::graph::{ObjectArena, ObjectId};
use vc_reflect::info::{EnumInfo, EnumRepr, PropertyFlags, PropertyInfo, StructInfo};
use vc_reflect::registry::builtin::{
    BUTTON_STYLE, LINEAR_COLOR, MARGIN, OBJECT, SLATE_BRUSH, VECTOR2D,
};
use vc_reflect::registry::{TypeDirectory, TypeTable};
use vc_reflect::value::{DynamicMap, DynamicSet, Name, Value};

pub const PANEL: &str = "/Game/UI/Menu.Panel";
pub const LABEL: &str = "/Game/UI/Menu.Label";
pub const BUTTON: &str = "/Game/UI/Menu.Button";
pub const ORPHAN: &str = "/Game/UI/Menu.Orphan";
pub const TEXTURE: &str = "/Game/Textures/T_Button";

pub struct Fixture {
    pub types: TypeTable,
    pub arena: ObjectArena,
    pub panel: ObjectId,
    pub label: ObjectId,
    pub button: ObjectId,
    pub button_slot: ObjectId,
    pub orphan: ObjectId,
    pub texture: ObjectId,
}

pub fn types() -> TypeTable {
    let mut types = TypeTable::new();

    types.register(EnumInfo::sequential("WidgetVisibility", EnumRepr::U8, [
        "Visible",
        "Collapsed",
        "Hidden",
        "HitTestInvisible",
        "WidgetVisibility_MAX",
    ]));
    types.register(EnumInfo::sequential("Rarity", EnumRepr::U8, ["Common", "Rare", "Epic"]));

    types.register(StructInfo::new("ItemEntry", [
        PropertyInfo::string("Name"),
        PropertyInfo::int("Count").with_metadata("ClampMin", "0"),
        PropertyInfo::enumeration("Rarity", "Rarity"),
    ]));
    types.register(StructInfo::new("ButtonSettings", [
        PropertyInfo::int("ClickCount"),
        PropertyInfo::string("Label"),
        PropertyInfo::structure("Size", VECTOR2D),
    ]));

    types.register(StructInfo::new("Texture2D", []).with_super(OBJECT));
    types.register(
        StructInfo::new("Widget", [
            PropertyInfo::bool("bIsEnabled").with_category("Behavior"),
            PropertyInfo::bool("bIsVariable"),
            PropertyInfo::float("RenderOpacity")
                .with_category("Rendering")
                .with_metadata("ClampMin", "0.0")
                .with_metadata("ClampMax", "1.0")
                .with_metadata("UIMin", "0")
                .with_metadata("UIMax", "1"),
            PropertyInfo::enumeration("Visibility", "WidgetVisibility"),
            PropertyInfo::text("ToolTipText"),
            PropertyInfo::string("DesignerNotes").with_flags(PropertyFlags::empty()),
        ])
        .with_super(OBJECT),
    );
    types.register(StructInfo::new("Panel", []).with_super("Widget"));
    types.register(
        StructInfo::new("Button", [
            PropertyInfo::structure("Style", BUTTON_STYLE),
            PropertyInfo::structure("Brush", SLATE_BRUSH),
            PropertyInfo::structure("Tint", LINEAR_COLOR),
            PropertyInfo::structure("Settings", "ButtonSettings"),
            PropertyInfo::set("Tags", PropertyInfo::identifier("Tags")),
            PropertyInfo::list("Items", PropertyInfo::structure("Items", "ItemEntry")),
            PropertyInfo::list("Offsets", PropertyInfo::int("Offsets")),
            PropertyInfo::list("Modes", PropertyInfo::enumeration("Modes", "WidgetVisibility")),
            PropertyInfo::map("Scores", PropertyInfo::int("Key"), PropertyInfo::float("Value")),
            PropertyInfo::map(
                "Counts",
                PropertyInfo::enumeration("Key", "Rarity"),
                PropertyInfo::int("Value"),
            ),
            PropertyInfo::map(
                "Labels",
                PropertyInfo::identifier("Key"),
                PropertyInfo::string("Value"),
            ),
            PropertyInfo::map(
                "Bounds",
                PropertyInfo::float("Key"),
                PropertyInfo::float("Value"),
            ),
            PropertyInfo::byte("Level")
                .with_metadata("ClampMax", "10")
                .with_metadata("UIMax", "ten"),
            PropertyInfo::int("InternalId").read_only(),
            PropertyInfo::object("Owner", "Widget"),
            PropertyInfo::object("Icon", "Texture2D"),
        ])
        .with_super("Widget"),
    );
    types.register(
        StructInfo::new("CanvasPanelSlot", [
            PropertyInfo::structure("Padding", MARGIN),
            PropertyInfo::int("ZOrder"),
            PropertyInfo::structure("Size", VECTOR2D),
            PropertyInfo::bool("bAutoSize"),
        ])
        .with_super(OBJECT),
    );

    types
}

fn item(types: &TypeTable, name: &str, count: i64, rarity: i64) -> Value {
    let mut entry = types.instantiate("ItemEntry");
    entry.insert("Name", Value::from(name));
    entry.insert("Count", Value::Int(count));
    entry.insert("Rarity", Value::Enum(rarity));
    Value::Struct(entry)
}

pub fn fixture() -> Fixture {
    let types = types();
    let mut arena = ObjectArena::new();

    let panel = arena.spawn(&types, "Panel", PANEL);
    let label = arena.spawn(&types, "Widget", LABEL);
    let label_slot = arena.spawn(&types, "CanvasPanelSlot", "/Game/UI/Menu.Label.Slot");
    let button = arena.spawn(&types, "Button", BUTTON);
    let button_slot = arena.spawn(&types, "CanvasPanelSlot", "/Game/UI/Menu.Button.Slot");
    let orphan = arena.spawn(&types, "Widget", ORPHAN);
    let texture = arena.spawn(&types, "Texture2D", TEXTURE);

    arena.attach_child(panel, label);
    arena.attach_child(panel, button);
    arena.set_slot(label, Some(label_slot));
    arena.set_slot(button, Some(button_slot));

    let items = vec![
        item(&types, "Sword", 1, 0),
        item(&types, "Shield", 2, 1),
        item(&types, "Potion", 3, 2),
    ];
    let tags: DynamicSet = [Value::Name(Name::from("admin")), Value::Name(Name::from("ops"))]
        .into_iter()
        .collect();
    let scores: DynamicMap = [
        (Value::Int(42), Value::Float(1.5)),
        (Value::Int(7), Value::Float(2.0)),
    ]
    .into_iter()
    .collect();
    let counts: DynamicMap = [(Value::Enum(1), Value::Int(3))].into_iter().collect();
    let labels: DynamicMap = [(Value::Name(Name::from("Title")), Value::from("Hello"))]
        .into_iter()
        .collect();

    if let Some(object) = arena.get_mut(button) {
        let storage = object.storage_mut();
        storage.insert("Items", Value::List(items));
        let offsets = vec![Value::Int(10), Value::Int(20), Value::Int(30)];
        storage.insert("Offsets", Value::List(offsets));
        storage.insert("Tags", Value::Set(tags));
        storage.insert("Scores", Value::Map(scores));
        storage.insert("Counts", Value::Map(counts));
        storage.insert("Labels", Value::Map(labels));
        storage.insert("Owner", Value::Object(Some(panel)));
    }

    Fixture {
        types,
        arena,
        panel,
        label,
        button,
        button_slot,
        orphan,
        texture,
    }
}
