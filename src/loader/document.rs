// Parsed tileset document model
//
// Mirrors the JSON export of the authoring tool's tileset format
// verbatim, before any validation. Field names follow the file format,
// not this crate; compilation turns this into the definition model.

use serde::Deserialize;

use super::LoadError;

/// Top-level tileset document
#[derive(Debug, Clone, Deserialize)]
pub struct TilesetDocument {
    pub name: String,

    /// Document class tag; older exports call this "type"
    #[serde(default, alias = "type")]
    pub class: Option<String>,

    pub tilewidth: u32,
    pub tileheight: u32,

    #[serde(default)]
    pub properties: Vec<PropertyDocument>,

    #[serde(default)]
    pub tiles: Vec<TileDocument>,
}

impl TilesetDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDocument> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn tile(&self, id: u32) -> Option<&TileDocument> {
        self.tiles.iter().find(|t| t.id == id)
    }
}

/// One tile entry of a collection-of-images tileset
#[derive(Debug, Clone, Deserialize)]
pub struct TileDocument {
    pub id: u32,

    #[serde(default, alias = "type")]
    pub class: Option<String>,

    #[serde(default)]
    pub properties: Vec<PropertyDocument>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub imagewidth: u32,

    #[serde(default)]
    pub imageheight: u32,

    #[serde(default)]
    pub objectgroup: Option<ObjectGroupDocument>,

    #[serde(default)]
    pub animation: Vec<FrameDocument>,
}

impl TileDocument {
    pub fn property(&self, name: &str) -> Option<&PropertyDocument> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// One `(tileid, duration)` entry of a tile's animation table
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameDocument {
    pub tileid: u32,

    /// Display time in milliseconds
    pub duration: f32,
}

/// Hitbox object container of one tile
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectGroupDocument {
    #[serde(default)]
    pub draworder: Option<String>,

    #[serde(default)]
    pub objects: Vec<ObjectDocument>,
}

/// One hitbox object: offset plus a shape marker
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDocument {
    pub id: u32,

    /// The format always emits a name; empty means unnamed
    #[serde(default)]
    pub name: String,

    #[serde(default, alias = "type")]
    pub class: Option<String>,

    pub x: f32,
    pub y: f32,

    #[serde(default)]
    pub width: f32,

    #[serde(default)]
    pub height: f32,

    /// Marker: the object's width/height box is an ellipse
    #[serde(default)]
    pub ellipse: bool,

    #[serde(default)]
    pub polygon: Option<Vec<PointDocument>>,

    #[serde(default)]
    pub polyline: Option<Vec<PointDocument>>,
}

/// A 2D point of a polygon/polyline outline
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointDocument {
    pub x: f32,
    pub y: f32,
}

/// A named property; class-typed properties nest their fields in `value`
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDocument {
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub propertytype: Option<String>,

    #[serde(default)]
    pub value: serde_json::Value,
}

impl PropertyDocument {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn as_int(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn as_f32(&self) -> Option<f32> {
        self.value.as_f64().map(|v| v as f32)
    }

    /// Field lookup inside a class-typed property value
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.value.as_object().and_then(|map| map.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "name": "EntitiesHitbox",
        "class": "Characters",
        "tilewidth": 128,
        "tileheight": 128,
        "properties": [
            { "name": "ColliderLayers", "type": "int", "propertytype": "ColliderLayers", "value": 2 },
            { "name": "TexturePath", "type": "string", "value": "Assets/Animations/Player/" }
        ],
        "tiles": [
            {
                "id": 2,
                "class": "Mage",
                "properties": [
                    {
                        "name": "Parameters",
                        "type": "class",
                        "propertytype": "Animation",
                        "value": {
                            "AnimIteration": "LOOP_FROM_START",
                            "AnimationFrame": 1,
                            "AnimationName": "Walk",
                            "AnimationSpeed": 0.2
                        }
                    }
                ],
                "image": "../../Animations/Player/Mage/Walk/walk2.png",
                "imagewidth": 128,
                "imageheight": 128,
                "objectgroup": {
                    "draworder": "index",
                    "objects": [
                        {
                            "id": 4,
                            "name": "Ground",
                            "class": "Dynamic",
                            "x": 40, "y": 103, "width": 7, "height": 7,
                            "ellipse": true
                        },
                        {
                            "id": 2,
                            "name": "Sensor",
                            "type": "Dynamic",
                            "x": 20, "y": 54, "width": 43, "height": 58,
                            "polygon": [
                                { "x": 5, "y": 13 }, { "x": 14, "y": 3 }, { "x": 32, "y": 4 }
                            ]
                        }
                    ]
                },
                "animation": [
                    { "tileid": 2, "duration": 170 },
                    { "tileid": 3, "duration": 170 }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let doc = TilesetDocument::from_json(DOCUMENT).unwrap();

        assert_eq!(doc.name, "EntitiesHitbox");
        assert_eq!(doc.class.as_deref(), Some("Characters"));
        assert_eq!(doc.tilewidth, 128);
        assert_eq!(doc.tiles.len(), 1);
    }

    #[test]
    fn test_parse_tileset_properties() {
        let doc = TilesetDocument::from_json(DOCUMENT).unwrap();

        assert_eq!(doc.property("ColliderLayers").unwrap().as_int(), Some(2));
        assert_eq!(
            doc.property("TexturePath").unwrap().as_str(),
            Some("Assets/Animations/Player/")
        );
        assert!(doc.property("FxPath").is_none());
    }

    #[test]
    fn test_parse_nested_animation_parameters() {
        let doc = TilesetDocument::from_json(DOCUMENT).unwrap();
        let tile = doc.tile(2).unwrap();
        let params = tile.property("Parameters").unwrap();

        assert_eq!(params.propertytype.as_deref(), Some("Animation"));
        assert_eq!(
            params.field("AnimationName").and_then(|v| v.as_str()),
            Some("Walk")
        );
        assert_eq!(
            params.field("AnimationSpeed").and_then(|v| v.as_f64()),
            Some(0.2)
        );
    }

    #[test]
    fn test_parse_objects_with_class_alias() {
        // Older exports write "type" where newer ones write "class"
        let doc = TilesetDocument::from_json(DOCUMENT).unwrap();
        let group = doc.tile(2).unwrap().objectgroup.as_ref().unwrap();

        let ellipse = &group.objects[0];
        assert!(ellipse.ellipse);
        assert_eq!(ellipse.class.as_deref(), Some("Dynamic"));

        let polygon = &group.objects[1];
        assert_eq!(polygon.class.as_deref(), Some("Dynamic"));
        assert_eq!(polygon.polygon.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_parse_animation_table() {
        let doc = TilesetDocument::from_json(DOCUMENT).unwrap();
        let tile = doc.tile(2).unwrap();

        assert_eq!(tile.animation.len(), 2);
        assert_eq!(tile.animation[0].tileid, 2);
        assert_eq!(tile.animation[0].duration, 170.0);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(TilesetDocument::from_json("{ not json").is_err());
    }
}
