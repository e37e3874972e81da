// Compiling parsed documents into immutable definitions

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec2;
use log::{debug, warn};

use crate::geometry::Shape;
use crate::tileset::{
    AnimationName, Clip, ColliderLayers, EntityAnimationSet, EntityClass, Frame, ImageRef,
    IterationMode, Region, RegionClass, TilesetDefinitions, TilesetMeta,
};

use super::document::{ObjectDocument, TileDocument, TilesetDocument};
use super::LoadError;

/// Compile a parsed document into validated, shareable definitions.
///
/// Tiles carrying an `Animation` parameter block anchor clips for their
/// entity class; documents without any parameter blocks are item sheets
/// whose class and animation name come from the image file naming
/// convention. Geometry is validated structurally and failures are
/// reported, never dropped.
pub fn compile(doc: &TilesetDocument) -> Result<TilesetDefinitions, LoadError> {
    let meta = compile_meta(doc);
    let frames = base_frames(doc)?;

    let mut sets: HashMap<EntityClass, EntityAnimationSet> = HashMap::new();
    let mut anchored = false;

    for tile in &doc.tiles {
        let Some(params) = animation_parameters(tile)? else {
            continue;
        };
        anchored = true;

        // The first frame of each animation anchors its clip; the rest
        // of the tiles only carry frame images
        if params.frame_index > 1 {
            debug!("tile {}: carrier frame for {:?}", tile.id, params.name);
            continue;
        }

        let class_tag = tile
            .class
            .as_deref()
            .filter(|tag| !tag.is_empty())
            .ok_or(LoadError::MissingEntityClass { tile_id: tile.id })?;
        let class = EntityClass::from_tag(class_tag)
            .ok_or_else(|| LoadError::UnknownEntityClass(class_tag.to_string()))?;

        let clip = compile_clip(tile, &params, &frames)?;
        sets.entry(class)
            .or_insert_with(|| EntityAnimationSet::new(class))
            .insert(params.name, Arc::new(clip))
            .map_err(LoadError::from)?;
    }

    if !anchored {
        compile_item_sets(doc, &frames, &mut sets)?;
    }

    Ok(TilesetDefinitions {
        meta,
        sets: sets
            .into_iter()
            .map(|(class, set)| (class, Arc::new(set)))
            .collect(),
    })
}

fn compile_meta(doc: &TilesetDocument) -> TilesetMeta {
    TilesetMeta {
        name: doc.name.clone(),
        class: doc.class.clone(),
        tile_width: doc.tilewidth,
        tile_height: doc.tileheight,
        texture_path: doc
            .property("TexturePath")
            .and_then(|p| p.as_str())
            .map(PathBuf::from),
        fx_path: doc
            .property("FxPath")
            .and_then(|p| p.as_str())
            .map(PathBuf::from),
        collider_layers: doc
            .property("ColliderLayers")
            .and_then(|p| p.as_int())
            .map(|bits| ColliderLayers::from_bits(bits as u16)),
    }
}

/// Build a base frame (no duration yet) for every tile with an image
fn base_frames(doc: &TilesetDocument) -> Result<HashMap<u32, Arc<Frame>>, LoadError> {
    let mut frames = HashMap::new();

    for tile in &doc.tiles {
        let Some(image) = &tile.image else {
            continue;
        };

        let regions = compile_regions(tile)?;
        let frame = Frame::new(
            tile.id,
            ImageRef::new(image.as_str(), tile.imagewidth, tile.imageheight),
            regions,
            None,
        )?;
        frames.insert(tile.id, Arc::new(frame));
    }

    Ok(frames)
}

fn compile_regions(tile: &TileDocument) -> Result<Vec<Region>, LoadError> {
    let Some(group) = &tile.objectgroup else {
        return Ok(Vec::new());
    };

    group
        .objects
        .iter()
        .map(|object| compile_region(tile.id, object))
        .collect()
}

fn compile_region(tile_id: u32, object: &ObjectDocument) -> Result<Region, LoadError> {
    let shape = if let Some(points) = &object.polygon {
        Shape::Polygon(points.iter().map(|p| Vec2::new(p.x, p.y)).collect())
    } else if let Some(points) = &object.polyline {
        Shape::Polyline(points.iter().map(|p| Vec2::new(p.x, p.y)).collect())
    } else if object.ellipse {
        Shape::Ellipse {
            width: object.width,
            height: object.height,
        }
    } else {
        Shape::Rectangle {
            width: object.width,
            height: object.height,
        }
    };

    shape.validate().map_err(|source| LoadError::MalformedRegion {
        tile_id,
        object_id: object.id,
        source,
    })?;

    // Observed data carries stray numeric class tags on some objects;
    // those are authoring noise, unlike unknown entity classes
    let class = match object.class.as_deref() {
        None | Some("") => None,
        Some(tag) => match RegionClass::from_tag(tag) {
            Some(class) => Some(class),
            None => {
                warn!(
                    "tile {}, object {}: ignoring unrecognized region class {:?}",
                    tile_id, object.id, tag
                );
                None
            }
        },
    };

    let name = (!object.name.is_empty()).then(|| object.name.clone());

    Ok(Region::new(
        object.id,
        name,
        class,
        Vec2::new(object.x, object.y),
        shape,
    ))
}

/// Playback parameters carried by a tile's `Animation` property block
struct AnimationParameters {
    name: AnimationName,
    iteration: Option<IterationMode>,
    speed: f32,
    frame_index: i64,
}

fn animation_parameters(tile: &TileDocument) -> Result<Option<AnimationParameters>, LoadError> {
    let Some(prop) = tile.property("Parameters") else {
        return Ok(None);
    };
    if prop.propertytype.as_deref() != Some("Animation") {
        return Ok(None);
    }

    let name_tag = prop
        .field("AnimationName")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    let name = AnimationName::from_tag(name_tag)
        .ok_or_else(|| LoadError::UnknownAnimationName(name_tag.to_string()))?;

    let iteration = match prop.field("AnimIteration").and_then(|v| v.as_str()) {
        None => None,
        Some(tag) => Some(
            IterationMode::from_tag(tag)
                .ok_or_else(|| LoadError::UnknownIterationMode(tag.to_string()))?,
        ),
    };

    let speed = match prop.field("AnimationSpeed").and_then(|v| v.as_f64()) {
        Some(v) if v > 0.0 => v as f32,
        Some(v) => {
            warn!("tile {}: ignoring non-positive AnimationSpeed {}", tile.id, v);
            1.0
        }
        None => 1.0,
    };

    let frame_index = prop
        .field("AnimationFrame")
        .and_then(|v| v.as_i64())
        .unwrap_or(1);

    Ok(Some(AnimationParameters {
        name,
        iteration,
        speed,
        frame_index,
    }))
}

fn compile_clip(
    tile: &TileDocument,
    params: &AnimationParameters,
    frames: &HashMap<u32, Arc<Frame>>,
) -> Result<Clip, LoadError> {
    let sequence: Vec<Arc<Frame>> = if tile.animation.is_empty() {
        let frame = frames
            .get(&tile.id)
            .ok_or(LoadError::MissingImage(tile.id))?;
        vec![Arc::clone(frame)]
    } else {
        tile.animation
            .iter()
            .map(|entry| {
                let base = frames.get(&entry.tileid).ok_or(LoadError::DanglingFrame {
                    tile_id: tile.id,
                    frame_tile_id: entry.tileid,
                })?;
                let timed = base.with_duration(entry.duration)?;
                Ok(Arc::new(timed))
            })
            .collect::<Result<_, LoadError>>()?
    };

    let iteration = params.iteration.unwrap_or(IterationMode::LoopFromStart);
    Ok(Clip::new(sequence, iteration, params.speed)?)
}

/// Assemble clips for item sheets without animation parameter blocks.
///
/// Class and animation name come from the image file convention
/// (`coin0_rotating005.png`); frames join in frame-number order.
fn compile_item_sets(
    doc: &TilesetDocument,
    frames: &HashMap<u32, Arc<Frame>>,
    sets: &mut HashMap<EntityClass, EntityAnimationSet>,
) -> Result<(), LoadError> {
    let mut groups: HashMap<(EntityClass, AnimationName), Vec<(u32, u32)>> = HashMap::new();

    for tile in &doc.tiles {
        let Some(image) = &tile.image else {
            continue;
        };
        let stem = Path::new(image)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        let Some(parsed) = parse_frame_stem(stem) else {
            debug!(
                "tile {}: image {:?} does not follow the item frame naming convention",
                tile.id, image
            );
            continue;
        };

        let class = EntityClass::from_tag(parsed.class)
            .ok_or_else(|| LoadError::UnknownEntityClass(parsed.class.to_string()))?;
        let name = AnimationName::from_tag(parsed.animation)
            .ok_or_else(|| LoadError::UnknownAnimationName(parsed.animation.to_string()))?;

        groups
            .entry((class, name))
            .or_default()
            .push((parsed.frame, tile.id));
    }

    for ((class, name), mut members) in groups {
        members.sort_unstable();

        let sequence = members
            .iter()
            .map(|(_, tile_id)| {
                frames
                    .get(tile_id)
                    .map(Arc::clone)
                    .ok_or(LoadError::MissingImage(*tile_id))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let clip = Clip::new(sequence, IterationMode::LoopFromStart, 1.0)?;
        sets.entry(class)
            .or_insert_with(|| EntityAnimationSet::new(class))
            .insert(name, Arc::new(clip))
            .map_err(LoadError::from)?;
    }

    Ok(())
}

/// Parts of an item frame file stem like `coin0_rotating005`
struct FrameStem<'a> {
    class: &'a str,
    #[allow(dead_code)]
    variation: u32,
    animation: &'a str,
    frame: u32,
}

fn parse_frame_stem(stem: &str) -> Option<FrameStem<'_>> {
    let class_end = stem.find(|c: char| !c.is_ascii_alphabetic())?;
    if class_end == 0 {
        return None;
    }
    let (class, rest) = stem.split_at(class_end);

    let var_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if var_end == 0 {
        return None;
    }
    let (variation_digits, rest) = rest.split_at(var_end);
    let variation = variation_digits.parse().ok()?;

    let rest = rest.strip_prefix('_').unwrap_or(rest);

    let anim_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    if anim_end == 0 {
        return None;
    }
    let (animation, frame_digits) = rest.split_at(anim_end);

    if !frame_digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let frame = if frame_digits.is_empty() {
        0
    } else {
        frame_digits.parse().ok()?
    };

    Some(FrameStem {
        class,
        variation,
        animation,
        frame,
    })
}
