//! GeoJSON (RFC 7946) codec for the kernel's geometry types.
//!
//! - Positions are `[longitude, latitude, altitude?]`; ring closure is kept as written.
//! - Documents may be a bare geometry, a `Feature`, or a `FeatureCollection`.
//! - Feature members other than `geometry` (properties, id, bbox) pass through untouched.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geokernel::{Geometry, LineString, LinearRing, MultiPolygon, Polygon, Position};
use serde_json::{json, Map, Value};

pub fn read_document(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_document(path: &Path, doc: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Every geometry in the document, in document order. Null feature geometries are skipped.
pub fn geometries(doc: &Value) -> Result<Vec<Geometry>> {
    let mut out = Vec::new();
    visit(doc, &mut |g: Geometry| -> Result<Geometry> {
        out.push(g.clone());
        Ok(g)
    })?;
    Ok(out)
}

/// Copy of `doc` with every geometry replaced by `f(geometry)`.
pub fn map_geometries<F>(doc: &Value, mut f: F) -> Result<Value>
where
    F: FnMut(Geometry) -> Geometry,
{
    visit(doc, &mut |g: Geometry| -> Result<Geometry> { Ok(f(g)) })
}

fn visit(doc: &Value, f: &mut dyn FnMut(Geometry) -> Result<Geometry>) -> Result<Value> {
    let obj = doc
        .as_object()
        .ok_or_else(|| anyhow!("GeoJSON document must be an object"))?;
    match type_of(obj)? {
        "FeatureCollection" => {
            let features = obj
                .get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("FeatureCollection without a features array"))?;
            let mapped = features
                .iter()
                .enumerate()
                .map(|(i, feat)| visit_feature(feat, f).with_context(|| format!("feature {i}")))
                .collect::<Result<Vec<_>>>()?;
            let mut out = obj.clone();
            out.insert("features".into(), Value::Array(mapped));
            Ok(Value::Object(out))
        }
        "Feature" => visit_feature(doc, f),
        _ => Ok(to_value(&f(parse_geometry(doc)?)?)),
    }
}

fn visit_feature(feat: &Value, f: &mut dyn FnMut(Geometry) -> Result<Geometry>) -> Result<Value> {
    let obj = feat
        .as_object()
        .ok_or_else(|| anyhow!("feature must be an object"))?;
    if type_of(obj)? != "Feature" {
        bail!("expected a Feature, found {}", type_of(obj)?);
    }
    let mut out = obj.clone();
    match obj.get("geometry") {
        None | Some(Value::Null) => {}
        Some(g) => {
            out.insert("geometry".into(), to_value(&f(parse_geometry(g)?)?));
        }
    }
    Ok(Value::Object(out))
}

fn type_of(obj: &Map<String, Value>) -> Result<&str> {
    obj.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("missing string member \"type\""))
}

pub fn parse_geometry(v: &Value) -> Result<Geometry> {
    let obj = v
        .as_object()
        .ok_or_else(|| anyhow!("geometry must be an object"))?;
    let kind = type_of(obj)?;
    if kind == "GeometryCollection" {
        let items = obj
            .get("geometries")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("GeometryCollection without a geometries array"))?;
        return Ok(Geometry::GeometryCollection(
            items.iter().map(parse_geometry).collect::<Result<_>>()?,
        ));
    }
    let coords = obj
        .get("coordinates")
        .ok_or_else(|| anyhow!("{kind} without coordinates"))?;
    let geometry = match kind {
        "Point" => Geometry::Point(position(coords)?),
        "MultiPoint" => Geometry::MultiPoint(positions(coords)?),
        "LineString" => Geometry::LineString(LineString::new(positions(coords)?)),
        "MultiLineString" => Geometry::MultiLineString(
            array(coords)?
                .iter()
                .map(|c| positions(c).map(LineString::new))
                .collect::<Result<_>>()?,
        ),
        "Polygon" => Geometry::Polygon(polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon::new(
            array(coords)?.iter().map(polygon).collect::<Result<_>>()?,
        )),
        other => bail!("unsupported geometry type {other}"),
    };
    Ok(geometry)
}

fn array(v: &Value) -> Result<&Vec<Value>> {
    v.as_array()
        .ok_or_else(|| anyhow!("expected an array, found {v}"))
}

fn position(v: &Value) -> Result<Position> {
    let nums = array(v)?
        .iter()
        .map(|n| n.as_f64().ok_or_else(|| anyhow!("non-numeric ordinate {n}")))
        .collect::<Result<Vec<f64>>>()?;
    match nums.as_slice() {
        [lon, lat] => Ok(Position::new(*lat, *lon)),
        [lon, lat, alt, ..] => Ok(Position::new(*lat, *lon).with_altitude(*alt)),
        _ => bail!("position needs at least two ordinates, found {v}"),
    }
}

fn positions(v: &Value) -> Result<Vec<Position>> {
    array(v)?.iter().map(position).collect()
}

fn polygon(v: &Value) -> Result<Polygon> {
    let mut rings = array(v)?
        .iter()
        .map(|r| positions(r).map(LinearRing::new))
        .collect::<Result<Vec<_>>>()?
        .into_iter();
    let exterior = rings
        .next()
        .ok_or_else(|| anyhow!("polygon without an exterior ring"))?;
    Ok(Polygon::new(exterior, rings.collect()))
}

fn position_value(p: &Position) -> Value {
    match p.altitude {
        Some(alt) => json!([p.longitude, p.latitude, alt]),
        None => json!([p.longitude, p.latitude]),
    }
}

fn positions_value(ps: &[Position]) -> Value {
    Value::Array(ps.iter().map(position_value).collect())
}

fn polygon_value(poly: &Polygon) -> Value {
    Value::Array(
        std::iter::once(&poly.exterior)
            .chain(&poly.interiors)
            .map(|r| positions_value(&r.coordinates))
            .collect(),
    )
}

pub fn to_value(g: &Geometry) -> Value {
    let coordinates = match g {
        Geometry::Point(p) => position_value(p),
        Geometry::MultiPoint(ps) => positions_value(ps),
        Geometry::LineString(ls) => positions_value(&ls.coordinates),
        Geometry::MultiLineString(lines) => Value::Array(
            lines
                .iter()
                .map(|l| positions_value(&l.coordinates))
                .collect(),
        ),
        Geometry::Polygon(poly) => polygon_value(poly),
        Geometry::MultiPolygon(mp) => Value::Array(mp.polygons.iter().map(polygon_value).collect()),
        Geometry::GeometryCollection(items) => {
            return json!({
                "type": g.type_name(),
                "geometries": items.iter().map(to_value).collect::<Vec<_>>(),
            });
        }
    };
    json!({ "type": g.type_name(), "coordinates": coordinates })
}
