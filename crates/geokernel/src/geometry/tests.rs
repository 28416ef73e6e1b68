use super::*;
use crate::coord::distance;

fn p(lat: f64, lon: f64) -> Position {
    Position::new(lat, lon)
}

fn ring(pts: &[(f64, f64)]) -> LinearRing {
    LinearRing::new(pts.iter().map(|&(lat, lon)| p(lat, lon)).collect())
}

fn unit_square() -> LinearRing {
    ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
}

fn square(lo: f64, hi: f64) -> LinearRing {
    ring(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi), (lo, lo)])
}

#[test]
fn square_corner_respects_boundary_flag() {
    let sq = unit_square();
    assert!(!sq.contains(p(1.0, 1.0), true));
    assert!(sq.contains(p(1.0, 1.0), false));
    // Edge midpoint behaves the same way.
    assert!(!sq.contains(p(0.5, 0.0), true));
    assert!(sq.contains(p(0.5, 0.0), false));
    assert!(sq.contains(p(0.5, 0.5), true));
    assert!(!sq.contains(p(2.0, 2.0), false));
}

#[test]
fn concave_ring_crossing_test() {
    // U shape opening north.
    let u = ring(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (3.0, 2.0),
        (3.0, 3.0),
        (0.0, 3.0),
        (0.0, 0.0),
    ]);
    assert!(u.contains(p(2.0, 0.5), true));
    assert!(!u.contains(p(2.0, 1.5), false));
    assert!(u.contains(p(0.5, 1.5), true));
}

#[test]
fn triangle_edges_ignore_the_boundary_flag() {
    // Three distinct vertices take the barycentric path; edge points count as
    // inside even when the boundary should be excluded.
    let tri = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (0.0, 0.0)]);
    assert!(tri.contains(p(0.0, 1.0), true));
    assert!(tri.contains(p(0.0, 1.0), false));
    assert!(tri.contains(p(0.5, 0.5), true));
    assert!(!tri.contains(p(2.0, 2.0), false));
}

#[test]
fn degenerate_rings_contain_nothing() {
    assert!(!LinearRing::default().contains(p(0.0, 0.0), false));
    assert!(!ring(&[(0.0, 0.0)]).contains(p(0.0, 0.0), true));
}

#[test]
fn area_sign_follows_winding() {
    let cw = unit_square();
    let expected = 12_391_399_902.07;
    assert!((cw.area() - expected).abs() / expected < 1e-9, "{}", cw.area());
    assert!(cw.is_clockwise());

    let mut ccw = cw.clone();
    ccw.coordinates.reverse();
    assert!((ccw.area() + expected).abs() / expected < 1e-9);
    assert!(!ccw.is_clockwise());

    assert_eq!(ring(&[(0.0, 0.0), (1.0, 1.0)]).area(), 0.0);
}

#[test]
fn polygon_hole_excludes_interior_and_shares_boundary() {
    let poly = Polygon::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
    assert!(poly.contains(p(2.0, 2.0), true));
    assert!(!poly.contains(p(5.0, 5.0), false));
    // On the hole's edge: boundary of the polygon.
    assert!(poly.contains(p(4.0, 5.0), false));
    assert!(!poly.contains(p(4.0, 5.0), true));
    assert!(!poly.contains(p(11.0, 5.0), false));
}

#[test]
fn polygon_area_subtracts_holes() {
    let outer = square(0.0, 10.0);
    let hole = square(4.0, 6.0);
    let poly = Polygon::new(outer.clone(), vec![hole.clone()]);
    let expected = outer.area().abs() - hole.area().abs();
    assert_eq!(poly.area(), expected);
    assert!((poly.area() - 1.183_544_111e12).abs() / 1.18e12 < 1e-6);
}

#[test]
fn circle_vertices_lie_on_radius() {
    let center = p(48.0, 11.0);
    let circle = Polygon::circle(center, 1_000.0, 64);
    let coords = &circle.exterior.coordinates;
    assert_eq!(coords.len(), 65);
    assert!(circle.exterior.is_closed());
    for c in &coords[..64] {
        assert!((distance(center, *c) - 1_000.0).abs() < 1e-4);
    }
    assert!(circle.contains(center, true));
    assert!(circle.exterior.is_clockwise());
    assert_eq!(Polygon::circle(center, 10.0, 1).exterior.coordinates.len(), 4);
}

#[test]
fn centroid_versus_center_of_mass() {
    let sq = Polygon::new(ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0), (0.0, 0.0)]), vec![]);
    assert_eq!(sq.centroid(), Some(p(1.0, 1.0)));
    assert_eq!(sq.center_of_mass(), Some(p(1.0, 1.0)));

    // Extra collinear vertices pull the vertex mean but not the area centroid.
    let tri = Polygon::new(
        ring(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (3.0, 0.0), (0.0, 0.0)]),
        vec![],
    );
    let c = tri.centroid().unwrap();
    assert!((c.latitude - 0.6).abs() < 1e-12 && (c.longitude - 1.2).abs() < 1e-12);
    let m = tri.center_of_mass().unwrap();
    assert!((m.latitude - 1.0).abs() < 1e-12 && (m.longitude - 1.0).abs() < 1e-12);

    assert!(Polygon::default().centroid().is_none());
    assert!(Polygon::default().center_of_mass().is_none());
    // Zero area falls back to the vertex mean.
    let flat = Polygon::new(ring(&[(0.0, 0.0), (0.0, 2.0), (0.0, 0.0)]), vec![]);
    assert_eq!(flat.center_of_mass(), flat.centroid());
}

#[test]
fn center_of_mass_closes_an_open_exterior() {
    let open = Polygon::new(
        ring(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (3.0, 0.0)]),
        vec![],
    );
    assert!(!open.exterior.is_closed());
    let m = open.center_of_mass().unwrap();
    assert!((m.latitude - 1.0).abs() < 1e-12 && (m.longitude - 1.0).abs() < 1e-12);
}

#[test]
fn multipolygon_contains_any_part() {
    let mp = MultiPolygon::new(vec![
        Polygon::new(square(0.0, 1.0), vec![]),
        Polygon::new(square(5.0, 6.0), vec![]),
    ]);
    assert!(mp.contains(p(0.5, 0.5), true));
    assert!(mp.contains(p(5.5, 5.5), true));
    assert!(!mp.contains(p(3.0, 3.0), false));
    let sum = mp.polygons[0].area() + mp.polygons[1].area();
    assert_eq!(mp.area(), sum);
}

#[test]
fn geometry_simplify_in_place_matches_copy() {
    let circle = Polygon::circle(p(45.0, 7.0), 50_000.0, 90);
    let mut g = Geometry::Polygon(circle);
    let copy = g.simplified(0.05, false);
    g.simplify(0.05, false);
    assert_eq!(g, copy);
    assert!(g.vertex_count() < 91);
    match &g {
        Geometry::Polygon(poly) => assert!(poly.exterior.is_closed()),
        other => panic!("unexpected {}", other.type_name()),
    }

    let point = Geometry::Point(p(1.0, 2.0));
    assert_eq!(point.simplified(10.0, false), point);
}

#[test]
fn geometry_positions_and_bbox() {
    let g = Geometry::GeometryCollection(vec![
        Geometry::Point(p(-20.0, 177.0)),
        Geometry::LineString(LineString::new(vec![p(-16.0, -178.0), p(-18.0, 179.0)])),
    ]);
    assert_eq!(g.type_name(), "GeometryCollection");
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.positions().len(), 3);
    let spanning = g.bounding_box(true).unwrap();
    assert!(spanning.spans_antimeridian());
    let wide = g.bounding_box(false).unwrap();
    assert!(!wide.spans_antimeridian());
    assert!(!g.contains(p(-18.0, 179.0), false));
}

#[test]
fn geometry_contains_areal_variants_only() {
    let poly = Geometry::Polygon(Polygon::new(unit_square(), vec![]));
    assert!(poly.contains(p(0.5, 0.5), true));
    let col = Geometry::GeometryCollection(vec![Geometry::Point(p(0.5, 0.5)), poly]);
    assert!(col.contains(p(0.5, 0.5), true));
    assert!(!Geometry::MultiPoint(vec![p(0.5, 0.5)]).contains(p(0.5, 0.5), false));
}

#[test]
fn geometry_convex_hull_is_closed_polygon() {
    let g = Geometry::MultiPoint(vec![
        p(0.0, 0.0),
        p(1.0, 1.0),
        p(0.5, 0.5),
        p(0.0, 1.0),
        p(1.0, 0.0),
    ]);
    let hull = g.convex_hull().unwrap();
    let coords = &hull.exterior.coordinates;
    assert_eq!(coords.len(), 5);
    assert_eq!(coords.first(), coords.last());
    assert!(hull.interiors.is_empty());

    let line = Geometry::LineString(LineString::new(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]));
    assert!(line.convex_hull().is_none());
}
