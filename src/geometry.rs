// License: MIT
// Copyright © 2026 Fontesul Engenharia

//! Endpoint extraction and WGS84 distance helpers for line-like geometries.
//!
//! Input geometries are planar coordinates in the working reference system,
//! but all geodesic measures here are taken on the WGS84 ellipsoid.

use geo::{
    Centroid, Coord, EuclideanDistance, GeodesicDistance, GeodesicLength, Geometry, LineString,
    Point,
};

/// Extracts the two endpoint coordinates of a line-like geometry.
///
/// Multi-part lines report the first vertex of the first part and the last
/// vertex of the last part.  Non-linear geometry degenerates to its centroid,
/// with both endpoints equal.  Empty geometry has no endpoints.
pub(crate) fn endpoints(geometry: &Geometry<f64>) -> Option<(Coord<f64>, Coord<f64>)> {
    match geometry {
        Geometry::Line(line) => Some((line.start, line.end)),
        Geometry::LineString(line) => line_endpoints(line),
        Geometry::MultiLineString(lines) => {
            let first = lines.0.first().and_then(|line| line.0.first().copied())?;
            let last = lines.0.last().and_then(|line| line.0.last().copied())?;
            Some((first, last))
        }
        other => other.centroid().map(|point| (point.0, point.0)),
    }
}

fn line_endpoints(line: &LineString<f64>) -> Option<(Coord<f64>, Coord<f64>)> {
    Some((line.0.first().copied()?, line.0.last().copied()?))
}

/// Minimum planar distance from `point` to the endpoint vertices of a
/// line-like geometry.  Every part of a multi-part line contributes both of
/// its ends.  Non-linear geometry is measured to its centroid; empty geometry
/// is infinitely far away.
pub(crate) fn min_endpoint_distance(geometry: &Geometry<f64>, point: &Point<f64>) -> f64 {
    let mut ends: Vec<Coord<f64>> = Vec::new();
    match geometry {
        Geometry::Line(line) => {
            ends.push(line.start);
            ends.push(line.end);
        }
        Geometry::LineString(line) => collect_ends(line, &mut ends),
        Geometry::MultiLineString(lines) => {
            for line in &lines.0 {
                if line.0.len() >= 2 {
                    collect_ends(line, &mut ends);
                }
            }
        }
        other => {
            return other
                .centroid()
                .map(|centroid| centroid.euclidean_distance(point))
                .unwrap_or(f64::INFINITY);
        }
    }
    ends.into_iter()
        .map(|end| Point::from(end).euclidean_distance(point))
        .fold(f64::INFINITY, f64::min)
}

fn collect_ends(line: &LineString<f64>, ends: &mut Vec<Coord<f64>>) {
    if let (Some(first), Some(last)) = (line.0.first(), line.0.last()) {
        ends.push(*first);
        ends.push(*last);
    }
}

/// WGS84 inverse distance in meters between two coordinates.
pub(crate) fn geodesic_distance_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Point::from(a).geodesic_distance(&Point::from(b))
}

/// WGS84 arc length in meters, summed over all parts of a multi-part line.
/// Non-linear geometry has zero length.
pub(crate) fn geodesic_length_m(geometry: &Geometry<f64>) -> f64 {
    match geometry {
        Geometry::Line(line) => line.geodesic_length(),
        Geometry::LineString(line) => line.geodesic_length(),
        Geometry::MultiLineString(lines) => lines.geodesic_length(),
        _ => 0.0,
    }
}
