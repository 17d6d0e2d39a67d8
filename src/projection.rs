//! UTM to geographic reprojection.
//!
//! Transect coordinates arrive either as WGS84 longitude/latitude or as
//! WGS84 / UTM north easting/northing. The zone comes from the files
//! themselves, usually with a latitude band letter attached ("11T", "13S").
//!
//! The transverse Mercator series below are the classic USGS (Snyder)
//! expansions, accurate to well under a millimetre inside a zone.

use crate::models::{Crs, GeoPoint};
use regex::Regex;
use std::f64::consts::PI;
use std::fmt;
use std::sync::OnceLock;

/// UTM zone number, 1..=60
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtmZone(u8);

impl UtmZone {
    pub fn new(zone: u8) -> Option<Self> {
        (1..=60).contains(&zone).then_some(Self(zone))
    }

    /// Parse a zone cell such as `11`, `11T`, `13 S` or `13.0`.
    ///
    /// The trailing letter is a latitude band, not a hemisphere: every site
    /// here is in the northern hemisphere.
    pub fn parse(value: &str) -> Option<Self> {
        static ZONE_PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = ZONE_PATTERN.get_or_init(|| {
            Regex::new(r"^\s*(\d{1,2})(?:\.0+)?\s*([C-Xc-x])?\s*$").expect("valid zone regex")
        });

        let captures = pattern.captures(value)?;
        let zone = captures.get(1)?.as_str().parse::<u8>().ok()?;
        Self::new(zone)
    }

    /// Zone from a numeric cell
    pub fn from_number(value: f64) -> Option<Self> {
        if value.fract() != 0.0 || !(1.0..=60.0).contains(&value) {
            return None;
        }
        Self::new(value as u8)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn crs(&self) -> Crs {
        Crs::UtmNorth(self.0)
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}N", self.0)
    }
}

/// Geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy)]
pub struct GeoBoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Approximate extent of Idaho
    pub fn idaho() -> Self {
        Self::new(-117.25, 41.98, -111.04, 49.0)
    }

    /// Approximate extent of Colorado
    pub fn colorado() -> Self {
        Self::new(-109.06, 36.99, -102.04, 41.0)
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lon >= self.min_lon
            && point.lon <= self.max_lon
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}

/// WGS84 / UTM projection for one northern-hemisphere zone.
#[derive(Debug, Clone, Copy)]
pub struct UtmProjection {
    /// Central meridian in degrees
    central_meridian: f64,
}

impl UtmProjection {
    /// WGS84 equatorial radius in meters
    const A: f64 = 6_378_137.0;
    /// WGS84 flattening
    const F: f64 = 1.0 / 298.257_223_563;
    /// Scale factor at the central meridian
    const K0: f64 = 0.9996;
    const FALSE_EASTING: f64 = 500_000.0;

    pub fn new(zone: UtmZone) -> Self {
        let central_meridian = (zone.number() as f64 - 1.0) * 6.0 - 180.0 + 3.0;
        Self { central_meridian }
    }

    /// Geographic point to (easting, northing) in meters
    pub fn project(&self, point: &GeoPoint) -> (f64, f64) {
        let lat_rad = point.lat * PI / 180.0;
        let lon_rad = point.lon * PI / 180.0;
        let lon0_rad = self.central_meridian * PI / 180.0;

        let e2 = 2.0 * Self::F - Self::F * Self::F;
        let e_prime2 = e2 / (1.0 - e2);

        let n = Self::A / (1.0 - e2 * lat_rad.sin().powi(2)).sqrt();
        let t = lat_rad.tan().powi(2);
        let c = e_prime2 * lat_rad.cos().powi(2);
        let a_coef = (lon_rad - lon0_rad) * lat_rad.cos();

        // Meridian arc length
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let m = Self::A
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat_rad
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat_rad).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat_rad).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * lat_rad).sin());

        let easting = Self::K0
            * n
            * (a_coef
                + (1.0 - t + c) * a_coef.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * e_prime2) * a_coef.powi(5) / 120.0)
            + Self::FALSE_EASTING;

        let northing = Self::K0
            * (m + n
                * lat_rad.tan()
                * (a_coef.powi(2) / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a_coef.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * e_prime2) * a_coef.powi(6)
                        / 720.0));

        (easting, northing)
    }

    /// (easting, northing) in meters to a geographic point
    pub fn unproject(&self, easting: f64, northing: f64) -> GeoPoint {
        let x = easting - Self::FALSE_EASTING;
        let y = northing;

        let e2 = 2.0 * Self::F - Self::F * Self::F;
        let e_prime2 = e2 / (1.0 - e2);
        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

        let m = y / Self::K0;
        let mu = m / (Self::A * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        // Footpoint latitude
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let n1 = Self::A / (1.0 - e2 * phi1.sin().powi(2)).sqrt();
        let t1 = phi1.tan().powi(2);
        let c1 = e_prime2 * phi1.cos().powi(2);
        let r1 = Self::A * (1.0 - e2) / (1.0 - e2 * phi1.sin().powi(2)).powf(1.5);
        let d = x / (n1 * Self::K0);

        let lat = phi1
            - (n1 * phi1.tan() / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * e_prime2) * d.powi(4)
                        / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * e_prime2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lon = self.central_meridian * PI / 180.0
            + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * e_prime2 + 24.0 * t1 * t1)
                    * d.powi(5)
                    / 120.0)
                / phi1.cos();

        GeoPoint::new(lon * 180.0 / PI, lat * 180.0 / PI)
    }
}
