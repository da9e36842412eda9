//! Per-track attributes attached to every output frame.
//!
//! Each validated track is published as three integer attributes,
//! `<prefix><N>start`, `<prefix><N>end` and `<prefix><N>bin`, with `N` the
//! 1-based track number and `end` the last included row.

use mtrack_core::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAttribute {
    pub name: String,
    pub description: String,
    pub value: i64,
}

impl TrackAttribute {
    pub fn new(name: String, description: String, value: i64) -> Self {
        TrackAttribute {
            name,
            description,
            value,
        }
    }
}

/// Receiver of track attributes, e.g. the attribute list of an output frame.
pub trait AttributeSink {
    fn add(&mut self, attribute: TrackAttribute);
}

impl AttributeSink for Vec<TrackAttribute> {
    fn add(&mut self, attribute: TrackAttribute) {
        self.push(attribute);
    }
}

///
/// Build the start/end/bin attribute triple of one track.
///
/// # Arguments
///
/// - prefix: attribute name prefix, `ROI` by default
/// - track: 1-based track number
/// - region: the validated region of that track
///
pub fn track_attributes(prefix: &str, track: usize, region: &Region) -> [TrackAttribute; 3] {
    [
        TrackAttribute::new(
            format!("{}{}start", prefix, track),
            format!("Track {} start", track),
            region.offset as i64,
        ),
        TrackAttribute::new(
            format!("{}{}end", prefix, track),
            format!("Track {} end", track),
            region.end() as i64,
        ),
        TrackAttribute::new(
            format!("{}{}bin", prefix, track),
            format!("Track {} binning", track),
            region.binning as i64,
        ),
    ]
}

/// Publish the attributes of every region, in track order.
pub fn store_track_attributes<S: AttributeSink + ?Sized>(
    sink: &mut S,
    prefix: &str,
    regions: &[Region],
) {
    for (i, region) in regions.iter().enumerate() {
        for attribute in track_attributes(prefix, i + 1, region) {
            sink.add(attribute);
        }
    }
}
