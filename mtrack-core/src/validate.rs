//! The standard track validation pass.
//!
//! Tracks are resolved one at a time, left to right. Each track's start is
//! constrained by the end of the track before it and by the rows that must
//! be left over for the tracks after it, so corrections made to one track
//! propagate to the next. Every correction is recorded in the message log;
//! nothing in here fails.

use log::debug;

use crate::messages::MessageLog;
use crate::models::{Region, UserTracks, Validation};

///
/// Derive a valid, non-overlapping, in-bounds set of regions from the user
/// arrays.
///
/// # Arguments
///
/// - tracks: start/end/bin arrays as entered by the user
/// - max_extent: number of rows on the sensor
///
pub fn validate_tracks(tracks: &UserTracks, max_extent: usize) -> Validation {
    let mut messages = MessageLog::new();
    let max = i64::try_from(max_extent).unwrap_or(i64::MAX);

    let mut num_tracks = tracks.start.len();
    if num_tracks > max_extent {
        messages.push(format!(
            "More tracks ({}) than rows ({}), ignoring the last {} track(s)",
            num_tracks,
            max_extent,
            num_tracks - max_extent
        ));
        num_tracks = max_extent;
    }
    let n = num_tracks as i64;

    let mut regions: Vec<Region> = Vec::with_capacity(num_tracks);
    let mut prev_end: i64 = 0;

    for (i, &user_start) in tracks.start.iter().take(num_tracks).enumerate() {
        let track = i + 1;
        // this track plus every track after it needs at least one row
        let remaining = n - i as i64;
        let last_start = max - remaining;
        let start = i64::from(user_start);

        let offset = if start < 0 {
            // later tracks still may not reach back over the previous one
            let first_free = if i > 0 { prev_end } else { 0 };
            messages.push(format!(
                "Track {} start ({}) less than 0, using {}",
                track, start, first_free
            ));
            first_free
        } else if i > 0 && start < prev_end {
            messages.push(format!(
                "Track {} start ({}) overlaps previous track ending at row {}, using {}",
                track,
                start,
                prev_end - 1,
                prev_end
            ));
            prev_end
        } else if start > max - 1 {
            messages.push(format!(
                "Track {} start ({}) beyond last row ({}), using {}",
                track,
                start,
                max - 1,
                last_start
            ));
            last_start
        } else if start > last_start {
            messages.push(format!(
                "Track {} start ({}) leaves no space for {} more track(s), using {}",
                track,
                start,
                remaining - 1,
                last_start
            ));
            last_start
        } else {
            start
        };
        debug_assert!(offset <= last_start);

        // largest size that still leaves one row for each later track
        let room = max - offset - (remaining - 1);

        let size = match tracks.end.get(i).map(|&e| i64::from(e)) {
            None => 1,
            Some(end) if end < 0 => {
                messages.push(format!(
                    "Track {} end ({}) less than 0, using single row",
                    track, end
                ));
                1
            }
            Some(end) if end < start => {
                messages.push(format!(
                    "Track {} end ({}) before start ({}), using single row",
                    track, end, start
                ));
                1
            }
            // the start was moved past the requested end, already reported
            Some(end) if end < offset => 1,
            Some(end) if end > max - 1 => {
                messages.push(format!(
                    "Track {} end ({}) beyond last row ({}), using {}",
                    track,
                    end,
                    max - 1,
                    offset + room - 1
                ));
                room
            }
            Some(end) if end + 1 - offset > room => {
                messages.push(format!(
                    "Track {} end ({}) leaves no space for {} more track(s), using {}",
                    track,
                    end,
                    remaining - 1,
                    offset + room - 1
                ));
                room
            }
            Some(end) => end + 1 - offset,
        };

        let (size, binning) = match tracks.bin.get(i).map(|&b| i64::from(b)) {
            None => (size, size),
            Some(bin) if bin < 1 => {
                messages.push(format!(
                    "Track {} binning ({}) less than 1, using 1",
                    track, bin
                ));
                (size, 1)
            }
            Some(bin) if bin > size => {
                messages.push(format!(
                    "Track {} binning ({}) greater than size ({}), using {}",
                    track, bin, size, size
                ));
                (size, size)
            }
            Some(bin) if size % bin != 0 => {
                let truncated = size - size % bin;
                messages.push(format!(
                    "Track {} binning ({}) does not divide size ({}), reducing size to {}",
                    track, bin, size, truncated
                ));
                (truncated, bin)
            }
            Some(bin) => (size, bin),
        };

        let region = Region::new(offset as usize, size as usize, binning as usize);
        debug_assert!(regions.last().is_none_or(|prev| !prev.overlaps(&region)));
        prev_end = region.next_free_row() as i64;
        regions.push(region);
    }

    debug!(
        "Validated {} track(s) against {} rows, {} correction(s)",
        regions.len(),
        max_extent,
        messages.len()
    );

    Validation::new(regions, messages)
}
