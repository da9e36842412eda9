use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::*;

use mtrack_core::{
    BinningLimit, Region, StandardPolicy, TrackArray, TrackValidator, UniformBinning, UserTracks,
    Validation, ValidationPolicy,
};

#[fixture]
fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn random_array(rng: &mut StdRng, max_len: usize, low: i32, high: i32) -> Vec<i32> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(low..=high)).collect()
}

fn random_tracks(rng: &mut StdRng, max_extent: usize) -> UserTracks {
    let span = max_extent as i32 + 20;
    UserTracks::new(
        random_array(rng, 12, -10, span),
        random_array(rng, 12, -10, span),
        random_array(rng, 12, -2, 16),
    )
}

fn assert_layout_is_valid(validation: &Validation, tracks: &UserTracks, max_extent: usize) {
    assert_eq!(validation.len(), tracks.len().min(max_extent));

    let mut prev: Option<Region> = None;
    for region in &validation.regions {
        assert!(region.size >= 1, "{region} has no rows");
        assert!(region.binning >= 1, "{region} has no binning");
        assert!(
            region.binning <= region.size,
            "{region} binned past its size"
        );
        assert_eq!(
            region.size % region.binning,
            0,
            "{region} not evenly binned"
        );
        assert!(
            region.offset + region.size <= max_extent,
            "{region} outside {max_extent} rows"
        );
        if let Some(prev) = prev {
            assert!(!prev.overlaps(region), "{region} overlaps {prev}");
            assert!(
                region.offset >= prev.next_free_row(),
                "{region} before {prev}"
            );
        }
        prev = Some(*region);
    }
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_random_input_always_gives_a_valid_layout(mut rng: StdRng) {
        for _ in 0..2000 {
            let max_extent = rng.random_range(0..=40);
            let tracks = random_tracks(&mut rng, max_extent);
            let validation = StandardPolicy.validate(&tracks, max_extent);
            assert_layout_is_valid(&validation, &tracks, max_extent);
        }
    }

    #[rstest]
    fn test_stricter_policies_keep_the_layout_valid(mut rng: StdRng) {
        let policies: Vec<Box<dyn ValidationPolicy>> =
            vec![Box::new(BinningLimit::new(3)), Box::new(UniformBinning)];
        for _ in 0..1000 {
            let max_extent = rng.random_range(1..=40);
            let tracks = random_tracks(&mut rng, max_extent);
            for policy in &policies {
                let validation = policy.validate(&tracks, max_extent);
                assert_layout_is_valid(&validation, &tracks, max_extent);
            }
        }
    }

    #[rstest]
    fn test_revalidation_reproduces_messages(mut rng: StdRng) {
        for _ in 0..200 {
            let max_extent = rng.random_range(1..=40);
            let mut validator = TrackValidator::new(max_extent);
            validator.set_user_tracks(random_tracks(&mut rng, max_extent));

            let first = validator.snapshot();
            validator.validate();
            assert_eq!(*first, *validator.snapshot());
        }
    }

    #[rstest]
    fn test_clean_input_is_kept_verbatim() {
        let mut validator = TrackValidator::new(256);
        validator.set_user_array(TrackArray::Start, vec![0, 64, 128, 192]);
        validator.set_user_array(TrackArray::End, vec![31, 95, 159, 255]);
        validator.set_user_array(TrackArray::Bin, vec![1, 2, 4, 8]);

        assert!(validator.messages().is_empty());
        assert_eq!(
            validator.regions(),
            &[
                Region::new(0, 32, 1),
                Region::new(64, 32, 2),
                Region::new(128, 32, 4),
                Region::new(192, 64, 8),
            ]
        );
        assert_eq!(validator.total_data_height(), 32 + 16 + 8 + 8);
    }

    #[rstest]
    fn test_shrinking_the_sensor_squeezes_tracks() {
        let mut validator = TrackValidator::new(100);
        validator.set_user_array(TrackArray::Start, vec![10, 50, 90]);
        assert!(validator.messages().is_empty());

        validator.set_max_extent(3);
        assert_eq!(
            validator.regions(),
            &[
                Region::new(0, 1, 1),
                Region::new(1, 1, 1),
                Region::new(2, 1, 1),
            ]
        );
        assert_eq!(validator.messages().len(), 3);

        validator.set_max_extent(2);
        assert_eq!(validator.region_count(), 2);
        assert!(validator.messages()[0].contains("than rows (2)"));
    }
}
