#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use maxrec::PackingError;
    use maxrec::entities::{Orientation, PackingInput, PackingResult, Piece, Sheet, Spacing};
    use maxrec::packing::{PackingConfig, evaluate, pack, pack_batch};
    use maxrec::util::assertions;
    use test_case::test_case;

    fn input(sw: f64, sh: f64, pw: f64, ph: f64) -> PackingInput {
        PackingInput::new(Sheet::new(sw, sh), Piece::new(pw, ph))
    }

    fn no_rotation() -> PackingConfig {
        PackingConfig {
            allow_rotation: false,
            ..PackingConfig::default()
        }
    }

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn normal_grid_with_vertical_spacing() {
        let input = input(2000.0, 1000.0, 945.0, 200.0).with_spacing(Spacing::new(0.0, 10.0));

        let candidates = evaluate(&input, &PackingConfig::default()).unwrap();
        let normal = candidates[0];
        assert_eq!(normal.orientation, Orientation::Normal);
        assert_eq!((normal.cols, normal.rows, normal.count()), (2, 4, 8));

        let result = pack(&input, &no_rotation()).unwrap();
        assert_eq!(result.count(), 8);
        assert_eq!(result.orientation, Orientation::Normal);
        //first piece of the second row
        assert_eq!((result.placements[2].x, result.placements[2].y), (0.0, 210.0));
    }

    #[test]
    fn rotation_wins_when_it_fits_more() {
        let input = input(2000.0, 1000.0, 945.0, 200.0).with_spacing(Spacing::new(0.0, 10.0));

        //rotated: 10 columns of 200 wide, a single row of 945 high
        let result = pack(&input, &PackingConfig::default()).unwrap();
        assert_eq!(result.orientation, Orientation::Rotated);
        assert_eq!((result.cols, result.rows, result.count()), (10, 1, 10));
        assert!(result.placements.iter().all(|p| p.rotated));
        assert!(
            result
                .placements
                .iter()
                .all(|p| p.width == 200.0 && p.height == 945.0)
        );
    }

    #[test]
    fn oversized_piece_gives_empty_result() {
        let result = pack(&input(100.0, 100.0, 150.0, 200.0), &PackingConfig::default()).unwrap();
        assert_eq!(result.count(), 0);
        assert!(result.placements.is_empty());
        assert_eq!(result.yield_ratio, 0.0);
        assert_eq!(result.wasted_area, 10_000.0);
        assert_eq!(result.orientation, Orientation::Normal);
    }

    #[test]
    fn oversized_piece_on_a_tiny_sheet_gives_empty_result() {
        let result = pack(&input(1e-9, 1e-9, 1.9e-9, 1.9e-9), &PackingConfig::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.yield_ratio, 0.0);
        assert_eq!(result.wasted_area, 1e-9 * 1e-9);
    }

    #[test_case(1e-9; "nanometres")]
    #[test_case(1e-3; "metres")]
    #[test_case(1.0; "millimetres")]
    #[test_case(1e9; "huge units")]
    fn unit_does_not_change_the_layout(scale: f64) {
        let input = input(1000.0 * scale, 500.0 * scale, 300.0 * scale, 200.0 * scale)
            .with_spacing(Spacing::uniform(10.0 * scale));
        let result = pack(&input, &PackingConfig::default()).unwrap();

        assert_eq!((result.cols, result.rows), (3, 2));
        assert_eq!(result.orientation, Orientation::Normal);
        assert!(assertions::placements_within_sheet(&result));
        assert!(assertions::placements_disjoint(&result));
        assert!(assertions::result_is_consistent(&result));
        assert!(approx_eq!(f64, result.yield_ratio, 0.72, epsilon = 1e-12));
    }

    #[test]
    fn tiny_pieces_are_counted_exactly() {
        let err = pack(&input(1e-10, 1e-10, 1e-17, 1e-10), &PackingConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PackingError::TooManyPieces {
                count: 10_000_000,
                limit: 100_000
            }
        );
    }

    #[test_case(0.0, 100.0, 10.0, 10.0, "sheetWidth"; "zero sheet width")]
    #[test_case(100.0, -1.0, 10.0, 10.0, "sheetHeight"; "negative sheet height")]
    #[test_case(100.0, 100.0, 0.0, 10.0, "pieceWidth"; "zero piece width")]
    #[test_case(100.0, 100.0, 10.0, f64::INFINITY, "pieceHeight"; "infinite piece height")]
    fn invalid_dimensions_are_rejected(sw: f64, sh: f64, pw: f64, ph: f64, field: &str) {
        let err = pack(&input(sw, sh, pw, ph), &PackingConfig::default()).unwrap_err();
        match err {
            PackingError::InvalidDimension { field: f, .. } => assert_eq!(f, field),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_spacing_and_margin_are_rejected() {
        let base = input(100.0, 100.0, 10.0, 10.0);
        let config = PackingConfig::default();

        let err = pack(&base.with_spacing(Spacing::new(-1.0, 0.0)), &config).unwrap_err();
        assert_eq!(
            err,
            PackingError::InvalidDimension {
                field: "spacingX",
                value: -1.0
            }
        );

        let err = pack(&base.with_margin(-0.5), &config).unwrap_err();
        assert_eq!(
            err,
            PackingError::InvalidDimension {
                field: "margin",
                value: -0.5
            }
        );

        let err = pack(&input(f64::NAN, 100.0, 10.0, 10.0), &config).unwrap_err();
        assert!(matches!(
            err,
            PackingError::InvalidDimension {
                field: "sheetWidth",
                ..
            }
        ));
    }

    #[test]
    fn exact_tiling_has_full_yield() {
        let result = pack(&input(1000.0, 1000.0, 100.0, 100.0), &PackingConfig::default()).unwrap();
        assert_eq!(result.count(), 100);
        assert_eq!((result.cols, result.rows), (10, 10));
        assert!(approx_eq!(f64, result.yield_ratio, 1.0));
        assert!(approx_eq!(f64, result.wasted_area, 0.0));
    }

    #[test]
    fn normal_kept_when_it_fits_more() {
        let input = input(210.0, 100.0, 60.0, 90.0);

        let candidates = evaluate(&input, &PackingConfig::default()).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].count(), 3);
        assert_eq!(candidates[1].orientation, Orientation::Rotated);
        assert_eq!(candidates[1].count(), 2);

        let result = pack(&input, &PackingConfig::default()).unwrap();
        assert_eq!(result.orientation, Orientation::Normal);
        assert_eq!(result.count(), 3);
        let xs = result.placements.iter().map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![0.0, 60.0, 120.0]);
        assert!(result.placements.iter().all(|p| p.y == 0.0 && !p.rotated));
    }

    #[test]
    fn tie_prefers_normal_orientation() {
        //normal: 2 x 4, rotated: 4 x 2
        let result = pack(&input(100.0, 100.0, 50.0, 25.0), &PackingConfig::default()).unwrap();
        assert_eq!(result.count(), 8);
        assert_eq!(result.orientation, Orientation::Normal);
        assert_eq!((result.cols, result.rows), (2, 4));
    }

    #[test]
    fn disabled_rotation_is_never_evaluated() {
        let input = input(100.0, 50.0, 50.0, 100.0);

        let rotated = pack(&input, &PackingConfig::default()).unwrap();
        assert_eq!(rotated.count(), 1);
        assert_eq!(rotated.orientation, Orientation::Rotated);
        assert_eq!(
            (rotated.placements[0].width, rotated.placements[0].height),
            (100.0, 50.0)
        );

        assert_eq!(evaluate(&input, &no_rotation()).unwrap().len(), 1);
        let normal_only = pack(&input, &no_rotation()).unwrap();
        assert!(normal_only.is_empty());
    }

    #[test]
    fn square_piece_is_evaluated_once() {
        let candidates = evaluate(&input(100.0, 80.0, 20.0, 20.0), &PackingConfig::default()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].count(), 20);
    }

    #[test]
    fn too_many_pieces_is_rejected_before_allocation() {
        let err = pack(&input(1000.0, 1000.0, 1.0, 1.0), &PackingConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PackingError::TooManyPieces {
                count: 1_000_000,
                limit: 100_000
            }
        );

        let config = PackingConfig {
            max_pieces: Some(10),
            ..PackingConfig::default()
        };
        let err = pack(&input(1000.0, 1000.0, 100.0, 100.0), &config).unwrap_err();
        assert_eq!(
            err,
            PackingError::TooManyPieces {
                count: 100,
                limit: 10
            }
        );
    }

    #[test]
    fn limit_can_be_lifted() {
        let config = PackingConfig {
            max_pieces: None,
            ..PackingConfig::default()
        };
        let result = pack(&input(500.0, 500.0, 1.0, 1.0), &config).unwrap();
        assert_eq!(result.count(), 250_000);
        assert!(assertions::placements_within_sheet(&result));
        assert!(assertions::result_is_consistent(&result));
    }

    #[test]
    fn margin_offsets_the_grid() {
        let input = input(120.0, 120.0, 50.0, 50.0).with_margin(10.0);
        let result = pack(&input, &PackingConfig::default()).unwrap();

        assert_eq!(result.count(), 4);
        let origins = result
            .placements
            .iter()
            .map(|p| (p.x, p.y))
            .collect::<Vec<_>>();
        assert_eq!(
            origins,
            vec![(10.0, 10.0), (60.0, 10.0), (10.0, 60.0), (60.0, 60.0)]
        );
        assert!(approx_eq!(
            f64,
            result.yield_ratio,
            4.0 * 2500.0 / 14_400.0
        ));
    }

    #[test]
    fn margin_consuming_the_sheet_gives_empty_result() {
        let input = input(100.0, 100.0, 10.0, 10.0).with_margin(60.0);
        let result = pack(&input, &PackingConfig::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.yield_ratio, 0.0);
    }

    #[test_case(2000.0, 1000.0, 945.0, 200.0, 0.0, 10.0, 0.0; "wide strips")]
    #[test_case(210.0, 100.0, 60.0, 90.0, 0.0, 0.0, 0.0; "three tall pieces")]
    #[test_case(1220.0, 2440.0, 300.0, 400.0, 4.0, 4.0, 10.0; "plywood with kerf and trim")]
    #[test_case(997.3, 613.7, 41.9, 27.3, 2.2, 1.1, 0.0; "fractional dimensions")]
    #[test_case(100.0, 100.0, 33.3, 33.3, 0.05, 0.05, 0.0; "square with spacing")]
    fn layouts_are_valid(sw: f64, sh: f64, pw: f64, ph: f64, sx: f64, sy: f64, margin: f64) {
        init_logger();
        let input = input(sw, sh, pw, ph)
            .with_spacing(Spacing::new(sx, sy))
            .with_margin(margin);
        let result = pack(&input, &PackingConfig::default()).unwrap();

        assert!(result.count() > 0);
        assert!(assertions::placements_within_sheet(&result));
        assert!(assertions::placements_disjoint(&result));
        assert!(assertions::result_is_consistent(&result));
        assert_eq!(result.count() as u64, result.cols * result.rows);
        assert!(approx_eq!(
            f64,
            result.yield_ratio,
            result.count() as f64 * pw * ph / (sw * sh),
            epsilon = 1e-12
        ));

        //neighbouring pieces keep the requested gap
        if result.cols > 1 {
            let (a, b) = (result.placements[0], result.placements[1]);
            assert!(approx_eq!(f64, b.x - (a.x + a.width), sx, epsilon = 1e-9));
        }
        if result.rows > 1 {
            let (a, b) = (result.placements[0], result.placements[result.cols as usize]);
            assert!(approx_eq!(f64, b.y - (a.y + a.height), sy, epsilon = 1e-9));
        }
    }

    #[test]
    fn packing_is_deterministic() {
        let input = input(1220.0, 2440.0, 300.0, 400.0).with_spacing(Spacing::uniform(4.0));
        let first = pack(&input, &PackingConfig::default()).unwrap();
        let second = pack(&input, &PackingConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn count_grows_with_the_sheet() {
        let spacing = Spacing::new(3.0, 2.0);
        let config = PackingConfig::default();
        let count = |sw: f64, sh: f64| -> usize {
            pack(&input(sw, sh, 37.0, 23.0).with_spacing(spacing), &config)
                .unwrap()
                .count()
        };

        let mut previous = 0;
        for i in 0..60 {
            let c = count(20.0 + 7.0 * i as f64, 150.0);
            assert!(c >= previous, "count decreased when widening the sheet");
            previous = c;
        }

        let mut previous = 0;
        for i in 0..60 {
            let c = count(150.0, 20.0 + 7.0 * i as f64);
            assert!(c >= previous, "count decreased when heightening the sheet");
            previous = c;
        }
    }

    #[test]
    fn batch_keeps_input_order() {
        let inputs = vec![
            input(1000.0, 1000.0, 100.0, 100.0),
            input(100.0, 100.0, 0.0, 10.0),
            input(210.0, 100.0, 60.0, 90.0),
            input(100.0, 100.0, 150.0, 200.0),
        ];
        let results = pack_batch(&inputs, &PackingConfig::default());

        assert_eq!(results.len(), inputs.len());
        let counts = results
            .iter()
            .map(|r| r.as_ref().map(PackingResult::count).ok())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![Some(100), None, Some(3), Some(0)]);
        for (input, result) in inputs.iter().zip(&results) {
            if let Ok(result) = result {
                assert_eq!(&result.input, input);
            }
        }
    }
}
