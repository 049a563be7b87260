#[cfg(test)]
mod tests {
    use maxrec::entities::{Orientation, Piece, Placement, Sheet};
    use maxrec::geometry::Rect;
    use maxrec::geometry::geo_traits::{AlmostContains, AlmostOverlapsWith};
    use maxrec::util::FPA;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    #[test]
    fn rect_dimensions() {
        let r = rect(10.0, 20.0, 40.0, 60.0);
        assert_eq!((r.width(), r.height()), (30.0, 40.0));
        assert_eq!(r.area(), 1200.0);
        assert_eq!(Sheet::new(30.0, 40.0).area(), 1200.0);
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 20.0, 10.0);
        let c = rect(5.0, 5.0, 15.0, 15.0);

        assert!(!a.almost_overlaps_with(&b));
        assert!(a.almost_overlaps_with(&c));
        assert!(c.almost_overlaps_with(&b));
    }

    #[test]
    fn containment_tolerates_rounding() {
        let sheet = Sheet::new(0.3, 1.0).bbox();
        //three pieces of 0.1 end at 0.30000000000000004
        let last = Placement {
            x: 0.1 + 0.1,
            y: 0.0,
            width: 0.1,
            height: 1.0,
            rotated: false,
        };
        assert!(last.rect().x_max > 0.3);
        assert!(sheet.almost_contains(&last.rect()));
        assert!(FPA(last.rect().x_max) == FPA(0.3));
    }

    #[test]
    fn tolerance_scales_with_the_values() {
        assert!(FPA(1e-9) != FPA(1.9e-9));
        assert!(FPA(1e-9) < FPA(1.9e-9));
        assert!(FPA(1e9) == FPA(1e9 + 1e-3));
        assert!(FPA(1e12) != FPA(1e12 + 1e4));
        assert!(FPA(0.0) == FPA(0.0));
    }

    #[test]
    fn shrinking_past_the_centre_leaves_nothing() {
        let r = Sheet::new(100.0, 50.0).bbox();
        assert_eq!(
            r.shrink_by(10.0),
            Some(rect(10.0, 10.0, 90.0, 40.0))
        );
        assert_eq!(r.shrink_by(25.0), None);
    }

    #[test]
    fn rotated_footprint_swaps_dimensions() {
        let piece = Piece::new(60.0, 90.0);
        assert_eq!(piece.footprint(Orientation::Normal), (60.0, 90.0));
        assert_eq!(piece.footprint(Orientation::Rotated), (90.0, 60.0));
        assert!(!piece.is_square());
        assert_eq!(Orientation::Rotated.to_string(), "rotated");
    }
}
