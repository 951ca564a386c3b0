//! End-to-end behaviour of filled histograms

mod common;

use common::*;
use rootplots_hist::{
    ArithmeticConfig, BinLocation, BinnedContent, Error, Hist1D, Hist2D, Hist3D, HistND,
};

#[test]
fn test_hist1d_single_fill() {
    let mut h = Hist1D::new(10, 0.0, 10.0).unwrap();
    h.fill(5.0).unwrap();

    let bin = match h.axis(0).unwrap().get_bin(5.0) {
        BinLocation::Bin(i) => i,
        other => panic!("5.0 should be in range, got {other:?}"),
    };
    assert_eq!(h.cell_content(bin).unwrap(), 1.0);
    assert_eq!(h.entries(), 1);
    assert_eq!(total_content(&h), 1.0);
}

#[test]
fn test_hist2d_diagonal_projection() {
    let mut h = Hist2D::new(2, 0.0, 2.0, 2, 0.0, 2.0).unwrap();
    h.fill(0.5, 0.5).unwrap();
    h.fill(1.5, 1.5).unwrap();

    assert_eq!(h.projection_x().unwrap().cells_contents(), vec![1.0, 1.0]);
    assert_eq!(h.projection_y().unwrap().cells_contents(), vec![1.0, 1.0]);
}

#[test]
fn test_weight_accounting_with_out_of_range_fills() {
    let h = random_3d(2_000, 7);
    let stats = h.stats();

    assert_eq!(stats.entries, 2_000);
    assert!(stats.underflow_entries > 0);
    assert!(stats.overflow_entries > 0);
    assert_relative_eq!(
        total_content(&h) + stats.underflow_weight + stats.overflow_weight,
        stats.sum_of_weights,
        epsilon = EPSILON
    );
}

#[test]
fn test_projection_onto_all_axes_is_identity() {
    let h = random_3d(500, 11);
    let p = h.projection(&[0, 1, 2]).unwrap();
    assert_eq!(p.cells_contents(), h.cells_contents());
    assert_eq!(p.cells_contents_errors(), h.cells_contents_errors());
    assert_eq!(p.entries(), h.entries());
    assert_relative_eq!(p.sum_of_weights(), h.sum_of_weights(), epsilon = EPSILON);
}

#[test]
fn test_chained_projections_agree() {
    let mut h = Hist3D::new(3, 0.0, 3.0, 4, 0.0, 4.0, 5, 0.0, 5.0).unwrap();
    for i in 0..60 {
        let f = i as f64;
        h.fill_weighted(f % 3.0 + 0.5, f % 4.0 + 0.5, f % 5.0 + 0.5, 1.0 + f / 10.0)
            .unwrap();
    }

    let direct = h.projection_x().unwrap();
    let via_xy = h.projection_xy().unwrap().projection_x().unwrap();
    for (a, b) in direct.cells_contents().iter().zip(via_xy.cells_contents()) {
        assert_relative_eq!(*a, b, epsilon = EPSILON);
    }
    assert_relative_eq!(
        total_content(&h.projection_z().unwrap()),
        total_content(&*h),
        epsilon = EPSILON
    );
}

#[test]
fn test_arithmetic_keeps_operands() {
    let a = random_3d(300, 1);
    let b = random_3d(300, 2);
    let before = a.clone();

    let sum = a.add(&b).unwrap();
    for c in 0..a.cells() {
        assert_relative_eq!(
            sum.cell_content(c).unwrap(),
            a.cell_content(c).unwrap() + b.cell_content(c).unwrap(),
            epsilon = EPSILON
        );
    }
    assert_eq!(sum.entries(), 600);
    assert_eq!(a, before);

    let back = sum.subtract(&b).unwrap();
    for c in 0..a.cells() {
        assert_relative_eq!(
            back.cell_content(c).unwrap(),
            a.cell_content(c).unwrap(),
            epsilon = EPSILON
        );
    }

    let product = a.multiply(&b).unwrap();
    assert_eq!(product.entries(), a.entries());
    assert_eq!(product.title(), "random * random");
}

#[test]
fn test_division_by_empty_cell() {
    let mut num = Hist1D::new(2, 0.0, 2.0).unwrap();
    let mut den = Hist1D::new(2, 0.0, 2.0).unwrap();
    num.fill_weighted(0.5, 4.0).unwrap();
    num.fill(1.5).unwrap();
    den.fill_weighted(0.5, 2.0).unwrap();

    assert_eq!(num.divide(&den), Err(Error::DivideByZero { cell: 1 }));

    let ratio = num
        .divide_with(&den, &ArithmeticConfig::zero_on_divide_by_zero())
        .unwrap();
    assert_eq!(ratio.cells_contents(), vec![2.0, 0.0]);
    // (e1/c2)^2 + (c1 e2 / c2^2)^2 with e1 = 4, e2 = 2
    assert_relative_eq!(ratio.cell_content_error(0).unwrap(), (4.0f64 + 4.0).sqrt());
    assert_eq!(ratio.cell_content_error(1).unwrap(), 0.0);
}

#[test]
fn test_incompatible_operands() {
    let a = Hist1D::new(10, 0.0, 10.0).unwrap();
    let b = Hist1D::new(10, 0.0, 11.0).unwrap();
    let c = Hist2D::new(10, 0.0, 10.0, 1, 0.0, 1.0).unwrap();
    assert!(matches!(a.add(&b), Err(Error::IncompatibleAxes(_))));
    assert!(matches!(a.add(&c), Err(Error::IncompatibleAxes(_))));
}

#[test]
fn test_integration_with_cell_volume() {
    let mut h = Hist2D::new(4, 0.0, 2.0, 2, 0.0, 4.0).unwrap();
    // cell volume 0.5 * 2
    for (x, y) in [(0.1, 0.1), (0.6, 2.5), (1.9, 3.9), (1.9, 3.9)] {
        h.fill(x, y).unwrap();
    }

    assert_relative_eq!(h.integral_all(), 4.0);
    assert_relative_eq!(h.integral_over_bins(&[0, 0], &[1, 1]).unwrap(), 2.0);
    assert_relative_eq!(h.integral_over_pos(&[1.6, 2.1], &[1.9, 3.9]).unwrap(), 2.0);
    assert_relative_eq!(h.integral(0, h.cells() - 1).unwrap(), h.integral_all());
    assert!(matches!(
        h.integral_over_bins(&[2, 0], &[1, 1]),
        Err(Error::InvalidRange(_))
    ));
}

#[test]
fn test_reversed_positions_within_one_bin() {
    let mut h = Hist1D::new(10, 0.0, 10.0).unwrap();
    h.fill(0.5).unwrap();

    assert!(matches!(
        h.integral_over_pos(&[0.9], &[0.1]),
        Err(Error::InvalidRange(_))
    ));
    assert_relative_eq!(h.integral_over_pos(&[0.1], &[0.9]).unwrap(), 1.0);
}

#[test]
fn test_scale_normalises_integral() {
    let mut h = random_3d(1_000, 3);
    let integral = h.integral_all();
    h.scale(1.0 / integral);
    assert_relative_eq!(h.integral_all(), 1.0, epsilon = EPSILON);
}

#[test]
fn test_plotting_queries() {
    let mut h = Hist1D::new(4, 0.0, 2.0).unwrap().with_title("plot me");
    h.fill(0.25).unwrap();
    h.fill_weighted(1.25, 3.0).unwrap();

    assert_eq!(h.bins_edges(0).unwrap(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    assert_eq!(h.bins_centers(0).unwrap(), vec![0.25, 0.75, 1.25, 1.75]);
    assert_eq!(h.cells_lower_edges(false), vec![vec![0.0, 1.0]]);
    assert_eq!(h.cells_centers(false), vec![vec![0.25, 1.25]]);

    let cells = h.cells_list(false);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].content, 3.0);
    assert_relative_eq!(cells[1].error, 3.0);
    assert_eq!(h.title(), "plot me");
}

#[test]
fn test_nd_positions_validated() {
    let mut h = HistND::new(4, &[0.0; 4], &[1.0; 4], &[2, 2, 2, 2]).unwrap();
    assert_eq!(h.cells(), 16);
    assert!(matches!(h.fill(&[0.5, 0.5, 0.5]), Err(Error::InvalidDomain(_))));
    assert_eq!(h.fill(&[0.9, 0.1, 0.9, 0.1]).unwrap(), Some(1 + 4));
    assert!(matches!(
        h.pos_content(&[0.5, 0.5, 0.5, 1.5]),
        Err(Error::PositionOutOfRange { axis: 3, .. })
    ));
}
