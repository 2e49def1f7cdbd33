use rand::SeedableRng as _;

use crate::Error;
use crate::InvalidArgument;
use crate::Point2D;
use crate::PointSet;

fn point_set(coordinates: &[(f64, f64)]) -> PointSet {
    let mut set = PointSet::new();
    for &(x, y) in coordinates {
        set.add(x, y);
    }
    set
}

fn rng(seed: u64) -> rand_pcg::Pcg64 {
    rand_pcg::Pcg64::seed_from_u64(seed)
}

#[test]
fn test_fit_line_equations() {
    let datasets: [(&[(f64, f64)], &str); 6] = [
        (
            &[(-6., -10.), (-1., -3.), (-4., -7.), (3., 2.), (7., 8.), (11., 10.)],
            "0.78x - 0.63y - 1.29 = 0",
        ),
        (
            &[(-30., 22.), (-3., 10.), (5., 8.), (6., 3.), (7., -2.), (8., -21.)],
            "0.7x + 0.72y - 1.57 = 0",
        ),
        (
            &[(3., 8.), (4., 8.), (5., 8.), (6., 8.), (7., 8.), (8., 8.)],
            "0.0x + 1.0y - 8.0 = 0",
        ),
        (
            &[(5., 0.), (5., 1.), (5., 2.), (5., 3.), (5., 4.), (5., 5.), (5., 6.)],
            "1.0x - 0.0y - 5.0 = 0",
        ),
        (
            &[(-1., 10.), (-1., 0.), (-1., 12.), (-1., 3.), (-1., 5.), (-1., -9.), (-2., 6.)],
            "1.0x + 0.01y + 1.11 = 0",
        ),
        (
            &[(-3., 0.), (-2., 0.), (-1., 0.), (0., 0.), (5., 0.), (10., 0.), (8., -1.)],
            "0.03x + 1.0y + 0.06 = 0",
        ),
    ];

    for (coordinates, expected) in datasets {
        let line = point_set(coordinates).fit_line().unwrap();
        assert_eq!(line.to_string(), expected);
        assert_relative_eq!(line.a * line.a + line.b * line.b, 1.0, epsilon = 1e-12);

        let parsed: crate::LineEquation = expected.parse().unwrap();
        assert_eq!(parsed.to_string(), expected);
    }
}

#[test]
fn test_cluster_one_part() {
    let set = point_set(&[
        (0., 0.),
        (10., 2.),
        (3., 2.),
        (330., 20.),
        (60., -21.),
        (22., -0.2),
        (4., 9.),
    ]);

    let clusters = set.cluster(1).unwrap();

    assert_eq!(clusters.len(), set.len());
    assert!(clusters.iter().all(|&label| label == 0));
}

#[test]
fn test_cluster_invalid_part_count() {
    let set = point_set(&[(-90., 0.), (52., 3.), (4., 22.)]);

    for k in [-20, -5, 0] {
        assert_eq!(
            set.cluster(k),
            Err(Error::InvalidArgument(
                InvalidArgument::NonPositivePartCount { requested: k }
            )),
        );
    }
    assert_eq!(
        set.cluster(4),
        Err(Error::InvalidArgument(InvalidArgument::TooManyParts {
            requested: 4,
            point_count: 3,
        })),
    );
    assert!(set.cluster(3).is_ok());
}

#[test]
fn test_cluster_nearest_centroid() {
    let set = point_set(&[
        (0., 0.),
        (1., 0.),
        (0., 1.),
        (10., 10.),
        (10., 11.),
        (12., 10.),
        (12., 9.),
    ]);

    let clusters = set.cluster_with(2, rng(7)).unwrap();
    let centroids: Vec<Point2D> = clusters
        .centroids(set.points())
        .into_iter()
        .map(Option::unwrap)
        .collect();

    for (point, &label) in set.points().iter().zip(clusters.iter()) {
        let nearest = (0..centroids.len())
            .min_by(|&i, &j| {
                let di = (point - centroids[i]).norm();
                let dj = (point - centroids[j]).norm();
                f64::total_cmp(&di, &dj)
            })
            .unwrap();
        assert_eq!(label, nearest);
    }
    assert_ne!(clusters[0], clusters[3]);
}

#[test]
fn test_cluster_separated_groups() {
    let groups = [
        [(0., 10.), (1., 11.), (-1., 9.), (0.5, 10.5)],
        [(20., -10.), (21., -9.), (19., -11.), (20.5, -10.)],
        [(20., 20.), (21., 21.), (19., 19.), (20., 21.)],
    ];
    let set: PointSet = groups
        .iter()
        .flatten()
        .map(|&(x, y)| Point2D::new(x, y))
        .collect();

    for seed in 0..8 {
        let clusters = set.cluster_with(3, rng(seed)).unwrap();
        let group_labels: Vec<usize> = clusters.chunks(4).map(|chunk| chunk[0]).collect();

        for (chunk, &label) in clusters.chunks(4).zip(&group_labels) {
            assert!(chunk.iter().all(|&l| l == label));
        }
        assert_ne!(group_labels[0], group_labels[1]);
        assert_ne!(group_labels[0], group_labels[2]);
        assert_ne!(group_labels[1], group_labels[2]);
        assert_eq!(clusters.sizes(), vec![4, 4, 4]);
    }
}

#[test]
fn test_cluster_many_parts() {
    let set = point_set(&[
        (-1., 10.),
        (-1., 11.),
        (0., 12.),
        (1., 14.),
        (2., 13.),
        (2., 2.),
        (-1., 1.),
        (0., 1.),
        (-2., 2.),
        (-1., 1.),
        (22., -12.),
        (21., -11.),
        (19., -13.),
        (23., -12.),
        (20., -11.),
        (22., 25.),
        (21., 22.),
        (19., 23.),
        (23., 21.),
        (20., 20.),
        (-22., 19.),
        (-21., 19.),
        (-19., 19.),
        (-23., 20.),
        (-20., 20.),
    ]);

    let clusters = set.cluster(5).unwrap();

    assert_eq!(clusters.len(), 25);
    assert_eq!(clusters.part_count(), 5);
    assert!(clusters.iter().all(|&label| label < 5));
    assert_eq!(clusters.sizes().iter().sum::<usize>(), 25);
}
