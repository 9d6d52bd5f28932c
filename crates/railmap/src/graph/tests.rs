use proptest::prelude::*;

use super::*;
use crate::delaunay::{triangulate, TriangulateCfg, VertexId};
use crate::geom::Point;
use crate::sample::ReplayToken;

fn v(i: usize) -> VertexId {
    VertexId(i)
}

/// Map with `n` chained single-route connections (i, i+1), length 1 each.
fn chain_map(n: usize) -> RouteMap {
    let connections = (0..n)
        .map(|i| {
            let mut c = Connection::new(v(i), v(i + 1));
            c.routes[0] = Some(Route {
                length: 1,
                color: RouteColor::Grey,
                taken: false,
            });
            c
        })
        .collect();
    RouteMap {
        vertex_count: n + 1,
        connections,
    }
}

#[test]
fn connection_endpoints_are_normalized() {
    let c = Connection::new(v(7), v(2));
    assert_eq!((c.a, c.b), (v(2), v(7)));
    assert!(c.joins(v(7), v(2)));
    assert!(c.joins(v(2), v(7)));
    assert!(!c.joins(v(2), v(6)));
    assert_eq!(c.other(v(2)), v(7));
    assert_eq!(c.other(v(7)), v(2));
    assert_eq!(c.active_routes(), 0);
    assert_eq!(c.traversal_cost(), None);
}

#[test]
fn dedup_keeps_first_occurrence_only() {
    let list = vec![
        Connection::new(v(0), v(1)),
        Connection::new(v(1), v(2)),
        Connection::new(v(1), v(0)), // same pair, reversed
        Connection::new(v(2), v(1)),
        Connection::new(v(0), v(2)),
    ];
    let deduped = dedup_connections(list);
    assert_eq!(deduped.len(), 3);
    assert!(deduped[0].joins(v(0), v(1)));
    assert!(deduped[1].joins(v(1), v(2)));
    assert!(deduped[2].joins(v(0), v(2)));
    // Idempotent.
    assert_eq!(dedup_connections(deduped.clone()), deduped);
}

#[test]
fn unit_square_yields_five_single_route_connections() {
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let shape = triangulate(&pts, TriangulateCfg::default()).unwrap();
    let map = build_route_map(&shape, ReplayToken::new(1, 0));

    assert_eq!(map.vertex_count, 4);
    assert_eq!(map.connections.len(), 5);
    assert_eq!(map.total_active_routes(), 5);
    for c in &map.connections {
        assert_eq!(c.active_routes(), 1);
        assert!(c.routes[1].is_none());
    }

    // Four unit sides land in the bottom bucket, the sqrt(2) diagonal in
    // the top one.
    let diagonal = map.position_of(v(1), v(3)).unwrap();
    for (i, c) in map.connections.iter().enumerate() {
        let length = c.traversal_cost().unwrap();
        if i == diagonal {
            assert_eq!(length, 6);
        } else {
            assert_eq!(length, 1);
        }
    }
}

#[test]
fn length_buckets_follow_distance_brackets() {
    // Distances 1..=6 against min 1, max 6: one per bucket.
    let positions: Vec<Point> = (0..7).map(|i| Point::new(i as f64, 0.0)).collect();
    let connections: Vec<Connection> = (1..7).map(|i| Connection::new(v(0), v(i))).collect();
    let mut map = RouteMap {
        vertex_count: positions.len(),
        connections,
    };
    assign_route_lengths(&mut map, &positions);
    let lengths: Vec<u32> = map
        .connections
        .iter()
        .map(|c| c.traversal_cost().unwrap())
        .collect();
    assert_eq!(lengths, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn equal_distances_collapse_to_bucket_one() {
    let positions = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let connections = vec![
        Connection::new(v(0), v(1)),
        Connection::new(v(1), v(2)),
        Connection::new(v(2), v(3)),
        Connection::new(v(3), v(0)),
    ];
    let mut map = RouteMap {
        vertex_count: 4,
        connections,
    };
    assign_route_lengths(&mut map, &positions);
    for c in &map.connections {
        assert_eq!(c.traversal_cost(), Some(1));
    }
}

#[test]
fn color_multiset_is_the_cycled_palette_prefix() {
    // 13 active routes: full palette once plus its first three entries.
    let mut map = chain_map(13);
    assign_route_colors(&mut map, ReplayToken::new(42, 3));

    let mut counts = std::collections::HashMap::new();
    for c in &map.connections {
        for r in c.routes.iter().flatten() {
            *counts.entry(r.color).or_insert(0usize) += 1;
        }
    }
    let mut expected = std::collections::HashMap::new();
    for i in 0..13 {
        *expected.entry(PALETTE[i % PALETTE.len()]).or_insert(0usize) += 1;
    }
    assert_eq!(counts, expected);
    // Grey keeps its double weight.
    assert_eq!(counts[&RouteColor::Grey], 2);
    assert_eq!(counts[&RouteColor::Red], 2);
    assert_eq!(counts[&RouteColor::Magenta], 1);
}

#[test]
fn color_draws_replay_exactly() {
    let token = ReplayToken::new(7, 11);
    let mut a = chain_map(20);
    let mut b = chain_map(20);
    assign_route_colors(&mut a, token);
    assign_route_colors(&mut b, token);
    assert_eq!(a.connections, b.connections);

    let mut c = chain_map(20);
    assign_route_colors(&mut c, ReplayToken::new(7, 12));
    assert_ne!(a.connections, c.connections);
}

#[test]
fn traversal_cost_reads_the_first_occupied_slot() {
    let mut c = Connection::new(v(0), v(1));
    assert_eq!(c.traversal_cost(), None);
    c.routes[0] = Some(Route {
        length: 4,
        color: RouteColor::Blue,
        taken: false,
    });
    c.routes[1] = Some(Route {
        length: 4,
        color: RouteColor::Red,
        taken: true,
    });
    assert_eq!(c.traversal_cost(), Some(4));
    assert_eq!(c.active_routes(), 2);
}

proptest! {
    /// Deduplication is idempotent and never invents or reorders pairs.
    #[test]
    fn dedup_is_idempotent(raw in prop::collection::vec((0usize..20, 1usize..20), 0..60)) {
        let list: Vec<Connection> = raw
            .iter()
            .map(|&(a, k)| Connection::new(VertexId(a), VertexId((a + k) % 20)))
            .collect();
        let once = dedup_connections(list.clone());
        let twice = dedup_connections(once.clone());
        prop_assert_eq!(&once, &twice);
        // Every survivor is from the input, in input order.
        let mut cursor = 0usize;
        for c in &once {
            let found = list[cursor..].iter().position(|x| x.joins(c.a, c.b));
            prop_assert!(found.is_some());
            cursor += found.unwrap() + 1;
        }
    }
}
