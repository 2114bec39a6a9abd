//! Public API tests for knight moves, shortest paths and distances

use knightpath_core::board::{is_knight_move, knight_moves_from_coords};
use knightpath_core::graph::{AdjacencyGraph, KnightBoard};
use knightpath_core::{knight_moves, shortest_distances, shortest_path, Square};

const SAMPLE_GRAPH: &str = r#"{
    "A": ["B", "C", "D"],
    "B": ["E"],
    "C": ["B", "E", "F"],
    "D": ["G", "H"],
    "E": ["I"],
    "F": [],
    "G": ["J"],
    "H": [],
    "I": [],
    "J": []
}"#;

#[test]
fn test_corner_moves_as_set() {
    let mut moves = knight_moves(Square::new(0, 0));
    moves.sort();
    assert_eq!(moves, vec![Square::new(1, 2), Square::new(2, 1)]);
}

#[test]
fn test_every_square_has_in_range_moves() {
    for x in 0..8 {
        for y in 0..8 {
            let moves = knight_moves(Square::new(x, y));
            assert!((2..=8).contains(&moves.len()));
            assert!(moves.iter().all(Square::is_on_board));
        }
    }
}

#[test]
fn test_malformed_coordinates() {
    assert!(knight_moves_from_coords(&[3]).is_empty());
}

#[test]
fn test_sample_graph_from_json() {
    let graph = AdjacencyGraph::from_json_str(SAMPLE_GRAPH).unwrap();
    let distances = shortest_distances(&graph, &"A".to_string()).unwrap();

    let mut got: Vec<(String, usize)> = distances
        .iter()
        .map(|(node, d)| (node.clone(), d))
        .collect();
    got.sort();

    let expected: Vec<(String, usize)> = [
        ("A", 0),
        ("B", 1),
        ("C", 1),
        ("D", 1),
        ("E", 2),
        ("F", 2),
        ("G", 2),
        ("H", 2),
        ("I", 3),
        ("J", 3),
    ]
    .iter()
    .map(|(n, d)| (n.to_string(), *d))
    .collect();
    assert_eq!(got, expected);
}

#[test]
fn test_knight_paths() {
    assert_eq!(
        shortest_path(Square::new(0, 0), Square::new(2, 1)),
        Some(vec![Square::new(0, 0), Square::new(2, 1)])
    );

    let long = shortest_path(Square::new(0, 0), Square::new(7, 7)).unwrap();
    assert_eq!(long.len(), 7);
    assert!(long.windows(2).all(|w| is_knight_move(w[0], w[1])));
}

#[test]
fn test_board_is_connected() {
    let distances = shortest_distances(&KnightBoard, &Square::new(7, 0)).unwrap();
    assert_eq!(distances.len(), 64);
    assert_eq!(distances.max_distance(), 6);
}
