//! Free-text adapters for the lab front-ends
//!
//! Lists arrive as `"1, 2, 3"` and edge lists as `"A,B;B,C"`. These helpers
//! turn them into the typed inputs the generators and solvers expect.

use crate::graph::Graph;
use crate::{LabError, Result};

/// Split a comma-separated list into trimmed tokens
pub fn parse_elements(input: &str) -> Result<Vec<String>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() {
                Err(LabError::InvalidArgument(format!(
                    "Empty element in list {:?}",
                    input
                )))
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}

/// Parse `;`-separated edge pairs whose endpoints are separated by `,`
pub fn parse_edges(input: &str) -> Result<Vec<(String, String)>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match parse_elements(pair)?.as_slice() {
            [u, v] => Ok((u.clone(), v.clone())),
            _ => Err(LabError::InvalidArgument(format!(
                "Edge {:?} must have exactly two endpoints",
                pair
            ))),
        })
        .collect()
}

/// Build a graph from a vertex list and an edge list in free-text form
pub fn parse_graph(nodes: &str, edges: &str) -> Result<Graph<String>> {
    let mut graph = Graph::new();
    for node in parse_elements(nodes)? {
        graph.add_vertex(node);
    }
    for (u, v) in parse_edges(edges)? {
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elements_trims() {
        assert_eq!(parse_elements(" 1, 2 ,3").unwrap(), vec!["1", "2", "3"]);
        assert!(parse_elements("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_elements_rejects_empty_token() {
        assert!(matches!(
            parse_elements("a,,b"),
            Err(LabError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_edges() {
        let edges = parse_edges("A,B; B,C;").unwrap();
        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
        assert!(parse_edges("A,B,C").is_err());
        assert!(parse_edges("A").is_err());
    }

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph("A,B,C,D", "A,B;B,C;C,A").unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(parse_graph("A", "A,A").is_err());
    }
}
